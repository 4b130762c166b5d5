pub mod dispatch;
pub mod jobs;
pub mod login;
pub mod secrets;
pub mod sessions;
