use cortex_client::SessionsClient;
use cortex_core::Profile;

use crate::output::{Outcome, Report, settle};

pub async fn run(
    client: &SessionsClient,
    profile: &Profile,
    session_id: &str,
    instance_id: &str,
) -> anyhow::Result<Report> {
    let outcome = settle(
        client
            .add_data_to_session(&profile.token, session_id, instance_id)
            .await,
    )?;
    Ok(render(outcome))
}

#[must_use]
pub fn render(outcome: Outcome) -> Report {
    match outcome {
        Ok(_) => Report::Success("Data successfully added to session.".into()),
        Err(failure) => Report::Failure(failure.line("Failed to add data to session")),
    }
}
