use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub color: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let color = match flags.color {
        ColorMode::On => std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        ColorMode::Off => false,
    };

    let _ = UI_PREFS.set(UiPrefs { color });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { color: false })
}
