//! Platform scheme detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::{SchemeListener, SchemeSignal, SignalError, WatchId};
use crate::mode::ColorMode;

/// The operating system's reported color scheme.
///
/// Detection is a point-in-time query; the platform layer exposes no change
/// feed, so [`SchemeSignal::watch`] reports [`SignalError::Unavailable`] and
/// consumers keep the mode resolved at initialization. Hosts that do receive
/// scheme events from their windowing toolkit can bridge them through a
/// [`super::ManualScheme`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsScheme;

impl OsScheme {
    pub fn new() -> Self {
        Self
    }
}

impl SchemeSignal for OsScheme {
    fn current(&self) -> ColorMode {
        match detect_os_theme() {
            OsThemeMode::Dark => ColorMode::Dark,
            OsThemeMode::Light => ColorMode::Light,
        }
    }

    fn watch(&self, _listener: SchemeListener) -> Result<WatchId, SignalError> {
        Err(SignalError::Unavailable)
    }

    fn unwatch(&self, _id: WatchId) {}
}
