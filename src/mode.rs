//! The color mode primitive.

use serde::{Deserialize, Serialize};

/// The color mode currently governing which visual palette is shown.
///
/// This is always a derived value: either the user's persisted override or
/// the OS-reported scheme at the time of last resolution. It is never stored
/// directly; the persisted representation is a boolean dark flag (see
/// [`crate::StoredPreference`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns `true` for [`ColorMode::Dark`].
    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Converts the persisted dark flag into a mode.
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// The boolean form used for persistence.
    pub(crate) fn dark_flag(self) -> bool {
        self.is_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
    }

    #[test]
    fn test_dark_flag_round_trip() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(ColorMode::from_dark_flag(mode.dark_flag()), mode);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ColorMode::Dark).unwrap(), "\"dark\"");
        let parsed: ColorMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ColorMode::Light);
    }
}
