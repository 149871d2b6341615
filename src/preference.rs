//! Strict parsing of the persisted preference slot.
//!
//! The preference lives under one fixed key and is either a JSON boolean
//! (an explicit user override) or absent (follow the OS scheme). Anything
//! else found under the key is classified as [`StoredPreference::Corrupt`]
//! and collapsed into `Absent` at the storage boundary, so the fallback is
//! explicit rather than buried in a failed deserialization.

use crate::mode::ColorMode;

/// Storage key for the dark-mode override.
pub const PREFERENCE_KEY: &str = "darkMode";

/// Parsed state of the persisted preference slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredPreference {
    /// A valid persisted override; the OS scheme is ignored while this holds.
    Override(ColorMode),
    /// Nothing stored; the effective mode tracks the OS scheme.
    Absent,
    /// A value was stored but is not a JSON boolean.
    Corrupt,
}

impl StoredPreference {
    /// Classifies the raw value read from storage.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => StoredPreference::Absent,
            Some(text) => match serde_json::from_str::<bool>(text) {
                Ok(dark) => StoredPreference::Override(ColorMode::from_dark_flag(dark)),
                Err(_) => StoredPreference::Corrupt,
            },
        }
    }

    /// Collapses `Corrupt` into `Absent`.
    ///
    /// Called at the storage boundary: a corrupted slot behaves exactly like
    /// an empty one from that point on.
    pub fn normalized(self) -> Self {
        match self {
            StoredPreference::Corrupt => StoredPreference::Absent,
            other => other,
        }
    }

    /// The override mode, if this is a valid override.
    pub fn override_mode(self) -> Option<ColorMode> {
        match self {
            StoredPreference::Override(mode) => Some(mode),
            _ => None,
        }
    }
}

/// Encodes a mode as the JSON boolean written to storage.
pub fn encode(mode: ColorMode) -> String {
    // bool serialization cannot fail
    serde_json::to_string(&mode.dark_flag()).unwrap_or_else(|_| mode.dark_flag().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absent() {
        assert_eq!(StoredPreference::parse(None), StoredPreference::Absent);
    }

    #[test]
    fn test_parse_booleans() {
        assert_eq!(
            StoredPreference::parse(Some("true")),
            StoredPreference::Override(ColorMode::Dark)
        );
        assert_eq!(
            StoredPreference::parse(Some("false")),
            StoredPreference::Override(ColorMode::Light)
        );
    }

    #[test]
    fn test_parse_corrupt_values() {
        for raw in ["banana", "\"true\"", "null", "1", "", "{}"] {
            assert_eq!(
                StoredPreference::parse(Some(raw)),
                StoredPreference::Corrupt,
                "{raw:?} should be corrupt"
            );
        }
    }

    #[test]
    fn test_normalized_collapses_corrupt() {
        assert_eq!(
            StoredPreference::Corrupt.normalized(),
            StoredPreference::Absent
        );
        assert_eq!(
            StoredPreference::Override(ColorMode::Dark).normalized(),
            StoredPreference::Override(ColorMode::Dark)
        );
        assert_eq!(StoredPreference::Absent.normalized(), StoredPreference::Absent);
    }

    #[test]
    fn test_encode_round_trips_through_parse() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            let raw = encode(mode);
            assert_eq!(
                StoredPreference::parse(Some(&raw)),
                StoredPreference::Override(mode)
            );
        }
    }

    #[test]
    fn test_override_mode() {
        assert_eq!(
            StoredPreference::Override(ColorMode::Light).override_mode(),
            Some(ColorMode::Light)
        );
        assert_eq!(StoredPreference::Absent.override_mode(), None);
        assert_eq!(StoredPreference::Corrupt.override_mode(), None);
    }
}
