//! Gallery tunables: the name length limit and cursor wrap-around.

use serde::{Deserialize, Serialize};

/// Longest photo name kept, in characters. Input beyond this is dropped.
pub const DEFAULT_MAX_NAME_CHARS: usize = 49;

/// Tunables for a [`Gallery`](crate::Gallery).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Names are truncated to this many characters on insert and delete.
    pub max_name_chars: usize,
    /// When `true`, stepping past the tail lands on the head and stepping
    /// before the head lands on the tail. When `false` the cursor clamps.
    pub wrap_around: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            max_name_chars: DEFAULT_MAX_NAME_CHARS,
            wrap_around: false,
        }
    }
}

impl GalleryConfig {
    /// Default name limit with wrap-around navigation.
    pub fn wrapping() -> Self {
        Self {
            wrap_around: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = GalleryConfig::default();
        assert_eq!(c.max_name_chars, 49);
        assert!(!c.wrap_around);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let c: GalleryConfig = serde_json::from_str(r#"{"wrap_around": true}"#).unwrap();
        assert_eq!(c, GalleryConfig::wrapping());
    }
}
