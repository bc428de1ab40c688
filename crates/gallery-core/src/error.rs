//! Error types for gallery operations.

use thiserror::Error;

/// Errors that can occur while operating on a [`Gallery`](crate::Gallery).
///
/// `NotFound` and `Empty` are reported outcomes: the gallery is left exactly
/// as it was. `OutOfMemory` is the only fault and should not be swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// No entry with this name exists.
    #[error("photo '{name}' not found")]
    NotFound { name: String },

    /// The operation needs at least one entry.
    #[error("gallery is empty")]
    Empty,

    /// The entry arena could not grow to hold another slot.
    #[error("out of memory: cannot allocate slot {requested}")]
    OutOfMemory { requested: usize },
}

impl GalleryError {
    /// Returns `true` for outcomes that leave the gallery usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GalleryError::OutOfMemory { .. })
    }
}

/// Convenience alias for gallery results.
pub type GalleryResult<T> = std::result::Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_photo() {
        let err = GalleryError::NotFound { name: "beach".into() };
        assert_eq!(err.to_string(), "photo 'beach' not found");
    }

    #[test]
    fn only_out_of_memory_is_fatal() {
        assert!(GalleryError::Empty.is_recoverable());
        assert!(GalleryError::NotFound { name: String::new() }.is_recoverable());
        assert!(!GalleryError::OutOfMemory { requested: 1 }.is_recoverable());
    }
}
