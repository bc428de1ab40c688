//! A single named photo.

use std::fmt;

/// One photo in the gallery, identified only by its name.
///
/// Names are compared byte-for-byte. Duplicates and the empty string are
/// allowed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    name: String,
}

impl Entry {
    /// Create an entry, keeping at most `max_chars` characters of `name`.
    pub fn new(name: &str, max_chars: usize) -> Self {
        Self {
            name: truncate_name(name, max_chars).to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The longest prefix of `name` that is at most `max_chars` characters.
///
/// Cuts on a character boundary, so the result is always valid UTF-8.
pub fn truncate_name(name: &str, max_chars: usize) -> &str {
    match name.char_indices().nth(max_chars) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_kept_whole() {
        assert_eq!(truncate_name("sunset", 49), "sunset");
        assert_eq!(truncate_name("", 49), "");
    }

    #[test]
    fn long_names_are_cut_to_the_limit() {
        let long = "x".repeat(80);
        assert_eq!(truncate_name(&long, 49).len(), 49);
        assert_eq!(Entry::new(&long, 49).name(), &long[..49]);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let name = "é".repeat(60);
        let cut = truncate_name(&name, 49);
        assert_eq!(cut.chars().count(), 49);
        assert_eq!(cut.len(), 98);
    }

    #[test]
    fn exact_limit_is_not_truncated() {
        let name = "a".repeat(49);
        assert_eq!(truncate_name(&name, 49), name);
    }

    #[test]
    fn display_prints_the_name() {
        assert_eq!(Entry::new("cat.jpg", 49).to_string(), "cat.jpg");
    }
}
