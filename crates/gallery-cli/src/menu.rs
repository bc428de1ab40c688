//! Menu choices and parsing of the "Enter choice" line.

use thiserror::Error;

/// One entry of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    Delete,
    Display,
    Next,
    Previous,
    Exit,
}

/// Input on the choice prompt that does not select a menu entry.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// An integer outside 1..=6.
    #[error("Invalid Option!")]
    InvalidChoice(String),

    /// Anything that is not an integer at all.
    #[error("Invalid input: '{0}' is not a number.")]
    NotANumber(String),
}

impl MenuError {
    /// The rejected input, trimmed.
    pub fn input(&self) -> &str {
        match self {
            MenuError::InvalidChoice(text) | MenuError::NotANumber(text) => text,
        }
    }
}

impl MenuChoice {
    /// Parse one input line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Self, MenuError> {
        let text = line.trim();
        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MenuError::NotANumber(text.to_owned()));
        }

        match text.parse::<i64>() {
            Ok(1) => Ok(MenuChoice::Insert),
            Ok(2) => Ok(MenuChoice::Delete),
            Ok(3) => Ok(MenuChoice::Display),
            Ok(4) => Ok(MenuChoice::Next),
            Ok(5) => Ok(MenuChoice::Previous),
            Ok(6) => Ok(MenuChoice::Exit),
            // Includes integers too wide for i64.
            _ => Err(MenuError::InvalidChoice(text.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_choice() {
        let expected = [
            MenuChoice::Insert,
            MenuChoice::Delete,
            MenuChoice::Display,
            MenuChoice::Next,
            MenuChoice::Previous,
            MenuChoice::Exit,
        ];
        for (n, choice) in (1..=6).zip(expected) {
            assert_eq!(MenuChoice::parse(&n.to_string()), Ok(choice));
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(MenuChoice::parse("  3 \t"), Ok(MenuChoice::Display));
        assert_eq!(MenuChoice::parse("+4"), Ok(MenuChoice::Next));
    }

    #[test]
    fn out_of_range_integers_are_invalid_choices() {
        for input in ["0", "7", "-1", "99999999999999999999999"] {
            assert!(
                matches!(MenuChoice::parse(input), Err(MenuError::InvalidChoice(_))),
                "{input} should be an invalid choice"
            );
        }
    }

    #[test]
    fn non_numbers_are_rejected() {
        for input in ["", "abc", "3abc", "1.5", "-"] {
            assert!(
                matches!(MenuChoice::parse(input), Err(MenuError::NotANumber(_))),
                "{input:?} should not parse as a number"
            );
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(MenuError::InvalidChoice("9".into()).to_string(), "Invalid Option!");
        assert_eq!(
            MenuError::NotANumber("abc".into()).to_string(),
            "Invalid input: 'abc' is not a number."
        );
    }

    #[test]
    fn error_keeps_trimmed_input() {
        assert_eq!(MenuChoice::parse(" 42 ").unwrap_err().input(), "42");
    }
}
