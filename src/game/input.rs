//! Discrete input events flowing from the presentation layer into the game

use super::GuessOutcome;
use super::error::GuessError;

/// One user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputToken {
    Letter(char),
    Enter,
    Backspace,
}

impl InputToken {
    /// Map a raw key name to a token
    ///
    /// Accepts "Enter", "Backspace" and single ASCII letters; anything else
    /// (modifiers, digits, arrows) maps to `None`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::InputToken;
    ///
    /// assert_eq!(InputToken::from_key("Enter"), Some(InputToken::Enter));
    /// assert_eq!(InputToken::from_key("q"), Some(InputToken::Letter('q')));
    /// assert_eq!(InputToken::from_key("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Self::Letter(c.to_ascii_lowercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}

/// What applying a token did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEffect {
    /// Nothing changed
    Ignored,
    /// The in-progress buffer changed
    Edited,
    /// A guess was accepted and scored
    Submitted(GuessOutcome),
    /// A guess was rejected; state is unchanged
    Rejected(GuessError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_maps_letters_lowercase() {
        assert_eq!(InputToken::from_key("A"), Some(InputToken::Letter('a')));
        assert_eq!(InputToken::from_key("z"), Some(InputToken::Letter('z')));
    }

    #[test]
    fn from_key_rejects_non_letters() {
        for key in ["1", "", "ab", "Escape", "\u{e9}", " "] {
            assert_eq!(InputToken::from_key(key), None, "{key:?}");
        }
    }

    #[test]
    fn from_key_named_keys() {
        assert_eq!(InputToken::from_key("Backspace"), Some(InputToken::Backspace));
        assert_eq!(InputToken::from_key("Enter"), Some(InputToken::Enter));
    }
}
