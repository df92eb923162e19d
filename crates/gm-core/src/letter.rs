//! Validated letters of the guessing alphabet.

/// A single uppercase letter A-Z.
///
/// The only way to obtain one is [`Letter::new`], which normalizes case and
/// rejects anything outside the alphabet, so every guess that reaches the
/// round logic is already well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter(char);

impl Letter {
    /// Normalize a character to an uppercase letter, if it is one.
    pub fn new(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        upper.is_ascii_uppercase().then_some(Self(upper))
    }

    /// The underlying uppercase character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// All 26 letters in alphabetical order.
    pub fn all() -> impl Iterator<Item = Self> {
        ('A'..='Z').map(Self)
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_is_normalized() {
        assert_eq!(Letter::new('g'), Letter::new('G'));
        assert_eq!(Letter::new('g').unwrap().as_char(), 'G');
    }

    #[test]
    fn non_letters_rejected() {
        assert!(Letter::new('3').is_none());
        assert!(Letter::new(' ').is_none());
        assert!(Letter::new('-').is_none());
        assert!(Letter::new('ß').is_none());
    }

    #[test]
    fn alphabet_is_complete() {
        let all: Vec<Letter> = Letter::all().collect();
        assert_eq!(all.len(), 26);
        assert_eq!(all[0].as_char(), 'A');
        assert_eq!(all[25].as_char(), 'Z');
    }

    #[test]
    fn display_is_the_letter() {
        assert_eq!(Letter::new('q').unwrap().to_string(), "Q");
    }
}
