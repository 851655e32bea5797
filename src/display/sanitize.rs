//! Terminal-safe text
//!
//! Descriptions are typed by the user and end up on a terminal. A stray
//! escape byte could recolor the screen, move the cursor or rewrite the
//! window title, so every piece of user text goes through [`SafeText`]
//! before any renderer sees it.

use std::fmt;

/// Shown in place of a character that cannot be printed safely
pub const REPLACEMENT: char = '\u{FFFD}';

/// Text with control and bidi-override characters neutralised
///
/// The only way to build one is [`SafeText::new`], so a renderer that takes
/// `SafeText` cannot be handed raw input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeText(String);

impl SafeText {
    pub fn new(raw: &str) -> Self {
        let cleaned = raw
            .chars()
            .map(|c| match c {
                '\t' | '\n' | '\r' => ' ',
                c if c.is_control() || is_bidi_control(c) => REPLACEMENT,
                c => c,
            })
            .collect();
        Self(cleaned)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' | '\u{200E}' | '\u{200F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(SafeText::new("Loyer & charges <maison>").as_str(), "Loyer & charges <maison>");
        assert_eq!(SafeText::new("Café ☕").as_str(), "Café ☕");
    }

    #[test]
    fn test_escape_sequences_neutralised() {
        let text = SafeText::new("\x1b[31mRent\x1b[0m");
        assert!(!text.as_str().contains('\x1b'));
        assert_eq!(text.as_str(), "\u{FFFD}[31mRent\u{FFFD}[0m");
    }

    #[test]
    fn test_whitespace_controls_become_spaces() {
        assert_eq!(SafeText::new("a\tb\nc\rd").as_str(), "a b c d");
    }

    #[test]
    fn test_bidi_override_replaced() {
        let text = SafeText::new("abc\u{202E}fed");
        assert_eq!(text.as_str(), "abc\u{FFFD}fed");
    }

    #[test]
    fn test_c1_controls_replaced() {
        assert_eq!(SafeText::new("x\u{9B}2Jy").as_str(), "x\u{FFFD}2Jy");
    }
}
