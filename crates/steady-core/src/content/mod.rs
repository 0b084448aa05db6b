//! Token sequences fed to the frame builder.

pub mod text_utils;

use alloc::{string::String, vec::Vec};
use core::ops::Deref;

use crate::app::SessionError;

/// How raw text is split into tokens.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Granularity {
    /// Split on line-breaking whitespace only; a token may hold several
    /// space separated words.
    #[default]
    LineBreaks,
    /// Split on every whitespace character, one word per token.
    Whitespace,
}

impl Granularity {
    fn splits_on(self, c: char) -> bool {
        match self {
            Self::LineBreaks => c.is_whitespace() && c != ' ',
            Self::Whitespace => c.is_whitespace(),
        }
    }
}

/// Split `text` into tokens.
///
/// Tokens are trimmed, inner runs of spaces collapse to a single space and
/// empty tokens are dropped.
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<String> {
    text.split(|c| granularity.splits_on(c))
        .filter_map(|field| {
            let mut token = String::with_capacity(field.len());
            for word in field.split(' ').filter(|word| !word.is_empty()) {
                if !token.is_empty() {
                    token.push(' ');
                }
                token.push_str(word);
            }
            (!token.is_empty()).then_some(token)
        })
        .collect()
}

/// Non-empty, immutable token sequence owned by a reader session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tokens {
    items: Vec<String>,
}

impl Tokens {
    /// Wrap `items`, dropping blank entries. Fails when nothing is left.
    pub fn new(mut items: Vec<String>) -> Result<Self, SessionError> {
        items.retain(|item| !item.trim().is_empty());
        if items.is_empty() {
            return Err(SessionError::NoContent);
        }
        Ok(Self { items })
    }

    pub fn from_text(text: &str, granularity: Granularity) -> Result<Self, SessionError> {
        Self::new(tokenize(text, granularity))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl Deref for Tokens {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Call me  Ishmael.\nSome years ago,\tnever mind\r\n\n  how long ";

    #[test]
    fn line_tokens_keep_spaces() {
        let tokens = tokenize(TEXT, Granularity::LineBreaks);
        assert_eq!(
            tokens,
            ["Call me Ishmael.", "Some years ago,", "never mind", "how long"]
        );
    }

    #[test]
    fn word_tokens_split_everything() {
        let tokens = tokenize(TEXT, Granularity::Whitespace);
        assert_eq!(tokens.len(), 10);
        assert_eq!(tokens[2], "Ishmael.");
        assert_eq!(tokens[9], "long");
    }

    #[test]
    fn blank_text_has_no_content() {
        assert_eq!(
            Tokens::from_text(" \n\t ", Granularity::Whitespace),
            Err(SessionError::NoContent)
        );
    }

    #[test]
    fn tokens_deref_to_slice() {
        let tokens = Tokens::from_text("a b c", Granularity::Whitespace).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(&tokens[1], "b");
    }

    #[test]
    fn blank_tokens_are_dropped() {
        let items = ["", "abc", "  ", "de"].map(String::from).to_vec();
        let tokens = Tokens::new(items).unwrap();
        assert_eq!(tokens.as_slice(), ["abc", "de"]);

        let blank = ["", " "].map(String::from).to_vec();
        assert_eq!(Tokens::new(blank), Err(SessionError::NoContent));
    }
}
