//! Word tokenizer shared by indexing and querying.

use std::borrow::Borrow;
use std::fmt;

/// A normalized word: a maximal run of word characters, lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Letters, digits, and underscore (Unicode aware).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into tokens, in order of appearance, duplicates kept.
///
/// The whole text is lowercased before splitting: lowercasing can produce
/// non-word characters (`İ` becomes `i` plus a combining dot), and a query
/// must tokenize the same whatever its case.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .map(|word| Token(word.to_string()))
        .collect()
}

/// Distinct tokens of `text`, sorted.
pub fn unique_tokens(text: &str) -> Vec<Token> {
    let mut tokens = tokenize(text);
    tokens.sort_unstable();
    tokens.dedup();
    tokens
}
