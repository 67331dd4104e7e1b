//! Case-insensitive highlighting of query tokens inside result text.
//!
//! Display only: which entries match is decided by the query engine.

use crate::unique_tokens;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// A piece of result text, either plain or part of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(s) | Segment::Match(s) => s,
        }
    }
}

/// Marks occurrences of a query's tokens in arbitrary text.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Compile a highlighter for the tokens of `query`.
    pub fn new(query: &str) -> Self {
        let mut tokens = unique_tokens(query);
        // Longest first so "1000" wins over "10" at the same position.
        tokens.sort_by(|a, b| b.as_str().len().cmp(&a.as_str().len()));

        let pattern = if tokens.is_empty() {
            None
        } else {
            let alternation = tokens
                .iter()
                .map(|t| regex::escape(t.as_str()))
                .collect::<Vec<_>>()
                .join("|");
            match RegexBuilder::new(&alternation).case_insensitive(true).build() {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!("Highlight pattern rejected: {e}");
                    None
                }
            }
        };

        Self { pattern }
    }

    /// Byte ranges of non-overlapping matches, left to right.
    pub fn ranges(&self, text: &str) -> Vec<Range<usize>> {
        match &self.pattern {
            Some(re) => re.find_iter(text).map(|m| m.range()).collect(),
            None => Vec::new(),
        }
    }

    /// Split `text` into plain and matched segments covering all of it.
    pub fn segments<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for range in self.ranges(text) {
            if range.start > cursor {
                segments.push(Segment::Plain(&text[cursor..range.start]));
            }
            segments.push(Segment::Match(&text[range.clone()]));
            cursor = range.end;
        }

        if cursor < text.len() {
            segments.push(Segment::Plain(&text[cursor..]));
        }

        segments
    }

    /// Render `text` with each match passed through `mark`.
    pub fn render(&self, text: &str, mut mark: impl FnMut(&str) -> String) -> String {
        let mut out = String::with_capacity(text.len());
        for segment in self.segments(text) {
            match segment {
                Segment::Plain(s) => out.push_str(s),
                Segment::Match(s) => out.push_str(&mark(s)),
            }
        }
        out
    }
}
