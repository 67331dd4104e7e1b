//! Token → entry inverted index.

use crate::{EntryId, Token};
use hashbrown::HashMap;

/// Inverted index from token to the entries containing it.
///
/// Posting lists are ascending and duplicate-free as long as entries are
/// added in increasing `EntryId` order, which `SearchIndex::build` does.
#[derive(Debug, Clone, Default)]
pub struct PostingIndex {
    postings: HashMap<Token, Vec<EntryId>>,
}

impl PostingIndex {
    /// Create a new empty posting index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry under each of its distinct tokens.
    pub fn add(&mut self, entry_id: EntryId, unique_tokens: Vec<Token>) {
        for token in unique_tokens {
            let list = self.postings.entry(token).or_default();
            debug_assert!(list.last().map_or(true, |&last| last < entry_id));
            list.push(entry_id);
        }
    }

    /// Posting list for a token, empty when the token is unknown.
    pub fn postings(&self, token: &str) -> &[EntryId] {
        self.postings.get(token).map_or(&[], Vec::as_slice)
    }

    /// Entries containing every given token, ascending.
    pub fn intersect(&self, tokens: &[Token]) -> Vec<EntryId> {
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut lists = Vec::with_capacity(tokens.len());
        for token in tokens {
            match self.postings.get(token) {
                Some(list) => lists.push(list.as_slice()),
                None => return Vec::new(),
            }
        }

        // Drive the intersection from the smallest posting list.
        lists.sort_unstable_by_key(|list| list.len());
        let Some((smallest, rest)) = lists.split_first() else {
            return Vec::new();
        };

        smallest
            .iter()
            .filter(|id| rest.iter().all(|list| list.binary_search(id).is_ok()))
            .copied()
            .collect()
    }

    /// Number of distinct tokens in the index.
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// Total number of (token, entry) pairs.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }

    /// Approximate heap bytes used by the posting index.
    pub fn allocated_bytes(&self) -> usize {
        let entries_bytes = self.postings.capacity() * std::mem::size_of::<(Token, Vec<EntryId>)>();
        let control_bytes = self.postings.capacity();
        let key_bytes: usize = self.postings.keys().map(|t| t.as_str().len()).sum();
        let postings_bytes: usize = self
            .postings
            .values()
            .map(|list| list.capacity() * std::mem::size_of::<EntryId>())
            .sum();

        entries_bytes + control_bytes + key_bytes + postings_bytes
    }
}
