//! The searchable index: entries plus their token postings.

use crate::{unique_tokens, EntryId, EntryTable, MatchPolicy, PostingIndex, Query, QueryEngine};
use tracing::debug;

/// In-memory inverted index over an ordered list of descriptions.
///
/// Built once from the full entry list and read-only afterwards. To pick up
/// new data, build a fresh index and replace the old value.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: EntryTable,
    postings: PostingIndex,
}

impl SearchIndex {
    /// Build an index from entries in order; position `i` is the `i`th entry.
    pub fn build<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = EntryTable::new();
        let mut postings = PostingIndex::new();

        for entry in entries {
            let entry = entry.as_ref();
            let id = table.insert(entry);
            postings.add(id, unique_tokens(entry));
        }

        debug!(
            entries = table.len(),
            tokens = postings.token_count(),
            "Search index built"
        );

        Self {
            entries: table,
            postings,
        }
    }

    /// Replace the whole index with one built from `entries`.
    ///
    /// The new index is assembled first and swapped in with one assignment.
    pub fn rebuild<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        *self = Self::build(entries);
    }

    /// Entries matching every token of `query`, in position order.
    pub fn search(&self, query: &str) -> Vec<&str> {
        QueryEngine::new(self)
            .with_policy(MatchPolicy::AllTokens)
            .matching_ids(&Query::new(query))
            .into_iter()
            .filter_map(|id| self.entries.get(id))
            .collect()
    }

    /// Entry text at a position.
    pub fn entry(&self, id: EntryId) -> Option<&str> {
        self.entries.get(id)
    }

    pub fn postings(&self) -> &PostingIndex {
        &self.postings
    }

    /// Number of entries, including ones without any token.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.postings.token_count()
    }

    pub fn posting_count(&self) -> usize {
        self.postings.posting_count()
    }

    /// Approximate heap bytes held by the index.
    pub fn allocated_bytes(&self) -> usize {
        self.entries.allocated_bytes() + self.postings.allocated_bytes()
    }
}
