//! Query parsing and execution against a `SearchIndex`.

use crate::{unique_tokens, EntryId, MatchPolicy, SearchIndex, Token};
use serde::Serialize;

/// A search query.
#[derive(Debug, Clone)]
pub struct Query {
    /// The raw text typed by the user.
    pub term: String,
    /// Maximum number of results. `None` returns every match.
    pub limit: Option<usize>,
}

impl Query {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// True when the term holds no word characters at all.
    pub fn is_blank(&self) -> bool {
        unique_tokens(&self.term).is_empty()
    }
}

/// A search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Position of the entry in the source list.
    pub position: u32,
    /// The entry text, as loaded.
    pub text: String,
}

/// Results of one query: the shown (possibly limited) results and the
/// number of entries that matched before the limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHits {
    pub total: usize,
    pub results: Vec<SearchResult>,
}

/// A query reduced to token groups: an entry matches when it contains every
/// token of at least one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    groups: Vec<Vec<Token>>,
}

impl ParsedQuery {
    pub fn parse(term: &str, policy: MatchPolicy) -> Self {
        let groups: Vec<Vec<Token>> = match policy {
            MatchPolicy::AllTokens => vec![unique_tokens(term)],
            MatchPolicy::SlashAlternatives => term.split('/').map(unique_tokens).collect(),
        };

        Self {
            groups: groups.into_iter().filter(|g| !g.is_empty()).collect(),
        }
    }

    pub fn groups(&self) -> &[Vec<Token>] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Query engine that searches the index.
pub struct QueryEngine<'a> {
    index: &'a SearchIndex,
    policy: MatchPolicy,
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine with the default policy.
    pub fn new(index: &'a SearchIndex) -> Self {
        Self {
            index,
            policy: MatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Execute a search query, keeping the match count alongside the
    /// limited results. The postings are intersected once.
    pub fn run(&self, query: &Query) -> SearchHits {
        let mut ids = self.matching_ids(query);
        let total = ids.len();
        if let Some(limit) = query.limit {
            ids.truncate(limit);
        }

        let results = ids
            .into_iter()
            .filter_map(|id| {
                self.index.entry(id).map(|text| SearchResult {
                    position: id.0,
                    text: text.to_string(),
                })
            })
            .collect();

        SearchHits { total, results }
    }

    /// Execute a search query. Results are in ascending position order.
    pub fn search(&self, query: &Query) -> Vec<SearchResult> {
        self.run(query).results
    }

    /// Positions matching the query, ascending and without duplicates.
    pub fn matching_ids(&self, query: &Query) -> Vec<EntryId> {
        let parsed = ParsedQuery::parse(&query.term, self.policy);
        let postings = self.index.postings();

        match parsed.groups() {
            [] => Vec::new(),
            [only] => postings.intersect(only),
            groups => {
                let mut ids: Vec<EntryId> = groups
                    .iter()
                    .flat_map(|group| postings.intersect(group))
                    .collect();
                ids.sort_unstable();
                ids.dedup();
                ids
            }
        }
    }
}
