//! partfind-index: Tokenizer, entry table, posting index, and query engine.

pub mod entry_table;
pub mod highlight;
pub mod posting;
pub mod query;
pub mod search_index;
pub mod tokenizer;

pub use entry_table::{EntryId, EntryTable};
pub use highlight::{Highlighter, Segment};
pub use partfind_core::MatchPolicy;
pub use posting::PostingIndex;
pub use query::{ParsedQuery, Query, QueryEngine, SearchHits, SearchResult};
pub use search_index::SearchIndex;
pub use tokenizer::{tokenize, unique_tokens, Token};
