//! partfind-core: Core types, configuration, and logging for partfind.

pub mod build_info;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::{Config, MatchPolicy, SearchConfig, SourceConfig};
pub use error::{Error, Result};
