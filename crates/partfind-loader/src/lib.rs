//! partfind-loader: Workbook ingestion and the explicitly owned index cache.

pub mod cache;
pub mod fingerprint;
pub mod workbook;

pub use cache::{IndexCache, Refresh};
pub use fingerprint::SourceFingerprint;
pub use workbook::WorkbookLoader;
