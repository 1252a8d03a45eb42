// Tue Jan 13 2026 - Alex

pub mod error;
pub mod exact;
pub mod gapped;

pub use error::SearchError;
pub use exact::{search_naive, SearchScratch, SliceOptions};
pub use gapped::GappedMatcher;
