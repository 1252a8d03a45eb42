// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search scratch exhausted: {requested} backtrack entries requested, limit {limit}")]
    ResourceExhausted { requested: usize, limit: usize },
}
