use thiserror::Error;

/// Domain failures reported back to callers as failure results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeError {
    #[error("entry not found: {0}")]
    EntryNotFound(u64),

    #[error("content must not be empty")]
    EmptyContent,
}
