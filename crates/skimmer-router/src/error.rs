use domtree::SelectorError;
use keyseq::SeqError;
use thiserror::Error;

/// Router construction errors. Registration happens once at startup; the
/// event path itself never fails.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A chord specification in the bindings table failed to parse.
    #[error(transparent)]
    Chord(#[from] SeqError),
    /// A selector in the bindings table failed to parse.
    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// Convenience result alias for router construction.
pub type Result<T> = std::result::Result<T, RouterError>;
