use thiserror::Error;

/// Error type for chord registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeqError {
    /// The chord specification string could not be parsed.
    #[error("invalid chord spec '{spec}'")]
    InvalidChordSpec {
        /// The offending specification string.
        spec: String,
    },
}
