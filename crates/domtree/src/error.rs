use thiserror::Error;

/// Error type for selector parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector string was empty.
    #[error("empty selector")]
    Empty,
    /// A token in the selector could not be parsed.
    #[error("invalid selector '{selector}' at '{rest}'")]
    Invalid {
        /// The full selector string.
        selector: String,
        /// The unparsed remainder where parsing stopped.
        rest: String,
    },
}
