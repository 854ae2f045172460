use thiserror::Error;

/// Failure building a payload or a formatter.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FormatError {
    #[error("fast-path formatters take at most {max} arguments, got {arity}")]
    ArityTooLarge { arity: usize, max: usize },

    #[error("template has {placeholders} placeholders but {arity} arguments were declared")]
    PlaceholderMismatch { placeholders: usize, arity: usize },

    #[error("expected {expected} values, got {actual}")]
    ValueCountMismatch { expected: usize, actual: usize },
}
