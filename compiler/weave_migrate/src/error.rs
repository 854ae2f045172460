//! Migration failures.
//!
//! Every variant means "no fix produced": nothing has been appended to the
//! container store and the call site is left untouched.

use thiserror::Error;

/// Failure reported by a [`ContainerStore`](crate::ContainerStore).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum StoreError {
    /// The store changed since the snapshot the caller worked from.
    #[error("container store moved from generation {expected} to {actual}")]
    Conflict { expected: u64, actual: u64 },

    #[error("container store unavailable: {0}")]
    Unavailable(String),
}

/// Why a legacy call could not be migrated.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MigrationError {
    #[error("`{0}` is not a recognized logging call")]
    NotALoggingCall(String),

    #[error("logging call is missing its {0} argument")]
    MissingArgument(&'static str),

    #[error("message template is not a compile-time string constant")]
    NonConstantTemplate,

    #[error("type information unavailable for {0}")]
    TypeUnavailable(String),

    #[error("call site could not be located after editing the container")]
    SyntaxLost,

    #[error("container store generation went backwards ({before} -> {after})")]
    NonMonotonic { before: u64, after: u64 },

    #[error("container `{container}` has used every event id up to i32::MAX")]
    EventIdsExhausted { container: String },

    #[error("container `{container}` kept changing; gave up after {attempts} attempts")]
    RetryBudgetExhausted { container: String, attempts: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}
