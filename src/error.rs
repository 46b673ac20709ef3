//! Precondition violations.
//!
//! Operations such as [`lists::min`](crate::collections::lists::min) or
//! [`random::choose_n`](crate::random::choose_n) have inputs they cannot
//! produce a meaningful answer for. The plain forms panic; the `try_`
//! forms return a [`PreconditionError`] instead.

use thiserror::Error;

/// A caller broke the input contract of an operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    /// The operation needs at least one element.
    #[error("{operation} requires a non-empty sequence")]
    EmptySequence { operation: &'static str },

    /// More elements were requested than the sequence holds.
    #[error("cannot choose {requested} elements from a sequence of length {len}")]
    NotEnoughElements { requested: usize, len: usize },
}
