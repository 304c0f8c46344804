use thiserror::Error;

use crate::toast::ToastId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned by rejected view-state transitions.
pub enum StateError {
    /// A page size of zero was supplied.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    /// A page size outside the configured options was supplied.
    #[error("page size {0} is not one of the configured options")]
    UnsupportedPageSize(usize),
    /// Adding another value would exceed the multi-select limit.
    #[error("selection limit of {limit} reached")]
    SelectionLimit {
        /// Configured maximum number of selected values.
        limit: usize,
    },
    /// A toast action referenced an id that is not in the queue.
    #[error("toast {0} not found")]
    ToastNotFound(ToastId),
}
