use thiserror::Error;

/// The error type returned by fallible [`OrderedBinaryTree`][crate::OrderedBinaryTree]
/// operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An absent element (`None`) was handed to an operation that needs a real one. The tree is
    /// left untouched.
    #[error("invalid argument: absent element passed to {operation}")]
    InvalidArgument {
        /// The name of the rejecting operation, e.g. `"insert"`.
        operation: &'static str,
    },
}
