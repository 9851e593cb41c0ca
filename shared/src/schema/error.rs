use thiserror::Error;

/// Errors raised while validating method arguments against a parameter
/// schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Argument list length does not match the method's parameter list
    #[error("method `{method}` expects {expected} argument(s), got {actual}")]
    ArgumentCountMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    /// One argument has the wrong wire type
    #[error("method `{method}` argument {index} expects {expected}, got {actual}")]
    ArgumentTypeMismatch {
        method: String,
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
}
