use mui_select_core_types::DriverError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("{0} must be provided")]
    NullArgument(&'static str),
    #[error("unsupported widget: {0}")]
    Configuration(String),
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("option index {index} out of range ({len} options rendered)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl SelectError {
    /// True when the failure came from the DOM port rather than the adapter.
    pub fn is_driver(&self) -> bool {
        matches!(self, SelectError::Driver(_))
    }

    pub(crate) fn multi_select_only(operation: &str) -> Self {
        SelectError::InvalidOperation(format!(
            "{} is only supported on multi-select widgets",
            operation
        ))
    }
}
