use thiserror::Error;

/// Failures raised while building a catalog or a solver table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// Malformed or out-of-domain catalog data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested DP table cannot be allocated.
    #[error("cannot allocate a {shape} table: {reason}")]
    AllocationError { shape: String, reason: String },
}

impl KnapsackError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        KnapsackError::InvalidInput(msg.into())
    }

    /// Process exit status used by the command line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            KnapsackError::InvalidInput(_) => 1,
            KnapsackError::AllocationError { .. } => 3,
        }
    }
}

pub type KnapsackResult<T> = std::result::Result<T, KnapsackError>;
