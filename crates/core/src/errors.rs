use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassError {
    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    #[error("Slot clash: {0}")]
    Clash(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Already submitted: {0}")]
    AlreadySubmitted(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ClassError {
    /// Errors the user can fix by editing the input and resubmitting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ClassError::InvalidSlot(_)
                | ClassError::Clash(_)
                | ClassError::Validation(_)
                | ClassError::AlreadySubmitted(_)
        )
    }
}

pub type ClassResult<T> = Result<T, ClassError>;
