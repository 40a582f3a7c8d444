use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please enter a valid number (got '{0}')")]
    InvalidNumber(String),

    #[error("Invalid option: '{0}'")]
    InvalidOption(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Domain(DomainError),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Recoverable errors are reported to the operator and the menu loop
    /// carries on. Anything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::InvalidNumber(_) | AppError::InvalidOption(_) => true,
            AppError::Domain(e) => matches!(
                e,
                DomainError::ProductNotFound(_)
                    | DomainError::InsufficientStock { .. }
                    | DomainError::InvalidQuantity(_)
                    | DomainError::EmptyCart
                    | DomainError::Storage(_)
            ),
            AppError::Config(_) | AppError::Io(_) => false,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::Domain(e)
    }
}
