//! Application layer
//!
//! Use-case services orchestrating the repositories.

pub mod dto;
pub mod services;

use thiserror::Error;

use crate::ports::RepositoryError;

pub use dto::{
    AddLeadCommand, AddSpendCommand, CreateClientCommand, SaveFormCommand, UpdateClientCommand,
};
pub use services::{ClientService, FormService, LeadService, SpendService};

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account suspended")]
    AccountSuspended,

    #[error("repository error: {0}")]
    Repository(String),
}

impl From<RepositoryError> for UseCaseError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err.to_string())
    }
}
