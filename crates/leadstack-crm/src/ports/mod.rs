//! Outbound ports
//!
//! Repository traits the remote-store adapter implements. Each trait maps
//! onto one table of the hosted store; the in-memory implementations in
//! `infrastructure` back the test suite.

use async_trait::async_trait;

use leadstack_common::EntityId;

use crate::domain::{AdSpend, ClientAccount, Lead, SavedForm, User};

/// Client accounts table
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<ClientAccount>, RepositoryError>;

    async fn find_by_user(&self, user_id: &EntityId) -> Result<Option<ClientAccount>, RepositoryError>;

    async fn list(&self) -> Result<Vec<ClientAccount>, RepositoryError>;

    /// Insert or update
    async fn save(&self, client: &ClientAccount) -> Result<(), RepositoryError>;

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;
}

/// Users table
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<User>, RepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    async fn save(&self, user: &User) -> Result<(), RepositoryError>;

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;
}

/// Leads table
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Lead>, RepositoryError>;

    /// Leads for one client, row filtering being the only tenant boundary
    async fn find_by_client(&self, client_id: &EntityId) -> Result<Vec<Lead>, RepositoryError>;

    async fn save(&self, lead: &Lead) -> Result<(), RepositoryError>;

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;

    async fn delete_many(&self, ids: &[EntityId]) -> Result<(), RepositoryError>;

    async fn delete_by_client(&self, client_id: &EntityId) -> Result<(), RepositoryError>;
}

/// Ad spends table
#[async_trait]
pub trait SpendRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<AdSpend>, RepositoryError>;

    async fn find_by_client(&self, client_id: &EntityId) -> Result<Vec<AdSpend>, RepositoryError>;

    async fn save(&self, spend: &AdSpend) -> Result<(), RepositoryError>;

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;

    async fn delete_by_client(&self, client_id: &EntityId) -> Result<(), RepositoryError>;
}

/// Saved forms table
#[async_trait]
pub trait FormRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<SavedForm>, RepositoryError>;

    async fn find_by_client(&self, client_id: &EntityId) -> Result<Vec<SavedForm>, RepositoryError>;

    async fn list(&self) -> Result<Vec<SavedForm>, RepositoryError>;

    async fn save(&self, form: &SavedForm) -> Result<(), RepositoryError>;

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;
}

/// Repository error type
#[derive(Debug, Clone)]
pub enum RepositoryError {
    NotFound,
    DuplicateKey(String),
    ConnectionError(String),
    QueryError(String),
    SerializationError(String),
}

impl std::error::Error for RepositoryError {}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Entity not found"),
            Self::DuplicateKey(k) => write!(f, "Duplicate key: {}", k),
            Self::ConnectionError(e) => write!(f, "Connection error: {}", e),
            Self::QueryError(e) => write!(f, "Query error: {}", e),
            Self::SerializationError(e) => write!(f, "Serialization error: {}", e),
        }
    }
}
