//! Leadstack CRM
//!
//! Lead-management domain behind the agency dashboard: client accounts and
//! their users, inbound leads with notes, advertising spend records, and
//! saved form-generator configurations.
//!
//! ## Architecture
//!
//! - **Domain**: aggregates and records mirroring the remote store's rows
//! - **Ports**: async repository traits the store adapter implements
//! - **Application**: use-case services orchestrating the repositories
//! - **Infrastructure**: in-memory repositories backing the test suite
//!
//! The remote store itself is an external collaborator; repositories model
//! its table operations, nothing more.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{
    ClientService, FormService, LeadService, SpendService, UseCaseError,
};
pub use domain::{
    AdPlatform, AdSpend, ClientAccount, Lead, LeadStatus, Note, SavedForm, User, UserRole,
    UserStatus,
};
pub use ports::{
    ClientRepository, FormRepository, LeadRepository, RepositoryError, SpendRepository,
    UserRepository,
};
