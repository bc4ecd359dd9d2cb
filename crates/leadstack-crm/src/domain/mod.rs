//! Domain model

pub mod client;
pub mod lead;
pub mod saved_form;
pub mod spend;

pub use client::{ClientAccount, User, UserRole, UserStatus};
pub use lead::{Lead, LeadStatus, Note};
pub use saved_form::SavedForm;
pub use spend::{AdPlatform, AdSpend};
