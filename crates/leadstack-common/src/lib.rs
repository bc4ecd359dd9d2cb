//! Leadstack shared vocabulary
//!
//! Types used by both the form compiler and the CRM layer: entity
//! identifiers and the client/service/field model that describes what a
//! lead-capture form collects.

pub mod field;
pub mod id;

pub use field::{Client, FieldType, LeadField, Service};
pub use id::EntityId;
