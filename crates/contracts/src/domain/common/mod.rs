//! Common types and traits for all resource records

pub mod lookups;
pub mod resource;

// Re-exports
pub use lookups::{LookupKind, Lookups};
pub use resource::{or_na, RecordId, Resource, NOT_AVAILABLE};
