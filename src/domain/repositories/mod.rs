//! Store trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod mapping_store;

pub use mapping_store::MappingStore;

#[cfg(test)]
pub use mapping_store::MockMappingStore;
