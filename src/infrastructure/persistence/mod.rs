//! Store implementations.
//!
//! Concrete implementations of the domain store trait.
//!
//! # Backends
//!
//! - [`RedisStore`] - shared Redis backend used in production
//! - [`MemoryStore`] - in-process backend for tests and local development

pub mod memory_store;
pub mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
