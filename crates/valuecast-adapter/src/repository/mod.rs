//! Storage Adapters - AttributeStore implementations
//!
//! These implement the storage port from valuecast-domain.

pub mod in_memory;
