//! # valuecast Adapter Layer
//!
//! Outbound adapters around the domain overlay (Hexagonal Architecture).
//!
//! ## Structure
//!
//! - `repository/` - `AttributeStore` implementations
//! - `value/` - Built-in value objects
//! - `config` - Cast declarations loaded from JSON/YAML
//! - `export` - Array/JSON export straight from the scalar store
//! - `shared_record` - Mutex-guarded record for multi-threaded hosts

pub mod config;
pub mod error;
pub mod export;
pub mod repository;
pub mod shared_record;
pub mod value;

// Re-exports
pub use config::{CastConfig, CastRegistry, ModelConfig};
pub use error::{AdapterError, Result};
pub use export::{scalar_to_json, to_array, to_json};
pub use repository::in_memory::InMemoryAttributeStore;
pub use shared_record::SharedRecord;
pub use value::{EmailAddress, Percentage};
