//! # valuecast Domain Layer
//!
//! Lets a record present selected scalar attributes as value objects while the
//! stored representation stays a plain scalar.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Scalar, FieldValue, ValueObject, Record       ││
//! │  │  repository/- AttributeStore port (not implementations)     ││
//! │  │  service/   - CastOverlay (lazy build, cache, invalidate)   ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! The overlay does not know how attributes are persisted, exported or
//! configured. Those are adapter concerns.

pub mod error;
pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::CastError;

pub use model::{
    cast::{factory_for, Cast, CastDeclaration, CastFactory},
    field_value::FieldValue,
    record::{Record, RecordType},
    scalar::Scalar,
    value_object::{CastValue, ValueObject},
};

pub use repository::attribute_store::AttributeStore;

pub use service::cast_overlay::CastOverlay;
