//! Attribute Store - Scalar storage behind a record
//!
//! The store may transform values in either direction (derived getters,
//! normalizing setters). The overlay only sees what `read_raw` returns.

use crate::model::scalar::Scalar;

/// Attribute Store Trait
///
/// This is a PORT in hexagonal architecture.
/// The record overlay reads and writes through it and never touches the
/// underlying attribute bag directly.
///
/// Note: No async and no errors here. Storage I/O is not the overlay's
/// concern; a store that can fail should do so at its own boundaries.
pub trait AttributeStore {
    /// Current value for `key`, after any read-side transformation.
    /// `Scalar::Null` when absent.
    fn read_raw(&self, key: &str) -> Scalar;

    /// Store `value` under `key`. The store may transform it first.
    fn write_raw(&mut self, key: &str, value: Scalar);

    /// Every stored attribute, untransformed, for export
    fn attributes(&self) -> Vec<(String, Scalar)>;
}
