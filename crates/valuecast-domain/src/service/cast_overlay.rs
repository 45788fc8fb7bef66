//! CastOverlay - Value objects on top of a scalar attribute store
//!
//! ```text
//! get(key)                               set(key, value)
//!   │                                      │
//!   ├─ undeclared ─▶ read_raw              ├─ Object ─▶ write_raw(to_scalar)
//!   ├─ null / "" ──▶ Null                  │             read_raw == written?
//!   ├─ cached ─────▶ same Arc              │               yes ─▶ cache object
//!   └─ construct ──▶ cache, return         │               no ──▶ drop entry
//!                                          └─ scalar ─▶ drop entry, write_raw
//! ```
//!
//! Each field is either absent from the cache or holds exactly one value
//! object. Reads never overwrite a populated entry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CastError;
use crate::model::cast::CastDeclaration;
use crate::model::field_value::FieldValue;
use crate::model::value_object::ValueObject;
use crate::repository::attribute_store::AttributeStore;

/// Per-record cache of materialized value objects
///
/// Holds no reference to the store or the declaration. The owning record
/// passes both in, which keeps one overlay per record instance.
#[derive(Debug, Default)]
pub struct CastOverlay {
    cache: HashMap<String, Arc<dyn ValueObject>>,
}

impl CastOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field
    ///
    /// Declared fields come back as `Null` or `Object`. Construction
    /// failures are returned as-is and leave the cache untouched.
    pub fn get<S>(
        &mut self,
        casts: &CastDeclaration,
        store: &S,
        key: &str,
    ) -> Result<FieldValue, CastError>
    where
        S: AttributeStore + ?Sized,
    {
        let Some(cast) = casts.get(key) else {
            return Ok(store.read_raw(key).into());
        };

        // Let the store's own read-side transformation run first.
        let raw = store.read_raw(key);
        if raw.is_empty() {
            return Ok(FieldValue::Null);
        }

        if let Some(cached) = self.cache.get(key) {
            return Ok(FieldValue::Object(Arc::clone(cached)));
        }

        let object = cast.construct(&raw).map_err(|e| e.for_field(key))?;
        self.cache.insert(key.to_string(), Arc::clone(&object));
        Ok(FieldValue::Object(object))
    }

    /// Write a field
    pub fn set<S>(&mut self, casts: &CastDeclaration, store: &mut S, key: &str, value: FieldValue)
    where
        S: AttributeStore + ?Sized,
    {
        match value {
            FieldValue::Object(object) => {
                let scalar = object.to_scalar();
                store.write_raw(key, scalar.clone());

                if !casts.is_declared(key) {
                    return;
                }

                // Typed comparison: the store must give back exactly what was written.
                if store.read_raw(key) == scalar {
                    self.cache.insert(key.to_string(), object);
                } else {
                    self.cache.remove(key);
                }
            }
            plain => {
                self.cache.remove(key);
                store.write_raw(key, plain.to_scalar());
            }
        }
    }

    // ========== Cache Introspection ==========

    pub fn is_cached(&self, key: &str) -> bool {
        self.cache.contains_key(key)
    }

    /// Drop the cached object for `key`
    pub fn forget(&mut self, key: &str) {
        self.cache.remove(key);
    }

    pub fn forget_all(&mut self) {
        self.cache.clear();
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
