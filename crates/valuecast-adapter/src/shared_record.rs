//! Shared Record - A record usable from several threads
//!
//! Reads mutate the cache, so every access takes the same lock. `with`
//! runs several operations as one critical section.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;
use valuecast_domain::model::field_value::FieldValue;
use valuecast_domain::model::record::Record;
use valuecast_domain::repository::attribute_store::AttributeStore;

use crate::error::{AdapterError, Result};

/// Thread-safe handle to a record instance
///
/// Clones share the same record and the same cache.
#[derive(Debug)]
pub struct SharedRecord<S: AttributeStore> {
    inner: Arc<Mutex<Record<S>>>,
}

impl<S: AttributeStore> Clone for SharedRecord<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: AttributeStore> SharedRecord<S> {
    pub fn new(record: Record<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(record)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Record<S>>> {
        self.inner.lock().map_err(|_| {
            warn!("record lock poisoned");
            AdapterError::LockPoisoned("Failed to acquire record lock".to_string())
        })
    }

    /// Read a field
    pub fn get(&self, key: &str) -> Result<FieldValue> {
        let mut record = self.lock()?;
        Ok(record.get(key)?)
    }

    /// Write a field
    pub fn set(&self, key: &str, value: impl Into<FieldValue>) -> Result<()> {
        let mut record = self.lock()?;
        record.set(key, value);
        Ok(())
    }

    /// Run `f` while holding the record lock
    pub fn with<R>(&self, f: impl FnOnce(&mut Record<S>) -> R) -> Result<R> {
        let mut record = self.lock()?;
        Ok(f(&mut *record))
    }
}
