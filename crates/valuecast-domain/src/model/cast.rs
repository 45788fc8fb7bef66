//! Cast Declaration - Which fields of a record type are value objects
//!
//! Declared once per record type and shared read-only by every instance.
//! Each entry is resolved to a factory when it is declared, so an instance
//! never looks a constructor up by name at read time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CastError;
use crate::model::scalar::Scalar;
use crate::model::value_object::{CastValue, ValueObject};

/// Builds a value object from a non-empty stored scalar
pub type CastFactory = fn(&Scalar) -> Result<Arc<dyn ValueObject>, CastError>;

/// Factory for any `CastValue`
pub fn factory_for<T: CastValue>(raw: &Scalar) -> Result<Arc<dyn ValueObject>, CastError> {
    let value = T::construct(raw)?;
    Ok(Arc::new(value))
}

/// A single declared cast
#[derive(Clone, Copy)]
pub struct Cast {
    /// Name of the value object type
    value_object: &'static str,
    factory: CastFactory,
}

impl Cast {
    pub fn new(value_object: &'static str, factory: CastFactory) -> Self {
        Self {
            value_object,
            factory,
        }
    }

    pub fn value_object(&self) -> &'static str {
        self.value_object
    }

    /// Run the factory
    pub fn construct(&self, raw: &Scalar) -> Result<Arc<dyn ValueObject>, CastError> {
        (self.factory)(raw)
    }
}

impl core::fmt::Debug for Cast {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cast")
            .field("value_object", &self.value_object)
            .finish_non_exhaustive()
    }
}

/// Field name → value object constructor
#[derive(Debug, Clone, Default)]
pub struct CastDeclaration {
    casts: HashMap<String, Cast>,
}

impl CastDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: declare `field` as a `T`
    pub fn cast<T: CastValue>(self, field: impl Into<String>) -> Self {
        self.with_cast(field, Cast::new(T::NAME, factory_for::<T>))
    }

    /// Builder: declare `field` with an already resolved cast
    pub fn with_cast(mut self, field: impl Into<String>, cast: Cast) -> Self {
        self.casts.insert(field.into(), cast);
        self
    }

    /// Freeze for sharing between instances of a record type
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    // ========== Lookups ==========

    pub fn get(&self, field: &str) -> Option<&Cast> {
        self.casts.get(field)
    }

    pub fn is_declared(&self, field: &str) -> bool {
        self.casts.contains_key(field)
    }

    /// Declared field names, sorted
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.casts.keys().map(|s| s.as_str()).collect();
        fields.sort_unstable();
        fields
    }

    pub fn len(&self) -> usize {
        self.casts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.casts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Flag(bool);

    impl ValueObject for Flag {
        fn to_scalar(&self) -> Scalar {
            Scalar::Bool(self.0)
        }
    }

    impl CastValue for Flag {
        const NAME: &'static str = "Flag";

        fn construct(raw: &Scalar) -> Result<Self, CastError> {
            raw.as_bool()
                .map(Flag)
                .ok_or_else(|| CastError::rejected(Self::NAME, "expected bool"))
        }
    }

    #[test]
    fn test_declared_fields() {
        let casts = CastDeclaration::new().cast::<Flag>("active").cast::<Flag>("admin");

        assert!(casts.is_declared("active"));
        assert!(!casts.is_declared("name"));
        assert_eq!(casts.fields(), vec!["active", "admin"]);
        assert_eq!(casts.get("admin").map(|c| c.value_object()), Some("Flag"));
    }

    #[test]
    fn test_factory_builds_trait_object() {
        let casts = CastDeclaration::new().cast::<Flag>("active");
        let cast = casts.get("active").unwrap();

        let object = cast.construct(&Scalar::Bool(true)).unwrap();
        assert_eq!(object.to_scalar(), Scalar::Bool(true));

        assert!(cast.construct(&Scalar::Int(1)).is_err());
    }

    #[test]
    fn test_redeclaring_replaces() {
        let casts = CastDeclaration::new()
            .cast::<Flag>("active")
            .cast::<Flag>("active");
        assert_eq!(casts.len(), 1);
    }
}
