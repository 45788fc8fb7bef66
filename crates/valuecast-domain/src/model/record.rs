//! Record - An attribute store plus the overlay that casts its fields
//!
//! Record is an Entity wrapper: it owns the store and one cache, and
//! shares its record type's cast declaration with every other instance.

use std::sync::Arc;

use crate::error::CastError;
use crate::model::cast::CastDeclaration;
use crate::model::field_value::FieldValue;
use crate::repository::attribute_store::AttributeStore;
use crate::service::cast_overlay::CastOverlay;

/// A record type with a static cast declaration
///
/// Implement on a marker type and build instances with `Record::of`.
pub trait RecordType {
    fn declared_casts() -> Arc<CastDeclaration>;
}

/// A record instance
#[derive(Debug)]
pub struct Record<S: AttributeStore> {
    store: S,
    casts: Arc<CastDeclaration>,
    overlay: CastOverlay,
}

impl<S: AttributeStore> Record<S> {
    /// Create a record over `store` with the given declaration
    pub fn new(store: S, casts: Arc<CastDeclaration>) -> Self {
        Self {
            store,
            casts,
            overlay: CastOverlay::new(),
        }
    }

    /// Create a record of type `T`
    pub fn of<T: RecordType>(store: S) -> Self {
        Self::new(store, T::declared_casts())
    }

    /// Read a field (value object for declared fields, scalar otherwise)
    pub fn get(&mut self, key: &str) -> Result<FieldValue, CastError> {
        self.overlay.get(&self.casts, &self.store, key)
    }

    /// Write a field from a scalar or a value object
    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.overlay
            .set(&self.casts, &mut self.store, key, value.into());
    }

    // ========== Getters ==========

    pub fn casts(&self) -> &CastDeclaration {
        &self.casts
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Direct store access. Writes made here bypass the cache; call
    /// `forget` or `forget_all` afterwards.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ========== Cache ==========

    pub fn is_cached(&self, key: &str) -> bool {
        self.overlay.is_cached(key)
    }

    pub fn forget(&mut self, key: &str) {
        self.overlay.forget(key);
    }

    pub fn forget_all(&mut self) {
        self.overlay.forget_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scalar::Scalar;
    use crate::model::value_object::{CastValue, ValueObject};
    use std::collections::HashMap;
    use std::sync::OnceLock;

    #[derive(Debug)]
    struct Slug(String);

    impl ValueObject for Slug {
        fn to_scalar(&self) -> Scalar {
            Scalar::String(self.0.clone())
        }
    }

    impl CastValue for Slug {
        const NAME: &'static str = "Slug";

        fn construct(raw: &Scalar) -> Result<Self, CastError> {
            Ok(Slug(raw.to_string()))
        }
    }

    #[derive(Debug, Default)]
    struct MapStore(HashMap<String, Scalar>);

    impl AttributeStore for MapStore {
        fn read_raw(&self, key: &str) -> Scalar {
            self.0.get(key).cloned().unwrap_or_default()
        }

        fn write_raw(&mut self, key: &str, value: Scalar) {
            self.0.insert(key.to_string(), value);
        }

        fn attributes(&self) -> Vec<(String, Scalar)> {
            self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
        }
    }

    struct Article;

    impl RecordType for Article {
        fn declared_casts() -> Arc<CastDeclaration> {
            static CASTS: OnceLock<Arc<CastDeclaration>> = OnceLock::new();
            CASTS
                .get_or_init(|| CastDeclaration::new().cast::<Slug>("slug").shared())
                .clone()
        }
    }

    #[test]
    fn test_record_types_share_declaration() {
        let a = Record::<MapStore>::of::<Article>(MapStore::default());
        let b = Record::<MapStore>::of::<Article>(MapStore::default());

        assert!(core::ptr::eq(a.casts(), b.casts()));
    }

    #[test]
    fn test_instances_have_separate_caches() {
        let mut a = Record::<MapStore>::of::<Article>(MapStore::default());
        let mut b = Record::<MapStore>::of::<Article>(MapStore::default());

        a.set("slug", "hello-world");
        b.set("slug", "hello-world");

        let from_a = a.get("slug").unwrap();
        let from_b = b.get("slug").unwrap();
        assert!(!from_a.is_same_object(&from_b));
        assert_eq!(from_a.to_scalar(), from_b.to_scalar());
    }

    #[test]
    fn test_store_mut_requires_forget() {
        let mut record = Record::<MapStore>::of::<Article>(MapStore::default());
        record.set("slug", "first");
        let stale = record.get("slug").unwrap();

        record.store_mut().write_raw("slug", Scalar::from("second"));
        assert!(record.get("slug").unwrap().is_same_object(&stale));

        record.forget("slug");
        assert_eq!(record.get("slug").unwrap().to_scalar(), Scalar::from("second"));
    }

    #[test]
    fn test_into_store_keeps_written_scalars() {
        let mut record = Record::<MapStore>::of::<Article>(MapStore::default());
        record.set("slug", "hello-world");
        record.get("slug").unwrap();

        let store = record.into_store();
        assert_eq!(store.read_raw("slug"), Scalar::from("hello-world"));
        assert_eq!(store.attributes().len(), 1);
    }
}
