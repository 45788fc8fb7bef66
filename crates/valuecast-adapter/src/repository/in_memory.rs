//! In-Memory Attribute Store
//!
//! A plain attribute bag with optional per-field mutators, the way an ORM
//! model runs accessors on read and mutators on write.
//! Useful for testing and as a reference store.

use std::collections::HashMap;
use std::sync::Arc;

use valuecast_domain::model::scalar::Scalar;
use valuecast_domain::repository::attribute_store::AttributeStore;

/// Transforms a scalar on its way in or out of the store
pub type Mutator = Arc<dyn Fn(&Scalar) -> Scalar + Send + Sync>;

/// In-memory attribute store
///
/// Get mutators run in `read_raw`, set mutators run in `write_raw`.
/// `raw_attributes` always shows the bag as stored.
#[derive(Clone, Default)]
pub struct InMemoryAttributeStore {
    attributes: HashMap<String, Scalar>,
    get_mutators: HashMap<String, Mutator>,
    set_mutators: HashMap<String, Mutator>,
}

impl InMemoryAttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: seed the attribute bag
    pub fn with_attributes<K, V>(mut self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        self.set_raw_attributes(attributes);
        self
    }

    /// Builder: transform `key` whenever it is read
    pub fn with_get_mutator(
        mut self,
        key: impl Into<String>,
        mutator: impl Fn(&Scalar) -> Scalar + Send + Sync + 'static,
    ) -> Self {
        self.get_mutators.insert(key.into(), Arc::new(mutator));
        self
    }

    /// Builder: transform `key` before it is stored
    pub fn with_set_mutator(
        mut self,
        key: impl Into<String>,
        mutator: impl Fn(&Scalar) -> Scalar + Send + Sync + 'static,
    ) -> Self {
        self.set_mutators.insert(key.into(), Arc::new(mutator));
        self
    }

    // ========== Raw Access ==========

    /// The attribute bag as stored, with no mutators applied
    pub fn raw_attributes(&self) -> &HashMap<String, Scalar> {
        &self.attributes
    }

    /// Replace the whole attribute bag, skipping set mutators
    pub fn set_raw_attributes<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        self.attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
    }

    pub fn raw(&self, key: &str) -> Option<&Scalar> {
        self.attributes.get(key)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AttributeStore for InMemoryAttributeStore {
    fn read_raw(&self, key: &str) -> Scalar {
        let stored = self.attributes.get(key).cloned().unwrap_or_default();
        match self.get_mutators.get(key) {
            Some(mutator) => mutator(&stored),
            None => stored,
        }
    }

    fn write_raw(&mut self, key: &str, value: Scalar) {
        let value = match self.set_mutators.get(key) {
            Some(mutator) => mutator(&value),
            None => value,
        };
        self.attributes.insert(key.to_string(), value);
    }

    fn attributes(&self) -> Vec<(String, Scalar)> {
        let mut attributes: Vec<(String, Scalar)> = self
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        attributes.sort_by(|a, b| a.0.cmp(&b.0));
        attributes
    }
}

impl core::fmt::Debug for InMemoryAttributeStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut get_mutators: Vec<&str> = self.get_mutators.keys().map(|s| s.as_str()).collect();
        let mut set_mutators: Vec<&str> = self.set_mutators.keys().map(|s| s.as_str()).collect();
        get_mutators.sort_unstable();
        set_mutators.sort_unstable();

        f.debug_struct("InMemoryAttributeStore")
            .field("attributes", &self.attributes)
            .field("get_mutators", &get_mutators)
            .field("set_mutators", &set_mutators)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(value: &Scalar) -> Scalar {
        match value {
            Scalar::String(s) => Scalar::String(s.to_uppercase()),
            other => other.clone(),
        }
    }

    #[test]
    fn test_plain_read_write() {
        let mut store = InMemoryAttributeStore::new();

        store.write_raw("name", Scalar::from("John Doe"));

        assert_eq!(store.read_raw("name"), Scalar::from("John Doe"));
        assert_eq!(store.read_raw("missing"), Scalar::Null);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_mutator_changes_stored_value() {
        let mut store = InMemoryAttributeStore::new().with_set_mutator("code", upper);

        store.write_raw("code", Scalar::from("abc"));

        assert_eq!(store.raw("code"), Some(&Scalar::from("ABC")));
        assert_eq!(store.read_raw("code"), Scalar::from("ABC"));
    }

    #[test]
    fn test_get_mutator_leaves_stored_value() {
        let mut store = InMemoryAttributeStore::new().with_get_mutator("code", upper);

        store.write_raw("code", Scalar::from("abc"));

        assert_eq!(store.raw("code"), Some(&Scalar::from("abc")));
        assert_eq!(store.read_raw("code"), Scalar::from("ABC"));
    }

    #[test]
    fn test_raw_attributes_skip_mutators() {
        let mut store = InMemoryAttributeStore::new().with_set_mutator("code", upper);

        store.set_raw_attributes([("code", "abc"), ("name", "Ada")]);

        assert_eq!(store.raw("code"), Some(&Scalar::from("abc")));
        assert_eq!(
            store.attributes(),
            vec![
                ("code".to_string(), Scalar::from("abc")),
                ("name".to_string(), Scalar::from("Ada")),
            ]
        );
    }

    #[test]
    fn test_debug_lists_mutator_fields() {
        let store = InMemoryAttributeStore::new().with_get_mutator("code", upper);
        let debug = format!("{:?}", store);

        assert!(debug.contains("get_mutators: [\"code\"]"));
    }
}
