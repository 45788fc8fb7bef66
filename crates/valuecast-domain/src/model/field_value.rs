//! FieldValue - What a caller reads from or writes to a record field

use std::sync::Arc;

use super::scalar::Scalar;
use super::value_object::ValueObject;

/// A field as seen through the overlay
///
/// Declared fields read as `Null` or `Object`. Undeclared fields read as
/// `Null` or `Scalar`.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Null,
    Scalar(Scalar),
    Object(Arc<dyn ValueObject>),
}

impl FieldValue {
    /// Wrap a freshly built value object
    pub fn object<T: ValueObject>(value: T) -> Self {
        FieldValue::Object(Arc::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<dyn ValueObject>> {
        match self {
            FieldValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Borrow the value object as a concrete `T`
    pub fn downcast_ref<T: ValueObject>(&self) -> Option<&T> {
        self.as_object().and_then(|o| o.downcast_ref::<T>())
    }

    /// The scalar this field stands for
    pub fn to_scalar(&self) -> Scalar {
        match self {
            FieldValue::Null => Scalar::Null,
            FieldValue::Scalar(s) => s.clone(),
            FieldValue::Object(o) => o.to_scalar(),
        }
    }

    /// Reference equality between two value objects
    ///
    /// Always false unless both sides are `Object`.
    pub fn is_same_object(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Object(a), FieldValue::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Null => FieldValue::Null,
            other => FieldValue::Scalar(other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Scalar::from(value).into()
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Scalar::from(value).into()
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Scalar::from(value).into()
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Scalar::from(value).into()
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Scalar::from(value).into()
    }
}

impl From<Arc<dyn ValueObject>> for FieldValue {
    fn from(value: Arc<dyn ValueObject>) -> Self {
        FieldValue::Object(value)
    }
}

impl<T: ValueObject> From<Arc<T>> for FieldValue {
    fn from(value: Arc<T>) -> Self {
        FieldValue::Object(value)
    }
}

impl core::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Scalar(s) => write!(f, "{}", s),
            FieldValue::Object(o) => f.write_str(&o.to_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Tag(String);

    impl ValueObject for Tag {
        fn to_scalar(&self) -> Scalar {
            Scalar::String(self.0.clone())
        }

        fn to_text(&self) -> String {
            format!("#{}", self.0)
        }
    }

    #[test]
    fn test_null_scalar_becomes_null() {
        assert!(FieldValue::from(Scalar::Null).is_null());
        assert!(!FieldValue::from("").is_null());
    }

    #[test]
    fn test_same_object_is_identity_not_equality() {
        let shared = Arc::new(Tag("rust".to_string()));
        let a = FieldValue::from(shared.clone());
        let b = FieldValue::from(shared);
        let c = FieldValue::object(Tag("rust".to_string()));

        assert!(a.is_same_object(&b));
        assert!(!a.is_same_object(&c));
        assert_eq!(a.to_scalar(), c.to_scalar());
    }

    #[test]
    fn test_display_uses_text_form() {
        let value = FieldValue::object(Tag("rust".to_string()));
        assert_eq!(value.to_string(), "#rust");
        assert_eq!(value.downcast_ref::<Tag>().map(|t| t.0.as_str()), Some("rust"));
    }
}
