//! ValueObject - A domain type wrapped around exactly one scalar
//!
//! Two traits split the contract:
//! - `ValueObject` is object safe. The overlay caches `Arc<dyn ValueObject>`.
//! - `CastValue` adds construction, so a declaration can name the type.

use std::any::Any;
use std::fmt::Debug;

use crate::error::CastError;
use crate::model::scalar::Scalar;

/// Upcast to `Any` for every `'static` type
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value object as seen by the overlay
///
/// Immutable once built. `to_scalar` must give back a scalar that
/// reconstructs an equal object.
pub trait ValueObject: AsAny + Debug + Send + Sync + 'static {
    /// Render back to the stored representation
    fn to_scalar(&self) -> Scalar;

    /// Human-readable form
    fn to_text(&self) -> String {
        self.to_scalar().to_string()
    }
}

impl dyn ValueObject {
    /// Borrow the concrete value object, if it is a `T`
    pub fn downcast_ref<T: ValueObject>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }

    pub fn is<T: ValueObject>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }
}

/// A value object that can be declared as a cast target
pub trait CastValue: ValueObject + Sized {
    /// Name used in errors and configuration
    const NAME: &'static str;

    /// Build from a stored scalar. Fails on malformed input.
    fn construct(raw: &Scalar) -> Result<Self, CastError>;
}
