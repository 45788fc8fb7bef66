//! Domain Models - The vocabulary of valuecast
//!
//! A record stores `Scalar`s. Declared fields are read back as
//! `ValueObject`s, undeclared ones come through untouched.

pub mod cast;
pub mod field_value;
pub mod record;
pub mod scalar;
pub mod value_object;
