//! Built-in Value Objects
//!
//! Ready-made cast targets. Hosts declare their own by implementing
//! `CastValue`.

pub mod email;
pub mod percentage;

pub use email::EmailAddress;
pub use percentage::Percentage;
