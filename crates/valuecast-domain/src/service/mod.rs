//! Domain Services - Logic that doesn't belong to a single model
//!
//! - CastOverlay: get/set interception and value-object caching

pub mod cast_overlay;
