//! EmailAddress - A syntactically valid email address
//!
//! Stored as a string. Case is preserved exactly, so a round trip through
//! the store never looks like a transformation.

use std::sync::OnceLock;

use regex::Regex;
use valuecast_domain::error::CastError;
use valuecast_domain::model::scalar::Scalar;
use valuecast_domain::model::value_object::{CastValue, ValueObject};

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// An email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and validate an address
    pub fn parse(address: &str) -> Result<Self, CastError> {
        let regex = email_regex()
            .ok_or_else(|| CastError::rejected(Self::NAME, "email pattern failed to compile"))?;

        if !regex.is_match(address) {
            return Err(CastError::rejected(
                Self::NAME,
                format!("'{}' is not a valid email address", address),
            ));
        }

        Ok(Self(address.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part before the `@`
    pub fn local_part(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(local, _)| local)
    }

    /// Part after the `@`
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl ValueObject for EmailAddress {
    fn to_scalar(&self) -> Scalar {
        Scalar::String(self.0.clone())
    }

    fn to_text(&self) -> String {
        self.0.clone()
    }
}

impl CastValue for EmailAddress {
    const NAME: &'static str = "EmailAddress";

    fn construct(raw: &Scalar) -> Result<Self, CastError> {
        match raw {
            Scalar::String(s) => Self::parse(s),
            other => Err(CastError::rejected(
                Self::NAME,
                format!("expected string, got {}", other.type_name()),
            )),
        }
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
