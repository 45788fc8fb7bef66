//! Cast errors
//!
//! Hand-written `Display` keeps the domain free of dependencies.

/// Errors raised while materializing a value object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastError {
    /// The declared constructor rejected the raw scalar
    Construction {
        field: String,
        value_object: &'static str,
        reason: String,
    },
    /// A field is declared against a constructor that does not exist
    Misconfigured { field: String, constructor: String },
}

impl CastError {
    /// Build a construction failure without field context.
    ///
    /// Value objects return this from `CastValue::construct`; the overlay
    /// fills in the field name before handing it to the caller.
    pub fn rejected(value_object: &'static str, reason: impl Into<String>) -> Self {
        CastError::Construction {
            field: String::new(),
            value_object,
            reason: reason.into(),
        }
    }

    /// Attach the field the failure happened on
    pub fn for_field(self, key: &str) -> Self {
        match self {
            CastError::Construction {
                value_object,
                reason,
                ..
            } => CastError::Construction {
                field: key.to_string(),
                value_object,
                reason,
            },
            CastError::Misconfigured { constructor, .. } => CastError::Misconfigured {
                field: key.to_string(),
                constructor,
            },
        }
    }
}

impl core::fmt::Display for CastError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CastError::Construction {
                field,
                value_object,
                reason,
            } => {
                if field.is_empty() {
                    write!(f, "Cannot construct {}: {}", value_object, reason)
                } else {
                    write!(
                        f,
                        "Cannot cast field '{}' to {}: {}",
                        field, value_object, reason
                    )
                }
            }
            CastError::Misconfigured { field, constructor } => {
                write!(
                    f,
                    "Field '{}' is declared with unknown constructor '{}'",
                    field, constructor
                )
            }
        }
    }
}

impl std::error::Error for CastError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_field_fills_in_key() {
        let err = CastError::rejected("EmailAddress", "missing '@'").for_field("email");

        assert_eq!(
            err.to_string(),
            "Cannot cast field 'email' to EmailAddress: missing '@'"
        );
    }

    #[test]
    fn test_misconfigured_display() {
        let err = CastError::Misconfigured {
            field: "email".to_string(),
            constructor: "emial".to_string(),
        };

        assert!(err.to_string().contains("unknown constructor 'emial'"));
    }
}
