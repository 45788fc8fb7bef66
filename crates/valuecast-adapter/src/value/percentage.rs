//! Percentage - A whole number between 0 and 100

use valuecast_domain::error::CastError;
use valuecast_domain::model::scalar::Scalar;
use valuecast_domain::model::value_object::{CastValue, ValueObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u8);

impl Percentage {
    pub fn new(value: i64) -> Result<Self, CastError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or_else(|| CastError::rejected(Self::NAME, format!("{} is outside 0..=100", value)))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// As a fraction of one
    pub fn ratio(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl ValueObject for Percentage {
    fn to_scalar(&self) -> Scalar {
        Scalar::Int(i64::from(self.0))
    }

    fn to_text(&self) -> String {
        format!("{}%", self.0)
    }
}

impl CastValue for Percentage {
    const NAME: &'static str = "Percentage";

    /// Accepts an int, or a string holding one
    fn construct(raw: &Scalar) -> Result<Self, CastError> {
        match raw {
            Scalar::Int(i) => Self::new(*i),
            Scalar::String(s) => {
                let parsed = s.trim().parse::<i64>().map_err(|_| {
                    CastError::rejected(Self::NAME, format!("'{}' is not a whole number", s))
                })?;
                Self::new(parsed)
            }
            other => Err(CastError::rejected(
                Self::NAME,
                format!("expected int, got {}", other.type_name()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Percentage::new(0).unwrap().value(), 0);
        assert_eq!(Percentage::new(100).unwrap().value(), 100);
        assert!(Percentage::new(101).is_err());
        assert!(Percentage::new(-1).is_err());
    }

    #[test]
    fn test_construct_from_string() {
        let pct = Percentage::construct(&Scalar::from(" 40 ")).unwrap();

        assert_eq!(pct.value(), 40);
        assert_eq!(pct.to_scalar(), Scalar::Int(40));
        assert_eq!(pct.to_text(), "40%");
        assert!((pct.ratio() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_construct_rejects_garbage() {
        assert!(Percentage::construct(&Scalar::from("forty")).is_err());
        assert!(Percentage::construct(&Scalar::Float(40.0)).is_err());
    }
}
