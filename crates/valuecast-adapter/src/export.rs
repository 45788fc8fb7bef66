//! Export - Flat array and JSON views of a record
//!
//! Export reads the store's attribute bag directly. The value-object cache
//! is never consulted, so exported values are always plain scalars.

use serde_json::{Map, Number, Value};
use valuecast_domain::model::record::Record;
use valuecast_domain::model::scalar::Scalar;
use valuecast_domain::repository::attribute_store::AttributeStore;

use crate::error::Result;

/// Convert a stored scalar to JSON
///
/// Non-finite floats have no JSON form and export as `null`.
pub fn scalar_to_json(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Null => Value::Null,
        Scalar::Bool(b) => Value::Bool(*b),
        Scalar::Int(i) => Value::Number((*i).into()),
        Scalar::Float(x) => Number::from_f64(*x).map_or(Value::Null, Value::Number),
        Scalar::String(s) => Value::String(s.clone()),
    }
}

/// Attribute name → stored scalar
pub fn to_array<S: AttributeStore>(record: &Record<S>) -> Map<String, Value> {
    record
        .store()
        .attributes()
        .iter()
        .map(|(key, value)| (key.clone(), scalar_to_json(value)))
        .collect()
}

/// `to_array` rendered as a JSON string
pub fn to_json<S: AttributeStore>(record: &Record<S>) -> Result<String> {
    let json = serde_json::to_string(&Value::Object(to_array(record)))?;
    Ok(json)
}
