//! Cast configuration
//!
//! Declarations can be written in code or loaded from a file:
//!
//! ```json
//! { "models": { "user": { "casts": { "email": "email_address" } } } }
//! ```
//!
//! Constructor names resolve through a `CastRegistry` when the declaration
//! is built, so a typo fails before any record exists.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use valuecast_domain::error::CastError;
use valuecast_domain::model::cast::{factory_for, Cast, CastDeclaration};
use valuecast_domain::model::value_object::CastValue;

use crate::error::{AdapterError, Result};
use crate::value::{EmailAddress, Percentage};

/// Casts for a single record type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    /// Field name → constructor name
    #[serde(default)]
    pub casts: BTreeMap<String, String>,
}

/// Cast configuration file (`.json`, `.yaml` or `.yml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastConfig {
    /// Record type name → its casts
    #[serde(default)]
    pub models: BTreeMap<String, ModelConfig>,
}

impl CastConfig {
    /// Load configuration from a file, picking the format by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let config = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            _ => {
                return Err(AdapterError::Config(format!(
                    "unsupported config format: {}",
                    path.display()
                )))
            }
        };

        debug!(
            path = %path.display(),
            models = config.models.len(),
            "loaded cast configuration"
        );
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Get model names
    pub fn model_names(&self) -> Vec<&str> {
        self.models.keys().map(|s| s.as_str()).collect()
    }

    /// Build the cast declaration for `model`
    pub fn declaration(&self, model: &str, registry: &CastRegistry) -> Result<CastDeclaration> {
        let config = self
            .models
            .get(model)
            .ok_or_else(|| AdapterError::UnknownModel {
                model: model.to_string(),
                available: self.models.keys().cloned().collect(),
            })?;

        let mut declaration = CastDeclaration::new();
        for (field, constructor) in &config.casts {
            let cast = registry.resolve(field, constructor)?;
            debug!(model, field = %field, constructor = %constructor, "resolved cast");
            declaration = declaration.with_cast(field.clone(), cast);
        }
        Ok(declaration)
    }
}

/// Constructor name → factory
#[derive(Debug, Clone, Default)]
pub struct CastRegistry {
    constructors: HashMap<String, Cast>,
}

impl CastRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in value objects
    pub fn with_builtin() -> Self {
        Self::new()
            .register::<EmailAddress>("email_address")
            .register::<Percentage>("percentage")
    }

    /// Builder: make `T` available as `name`
    pub fn register<T: CastValue>(mut self, name: impl Into<String>) -> Self {
        self.constructors
            .insert(name.into(), Cast::new(T::NAME, factory_for::<T>));
        self
    }

    /// Look up the constructor declared for `field`
    pub fn resolve(&self, field: &str, constructor: &str) -> Result<Cast> {
        self.constructors.get(constructor).copied().ok_or_else(|| {
            AdapterError::Cast(CastError::Misconfigured {
                field: field.to_string(),
                constructor: constructor.to_string(),
            })
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
