//! # valuecast - Value objects over scalar attributes
//!
//! Wires a record from a cast declaration and an in-memory store, applies
//! the requested writes and reports what each read returns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Wiring                                   │
//! │    │                                                            │
//! │    ├── Loads: CastConfig (file) or the built-in declaration     │
//! │    ├── Creates: InMemoryAttributeStore (adapter)                │
//! │    ├── Creates: Record (domain, owns the CastOverlay)           │
//! │    └── Runs: --set / --get, then exports the stored scalars     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   valuecast --set email=user@example.com --get email
//!   valuecast --config casts.yaml --model user --set discount=15 --get discount

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{info, warn};

use valuecast_adapter::{to_json, CastConfig, CastRegistry, InMemoryAttributeStore};
use valuecast_domain::{CastDeclaration, FieldValue, Record, Scalar};

#[derive(Parser)]
#[command(name = "valuecast")]
#[command(about = "valuecast - Cast record attributes to value objects")]
#[command(version)]
struct Cli {
    /// Cast configuration file (.json, .yaml, .yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record type to load from the configuration
    #[arg(short, long, default_value = "user")]
    model: String,

    /// Write a field (key=value), applied in order
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    sets: Vec<String>,

    /// Read a field after all writes
    #[arg(short, long = "get", value_name = "KEY")]
    gets: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // ========================================
    // Wiring
    // ========================================

    let registry = CastRegistry::with_builtin();
    let casts = match &cli.config {
        Some(path) => CastConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?
            .declaration(&cli.model, &registry)?,
        None => CastDeclaration::new().cast::<valuecast_adapter::EmailAddress>("email"),
    };

    info!("📋 Model '{}' casts: {}", cli.model, casts.fields().join(", "));

    let mut record = Record::new(InMemoryAttributeStore::new(), casts.shared());

    // ========================================
    // Writes
    // ========================================

    for assignment in &cli.sets {
        let Some((key, value)) = assignment.split_once('=') else {
            bail!("expected KEY=VALUE, got '{}'", assignment);
        };
        let scalar = parse_scalar(value);
        info!("   → set {} = {:?}", key, scalar);
        record.set(key, scalar);
    }

    // ========================================
    // Reads
    // ========================================

    let (lines, failures) = read_fields(&mut record, &cli.gets);
    for line in &lines {
        println!("{}", line);
    }

    println!("{}", to_json(&record)?);

    if !failures.is_empty() {
        bail!("{} field(s) failed to cast: {}", failures.len(), failures.join("; "));
    }
    Ok(())
}

/// Read each key, returning printable lines and the failures
fn read_fields(
    record: &mut Record<InMemoryAttributeStore>,
    keys: &[String],
) -> (Vec<String>, Vec<String>) {
    let mut lines = Vec::with_capacity(keys.len());
    let mut failures = Vec::new();

    for key in keys {
        match record.get(key) {
            Ok(value) => {
                info!("   ✓ {} → {}", key, describe(&value));
                lines.push(format!("{} = {}", key, describe(&value)));
            }
            Err(err) => {
                warn!("   ✗ {}", err);
                lines.push(format!("{} ! {}", key, err));
                failures.push(err.to_string());
            }
        }
    }
    (lines, failures)
}

/// Interpret a command-line value as the most specific scalar
fn parse_scalar(value: &str) -> Scalar {
    match value {
        "null" => Scalar::Null,
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        _ => value
            .parse::<i64>()
            .map(Scalar::Int)
            .or_else(|_| value.parse::<f64>().map(Scalar::Float))
            .unwrap_or_else(|_| Scalar::from(value)),
    }
}

fn describe(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "null".to_string(),
        FieldValue::Scalar(s) => format!("{} ({})", s, s.type_name()),
        FieldValue::Object(o) => format!("{} (value object {:?})", o.to_text(), o),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar() {
        assert_eq!(parse_scalar("null"), Scalar::Null);
        assert_eq!(parse_scalar("true"), Scalar::Bool(true));
        assert_eq!(parse_scalar("15"), Scalar::Int(15));
        assert_eq!(parse_scalar("1.5"), Scalar::Float(1.5));
        assert_eq!(parse_scalar("a@b.io"), Scalar::from("a@b.io"));
    }

    #[test]
    fn test_cli_parses_repeated_flags() {
        let cli = Cli::parse_from([
            "valuecast",
            "--set",
            "email=a@b.io",
            "--set",
            "name=Ada",
            "--get",
            "email",
        ]);

        assert_eq!(cli.sets, vec!["email=a@b.io", "name=Ada"]);
        assert_eq!(cli.gets, vec!["email"]);
        assert_eq!(cli.model, "user");
    }

    #[test]
    fn test_read_fields_reports_cast_failures() {
        let mut record = Record::new(
            InMemoryAttributeStore::new(),
            CastDeclaration::new()
                .cast::<valuecast_adapter::EmailAddress>("email")
                .shared(),
        );
        record.set("email", "not-an-email");
        record.set("name", "Ada");

        let keys = vec!["email".to_string(), "name".to_string()];
        let (lines, failures) = read_fields(&mut record, &keys);

        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("Cannot cast field 'email' to EmailAddress"));
        assert!(lines[0].starts_with("email ! "));
        assert_eq!(lines[1], "name = Ada (string)");
    }

    #[test]
    fn test_describe() {
        let mut record = Record::new(
            InMemoryAttributeStore::new(),
            CastDeclaration::new()
                .cast::<valuecast_adapter::EmailAddress>("email")
                .shared(),
        );
        record.set("email", "a@b.io");
        record.set("age", 3i64);

        assert!(describe(&record.get("email").unwrap()).starts_with("a@b.io (value object"));
        assert_eq!(describe(&record.get("age").unwrap()), "3 (int)");
        assert_eq!(describe(&record.get("missing").unwrap()), "null");
    }
}
