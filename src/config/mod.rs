use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use config::{Config, File};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod validator;

use crate::cli::Cli;

/// Default lower bound on generated sequence length
pub const DEFAULT_ARRAY_MIN: usize = 1;
/// Default upper bound on generated sequence length
pub const DEFAULT_ARRAY_MAX: usize = 3;

/// Main config object for the mocker
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct MockConfig {
    /// Enable/disable mocking globally
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Per-operation switches, keyed by operation name
    #[serde(default)]
    pub operations: HashMap<String, MockOperationConfig>,
    /// Per-type field overrides, keyed by type name
    #[serde(default)]
    pub types: HashMap<String, MockTypeConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct MockOperationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct MockTypeConfig {
    /// Per-field config, keyed by field name
    #[serde(default)]
    pub fields: HashMap<String, FieldOverride>,
}

/// Per-field config for scalars and arrays
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldOverride {
    /// For numbers: minimum value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// For numbers: maximum value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// For dates: minimum ISO-8601 date string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    /// For dates: maximum ISO-8601 date string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    /// For arrays: min length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_min: Option<usize>,
    /// For arrays: max length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_max: Option<usize>,
    /// Literal value or producer that replaces every other rule.
    /// A `null` in a config file is kept as a literal null.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<ValueOverride>,
}

impl FieldOverride {
    pub fn with_value(value: ValueOverride) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn with_range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn with_array_len(array_min: usize, array_max: usize) -> Self {
        Self {
            array_min: Some(array_min),
            array_max: Some(array_max),
            ..Self::default()
        }
    }

    /// Inclusive sequence length bounds. An inverted range collapses to `array_min`.
    pub fn array_bounds(&self) -> (usize, usize) {
        let min = self.array_min.unwrap_or(DEFAULT_ARRAY_MIN);
        let max = self.array_max.unwrap_or(DEFAULT_ARRAY_MAX);
        (min, max.max(min))
    }
}

/// Zero-argument producer invoked on every synthesis of the field.
pub type ValueProducer = Arc<dyn Fn() -> Value + Send + Sync>;

#[derive(Clone)]
pub enum ValueOverride {
    Literal(Value),
    Producer(ValueProducer),
}

impl ValueOverride {
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn producer<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::Producer(Arc::new(f))
    }

    /// Literal as-is, or a fresh producer result.
    pub fn resolve(&self) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Producer(produce) => produce(),
        }
    }
}

impl fmt::Debug for ValueOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl PartialEq for ValueOverride {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Producer(a), Self::Producer(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for ValueOverride {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(value) => value.serialize(serializer),
            Self::Producer(_) => Err(serde::ser::Error::custom(
                "producer overrides cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for ValueOverride {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::Literal)
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<ValueOverride>, D::Error>
where
    D: Deserializer<'de>,
{
    ValueOverride::deserialize(deserializer).map(Some)
}

impl MockConfig {
    /// Load a config file; the format follows the extension (toml, yaml/yml, json).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mock config {}", path.display()))?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        Self::parse(&content, ext)
            .with_context(|| format!("Failed to parse mock config {}", path.display()))
    }

    /// Parse config text in the format named by `ext`.
    pub fn parse(content: &str, ext: &str) -> Result<Self, anyhow::Error> {
        let config = match ext {
            "toml" => toml::from_str(content)?,
            "yaml" | "yml" => serde_yaml::from_str(content)?,
            "json" => serde_json::from_str(content)?,
            other => anyhow::bail!("Unknown mock config format: '{}'", other),
        };
        Ok(config)
    }

    /// Whether an operation should be answered with mock data.
    ///
    /// Mocking is on unless switched off globally or for this operation.
    pub fn should_mock(&self, operation_name: &str) -> bool {
        let globally_enabled = self.enabled != Some(false);
        let operation_enabled = self
            .operations
            .get(operation_name)
            .and_then(|op| op.enabled)
            != Some(false);
        globally_enabled && operation_enabled
    }

    pub fn field_override(&self, type_name: &str, field_name: &str) -> Option<&FieldOverride> {
        self.types.get(type_name)?.fields.get(field_name)
    }

    /// Install or replace the override for one field.
    pub fn set_field_override(
        &mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        field_override: FieldOverride,
    ) -> &mut Self {
        self.types
            .entry(type_name.into())
            .or_default()
            .fields
            .insert(field_name.into(), field_override);
        self
    }

    pub fn set_operation_enabled(&mut self, operation_name: impl Into<String>, enabled: bool) -> &mut Self {
        self.operations.insert(
            operation_name.into(),
            MockOperationConfig {
                enabled: Some(enabled),
            },
        );
        self
    }
}

/// Parse an ISO-8601 date or date-time. Zone-less values are taken as UTC.
pub fn parse_iso_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Command line settings, layered: CLI flags > settings file > defaults.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Schema document (SDL) to mock against
    #[serde(default)]
    pub schema: Option<PathBuf>,
    /// Mock config file (toml, yaml or json)
    #[serde(default)]
    pub mock_config: Option<PathBuf>,
    /// Seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl Settings {
    /// Create settings from CLI arguments (includes settings file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(cli.settings.clone()).required(false))
            .set_default("pretty", false)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        settings.apply_cli_overrides(cli);

        Ok(settings)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(schema) = &cli.schema {
            self.schema = Some(schema.clone());
        }
        if let Some(mock_config) = &cli.mock_config {
            self.mock_config = Some(mock_config.clone());
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(pretty) = cli.pretty {
            self.pretty = pretty;
        }
    }

    pub fn schema_path(&self) -> Result<&Path, anyhow::Error> {
        self.schema
            .as_deref()
            .context("No schema configured: pass --schema or set `schema` in the settings file")
    }

    /// Load and validate the configured mock config, if any.
    pub fn load_mock_config(&self) -> Result<MockConfig, anyhow::Error> {
        let Some(path) = &self.mock_config else {
            return Ok(MockConfig::default());
        };
        let config = MockConfig::from_path(path)?;

        validator::ConfigValidator::validate(&config).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Mock config validation failed:\n{}",
                error_messages.join("\n")
            )
        })?;

        Ok(config)
    }
}
