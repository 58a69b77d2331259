use clap::Parser;
use graphql_automock::cli::Cli;
use graphql_automock::config::Settings;
use graphql_automock::{MockConfig, ValueOverride};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TOML_CONFIG: &str = r#"
enabled = true

[operations.getWidgets]
enabled = false

[types.Widget.fields.price]
min = 10.0
max = 20.0

[types.Widget.fields.tags]
arrayMin = 2
arrayMax = 4

[types.Widget.fields.label]
value = "fixed"
"#;

const YAML_CONFIG: &str = r#"
enabled: true
operations:
  getWidgets:
    enabled: false
types:
  Widget:
    fields:
      price:
        min: 10.0
        max: 20.0
      tags:
        arrayMin: 2
        arrayMax: 4
      label:
        value: fixed
"#;

const JSON_CONFIG: &str = r#"
{
    "enabled": true,
    "operations": { "getWidgets": { "enabled": false } },
    "types": {
        "Widget": {
            "fields": {
                "price": { "min": 10.0, "max": 20.0 },
                "tags": { "arrayMin": 2, "arrayMax": 4 },
                "label": { "value": "fixed" }
            }
        }
    }
}
"#;

#[test]
fn test_config_formats_are_equivalent() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("mocks.toml"), TOML_CONFIG)?;
    fs::write(root.join("mocks.yaml"), YAML_CONFIG)?;
    fs::write(root.join("mocks.json"), JSON_CONFIG)?;

    let from_toml = MockConfig::from_path(root.join("mocks.toml"))?;
    let from_yaml = MockConfig::from_path(root.join("mocks.yaml"))?;
    let from_json = MockConfig::from_path(root.join("mocks.json"))?;

    assert_eq!(from_toml, from_yaml);
    assert_eq!(from_toml, from_json);

    // Type and field names keep their case
    let price = from_toml.field_override("Widget", "price").unwrap();
    assert_eq!((price.min, price.max), (Some(10.0), Some(20.0)));
    assert_eq!(from_toml.field_override("Widget", "tags").unwrap().array_bounds(), (2, 4));
    assert_eq!(
        from_toml.field_override("Widget", "label").unwrap().value,
        Some(ValueOverride::literal(json!("fixed")))
    );

    assert!(!from_toml.should_mock("getWidgets"));
    assert!(from_toml.should_mock("getWidget"));

    Ok(())
}

#[test]
fn test_unknown_config_extension() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("mocks.ini");
    fs::write(&path, "enabled = true")?;

    let err = MockConfig::from_path(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Unknown mock config format"));
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let err = MockConfig::from_path("/nonexistent/mocks.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read mock config"));
}

#[test]
fn test_settings_from_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let settings_path = root.join("automock.toml");
    fs::write(
        &settings_path,
        r#"
schema = "schema.graphql"
mock_config = "mocks.yaml"
seed = 7
pretty = true
"#,
    )?;

    let cli = Cli::parse_from([
        "graphql-automock",
        "--settings",
        settings_path.to_str().unwrap(),
        "types",
    ]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.schema, Some(PathBuf::from("schema.graphql")));
    assert_eq!(settings.mock_config, Some(PathBuf::from("mocks.yaml")));
    assert_eq!(settings.seed, Some(7));
    assert!(settings.pretty);

    Ok(())
}

#[test]
fn test_cli_overrides_settings_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let settings_path = root.join("automock.toml");
    fs::write(
        &settings_path,
        r#"
schema = "from_file.graphql"
seed = 7
pretty = true
"#,
    )?;

    let cli = Cli::parse_from([
        "graphql-automock",
        "--settings",
        settings_path.to_str().unwrap(),
        "--schema",
        "from_cli.graphql",
        "--seed",
        "99",
        "--pretty",
        "false",
        "types",
    ]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.schema, Some(PathBuf::from("from_cli.graphql")));
    assert_eq!(settings.seed, Some(99));
    assert!(!settings.pretty);
    assert!(settings.mock_config.is_none());

    Ok(())
}

#[test]
fn test_missing_settings_file_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let settings_path = temp_dir.path().join("absent.toml");

    let cli = Cli::parse_from([
        "graphql-automock",
        "--settings",
        settings_path.to_str().unwrap(),
        "types",
    ]);
    let settings = Settings::new_with_cli(&cli)?;

    assert!(settings.schema.is_none());
    assert!(settings.seed.is_none());
    assert!(!settings.pretty);
    assert!(settings.schema_path().is_err());
    assert_eq!(settings.load_mock_config()?, MockConfig::default());

    Ok(())
}

#[test]
fn test_load_mock_config_rejects_invalid_bounds() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let mocks_path = root.join("mocks.json");
    fs::write(
        &mocks_path,
        r#"
{
    "types": {
        "Widget": {
            "fields": {
                "price": { "min": 50, "max": 5 },
                "createdDate": { "minDate": "yesterday" }
            }
        }
    }
}
"#,
    )?;

    let settings = Settings {
        mock_config: Some(mocks_path),
        ..Settings::default()
    };
    let err = settings.load_mock_config().unwrap_err().to_string();

    assert!(err.starts_with("Mock config validation failed"));
    assert!(err.contains("types.Widget.fields.price.min/max"));
    assert!(err.contains("types.Widget.fields.createdDate.minDate"));

    Ok(())
}
