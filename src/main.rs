use anyhow::Context;
use clap::Parser;
use graphql_automock::cli::{Cli, Command};
use graphql_automock::config::Settings;
use graphql_automock::{analyze_schema, mock_operation_with_rng};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the JSON output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    let schema_path = settings.schema_path()?;
    let schema_sdl = std::fs::read_to_string(schema_path)
        .with_context(|| format!("Failed to read schema {}", schema_path.display()))?;

    match &cli.command {
        Command::Mock { operation, kind } => {
            let mock_config = settings.load_mock_config()?;
            if !mock_config.should_mock(operation) {
                anyhow::bail!("Mocking is disabled for operation '{}'", operation);
            }

            let mut rng = match settings.seed {
                Some(seed) => {
                    info!(seed, "Using seeded generator");
                    StdRng::seed_from_u64(seed)
                }
                None => StdRng::from_entropy(),
            };

            let data = mock_operation_with_rng(&schema_sdl, *kind, operation, Some(&mock_config), &mut rng)?;
            print_json(&json!({ "data": data }), settings.pretty)?;
        }
        Command::Types => {
            let catalog = analyze_schema(&schema_sdl)?;
            info!("Found {} object types", catalog.len());
            for type_descriptor in catalog.iter() {
                println!("type {} {{", type_descriptor.name);
                for field in &type_descriptor.fields {
                    println!("  {}: {}", field.name, field.declared_type);
                }
                println!("}}");
            }
        }
    }

    Ok(())
}

fn print_json(value: &Value, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}
