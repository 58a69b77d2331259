use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::OperationKind;

/// GraphQL auto-mocker - fake operation results from a schema document
#[derive(Parser, Debug, Clone)]
#[command(name = "graphql-automock", version, about, long_about = None)]
pub struct Cli {
    /// Path to the settings file
    #[arg(long, env = "AUTOMOCK_SETTINGS", default_value = "automock.toml")]
    pub settings: PathBuf,

    /// Schema document (SDL)
    #[arg(short, long, env = "AUTOMOCK_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Mock config file (toml, yaml or json)
    #[arg(short = 'c', long, env = "AUTOMOCK_MOCK_CONFIG")]
    pub mock_config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, env = "AUTOMOCK_SEED")]
    pub seed: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long, env = "AUTOMOCK_PRETTY", num_args = 0..=1, default_missing_value = "true")]
    pub pretty: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print mock data for one operation as `{"data": ...}`
    Mock {
        /// Operation (root field) name, e.g. getWidgets
        operation: String,

        /// Root operation type
        #[arg(short, long, default_value = "query")]
        kind: OperationKind,
    },
    /// List the object types found in the schema
    Types,
}
