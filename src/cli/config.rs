use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::api::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "provar-testgen",
    version,
    about = "AI-powered Provar test case generator for Salesforce"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Messages API endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// API key (default: ANTHROPIC_API_KEY environment variable)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Path to config file (default: provar-testgen.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a Provar test case from a description and optional screenshots
    Generate {
        /// Test case name (spaces become underscores in the output filename)
        #[arg(long)]
        name: String,

        /// Salesforce URL under test (default: the login page)
        #[arg(long)]
        url: Option<String>,

        /// Natural-language test scenario
        #[arg(long, conflicts_with = "description_file")]
        description: Option<String>,

        /// Read the test scenario from a file
        #[arg(long)]
        description_file: Option<String>,

        /// Path to a file containing page DOM/HTML context
        #[arg(long)]
        dom_file: Option<String>,

        /// Screenshot to analyze with vision AI (repeatable, upload order)
        #[arg(long = "screenshot")]
        screenshots: Vec<String>,

        /// Directory for the generated .testcase file
        #[arg(short, long, default_value = ".")]
        output_dir: String,
    },

    /// Analyze screenshots and print the detected UI elements
    Analyze {
        /// Screenshot to analyze (repeatable)
        #[arg(long = "screenshot", required = true)]
        screenshots: Vec<String>,
    },

    /// Validate an existing Provar test case file
    Validate {
        /// Path to the .testcase / XML file
        #[arg(long)]
        file: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `provar-testgen.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("provar-testgen.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Settings resolution (CLI > config file > env > defaults)
// ============================================================================

/// Fully resolved API settings for one invocation.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

pub fn resolve_api_settings(cli: &Cli, config: &AppConfig) -> ApiSettings {
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| config.api.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let model = cli
        .model
        .clone()
        .or_else(|| config.api.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| config.api.api_key.clone())
        .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok());

    ApiSettings {
        endpoint,
        model,
        api_key,
    }
}
