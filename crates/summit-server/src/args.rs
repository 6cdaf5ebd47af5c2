use std::path::PathBuf;

use clap::Parser;
use summit_core::DEFAULT_DATA_FILE;

/// HTTP service for tracking goals and their sub-goals
///
/// Summit keeps every goal in a single JSON file and exposes create, list,
/// change and delete endpoints for goals and sub-goals. Any origin may call
/// the API.
#[derive(Parser, Debug)]
#[command(version, about, name = "summit")]
pub struct Args {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "SUMMIT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on (0 picks a free port)
    #[arg(short, long, env = "SUMMIT_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path to the JSON data file holding all goals
    #[arg(long, env = "SUMMIT_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,
}
