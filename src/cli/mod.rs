pub mod analyze;
pub mod parse;
pub mod place_id;
pub mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reviewsense")]
#[command(
    author,
    version,
    about = "Analyze Google review sentiment with an OpenAI-compatible chat model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch reviews for a location and analyze their sentiment
    Analyze(AnalyzeArgs),

    /// Structure a saved analysis reply without calling any API
    Parse(ParseArgs),

    /// Print the place ID extracted from a Google Maps URL
    PlaceId(PlaceIdArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct AnalyzeArgs {
    /// Google Maps URL of the business
    #[arg(long)]
    pub url: Option<String>,

    /// My Business account ID (use with --location-id instead of --url)
    #[arg(long)]
    pub account_id: Option<String>,

    /// My Business location ID (use with --account-id instead of --url)
    #[arg(long)]
    pub location_id: Option<String>,

    /// Path to config file (default: reviewsense.yaml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Custom analysis instructions, replacing the built-in prompt
    #[arg(long)]
    pub prompt_file: Option<PathBuf>,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "GOOGLE_PLACES_API_KEY", hide_env_values = true)]
    pub places_api_key: Option<String>,

    /// OAuth access token for the My Business API
    #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Print the fetched reviews before analyzing them
    #[arg(long)]
    pub show_reviews: bool,

    /// Export negative reviews as CSV
    #[arg(long)]
    pub csv: bool,

    /// Directory for the CSV export
    #[arg(long, default_value = ".")]
    pub csv_dir: PathBuf,

    /// Write JSON and Markdown reports under the report directory
    #[arg(long)]
    pub report: bool,

    /// Override report directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Keep negative reviews that have no issue summary
    #[arg(long)]
    pub keep_dangling: bool,
}

#[derive(Parser, Clone)]
pub struct ParseArgs {
    /// File holding the analysis text ("-" reads stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Path to config file (default: reviewsense.yaml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep negative reviews that have no issue summary
    #[arg(long)]
    pub keep_dangling: bool,

    /// Also export negative reviews to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Business name recorded in the CSV export
    #[arg(long, default_value = "")]
    pub business: String,
}

#[derive(Parser, Clone)]
pub struct PlaceIdArgs {
    /// Google Maps URL
    pub url: String,

    /// Also print an embeddable map URL using this API key
    #[arg(long)]
    pub embed_key: Option<String>,
}
