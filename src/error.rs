use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to read prompt file '{path}': {source}")]
    ReadPrompt {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Could not extract a place ID from '{0}'")]
    UnrecognisedUrl(String),

    #[error("Provide either a Google Maps URL or both an account ID and a location ID")]
    Missing,
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Missing credential: set {0}")]
    MissingCredential(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Missing credential: set {0}")]
    MissingCredential(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Response contained no message content")]
    EmptyResponse,
}

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Analysis is not valid UTF-8 text: {0}")]
    NotText(#[from] std::str::Utf8Error),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush CSV: {0}")]
    WriteCsv(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
