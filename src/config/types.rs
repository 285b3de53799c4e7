use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    /// Replaces the built-in analysis instructions when set
    #[serde(default)]
    pub prompt_file: Option<PathBuf>,

    #[serde(default)]
    pub openai: OpenAiConfig,

    #[serde(default)]
    pub google: GoogleConfig,

    #[serde(default)]
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct OpenAiConfig {
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    #[serde(default = "default_openai_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_base_url(),
            model: default_openai_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            system_prompt: default_system_prompt(),
            timeout_sec: default_timeout_sec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GoogleConfig {
    #[serde(default = "default_places_base_url")]
    pub places_base_url: String,

    #[serde(default = "default_business_base_url")]
    pub business_base_url: String,

    /// Reviews requested per Business API call
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            places_base_url: default_places_base_url(),
            business_base_url: default_business_base_url(),
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct ParserConfig {
    #[serde(default)]
    pub dangling: DanglingPolicy,
}

/// What to do with a negative review that never got an `Issue Summary:` line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    /// Discard it
    #[default]
    Drop,
    /// Keep it with an empty issue summary
    Keep,
}

impl std::fmt::Display for DanglingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DanglingPolicy::Drop => write!(f, "drop"),
            DanglingPolicy::Keep => write!(f, "keep"),
        }
    }
}

impl std::str::FromStr for DanglingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop" => Ok(DanglingPolicy::Drop),
            "keep" => Ok(DanglingPolicy::Keep),
            _ => Err(format!("Unknown dangling policy: {}", s)),
        }
    }
}
