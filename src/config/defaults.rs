use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}

pub fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

pub fn default_temperature() -> f32 {
    0.3
}

pub fn default_max_tokens() -> u32 {
    1500
}

pub fn default_system_prompt() -> String {
    "You are a helpful review sentiment analyzer.".to_string()
}

pub fn default_timeout_sec() -> u64 {
    120
}

pub fn default_places_base_url() -> String {
    "https://places.googleapis.com/v1".to_string()
}

pub fn default_business_base_url() -> String {
    "https://mybusiness.googleapis.com/v4".to_string()
}

pub fn default_page_size() -> u32 {
    50
}
