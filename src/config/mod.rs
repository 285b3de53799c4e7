mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use crate::prompt::DEFAULT_TEMPLATE;
use defaults::*;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "reviewsense.yaml";

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            report_dir: default_report_dir(),
            prompt_file: None,
            openai: OpenAiConfig::default(),
            google: GoogleConfig::default(),
            parser: ParserConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config, falling back to defaults when the default file is absent
    ///
    /// An explicitly requested path must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.openai.temperature) {
            return Err(ConfigError::Invalid {
                field: "openai.temperature",
                reason: format!("{} is outside 0.0..=2.0", self.openai.temperature),
            });
        }

        if self.openai.max_tokens == 0 {
            return Err(ConfigError::Invalid {
                field: "openai.max_tokens",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.google.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "google.page_size",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Analysis instructions: the prompt file if configured, else the built-in template
    pub fn prompt_template(&self) -> Result<String, ConfigError> {
        match &self.prompt_file {
            Some(path) => std::fs::read_to_string(path).map_err(|e| ConfigError::ReadPrompt {
                path: path.clone(),
                source: e,
            }),
            None => Ok(DEFAULT_TEMPLATE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.openai.model, "gpt-3.5-turbo");
        assert_eq!(config.openai.max_tokens, 1500);
        assert!((config.openai.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.google.page_size, 50);
        assert_eq!(config.parser.dangling, DanglingPolicy::Drop);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
report_dir: out
openai:
  model: gpt-4o-mini
  temperature: 0.0
parser:
  dangling: keep
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.report_dir, std::path::PathBuf::from("out"));
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.openai.max_tokens, 1500);
        assert_eq!(config.parser.dangling, DanglingPolicy::Keep);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.openai.temperature = 3.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "openai.temperature",
                ..
            })
        ));

        let mut config = Config::default();
        config.google.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = Config::load_or_default(Some(Path::new("/nonexistent/reviewsense.yaml")));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn test_prompt_template_defaults_to_builtin() {
        let config = Config::default();
        let template = config.prompt_template().unwrap();
        assert!(template.contains("Overall Sentiment:"));
        assert!(template.contains("Issue Summary:"));
    }

    #[test]
    fn test_dangling_policy_from_str() {
        assert_eq!("KEEP".parse::<DanglingPolicy>(), Ok(DanglingPolicy::Keep));
        assert_eq!("drop".parse::<DanglingPolicy>(), Ok(DanglingPolicy::Drop));
        assert!("maybe".parse::<DanglingPolicy>().is_err());
    }
}
