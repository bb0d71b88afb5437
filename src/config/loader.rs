use std::{env, time::Duration};

use crate::ai::DEFAULT_API_URL;

use super::env::{AppConfig, ConfigError, DirectoryConfig, LoggingConfig, OpenAiConfig};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let openai = OpenAiConfig {
            api_key,
            endpoint: lookup("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            temperature: lookup("OPENAI_TEMPERATURE")
                .and_then(|v| v.parse::<f32>().ok())
                .unwrap_or(0.1),
            max_tokens: lookup("OPENAI_MAX_TOKENS")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(512),
            request_timeout: Duration::from_millis(
                lookup("OPENAI_TIMEOUT_MS")
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(30_000),
            ),
        };

        let directories = DirectoryConfig {
            logs_dir: lookup("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
            output_dir: lookup("OUTPUT_DIR").unwrap_or_else(|| "output".to_string()),
        };

        let logging = LoggingConfig {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        Ok(Self {
            openai,
            directories,
            logging,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_vars(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = from_vars(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert_eq!(config.openai.endpoint, DEFAULT_API_URL);
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.openai.temperature, 0.1);
        assert_eq!(config.openai.max_tokens, 512);
        assert_eq!(config.openai.request_timeout, Duration::from_secs(30));
        assert_eq!(config.directories.logs_dir, "logs");
        assert_eq!(config.directories.output_dir, "output");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = from_vars(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_API_URL", "http://localhost:8080/v1/chat/completions"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_TEMPERATURE", "0.0"),
            ("OPENAI_MAX_TOKENS", "256"),
            ("OPENAI_TIMEOUT_MS", "5000"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(
            config.openai.endpoint,
            "http://localhost:8080/v1/chat/completions"
        );
        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.openai.temperature, 0.0);
        assert_eq!(config.openai.max_tokens, 256);
        assert_eq!(config.openai.request_timeout, Duration::from_millis(5000));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn unparseable_numbers_fall_back_to_defaults() {
        let config = from_vars(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_TEMPERATURE", "warm"),
            ("OPENAI_MAX_TOKENS", "-1"),
            ("OPENAI_TIMEOUT_MS", "soon"),
        ])
        .unwrap();
        assert_eq!(config.openai.temperature, 0.1);
        assert_eq!(config.openai.max_tokens, 512);
        assert_eq!(config.openai.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = from_vars(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("OPENAI_API_KEY")));
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let err = from_vars(&[("OPENAI_API_KEY", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("OPENAI_API_KEY")));
    }
}
