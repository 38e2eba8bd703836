use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const API_BASE_URL_ENV: &str = "PAWFECT_API_BASE_URL";
pub const LOG_LEVEL_ENV: &str = "PAWFECT_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// `config.toml` contents. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

impl AppConfig {
    /// Defaults, then the TOML file, then the environment.
    pub fn from_sources<F>(file_contents: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(contents) = file_contents {
            let file: ConfigFile = toml::from_str(contents).context("invalid config.toml")?;
            if let Some(url) = file.api_base_url {
                config.api_base_url = url;
            }
            if let Some(level) = file.log_level {
                config.log_level = level;
            }
        }

        if let Some(url) = env(API_BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url;
        }
        if let Some(level) = env(LOG_LEVEL_ENV).filter(|v| !v.trim().is_empty()) {
            config.log_level = level;
        }

        config.api_base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        let path = default_config_path()?;
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read config: {}", path.display()))
            }
        };
        Self::from_sources(contents.as_deref(), |key| std::env::var(key).ok())
            .with_context(|| format!("failed to load config: {}", path.display()))
    }

    /// The browser has no config file; values are baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        Self::from_sources(None, |key| match key {
            API_BASE_URL_ENV => option_env!("PAWFECT_API_BASE_URL").map(str::to_string),
            LOG_LEVEL_ENV => option_env!("PAWFECT_LOG_LEVEL").map(str::to_string),
            _ => None,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_config_path() -> Result<std::path::PathBuf> {
    let project_dirs = directories::ProjectDirs::from("com", "hellhbbd", "pawfect-match")
        .ok_or_else(|| anyhow::anyhow!("unable to resolve config directory"))?;
    Ok(project_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_apply_without_sources() {
        let config = AppConfig::from_sources(None, no_env).expect("defaults should load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn file_overrides_defaults_and_env_overrides_file() {
        let toml = "api_base_url = \"https://file.test/\"\nlog_level = \"debug\"\n";

        let from_file = AppConfig::from_sources(Some(toml), no_env).expect("file should load");
        assert_eq!(from_file.api_base_url, "https://file.test");
        assert_eq!(from_file.log_level, "debug");

        let from_env = AppConfig::from_sources(Some(toml), |key| {
            (key == API_BASE_URL_ENV).then(|| "https://env.test".to_string())
        })
        .expect("env should load");
        assert_eq!(from_env.api_base_url, "https://env.test");
        assert_eq!(from_env.log_level, "debug");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = AppConfig::from_sources(Some("page_size = 50\n"), no_env);

        assert!(result.is_err(), "unknown key should fail: {result:?}");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config = AppConfig::from_sources(None, |_| Some("  ".to_string())).expect("should load");

        assert_eq!(config, AppConfig::default());
    }
}
