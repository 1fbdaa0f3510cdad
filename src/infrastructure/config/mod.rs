//! Configuration management
//!
//! Values come from an optional YAML file and are overlaid by environment
//! variables. Everything is resolved once at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_WEBHOOK_PATH: &str = "/ciscospark/receive";
pub const HEALTHCHECK_PATH: &str = "/ping";

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub spark: SparkConfig,
    pub bot: BotConfig,
    pub server: ServerConfig,
    pub skills: SkillsConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SparkConfig {
    pub access_token: Option<String>,
    pub public_url: Option<String>,
    /// Shared secret the platform uses to sign webhook payloads
    pub secret: Option<String>,
    pub webhook_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub environment: String,
    pub nickname: Option<String>,
    pub owner: Option<String>,
    pub support: Option<String>,
    pub platform: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ServerConfig {
    pub port: u16,
    pub webhook_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SkillsConfig {
    /// Directory whose entries select the skills to activate.
    /// When unset every built-in skill is activated.
    pub directory: Option<PathBuf>,
    /// Entry names that live next to skills but are not skills
    pub helpers: Vec<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            nickname: None,
            owner: None,
            support: None,
            platform: None,
            code: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            webhook_path: DEFAULT_WEBHOOK_PATH.to_string(),
        }
    }
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            directory: None,
            helpers: vec!["utils".to_string()],
        }
    }
}

/// Mandatory platform settings, only obtainable from a validated config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub public_url: String,
    pub secret: Option<String>,
    pub webhook_name: String,
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Overlay the process environment on top of this config
    pub fn load_env(self) -> Result<Self, ConfigError> {
        self.overlay(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup` on top of this config.
    ///
    /// Empty values count as unset.
    pub fn overlay<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = var("SPARK_TOKEN") {
            self.spark.access_token = Some(token);
        }
        if let Some(url) = var("PUBLIC_URL") {
            self.spark.public_url = Some(url);
        }
        if let Some(secret) = var("SECRET") {
            self.spark.secret = Some(secret);
        }
        if let Some(name) = var("WEBHOOK_NAME") {
            self.spark.webhook_name = Some(name);
        }

        if let Some(env) = var("BOT_ENV") {
            self.bot.environment = env;
        }
        if let Some(nickname) = var("BOT_NICKNAME") {
            self.bot.nickname = Some(nickname);
        }
        // Lowercase names are what existing deployments already export
        if let Some(owner) = var("owner") {
            self.bot.owner = Some(owner);
        }
        if let Some(support) = var("support") {
            self.bot.support = Some(support);
        }
        if let Some(platform) = var("platform") {
            self.bot.platform = Some(platform);
        }
        if let Some(code) = var("code") {
            self.bot.code = Some(code);
        }

        if let Some(port) = var("PORT") {
            self.server.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                var: "PORT",
                reason: format!("'{}' is not a valid port: {}", port, e),
            })?;
        }
        if let Some(path) = var("WEBHOOK_PATH") {
            self.server.webhook_path = path;
        }

        if let Some(dir) = var("SKILLS_DIR") {
            self.skills.directory = Some(PathBuf::from(dir));
        }
        if let Some(helpers) = var("SKILL_HELPERS") {
            self.skills.helpers = helpers
                .split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(self)
    }

    /// Check the mandatory settings and return them
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let access_token = self
            .spark
            .access_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingVar {
                var: "SPARK_TOKEN",
                hint: "bots require a Webex API access token",
            })?;

        let public_url = self
            .spark
            .public_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingVar {
                var: "PUBLIC_URL",
                hint: "this bot must expose a public endpoint",
            })?;

        if !self.server.webhook_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                var: "WEBHOOK_PATH",
                reason: format!("'{}' must start with '/'", self.server.webhook_path),
            });
        }

        Ok(Credentials {
            access_token,
            public_url,
            secret: self.spark.secret.clone(),
            webhook_name: self.webhook_name(),
        })
    }

    pub fn webhook_name(&self) -> String {
        self.spark
            .webhook_name
            .clone()
            .unwrap_or_else(|| format!("built with spark-bot ({})", self.bot.environment))
    }

    /// Public URL of the healthcheck endpoint
    pub fn healthcheck_url(&self) -> String {
        let base = self.spark.public_url.as_deref().unwrap_or_default();
        format!("{}{}", base.trim_end_matches('/'), HEALTHCHECK_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = Config::default().overlay(env(&[])).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.webhook_path, "/ciscospark/receive");
        assert_eq!(config.bot.environment, "development");
        assert_eq!(config.skills.helpers, vec!["utils".to_string()]);
        assert_eq!(config.webhook_name(), "built with spark-bot (development)");
    }

    #[test]
    fn missing_token_is_reported_first() {
        let config = Config::default().overlay(env(&[])).unwrap();
        match config.credentials() {
            Err(ConfigError::MissingVar { var, .. }) => assert_eq!(var, "SPARK_TOKEN"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn missing_public_url_is_reported() {
        let config = Config::default()
            .overlay(env(&[("SPARK_TOKEN", "abc")]))
            .unwrap();
        match config.credentials() {
            Err(ConfigError::MissingVar { var, .. }) => assert_eq!(var, "PUBLIC_URL"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = Config::default()
            .overlay(env(&[("SPARK_TOKEN", ""), ("PUBLIC_URL", "https://bot.example.com")]))
            .unwrap();
        assert!(config.credentials().is_err());
    }

    #[test]
    fn full_environment_resolves() {
        let config = Config::default()
            .overlay(env(&[
                ("SPARK_TOKEN", "abc"),
                ("PUBLIC_URL", "https://bot.example.com/"),
                ("SECRET", "s3cr3t"),
                ("BOT_ENV", "production"),
                ("BOT_NICKNAME", "Helper"),
                ("owner", "alice@example.com"),
                ("PORT", "8080"),
                ("SKILL_HELPERS", "utils, shared ,"),
            ]))
            .unwrap();

        let creds = config.credentials().unwrap();
        assert_eq!(creds.access_token, "abc");
        assert_eq!(creds.secret.as_deref(), Some("s3cr3t"));
        assert_eq!(creds.webhook_name, "built with spark-bot (production)");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.bot.nickname.as_deref(), Some("Helper"));
        assert_eq!(config.bot.owner.as_deref(), Some("alice@example.com"));
        assert_eq!(config.skills.helpers, vec!["utils".to_string(), "shared".to_string()]);
        assert_eq!(config.healthcheck_url(), "https://bot.example.com/ping");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::default()
            .overlay(env(&[("PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "PORT", .. }));
    }

    #[test]
    fn webhook_path_must_be_absolute() {
        let config = Config::default()
            .overlay(env(&[
                ("SPARK_TOKEN", "abc"),
                ("PUBLIC_URL", "https://bot.example.com"),
                ("WEBHOOK_PATH", "hooks"),
            ]))
            .unwrap();
        assert!(matches!(
            config.credentials(),
            Err(ConfigError::InvalidValue { var: "WEBHOOK_PATH", .. })
        ));
    }

    #[test]
    fn yaml_file_is_overridden_by_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "spark:\n  access-token: from-file\n  public-url: https://file.example.com\nbot:\n  nickname: FileBot\nserver:\n  port: 4000\n",
        )
        .unwrap();

        let config = Config::load(&path)
            .unwrap()
            .overlay(env(&[("SPARK_TOKEN", "from-env")]))
            .unwrap();

        assert_eq!(config.spark.access_token.as_deref(), Some("from-env"));
        assert_eq!(config.spark.public_url.as_deref(), Some("https://file.example.com"));
        assert_eq!(config.bot.nickname.as_deref(), Some("FileBot"));
        assert_eq!(config.bot.environment, "development");
        assert_eq!(config.server.port, 4000);
    }
}
