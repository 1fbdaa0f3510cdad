//! Bot context - immutable runtime identity shared by every component

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Message;
use crate::infrastructure::config::Config;

/// Mentioned in group rooms when no nickname is configured
pub const DEFAULT_MENTION_NAME: &str = "BotName";

/// Reported by the healthcheck when no nickname is configured
pub const DEFAULT_NICKNAME: &str = "unknown";

/// Runtime identity exposed by the healthcheck endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commons {
    pub healthcheck: String,
    #[serde(rename = "up-since")]
    pub up_since: String,
    pub version: String,
    pub owner: Option<String>,
    pub support: Option<String>,
    pub platform: Option<String>,
    pub nickname: String,
    pub code: Option<String>,
}

impl Commons {
    pub fn from_config(config: &Config, started_at: DateTime<Utc>) -> Self {
        Self {
            healthcheck: config.healthcheck_url(),
            up_since: started_at.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
            version: format!("v{}", env!("CARGO_PKG_VERSION")),
            owner: config.bot.owner.clone(),
            support: config.bot.support.clone(),
            platform: config.bot.platform.clone(),
            nickname: config
                .bot
                .nickname
                .clone()
                .unwrap_or_else(|| DEFAULT_NICKNAME.to_string()),
            code: config.bot.code.clone(),
        }
    }
}

/// Snapshot built once at startup and shared behind an `Arc`
#[derive(Debug, Clone)]
pub struct BotContext {
    commons: Commons,
    nickname: Option<String>,
}

impl BotContext {
    pub fn new(commons: Commons, nickname: Option<String>) -> Self {
        Self { commons, nickname }
    }

    pub fn from_config(config: &Config, started_at: DateTime<Utc>) -> Self {
        Self::new(
            Commons::from_config(config, started_at),
            config.bot.nickname.clone(),
        )
    }

    pub fn commons(&self) -> &Commons {
        &self.commons
    }

    /// Name the bot answers to when @-mentioned
    pub fn mention_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(DEFAULT_MENTION_NAME)
    }

    /// Format `command` for display so that typing it back reaches the bot.
    ///
    /// In group rooms, directly or through a wrapped `original_message`, the
    /// command has to be prefixed with an @-mention.
    pub fn enrich_command(&self, message: &Message, command: &str) -> String {
        if message.is_group() {
            format!("`@{} {}`", self.mention_name(), command)
        } else {
            format!("`{}`", command)
        }
    }
}
