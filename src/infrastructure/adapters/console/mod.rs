//! Console adapter for development/testing
//!
//! Replies are written to the log and stdout instead of being posted to
//! the platform.

use async_trait::async_trait;
use crate::domain::traits::{Bot, BotInfo};
use crate::application::errors::BotError;

/// Console bot adapter for local development
pub struct ConsoleAdapter {
    info: BotInfo,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: BotInfo {
                name: name.into(),
                platform: "console".to_string(),
            },
        }
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new("spark-bot")
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn send_message(&self, room_id: &str, markdown: &str) -> Result<String, BotError> {
        tracing::info!("Reply to room {}: {}", room_id, markdown);
        println!("[BOT -> {}] {}", room_id, markdown);
        Ok(uuid::Uuid::new_v4().to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_returns_message_id() {
        let adapter = ConsoleAdapter::new("Helper");
        let id = adapter.send_message("room-1", "hello").await.unwrap();
        assert!(!id.is_empty());
        assert_eq!(adapter.bot_info().name, "Helper");
        assert_eq!(adapter.bot_info().platform, "console");
    }
}
