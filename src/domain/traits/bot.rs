use async_trait::async_trait;
use crate::application::errors::BotError;

/// Bot trait - abstraction for the chat platform side of the conversation
#[async_trait]
pub trait Bot: Send + Sync {
    /// Post a markdown message to a room, returning the platform message id
    async fn send_message(&self, room_id: &str, markdown: &str) -> Result<String, BotError>;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotInfo {
    pub name: String,
    pub platform: String,
}
