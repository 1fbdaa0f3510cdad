use serde::{Deserialize, Serialize};

/// Kind of room a message was posted in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum RoomType {
    /// Multi-party space, commands need an @-mention of the bot
    Group,
    /// One-to-one space
    Direct,
    Other(String),
}

impl RoomType {
    pub fn as_str(&self) -> &str {
        match self {
            RoomType::Group => "group",
            RoomType::Direct => "direct",
            RoomType::Other(s) => s,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, RoomType::Group)
    }
}

impl Default for RoomType {
    fn default() -> Self {
        RoomType::Other(String::new())
    }
}

impl From<String> for RoomType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "group" => RoomType::Group,
            "direct" => RoomType::Direct,
            _ => RoomType::Other(value),
        }
    }
}

/// A `null` room type reads the same as a missing one
impl From<Option<String>> for RoomType {
    fn from(value: Option<String>) -> Self {
        value.map(RoomType::from).unwrap_or_default()
    }
}

impl From<&str> for RoomType {
    fn from(value: &str) -> Self {
        RoomType::from(value.to_string())
    }
}

impl From<RoomType> for String {
    fn from(value: RoomType) -> Self {
        value.as_str().to_string()
    }
}

/// Represents an incoming chat event as handed over by the webhook
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default = "new_message_id")]
    pub id: String,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub room_type: RoomType,
    #[serde(default)]
    pub person_email: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Wrapped event for relayed messages
    #[serde(default, rename = "original_message", skip_serializing_if = "Option::is_none")]
    pub original_message: Option<Box<Message>>,
}

fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Message {
    pub fn new(room_type: impl Into<RoomType>) -> Self {
        Self {
            id: new_message_id(),
            room_id: None,
            room_type: room_type.into(),
            person_email: None,
            text: None,
            original_message: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    pub fn with_original(mut self, original: Message) -> Self {
        self.original_message = Some(Box::new(original));
        self
    }

    /// Whether this message, or the event it wraps, comes from a group room
    pub fn is_group(&self) -> bool {
        if self.room_type.is_group() {
            return true;
        }
        self.original_message
            .as_ref()
            .map(|original| original.room_type.is_group())
            .unwrap_or(false)
    }
}
