use std::sync::Arc;

use crate::application::errors::CommandError;
use crate::application::messaging::Conversation;

/// Command handler function type
pub type CommandHandler =
    Arc<dyn Fn(&Conversation<'_>) -> Result<String, CommandError> + Send + Sync>;

/// Represents a bot command a skill registers on the controller
#[derive(Clone)]
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    /// Regular expressions matched case-insensitively against the message text.
    /// When empty the command answers to its own name.
    pub patterns: Vec<String>,
    pub handler: Option<CommandHandler>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            patterns: Vec::new(),
            handler: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Conversation<'_>) -> Result<String, CommandError> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Patterns to compile, falling back to an exact match on the name
    pub fn effective_patterns(&self) -> Vec<String> {
        if self.patterns.is_empty() {
            vec![format!("^{}$", regex_lite::escape(&self.name))]
        } else {
            self.patterns.clone()
        }
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("patterns", &self.patterns)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
