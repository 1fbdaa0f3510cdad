//! Per-message view handed to command handlers

use crate::application::context::BotContext;
use crate::domain::entities::Message;
use super::dispatcher::Controller;

/// Everything a handler may read while answering one message
#[derive(Clone, Copy)]
pub struct Conversation<'a> {
    pub bot: &'a BotContext,
    /// The message with any leading @-mention already stripped
    pub message: &'a Message,
    pub controller: &'a Controller,
}

impl<'a> Conversation<'a> {
    pub fn new(bot: &'a BotContext, message: &'a Message, controller: &'a Controller) -> Self {
        Self { bot, message, controller }
    }

    /// Command text as typed by the user
    pub fn text(&self) -> &str {
        self.message.text.as_deref().unwrap_or_default()
    }

    /// Shorthand for [`BotContext::enrich_command`] on the current message
    pub fn enrich(&self, command: &str) -> String {
        self.bot.enrich_command(self.message, command)
    }
}
