//! Controller - accepts command registrations and routes messages to them

use std::sync::Arc;

use regex_lite::{Regex, RegexBuilder};

use crate::application::context::BotContext;
use crate::application::errors::{CommandError, SkillError};
use crate::domain::entities::{Command, CommandHandler, Message};
use super::conversation::Conversation;
use super::parser::MessageParser;

struct RegisteredCommand {
    command: Command,
    matchers: Vec<Regex>,
    handler: CommandHandler,
}

impl RegisteredCommand {
    fn matches(&self, text: &str) -> bool {
        self.matchers.iter().any(|re| re.is_match(text))
    }
}

/// Command registry that skills register against.
///
/// Commands are tried in registration order; the first whose pattern matches
/// answers. Unmatched messages go to the fallback handler if one is set.
#[derive(Default)]
pub struct Controller {
    commands: Vec<RegisteredCommand>,
    fallback: Option<CommandHandler>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command
    pub fn hears(&mut self, command: Command) -> Result<(), SkillError> {
        if self.commands.iter().any(|c| c.command.name == command.name) {
            return Err(SkillError::Registration(format!(
                "command '{}' already registered",
                command.name
            )));
        }

        let handler = command.handler.clone().ok_or_else(|| {
            SkillError::Registration(format!("command '{}' has no handler", command.name))
        })?;

        let matchers = command
            .effective_patterns()
            .into_iter()
            .map(|pattern| {
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| SkillError::InvalidPattern {
                        pattern: pattern.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Registered command: {}", command.name);
        self.commands.push(RegisteredCommand {
            command,
            matchers,
            handler,
        });
        Ok(())
    }

    /// Handler for messages no command matched. A later call replaces it.
    pub fn on_fallback<F>(&mut self, handler: F)
    where
        F: Fn(&Conversation<'_>) -> Result<String, CommandError> + Send + Sync + 'static,
    {
        if self.fallback.is_some() {
            tracing::warn!("Replacing existing fallback handler");
        }
        self.fallback = Some(Arc::new(handler));
    }

    /// Registered commands in registration order
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().map(|c| &c.command)
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Answer a message, or `None` when nothing handles it
    pub fn dispatch(
        &self,
        bot: &BotContext,
        message: &Message,
    ) -> Result<Option<String>, CommandError> {
        let normalized = MessageParser::new(bot.mention_name()).normalize(message);
        let text = normalized.text.as_deref().unwrap_or_default();
        let conversation = Conversation::new(bot, &normalized, self);

        if let Some(cmd) = self.commands.iter().find(|c| c.matches(text)) {
            tracing::debug!("Dispatching '{}' to command {}", text, cmd.command.name);
            return (cmd.handler)(&conversation).map(Some);
        }

        match &self.fallback {
            Some(fallback) => {
                tracing::debug!("No command matched '{}', using fallback", text);
                fallback(&conversation).map(Some)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::Commons;

    fn bot() -> BotContext {
        let commons = Commons {
            healthcheck: "https://bot.example.com/ping".into(),
            up_since: "Fri, 16 Oct 2026 09:30:00 GMT".into(),
            version: "v0.1.0".into(),
            owner: None,
            support: None,
            platform: None,
            nickname: "Helper".into(),
            code: None,
        };
        BotContext::new(commons, Some("Helper".into()))
    }

    fn reply(text: &'static str) -> impl Fn(&Conversation<'_>) -> Result<String, CommandError> + Send + Sync + 'static {
        move |_: &Conversation<'_>| Ok(text.to_string())
    }

    #[test]
    fn dispatches_to_matching_command() {
        let mut controller = Controller::new();
        controller
            .hears(Command::new("ping").with_handler(reply("pong")))
            .unwrap();

        let message = Message::new("direct").with_text("PING");
        let answer = controller.dispatch(&bot(), &message).unwrap();
        assert_eq!(answer.as_deref(), Some("pong"));
    }

    #[test]
    fn first_registered_match_wins() {
        let mut controller = Controller::new();
        controller
            .hears(Command::new("first").with_pattern("^st").with_handler(reply("first")))
            .unwrap();
        controller
            .hears(Command::new("status").with_pattern("^status$").with_handler(reply("second")))
            .unwrap();

        let message = Message::new("direct").with_text("status");
        let answer = controller.dispatch(&bot(), &message).unwrap();
        assert_eq!(answer.as_deref(), Some("first"));
    }

    #[test]
    fn group_mention_is_stripped_before_matching() {
        let mut controller = Controller::new();
        controller
            .hears(Command::new("help").with_handler(|conv| Ok(conv.text().to_string())))
            .unwrap();

        let message = Message::new("group").with_text("Helper help");
        let answer = controller.dispatch(&bot(), &message).unwrap();
        assert_eq!(answer.as_deref(), Some("help"));
    }

    #[test]
    fn unmatched_message_uses_fallback() {
        let mut controller = Controller::new();
        assert_eq!(
            controller
                .dispatch(&bot(), &Message::new("direct").with_text("??"))
                .unwrap(),
            None
        );

        controller.on_fallback(|conv| Ok(format!("try {}", conv.enrich("help"))));
        let answer = controller
            .dispatch(&bot(), &Message::new("group").with_text("Helper ??"))
            .unwrap();
        assert_eq!(answer.as_deref(), Some("try `@Helper help`"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let mut controller = Controller::new();
        let err = controller
            .hears(Command::new("bad").with_pattern("(unclosed").with_handler(reply("x")))
            .unwrap_err();
        assert!(matches!(err, SkillError::InvalidPattern { .. }));
        assert!(controller.is_empty());
    }

    #[test]
    fn duplicate_and_handlerless_commands_are_rejected() {
        let mut controller = Controller::new();
        controller
            .hears(Command::new("about").with_handler(reply("a")))
            .unwrap();

        assert!(controller
            .hears(Command::new("about").with_handler(reply("b")))
            .is_err());
        assert!(controller.hears(Command::new("noop")).is_err());
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn handler_errors_propagate() {
        let mut controller = Controller::new();
        controller
            .hears(Command::new("fail").with_handler(|_| {
                Err(CommandError::ExecutionFailed("backend down".into()))
            }))
            .unwrap();

        let result = controller.dispatch(&bot(), &Message::new("direct").with_text("fail"));
        assert!(matches!(result, Err(CommandError::ExecutionFailed(_))));
    }
}
