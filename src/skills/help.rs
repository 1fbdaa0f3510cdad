//! `help` skill: lists the registered commands

use crate::application::errors::SkillError;
use crate::application::messaging::{Controller, Conversation};
use crate::domain::entities::Command;
use super::utils::bullet_list;

pub fn register(controller: &mut Controller) -> Result<(), SkillError> {
    controller.hears(
        Command::new("help")
            .with_description("lists the commands I understand")
            .with_patterns(["^help$", "^what can i do\\??$"])
            .with_handler(|conv| Ok(list_commands(conv))),
    )
}

fn list_commands(conv: &Conversation<'_>) -> String {
    let lines = conv.controller.commands().map(|cmd| match &cmd.description {
        Some(desc) => format!("{}: {}", conv.enrich(&cmd.name), desc),
        None => conv.enrich(&cmd.name),
    });
    format!("Here is what I can do:\n{}", bullet_list(lines))
}
