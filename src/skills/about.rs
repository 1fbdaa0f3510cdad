//! `about` skill: reports the bot identity and commons metadata

use crate::application::errors::SkillError;
use crate::application::messaging::{Controller, Conversation};
use crate::domain::entities::Command;
use super::utils::{bullet_list, or_unset};

pub fn register(controller: &mut Controller) -> Result<(), SkillError> {
    controller.hears(
        Command::new("about")
            .with_description("shows metadata about this bot")
            .with_patterns(["^about$", "^whoami$", "^version$"])
            .with_handler(|conv| Ok(describe(conv))),
    )
}

fn describe(conv: &Conversation<'_>) -> String {
    let commons = conv.bot.commons();
    let details = bullet_list([
        format!("version: {}", commons.version),
        format!("owner: {}", or_unset(commons.owner.as_deref())),
        format!("support: {}", or_unset(commons.support.as_deref())),
        format!("platform: {}", or_unset(commons.platform.as_deref())),
        format!("code: {}", or_unset(commons.code.as_deref())),
        format!("up since: {}", commons.up_since),
    ]);
    format!("I am **{}**, a Webex bot.\n\n{}", commons.nickname, details)
}
