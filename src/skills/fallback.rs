//! `fallback` skill: answers messages no command matched

use crate::application::errors::SkillError;
use crate::application::messaging::Controller;

pub fn register(controller: &mut Controller) -> Result<(), SkillError> {
    controller.on_fallback(|conv| {
        Ok(format!(
            "Sorry, I did not understand. Try {}.",
            conv.enrich("help")
        ))
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::BotContext;
    use crate::domain::entities::Message;
    use crate::infrastructure::config::Config;

    #[test]
    fn suggests_help() {
        let bot = BotContext::from_config(&Config::default(), chrono::Utc::now());
        let mut controller = Controller::new();
        register(&mut controller).unwrap();

        let message = Message::new("direct").with_original(Message::new("group")).with_text("xyz");
        let reply = controller.dispatch(&bot, &message).unwrap();
        assert_eq!(
            reply.as_deref(),
            Some("Sorry, I did not understand. Try `@BotName help`.")
        );
    }
}
