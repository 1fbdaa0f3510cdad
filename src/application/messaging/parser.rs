//! Message parser - normalizes incoming text before matching

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::domain::entities::Message;

static MENTION_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s,:]+").expect("separator pattern is valid"));

/// Prepares messages for command matching
pub struct MessageParser {
    mention_name: String,
}

impl MessageParser {
    pub fn new(mention_name: impl Into<String>) -> Self {
        Self {
            mention_name: mention_name.into(),
        }
    }

    /// Return a copy of `message` whose text is ready for matching.
    ///
    /// Group rooms deliver the bot's display name in front of the command;
    /// it is removed along with any separator that follows it.
    pub fn normalize(&self, message: &Message) -> Message {
        let mut normalized = message.clone();
        let text = message.text.as_deref().unwrap_or_default().trim();

        let text = if message.is_group() {
            self.strip_mention(text)
        } else {
            text
        };

        normalized.text = Some(text.to_string());
        normalized
    }

    fn strip_mention<'t>(&self, text: &'t str) -> &'t str {
        let name = self.mention_name.as_str();
        let candidate = text.strip_prefix('@').unwrap_or(text);

        let Some(head) = candidate.get(..name.len()) else {
            return text;
        };
        if name.is_empty() || !head.eq_ignore_ascii_case(name) {
            return text;
        }

        let rest = &candidate[name.len()..];
        // "BotNamehelp" is not a mention
        if rest.chars().next().is_some_and(|c| c.is_alphanumeric()) {
            return text;
        }

        match MENTION_SEPARATOR.find(rest) {
            Some(sep) => &rest[sep.end()..],
            None => rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(room: &str, text: &str) -> String {
        let parser = MessageParser::new("Helper");
        let message = Message::new(room).with_text(text);
        parser.normalize(&message).text.unwrap()
    }

    #[test]
    fn strips_mention_in_group_rooms() {
        assert_eq!(normalize("group", "Helper help"), "help");
        assert_eq!(normalize("group", "@helper, about"), "about");
        assert_eq!(normalize("group", "  Helper:   status  "), "status");
    }

    #[test]
    fn keeps_text_in_direct_rooms() {
        assert_eq!(normalize("direct", "Helper help"), "Helper help");
    }

    #[test]
    fn does_not_strip_partial_names() {
        assert_eq!(normalize("group", "Helperbot help"), "Helperbot help");
        assert_eq!(normalize("group", "Hel"), "Hel");
    }

    #[test]
    fn missing_text_becomes_empty() {
        let parser = MessageParser::new("Helper");
        let normalized = parser.normalize(&Message::new("direct"));
        assert_eq!(normalized.text.as_deref(), Some(""));
    }
}
