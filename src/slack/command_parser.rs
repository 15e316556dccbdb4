use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use crate::errors::DjError;

/// Structure representing a Slack outgoing-webhook post.
///
/// `token` and `trigger_word` are optional so a missing value can be told
/// apart from a wrong one.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutgoingWebhookEvent {
    pub token: Option<String>,
    pub team_id: String,
    pub team_domain: String,
    pub channel_id: String,
    pub channel_name: String,
    pub service_id: String,
    pub timestamp: String,
    pub trigger_word: Option<String>,
    pub text: String,
    pub user_id: String,
    pub user_name: String,
}

/// A chat command split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub trigger: String,
    pub command: String,
    pub arg: Option<String>,
}

/// Decodes a URL-encoded form component, treating `+` as a space.
///
/// Byte sequences that are not valid UTF-8 become U+FFFD rather than
/// failing the whole request.
///
/// # Examples
///
/// ```
/// use heydj::slack::command_parser::decode_url_component;
///
/// assert_eq!(decode_url_component("danger+zone%21"), "danger zone!");
/// assert_eq!(decode_url_component("caf%E9"), "caf\u{FFFD}");
/// ```
#[must_use]
pub fn decode_url_component(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Parses the URL-encoded body Slack posts to an outgoing webhook.
///
/// Unknown fields are ignored and missing ones default to empty.
///
/// # Examples
///
/// ```
/// use heydj::slack::command_parser::parse_form_data;
///
/// let form_data = "token=abc123&trigger_word=heydj&\
///                  text=heydj+request+stand+by+REM&user_name=alice";
///
/// let event = parse_form_data(form_data);
/// assert_eq!(event.text, "heydj request stand by REM");
/// assert_eq!(event.user_name, "alice");
/// ```
#[must_use]
pub fn parse_form_data(form_data: &str) -> OutgoingWebhookEvent {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_data.split('&') {
        let Some((raw_key, raw_value)) = pair.split_once('=') else {
            continue;
        };
        let key = decode_url_component(raw_key);
        let value = decode_url_component(raw_value);
        // First occurrence wins.
        map.entry(key).or_insert(value);
    }

    let mut take = |name: &str| map.remove(name);

    OutgoingWebhookEvent {
        token: take("token"),
        team_id: take("team_id").unwrap_or_default(),
        team_domain: take("team_domain").unwrap_or_default(),
        channel_id: take("channel_id").unwrap_or_default(),
        channel_name: take("channel_name").unwrap_or_default(),
        service_id: take("service_id").unwrap_or_default(),
        timestamp: take("timestamp").unwrap_or_default(),
        trigger_word: take("trigger_word"),
        text: take("text").unwrap_or_default(),
        user_id: take("user_id").unwrap_or_default(),
        user_name: take("user_name").unwrap_or_default(),
    }
}

/// Split command text into trigger word, command word, and argument.
///
/// Words are separated by whitespace; everything after the command word is
/// rejoined with single spaces.
///
/// # Errors
///
/// Returns `DjError::MalformedCommand` if the text has fewer than two words.
pub fn parse_command_text(text: &str) -> Result<ParsedCommand, DjError> {
    let mut words = text.split_whitespace();

    let Some(trigger) = words.next() else {
        return Err(DjError::MalformedCommand("empty command text".to_string()));
    };
    let Some(command) = words.next() else {
        return Err(DjError::MalformedCommand(format!(
            "no command after trigger word {trigger}"
        )));
    };

    let arg = words.collect::<Vec<_>>().join(" ");

    Ok(ParsedCommand {
        trigger: trigger.to_string(),
        command: command.to_string(),
        arg: (!arg.is_empty()).then_some(arg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_without_argument_has_no_arg() {
        let parsed = parse_command_text("heydj skip").unwrap();
        assert_eq!(parsed.trigger, "heydj");
        assert_eq!(parsed.command, "skip");
        assert_eq!(parsed.arg, None);
    }

    #[test]
    fn argument_is_rejoined_with_single_spaces() {
        let parsed = parse_command_text("heydj  request danger   zone by kenny loggins").unwrap();
        assert_eq!(parsed.command, "request");
        assert_eq!(parsed.arg.as_deref(), Some("danger zone by kenny loggins"));
    }

    #[test]
    fn trigger_word_alone_is_malformed() {
        assert!(matches!(
            parse_command_text("heydj"),
            Err(DjError::MalformedCommand(_))
        ));
        assert!(matches!(
            parse_command_text("   "),
            Err(DjError::MalformedCommand(_))
        ));
    }
}
