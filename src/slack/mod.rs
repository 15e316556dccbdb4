//! Slack outgoing-webhook parsing and reply text

pub mod command_parser;
pub mod response_builder;

pub use command_parser::{OutgoingWebhookEvent, ParsedCommand, parse_command_text, parse_form_data};
