use std::env;
use std::str::FromStr;

use crate::errors::DjError;
use crate::queue::MAX_RECEIVE_BATCH;

pub const DEFAULT_TRIGGER_WORD: &str = "heydj";
pub const DEFAULT_MESSAGE_GROUP_ID: &str = "SlackDJ";

/// What the controller does with a message whose body is not a valid envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedMessagePolicy {
    /// Delete it along with the valid ones. It is lost.
    #[default]
    Delete,
    /// Leave it on the queue for the redrive policy to dead-letter.
    Retain,
}

impl FromStr for MalformedMessagePolicy {
    type Err = DjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delete" => Ok(Self::Delete),
            "retain" => Ok(Self::Retain),
            other => Err(DjError::Config(format!(
                "MALFORMED_MESSAGE_POLICY: expected delete or retain, got {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntakeConfig {
    pub queue_name: Option<String>,
    pub slack_token: String,
    pub trigger_word: String,
    pub message_group_id: String,
}

impl IntakeConfig {
    pub fn from_env() -> Result<Self, DjError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DjError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            queue_name: optional(&lookup, "QUEUE_NAME"),
            slack_token: required(&lookup, "SLACK_TOKEN")?,
            trigger_word: optional(&lookup, "TRIGGER_WORD")
                .unwrap_or_else(|| DEFAULT_TRIGGER_WORD.to_string()),
            message_group_id: optional(&lookup, "MESSAGE_GROUP_ID")
                .unwrap_or_else(|| DEFAULT_MESSAGE_GROUP_ID.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub queue_name: Option<String>,
    pub controller_token: String,
    pub max_messages: i32,
    pub malformed_policy: MalformedMessagePolicy,
}

impl ControllerConfig {
    pub fn from_env() -> Result<Self, DjError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DjError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_messages = match optional(&lookup, "MAX_MESSAGES") {
            Some(raw) => raw
                .parse::<i32>()
                .map_err(|e| DjError::Config(format!("MAX_MESSAGES: {e}")))?
                .clamp(1, MAX_RECEIVE_BATCH),
            None => MAX_RECEIVE_BATCH,
        };

        let malformed_policy = match optional(&lookup, "MALFORMED_MESSAGE_POLICY") {
            Some(raw) => raw.parse()?,
            None => MalformedMessagePolicy::default(),
        };

        Ok(Self {
            queue_name: optional(&lookup, "QUEUE_NAME"),
            controller_token: required(&lookup, "CONTROLLER_TOKEN")?,
            max_messages,
            malformed_policy,
        })
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn required<F>(lookup: &F, key: &str) -> Result<String, DjError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or_else(|| DjError::Config(format!("{key} is not set")))
}
