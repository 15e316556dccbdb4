use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DjError;

/// Commands a Slack user can give the DJ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Play,
    Stop,
    Skip,
    NowPlaying,
    NextUp,
    Request,
    Help,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Play,
        Command::Stop,
        Command::Skip,
        Command::NowPlaying,
        Command::NextUp,
        Command::Request,
        Command::Help,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Stop => "stop",
            Command::Skip => "skip",
            Command::NowPlaying => "nowplaying",
            Command::NextUp => "nextup",
            Command::Request => "request",
            Command::Help => "help",
        }
    }

    /// `help` is answered by the intake Lambda and never queued.
    #[must_use]
    pub fn is_local(self) -> bool {
        matches!(self, Command::Help)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = DjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DjError::UnknownCommand(s.to_string()))
    }
}

/// The message exchanged through the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    pub command: Command,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
}

impl CommandEnvelope {
    /// Build an envelope; an empty `arg` is dropped.
    #[must_use]
    pub fn new(command: Command, user: impl Into<String>, arg: Option<String>) -> Self {
        Self {
            command,
            user: user.into(),
            arg: arg.filter(|a| !a.is_empty()),
        }
    }
}
