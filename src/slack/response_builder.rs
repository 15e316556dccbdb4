//! Chat text sent back to Slack for each command.

use crate::core::models::Command;
use crate::queue::{QueueError, SentMessage};

/// Static reply to `help`.
#[must_use]
pub fn help_text(trigger_word: &str) -> String {
    format!(
        "You can ask me the following:\n\
         *play* - play whatever is queued up\n\
         *stop* - stop the funky beats\n\
         *skip* - skip to the next track\n\
         *nowplaying* - report back what is currently playing\n\
         *nextup* - report back what is coming up\n\
         *request* <songname> by <artist> - request a song be added to the playlist\n\
         eg: {trigger_word} request danger zone by kenny loggins\n"
    )
}

#[must_use]
pub fn request_format_error(user: &str) -> String {
    format!("{user}, requests need to be of the form SONG by ARTIST. Try again.")
}

#[must_use]
pub fn malformed_command(user: &str, trigger_word: &str) -> String {
    format!("{user}, I didn't catch a command. Try `{trigger_word} help`.")
}

/// What the DJ was asked to do, phrased to follow "asked the DJ to" /
/// "unable to ask the DJ to".
fn action_phrase(command: Command, arg: Option<&str>) -> Option<String> {
    let phrase = match command {
        Command::NextUp => "tell us what's spinning next".to_string(),
        Command::NowPlaying => "tell us what's playing now".to_string(),
        Command::Play => "play some funky beats".to_string(),
        Command::Request => format!("play {}", arg.unwrap_or_default()),
        Command::Skip => "skip to the next track".to_string(),
        Command::Stop => "stop the beats".to_string(),
        Command::Help => return None,
    };
    Some(phrase)
}

/// Acknowledgment for a queued command, chosen from the enqueue result.
///
/// Returns `None` for commands that are never queued.
#[must_use]
pub fn acknowledgment(
    command: Command,
    user: &str,
    arg: Option<&str>,
    outcome: &Result<SentMessage, QueueError>,
) -> Option<String> {
    let action = action_phrase(command, arg)?;
    let text = match outcome {
        Ok(_) => format!("OK, {user}. I have asked the DJ to {action}"),
        Err(_) =>format!("I'm sorry {user}. I was unable to ask the DJ to {action}"),
    };
    Some(text)
}
