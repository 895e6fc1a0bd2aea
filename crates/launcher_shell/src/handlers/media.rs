//! `spotify` subcommand parsing and delegation to the media collaborator.

use launcher_contract::ShellError;

use crate::context::ExecutionContext;
use crate::services::MediaCommand;

const SPOTIFY_HELP: &str = "Spotify Commands:
----------------
spotify play <song name> - Search and play a song
spotify pause - Pause/resume playback
spotify next - Play next track
spotify prev - Play previous track
spotify shuffle - Toggle shuffle mode
spotify status - Show current track info
spotify volume <0-100> - Set volume
spotify playlists - List your playlists
spotify playlist play <name> - Play a specific playlist
spotify playlist add <name> - Add the current track to a playlist
spotify playlist create <name> - Create a new playlist
spotify recommend - Get song recommendations
spotify queue - View current queue
spotify queue add <song name> - Add song to queue
spotify info - Get detailed track information";

/// Result of reading `spotify` arguments.
#[derive(Debug, PartialEq, Eq)]
enum MediaRequest {
    Help,
    Command(MediaCommand),
}

fn joined(words: &[String]) -> Option<String> {
    let text = words.join(" ").trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn parse_media(arguments: &[String]) -> Result<MediaRequest, ShellError> {
    let Some((subcommand, rest)) = arguments.split_first() else {
        return Ok(MediaRequest::Help);
    };
    let subcommand = subcommand.to_lowercase();
    let command = match subcommand.as_str() {
        "" | "help" => return Ok(MediaRequest::Help),
        "play" => MediaCommand::Play {
            query: joined(rest),
        },
        "pause" => MediaCommand::Pause,
        "next" => MediaCommand::Next,
        "prev" => MediaCommand::Previous,
        "shuffle" => MediaCommand::Shuffle,
        "status" => MediaCommand::Status,
        "volume" => {
            let volume = rest
                .first()
                .and_then(|level| level.trim().parse::<u8>().ok())
                .filter(|level| *level <= 100)
                .ok_or_else(|| ShellError::usage("Usage: spotify volume <0-100>"))?;
            MediaCommand::Volume(volume)
        }
        "playlists" => MediaCommand::Playlists,
        "playlist" => {
            let usage = || ShellError::usage("Usage: spotify playlist [play|add|create] <name>");
            let (action, name) = rest.split_first().ok_or_else(usage)?;
            let name = joined(name).ok_or_else(usage)?;
            match action.to_lowercase().as_str() {
                "play" => MediaCommand::PlaylistPlay(name),
                "add" => MediaCommand::PlaylistAdd(name),
                "create" => MediaCommand::PlaylistCreate(name),
                _ => return Err(usage()),
            }
        }
        "recommend" => MediaCommand::Recommend,
        "queue" => match rest.split_first() {
            Some((action, query)) if action.eq_ignore_ascii_case("add") => {
                let query = joined(query)
                    .ok_or_else(|| ShellError::usage("Usage: spotify queue add <song name>"))?;
                MediaCommand::QueueAdd(query)
            }
            _ => MediaCommand::Queue,
        },
        "info" => MediaCommand::Info,
        other => {
            return Err(ShellError::usage(format!(
                "Unknown Spotify command: {other}\nType 'spotify help' to see available commands"
            )))
        }
    };
    Ok(MediaRequest::Command(command))
}

pub(crate) fn spotify(
    arguments: &[String],
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    let command = match parse_media(arguments)? {
        MediaRequest::Help => {
            ctx.info(SPOTIFY_HELP);
            return Ok(());
        }
        MediaRequest::Command(command) => command,
    };
    tracing::debug!(?command, "media command");
    let lines = ctx
        .services
        .media
        .execute(&command)
        .map_err(|err| ShellError::execution(format!("Error: {err}")))?;
    for line in lines {
        ctx.info(line);
    }
    Ok(())
}
