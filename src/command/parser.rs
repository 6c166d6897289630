//! Command grammar
//!
//! One command per line, words separated by whitespace. The command word is
//! case-insensitive; arguments are passed through verbatim.

use std::str::FromStr;

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    ShowAllPlaylists,
    ShowPlaylist { name: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

/// Command line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    WrongArguments { command: String, expected: &'static str },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words
            .next()
            .ok_or_else(|| CommandError::Unknown(String::new()))?
            .to_uppercase();
        let args: Vec<String> = words.map(str::to_string).collect();

        let arity = |expected: &'static str| CommandError::WrongArguments {
            command: word.clone(),
            expected,
        };

        let command = match (word.as_str(), args.as_slice()) {
            ("NUMBER_OF_VIDEOS", []) => Command::NumberOfVideos,
            ("SHOW_ALL_VIDEOS", []) => Command::ShowAllVideos,
            ("PLAY", [id]) => Command::Play {
                video_id: id.clone(),
            },
            ("STOP", []) => Command::Stop,
            ("PLAY_RANDOM", []) => Command::PlayRandom,
            ("PAUSE", []) => Command::Pause,
            ("CONTINUE", []) => Command::Continue,
            ("SHOW_PLAYING", []) => Command::ShowPlaying,
            ("CREATE_PLAYLIST", [name]) => Command::CreatePlaylist { name: name.clone() },
            ("ADD_TO_PLAYLIST", [name, id]) => Command::AddToPlaylist {
                name: name.clone(),
                video_id: id.clone(),
            },
            ("SHOW_ALL_PLAYLISTS", []) => Command::ShowAllPlaylists,
            ("SHOW_PLAYLIST", [name]) => Command::ShowPlaylist { name: name.clone() },
            ("REMOVE_FROM_PLAYLIST", [name, id]) => Command::RemoveFromPlaylist {
                name: name.clone(),
                video_id: id.clone(),
            },
            ("CLEAR_PLAYLIST", [name]) => Command::ClearPlaylist { name: name.clone() },
            ("DELETE_PLAYLIST", [name]) => Command::DeletePlaylist { name: name.clone() },
            ("SEARCH_VIDEOS", [term]) => Command::SearchVideos { term: term.clone() },
            ("SEARCH_VIDEOS_WITH_TAG", [tag]) => Command::SearchVideosWithTag { tag: tag.clone() },
            ("FLAG_VIDEO", [id, reason @ ..]) => Command::FlagVideo {
                video_id: id.clone(),
                reason: (!reason.is_empty()).then(|| reason.join(" ")),
            },
            ("ALLOW_VIDEO", [id]) => Command::AllowVideo {
                video_id: id.clone(),
            },
            ("HELP", []) => Command::Help,
            ("EXIT", []) => Command::Exit,

            ("NUMBER_OF_VIDEOS" | "SHOW_ALL_VIDEOS" | "STOP" | "PLAY_RANDOM" | "PAUSE"
            | "CONTINUE" | "SHOW_PLAYING" | "SHOW_ALL_PLAYLISTS" | "HELP" | "EXIT", _) => {
                return Err(arity("no arguments"))
            }
            ("PLAY" | "ALLOW_VIDEO" | "FLAG_VIDEO", _) => return Err(arity("<video_id>")),
            ("CREATE_PLAYLIST" | "SHOW_PLAYLIST" | "CLEAR_PLAYLIST" | "DELETE_PLAYLIST", _) => {
                return Err(arity("<playlist_name>"))
            }
            ("ADD_TO_PLAYLIST" | "REMOVE_FROM_PLAYLIST", _) => {
                return Err(arity("<playlist_name> <video_id>"))
            }
            ("SEARCH_VIDEOS" | "SEARCH_VIDEOS_WITH_TAG", _) => return Err(arity("<search_term>")),
            _ => return Err(CommandError::Unknown(word.clone())),
        };

        Ok(command)
    }
}

/// Text printed for `HELP`
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, url and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_word_is_case_insensitive() {
        assert_eq!("play cats".parse::<Command>().unwrap(), Command::Play {
            video_id: "cats".to_string()
        });
        assert_eq!("Show_All_Playlists".parse::<Command>().unwrap(), Command::ShowAllPlaylists);
    }

    #[test]
    fn test_arguments_keep_their_case() {
        assert_eq!(
            "ADD_TO_PLAYLIST My_List Cats_Id".parse::<Command>().unwrap(),
            Command::AddToPlaylist {
                name: "My_List".to_string(),
                video_id: "Cats_Id".to_string()
            }
        );
    }

    #[test]
    fn test_flag_reason_is_optional_and_joined() {
        assert_eq!(
            "FLAG_VIDEO cats".parse::<Command>().unwrap(),
            Command::FlagVideo {
                video_id: "cats".to_string(),
                reason: None
            }
        );
        assert_eq!(
            "FLAG_VIDEO cats too many cats".parse::<Command>().unwrap(),
            Command::FlagVideo {
                video_id: "cats".to_string(),
                reason: Some("too many cats".to_string())
            }
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            "PLAY".parse::<Command>().unwrap_err(),
            CommandError::WrongArguments {
                command: "PLAY".to_string(),
                expected: "<video_id>"
            }
        );
        assert!("STOP now".parse::<Command>().is_err());
        assert!("ADD_TO_PLAYLIST only_name".parse::<Command>().is_err());
    }

    #[test]
    fn test_unknown_and_empty() {
        let err = "DANCE".parse::<Command>().unwrap_err();
        assert_eq!(err, CommandError::Unknown("DANCE".to_string()));
        assert_eq!(
            err.to_string(),
            "Please enter a valid command, type HELP for a list of available commands."
        );
        assert!("   ".parse::<Command>().is_err());
    }
}
