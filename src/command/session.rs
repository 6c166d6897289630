//! Interactive command loop

use super::parser::{Command, HELP_TEXT};
use crate::player::{Output, Result as PlayerResult, VideoPlayer};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const WELCOME: &str = "Hello and welcome to YouTube, what would you like to do?";
const HINT: &str = "Enter HELP for list of available commands or EXIT to terminate.";
const PROMPT: &str = "YT> ";
const GOODBYE: &str = "YouTube has now terminated its execution. Thank you and goodbye!";

/// Reads commands line by line and writes every result line back
pub struct Session<'a> {
    player: &'a mut VideoPlayer,
}

impl<'a> Session<'a> {
    pub fn new(player: &'a mut VideoPlayer) -> Self {
        Self { player }
    }

    /// Run until `EXIT` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{WELCOME}")?;
        writeln!(output, "{HINT}")?;

        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                log::debug!("End of input, leaving session");
                writeln!(output)?;
                break;
            };
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::debug!("Rejected command {:?}: {:?}", line, err);
                    writeln!(output, "{err}")?;
                    continue;
                }
            };

            if command == Command::Exit {
                break;
            }

            match self.execute(command) {
                Ok(result) => {
                    for text in result.lines() {
                        writeln!(output, "{text}")?;
                    }
                }
                Err(err) => {
                    log::debug!("Command {:?} failed ({:?})", line, err.kind());
                    writeln!(output, "{err}")?;
                }
            }
        }

        writeln!(output, "{GOODBYE}")?;
        output.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Dispatch one command to the player
    pub fn execute(&mut self, command: Command) -> PlayerResult<Output> {
        let player = &mut *self.player;
        match command {
            Command::NumberOfVideos => player.number_of_videos(),
            Command::ShowAllVideos => player.show_all_videos(),
            Command::Play { video_id } => player.play_video(&video_id),
            Command::Stop => player.stop_video(),
            Command::PlayRandom => player.play_random_video(),
            Command::Pause => player.pause_video(),
            Command::Continue => player.continue_video(),
            Command::ShowPlaying => player.show_playing(),
            Command::CreatePlaylist { name } => player.create_playlist(&name),
            Command::AddToPlaylist { name, video_id } => player.add_to_playlist(&name, &video_id),
            Command::ShowAllPlaylists => player.show_all_playlists(),
            Command::ShowPlaylist { name } => player.show_playlist(&name),
            Command::RemoveFromPlaylist { name, video_id } => {
                player.remove_from_playlist(&name, &video_id)
            }
            Command::ClearPlaylist { name } => player.clear_playlist(&name),
            Command::DeletePlaylist { name } => player.delete_playlist(&name),
            Command::SearchVideos { term } => player.search_videos(&term),
            Command::SearchVideosWithTag { tag } => player.search_videos_tag(&tag),
            Command::FlagVideo { video_id, reason } => {
                player.flag_video(&video_id, reason.as_deref())
            }
            Command::AllowVideo { video_id } => player.allow_video(&video_id),
            Command::Help => Ok(HELP_TEXT.lines().fold(Output::new(), |mut out, line| {
                out.push(line);
                out
            })),
            Command::Exit => Ok(Output::new()),
        }
    }
}
