//! Loops the current audio through an external player, if one is configured.

use crate::audio::PlaybackState;
use crate::logger;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

pub struct AudioPlayer {
    command: Option<Vec<String>>,
    file: PathBuf,
    child: Option<Child>,
    playing_id: Option<u64>,
}

impl AudioPlayer {
    pub fn new(command: Option<Vec<String>>) -> Self {
        let file = std::env::temp_dir().join(format!("study-cards-{}.mp3", std::process::id()));
        Self {
            command: command.filter(|argv| !argv.is_empty()),
            file,
            child: None,
            playing_id: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.command.is_some()
    }

    /// Start, restart or stop the player so it matches the playback state.
    pub fn sync(&mut self, playback: &PlaybackState) -> io::Result<()> {
        let wanted = playback.playing_id();
        if wanted == self.playing_id {
            return Ok(());
        }
        self.stop();

        if let (Some(id), Some(audio)) = (wanted, playback.audio()) {
            self.playing_id = Some(id);
            self.start(audio)?;
        }
        Ok(())
    }

    fn start(&mut self, audio: &[u8]) -> io::Result<()> {
        let Some(argv) = &self.command else {
            return Ok(());
        };
        let Some((program, args)) = argv.split_first() else {
            return Ok(());
        };

        fs::write(&self.file, audio)?;
        let child = Command::new(program)
            .args(args)
            .arg(&self.file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        logger::log(&format!("Started player {} (pid {})", program, child.id()));
        self.child = Some(child);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.playing_id = None;
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        if self.file.exists() {
            let _ = fs::remove_file(&self.file);
        }
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AudioSource;

    fn playing_state(bytes: Vec<u8>) -> PlaybackState {
        let mut playback = PlaybackState::new();
        let id = playback.begin(AudioSource::Question);
        playback.complete(id, Ok(bytes)).unwrap();
        playback
    }

    #[test]
    fn test_unconfigured_player_only_tracks_state() {
        let mut player = AudioPlayer::new(None);
        assert!(!player.is_configured());
        let playback = playing_state(vec![1, 2, 3]);
        player.sync(&playback).unwrap();
        assert!(player.child.is_none());
        assert_eq!(player.playing_id, playback.playing_id());
    }

    #[test]
    fn test_empty_command_counts_as_unconfigured() {
        assert!(!AudioPlayer::new(Some(Vec::new())).is_configured());
    }

    #[cfg(unix)]
    #[test]
    fn test_player_spawns_and_stops() {
        let argv = ["sh", "-c", "sleep 30", "player"].map(String::from).to_vec();
        let mut player = AudioPlayer::new(Some(argv));
        let temp_dir = tempfile::tempdir().unwrap();
        player.file = temp_dir.path().join("clip.mp3");
        let mut playback = playing_state(vec![0xff, 0xfb]);

        player.sync(&playback).unwrap();
        assert!(player.child.is_some());
        assert_eq!(fs::read(&player.file).unwrap(), vec![0xff, 0xfb]);

        playback.stop();
        player.sync(&playback).unwrap();
        assert!(player.child.is_none());
        assert!(!player.file.exists());
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let mut player = AudioPlayer::new(Some(vec!["study-cards-no-such-player".to_string()]));
        let temp_dir = tempfile::tempdir().unwrap();
        player.file = temp_dir.path().join("clip.mp3");
        let playback = playing_state(vec![1]);
        assert!(player.sync(&playback).is_err());
    }
}
