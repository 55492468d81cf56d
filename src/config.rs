use crate::audio::TtsSettings;
use crate::error::ConfigError;
use crate::quiz::DEFAULT_QUESTIONS;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "study_cards.json";
pub const CONFIG_ENV: &str = "STUDY_CARDS_CONFIG";
pub const DOCUMENT_ENV: &str = "STUDY_CARDS_DOCUMENT";
pub const TTS_LANG_ENV: &str = "STUDY_CARDS_TTS_LANG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub document_path: PathBuf,
    pub tts_language: String,
    pub tts_slow: bool,
    pub tts_endpoint: String,
    pub tts_timeout_secs: u64,
    /// argv of a player that loops the file path appended to it, e.g. `["mpv", "--loop=inf"]`
    pub audio_player: Option<Vec<String>>,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub quiz_default_questions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from("Law Preparation.docx"),
            tts_language: "hi".to_string(),
            tts_slow: false,
            tts_endpoint: "https://translate.google.com/translate_tts".to_string(),
            tts_timeout_secs: 15,
            audio_player: None,
            seed: None,
            log_file: PathBuf::from("study_cards.log"),
            quiz_default_questions: DEFAULT_QUESTIONS,
        }
    }
}

impl AppConfig {
    /// A missing file means defaults; an unreadable or invalid one is an error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Precedence: CLI argument, then environment, then config file, then defaults.
    pub fn load(
        cli_document: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = env(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut config = Self::from_file(&path)?;

        if let Some(document) = env(DOCUMENT_ENV) {
            config.document_path = PathBuf::from(document);
        }
        if let Some(language) = env(TTS_LANG_ENV) {
            config.tts_language = language;
        }
        if let Some(document) = cli_document {
            config.document_path = document;
        }
        Ok(config)
    }

    pub fn tts_settings(&self) -> TtsSettings {
        TtsSettings {
            endpoint: self.tts_endpoint.clone(),
            language: self.tts_language.clone(),
            slow: self.tts_slow,
            timeout: Duration::from_secs(self.tts_timeout_secs),
        }
    }
}

/// Reads the process environment; tests pass closures instead.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
