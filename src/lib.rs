pub mod app;
pub mod audio;
pub mod config;
pub mod deck;
pub mod document;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod parser;
pub mod player;
pub mod quiz;
pub mod speech_worker;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use audio::{GoogleTts, PlaybackState, SpeechSynthesizer, TtsSettings};
pub use config::AppConfig;
pub use deck::Deck;
pub use document::{load_flashcards, load_paragraphs};
pub use error::{AudioError, ConfigError, DocumentError, QuizError};
pub use input::action_for_key;
pub use models::{Action, AudioSource, Card, Notice, QuizPhase, QuizQuestion, QuizScore, ScoreBand, Tab};
pub use parser::parse_cards;
pub use player::AudioPlayer;
pub use quiz::{QuestionCountPicker, QuizSession};
pub use speech_worker::{SpeechRequest, SpeechResponse, SpeechWorker};
pub use ui::draw;
