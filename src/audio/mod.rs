pub mod playback;
pub mod synthesizer;

pub use playback::PlaybackState;
pub use synthesizer::{chunk_text, GoogleTts, SpeechSynthesizer, TtsSettings, MAX_CHUNK_CHARS};
