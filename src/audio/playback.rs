use crate::error::AudioError;
use crate::models::AudioSource;

/// Audio bytes plus the playing flag. At most one synthesis is pending; a newer request
/// makes older replies stale.
#[derive(Debug, Default)]
pub struct PlaybackState {
    audio: Option<Vec<u8>>,
    playing: bool,
    source: Option<AudioSource>,
    pending: Option<u64>,
    last_id: u64,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn audio(&self) -> Option<&[u8]> {
        self.audio.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn source(&self) -> Option<AudioSource> {
        self.source
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the request whose audio is playing right now.
    pub fn playing_id(&self) -> Option<u64> {
        (self.playing && self.audio.is_some()).then_some(self.last_id)
    }

    /// Drop whatever is playing and reserve an id for a new synthesis.
    pub fn begin(&mut self, source: AudioSource) -> u64 {
        self.last_id += 1;
        self.audio = None;
        self.playing = false;
        self.source = Some(source);
        self.pending = Some(self.last_id);
        self.last_id
    }

    /// `Ok(true)` when playback started, `Ok(false)` for a stale reply.
    pub fn complete(
        &mut self,
        id: u64,
        result: Result<Vec<u8>, AudioError>,
    ) -> Result<bool, AudioError> {
        if self.pending != Some(id) {
            return Ok(false);
        }
        self.pending = None;

        match result {
            Ok(bytes) => {
                self.audio = Some(bytes);
                self.playing = true;
                Ok(true)
            }
            Err(e) => {
                self.audio = None;
                self.playing = false;
                self.source = None;
                Err(e)
            }
        }
    }

    pub fn stop(&mut self) {
        self.audio = None;
        self.playing = false;
        self.source = None;
        self.pending = None;
    }
}
