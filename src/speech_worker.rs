use crate::audio::SpeechSynthesizer;
use crate::error::AudioError;
use crate::logger;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::io;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub id: u64,
    pub text: String,
}

#[derive(Debug)]
pub enum SpeechResponse {
    Audio { id: u64, bytes: Vec<u8> },
    Failed { id: u64, error: AudioError },
}

impl SpeechResponse {
    pub fn id(&self) -> u64 {
        match self {
            Self::Audio { id, .. } | Self::Failed { id, .. } => *id,
        }
    }

    pub fn into_result(self) -> (u64, Result<Vec<u8>, AudioError>) {
        match self {
            Self::Audio { id, bytes } => (id, Ok(bytes)),
            Self::Failed { id, error } => (id, Err(error)),
        }
    }
}

/// Runs synthesis off the UI thread. Dropping the request sender ends the worker.
pub fn spawn_speech_worker(
    synthesizer: Arc<dyn SpeechSynthesizer>,
    responses: Sender<SpeechResponse>,
    requests: Receiver<SpeechRequest>,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("study-cards::speech_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("Speech worker could not start a runtime: {}", e));
                    return;
                }
            };

            while let Ok(mut request) = requests.recv() {
                // only the newest queued request is still wanted
                while let Ok(newer) = requests.try_recv() {
                    logger::log(&format!("Speech request {} superseded by {}", request.id, newer.id));
                    request = newer;
                }
                let SpeechRequest { id, text } = request;
                logger::log(&format!(
                    "Speech worker received request {} ({} chars)",
                    id,
                    text.chars().count()
                ));
                let response = match rt.block_on(synthesizer.synthesize(&text)) {
                    Ok(bytes) => SpeechResponse::Audio { id, bytes },
                    Err(error) => {
                        logger::log(&format!("Speech request {} failed: {}", id, error));
                        SpeechResponse::Failed { id, error }
                    }
                };
                if responses.send(response).is_err() {
                    break;
                }
            }
            logger::log("Speech worker channel disconnected, exiting");
        })
}

/// Both ends of the worker's channels plus its thread.
pub struct SpeechWorker {
    requests: Sender<SpeechRequest>,
    responses: Receiver<SpeechResponse>,
    handle: thread::JoinHandle<()>,
}

impl SpeechWorker {
    pub fn spawn(synthesizer: Arc<dyn SpeechSynthesizer>) -> io::Result<Self> {
        let (request_tx, request_rx) = crossbeam_channel::unbounded();
        let (response_tx, response_rx) = crossbeam_channel::unbounded();
        let handle = spawn_speech_worker(synthesizer, response_tx, request_rx)?;
        Ok(Self {
            requests: request_tx,
            responses: response_rx,
            handle,
        })
    }

    pub fn request(&self, request: SpeechRequest) -> Result<(), AudioError> {
        self.requests
            .send(request)
            .map_err(|_| AudioError::WorkerUnavailable)
    }

    pub fn try_recv(&self) -> Option<SpeechResponse> {
        match self.responses.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn responses(&self) -> &Receiver<SpeechResponse> {
        &self.responses
    }

    pub fn shutdown(self) {
        drop(self.requests);
        if self.handle.join().is_err() {
            logger::log("Speech worker panicked");
        }
    }
}
