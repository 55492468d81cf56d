use crate::error::AudioError;
use crate::logger;
use async_trait::async_trait;
use std::time::Duration;

/// The translate endpoint rejects longer inputs.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Text in, encoded audio out. Implementations may be slow and may fail; callers do not retry.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, AudioError>;
}

#[derive(Debug, Clone)]
pub struct TtsSettings {
    pub endpoint: String,
    pub language: String,
    pub slow: bool,
    pub timeout: Duration,
}

/// Google Translate's MP3 speech endpoint.
#[derive(Debug)]
pub struct GoogleTts {
    client: reqwest::Client,
    settings: TtsSettings,
}

impl GoogleTts {
    pub fn new(settings: TtsSettings) -> Result<Self, AudioError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { client, settings })
    }

    fn speed(&self) -> &'static str {
        if self.settings.slow { "0.3" } else { "1" }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, AudioError> {
        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(AudioError::EmptyText);
        }

        let total = chunks.len().to_string();
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let idx = idx.to_string();
            let textlen = chunk.chars().count().to_string();
            let response = self
                .client
                .get(&self.settings.endpoint)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", self.settings.language.as_str()),
                    ("q", chunk.as_str()),
                    ("total", total.as_str()),
                    ("idx", idx.as_str()),
                    ("textlen", textlen.as_str()),
                    ("ttsspeed", self.speed()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                logger::log(&format!("TTS chunk {} rejected with {}", idx, status));
                return Err(AudioError::Status(status.as_u16()));
            }
            audio.extend_from_slice(&response.bytes().await?);
        }

        if audio.is_empty() {
            return Err(AudioError::EmptyAudio);
        }
        Ok(audio)
    }
}

/// Split on whitespace into pieces of at most `max_chars` characters.
/// Words longer than the limit are cut by character.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answers one connection per canned reply, in order, and hands back the request lines.
    fn serve(replies: Vec<(&'static str, Vec<u8>)>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/translate_tts", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let mut request_lines = Vec::new();
            for (status, body) in replies {
                let (mut stream, _) = listener.accept().unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let request = String::from_utf8_lossy(&request).to_string();
                request_lines.push(request.lines().next().unwrap_or_default().to_string());

                let head = format!(
                    "HTTP/1.1 {}\r\nContent-Type: audio/mpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    status,
                    body.len()
                );
                stream.write_all(head.as_bytes()).unwrap();
                stream.write_all(&body).unwrap();
            }
            request_lines
        });
        (endpoint, handle)
    }

    fn tts_for(endpoint: String) -> GoogleTts {
        GoogleTts::new(TtsSettings {
            endpoint,
            language: "hi".to_string(),
            slow: false,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(chunk_text("  What is law? ", 100), vec!["What is law?"]);
    }

    #[test]
    fn test_blank_text_has_no_chunks() {
        assert!(chunk_text(" \n\t ", 100).is_empty());
    }

    #[test]
    fn test_chunks_respect_limit_and_keep_words() {
        let text = "one two three four five six seven eight nine ten";
        let chunks = chunk_text(text, 10);
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
        assert_eq!(chunks.join(" "), text);
        assert_eq!(chunks[0], "one two");
    }

    #[test]
    fn test_long_word_is_cut() {
        let chunks = chunk_text("ab abcdefghij cd", 4);
        assert_eq!(chunks, vec!["ab", "abcd", "efgh", "ij", "cd"]);
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // every Devanagari letter here is three bytes
        let text = "कानून नियमों की प्रणाली";
        let chunks = chunk_text(text, 12);
        assert_eq!(chunks, vec!["कानून नियमों", "की प्रणाली"]);
    }

    #[tokio::test]
    async fn test_google_tts_rejects_empty_text() {
        let tts = GoogleTts::new(TtsSettings {
            endpoint: "http://127.0.0.1:9/unused".to_string(),
            language: "hi".to_string(),
            slow: false,
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        let result = tts.synthesize("   ").await;
        assert!(matches!(result, Err(AudioError::EmptyText)));
    }

    #[tokio::test]
    async fn test_google_tts_joins_chunks_in_order() {
        let (endpoint, server) = serve(vec![
            ("200 OK", b"ID3-first".to_vec()),
            ("200 OK", b"-second".to_vec()),
        ]);
        let text = format!("{} {}", "a".repeat(60), "b".repeat(60));

        let audio = tts_for(endpoint).synthesize(&text).await.unwrap();
        assert_eq!(audio, b"ID3-first-second".to_vec());

        let requests = server.join().unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].contains("idx=0"));
        assert!(requests[0].contains("total=2"));
        assert!(requests[0].contains(&format!("q={}", "a".repeat(60))));
        assert!(requests[0].contains("tl=hi"));
        assert!(requests[1].contains("idx=1"));
        assert!(requests[1].contains(&format!("q={}", "b".repeat(60))));
    }

    #[tokio::test]
    async fn test_google_tts_error_status() {
        let (endpoint, server) = serve(vec![("503 Service Unavailable", Vec::new())]);
        let result = tts_for(endpoint).synthesize("What is law?").await;
        assert!(matches!(result, Err(AudioError::Status(503))));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_google_tts_empty_body() {
        let (endpoint, server) = serve(vec![("200 OK", Vec::new())]);
        let result = tts_for(endpoint).synthesize("What is law?").await;
        assert!(matches!(result, Err(AudioError::EmptyAudio)));
        server.join().unwrap();
    }
}
