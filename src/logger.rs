use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// The terminal belongs to the UI, so diagnostics go to a file.
pub fn init(path: &Path) {
    if let Ok(mut logger) = LOGGER.lock()
        && logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_before_init_is_noop() {
        log("dropped on the floor");
    }

    #[test]
    fn test_logger_writes_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("study_cards.log");
        init(&path);
        log("Test log message");
        // another test may have initialised the logger first
        if let Ok(content) = std::fs::read_to_string(&path) {
            assert!(content.contains("Test log message"));
        }
    }
}
