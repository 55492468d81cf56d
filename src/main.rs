use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use study_cards::config::process_env;
use study_cards::{
    action_for_key, draw, logger, App, AppConfig, AudioError, AudioPlayer, GoogleTts, Notice,
    SpeechWorker,
};

const TICK: Duration = Duration::from_millis(100);

fn load_config(cli_document: Option<PathBuf>) -> AppConfig {
    match AppConfig::load(cli_document.clone(), process_env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}; falling back to defaults", e);
            let mut config = AppConfig::default();
            if let Some(document) = cli_document {
                config.document_path = document;
            }
            config
        }
    }
}

fn start_speech_worker(config: &AppConfig) -> Option<SpeechWorker> {
    let tts = match GoogleTts::new(config.tts_settings()) {
        Ok(tts) => tts,
        Err(e) => {
            logger::log(&format!("Text-to-speech unavailable: {}", e));
            return None;
        }
    };
    match SpeechWorker::spawn(Arc::new(tts)) {
        Ok(worker) => Some(worker),
        Err(e) => {
            logger::log(&format!("Failed to spawn speech worker: {}", e));
            None
        }
    }
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    worker: Option<&SpeechWorker>,
    player: &mut AudioPlayer,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for_key(app, key)
            && let Some(request) = app.dispatch(action)
        {
            let id = request.id;
            let sent = match worker {
                Some(worker) => worker.request(request),
                None => Err(AudioError::WorkerUnavailable),
            };
            if let Err(e) = sent {
                app.on_speech_unavailable(id, e);
            }
        }

        if let Some(worker) = worker {
            while let Some(response) = worker.try_recv() {
                app.on_speech(response);
            }
        }

        if let Err(e) = player.sync(&app.playback) {
            logger::log(&format!("Audio player failed: {}", e));
            app.notice = Some(Notice::warning(format!("Audio player failed: {}", e)));
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn main() -> io::Result<()> {
    let cli_document = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(cli_document);
    logger::init(&config.log_file);

    let mut app = App::from_document(
        &config.document_path,
        config.quiz_default_questions,
        config.seed,
    );
    let worker = start_speech_worker(&config);
    let mut player = AudioPlayer::new(config.audio_player.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, worker.as_ref(), &mut player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    player.stop();
    // an in-flight synthesis may still be waiting on the network; let process exit end it
    drop(worker);
    result
}
