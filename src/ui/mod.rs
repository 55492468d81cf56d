pub mod layout;
mod flashcards;
mod quiz;
mod summary;

pub use flashcards::draw_flashcards;
pub use layout::{calculate_flashcard_chunks, calculate_main_chunks, calculate_quiz_chunks};
pub use quiz::draw_quiz;
pub use summary::draw_summary;

use crate::app::App;
use crate::models::{NoticeLevel, QuizPhase, Tab};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

const APP_TITLE: &str = "Study Cards v0.1.0";

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn help_spans(app: &App) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut push = |key: &'static str, label: &'static str| {
        spans.push(key_span(key));
        spans.push(Span::from(label));
    };

    match app.tab {
        Tab::Flashcards if !app.deck.is_empty() => {
            if !app.deck.is_revealed() {
                push("Space", " Reveal  ");
            }
            push("→/n", " Next card  ");
            push("q", " Hear question  ");
            if app.deck.is_revealed() {
                push("a", " Hear answer  ");
            }
            push("s", " Stop audio  ");
        }
        Tab::Flashcards => {}
        Tab::Quiz => match app.quiz.phase() {
            QuizPhase::NotStarted => {
                push("←/→", " Questions  ");
                push("Enter", " Start  ");
            }
            QuizPhase::Active if app.quiz.is_answered(app.quiz.current_index) => {
                let last = app.quiz.current_index + 1 == app.quiz.total();
                push("Enter", if last { " Finish  " } else { " Next  " });
            }
            QuizPhase::Active => {
                push("↑/↓", " Choose  ");
                push("Enter", " Submit  ");
            }
            QuizPhase::Scoring => push("r", " Restart quiz  "),
        },
    }
    push("Tab", " Switch tab  ");
    push("Esc", " Quit");
    spans
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.notice {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => Color::Cyan,
                NoticeLevel::Success => Color::Green,
                NoticeLevel::Warning => Color::Yellow,
                NoticeLevel::Error => Color::Red,
            };
            Line::from(Span::styled(
                notice.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(Span::styled(
            format!("{} flashcards loaded", app.deck.len()),
            Style::default().fg(Color::DarkGray),
        )),
    };
    let status = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

pub fn draw(f: &mut Frame, app: &App) {
    let layout = calculate_main_chunks(f.area());

    let tabs = Tabs::new(vec!["Flashcards", "Quiz"])
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(APP_TITLE));
    f.render_widget(tabs, layout.tabs_area);

    match app.tab {
        Tab::Flashcards => draw_flashcards(f, app, layout.body_area),
        Tab::Quiz => draw_quiz(f, app, layout.body_area),
    }

    draw_status(f, app, layout.status_area);

    let help = Paragraph::new(Line::from(help_spans(app)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
