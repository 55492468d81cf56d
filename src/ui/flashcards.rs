use crate::app::App;
use crate::models::AudioSource;
use crate::parser::{ANSWER_MARKER, QUESTION_MARKER};
use crate::ui::layout::calculate_flashcard_chunks;
use crate::utils::format_size;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn draw_empty_deck(f: &mut Frame, area: Rect) {
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        "No flashcards found.",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from("Expected document format:"));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!("{} ...", QUESTION_MARKER)));
    text.push_line(Line::from(format!("{} ...", ANSWER_MARKER)));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Flashcards"));
    f.render_widget(paragraph, area);
}

fn audio_status(app: &App) -> Line<'static> {
    let label = |source: Option<AudioSource>| match source {
        Some(AudioSource::Answer) => "answer",
        _ => "question",
    };

    if app.playback.is_pending() {
        Line::from(Span::styled(
            format!("Generating {} audio...", label(app.playback.source())),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(audio) = app.playback.audio()
        && app.playback.is_playing()
    {
        Line::from(Span::styled(
            format!(
                "Playing {} audio on loop ({})",
                label(app.playback.source()),
                format_size(audio.len())
            ),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("")
    }
}

pub fn draw_flashcards(f: &mut Frame, app: &App, area: Rect) {
    let Some(card) = app.deck.current_card() else {
        draw_empty_deck(f, area);
        return;
    };
    let layout = calculate_flashcard_chunks(area);

    let question = Paragraph::new(card.question.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    f.render_widget(Paragraph::new(audio_status(app)), layout.audio_area);

    let answer = if app.deck.is_revealed() {
        Paragraph::new(card.answer.as_str())
            .style(
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::LightRed))
                    .title("Answer"),
            )
    } else {
        Paragraph::new("[Press Space to reveal the answer]")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Answer"))
    };
    f.render_widget(answer, layout.answer_area);

    let caption = Paragraph::new(format!("Card {} of {}", app.deck.position(), app.deck.len()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(caption, layout.caption_area);
}
