use crate::app::App;
use crate::models::QuizPhase;
use crate::quiz::MIN_QUIZ_CARDS;
use crate::ui::layout::calculate_quiz_chunks;
use crate::ui::summary::draw_summary;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, app: &App, area: Rect) {
    match app.quiz.phase() {
        QuizPhase::NotStarted => draw_quiz_setup(f, app, area),
        QuizPhase::Active => draw_quiz_question(f, app, area),
        QuizPhase::Scoring => draw_summary(f, &app.quiz, area),
    }
}

fn draw_quiz_setup(f: &mut Frame, app: &App, area: Rect) {
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        "Test your knowledge!",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));

    if app.deck.len() < MIN_QUIZ_CARDS {
        text.push_line(Line::from(Span::styled(
            format!(
                "A quiz needs at least {} flashcards ({} loaded).",
                MIN_QUIZ_CARDS,
                app.deck.len()
            ),
            Style::default().fg(Color::Yellow),
        )));
    } else {
        text.push_line(Line::from(vec![
            Span::from("Number of questions:  "),
            Span::styled(
                format!("◀ {} ▶", app.picker.value()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   ({}-{})", app.picker.min(), app.picker.max()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        text.push_line(Line::from(""));
        text.push_line(Line::from("Press Enter to start the quiz."));
    }

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Quiz"));
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);
    f.render_widget(paragraph, vertical[0]);
}

fn option_style(app: &App, index: usize, option: &str, correct: &str) -> Style {
    let current = app.quiz.current_index;
    match app.quiz.answer_for(current) {
        Some(_) if option == correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(chosen) if chosen == option => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Some(_) => Style::default().fg(Color::DarkGray),
        None if app.selected_option == Some(index) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        None => Style::default(),
    }
}

fn draw_quiz_question(f: &mut Frame, app: &App, area: Rect) {
    let Some(question) = app.quiz.current_question() else {
        return;
    };
    let layout = calculate_quiz_chunks(area);
    let index = app.quiz.current_index;

    let header = Paragraph::new(format!("Question {} of {}", index + 1, app.quiz.total()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, layout.header_area);

    let prompt = Paragraph::new(question.question.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, layout.question_area);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if app.quiz.answer_for(index) == Some(option.as_str())
                || (!app.quiz.is_answered(index) && app.selected_option == Some(i))
            {
                "(•)"
            } else {
                "( )"
            };
            ListItem::new(format!("{} {}", marker, option)).style(option_style(
                app,
                i,
                option,
                &question.correct_answer,
            ))
        })
        .collect();
    let options = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Choose your answer"),
    );
    f.render_widget(options, layout.options_area);

    let feedback = match app.quiz.is_correct(index) {
        Some(true) => Line::from(Span::styled(
            "Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Some(false) => Line::from(vec![
            Span::styled(
                "Wrong. ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::from("Correct answer: "),
            Span::styled(
                question.correct_answer.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "Select an option and press Enter to submit.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let feedback = Paragraph::new(feedback)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback, layout.feedback_area);
}
