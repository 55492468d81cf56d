use crate::models::ScoreBand;
use crate::quiz::QuizSession;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Cyan,
        ScoreBand::KeepPracticing => Color::Yellow,
    }
}

pub fn draw_summary(f: &mut Frame, quiz: &QuizSession, area: Rect) {
    let layout = calculate_summary_chunks(area);
    let score = quiz.score();
    let color = band_color(score.band);

    let title = Paragraph::new(format!("Quiz complete! {}", score.band.label()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Score"))
        .gauge_style(Style::default().fg(color))
        .ratio((score.percentage / 100.0).clamp(0.0, 1.0))
        .label(format!(
            "{:.1}% ({}/{})",
            score.percentage, score.correct, score.total
        ));
    f.render_widget(gauge, layout.gauge_area);

    let width = layout.review_area.width.saturating_sub(12) as usize;
    let mut review = Text::default();
    for (i, question) in quiz.questions.iter().enumerate() {
        let (mark, style) = match quiz.is_correct(i) {
            Some(true) => ("[✓]", Style::default().fg(Color::Green)),
            Some(false) => ("[✗]", Style::default().fg(Color::Red)),
            None => ("[ ]", Style::default().fg(Color::DarkGray)),
        };
        review.push_line(Line::styled(
            format!("{} {}. {}", mark, i + 1, truncate_string(&question.question, width)),
            style,
        ));
        if quiz.is_correct(i) != Some(true) {
            review.push_line(Line::from(format!(
                "      Correct answer: {}",
                truncate_string(&question.correct_answer, width)
            )));
        }
    }

    let review = Paragraph::new(review)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Review"));
    f.render_widget(review, layout.review_area);
}
