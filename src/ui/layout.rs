use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub tabs_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct FlashcardLayout {
    pub question_area: Rect,
    pub audio_area: Rect,
    pub answer_area: Rect,
    pub caption_area: Rect,
}

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub gauge_area: Rect,
    pub review_area: Rect,
}

pub fn calculate_main_chunks(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    MainLayout {
        tabs_area: chunks[0],
        body_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_flashcard_chunks(area: Rect) -> FlashcardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    FlashcardLayout {
        question_area: chunks[0],
        audio_area: chunks[1],
        answer_area: chunks[2],
        caption_area: chunks[3],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        options_area: chunks[2],
        feedback_area: chunks[3],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        gauge_area: chunks[1],
        review_area: chunks[2],
    }
}
