use crate::app::App;
use crate::models::{Action, QuizPhase, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an action for whatever the app is currently showing.
pub fn action_for_key(app: &App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Action::Quit);
        }
        KeyCode::Tab | KeyCode::BackTab => return Some(Action::SwitchTab),
        _ => {}
    }

    match app.tab {
        Tab::Flashcards => flashcard_action(key.code),
        Tab::Quiz => quiz_action(app, key.code),
    }
}

fn flashcard_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::RevealAnswer),
        KeyCode::Right | KeyCode::Char('n') => Some(Action::AdvanceCard),
        KeyCode::Char('q') => Some(Action::PlayQuestionAudio),
        KeyCode::Char('a') => Some(Action::PlayAnswerAudio),
        KeyCode::Char('s') => Some(Action::StopAudio),
        _ => None,
    }
}

fn quiz_action(app: &App, code: KeyCode) -> Option<Action> {
    match app.quiz.phase() {
        QuizPhase::NotStarted => match code {
            KeyCode::Left | KeyCode::Char('-') => Some(Action::DecreaseQuestionCount),
            KeyCode::Right | KeyCode::Char('+') => Some(Action::IncreaseQuestionCount),
            KeyCode::Enter => Some(Action::StartQuiz),
            _ => None,
        },
        QuizPhase::Active if app.quiz.is_answered(app.quiz.current_index) => match code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => Some(Action::AdvanceQuiz),
            _ => None,
        },
        QuizPhase::Active => match code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPreviousOption),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNextOption),
            KeyCode::Enter => Some(Action::SubmitQuizAnswer),
            _ => None,
        },
        QuizPhase::Scoring => match code {
            KeyCode::Enter | KeyCode::Char('r') => Some(Action::RestartQuiz),
            _ => None,
        },
    }
}
