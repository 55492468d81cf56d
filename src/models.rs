#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub correct_answer: String,
    /// Unique, shuffled, always contains `correct_answer`.
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    Active,
    Scoring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    KeepPracticing,
}

impl ScoreBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 60.0 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good job!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
    pub band: ScoreBand,
}

/// Which side of the current card the audio was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSource {
    Question,
    Answer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Flashcards,
    Quiz,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Self::Flashcards => 0,
            Self::Quiz => 1,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Flashcards => Self::Quiz,
            Self::Quiz => Self::Flashcards,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Every mutation the presentation layer can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SwitchTab,
    RevealAnswer,
    AdvanceCard,
    PlayQuestionAudio,
    PlayAnswerAudio,
    StopAudio,
    IncreaseQuestionCount,
    DecreaseQuestionCount,
    StartQuiz,
    SelectPreviousOption,
    SelectNextOption,
    SubmitQuizAnswer,
    AdvanceQuiz,
    RestartQuiz,
    Quit,
}
