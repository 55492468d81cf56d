//! The single state object a study session owns, and the actions that mutate it.

use crate::audio::PlaybackState;
use crate::deck::Deck;
use crate::document::load_flashcards;
use crate::error::AudioError;
use crate::logger;
use crate::models::{Action, AudioSource, Card, Notice, QuizPhase, Tab};
use crate::quiz::{QuestionCountPicker, QuizSession};
use crate::speech_worker::{SpeechRequest, SpeechResponse};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

pub struct App {
    pub tab: Tab,
    pub deck: Deck,
    pub quiz: QuizSession,
    pub picker: QuestionCountPicker,
    pub playback: PlaybackState,
    /// Highlighted option of the current quiz question.
    pub selected_option: Option<usize>,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    default_questions: usize,
    rng: StdRng,
}

impl App {
    pub fn new(cards: Vec<Card>, default_questions: usize, mut rng: StdRng) -> Self {
        let picker = QuestionCountPicker::new(cards.len(), default_questions);
        let deck = Deck::new(cards, &mut rng);
        Self {
            tab: Tab::Flashcards,
            deck,
            quiz: QuizSession::new(),
            picker,
            playback: PlaybackState::new(),
            selected_option: None,
            notice: None,
            should_quit: false,
            default_questions,
            rng,
        }
    }

    /// A document that cannot be read leaves the app usable with no cards.
    pub fn from_document(path: &Path, default_questions: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        match load_flashcards(path) {
            Ok(cards) => {
                logger::log(&format!(
                    "Loaded {} flashcards from {}",
                    cards.len(),
                    path.display()
                ));
                Self::new(cards, default_questions, rng)
            }
            Err(e) => {
                logger::log(&format!("Failed to load {}: {}", path.display(), e));
                let mut app = Self::new(Vec::new(), default_questions, rng);
                app.notice = Some(Notice::error(format!(
                    "Error loading {}: {}",
                    path.display(),
                    e
                )));
                app
            }
        }
    }

    /// Apply one user action. Returns a synthesis request when audio was asked for.
    pub fn dispatch(&mut self, action: Action) -> Option<SpeechRequest> {
        self.notice = None;
        match action {
            Action::Quit => self.should_quit = true,
            Action::SwitchTab => {
                self.playback.stop();
                self.tab = self.tab.toggle();
            }
            Action::RevealAnswer => self.deck.reveal(),
            Action::AdvanceCard => {
                self.deck.advance();
                self.playback.stop();
            }
            Action::PlayQuestionAudio => return self.request_speech(AudioSource::Question),
            Action::PlayAnswerAudio => {
                if !self.deck.is_revealed() {
                    self.notice = Some(Notice::warning("Reveal the answer first"));
                    return None;
                }
                return self.request_speech(AudioSource::Answer);
            }
            Action::StopAudio => self.playback.stop(),
            Action::IncreaseQuestionCount => self.picker.increment(),
            Action::DecreaseQuestionCount => self.picker.decrement(),
            Action::StartQuiz => self.start_quiz(),
            Action::SelectPreviousOption => self.move_selection(-1),
            Action::SelectNextOption => self.move_selection(1),
            Action::SubmitQuizAnswer => self.submit_quiz_answer(),
            Action::AdvanceQuiz => self.advance_quiz(),
            Action::RestartQuiz => {
                if self.quiz.phase() == QuizPhase::Scoring {
                    self.quiz.reset();
                    self.selected_option = None;
                    self.picker = QuestionCountPicker::new(self.deck.len(), self.default_questions);
                }
            }
        }
        None
    }

    /// Feed a reply from the speech worker back into the playback state.
    pub fn on_speech(&mut self, response: SpeechResponse) {
        let (id, result) = response.into_result();
        if let Err(e) = self.playback.complete(id, result) {
            self.notice = Some(Notice::error(format!("Audio error: {}", e)));
        }
    }

    /// The worker could not take the request; surface it like any synthesis failure.
    pub fn on_speech_unavailable(&mut self, id: u64, error: AudioError) {
        self.on_speech(SpeechResponse::Failed { id, error });
    }

    fn request_speech(&mut self, source: AudioSource) -> Option<SpeechRequest> {
        let card = self.deck.current_card()?;
        let text = match source {
            AudioSource::Question => card.question.clone(),
            AudioSource::Answer => card.answer.clone(),
        };
        let id = self.playback.begin(source);
        logger::log(&format!("Requesting {:?} audio (request {})", source, id));
        Some(SpeechRequest { id, text })
    }

    fn start_quiz(&mut self) {
        if self.quiz.phase() != QuizPhase::NotStarted {
            return;
        }
        match self
            .quiz
            .start(self.deck.cards(), self.picker.value(), &mut self.rng)
        {
            Ok(()) => {
                self.selected_option = None;
                let message = format!("Quiz started with {} questions", self.quiz.total());
                logger::log(&message);
                self.notice = Some(Notice::info(message));
            }
            Err(e) => self.notice = Some(Notice::error(e.to_string())),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.quiz.phase() != QuizPhase::Active || self.quiz.is_answered(self.quiz.current_index)
        {
            return;
        }
        let Some(question) = self.quiz.current_question() else {
            return;
        };
        let count = question.options.len() as isize;
        if count == 0 {
            return;
        }
        let next = match self.selected_option {
            None if delta > 0 => 0,
            None => count - 1,
            Some(current) => (current as isize + delta).rem_euclid(count),
        };
        self.selected_option = Some(next as usize);
    }

    fn submit_quiz_answer(&mut self) {
        let index = self.quiz.current_index;
        if self.quiz.phase() != QuizPhase::Active || self.quiz.is_answered(index) {
            return;
        }
        let choice = self
            .selected_option
            .and_then(|i| self.quiz.current_question()?.options.get(i).cloned());
        match choice {
            Some(choice) => {
                self.quiz.submit_answer(index, choice);
                let correct = self.quiz.is_correct(index) == Some(true);
                self.notice = Some(match self.quiz.current_question() {
                    Some(question) if !correct => Notice::error(format!(
                        "Incorrect. The answer is: {}",
                        question.correct_answer
                    )),
                    _ => Notice::success("Correct!"),
                });
            }
            None => self.notice = Some(Notice::warning("Choose an answer first")),
        }
    }

    /// Moves on only once the current question has an answer.
    fn advance_quiz(&mut self) {
        if self.quiz.phase() != QuizPhase::Active || !self.quiz.is_answered(self.quiz.current_index)
        {
            return;
        }
        self.quiz.advance();
        self.selected_option = None;
        if self.quiz.phase() == QuizPhase::Scoring {
            let score = self.quiz.score();
            let message = format!(
                "Quiz finished: {}/{} ({:.1}%)",
                score.correct, score.total, score.percentage
            );
            logger::log(&message);
            self.notice = Some(Notice::success(message));
        }
    }
}
