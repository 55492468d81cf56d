//! Multiple-choice quiz built from the flashcards.
//!
//! Phases: `NotStarted -> Active -> Scoring -> (reset) -> NotStarted`.

use crate::error::QuizError;
use crate::models::{Card, QuizPhase, QuizQuestion, QuizScore, ScoreBand};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

pub const MIN_QUIZ_CARDS: usize = 4;
pub const MAX_OPTIONS: usize = 4;
pub const MIN_QUESTIONS: usize = 3;
pub const MAX_QUESTIONS: usize = 10;
pub const DEFAULT_QUESTIONS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    pub questions: Vec<QuizQuestion>,
    pub user_answers: HashMap<usize, String>,
    pub current_index: usize,
    pub active: bool,
}

/// Distinct answer texts that differ from `correct`, in document order.
fn wrong_answer_pool<'a>(all_cards: &'a [Card], correct: &str) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    all_cards
        .iter()
        .map(|card| card.answer.as_str())
        .filter(|answer| *answer != correct && seen.insert(*answer))
        .collect()
}

fn build_question<R: Rng + ?Sized>(card: &Card, all_cards: &[Card], rng: &mut R) -> QuizQuestion {
    let pool = wrong_answer_pool(all_cards, &card.answer);
    let wanted = (MAX_OPTIONS - 1).min(pool.len());

    let mut options = Vec::with_capacity(wanted + 1);
    options.push(card.answer.clone());
    options.extend(
        pool.choose_multiple(rng, wanted)
            .map(|answer| answer.to_string()),
    );
    options.shuffle(rng);

    QuizQuestion {
        question: card.question.clone(),
        correct_answer: card.answer.clone(),
        options,
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session with a fresh quiz of `min(requested, all_cards.len())` questions.
    ///
    /// On error the current session is left untouched.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        all_cards: &[Card],
        requested: usize,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        if all_cards.len() < MIN_QUIZ_CARDS {
            return Err(QuizError::InsufficientCards {
                available: all_cards.len(),
                required: MIN_QUIZ_CARDS,
            });
        }

        let count = requested.min(all_cards.len());
        let mut selected: Vec<&Card> = all_cards.choose_multiple(rng, count).collect();
        selected.shuffle(rng);

        self.questions = selected
            .into_iter()
            .map(|card| build_question(card, all_cards, rng))
            .collect();
        self.user_answers.clear();
        self.current_index = 0;
        self.active = true;
        Ok(())
    }

    pub fn phase(&self) -> QuizPhase {
        if !self.active {
            QuizPhase::NotStarted
        } else if self.current_index < self.questions.len() {
            QuizPhase::Active
        } else {
            QuizPhase::Scoring
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.active {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    pub fn submit_answer(&mut self, index: usize, option: impl Into<String>) {
        self.user_answers.insert(index, option.into());
    }

    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.user_answers.get(&index).map(String::as_str)
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.user_answers.contains_key(&index)
    }

    /// `None` while the question is unanswered.
    pub fn is_correct(&self, index: usize) -> Option<bool> {
        let question = self.questions.get(index)?;
        self.answer_for(index)
            .map(|answer| answer == question.correct_answer)
    }

    /// Moves forward, stopping at the scoring state.
    pub fn advance(&mut self) {
        if self.current_index < self.questions.len() {
            self.current_index += 1;
        }
    }

    pub fn score(&self) -> QuizScore {
        let total = self.questions.len();
        let correct = (0..total)
            .filter(|&i| self.is_correct(i) == Some(true))
            .count();
        let percentage = if total == 0 {
            0.0
        } else {
            100.0 * correct as f64 / total as f64
        };
        QuizScore {
            correct,
            total,
            percentage,
            band: ScoreBand::from_percentage(percentage),
        }
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.questions.clear();
        self.user_answers.clear();
        self.current_index = 0;
    }
}

/// How many questions the next quiz will ask, kept within the playable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionCountPicker {
    value: usize,
    max: usize,
}

impl QuestionCountPicker {
    pub fn new(card_count: usize, preferred: usize) -> Self {
        let max = MAX_QUESTIONS.min(card_count).max(MIN_QUESTIONS);
        Self {
            value: preferred.clamp(MIN_QUESTIONS, max),
            max,
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    pub fn min(&self) -> usize {
        MIN_QUESTIONS
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn increment(&mut self) {
        self.value = (self.value + 1).min(self.max);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1).max(MIN_QUESTIONS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn distinct_cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("Question {}", i), format!("Answer {}", i)))
            .collect()
    }

    fn answer_everything_correctly(session: &mut QuizSession) {
        for i in 0..session.total() {
            let correct = session.questions[i].correct_answer.clone();
            session.submit_answer(i, correct);
            session.advance();
        }
    }

    #[test]
    fn test_start_requires_four_cards() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::new();
        for n in 0..MIN_QUIZ_CARDS {
            let result = session.start(&distinct_cards(n), 5, &mut rng);
            assert_eq!(
                result,
                Err(QuizError::InsufficientCards {
                    available: n,
                    required: 4
                })
            );
            assert_eq!(session.phase(), QuizPhase::NotStarted);
        }
    }

    #[test]
    fn test_failed_start_keeps_running_session() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::new();
        session.start(&distinct_cards(6), 4, &mut rng).unwrap();
        session.submit_answer(0, "Answer 1");
        session.advance();
        let questions_before = session.questions.clone();

        let result = session.start(&distinct_cards(2), 4, &mut rng);
        assert!(result.is_err());
        assert_eq!(session.questions, questions_before);
        assert_eq!(session.current_index, 1);
        assert_eq!(session.answer_for(0), Some("Answer 1"));
        assert!(session.active);
    }

    #[test]
    fn test_sampled_questions_are_distinct() {
        let mut rng = StdRng::seed_from_u64(11);
        let cards = distinct_cards(12);
        let mut session = QuizSession::new();
        session.start(&cards, 8, &mut rng).unwrap();

        assert_eq!(session.total(), 8);
        let unique: HashSet<&str> = session
            .questions
            .iter()
            .map(|q| q.question.as_str())
            .collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_request_larger_than_deck_is_capped() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::new();
        session.start(&distinct_cards(4), 10, &mut rng).unwrap();
        assert_eq!(session.total(), 4);
    }

    #[test]
    fn test_option_sets() {
        let mut rng = StdRng::seed_from_u64(21);
        let cards = distinct_cards(9);
        let mut session = QuizSession::new();
        session.start(&cards, 9, &mut rng).unwrap();

        for question in &session.questions {
            assert_eq!(question.options.len(), MAX_OPTIONS);
            let hits = question
                .options
                .iter()
                .filter(|o| **o == question.correct_answer)
                .count();
            assert_eq!(hits, 1);
            let unique: HashSet<&String> = question.options.iter().collect();
            assert_eq!(unique.len(), question.options.len());
        }
    }

    #[test]
    fn test_duplicate_answer_texts_shrink_the_pool() {
        let mut rng = StdRng::seed_from_u64(8);
        let cards = vec![
            Card::new("Q1", "same"),
            Card::new("Q2", "same"),
            Card::new("Q3", "same"),
            Card::new("Q4", "other"),
            Card::new("Q5", "other"),
        ];
        let mut session = QuizSession::new();
        session.start(&cards, 5, &mut rng).unwrap();

        for question in &session.questions {
            // only one distinct wrong answer exists for every card
            assert_eq!(question.options.len(), 2);
            assert!(question.options.contains(&question.correct_answer));
            let unique: HashSet<&String> = question.options.iter().collect();
            assert_eq!(unique.len(), 2);
        }
    }

    #[test]
    fn test_wrong_answer_pool_compares_text() {
        let cards = vec![
            Card::new("Q1", "x"),
            Card::new("Q2", "y"),
            Card::new("Q3", "x"),
            Card::new("Q4", "z"),
            Card::new("Q5", "y"),
        ];
        assert_eq!(wrong_answer_pool(&cards, "x"), vec!["y", "z"]);
    }

    #[test]
    fn test_five_cards_three_questions_perfect_score() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut session = QuizSession::new();
        session.start(&distinct_cards(5), 3, &mut rng).unwrap();

        assert_eq!(session.total(), 3);
        assert!(session.questions.iter().all(|q| q.options.len() == 4));

        answer_everything_correctly(&mut session);
        assert_eq!(session.phase(), QuizPhase::Scoring);
        let score = session.score();
        assert_eq!(score.correct, 3);
        assert_eq!(score.percentage, 100.0);
        assert_eq!(score.band, ScoreBand::Excellent);
    }

    #[test]
    fn test_unanswered_scores_zero() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = QuizSession::new();
        session.start(&distinct_cards(6), 5, &mut rng).unwrap();
        for _ in 0..session.total() {
            session.advance();
        }
        let score = session.score();
        assert_eq!(score.correct, 0);
        assert_eq!(score.percentage, 0.0);
        assert_eq!(score.band, ScoreBand::KeepPracticing);
    }

    #[test]
    fn test_partial_score_banding() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = QuizSession::new();
        session.start(&distinct_cards(10), 5, &mut rng).unwrap();
        for i in 0..3 {
            let correct = session.questions[i].correct_answer.clone();
            session.submit_answer(i, correct);
        }
        session.submit_answer(3, "definitely wrong");

        let score = session.score();
        assert_eq!(score.correct, 3);
        assert_eq!(score.percentage, 60.0);
        assert_eq!(score.band, ScoreBand::Good);
        assert_eq!(session.is_correct(3), Some(false));
        assert_eq!(session.is_correct(4), None);
    }

    #[test]
    fn test_resubmitting_overwrites() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = QuizSession::new();
        session.start(&distinct_cards(4), 4, &mut rng).unwrap();
        session.submit_answer(0, "wrong");
        let correct = session.questions[0].correct_answer.clone();
        session.submit_answer(0, correct);
        assert_eq!(session.is_correct(0), Some(true));
    }

    #[test]
    fn test_phase_transitions() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = QuizSession::new();
        assert_eq!(session.phase(), QuizPhase::NotStarted);
        assert!(session.current_question().is_none());

        session.start(&distinct_cards(5), 3, &mut rng).unwrap();
        assert_eq!(session.phase(), QuizPhase::Active);
        assert!(session.current_question().is_some());

        for _ in 0..10 {
            session.advance();
        }
        assert_eq!(session.current_index, 3);
        assert_eq!(session.phase(), QuizPhase::Scoring);
        assert!(session.current_question().is_none());

        session.reset();
        assert_eq!(session.phase(), QuizPhase::NotStarted);
        session.start(&distinct_cards(5), 3, &mut rng).unwrap();
        assert_eq!(session.phase(), QuizPhase::Active);
        assert!(session.user_answers.is_empty());
    }

    #[test]
    fn test_picker_bounds() {
        let mut picker = QuestionCountPicker::new(20, DEFAULT_QUESTIONS);
        assert_eq!(picker.value(), 5);
        assert_eq!(picker.max(), MAX_QUESTIONS);
        for _ in 0..20 {
            picker.increment();
        }
        assert_eq!(picker.value(), 10);
        for _ in 0..20 {
            picker.decrement();
        }
        assert_eq!(picker.value(), MIN_QUESTIONS);

        let small = QuestionCountPicker::new(4, DEFAULT_QUESTIONS);
        assert_eq!(small.value(), 4);
        assert_eq!(small.max(), 4);

        let tiny = QuestionCountPicker::new(0, DEFAULT_QUESTIONS);
        assert_eq!(tiny.value(), MIN_QUESTIONS);
    }
}
