//! Turns document paragraphs into flashcards.
//!
//! Format:
//! ```text
//! QUESTION: What is law?
//! ANSWER: A system of rules
//! ```
//! Anything else is skipped. Malformed input yields fewer cards, never an error.

use crate::models::Card;

pub const QUESTION_MARKER: &str = "QUESTION:";
pub const ANSWER_MARKER: &str = "ANSWER:";

enum LineType<'a> {
    Question(&'a str),
    Answer(&'a str),
    Other,
}

fn classify(line: &str) -> LineType<'_> {
    if let Some(rest) = line.strip_prefix(QUESTION_MARKER) {
        LineType::Question(rest.trim())
    } else if let Some(rest) = line.strip_prefix(ANSWER_MARKER) {
        LineType::Answer(rest.trim())
    } else {
        LineType::Other
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

#[derive(Default)]
struct PendingCard {
    question: Option<String>,
    answer: Option<String>,
}

impl PendingCard {
    fn take_complete(&mut self) -> Option<Card> {
        match (&self.question, &self.answer) {
            (Some(_), Some(_)) => {
                let question = self.question.take()?;
                let answer = self.answer.take()?;
                Some(Card { question, answer })
            }
            _ => None,
        }
    }
}

/// Parse cards in order of their question markers.
///
/// A question marker while another question is still unanswered drops the earlier one.
pub fn parse_cards<I, S>(lines: I) -> Vec<Card>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cards = Vec::new();
    let mut pending = PendingCard::default();

    for line in lines {
        let text = line.as_ref().trim();
        if text.is_empty() {
            continue;
        }

        match classify(text) {
            LineType::Question(question) => {
                if let Some(card) = pending.take_complete() {
                    cards.push(card);
                }
                pending.question = non_empty(question);
                pending.answer = None;
            }
            LineType::Answer(answer) => {
                if pending.question.is_some() {
                    pending.answer = non_empty(answer);
                }
            }
            LineType::Other => {}
        }
    }

    if let Some(card) = pending.take_complete() {
        cards.push(card);
    }

    cards
}
