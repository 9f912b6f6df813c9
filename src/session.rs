//! In-memory review session over the due-card queue.

use chrono::{DateTime, Local, NaiveDate};

use crate::models::{Card, Quality};
use crate::sm2;

/// Walks the cards due on a given day, grades each one through the
/// scheduler, and tracks session accuracy from the grades alone.
///
/// The session owns its cards for the duration; callers take them back
/// with [`ReviewSession::into_cards`] and store them however they like.
#[derive(Debug)]
pub struct ReviewSession {
    cards: Vec<Card>,
    position: usize,
    correct: u32,
    answered: u32,
}

impl ReviewSession {
    /// Builds a session from `cards`, keeping only those due on `today`
    /// in their original order.
    pub fn new(cards: Vec<Card>, today: NaiveDate) -> Self {
        let cards = cards
            .into_iter()
            .filter(|card| card.is_due_on(today))
            .collect();
        Self {
            cards,
            position: 0,
            correct: 0,
            answered: 0,
        }
    }

    /// Session over the cards due today against the ambient clock.
    pub fn for_today(cards: Vec<Card>) -> Self {
        Self::new(cards, Local::now().date_naive())
    }

    /// The card currently awaiting a grade, if any remain.
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.position)
    }

    /// Grades the current card, replaces its scheduling state with the
    /// scheduler's output, and advances the queue.
    ///
    /// Returns the updated card, or `None` when the session is finished.
    pub fn answer(&mut self, quality: i32, now: DateTime<Local>) -> Option<&Card> {
        let index = self.position;
        let card = self.cards.get_mut(index)?;
        card.review(quality, now);

        self.answered += 1;
        if Quality::from_score(quality).is_passing() {
            self.correct += 1;
        }
        self.position += 1;

        Some(&self.cards[index])
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.cards.len()
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.position
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Session accuracy as an integer percentage; 0 before any answer.
    pub fn retention(&self) -> u32 {
        sm2::retention_rate(self.correct, self.answered)
    }

    /// Hands the cards back, updated with whatever grading happened.
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
