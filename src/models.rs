//! Data models for flashcards and decks.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sm2;

/// Self-assessed recall quality for a single review, on the SM-2 0-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    Blackout = 0,  // Complete blackout
    Incorrect = 1, // Wrong; the answer remembered once seen
    Familiar = 2,  // Wrong; the answer seemed easy to recall
    Difficult = 3, // Correct, with serious difficulty
    Hesitant = 4,  // Correct, after a hesitation
    Perfect = 5,   // Perfect recall
}

impl Quality {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Blackout),
            '1' => Some(Self::Incorrect),
            '2' => Some(Self::Familiar),
            '3' => Some(Self::Difficult),
            '4' => Some(Self::Hesitant),
            '5' => Some(Self::Perfect),
            _ => None,
        }
    }

    /// Clamp an arbitrary score onto the 0-5 scale.
    pub fn from_score(score: i32) -> Self {
        match score.clamp(0, 5) {
            0 => Self::Blackout,
            1 => Self::Incorrect,
            2 => Self::Familiar,
            3 => Self::Difficult,
            4 => Self::Hesitant,
            _ => Self::Perfect,
        }
    }

    pub fn score(&self) -> i32 {
        *self as i32
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blackout => "Blackout",
            Self::Incorrect => "Incorrect",
            Self::Familiar => "Familiar",
            Self::Difficult => "Difficult",
            Self::Hesitant => "Hesitant",
            Self::Perfect => "Perfect",
        }
    }

    /// Quality 3 and above counts as a successful recall.
    pub fn is_passing(&self) -> bool {
        self.score() >= 3
    }
}

/// Scheduling state attached to a card.
///
/// Produced by [`sm2::calculate_next_review`] and replaced wholesale on
/// every review; nothing mutates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewData {
    /// Consecutive reviews graded 3 or better. Resets to 0 on a failed review.
    pub repetitions: u32,
    /// Easiness factor, never below 1.3.
    pub easiness: f64,
    /// Days until the next review, at least 1.
    pub interval: u32,
    /// When the card becomes due again: the review instant plus `interval` days.
    pub next_review: DateTime<Local>,
}

/// A single flashcard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub front: String,
    pub back: String,

    /// Scheduling state; `None` until the card's first review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_data: Option<ReviewData>,
}

impl Card {
    pub fn new(front: String, back: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string()[..8].to_string(),
            front,
            back,
            review_data: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.review_data.is_none()
    }

    /// Whether the card is due on the given calendar day.
    ///
    /// New cards are always due. Otherwise the scheduled instant is
    /// truncated to its calendar day and compared against `today`.
    pub fn is_due_on(&self, today: NaiveDate) -> bool {
        match &self.review_data {
            None => true,
            Some(data) => data.next_review.date_naive() <= today,
        }
    }

    pub fn is_due(&self) -> bool {
        self.is_due_on(Local::now().date_naive())
    }

    /// Grades this card and replaces its scheduling state with the
    /// scheduler's output.
    ///
    /// A card that has never been reviewed starts from the default priors
    /// (0 repetitions, easiness 2.5, interval 1 day).
    pub fn review(&mut self, quality: i32, now: DateTime<Local>) -> &ReviewData {
        let (repetitions, easiness, interval) = match &self.review_data {
            Some(data) => (data.repetitions, data.easiness, data.interval),
            None => (0, sm2::INITIAL_EASINESS, 1),
        };
        self.review_data
            .insert(sm2::calculate_next_review(quality, repetitions, easiness, interval, now))
    }
}

/// A collection of flashcards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cards: Vec<Card>,
    pub created_at: DateTime<Local>,
}

impl Deck {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string()[..8].to_string(),
            name,
            description: String::new(),
            cards: Vec::new(),
            created_at: Local::now(),
        }
    }

    pub fn add_card(&mut self, front: String, back: String) -> &Card {
        let card = Card::new(front, back);
        self.cards.push(card);
        self.cards.last().unwrap()
    }

    /// Cards due on the given day, in deck order.
    pub fn due_cards_on(&self, today: NaiveDate) -> Vec<&Card> {
        sm2::due_cards(&self.cards, today)
    }

    /// Cards due today against the ambient clock.
    pub fn due_cards(&self) -> Vec<&Card> {
        self.due_cards_on(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn quality_from_score_clamps() {
        assert_eq!(Quality::from_score(-3), Quality::Blackout);
        assert_eq!(Quality::from_score(9), Quality::Perfect);
        assert_eq!(Quality::from_score(3), Quality::Difficult);
    }

    #[test]
    fn quality_passing_threshold() {
        assert!(!Quality::Familiar.is_passing());
        assert!(Quality::Difficult.is_passing());
    }

    #[test]
    fn new_card_has_no_schedule_and_is_due() {
        let card = Card::new("front".into(), "back".into());
        assert!(card.is_new());
        assert!(card.is_due_on(fixed_now().date_naive()));
    }

    #[test]
    fn review_replaces_schedule_wholesale() {
        let now = fixed_now();
        let mut card = Card::new("front".into(), "back".into());

        let first = card.review(5, now).clone();
        assert_eq!(first.repetitions, 1);
        assert_eq!(first.interval, 1);

        let second = card.review(5, now + Duration::days(1)).clone();
        assert_eq!(second.repetitions, 2);
        assert_eq!(second.interval, 6);
        assert_eq!(card.review_data, Some(second));
    }

    #[test]
    fn card_without_review_data_deserializes_as_new() {
        let card: Card =
            serde_json::from_str(r#"{"id":"abc123","front":"2+2","back":"4"}"#).unwrap();
        assert!(card.is_new());

        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("review_data"));
    }

    #[test]
    fn deck_due_cards_keep_deck_order() {
        let now = fixed_now();
        let mut deck = Deck::new("Basics".into());
        deck.add_card("a".into(), "1".into());
        deck.add_card("b".into(), "2".into());
        deck.cards[0].review(5, now); // due tomorrow, no longer listed

        let due = deck.due_cards_on(now.date_naive());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].front, "b");
    }
}
