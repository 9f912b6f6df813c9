//! srs-core — SM-2 spaced repetition scheduling.
//!
//! Pure scheduling logic for flashcard review: compute a card's next
//! review state from a 0-5 recall grade, select the cards due today, and
//! report retention. No I/O and no storage; callers persist the
//! `ReviewData` the scheduler hands back.

pub mod models;
pub mod session;
pub mod sm2;

pub use models::{Card, Deck, Quality, ReviewData};
pub use session::ReviewSession;
pub use sm2::{calculate_next_review, due_cards, due_today, retention_rate};
