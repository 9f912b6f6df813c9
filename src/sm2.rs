//! SM-2 (SuperMemo 2) spaced repetition scheduling.
//!
//! The next schedule depends only on the card's current state and the
//! latest 0-5 recall quality:
//! - quality below 3 resets the repetition streak and restarts at 1 day
//! - quality 3 and above grows the interval: 1 day, then 6 days, then the
//!   prior interval multiplied by the updated easiness factor
//! - the easiness factor is adjusted after every review and floored at 1.3
//!
//! Every function here is pure; "now" is an explicit argument so callers
//! and tests control the clock.

use chrono::{DateTime, Duration, Local, NaiveDate};

use crate::models::{Card, ReviewData};

/// Easiness factor floor.
pub const MIN_EASINESS: f64 = 1.3;
/// Easiness factor for a card that has never been reviewed.
pub const INITIAL_EASINESS: f64 = 2.5;
/// Interval after the first successful review, in days.
const FIRST_INTERVAL: u32 = 1;
/// Interval after the second consecutive successful review, in days.
const SECOND_INTERVAL: u32 = 6;

/// Computes the next review state from the prior state and a recall quality.
///
/// `quality` is clamped to 0-5; out-of-range input is a caller bug, not a
/// reason to fail. The returned `next_review` is `now` plus the new interval
/// in whole days, with the time of day preserved.
pub fn calculate_next_review(
    quality: i32,
    repetitions: u32,
    easiness: f64,
    interval: u32,
    now: DateTime<Local>,
) -> ReviewData {
    let quality = quality.clamp(0, 5);
    let q = quality as f64;

    // EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floored at 1.3
    let mut new_easiness = easiness + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
    if new_easiness < MIN_EASINESS {
        new_easiness = MIN_EASINESS;
    }

    let (new_repetitions, new_interval) = if quality < 3 {
        // Failed recall restarts the schedule at one day.
        (0, FIRST_INTERVAL)
    } else {
        let new_repetitions = repetitions + 1;
        let new_interval = match new_repetitions {
            1 => FIRST_INTERVAL,
            2 => SECOND_INTERVAL,
            // Prior interval times the new easiness, rounded half away
            // from zero (both are always positive).
            _ => (interval as f64 * new_easiness).round() as u32,
        };
        (new_repetitions, new_interval)
    };

    ReviewData {
        repetitions: new_repetitions,
        easiness: new_easiness,
        interval: new_interval,
        next_review: now + Duration::days(new_interval as i64),
    }
}

/// Filters `cards` down to those due on `today`, preserving input order.
///
/// Cards with no review data are always due; scheduled cards compare by
/// calendar day, so a card due earlier today is still listed.
pub fn due_cards(cards: &[Card], today: NaiveDate) -> Vec<&Card> {
    cards.iter().filter(|card| card.is_due_on(today)).collect()
}

/// Due cards against the ambient clock, evaluated once per call.
pub fn due_today(cards: &[Card]) -> Vec<&Card> {
    due_cards(cards, Local::now().date_naive())
}

/// Percentage of correct responses, rounded to the nearest integer.
///
/// An empty history reports 0% rather than dividing by zero.
pub fn retention_rate(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}
