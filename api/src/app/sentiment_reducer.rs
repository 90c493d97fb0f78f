//! Result reducer
//!
//! Folds annotated reviews into `AggregateSentiment`.
//!
//! All rounding is round-half-up, done in integer arithmetic so boundary cases
//! (e.g. an average of exactly 50.5) are deterministic.

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{
    AggregateSentiment, AnnotatedReview, SentimentLabel, FALLBACK_INTENSITY,
};

/// Reduce a batch, stamping the aggregate with today's (UTC) date
pub fn reduce(annotated: &[AnnotatedReview]) -> AggregateSentiment {
    reduce_on(annotated, Utc::now().date_naive())
}

pub fn reduce_on(annotated: &[AnnotatedReview], generated_on: NaiveDate) -> AggregateSentiment {
    let count = annotated.len();
    if count == 0 {
        return AggregateSentiment {
            average_intensity: 0,
            review_count: 0,
            generated_on,
            positive_percentage: 0,
            negative_percentage: 0,
            neutral_percentage: 0,
        };
    }

    let mut total: u64 = 0;
    let mut positive: u64 = 0;
    let mut negative: u64 = 0;

    for review in annotated {
        // A literal zero is indistinguishable from "no opinion".
        let intensity = match review.sentiment_score {
            0 => FALLBACK_INTENSITY,
            n => n,
        };
        total += u64::from(intensity);

        match review.sentiment {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Negative => negative += 1,
            SentimentLabel::Neutral => {}
        }
    }

    let count_u = count as u64;
    let positive_percentage = round_half_up(100 * positive, count_u) as u8;
    // Two halves can both round up (e.g. 0.5% + 99.5%); keep the sum at 100.
    let negative_percentage =
        (round_half_up(100 * negative, count_u) as u8).min(100 - positive_percentage);

    AggregateSentiment {
        average_intensity: round_half_up(total, count_u) as u8,
        review_count: count,
        generated_on,
        positive_percentage,
        negative_percentage,
        neutral_percentage: 100 - positive_percentage - negative_percentage,
    }
}

/// `numerator / denominator` rounded half up. `denominator` must be non-zero.
fn round_half_up(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}
