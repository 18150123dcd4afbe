/// Per-user rating ledger types
use crate::types::{PlaylistId, RatingId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's rating of one playlist.
///
/// The `(playlist_id, user_id)` pair is unique by upsert discipline in
/// the workflow layer, not by a store-enforced constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    /// Unique rating identifier
    pub id: RatingId,

    /// The rated playlist (the owner's id for received playlists)
    pub playlist_id: PlaylistId,

    /// Rating user
    pub user_id: UserId,

    /// Rating user's email
    pub user_email: String,

    /// Star value, 1-5
    pub rating: u8,

    /// First rated
    pub created_at: DateTime<Utc>,

    /// Last changed
    pub updated_at: DateTime<Utc>,
}

impl RatingRecord {
    /// Create a fresh rating record
    pub fn new(
        playlist_id: PlaylistId,
        user_id: UserId,
        user_email: impl Into<String>,
        rating: u8,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RatingId::generate(),
            playlist_id,
            user_id,
            user_email: user_email.into(),
            rating,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Aggregated rating for a playlist
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Arithmetic mean rounded to one decimal place; 0.0 with no records
    pub average: f64,

    /// Number of ratings
    pub count: usize,
}

impl RatingSummary {
    /// Compute the average rating over a set of records.
    ///
    /// Empty input yields `{average: 0.0, count: 0}`.
    pub fn of(records: &[RatingRecord]) -> Self {
        if records.is_empty() {
            return Self {
                average: 0.0,
                count: 0,
            };
        }
        let sum: u32 = records.iter().map(|r| u32::from(r.rating)).sum();
        let mean = f64::from(sum) / records.len() as f64;
        Self {
            average: (mean * 10.0).round() / 10.0,
            count: records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rating: u8) -> RatingRecord {
        RatingRecord::new(PlaylistId::new("p1"), UserId::generate(), "u@x.com", rating)
    }

    #[test]
    fn empty_input_yields_zero() {
        let summary = RatingSummary::of(&[]);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn average_of_three_and_five_is_four() {
        let summary = RatingSummary::of(&[record(3), record(5)]);
        assert_eq!(summary.average, 4.0);
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let summary = RatingSummary::of(&[record(4), record(4), record(5)]);
        assert_eq!(summary.average, 4.3);
        assert_eq!(summary.count, 3);
    }
}
