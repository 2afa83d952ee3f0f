use chrono::NaiveDate;

use super::types::{Rating, Weight};
use crate::domain::clock::age_in_days;

// (max age in days, penalty), checked in order
const RECENCY_BANDS: [(i64, Weight); 3] = [(7, 150), (14, 75), (35, 25)];

/// Scores how undesirable a pairing is; lower pairs sooner.
pub trait WeightPolicy {
    fn weigh(
        &self,
        player_rating: Rating,
        opponent_rating: Rating,
        previous_match_dates: &[NaiveDate],
        today: NaiveDate,
    ) -> Weight;
}

/// Rating gap plus an additive penalty for every recent meeting
#[derive(Debug, Clone, Copy, Default)]
pub struct RecencyBandedWeight;

impl WeightPolicy for RecencyBandedWeight {
    fn weigh(
        &self,
        player_rating: Rating,
        opponent_rating: Rating,
        previous_match_dates: &[NaiveDate],
        today: NaiveDate,
    ) -> Weight {
        calculate_weight(player_rating, opponent_rating, previous_match_dates, today)
    }
}

pub fn calculate_weight(
    player_rating: Rating,
    opponent_rating: Rating,
    previous_match_dates: &[NaiveDate],
    today: NaiveDate,
) -> Weight {
    let gap = rating_gap(player_rating, opponent_rating);
    let penalties: Weight = previous_match_dates
        .iter()
        .map(|&date| recency_penalty(calculate_age_days(date, today)))
        .sum();
    gap + penalties
}

fn rating_gap(player_rating: Rating, opponent_rating: Rating) -> Weight {
    (Weight::from(player_rating) - Weight::from(opponent_rating)).abs()
}

fn calculate_age_days(match_date: NaiveDate, today: NaiveDate) -> i64 {
    age_in_days(match_date, today).max(0)
}

fn recency_penalty(age_days: i64) -> Weight {
    RECENCY_BANDS
        .iter()
        .find(|(max_age, _)| age_days <= *max_age)
        .map(|(_, penalty)| *penalty)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 12, 15).unwrap()
    }

    fn days_ago(days: u64) -> NaiveDate {
        today() - chrono::Days::new(days)
    }

    #[test]
    fn test_weight_without_previous_matches_is_rating_gap() {
        assert_eq!(calculate_weight(1000, 900, &[], today()), 100);
        assert_eq!(calculate_weight(900, 1000, &[], today()), 100);
        assert_eq!(calculate_weight(1200, 1200, &[], today()), 0);
    }

    #[test]
    fn test_recent_matches_weigh_more() {
        let none = calculate_weight(1000, 900, &[], today());
        let five_weeks = calculate_weight(1000, 900, &[days_ago(35)], today());
        let two_weeks = calculate_weight(1000, 900, &[days_ago(14)], today());
        let one_week = calculate_weight(1000, 900, &[days_ago(7)], today());

        assert_eq!(none, 100);
        assert_eq!(five_weeks, 125);
        assert_eq!(two_weeks, 175);
        assert_eq!(one_week, 250);
    }

    #[test]
    fn test_matches_older_than_five_weeks_are_ignored() {
        assert_eq!(calculate_weight(1000, 900, &[days_ago(36)], today()), 100);
        assert_eq!(calculate_weight(1000, 900, &[days_ago(400)], today()), 100);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(calculate_weight(1000, 1000, &[days_ago(0)], today()), 150);
        assert_eq!(calculate_weight(1000, 1000, &[days_ago(8)], today()), 75);
        assert_eq!(calculate_weight(1000, 1000, &[days_ago(15)], today()), 25);
    }

    #[test]
    fn test_future_match_counts_as_today() {
        let tomorrow = today() + chrono::Days::new(1);
        assert_eq!(calculate_weight(1000, 1000, &[tomorrow], today()), 150);
    }

    #[test]
    fn test_penalties_accumulate() {
        let dates = [days_ago(2), days_ago(10), days_ago(30), days_ago(60)];
        assert_eq!(calculate_weight(1000, 950, &dates, today()), 50 + 150 + 75 + 25);
    }

    #[test]
    fn test_large_gap_outweighs_recent_match() {
        let recent_small_gap = calculate_weight(1000, 900, &[days_ago(7)], today());
        let older_small_gap = calculate_weight(1000, 900, &[days_ago(13)], today());
        let large_gap = calculate_weight(1000, 650, &[], today());

        assert!(recent_small_gap < large_gap, "{} vs {}", recent_small_gap, large_gap);
        assert!(older_small_gap < large_gap, "{} vs {}", older_small_gap, large_gap);
    }

    #[test]
    fn test_policy_delegates_to_formula() {
        let dates = [days_ago(3)];
        assert_eq!(
            RecencyBandedWeight.weigh(1100, 1000, &dates, today()),
            calculate_weight(1100, 1000, &dates, today())
        );
    }
}
