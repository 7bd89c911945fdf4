use indexmap::IndexMap;
use itertools::Itertools;

use crate::model::constants::DEFAULT_RATING;

/// The authoritative mapping of player identifiers to their current rating.
///
/// Players are registered at [`DEFAULT_RATING`] the first time they are
/// referenced and are never removed. Registration order is preserved and breaks
/// ties when the ledger is sorted into a leaderboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingLedger {
    ratings: IndexMap<String, f64>
}

impl RatingLedger {
    pub fn new() -> RatingLedger {
        RatingLedger {
            ratings: IndexMap::new()
        }
    }

    /// Returns the current rating for the player, if they have been seen.
    pub fn get_rating(&self, player: &str) -> Option<f64> {
        self.ratings.get(player).copied()
    }

    /// Returns the current rating for the player, or the default rating for a
    /// player who has not been registered yet. Does not register the player.
    pub fn rating_or_default(&self, player: &str) -> f64 {
        self.get_rating(player).unwrap_or(DEFAULT_RATING)
    }

    /// Returns the current rating for the player, registering them at the
    /// default rating first if necessary.
    pub fn get_or_insert_default(&mut self, player: &str) -> f64 {
        if let Some(rating) = self.ratings.get(player) {
            return *rating;
        }

        self.ratings.insert(player.to_owned(), DEFAULT_RATING);
        DEFAULT_RATING
    }

    /// Adds `delta` to the player's rating, registering them first if necessary.
    pub fn adjust(&mut self, player: &str, delta: f64) {
        if let Some(rating) = self.ratings.get_mut(player) {
            *rating += delta;
            return;
        }

        self.ratings.insert(player.to_owned(), DEFAULT_RATING + delta);
    }

    pub fn contains(&self, player: &str) -> bool {
        self.ratings.contains_key(player)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Iterates over the ratings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ratings.iter().map(|(player, rating)| (player.as_str(), *rating))
    }

    /// All ratings sorted descending. Equal ratings keep registration order.
    pub fn leaderboard(&self) -> Vec<(&str, f64)> {
        self.iter().sorted_by(|(_, r1), (_, r2)| r2.total_cmp(r1)).collect()
    }
}

impl FromIterator<(String, f64)> for RatingLedger {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        RatingLedger {
            ratings: iter.into_iter().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RatingLedger;
    use crate::model::constants::DEFAULT_RATING;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unknown_player_reads_default() {
        let ledger = RatingLedger::new();

        assert_eq!(ledger.get_rating("alice"), None);
        assert_eq!(ledger.rating_or_default("alice"), DEFAULT_RATING);
        assert!(!ledger.contains("alice"));
    }

    #[test]
    fn test_get_or_insert_default_registers() {
        let mut ledger = RatingLedger::new();

        assert_eq!(ledger.get_or_insert_default("alice"), DEFAULT_RATING);
        assert!(ledger.contains("alice"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_get_or_insert_default_keeps_existing() {
        let mut ledger: RatingLedger = vec![("alice".to_string(), 1234.5)].into_iter().collect();

        assert_eq!(ledger.get_or_insert_default("alice"), 1234.5);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_adjust_unknown_player_starts_at_default() {
        let mut ledger = RatingLedger::new();
        ledger.adjust("alice", -12.25);

        assert_abs_diff_eq!(ledger.get_rating("alice").unwrap(), DEFAULT_RATING - 12.25);
    }

    #[test]
    fn test_adjust_accumulates() {
        let mut ledger = RatingLedger::new();
        ledger.adjust("alice", 10.0);
        ledger.adjust("alice", 5.5);

        assert_abs_diff_eq!(ledger.get_rating("alice").unwrap(), 1015.5);
    }

    #[test]
    fn test_leaderboard_sorted_descending() {
        let ledger: RatingLedger = vec![
            ("low".to_string(), 900.0),
            ("high".to_string(), 1100.0),
            ("mid".to_string(), 1000.0),
        ]
        .into_iter()
        .collect();

        let names = ledger.leaderboard().into_iter().map(|(p, _)| p).collect::<Vec<_>>();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_leaderboard_ties_keep_registration_order() {
        let mut ledger = RatingLedger::new();
        ledger.get_or_insert_default("charlie");
        ledger.get_or_insert_default("alice");
        ledger.adjust("bob", 5.0);
        ledger.get_or_insert_default("dave");

        let names = ledger.leaderboard().into_iter().map(|(p, _)| p).collect::<Vec<_>>();
        assert_eq!(names, vec!["bob", "charlie", "alice", "dave"]);
    }
}
