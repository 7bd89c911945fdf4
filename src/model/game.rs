use std::cmp::Ordering;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::model::{
    constants::{BASE_K, VICTOR_BONUS_K},
    modification::Modification,
    outcome::{actual_outcome, expected_outcome},
    rating_ledger::RatingLedger,
    structures::{participant_result::ParticipantResult, tick::Tick}
};

/// A completed game, with its participants ranked by performance.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    name: String,
    start_time: Tick,
    end_time: Tick,
    victor_count: usize,
    participants: Vec<ParticipantResult>
}

impl Game {
    /// Ranks `results` by performance (descending, equal performances keep their
    /// input order) and assigns each participant a K-factor from their rank.
    ///
    /// `victor_count` is not checked against the number of results.
    pub fn new(
        name: impl Into<String>,
        start_time: Tick,
        end_time: Tick,
        victor_count: usize,
        results: &[(String, f64)]
    ) -> Game {
        let participants = results
            .iter()
            // `-0.0` and `0.0` compare equal here, so they keep their input order too
            .sorted_by(|(_, perf1), (_, perf2)| perf2.partial_cmp(perf1).unwrap_or(Ordering::Equal))
            .enumerate()
            .map(|(rank, (player, performance))| ParticipantResult {
                player: player.clone(),
                performance: *performance,
                k_factor: k_factor(rank, victor_count)
            })
            .collect();

        Game {
            name: name.into(),
            start_time,
            end_time,
            victor_count,
            participants
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> Tick {
        self.start_time
    }

    pub fn end_time(&self) -> Tick {
        self.end_time
    }

    pub fn victor_count(&self) -> usize {
        self.victor_count
    }

    pub fn participants(&self) -> &[ParticipantResult] {
        &self.participants
    }

    /// # Pairwise scoring
    ///
    /// Every unordered pair of participants is treated as a head-to-head result.
    /// For a pair (p1, p2), p1 being the better-ranked of the two:
    ///
    /// 1. The expected outcome is computed from the current ledger ratings.
    /// 2. The actual outcome is computed from the performance difference.
    /// 3. p1 gains `(expected - actual) * k1`, p2 loses `(expected - actual) * k2`.
    ///
    /// Players missing from the ledger are registered at the default rating.
    /// The returned modification is not applied; it takes effect at the game's
    /// end time.
    pub fn score(&self, ledger: &mut RatingLedger) -> Modification {
        let mut deltas: IndexMap<String, f64> = IndexMap::with_capacity(self.participants.len());

        for (p1, p2) in self.participants.iter().tuple_combinations() {
            let r1 = ledger.get_or_insert_default(&p1.player);
            let r2 = ledger.get_or_insert_default(&p2.player);

            let expected = expected_outcome(r1 - r2);
            let actual = actual_outcome(p1.performance, p2.performance);
            let difference = expected - actual;

            *deltas.entry(p1.player.clone()).or_insert(0.0) += difference * p1.k_factor;
            *deltas.entry(p2.player.clone()).or_insert(0.0) -= difference * p2.k_factor;
        }

        Modification::from_game(deltas, self.end_time, &self.participants)
    }
}

/// The K-factor for the participant at 0-indexed `rank`. The top `victor_count`
/// participants share an additional [`VICTOR_BONUS_K`].
pub fn k_factor(rank: usize, victor_count: usize) -> f64 {
    if rank < victor_count {
        BASE_K + VICTOR_BONUS_K / victor_count as f64
    } else {
        BASE_K
    }
}
