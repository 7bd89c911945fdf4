use indexmap::IndexMap;
use tracing::debug;

use crate::{
    error::ProcessorError,
    model::{
        commit_sink::{CommitRecord, CommitSink},
        rating_ledger::RatingLedger,
        structures::{
            commit_kind::CommitKind, participant_result::ParticipantResult, rating_change::RatingChange,
            tick::Tick
        }
    }
};

/// A batch of rating deltas that has been computed but not yet merged into the
/// ledger. It becomes visible once the scheduler reaches `effective_time`.
///
/// Applying a modification consumes it, so it can never be applied twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Modification {
    deltas: IndexMap<String, f64>,
    effective_time: Tick,
    // Each player's performance in the game this was scored from
    performances: Option<IndexMap<String, f64>>
}

impl Modification {
    /// A modification that did not come from a game, e.g. a manual correction.
    pub fn new(deltas: IndexMap<String, f64>, effective_time: Tick) -> Modification {
        Modification {
            deltas,
            effective_time,
            performances: None
        }
    }

    pub fn from_game(
        deltas: IndexMap<String, f64>,
        effective_time: Tick,
        participants: &[ParticipantResult]
    ) -> Modification {
        let performances: IndexMap<String, f64> = participants
            .iter()
            .map(|p| (p.player.clone(), p.performance))
            .collect();

        debug_assert!(deltas.keys().all(|player| performances.contains_key(player)));

        Modification {
            deltas,
            effective_time,
            performances: Some(performances)
        }
    }

    pub fn effective_time(&self) -> Tick {
        self.effective_time
    }

    pub fn deltas(&self) -> &IndexMap<String, f64> {
        &self.deltas
    }

    pub fn delta(&self, player: &str) -> Option<f64> {
        self.deltas.get(player).copied()
    }

    pub fn performances(&self) -> Option<&IndexMap<String, f64>> {
        self.performances.as_ref()
    }

    /// Describes what applying this modification would do to the ledger.
    ///
    /// `rating_before` is read from the ledger as it is now, so this must be
    /// called before [`Modification::apply`].
    pub fn report(&self, ledger: &RatingLedger) -> Vec<RatingChange> {
        self.deltas
            .iter()
            .map(|(player, delta)| {
                let rating_before = ledger.rating_or_default(player);

                RatingChange {
                    player: player.clone(),
                    rating_before,
                    rating_after: rating_before + delta,
                    delta: *delta,
                    performance: self
                        .performances
                        .as_ref()
                        .and_then(|performances| performances.get(player).copied())
                }
            })
            .collect()
    }

    pub fn apply(self, ledger: &mut RatingLedger) {
        for (player, delta) in self.deltas {
            ledger.adjust(&player, delta);
        }
    }

    /// Reports the modification to the sink and then applies it.
    pub fn commit<S: CommitSink + ?Sized>(
        self,
        ledger: &mut RatingLedger,
        sink: &mut S,
        game: &str,
        tick: Tick,
        kind: CommitKind
    ) -> Result<(), ProcessorError> {
        let changes = self.report(ledger);

        sink.record(&CommitRecord {
            game,
            tick,
            effective_time: self.effective_time,
            kind,
            changes: &changes
        })?;

        debug!(game, %tick, %kind, players = changes.len(), "Committed modification");
        self.apply(ledger);

        Ok(())
    }
}
