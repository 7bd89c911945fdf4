use std::collections::{BTreeMap, VecDeque};

use itertools::Itertools;
use tracing::{debug, info, info_span, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::{
    error::ProcessorError,
    model::{
        commit_sink::CommitSink,
        game::Game,
        modification::Modification,
        rating_ledger::RatingLedger,
        structures::{commit_kind::CommitKind, tick::Tick}
    },
    utils::progress_utils::progress_style
};

/// A modification waiting for the clock to reach its effective time.
#[derive(Debug)]
struct PendingCommit {
    game: String,
    modification: Modification
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    Finished
}

/// Drives games through the rating ledger in time order.
///
/// Each game is scored at its start tick against the ratings visible at that
/// moment, but the resulting modification only reaches the ledger at the
/// game's end tick. Games that start on the same tick are therefore all scored
/// against the same ratings.
pub struct Scheduler {
    // Sorted ascending by start time
    games: VecDeque<Game>,
    // Keyed by (effective time, enqueue order)
    pending: BTreeMap<(Tick, u64), PendingCommit>,
    clock: Option<Tick>,
    enqueued: u64,
    state: SchedulerState
}

impl Scheduler {
    pub fn new(games: Vec<Game>) -> Scheduler {
        let games = games
            .into_iter()
            .sorted_by_key(|g| g.start_time())
            .collect::<VecDeque<_>>();

        Scheduler {
            games,
            pending: BTreeMap::new(),
            clock: None,
            enqueued: 0,
            state: SchedulerState::Running
        }
    }

    /// The most recent tick processed, or `None` before the first step.
    pub fn clock(&self) -> Option<Tick> {
        self.clock
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn pending_games(&self) -> usize {
        self.games.len()
    }

    pub fn pending_commits(&self) -> usize {
        self.pending.len()
    }

    /// Effective times of the queued modifications, in commit order.
    pub fn pending_effective_times(&self) -> Vec<Tick> {
        self.pending.keys().map(|(tick, _)| *tick).collect()
    }

    /// Processes games and commits until every game has been scored and every
    /// modification has been committed.
    pub fn run<S: CommitSink + ?Sized>(
        &mut self,
        ledger: &mut RatingLedger,
        sink: &mut S
    ) -> Result<(), ProcessorError> {
        let span = info_span!("scoring");
        span.pb_set_style(&progress_style());
        span.pb_set_length(self.games.len() as u64);
        let _enter = span.enter();

        info!(games = self.games.len(), "Processing games");
        while self.step(ledger, sink)? == SchedulerState::Running {}
        info!(players = ledger.len(), "All modifications committed");

        Ok(())
    }

    /// Advances the clock to the next tick on which something happens and
    /// processes it:
    ///
    /// 1. Commit every queued modification whose effective time has been reached.
    /// 2. Score every game starting on this tick and queue its modification.
    /// 3. If no games remain, flush the queue and finish.
    pub fn step<S: CommitSink + ?Sized>(
        &mut self,
        ledger: &mut RatingLedger,
        sink: &mut S
    ) -> Result<SchedulerState, ProcessorError> {
        if self.state == SchedulerState::Finished {
            return Ok(SchedulerState::Finished);
        }

        let tick = self.next_tick();
        self.clock = Some(tick);

        self.commit_due(tick, ledger, sink)?;
        self.score_starting(tick, ledger);

        if self.games.is_empty() {
            self.flush(tick, ledger, sink)?;
            self.state = SchedulerState::Finished;
        }

        Ok(self.state)
    }

    /// The earliest tick with a game to score or a modification to commit. Ticks
    /// in between are no-ops, so they are skipped.
    fn next_tick(&self) -> Tick {
        let earliest = [
            self.games.front().map(|g| g.start_time()),
            self.pending.keys().next().map(|(tick, _)| *tick)
        ]
        .into_iter()
        .flatten()
        .min();

        match (self.clock, earliest) {
            (Some(clock), Some(earliest)) => earliest.max(clock.next()),
            (Some(clock), None) => clock.next(),
            (None, Some(earliest)) => earliest,
            (None, None) => Tick::default()
        }
    }

    fn commit_due<S: CommitSink + ?Sized>(
        &mut self,
        tick: Tick,
        ledger: &mut RatingLedger,
        sink: &mut S
    ) -> Result<(), ProcessorError> {
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().0 > tick {
                break;
            }

            let pending = entry.remove();
            pending
                .modification
                .commit(ledger, sink, &pending.game, tick, CommitKind::Scheduled)?;
        }

        Ok(())
    }

    fn score_starting(&mut self, tick: Tick, ledger: &mut RatingLedger) {
        while self.games.front().is_some_and(|g| g.start_time() == tick) {
            let Some(game) = self.games.pop_front() else {
                break;
            };

            debug!(
                game = game.name(),
                %tick,
                date = ?tick.calendar_date(),
                end = %game.end_time(),
                participants = game.participants().len(),
                "Scoring game"
            );

            let modification = game.score(ledger);
            self.enqueue(game.name().to_owned(), modification);
            Span::current().pb_inc(1);
        }
    }

    fn enqueue(&mut self, game: String, modification: Modification) {
        let key = (modification.effective_time(), self.enqueued);
        self.enqueued += 1;
        self.pending.insert(key, PendingCommit { game, modification });
    }

    fn flush<S: CommitSink + ?Sized>(
        &mut self,
        tick: Tick,
        ledger: &mut RatingLedger,
        sink: &mut S
    ) -> Result<(), ProcessorError> {
        if !self.pending.is_empty() {
            debug!(%tick, remaining = self.pending.len(), "Flushing remaining modifications");
        }

        while let Some((_, pending)) = self.pending.pop_first() {
            pending
                .modification
                .commit(ledger, sink, &pending.game, tick, CommitKind::Flushed)?;
        }

        Ok(())
    }
}
