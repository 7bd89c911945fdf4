use crate::{
    error::ProcessorError,
    model::structures::{commit_kind::CommitKind, rating_change::RatingChange, tick::Tick}
};

/// Everything known about a modification at the moment it is committed.
#[derive(Debug, Clone, Copy)]
pub struct CommitRecord<'a> {
    /// Name of the game the modification was scored from
    pub game: &'a str,
    /// The scheduler clock when the commit happened
    pub tick: Tick,
    pub effective_time: Tick,
    pub kind: CommitKind,
    /// Rating changes, with `rating_before` read before the modification was applied
    pub changes: &'a [RatingChange]
}

/// Receives every committed modification, in commit order.
pub trait CommitSink {
    fn record(&mut self, commit: &CommitRecord<'_>) -> Result<(), ProcessorError>;
}
