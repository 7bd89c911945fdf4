/// The flow of the processor: games are scored at their start tick into
/// pending modifications, which the scheduler commits to the ledger at
/// their end tick.
pub mod commit_sink;
pub mod constants;
pub mod game;
pub mod modification;
pub mod outcome;
pub mod rating_ledger;
pub mod scheduler;
pub mod structures;
