use std::path::PathBuf;

use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// The three header lines of a game file, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum HeaderField {
    #[strum(serialize = "start time")]
    StartTime,
    #[strum(serialize = "end time")]
    EndTime,
    #[strum(serialize = "victor count")]
    VictorCount
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error(
        "Too few lines in {}. Each file must have 3 header lines for the start time, end time, and victor \
         count (0 for a draw), in that order, followed by results for at least two players.",
        path.display()
    )]
    TooFewLines { path: PathBuf, lines: usize },

    #[error(
        "Header in {} was not formatted correctly: {field} was `{value}`. Files need a header with start \
         time (month.day), end time (month.day), and victor count (0 for a draw), in that order. \"month\" \
         is the number of months since January 2024 and \"day\" is the 2-digit day of the month, e.g. 13.01 \
         for January 1, 2025.",
        path.display()
    )]
    MalformedHeader {
        path: PathBuf,
        field: HeaderField,
        value: String
    },

    #[error(
        "{} line #{line} had the wrong format. Each line after the header should contain the player's tag \
         and performance %, in that order, separated by a tab.",
        path.display()
    )]
    MalformedParticipant { path: PathBuf, line: usize },

    #[error("{} line #{line}: performance `{value}` is not a number.", path.display())]
    InvalidPerformance {
        path: PathBuf,
        line: usize,
        value: String
    },

    #[error("{} lists player `{player}` more than once.", path.display())]
    DuplicateParticipant { path: PathBuf, player: String },

    #[error("{} line #{line} is not a `player<TAB>rating` entry.", path.display())]
    MalformedLedgerEntry { path: PathBuf, line: usize }
}

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error
    }
}
