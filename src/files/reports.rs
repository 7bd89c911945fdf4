use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf}
};

use tracing::{debug, info};

use crate::{
    error::{InputError, ProcessorError},
    model::{
        commit_sink::{CommitRecord, CommitSink},
        constants::RESULTS_FILE_SUFFIX,
        rating_ledger::RatingLedger,
        structures::rating_change::RatingChange
    }
};

/// Writes one `<game>_results.txt` report per committed modification.
pub struct FileReportSink {
    output_dir: PathBuf
}

impl FileReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> FileReportSink {
        FileReportSink {
            output_dir: output_dir.into()
        }
    }

    pub fn report_path(&self, game: &str) -> PathBuf {
        self.output_dir.join(format!("{game}{RESULTS_FILE_SUFFIX}"))
    }
}

impl CommitSink for FileReportSink {
    fn record(&mut self, commit: &CommitRecord<'_>) -> Result<(), ProcessorError> {
        let path = self.report_path(commit.game);
        write_file(&path, &format_report(commit.changes))?;
        debug!(file = %path.display(), "Wrote rating report");

        Ok(())
    }
}

/// One line per player: `player, rating before, rating after, signed delta[, performance]`.
pub fn format_report(changes: &[RatingChange]) -> String {
    let mut report = String::new();
    for change in changes {
        let _ = writeln!(report, "{change}");
    }

    report
}

/// One `player<TAB>rating` line per player, highest rating first.
pub fn format_ledger(ledger: &RatingLedger) -> String {
    let mut contents = String::new();
    for (player, rating) in ledger.leaderboard() {
        let _ = writeln!(contents, "{player}\t{rating:?}");
    }

    contents
}

pub fn write_ledger(path: &Path, ledger: &RatingLedger) -> Result<(), ProcessorError> {
    write_file(path, &format_ledger(ledger))?;
    info!(file = %path.display(), players = ledger.len(), "Wrote current ratings");

    Ok(())
}

/// Parses a file produced by [`format_ledger`], preserving line order.
pub fn parse_ledger(path: &Path, contents: &str) -> Result<Vec<(String, f64)>, InputError> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.split_once('\t')
                .and_then(|(player, rating)| Some((player.to_owned(), rating.trim().parse::<f64>().ok()?)))
                .ok_or_else(|| InputError::MalformedLedgerEntry {
                    path: path.to_path_buf(),
                    line: i + 1
                })
        })
        .collect()
}

pub fn read_ledger(path: &Path) -> Result<Vec<(String, f64)>, InputError> {
    let contents = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source
    })?;

    parse_ledger(path, &contents)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ProcessorError> {
    fs::write(path, contents).map_err(|source| ProcessorError::Output {
        path: path.to_path_buf(),
        source
    })
}
