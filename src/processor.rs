use std::{fs, path::Path};

use tracing::info;

use crate::{
    error::ProcessorError,
    files::{
        game_file::read_games_dir,
        reports::{write_ledger, FileReportSink}
    },
    model::{constants::LEDGER_FILE_NAME, rating_ledger::RatingLedger, scheduler::Scheduler}
};

/// Rates every game file in `games_dir`, writing one report per game and the
/// final leaderboard into `output_dir`.
///
/// All game files are parsed before anything is scored, so an invalid file
/// aborts the run before any output is written.
pub fn process_directory(games_dir: &Path, output_dir: &Path) -> Result<RatingLedger, ProcessorError> {
    let games = read_games_dir(games_dir)?;
    info!(games = games.len(), dir = %games_dir.display(), "Game files parsed");

    fs::create_dir_all(output_dir).map_err(|source| ProcessorError::Output {
        path: output_dir.to_path_buf(),
        source
    })?;

    let mut ledger = RatingLedger::new();
    let mut sink = FileReportSink::new(output_dir);
    Scheduler::new(games).run(&mut ledger, &mut sink)?;

    write_ledger(&output_dir.join(LEDGER_FILE_NAME), &ledger)?;

    Ok(ledger)
}
