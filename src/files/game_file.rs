use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf}
};

use tracing::{debug, info, warn};

use crate::{
    error::{HeaderField, InputError},
    model::{
        constants::{EXPECTED_PARTICIPANTS_MAX, EXPECTED_PARTICIPANTS_MIN, HEADER_LINES, MIN_PARTICIPANTS},
        game::Game,
        structures::tick::Tick
    }
};

/// Lists the game files in `dir`, sorted by file name. Subdirectories are
/// ignored.
pub fn list_game_files(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    let io_error = |source| InputError::Io {
        path: dir.to_path_buf(),
        source
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Reads and parses every game file in `dir`. The first invalid file aborts the
/// whole batch.
pub fn read_games_dir(dir: &Path) -> Result<Vec<Game>, InputError> {
    let files = list_game_files(dir)?;
    info!(
        "These files are being scored: {:?}",
        files.iter().map(|f| f.display().to_string()).collect::<Vec<_>>()
    );

    files.iter().map(|path| read_game_file(path)).collect()
}

pub fn read_game_file(path: &Path) -> Result<Game, InputError> {
    let contents = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source
    })?;

    parse_game(path, &contents)
}

/// Parses the contents of a game file:
///
/// ```text
/// <start month.day>
/// <end month.day>
/// <victor count>
/// <player>\t<performance %>
/// ...
/// ```
///
/// The game is named after the file.
pub fn parse_game(path: &Path, contents: &str) -> Result<Game, InputError> {
    let lines = contents.lines().collect::<Vec<_>>();
    if lines.len() < HEADER_LINES + MIN_PARTICIPANTS {
        return Err(InputError::TooFewLines {
            path: path.to_path_buf(),
            lines: lines.len()
        });
    }

    let start_time = parse_timestamp(path, HeaderField::StartTime, lines[0])?;
    let end_time = parse_timestamp(path, HeaderField::EndTime, lines[1])?;
    let victor_count = parse_victor_count(path, lines[2])?;

    let mut seen = HashSet::new();
    let mut results = Vec::with_capacity(lines.len() - HEADER_LINES);
    for (i, line) in lines.iter().enumerate().skip(HEADER_LINES) {
        let line_number = i + 1;
        let (player, performance) = parse_participant(path, line_number, line)?;

        if !seen.insert(player) {
            return Err(InputError::DuplicateParticipant {
                path: path.to_path_buf(),
                player: player.to_owned()
            });
        }

        let performance = parse_performance(path, line_number, performance)?;
        results.push((player.to_owned(), performance));
    }

    if !(EXPECTED_PARTICIPANTS_MIN..=EXPECTED_PARTICIPANTS_MAX).contains(&results.len()) {
        warn!(
            "{} contained information for {} players. Imperial Diplomacy has {}-{} players (depending on \
             the wave), so this seems likely to be a mistake.",
            path.display(),
            results.len(),
            EXPECTED_PARTICIPANTS_MIN,
            EXPECTED_PARTICIPANTS_MAX
        );
    }

    if victor_count > results.len() {
        debug!(
            file = %path.display(),
            victor_count,
            players = results.len(),
            "Victor count exceeds the number of players"
        );
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Game::new(name, start_time, end_time, victor_count, &results))
}

fn parse_timestamp(path: &Path, field: HeaderField, line: &str) -> Result<Tick, InputError> {
    match line.trim().parse::<f64>() {
        Ok(timestamp) if timestamp.is_finite() && timestamp >= 0.0 => Ok(Tick::from_timestamp(timestamp)),
        _ => Err(malformed_header(path, field, line))
    }
}

fn parse_victor_count(path: &Path, line: &str) -> Result<usize, InputError> {
    // Parsed signed so that `-0` is accepted as zero
    line.trim()
        .parse::<i64>()
        .ok()
        .and_then(|count| usize::try_from(count).ok())
        .ok_or_else(|| malformed_header(path, HeaderField::VictorCount, line))
}

fn malformed_header(path: &Path, field: HeaderField, line: &str) -> InputError {
    InputError::MalformedHeader {
        path: path.to_path_buf(),
        field,
        value: line.to_owned()
    }
}

fn parse_participant<'a>(path: &Path, line_number: usize, line: &'a str) -> Result<(&'a str, &'a str), InputError> {
    let mut parts = line.split('\t');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(player), Some(performance), None) => Ok((player, performance)),
        _ => Err(InputError::MalformedParticipant {
            path: path.to_path_buf(),
            line: line_number
        })
    }
}

fn parse_performance(path: &Path, line_number: usize, value: &str) -> Result<f64, InputError> {
    match value.trim().parse::<f64>() {
        Ok(performance) if performance.is_finite() => Ok(performance),
        _ => Err(InputError::InvalidPerformance {
            path: path.to_path_buf(),
            line: line_number,
            value: value.to_owned()
        })
    }
}
