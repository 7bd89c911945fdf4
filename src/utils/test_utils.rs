use crate::{
    error::ProcessorError,
    model::{
        commit_sink::{CommitRecord, CommitSink},
        game::Game,
        structures::{commit_kind::CommitKind, rating_change::RatingChange, tick::Tick}
    }
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn generate_game(name: &str, start: i64, end: i64, victor_count: usize, results: &[(&str, f64)]) -> Game {
    let results = results
        .iter()
        .map(|(player, performance)| (player.to_string(), *performance))
        .collect::<Vec<_>>();

    Game::new(name, Tick(start), Tick(end), victor_count, &results)
}

/// Generates `n` games between `n_players` players with random performances and
/// overlapping time windows. Seeded for reproducible results.
pub fn generate_random_games(n: usize, n_players: usize, victor_count: usize, seed: u64) -> Vec<Game> {
    if n_players < 2 {
        panic!("Games need at least 2 players");
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut games = Vec::with_capacity(n);

    for i in 0..n {
        let start = 100 + rng.random_range(0..(n as i64 * 10 + 1));
        let end = start + rng.random_range(1..=60);
        let results = (0..n_players)
            .map(|p| (format!("player-{p}"), rng.random_range(0.0..=100.0)))
            .collect::<Vec<_>>();

        games.push(Game::new(format!("game-{i}"), Tick(start), Tick(end), victor_count, &results));
    }

    games
}

/// Renders a game file in the text format read by [`crate::files::game_file`].
pub fn game_file_contents(start: &str, end: &str, victor_count: usize, results: &[(&str, f64)]) -> String {
    let mut contents = format!("{start}\n{end}\n{victor_count}\n");
    for (player, performance) in results {
        contents.push_str(&format!("{player}\t{performance}\n"));
    }

    contents
}

/// An owned copy of a [`CommitRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCommit {
    pub game: String,
    pub tick: Tick,
    pub effective_time: Tick,
    pub kind: CommitKind,
    pub changes: Vec<RatingChange>
}

/// A [`CommitSink`] that keeps every commit in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commits: Vec<RecordedCommit>
}

impl CommitSink for RecordingSink {
    fn record(&mut self, commit: &CommitRecord<'_>) -> Result<(), ProcessorError> {
        self.commits.push(RecordedCommit {
            game: commit.game.to_owned(),
            tick: commit.tick,
            effective_time: commit.effective_time,
            kind: commit.kind,
            changes: commit.changes.to_vec()
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_games_reproducible() {
        let first = generate_random_games(5, 4, 1, 42);
        let second = generate_random_games(5, 4, 1, 42);

        assert_eq!(first, second);
    }

    #[test]
    fn test_random_games_shape() {
        let games = generate_random_games(10, 6, 2, 7);

        assert_eq!(games.len(), 10);
        for game in &games {
            assert_eq!(game.participants().len(), 6);
            assert!(game.end_time() > game.start_time());
        }
    }

    #[test]
    #[should_panic(expected = "Games need at least 2 players")]
    fn test_random_games_invalid_player_count() {
        generate_random_games(1, 1, 0, 0);
    }

    #[test]
    fn test_game_file_contents() {
        let contents = game_file_contents("13.01", "13.15", 1, &[("alice", 55.5), ("bob", 12.0)]);

        assert_eq!(contents, "13.01\n13.15\n1\nalice\t55.5\nbob\t12\n");
    }
}
