use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "Imperial Diplomacy Ratings",
    author = "Imperial Diplomacy",
    long_about = "Generates Elo-style player ratings from Imperial Diplomacy game result files"
)]
pub struct Args {
    /// Folder containing one result file per game.
    ///
    /// Each file starts with the start time, end time (both month.day) and victor
    /// count, followed by one `player<TAB>performance %` line per player.
    /// If omitted, the folder is asked for interactively.
    #[arg(env = "GAMES_DIR", help = "Folder containing the game result files")]
    pub games_dir: Option<PathBuf>,

    /// Where the per-game `<game>_results.txt` reports and `current_ratings.txt`
    /// are written
    #[arg(short, long, env = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_all_arguments() {
        let args = Args::try_parse_from(["impdip-ratings", "games", "--output-dir", "out", "--log-level", "debug"])
            .unwrap();

        assert_eq!(args.games_dir, Some(PathBuf::from("games")));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = Args::try_parse_from(["impdip-ratings", "games", "--log-level", "loud"]);

        assert!(result.is_err());
    }
}
