use clap::Parser;
use impdip_ratings::{args::Args, processor::process_directory};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode
};
use tracing::error;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_level);

    let games_dir = match args.games_dir.clone().map_or_else(prompt_games_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            error!("Failed to read the game folder from stdin: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match process_directory(&games_dir, &args.output_dir) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(log_level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

fn prompt_games_dir() -> io::Result<PathBuf> {
    print!("What folder are your game info files in?\n>>> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(PathBuf::from(line.trim()))
}
