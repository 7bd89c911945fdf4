pub mod game_file;
pub mod reports;
