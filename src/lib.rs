pub mod args;
pub mod error;
pub mod files;
pub mod model;
pub mod processor;
pub mod utils;
