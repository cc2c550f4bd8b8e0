pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod errors;
pub mod manager;
pub mod quiet;
pub mod utils;

pub use manager::LogFileManager;
