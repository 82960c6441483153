pub mod channel;
pub mod cli;
pub mod config;
pub mod logging;
pub mod runner;
pub mod vibrator;
