use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::config::Backend;

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Print the demo report.
    Report,
    /// Serve the vibration method channel in the foreground.
    Serve {
        /// Socket to listen on
        #[clap(short, long)]
        socket: Option<PathBuf>,
        /// Platform API level used for capability detection
        #[clap(long)]
        api_level: Option<u32>,
        /// Vibrator backend
        #[clap(short, long, value_enum)]
        backend: Option<Backend>,
    },
    /// Send a call to a running daemon.
    Call {
        /// Method name, e.g. `vibrate` or `cancel`
        method: String,
        /// Arguments as key=value pairs
        args: Vec<String>,
        /// Socket of the running daemon
        #[clap(short, long)]
        socket: Option<PathBuf>,
    },
    /// Dispatch a single call locally, without a daemon.
    Dispatch {
        /// Method name, e.g. `vibrate` or `cancel`
        method: String,
        /// Arguments as key=value pairs
        args: Vec<String>,
        /// Platform API level used for capability detection
        #[clap(long)]
        api_level: Option<u32>,
        /// Vibrator backend
        #[clap(short, long, value_enum)]
        backend: Option<Backend>,
    },
}

/// Vibration method-channel daemon and runtime demo report.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to the config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}
