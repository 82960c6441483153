use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::bounded;

use buzzline_bridge::{MethodCall, VibrationBridge};
use buzzlined::channel::{parse_request, ChannelClient, ChannelResult, Reply};
use buzzlined::cli::{Cli, Command};
use buzzlined::config::Config;
use buzzlined::runner::{self, ServeOptions};
use buzzlined::{logging, print_error, print_info, print_warning, vibrator};

fn call_from_cli(method: &str, args: &[String]) -> ChannelResult<MethodCall> {
    let mut line = method.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    parse_request(&line)
}

fn report_reply(reply: &Reply) -> ExitCode {
    match reply {
        Reply::Ok => {
            print_info!("OK");
            ExitCode::SUCCESS
        }
        Reply::NotImplemented => {
            print_warning!("method not implemented");
            ExitCode::FAILURE
        }
        Reply::Err(message) => {
            print_error!("call failed: {message}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Option<Config> {
    match Config::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            print_error!("failed to load config: {e}");
            None
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    match cli.command {
        Command::Report => {
            buzzline_report::emit_report();
            ExitCode::SUCCESS
        }
        Command::Serve {
            socket,
            api_level,
            backend,
        } => {
            let Some(config) = load_config(cli.config.as_deref()) else {
                return ExitCode::FAILURE;
            };
            let options = ServeOptions {
                socket_path: socket.unwrap_or_else(|| config.socket_path()),
                api_level: api_level.unwrap_or(config.platform.api_level),
                backend: backend.unwrap_or(config.backend),
            };

            // Handle Ctrl+C to exit cleanly
            let (stop_tx, stop_rx) = bounded::<()>(1);
            if let Err(e) = ctrlc::set_handler(move || {
                let _ = stop_tx.try_send(());
            }) {
                print_error!("failed to set Ctrl+C handler: {e}");
                return ExitCode::FAILURE;
            }

            match runner::serve(&options, &stop_rx) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    print_error!("{e}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Call {
            method,
            args,
            socket,
        } => {
            let call = match call_from_cli(&method, &args) {
                Ok(call) => call,
                Err(e) => {
                    print_error!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            let Some(config) = load_config(cli.config.as_deref()) else {
                return ExitCode::FAILURE;
            };
            let client = ChannelClient::new(socket.unwrap_or_else(|| config.socket_path()));
            match client.invoke(&call) {
                Ok(reply) => report_reply(&reply),
                Err(e) => {
                    print_error!("failed to reach daemon: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Dispatch {
            method,
            args,
            api_level,
            backend,
        } => {
            let call = match call_from_cli(&method, &args) {
                Ok(call) => call,
                Err(e) => {
                    print_error!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            let Some(config) = load_config(cli.config.as_deref()) else {
                return ExitCode::FAILURE;
            };
            let vibrator = match vibrator::open(backend.unwrap_or(config.backend)) {
                Ok(v) => v,
                Err(e) => {
                    print_error!("failed to open vibrator: {e}");
                    return ExitCode::FAILURE;
                }
            };
            let mut bridge = VibrationBridge::for_api_level(
                vibrator,
                api_level.unwrap_or(config.platform.api_level),
            );
            report_reply(&runner::answer(&mut bridge, &call))
        }
    }
}
