mod client;
mod server;
mod wire;

use std::fmt;

use crossbeam_channel::Sender;
use thiserror::Error;

use buzzline_bridge::{MethodCall, MethodResult};

pub use client::ChannelClient;
pub use server::{ChannelServer, READ_TIMEOUT};
pub use wire::{format_request, parse_request};

/// Error type for method channel operations.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("socket io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed message: {0}")]
    Parse(String),
    #[error("peer closed the channel")]
    Disconnected,
}

/// Convenient result alias for channel operations.
pub type ChannelResult<T> = std::result::Result<T, ChannelError>;

/// Response line sent back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Ok,
    NotImplemented,
    Err(String),
}

impl Reply {
    pub fn parse(line: &str) -> ChannelResult<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        match line {
            "OK" => Ok(Reply::Ok),
            "NOT_IMPLEMENTED" => Ok(Reply::NotImplemented),
            "" => Err(ChannelError::Disconnected),
            "ERR" => Ok(Reply::Err(String::new())),
            _ => match line.strip_prefix("ERR ") {
                Some(rest) => Ok(Reply::Err(rest.to_string())),
                None => Err(ChannelError::Parse(format!("unexpected reply: {line}"))),
            },
        }
    }
}

impl From<MethodResult> for Reply {
    fn from(result: MethodResult) -> Self {
        match result {
            MethodResult::Success => Reply::Ok,
            MethodResult::NotImplemented => Reply::NotImplemented,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => f.write_str("OK"),
            Reply::NotImplemented => f.write_str("NOT_IMPLEMENTED"),
            Reply::Err(message) => {
                // One line per reply: fold embedded line breaks.
                let message = message.replace(['\r', '\n'], " ");
                write!(f, "ERR {message}")
            }
        }
    }
}

/// A call forwarded from the socket thread to the event loop.
pub struct Request {
    pub call: MethodCall,
    pub reply: Sender<Reply>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_lines() {
        assert_eq!(Reply::Ok.to_string(), "OK");
        assert_eq!(Reply::NotImplemented.to_string(), "NOT_IMPLEMENTED");
        assert_eq!(Reply::Err("no motor".into()).to_string(), "ERR no motor");

        assert_eq!(Reply::parse("OK\n").unwrap(), Reply::Ok);
        assert_eq!(
            Reply::parse("NOT_IMPLEMENTED\r\n").unwrap(),
            Reply::NotImplemented
        );
        assert_eq!(
            Reply::parse("ERR missing method\n").unwrap(),
            Reply::Err("missing method".into())
        );
    }

    #[test]
    fn reply_parse_rejects_garbage() {
        assert!(matches!(Reply::parse(""), Err(ChannelError::Disconnected)));
        assert!(matches!(Reply::parse("YES"), Err(ChannelError::Parse(_))));
        assert!(matches!(
            Reply::parse("ERRATA\n"),
            Err(ChannelError::Parse(_))
        ));
        assert_eq!(Reply::parse("ERR\n").unwrap(), Reply::Err(String::new()));
    }

    #[test]
    fn error_reply_stays_on_one_line() {
        let reply = Reply::Err("controller lost\nSDL: device removed\r".into());
        let line = reply.to_string();
        assert_eq!(line, "ERR controller lost SDL: device removed ");
        assert!(!line.contains('\n'));
        assert_eq!(
            Reply::parse(&format!("{line}\n")).unwrap(),
            Reply::Err("controller lost SDL: device removed ".into())
        );
    }
}
