use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use colored::Colorize;
use crossbeam_channel::{bounded, Sender};

use crate::{print_debug, print_error, print_info};
use super::{parse_request, ChannelResult, Reply, Request};

/// How long a peer may stay silent before its request line is abandoned.
pub const READ_TIMEOUT: Duration = Duration::from_secs(2);

/// Listening side of the method channel.
pub struct ChannelServer {
    socket_path: PathBuf,
}

impl ChannelServer {
    pub fn new<P: AsRef<Path>>(socket_path: P) -> Self {
        Self {
            socket_path: socket_path.as_ref().to_path_buf(),
        }
    }

    /// Binds the socket and spawns the accept thread.
    ///
    /// Each connection is read on its own short-lived thread, so a silent peer
    /// never holds up the others. Parsed calls are forwarded to `tx` and the
    /// connection thread waits for the answer on a per-request reply channel.
    pub fn listen(&self, tx: Sender<Request>) -> ChannelResult<JoinHandle<()>> {
        let socket_path = self.socket_path.clone();
        if socket_path.exists() {
            fs::remove_file(&socket_path)?;
        }
        let listener = UnixListener::bind(&socket_path)?;
        print_info!("method channel listening at {}", socket_path.display());

        let handle = thread::Builder::new()
            .name("buzzlined-channel".into())
            .spawn(move || {
                for stream in listener.incoming() {
                    match stream {
                        Ok(stream) => {
                            let tx = tx.clone();
                            let spawned = thread::Builder::new()
                                .name("buzzlined-conn".into())
                                .spawn(move || handle_connection(stream, &tx));
                            if let Err(e) = spawned {
                                print_error!("failed to spawn connection thread: {e}");
                            }
                        }
                        Err(e) => {
                            print_error!("channel accept error: {e}");
                            break;
                        }
                    }
                }
            })?;
        Ok(handle)
    }

    /// Removes the socket file, if it is still there.
    pub fn cleanup(&self) {
        if self.socket_path.exists() {
            let _ = fs::remove_file(&self.socket_path);
        }
    }
}

fn handle_connection(mut stream: UnixStream, tx: &Sender<Request>) {
    let reply = match read_reply(&stream, tx) {
        Ok(reply) => reply,
        Err(message) => Reply::Err(message),
    };
    print_debug!("channel reply: {reply}");
    // Display keeps the reply on a single line.
    let _ = stream.write_all(format!("{reply}\n").as_bytes());
}

fn read_reply(stream: &UnixStream, tx: &Sender<Request>) -> Result<Reply, String> {
    stream
        .set_read_timeout(Some(READ_TIMEOUT))
        .map_err(|e| format!("read failed: {e}"))?;
    let reader_stream = stream
        .try_clone()
        .map_err(|e| format!("read failed: {e}"))?;
    let mut reader = BufReader::new(reader_stream);
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => return Err("empty".into()),
        Ok(_) => {}
        Err(e) => return Err(format!("read failed: {e}")),
    }

    let call = parse_request(line.trim()).map_err(|e| e.to_string())?;
    print_debug!("channel call: {}", call.method);

    let (reply_tx, reply_rx) = bounded(1);
    tx.send(Request {
        call,
        reply: reply_tx,
    })
    .map_err(|_| "daemon is shutting down".to_string())?;
    reply_rx
        .recv()
        .map_err(|_| "daemon dropped the call".to_string())
}
