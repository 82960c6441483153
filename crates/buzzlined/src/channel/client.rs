use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

use buzzline_bridge::MethodCall;

use super::{format_request, ChannelResult, Reply};

/// Calling side of the method channel.
pub struct ChannelClient {
    socket_path: PathBuf,
}

impl ChannelClient {
    pub fn new<P: AsRef<Path>>(socket_path: P) -> Self {
        Self {
            socket_path: socket_path.as_ref().to_path_buf(),
        }
    }

    /// Sends one call and waits for its reply.
    pub fn invoke(&self, call: &MethodCall) -> ChannelResult<Reply> {
        let mut stream = UnixStream::connect(&self.socket_path)?;
        let line = format_request(call);
        stream.write_all(line.as_bytes())?;
        stream.write_all(b"\n")?;
        stream.flush()?;

        let mut reader = BufReader::new(stream);
        let mut response = String::new();
        reader.read_line(&mut response)?;
        Reply::parse(&response)
    }
}
