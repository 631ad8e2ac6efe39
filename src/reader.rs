//! Inbound framing. TCP does not preserve message boundaries: one read may
//! carry half a line or several lines at once, so [`LineDecoder`] buffers
//! bytes across reads and only releases complete newline-terminated lines.

use std::collections::VecDeque;
use std::io::Read;

use crate::messages::{parse_line, ServerToClientMsg};

pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Accumulates raw bytes and yields the messages contained in every
/// complete line seen so far. A trailing partial line stays buffered until
/// its newline arrives.
#[derive(Default)]
pub struct LineDecoder {
    buffer: Vec<u8>,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk and returns the messages completed by it: zero, one
    /// or several. Malformed lines are logged and skipped; decoding always
    /// resumes at the next line.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<ServerToClientMsg> {
        self.buffer.extend_from_slice(chunk);
        let mut messages = Vec::new();
        while let Some(position) = self.buffer.iter().position(|c| *c == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=position).collect();
            let line = String::from_utf8_lossy(&line[..position]);
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok(msg) => messages.push(msg),
                Err(error) => log::warn!("Ignoring malformed line {line:?}: {error}"),
            }
        }
        messages
    }
}

/// Pull interface over a raw byte stream, in front of a [`LineDecoder`].
pub struct MessageReader<R> {
    stream: R,
    decoder: LineDecoder,
    pending: VecDeque<ServerToClientMsg>,
    chunk: Vec<u8>,
}

impl<R: Read> MessageReader<R> {
    pub fn new(stream: R) -> Self {
        Self::with_chunk_size(stream, DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(stream: R, chunk_size: usize) -> Self {
        Self {
            stream,
            decoder: LineDecoder::new(),
            pending: VecDeque::new(),
            chunk: vec![0; chunk_size.max(1)],
        }
    }

    /// Blocks until the next message is available. Returns `None` when the
    /// peer closes the stream and `Some(Err)` on an I/O error; both are
    /// terminal for the session.
    pub fn recv(&mut self) -> Option<anyhow::Result<ServerToClientMsg>> {
        loop {
            if let Some(msg) = self.pending.pop_front() {
                return Some(Ok(msg));
            }
            let read_bytes = match self.stream.read(&mut self.chunk) {
                Ok(0) => return None,
                Ok(n) => n,
                Err(err) => return Some(Err(err.into())),
            };
            self.pending.extend(self.decoder.push(&self.chunk[..read_bytes]));
        }
    }
}

impl<R: Read> Iterator for MessageReader<R> {
    type Item = anyhow::Result<ServerToClientMsg>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}
