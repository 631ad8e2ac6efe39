//! TCP connection owner. The receiver thread blocks on the read half while
//! the render loop writes clicks through the write half, so both halves
//! share one stream via an `Arc`.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::Arc;

use anyhow::Context;

/// Read/Write adapter over a shared stream, so a reader and a writer can
/// coexist on the same socket.
pub struct SocketWrapper(Arc<TcpStream>);

impl Read for SocketWrapper {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.0.as_ref().read(buf)
    }
}

impl Write for SocketWrapper {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.as_ref().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.as_ref().flush()
    }
}

#[derive(Clone)]
pub struct Connection {
    stream: Arc<TcpStream>,
}

impl Connection {
    /// Connects once; no timeout, no retry. A failure here aborts startup
    /// before any thread is spawned.
    pub fn connect(host: &str, port: u16) -> anyhow::Result<Self> {
        let stream = TcpStream::connect((host, port))
            .with_context(|| format!("failed to connect to {host}:{port}"))?;
        log::info!("Connected to {host}:{port}");
        Ok(Self {
            stream: Arc::new(stream),
        })
    }

    pub fn reader(&self) -> SocketWrapper {
        SocketWrapper(self.stream.clone())
    }

    pub fn writer(&self) -> SocketWrapper {
        SocketWrapper(self.stream.clone())
    }

    /// Idempotent. Shutting the socket down is what unblocks a receiver
    /// stuck in a blocking read during teardown.
    pub fn close(&self) {
        let _ = self.stream.shutdown(Shutdown::Both);
    }
}
