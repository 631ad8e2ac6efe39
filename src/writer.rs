use std::io::Write;

use crate::messages::ClientToServerMsg;

/// Outbound side of the connection: one newline-terminated line per
/// message, flushed immediately.
pub struct MessageWriter<W> {
    stream: W,
}

impl<W: Write> MessageWriter<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    pub fn send(&mut self, msg: ClientToServerMsg) -> anyhow::Result<()> {
        self.stream.write_all(msg.encode().as_bytes())?;
        self.stream.write_all(b"\n")?;
        self.stream.flush()?;
        Ok(())
    }

    pub fn inner(&self) -> &W {
        &self.stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Color;

    #[test]
    fn send_writes_one_terminated_line() {
        let mut writer = MessageWriter::new(Vec::new());
        writer
            .send(ClientToServerMsg::Click {
                color: Color { r: 0, g: 255, b: 0 },
            })
            .unwrap();
        assert_eq!(writer.inner().as_slice(), b"CLICK 0 255 0\n");
    }
}
