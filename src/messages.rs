//! Wire protocol: newline-delimited ASCII lines with whitespace-separated
//! tokens. The server sends `SHAPE`, `SCORE` and `GAME_OVER`; the client
//! answers a hit with `CLICK`.

use anyhow::bail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The current clickable target. Present or absent as a whole; partially
/// updated shapes are never observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub color: Color,
    pub x: i32,
    pub y: i32,
    pub radius: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerToClientMsg {
    Shape(Shape),
    Score(u32),
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientToServerMsg {
    /// Reports a confirmed local hit, echoing the color of the shape that
    /// was clicked. Fire-and-forget; no reply is correlated.
    Click { color: Color },
}

/// Parses one complete line (without its trailing newline).
///
/// Unknown keywords, wrong token counts and non-integer tokens all produce
/// an error; the caller logs and skips the line so decoding continues with
/// the next one.
pub fn parse_line(line: &str) -> anyhow::Result<ServerToClientMsg> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["SHAPE", r, g, b, x, y, radius] => Ok(ServerToClientMsg::Shape(Shape {
            color: Color {
                r: r.parse()?,
                g: g.parse()?,
                b: b.parse()?,
            },
            x: x.parse()?,
            y: y.parse()?,
            radius: radius.parse()?,
        })),
        ["SCORE", value] => Ok(ServerToClientMsg::Score(value.parse()?)),
        ["GAME_OVER"] => Ok(ServerToClientMsg::GameOver),
        [] => bail!("empty line"),
        [keyword, ..] => bail!("unrecognized message {keyword:?}"),
    }
}

impl ClientToServerMsg {
    /// Encodes the message body; the writer appends the newline.
    pub fn encode(&self) -> String {
        match self {
            ClientToServerMsg::Click { color } => {
                format!("CLICK {} {} {}", color.r, color.g, color.b)
            }
        }
    }
}
