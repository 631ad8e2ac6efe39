//! Frame logic for the render/input loop, kept free of any windowing
//! library: the binary feeds in [`InputEvent`]s and a [`Canvas`], so the
//! whole click path is testable headless.

use std::io::Write;

use crate::messages::{ClientToServerMsg, Color, Shape};
use crate::state::SharedState;
use crate::writer::MessageWriter;

/// Drawing surface the render loop targets once per frame.
pub trait Canvas {
    /// Fills the whole surface with black.
    fn clear(&mut self);
    fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Color);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);
}

/// UI events the loop reacts to; a pointer-down is consumed within the
/// frame that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerDown { x: i32, y: i32 },
}

/// Boundary-inclusive Euclidean hit test: a click at distance exactly
/// `radius` counts. Compared in squared form so integer inputs stay exact.
pub fn hit_test(px: i32, py: i32, shape: &Shape) -> bool {
    let dx = (px - shape.x) as i64;
    let dy = (py - shape.y) as i64;
    let radius = shape.radius as i64;
    dx * dx + dy * dy <= radius * radius
}

pub struct GameClient<W> {
    state: SharedState,
    writer: MessageWriter<W>,
}

impl<W: Write> GameClient<W> {
    pub fn new(state: SharedState, writer: MessageWriter<W>) -> Self {
        Self { state, writer }
    }

    /// Draws one frame from a single state snapshot.
    pub fn render(&self, canvas: &mut impl Canvas) {
        let snapshot = self.state.snapshot();
        canvas.clear();
        if let Some(shape) = snapshot.shape {
            canvas.fill_circle(shape.x, shape.y, shape.radius, shape.color);
        }
        let white = Color {
            r: 255,
            g: 255,
            b: 255,
        };
        canvas.draw_text(10, 10, &format!("Score: {}", snapshot.score), white);
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.state.request_quit(),
            InputEvent::PointerDown { x, y } => self.handle_pointer_down(x, y),
        }
    }

    /// On a hit, reports `CLICK r g b` and clears the shape locally right
    /// away; the server sends the next shape and score on its own. A
    /// failed send only loses this click.
    fn handle_pointer_down(&mut self, x: i32, y: i32) {
        let Some(shape) = self.state.snapshot().shape else {
            return;
        };
        if !hit_test(x, y, &shape) {
            return;
        }
        if let Err(error) = self.writer.send(ClientToServerMsg::Click { color: shape.color }) {
            log::warn!("Failed to report click: {error}");
        }
        self.state.clear_shape();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ServerToClientMsg;

    fn shape(x: i32, y: i32, radius: u32) -> Shape {
        Shape {
            color: Color { r: 0, g: 255, b: 0 },
            x,
            y,
            radius,
        }
    }

    #[test]
    fn hit_test_is_boundary_inclusive() {
        let s = shape(100, 100, 5);
        assert!(hit_test(100, 100, &s));
        assert!(hit_test(103, 104, &s)); // 3-4-5: distance exactly 5
        assert!(!hit_test(103, 105, &s));
        assert!(!hit_test(106, 100, &s));
        assert!(hit_test(95, 100, &s));
    }

    #[test]
    fn hit_test_zero_radius_only_matches_the_center() {
        let s = shape(10, 10, 0);
        assert!(hit_test(10, 10, &s));
        assert!(!hit_test(11, 10, &s));
    }

    fn client_with_shape(s: Shape) -> GameClient<Vec<u8>> {
        let state = SharedState::new();
        state.apply(ServerToClientMsg::Shape(s));
        GameClient::new(state, MessageWriter::new(Vec::new()))
    }

    #[test]
    fn hit_sends_one_click_and_clears_the_shape() {
        let mut client = client_with_shape(shape(400, 300, 50));
        client.handle_event(InputEvent::PointerDown { x: 400, y: 300 });
        assert_eq!(client.writer.inner().as_slice(), b"CLICK 0 255 0\n");
        assert_eq!(client.state.snapshot().shape, None);
    }

    #[test]
    fn miss_sends_nothing_and_keeps_the_shape() {
        let mut client = client_with_shape(shape(400, 300, 50));
        client.handle_event(InputEvent::PointerDown { x: 10, y: 10 });
        assert!(client.writer.inner().is_empty());
        assert_eq!(client.state.snapshot().shape, Some(shape(400, 300, 50)));
    }

    #[test]
    fn pointer_down_without_a_shape_is_ignored() {
        let state = SharedState::new();
        let mut client = GameClient::new(state, MessageWriter::new(Vec::new()));
        client.handle_event(InputEvent::PointerDown { x: 0, y: 0 });
        assert!(client.writer.inner().is_empty());
    }

    #[test]
    fn quit_event_terminates_locally() {
        let mut client = client_with_shape(shape(1, 1, 1));
        client.handle_event(InputEvent::Quit);
        assert!(!client.state.is_running());
    }

    struct RecordingCanvas {
        cleared: bool,
        circles: Vec<(i32, i32, u32, Color)>,
        texts: Vec<(i32, i32, String)>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self) {
            self.cleared = true;
        }
        fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Color) {
            self.circles.push((x, y, radius, color));
        }
        fn draw_text(&mut self, x: i32, y: i32, text: &str, _color: Color) {
            self.texts.push((x, y, text.to_owned()));
        }
    }

    #[test]
    fn render_draws_shape_and_score_overlay() {
        let state = SharedState::new();
        state.apply(ServerToClientMsg::Shape(shape(100, 200, 30)));
        state.apply(ServerToClientMsg::Score(7));
        let client = GameClient::new(state, MessageWriter::new(Vec::new()));

        let mut canvas = RecordingCanvas {
            cleared: false,
            circles: vec![],
            texts: vec![],
        };
        client.render(&mut canvas);
        assert!(canvas.cleared);
        assert_eq!(
            canvas.circles,
            vec![(100, 200, 30, Color { r: 0, g: 255, b: 0 })]
        );
        assert_eq!(canvas.texts, vec![(10, 10, "Score: 7".to_owned())]);
    }
}
