//! Shared game state: the single record both threads agree on. The
//! receiver thread writes, the render loop reads a snapshot once per
//! frame, and the mutex covers the whole record so a snapshot can never
//! mix fields from two different updates.

use std::sync::{Arc, Mutex};

use crate::messages::{ServerToClientMsg, Shape};

struct GameState {
    shape: Option<Shape>,
    score: u32,
    running: bool,
}

/// Consistent view of the state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub shape: Option<Shape>,
    pub score: u32,
    pub running: bool,
}

/// Cheap-to-clone handle; one copy per thread.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<Mutex<GameState>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(GameState {
                shape: None,
                score: 0,
                running: true,
            })),
        }
    }

    /// Applies one decoded server message. A terminated session stays
    /// terminated: once running is false, later messages are dropped.
    pub fn apply(&self, msg: ServerToClientMsg) {
        let mut state = self.inner.lock().unwrap();
        if !state.running {
            return;
        }
        match msg {
            ServerToClientMsg::Shape(shape) => state.shape = Some(shape),
            ServerToClientMsg::Score(score) => state.score = score,
            ServerToClientMsg::GameOver => {
                log::info!("Game over");
                state.running = false;
                state.shape = None;
            }
        }
    }

    pub fn apply_game_over(&self) {
        self.apply(ServerToClientMsg::GameOver);
    }

    /// Optimistically removes the shape after a confirmed local hit; the
    /// server will broadcast the next shape on its own.
    pub fn clear_shape(&self) {
        self.inner.lock().unwrap().shape = None;
    }

    /// Local quit path. Must not wait on the receiver thread, so it only
    /// flips the flag; the caller closes the connection to unblock a
    /// pending read.
    pub fn request_quit(&self) {
        let mut state = self.inner.lock().unwrap();
        state.running = false;
        state.shape = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.inner.lock().unwrap();
        Snapshot {
            shape: state.shape,
            score: state.score,
            running: state.running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().unwrap().running
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{parse_line, Color};

    fn shape() -> Shape {
        Shape {
            color: Color { r: 255, g: 0, b: 0 },
            x: 100,
            y: 200,
            radius: 30,
        }
    }

    #[test]
    fn starts_empty_and_running() {
        let state = SharedState::new();
        assert_eq!(
            state.snapshot(),
            Snapshot {
                shape: None,
                score: 0,
                running: true,
            }
        );
    }

    #[test]
    fn shape_update_replaces_as_a_unit() {
        let state = SharedState::new();
        state.apply(ServerToClientMsg::Shape(shape()));
        assert_eq!(state.snapshot().shape, Some(shape()));
    }

    #[test]
    fn duplicate_delivery_is_idempotent() {
        let state = SharedState::new();
        state.apply(ServerToClientMsg::Shape(shape()));
        let once = state.snapshot();
        state.apply(ServerToClientMsg::Shape(shape()));
        assert_eq!(state.snapshot(), once);
    }

    #[test]
    fn score_is_overwritten_not_accumulated() {
        let state = SharedState::new();
        state.apply(parse_line("SCORE 7").unwrap());
        assert_eq!(state.snapshot().score, 7);
        state.apply(parse_line("SCORE 3").unwrap());
        assert_eq!(state.snapshot().score, 3);
    }

    #[test]
    fn game_over_is_terminal_and_clears_the_shape() {
        let state = SharedState::new();
        state.apply(ServerToClientMsg::Shape(shape()));
        state.apply(ServerToClientMsg::GameOver);
        let snap = state.snapshot();
        assert!(!snap.running);
        assert_eq!(snap.shape, None);

        // Late messages cannot resurrect the session.
        state.apply(ServerToClientMsg::Shape(shape()));
        state.apply(ServerToClientMsg::Score(99));
        let snap = state.snapshot();
        assert!(!snap.running);
        assert_eq!(snap.shape, None);
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn local_quit_terminates_without_the_receiver() {
        let state = SharedState::new();
        state.apply(ServerToClientMsg::Shape(shape()));
        state.request_quit();
        assert!(!state.is_running());
        assert_eq!(state.snapshot().shape, None);
    }
}
