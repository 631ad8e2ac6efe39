//! Background receiver: blocks on the socket, feeds decoded messages into
//! the shared state, and turns any terminal stream condition into a single
//! running=false transition. Never reconnects.

use std::io::Read;
use std::thread::JoinHandle;

use crate::reader::MessageReader;
use crate::state::SharedState;

pub fn spawn<R: Read + Send + 'static>(
    mut reader: MessageReader<R>,
    state: SharedState,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            match reader.recv() {
                Some(Ok(msg)) => state.apply(msg),
                Some(Err(error)) => {
                    log::error!("Connection lost: {error}");
                    break;
                }
                None => {
                    log::info!("Server closed the connection");
                    break;
                }
            }
        }
        // No-op if GAME_OVER or a local quit already ended the session.
        state.apply_game_over();
    })
}
