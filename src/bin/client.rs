use std::time::Duration;

use clap::Parser;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use shape_click::connection::Connection;
use shape_click::game::{GameClient, InputEvent};
use shape_click::reader::{MessageReader, DEFAULT_CHUNK_SIZE};
use shape_click::receiver;
use shape_click::render::Framebuffer;
use shape_click::state::SharedState;
use shape_click::writer::MessageWriter;

#[derive(Parser)]
#[command(about = "Client for the shape-clicking game")]
struct Args {
    /// Server host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Server port
    #[arg(long, default_value_t = 12345)]
    port: u16,
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,
    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,
    /// Socket read chunk size in bytes
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let connection = Connection::connect(&args.host, args.port)?;
    let state = SharedState::new();
    let receiver_handle = receiver::spawn(
        MessageReader::with_chunk_size(connection.reader(), args.chunk_size),
        state.clone(),
    );
    let mut client = GameClient::new(state.clone(), MessageWriter::new(connection.writer()));

    let mut window = Window::new(
        "Click the Shape",
        args.width,
        args.height,
        WindowOptions::default(),
    )?;
    let mut framebuffer = Framebuffer::new(args.width, args.height);

    let mut was_down = false;
    while state.is_running() && window.is_open() && !window.is_key_down(Key::Escape) {
        let down = window.get_mouse_down(MouseButton::Left);
        if down && !was_down {
            if let Some((x, y)) = window.get_mouse_pos(MouseMode::Discard) {
                client.handle_event(InputEvent::PointerDown {
                    x: x as i32,
                    y: y as i32,
                });
            }
        }
        was_down = down;

        client.render(&mut framebuffer);
        window.update_with_buffer(framebuffer.pixels(), args.width, args.height)?;
        std::thread::sleep(Duration::from_millis(16));
    }

    // Cooperative teardown: flip the flag, then close the socket so a
    // receiver blocked in read() wakes up and exits.
    client.handle_event(InputEvent::Quit);
    connection.close();
    let _ = receiver_handle.join();
    log::info!("Final score: {}", state.snapshot().score);
    Ok(())
}
