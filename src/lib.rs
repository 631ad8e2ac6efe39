pub mod connection;
pub mod game;
pub mod messages;
pub mod reader;
pub mod receiver;
pub mod render;
pub mod state;
pub mod writer;
