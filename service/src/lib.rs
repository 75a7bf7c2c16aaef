mod connection;
mod decoder;
mod encoder;
mod session;

pub mod commands;

pub use commands::{Request, Response};
pub use connection::Connection;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use session::{GameSession, SessionError, MINIMAX_DEPTH, SCOUT_DEPTH};
