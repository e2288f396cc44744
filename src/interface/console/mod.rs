//! An interactive console game of a human against a [Bot](crate::ai::Bot).
pub use command::*;
pub use game::*;

mod command;
mod game;
