//! Various utility functions.
pub mod board_gen;
pub mod bot_game;
pub mod coord;
pub mod tiny;
