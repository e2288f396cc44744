//! Text front ends for playing against the engine.
pub mod console;
