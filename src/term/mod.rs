//! Terminal frontend
//!
//! Crossterm-backed rendering and key input for the game loops. The
//! screen draws a fixed 80x24 layout; the input source maps raw key
//! events onto the game vocabulary with a bounded wait.

pub mod input;
pub mod screen;

pub use input::TerminalInput;
pub use screen::TerminalScreen;
