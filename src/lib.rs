//! Classic falling-block puzzle game for the terminal
//!
//! The crate splits along the seam the gameplay needs: [`core`] holds
//! the deterministic rules (board, shape catalog, placement, scoring,
//! session state machine), [`runner`] drives one session with a gravity
//! thread and an input loop sharing a single lock, and [`term`]
//! implements the [`ui`] rendering and input contracts with crossterm.

pub mod core;
pub mod runner;
pub mod term;
pub mod types;
pub mod ui;
