//! Serpent is a terminal snake arcade with accounts, settings and a leaderboard.
//!
//! The library exposes the simulation core, the screen state machine and the
//! flat-file stores so integration tests can drive them without a terminal.

pub mod accounts;
pub mod app;
pub mod audio;
pub mod constants;
pub mod game;
pub mod input;
pub mod leaderboard;
pub mod settings;
pub mod ui;
