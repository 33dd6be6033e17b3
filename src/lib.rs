//! Bollard Striker - a terminal arcade dodger with a tamper-evident leaderboard.
//!
//! The library holds the game model, the screen state machine and the
//! leaderboard store so they can be tested without a terminal. The binary
//! wires them to crossterm input and ratatui output.

pub mod core;
pub mod input;
pub mod leaderboard;
pub mod screens;
pub mod settings;
pub mod ui;
pub mod utils;

pub use crate::core::engine::{process_tick, FinalResult, Playfield, TickOutcome};
pub use crate::input::{FrameInput, InputCollector, TextEdit};
pub use crate::leaderboard::{LeaderboardEntry, LeaderboardError, LeaderboardStore};
pub use crate::screens::{Flow, GameApp, Screen, UiEvent};
pub use crate::settings::Settings;
