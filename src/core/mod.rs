//! Core game model: entities, session scoring, and the per-frame engine.

pub mod constants;
pub mod engine;
pub mod entities;
pub mod session;

pub use constants::*;
pub use engine::*;
pub use entities::*;
pub use session::*;
