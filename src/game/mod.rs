//! Play mode bookkeeping
//!
//! Tracks a player's answers against a generated layout. The layout engine
//! knows nothing about this module.

mod session;

pub use session::{GameStats, POINTS_PER_WORD, Session, SessionError};
