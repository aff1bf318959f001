//! FocusQuest Economy Engine
//!
//! Deterministic rules that turn a completed focus session into XP, coins,
//! sparks, level progression, and loot. Every function here is pure
//! computation: no I/O, no shared state, safe to call from any number of
//! concurrent request handlers. Persistence and transport live with the
//! caller.

pub mod actions;
pub mod completion;
pub mod constants;
pub mod economy;
pub mod error;
pub mod loot;
pub mod player;
pub mod schema;
pub mod session;

pub use actions::Action;
pub use error::EngineError;
pub use player::PlayerState;
pub use session::{Session, SessionOutcome};
