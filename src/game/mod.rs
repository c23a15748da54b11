//! Game flow
//!
//! Board dimensions, the session state machine and the events it emits.

mod config;
mod events;
mod session;

pub use config::GameConfig;
pub use events::BoardEvent;
pub use session::{GameState, Row, Session, SessionError, Statistics};
