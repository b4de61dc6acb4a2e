//! Clickforge - Incremental Clicker Progression Engine
//!
//! Library crate with the full game model: the state, the modifier
//! pipeline, mutation operations, persistence, and loop cadence. A
//! host front-end drives it by calling the operations and rendering
//! the returned events.

pub mod achievements;
pub mod artifices;
pub mod buffs;
pub mod constants;
pub mod cost;
pub mod error;
pub mod events;
pub mod game_logic;
pub mod game_state;
pub mod items;
pub mod modifiers;
pub mod prestige;
pub mod save_manager;
pub mod scheduler;
pub mod upgrades;

pub use error::{GameResult, Rejection};
pub use events::GameEvent;
pub use game_state::GameState;
