pub mod faction;
pub mod factions_state;
pub mod message_log;
pub mod user_support;

pub use faction::*;
pub use factions_state::*;
pub use message_log::*;
pub use user_support::*;
