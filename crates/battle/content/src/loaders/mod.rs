//! RON loaders for battle content.

mod roster;

pub use roster::{load_duel_roster, roster_from_ron_str};
