//! Terminal input adapter.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Each key
//! yields at most one action and each action is one engine call; there is no
//! auto-repeat logic here, the terminal's own key repeat is forwarded as-is.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
