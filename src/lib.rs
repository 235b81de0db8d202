//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, the
//! integration tests and the benches share one import path:
//! `blockfall::{core, input, term, types}`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
