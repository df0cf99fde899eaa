//! Data models for jj-evo-commit
//!
//! This module contains data structures representing evolution log
//! entries and the selection applied to them before replay.

mod base_ref;
mod evolog;
mod filter;

pub use base_ref::BaseRef;
pub use evolog::EvologEntry;
pub use filter::{FilterSpec, parse_id_list};
