//! jj-evo-commit - replay a change's evolution log as real changes
//!
//! Every state a jj change passed through (as recorded by `jj evolog`)
//! is recreated as its own change, oldest first, each stacked on the
//! previous one.
//!
//! This library provides:
//! - [`jj`]: Jujutsu command execution and evolog parsing
//! - [`model`]: Evolog entries and skip/pick selection
//! - [`replay`]: The sequential replay engine
//! - [`console`]: Output sinks for replay progress

pub mod console;
pub mod jj;
pub mod model;
pub mod replay;
