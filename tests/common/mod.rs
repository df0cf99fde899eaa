//! Common test utilities for integration tests.
//!
//! This module provides helpers for creating and managing temporary
//! jj repositories in tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod test_repo;

pub use test_repo::TestRepo;

use std::process::Command;

/// Return early from a test when no `jj` binary is available.
macro_rules! skip_if_no_jj {
    () => {
        if !$crate::common::jj_available() {
            eprintln!("skipping: jj not found in PATH");
            return;
        }
    };
}

/// Whether `jj --version` can be run.
pub fn jj_available() -> bool {
    Command::new("jj")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
