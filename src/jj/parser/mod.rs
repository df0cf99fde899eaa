//! jj output parser
//!
//! Parses the output from jj commands into structured data.
//! The graphical `jj evolog` grammar lives entirely in this module so a
//! change in jj's output format touches one place.

mod evolog;

pub use evolog::{EvologLine, classify_line, parse_evolog};

use regex::Regex;
use std::sync::LazyLock;

/// Marker that starts an operation line
pub(crate) const OPERATION_MARKER: &str = "--";

/// Regex for an evolog header line
/// Example: `@  zxmrylrz rektide+scm@voodoowarez.com 2025-12-09 21:38:26 2b4dbc61`
///
/// Groups:
/// 1. change_id (alphanumeric token after the node glyph, without the
///    `/N` offset jj adds to hidden predecessors such as `zxmrylrz/1`)
/// 2. author (between change_id and timestamp)
/// 3. timestamp (YYYY-MM-DD HH:MM:SS)
/// 4. commit_id (hex)
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[@○◆×]\s+(\w+)(?:/\d+)?\s+(.+?)\s+(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2})\s+([a-f0-9]+)",
    )
    .expect("Invalid evolog header regex")
});

/// Regex for an operation line under a header
/// Example: `│  -- operation 3427fa914a32 snapshot working copy`
///
/// Groups:
/// 1. operation_id (hex)
/// 2. operation description
static OPERATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[│\s]\s*--\s+operation\s+([a-f0-9]+)\s+(.+)")
        .expect("Invalid evolog operation regex")
});

/// Regex for any continuation line under a header
/// Example: `│  (no description set)`
///
/// Also matches operation lines, so it must be tried after [`OPERATION_REGEX`].
static DESCRIPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[│\s]\s+(.+)").expect("Invalid evolog description regex")
});
