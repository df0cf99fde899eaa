//! Property-based tests for the evolog parser and message resolver
//!
//! Uses proptest to verify the parser handles arbitrary input without
//! panicking and keeps header order on well-formed input.
//! Reference: https://lib.rs/crates/proptest

use proptest::prelude::*;
use jj_evo_commit::jj::parser::parse_evolog;
use jj_evo_commit::model::{EvologEntry, FilterSpec};
use jj_evo_commit::replay::resolve_description;

// =============================================================================
// Strategy generators for realistic-ish jj evolog output
// =============================================================================

/// Generate a change_id-like string (8 lowercase letters)
fn change_id_strategy() -> impl Strategy<Value = String> {
    "[k-z]{8}".prop_map(|s| s.to_string())
}

/// Generate a commit_id-like string (8 hex chars)
fn commit_id_strategy() -> impl Strategy<Value = String> {
    "[a-f0-9]{8}".prop_map(|s| s.to_string())
}

/// Generate a timestamp in jj's default format
fn timestamp_strategy() -> impl Strategy<Value = String> {
    "20[0-9]{2}-[01][0-9]-[0-3][0-9] [0-2][0-9]:[0-5][0-9]:[0-5][0-9]"
        .prop_map(|s| s.to_string())
}

/// Generate a description line (no leading dashes)
fn description_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 :_()]{0,60}".prop_map(|s| s.to_string())
}

/// One rendered entry: header plus optional description and operation lines
///
/// Some headers are rendered the way jj shows hidden predecessors
/// (`zxmrylrz/1 ... (hidden)`).
fn entry_block_strategy() -> impl Strategy<Value = (String, String)> {
    (
        change_id_strategy(),
        commit_id_strategy(),
        timestamp_strategy(),
        prop::option::of(1u8..20),
        prop::option::of(description_strategy()),
        prop::option::of("[a-z ]{1,30}[a-z]"),
    )
        .prop_map(|(change_id, commit_id, timestamp, offset, description, operation)| {
            let mut block = match offset {
                Some(offset) => format!(
                    "○  {change_id}/{offset} user@example.com {timestamp} {commit_id} (hidden)\n"
                ),
                None => format!("○  {change_id} user@example.com {timestamp} {commit_id}\n"),
            };
            if let Some(description) = description {
                block.push_str(&format!("│  {description}\n"));
            }
            if let Some(operation) = operation {
                block.push_str(&format!("│  -- operation 0123456789ab {operation}\n"));
            }
            (commit_id, block)
        })
}

// =============================================================================
// Robustness tests: parser and resolver never panic
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Evolog parser should not panic on arbitrary input
    #[test]
    fn evolog_parser_does_not_panic(input in "\\PC*") {
        let _ = parse_evolog(&input);
    }

    /// Every parsed entry has a commit id
    #[test]
    fn parsed_entries_have_commit_ids(input in "(\\PC|\n|│|@|○){0,200}") {
        for entry in parse_evolog(&input) {
            prop_assert!(!entry.commit_id.is_empty());
        }
    }

    /// The resolver never returns an empty message
    #[test]
    fn resolver_never_empty(
        description in prop::option::of("\\PC{0,20}"),
        operation in prop::option::of("\\PC{0,20}"),
        timestamp in "\\PC{0,20}",
    ) {
        let entry = EvologEntry {
            commit_id: "2b4dbc61".to_string(),
            timestamp,
            description,
            operation,
            ..Default::default()
        };
        prop_assert!(!resolve_description(&entry).is_empty());
    }
}

// =============================================================================
// Structured input tests: well-formed logs parse exactly
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// K headers give K entries in header order
    #[test]
    fn header_count_and_order_preserved(
        blocks in prop::collection::vec(entry_block_strategy(), 0..12),
    ) {
        let input: String = blocks.iter().map(|(_, block)| block.as_str()).collect();
        let expected: Vec<&str> = blocks.iter().map(|(id, _)| id.as_str()).collect();

        let entries = parse_evolog(&input);
        let actual: Vec<&str> = entries.iter().map(|e| e.commit_id.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Picking one commit id selects exactly that entry, whatever is skipped
    #[test]
    fn pick_selects_single_entry(
        blocks in prop::collection::vec(entry_block_strategy(), 1..8),
        index in any::<prop::sample::Index>(),
        skip in "[a-f0-9,]{0,20}",
    ) {
        let input: String = blocks.iter().map(|(_, block)| block.as_str()).collect();
        let entries = parse_evolog(&input);
        let target = &entries[index.index(entries.len())];

        // Commit ids are random, so only check when the pick is unambiguous
        let matching = entries.iter().filter(|e| e.commit_id == target.commit_id).count();
        prop_assume!(matching == 1);

        let filter = FilterSpec::from_lists(Some(&skip), Some(&target.commit_id));
        let selected = filter.select(&entries);
        prop_assert_eq!(selected.len(), 1);
        prop_assert_eq!(&selected[0], target);
    }

    /// Skipping removes every skipped entry and keeps the rest in order
    #[test]
    fn skip_removes_only_skipped_entries(
        blocks in prop::collection::vec(entry_block_strategy(), 1..10),
        mask in prop::collection::vec(any::<bool>(), 10),
    ) {
        let input: String = blocks.iter().map(|(_, block)| block.as_str()).collect();
        let entries = parse_evolog(&input);

        let skipped: Vec<&str> = entries
            .iter()
            .zip(&mask)
            .filter(|(_, skip)| **skip)
            .map(|(e, _)| e.commit_id.as_str())
            .collect();
        let skip = skipped.join(", ");

        // Change ids are letters outside the hex range, so only commit ids match
        let expected: Vec<EvologEntry> = entries
            .iter()
            .filter(|e| !skipped.contains(&e.commit_id.as_str()))
            .cloned()
            .collect();

        let filter = FilterSpec::from_lists(Some(&skip), None);
        prop_assert_eq!(filter.select(&entries), expected);
    }
}
