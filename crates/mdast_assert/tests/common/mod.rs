//! Shared helpers for mdast_assert integration tests.

#![allow(dead_code)]

use mdast_assert::AssertionError;
use serde_json::Value;

/// Asserts `tree` as a standalone tree and returns the failure.
pub fn failure(tree: Value) -> AssertionError {
    match mdast_assert::assert(&tree, None) {
        Ok(()) => panic!("expected {} to be rejected", tree),
        Err(error) => error,
    }
}

/// Asserts `tree` as a standalone tree and returns the rendered failure.
pub fn message(tree: Value) -> String {
    failure(tree).to_string()
}

/// Asserts that `tree` is accepted as a standalone tree.
pub fn accepts(tree: Value) {
    if let Err(error) = mdast_assert::assert(&tree, None) {
        panic!("expected {} to be accepted, got: {}", tree, error);
    }
}
