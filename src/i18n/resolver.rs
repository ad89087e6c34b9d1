// SPDX-License-Identifier: MPL-2.0
//! Dotted-key lookup over a translation tree.

use crate::i18n::table::{Node, Table};

/// Resolves a dot-delimited key against a translation tree.
///
/// Walks the tree one segment at a time. Any miss — an unknown segment, a
/// walk through a leaf, or an empty key — returns the key unchanged, which
/// doubles as the visible "untranslated" marker in rendered text. A key that
/// addresses a branch rather than a leaf returns the subtree rendered as
/// JSON rather than failing.
///
/// Pure: identical `(key, table)` inputs produce identical output and the
/// table is never mutated.
#[must_use]
pub fn resolve(key: &str, table: &Table) -> String {
    let mut node: Option<&Node> = None;

    for segment in key.split('.') {
        let child = match node {
            None => table.get(segment),
            Some(Node::Branch(children)) => children.get(segment),
            // Walked past a leaf: the key addresses below a string.
            Some(Node::Leaf(_)) => return key.to_string(),
        };

        match child {
            Some(next) => node = Some(next),
            None => return key.to_string(),
        }
    }

    match node {
        Some(Node::Leaf(text)) => text.clone(),
        Some(branch @ Node::Branch(_)) => {
            serde_json::to_string(branch).unwrap_or_else(|_| key.to_string())
        }
        // `split` always yields at least one segment.
        None => key.to_string(),
    }
}
