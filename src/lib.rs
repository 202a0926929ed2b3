//! Sprig - renders a directory as an indented tree with branch glyphs

pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{connector, continuation, size_annotation};
pub use tree::{Entry, TreeWalker, WalkerConfig, arrange_entries, list_entries};
