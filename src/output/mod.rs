//! Tree line formatting
//!
//! One line per entry: a continuation prefix inherited from ancestor levels,
//! a branch glyph chosen by the last-sibling flag, the entry name, and (for
//! files) a byte-size annotation. Lines are written through a
//! `termcolor::WriteColor` sink so the same renderer serves plain buffers
//! and colored terminals.

pub mod render;

// Re-export the pure helpers
pub use render::{connector, continuation, size_annotation};
