//! Directory tree walking logic
//!
//! Walking a tree splits into three pieces, applied per directory level:
//!
//! - `entry`: reads one level's entries into immutable snapshots
//! - `filter`: orders the snapshots and drops files when they are hidden
//! - `walker`: recurses depth-first, rendering one line per entry

mod entry;
mod filter;
mod walker;

// Re-export public types
pub use entry::{Entry, list_entries};
pub use filter::arrange_entries;
pub use walker::{TreeWalker, WalkerConfig};
