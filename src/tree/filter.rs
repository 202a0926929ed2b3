//! Ordering and file filtering for one directory level

use super::entry::Entry;

/// Arrange a level's entries for rendering.
///
/// When `show_files` is off, non-directories are dropped before anything
/// else, so they never influence which sibling counts as last. The remaining
/// entries are sorted by name, ascending and bytewise. The sort is stable:
/// tied names (case-folded duplicates on case-insensitive filesystems) keep
/// their listing order, so repeated runs stay reproducible.
///
/// Pure function: the same entries and flag always yield the same order.
pub fn arrange_entries(mut entries: Vec<Entry>, show_files: bool) -> Vec<Entry> {
    if !show_files {
        entries.retain(|entry| entry.is_dir);
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
