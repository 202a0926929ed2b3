//! TreeWalker - depth-first renderer for a directory subtree

use std::io;
use std::path::Path;

use termcolor::{NoColor, WriteColor};

use crate::output::render::{continuation, write_dir_line, write_file_line};

use super::entry::list_entries;
use super::filter::arrange_entries;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Include regular files (with byte-size annotations) in the output.
    /// When off, only directories are rendered.
    pub show_files: bool,
}

/// Depth-first tree walker.
///
/// Walks strictly sequentially, one blocking directory read per level, and
/// renders every entry into the caller's sink. The root's own name is never
/// rendered; output starts with the root's children. The first I/O error
/// anywhere in the subtree aborts the walk and propagates unchanged, so a
/// failed render produces no output at all when the sink is a buffer the
/// caller discards.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Render the subtree rooted at `root` into `out`.
    pub fn render_into<W: WriteColor>(&self, root: &Path, out: &mut W) -> io::Result<()> {
        self.render_level(root, "", out)
    }

    /// Render the subtree rooted at `root` as plain text.
    pub fn render(&self, root: &Path) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.render_into(root, &mut out)?;
        let bytes = out.into_inner();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn render_level<W: WriteColor>(
        &self,
        path: &Path,
        prefix: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let entries = arrange_entries(list_entries(path)?, self.config.show_files);
        let count = entries.len();

        for (index, entry) in entries.into_iter().enumerate() {
            let is_last = index + 1 == count;

            if entry.is_dir {
                write_dir_line(out, prefix, is_last, &entry.name)?;
                // Each descent gets its own extended copy of the prefix.
                let child_prefix = format!("{}{}", prefix, continuation(is_last));
                self.render_level(&entry.path, &child_prefix, out)?;
            } else {
                write_file_line(out, prefix, is_last, &entry.name, entry.size)?;
            }
        }

        Ok(())
    }
}
