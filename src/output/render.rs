//! Branch glyphs, continuation units, and per-entry line writers

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

/// Branch glyph for an entry with following siblings.
pub const BRANCH: &str = "├───";
/// Branch glyph for the last sibling at its level.
pub const BRANCH_LAST: &str = "└───";

/// Select the branch glyph for an entry from its last-sibling flag.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { BRANCH_LAST } else { BRANCH }
}

/// Select the continuation unit a directory hands to its children.
///
/// Children below a non-last directory keep a vertical bar in their prefix
/// column; children below the last directory inherit indentation only.
pub fn continuation(is_last: bool) -> &'static str {
    if is_last { "\t" } else { "│\t" }
}

/// Size annotation for a file line: `(<N>b)`, or `(empty)` at zero bytes.
pub fn size_annotation(size: u64) -> String {
    if size > 0 {
        format!("({size}b)")
    } else {
        "(empty)".to_string()
    }
}

/// Write one directory line: `<prefix><glyph><name>`.
///
/// Directories never carry a size annotation.
pub fn write_dir_line<W: WriteColor>(
    out: &mut W,
    prefix: &str,
    is_last: bool,
    name: &str,
) -> io::Result<()> {
    write!(out, "{}{}", prefix, connector(is_last))?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    write!(out, "{}", name)?;
    out.reset()?;
    writeln!(out)
}

/// Write one file line: `<prefix><glyph><name> <annotation>`.
pub fn write_file_line<W: WriteColor>(
    out: &mut W,
    prefix: &str,
    is_last: bool,
    name: &str,
    size: u64,
) -> io::Result<()> {
    write!(out, "{}{}{} ", prefix, connector(is_last), name)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", size_annotation(size))?;
    out.reset()?;
    writeln!(out)
}
