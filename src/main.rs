//! CLI entry point for sprig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use termcolor::{BufferWriter, ColorChoice};

use sprig::{TreeWalker, WalkerConfig};

/// Determine whether to use color output based on the environment.
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    // Respect FORCE_COLOR environment variable
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    // Respect TERM=dumb
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(about = "Render a directory as an indented tree")]
#[command(version)]
struct Args {
    /// Root directory to render
    path: PathBuf,

    /// The literal `-f` includes regular files with byte sizes;
    /// any other value keeps the directories-only view
    #[arg(value_name = "-f", allow_hyphen_values = true)]
    files_flag: Option<String>,
}

fn main() {
    let args = Args::parse();
    let show_files = args.files_flag.as_deref() == Some("-f");

    let walker = TreeWalker::new(WalkerConfig { show_files });

    let choice = if should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    // The whole tree accumulates in memory; the buffer is printed once on
    // success and dropped on error, so a failed render emits nothing.
    let writer = BufferWriter::stdout(choice);
    let mut buffer = writer.buffer();

    if let Err(e) = walker.render_into(&args.path, &mut buffer) {
        eprintln!("sprig: cannot render '{}': {}", args.path.display(), e);
        process::exit(1);
    }

    if let Err(e) = writer.print(&buffer) {
        eprintln!("sprig: error writing output: {}", e);
        process::exit(1);
    }
}
