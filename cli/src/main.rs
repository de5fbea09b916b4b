//! docx-outline CLI - Word document outline dumper
//!
//! Prints one line per non-blank paragraph of a `.docx` file: the paragraph's
//! ordinal index (zero-padded, counted over all paragraphs), its style name,
//! and its trimmed text.

use clap::Parser;
use colored::*;
use docx_outline::{find_default_document, outline, SearchOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const USAGE: &str = "Usage: docx-outline [OPTIONS] [PATH]";

/// Print the paragraph-level outline of a Word document
#[derive(Parser)]
#[command(
    name = "docx-outline",
    version,
    about = "Print the paragraph-level outline of a Word document",
    long_about = "docx-outline - Word document outline dumper.\n\n\
                  Emits one line per non-blank paragraph: a zero-padded index, the\n\
                  paragraph's style name, and its trimmed text. With no PATH, the\n\
                  current directory is searched for a matching document.\n\n\
                  A missing input (no PATH resolvable, or the path is not a file) is\n\
                  reported as a plain message with a success exit; only parse failures\n\
                  exit non-zero."
)]
struct Cli {
    /// Path to a .docx file (searched in the current directory when omitted)
    path: Option<PathBuf>,

    /// Case-insensitive substring a candidate file name must contain
    /// during the default-file search
    #[arg(long, value_name = "TEXT")]
    name_contains: Option<String>,

    /// File extension used by the default-file search
    #[arg(long, value_name = "EXT", default_value = "docx")]
    extension: String,

    /// Emit the outline as JSON instead of formatted lines
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = run(cli, &mut handle) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    run_in(cli, &cwd, out)
}

/// Resolve the input against `search_dir` and stream the outline to `out`.
///
/// The two soft conditions (nothing resolvable, path is not a file) print a
/// plain message and return Ok without touching any document; only parse
/// failures surface as errors.
fn run_in(
    cli: Cli,
    search_dir: &Path,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = match resolve_input_path(&cli, search_dir)? {
        Some(path) => path,
        None => {
            writeln!(out, "{}", USAGE)?;
            return Ok(());
        }
    };

    if !path.is_file() {
        writeln!(out, "File not found: {}", path.display())?;
        return Ok(());
    }

    let doc = docx_outline::parse_file(&path)?;

    if cli.json {
        let entries = outline(&doc);
        let json = docx_outline::outline::to_json(&entries, true)?;
        writeln!(out, "{}", json)?;
    } else {
        docx_outline::write_outline(&doc, &mut *out)?;
    }

    Ok(())
}

/// Resolve the input path: an explicit argument made absolute, or the first
/// matching document in the search directory.
fn resolve_input_path(cli: &Cli, search_dir: &Path) -> io::Result<Option<PathBuf>> {
    if let Some(ref path) = cli.path {
        return Ok(Some(std::path::absolute(path)?));
    }

    let mut options = SearchOptions::new().with_extension(&cli.extension);
    if let Some(ref needle) = cli.name_contains {
        options = options.with_name_contains(needle);
    }

    find_default_document(search_dir, &options)
}
