// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::io::{self, BufRead, Read as _, Write};
use std::path::{Path, PathBuf};

use crate::config::{Settings, load_settings, load_settings_from_file};
use crate::core::scanner::analyze_directory;
use crate::core::session::Session;
use crate::models::{DisclosurePolicy, Report, WordMode};
use crate::utils::{render_report, write_top_files};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File to analyze (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Directory to scan; reports every file ranked by word count
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Number of files to show in directory mode
    #[arg(short = 't', long, default_value = "10")]
    pub top: usize,

    /// Directories to exclude in directory mode (comma-separated)
    #[arg(short, long, default_value = ".git")]
    pub exclude: String,

    /// Reading speed used for the reading-time estimate
    #[arg(short, long)]
    pub words_per_minute: Option<usize>,

    /// How words are counted
    #[arg(short = 'm', long, value_enum)]
    pub word_mode: Option<WordMode>,

    /// Character limit (e.g., "280"); enables the limit warning
    #[arg(short, long)]
    pub limit: Option<String>,

    /// Show every letter in the density list
    #[arg(short, long)]
    pub all: bool,

    /// Print reports as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Read lines from stdin and report after each one
    #[arg(short, long)]
    pub interactive: bool,

    /// Whether the density list collapses after each edit in interactive mode
    #[arg(long, value_enum)]
    pub disclosure: Option<DisclosurePolicy>,

    /// Settings file to use instead of the nearest .textlens.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Loads settings from `--config` or the nearest config file, then applies
/// command-line overrides.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => load_settings_from_file(path)?,
        None => load_settings(&env::current_dir()?)?,
    };

    if let Some(words_per_minute) = args.words_per_minute {
        settings.words_per_minute = words_per_minute;
    }
    if let Some(word_mode) = args.word_mode {
        settings.word_mode = word_mode;
    }
    if let Some(disclosure) = args.disclosure {
        settings.disclosure = disclosure;
    }
    if let Some(limit) = &args.limit {
        settings.limit.enabled = true;
        settings.limit.value.clone_from(limit);
    }

    Ok(settings)
}

pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Runs the command, writing every report to `out`.
///
/// # Errors
///
/// Returns an error if settings cannot be loaded, input cannot be read or
/// output cannot be written.
pub fn run_with_output<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let settings = resolve_settings(&args)?;
    let options = settings.engine_options()?;

    if let Some(dir) = &args.directory {
        let exclude_dirs: Vec<&str> = args.exclude.split(',').collect();
        let files = analyze_directory(dir, &exclude_dirs, &options)
            .with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
        if args.json {
            let top: Vec<_> = files.iter().take(args.top).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&top)?)?;
        } else {
            write_top_files(out, &files, args.top)?;
        }
        out.flush()?;
        return Ok(());
    }

    let mut session = Session::new(options, settings.disclosure, settings.limit_config());

    if args.interactive {
        let stdin = io::stdin();
        return run_interactive(&mut session, stdin.lock(), out, args.json);
    }

    let text = read_input(args.file.as_deref())?;
    let mut report = session.set_text(text);
    if args.all && report.overflow {
        report = session.toggle_disclosure();
    }
    write_report(out, &report, args.json)
}

/// Reads the text to analyze from `path`, or stdin for `None` and `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid UTF-8.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Line-driven live session: every line is appended to the buffer and
/// followed by a fresh report. Lines are joined with `\n`, so blank lines
/// count as characters too.
///
/// `:more` toggles the density list. `:clear` empties the buffer and `:quit`
/// stops reading.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    json: bool,
) -> Result<()> {
    let mut fresh = session.text().is_empty();
    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        let report = match line.trim() {
            ":quit" => break,
            ":more" => session.toggle_disclosure(),
            ":clear" => {
                fresh = true;
                session.clear()
            }
            _ if fresh => {
                fresh = false;
                session.set_text(line.as_str())
            }
            _ => session.append_text(&format!("\n{line}")),
        };
        write_report(out, &report, json)?;
    }
    Ok(())
}

fn write_report<W: Write>(out: &mut W, report: &Report, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_report(report))?;
    }
    out.flush()?;
    Ok(())
}
