//! CLI binary for mdflat.
//!
//! A thin shim over the library crate that reads markdown from a file or
//! stdin, picks a render mode, and prints or writes the result.

use anyhow::{Context, Result};
use clap::Parser;
use mdflat::{render, render_summary, render_to_file, split_title, RenderMode};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Copy-ready plain text to stdout
  mdflat notes.md

  # PDF-markup text for a layout engine
  mdflat --mode pdf notes.md

  # Write to a file (atomic: temp file + rename)
  mdflat notes.md -o notes.txt

  # Read from stdin
  summarize recording.webm | mdflat -

  # Both renderings plus the extracted title, as JSON
  mdflat --json notes.md

  # Just the first-line title
  mdflat --title notes.md

OUTPUT MODES:
  Mode    Emphasis        Links                 Headings
  ─────   ─────────────   ───────────────────   ─────────────
  plain   UPPERCASE       text (url)            UPPERCASE
  pdf     <b>…</b> tags   text only, URL gone   case preserved

  Both modes: • bullets, numbered lists kept verbatim, `code` ticks
  stripped, > quotes passed through, 3+ blank lines collapsed to one.

ENVIRONMENT VARIABLES:
  MDFLAT_MODE     Default render mode (plain, pdf)
  MDFLAT_OUTPUT   Default output file
  RUST_LOG        Override the log filter (tracing EnvFilter syntax)
"#;

/// Flatten markdown into plain text or PDF-markup text.
#[derive(Parser, Debug)]
#[command(
    name = "mdflat",
    version,
    about = "Flatten markdown into copy-ready plain text or PDF-markup text",
    long_about = "Flatten a narrow markdown subset (headings, bold, italic, bullets, numbered \
lists, links, inline code, blockquotes) into one of two renderings: plain text with UPPERCASE \
emphasis and inline URLs, or PDF-markup text with <b> tags for a page-layout engine.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to flatten, or '-' for stdin.
    input: String,

    /// Render mode: plain or pdf.
    #[arg(short, long, env = "MDFLAT_MODE", value_enum, default_value = "plain")]
    mode: ModeArg,

    /// Write output to this file instead of stdout.
    #[arg(short, long, env = "MDFLAT_OUTPUT")]
    output: Option<PathBuf>,

    /// Output both renderings and the title as JSON instead of text.
    #[arg(long, env = "MDFLAT_JSON")]
    json: bool,

    /// Print only the extracted first-line title.
    #[arg(long)]
    title: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MDFLAT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MDFLAT_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum ModeArg {
    Plain,
    Pdf,
}

impl From<ModeArg> for RenderMode {
    fn from(v: ModeArg) -> Self {
        match v {
            ModeArg::Plain => RenderMode::Plain,
            ModeArg::Pdf => RenderMode::Pdf,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Read input ───────────────────────────────────────────────────────
    let markdown = if cli.input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read markdown from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&cli.input)
            .with_context(|| format!("Failed to read markdown file '{}'", cli.input))?
    };

    let mode: RenderMode = cli.mode.into();

    // ── Title-only mode ──────────────────────────────────────────────────
    if cli.title {
        let (title, _body) = split_title(&render(&markdown, mode));
        println!("{title}");
        return Ok(());
    }

    // ── JSON mode: both renderings at once ───────────────────────────────
    if cli.json {
        let summary = render_summary(&markdown);
        let json =
            serde_json::to_string_pretty(&summary).context("Failed to serialise output")?;
        println!("{json}");
        return Ok(());
    }

    // ── Single-mode rendering ────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        render_to_file(&markdown, mode, output_path)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        if !cli.quiet {
            eprintln!("{mode} rendering written to {}", output_path.display());
        }
    } else {
        let text = render(&markdown, mode);
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
        // The pipeline trims its output; give stdout a trailing newline.
        if !text.is_empty() {
            handle.write_all(b"\n").ok();
        }
    }

    Ok(())
}
