//! CLI for fetching an arXiv article's metadata and printing a BibTeX
//! entry.
//!
//! The rendered entry is the only thing written to stdout, so the output
//! can be piped straight into a `.bib` file; everything else (logging, the
//! clipboard confirmation, errors) goes to stderr.

use arxcite::{render, ArxivClient, Style};
use clap::{builder::ArgAction, Parser};
use console::{style, Emoji};
use errors::ArxciteCliError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod errors;

static CLIPBOARD: Emoji<'_, '_> = Emoji("📋 ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "");

#[derive(Parser)]
#[command(
  author,
  version,
  about = "Fetch an arXiv article's metadata and print a BibTeX entry",
  after_help = "For older articles where the full URL includes the subfield, include the \
                subfield as-is:\nhttps://arxiv.org/abs/hep-th/0605198 -> arxcite hep-th/0605198"
)]
struct Cli {
  /// arXiv article identifier, e.g. 1312.7188 or hep-th/0605198
  identifier: String,

  /// Use the SPIRES citation style (eprint field instead of a \url note)
  #[arg(long = "SPIRES", alias = "spires")]
  spires: bool,

  /// Copy the rendered entry to the system clipboard
  #[arg(long)]
  copy: bool,

  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,
}

/// Setup logging with the specified verbosity level.
///
/// Logs go to stderr: stdout is reserved for the BibTeX entry itself.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Copies the rendered entry to the system clipboard.
///
/// Best-effort: on headless systems or platforms without a clipboard this
/// fails, and the caller downgrades the failure to a warning. Note that on
/// X11 the clipboard contents are owned by the process and may vanish when
/// it exits unless a clipboard manager is running.
fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
  let mut clipboard = arboard::Clipboard::new()?;
  clipboard.set_text(text)
}

#[tokio::main]
async fn main() -> Result<(), ArxciteCliError> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let citation = ArxivClient::new().fetch_citation(&cli.identifier).await?;
  debug!("Citation record: {:?}", citation);

  let style_choice = if cli.spires { Style::Spires } else { Style::Default };
  let entry = render(&citation, &cli.identifier, style_choice);

  println!("{entry}");

  if cli.copy {
    match copy_to_clipboard(&entry) {
      Ok(()) => {
        eprintln!("{} {}", CLIPBOARD, style("Copied entry to clipboard").green());
      },
      Err(e) => {
        eprintln!(
          "{} {}",
          style(WARNING).yellow(),
          style(format!("Could not copy to clipboard: {e}")).yellow()
        );
      },
    }
  }

  Ok(())
}
