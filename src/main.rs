use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use babel_symbols::{
    catalog,
    config::{DEFAULT_DICTIONARY_FILE, DEFAULT_PREVIEW_FILE, DEFAULT_WORDS_FILE},
    io_utils::{simple_cli_error, symbol_cli_error},
    run as run_pipeline, Config,
};

/// Generate the symbol dictionary and its HTML preview from a word list.
#[derive(Parser)]
#[command(name = "babel-symbols")]
struct Args {
    /// Word list to read
    #[arg(long, default_value = DEFAULT_WORDS_FILE)]
    words: PathBuf,
    /// Dictionary file to write
    #[arg(long, default_value = DEFAULT_DICTIONARY_FILE)]
    dictionary: PathBuf,
    /// Preview page to write
    #[arg(long, default_value = DEFAULT_PREVIEW_FILE)]
    preview: PathBuf,
    /// Also write one standalone SVG per word into this directory
    #[arg(long)]
    svg_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the glyph catalog as JSON and exit
    Catalog,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "babel_symbols=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(Command::Catalog) = args.command {
        let json = serde_json::to_string_pretty(&catalog::entries())
            .map_err(|e| simple_cli_error(&format!("serializing catalog failed: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    let config = Config {
        words_path: args.words,
        dictionary_path: args.dictionary,
        preview_path: args.preview,
        svg_dir: args.svg_dir,
    };
    run_pipeline(&config).map_err(|e| symbol_cli_error("Error", e))?;
    Ok(())
}
