use std::fs;
use std::path::{Path, PathBuf};

use aac_composer::{check_selection, render, validate, Board, BoardConfig, IssueKind};
use aac_protocol::{Catalog, ItemKind, VocabularyItem};
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Compiles vocabulary catalogs and renders board sentences")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a JSON catalog and write it as an rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Write the built-in catalog as JSON
    Export {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// List the tiles of one kind visible at a level
    List {
        kind: ItemKind,

        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Defaults to AAC_LEVEL, then 1
        #[arg(short, long)]
        level: Option<u8>,
    },
    /// Render the sentence for a list of item ids, in tap order
    Say {
        #[arg(required = true)]
        ids: Vec<String>,

        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// JSON array of items replacing catalog entries with the same id
        #[arg(short, long, value_name = "FILE")]
        overrides: Option<PathBuf>,

        /// Print a JSON report instead of the bare sentence
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SayReport {
    text: String,
    complete: bool,
    auto_speak: bool,
    issues: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BoardConfig::from_env();

    match cli.command {
        Command::Compile { input, output } => compile(&input, &output),
        Command::Export { output } => export(&output),
        Command::List { kind, catalog, level } => {
            let config = match level {
                Some(level) => config.with_level(level),
                None => config,
            };
            let board = Board::new(load_or_default(catalog.as_deref())?);
            for item in board.visible(kind, config.level) {
                println!("{:<14} {}", item.id(), item.label());
            }
            Ok(())
        }
        Command::Say { ids, catalog, overrides, json } => {
            let mut board = Board::new(load_or_default(catalog.as_deref())?);
            if let Some(path) = overrides {
                for item in load_overrides(&path)? {
                    board.set_override(item)?;
                }
            }

            let items = board.resolve(&ids)?;
            let rendered = render(&items);
            let issues = check_selection(&items);

            if json {
                let report = SayReport {
                    auto_speak: rendered.should_auto_speak(),
                    text: rendered.text,
                    complete: rendered.complete,
                    issues: issues.into_iter().map(|i| i.details).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", rendered.text);
                let dropped = issues.iter().filter(|i| matches!(i.kind, IssueKind::RepeatedRole(_))).count();
                if dropped > 0 {
                    tracing::info!(dropped, "some taps were not used in the sentence");
                }
            }
            Ok(())
        }
    }
}

fn compile(input: &Path, output: &Path) -> anyhow::Result<()> {
    tracing::info!(input = %input.display(), "reading catalog JSON");
    let catalog = read_json_catalog(input)?;

    validate(&catalog).with_context(|| format!("catalog {} failed validation", input.display()))?;
    tracing::info!(version = catalog.version, items = catalog.items.len(), "compiling catalog");

    let bytes = encode_archive(&catalog)?;
    fs::write(output, bytes.as_slice())
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(output = %output.display(), bytes = bytes.len(), "archive written");
    Ok(())
}

fn export(output: &Path) -> anyhow::Result<()> {
    let catalog = aac_composer::default_catalog();
    let json = serde_json::to_string_pretty(&catalog)?;
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(output = %output.display(), items = catalog.items.len(), "default catalog exported");
    Ok(())
}

fn read_json_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let data = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("{} is not a valid catalog", path.display()))
}

fn load_overrides(path: &Path) -> anyhow::Result<Vec<VocabularyItem>> {
    let data = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("{} is not a list of items", path.display()))
}

/// `.json` files are parsed, anything else is treated as a compiled archive.
fn load_or_default(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let Some(path) = path else {
        return Ok(aac_composer::default_catalog());
    };

    let catalog = if path.extension().map_or(false, |ext| ext == "json") {
        read_json_catalog(path)?
    } else {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        decode_archive(&bytes).with_context(|| format!("{} is not a catalog archive", path.display()))?
    };

    validate(&catalog)?;
    Ok(catalog)
}

fn encode_archive(catalog: &Catalog) -> anyhow::Result<rkyv::AlignedVec> {
    rkyv::to_bytes::<_, 1024>(catalog).map_err(|e| anyhow!("failed to serialize catalog: {:?}", e))
}

fn decode_archive(bytes: &[u8]) -> anyhow::Result<Catalog> {
    // Archives must be read from aligned memory
    let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    rkyv::from_bytes::<Catalog>(&aligned).map_err(|e| anyhow!("invalid archive: {:?}", e))
}
