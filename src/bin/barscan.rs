//! Command-line interface: batch scanning, single-image detection, and a
//! local harness for the request handler.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use barscan::Engine;
use barscan::annotate::Annotator;
use barscan::batch;
use barscan::handler::{Handler, RequestContext};
use barscan::storage::FsObjectStore;

#[derive(Parser)]
#[command(name = "barscan", about = "Barcode detection for still images", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan every image in a directory and write annotated copies
    Batch {
        /// Directory holding the images
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Detect the most likely barcode in a single image
    Detect {
        /// Image file to scan
        #[arg(long)]
        image: PathBuf,
    },
    /// Feed a JSON event file through the request handler
    Handle {
        /// Path to the event JSON file
        #[arg(long)]
        event: PathBuf,
        /// Root directory backing object-store references
        #[arg(long, default_value = ".")]
        store_root: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Batch { dir } => batch_cmd(&dir),
        Commands::Detect { image } => detect_cmd(&image),
        Commands::Handle { event, store_root } => handle_cmd(&event, &store_root),
    }
}

fn batch_cmd(dir: &Path) -> anyhow::Result<()> {
    let engine = Engine::new();
    let annotator = Annotator::with_system_font();
    batch::run_directory(&engine, &annotator, dir)
        .with_context(|| format!("scanning directory {}", dir.display()))?;
    Ok(())
}

fn detect_cmd(image: &Path) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(image).with_context(|| format!("reading {}", image.display()))?;
    match barscan::detect(&bytes)? {
        Some(detection) => {
            println!("value: {}", detection.value);
            println!("type: {}", detection.symbology);
            println!("confidence: {:.2}", detection.confidence);
        }
        None => println!("no barcode found"),
    }
    Ok(())
}

fn handle_cmd(event_path: &Path, store_root: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(event_path)
        .with_context(|| format!("reading {}", event_path.display()))?;
    let event: serde_json::Value =
        serde_json::from_str(&raw).context("parsing event JSON")?;

    let handler = Handler::new(Engine::new(), Box::new(FsObjectStore::new(store_root)));
    let ctx = RequestContext::new(Uuid::new_v4().to_string());
    let response = handler.handle(&event, &ctx);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
