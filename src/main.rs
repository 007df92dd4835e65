use anyhow::{Context, Result};
use clap::Parser;
use elements_core::ElementTable;
use four_elements::{GameConfig, LogSink, Session, trace};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "four-elements", about = "Replay recorded hand detections through the Four Elements game")]
struct Cli {
    /// JSON-lines trace of detector frames and commands
    trace: PathBuf,

    /// Game configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Element table (Name\-Glyph\-R,G,B\-sound per line)
    #[arg(long)]
    elements: Option<PathBuf>,

    /// Print one JSON report per frame to stdout
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "four_elements=info,elements_core=info,elements_vision=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let table = match &cli.elements {
        Some(path) => ElementTable::load(path)?,
        None => ElementTable::default(),
    };

    let mut session = Session::new(&config, &table, LogSink::default())?;

    let file = File::open(&cli.trace)
        .with_context(|| format!("Failed to open trace: {:?}", cli.trace))?;
    let mut stdout = io::stdout().lock();
    let report: Option<&mut dyn io::Write> = if cli.report {
        Some(&mut stdout as &mut dyn io::Write)
    } else {
        None
    };

    let stats = trace::replay(&mut session, BufReader::new(file), report)?;
    session.shutdown();

    info!(
        "Replayed {} frames ({} commands, {} skipped lines); sounds played: {}, missing: {}; completed: {}, board complete at exit: {}",
        stats.frames,
        stats.commands,
        stats.failures,
        session.sink().played,
        session.sink().missing,
        stats.completed,
        session.engine().is_complete()
    );
    Ok(())
}
