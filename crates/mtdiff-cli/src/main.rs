use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use mtdiff_store::MapDatabase;
use mtdiff_walk::{DiffSink, DiffWalker, JsonSink, TextSink};

mod cli;

use cli::{Cli, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diff records own stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let old = MapDatabase::open(&cli.old)
        .with_context(|| format!("opening old snapshot {}", cli.old.display()))?;
    let new = MapDatabase::open(&cli.new)
        .with_context(|| format!("opening new snapshot {}", cli.new.display()))?;

    let out = BufWriter::new(io::stdout().lock());
    let mut sink: Box<dyn DiffSink> = match cli.format {
        OutputFormat::Text => Box::new(TextSink::new(out)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
    };

    let mut walker = DiffWalker::new(&old, &new);
    walker.run(cli.origin, sink.as_mut())?;
    sink.flush().context("flushing diff records")?;

    Ok(())
}
