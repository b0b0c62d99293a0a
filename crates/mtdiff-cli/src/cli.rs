use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mtdiff_types::BlockPos;

#[derive(Parser)]
#[command(
    name = "mtdiff",
    about = "Report every node whose type changed between two Minetest map databases",
    version,
)]
pub struct Cli {
    /// Map database of the old snapshot (map.sqlite).
    pub old: PathBuf,

    /// Map database of the new snapshot.
    pub new: PathBuf,

    /// Block position to flood-fill from, as X,Y,Z.
    #[arg(long, default_value = "0,0,0", value_parser = parse_block_pos)]
    pub origin: BlockPos,

    /// Output format for change records.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_block_pos(s: &str) -> Result<BlockPos, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let &[x, y, z] = parts.as_slice() else {
        return Err(format!("expected X,Y,Z, got {s:?}"));
    };
    let coord = |v: &str| {
        v.parse::<i16>()
            .map_err(|e| format!("bad block coordinate {v:?}: {e}"))
    };
    Ok(BlockPos::new(coord(x)?, coord(y)?, coord(z)?))
}
