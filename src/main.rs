use std::path::PathBuf;

use clap::Parser;
use tracing::info;

mod block;
mod consts;
mod error;
mod extract;
mod render;

use error::{Error, Result};
use render::RenderConfig;

/// Builds a C++ header listing every Unicode block with its first and last
/// code points, from a UCD XML export such as
/// https://www.unicode.org/Public/9.0.0/ucdxml/ for 9.0.0.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Input UCD XML file to build the block header from.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Directory the generated header is written into.
    #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Also build a per-block table of precomputed block sizes.
    #[arg(short = 'b', long = "blocksize")]
    blocksize: bool,

    /// Qualify the output filename with the UCD version
    /// (unicode_blocks_<version>.hpp instead of unicode_blocks.h).
    #[arg(long)]
    versioned: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let input = cli.file.ok_or_else(|| {
        Error::Config("no input file given (use -f <path>; --help for usage)".to_owned())
    })?;

    let raw = std::fs::read(&input)?;
    let (version, blocks) = extract::extract_blocks(&raw)?;
    info!(version = %version, blocks = blocks.len(), "parsed UCD document");

    let config = RenderConfig {
        blocksize_table: cli.blocksize,
        versioned_filename: cli.versioned,
        ..RenderConfig::default()
    };
    let header = render::render_header(&version, &blocks, &config);
    let path = render::write_header(&cli.out_dir, &version, &header, &config)?;
    info!(path = %path.display(), "wrote block header");

    Ok(())
}
