use anyhow::Result;
use clap::Parser;
use resfix::{ResfixConfig, run};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fix stale res:// references and pack the result into a zip", long_about = None)]
struct Args {
    /// Project root to scan (defaults to the current directory)
    path: Option<PathBuf>,

    /// Output zip filename
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print every change per file
    #[arg(short, long)]
    verbose: bool,

    /// Add ignore pattern (glob)
    #[arg(long)]
    ignore: Vec<String>,

    /// Skip files matched by .gitignore and hidden files
    #[arg(long)]
    respect_gitignore: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = ResfixConfig::load_from_file().unwrap_or_default();

    // 2. Override with CLI args
    if let Some(p) = args.path {
        config.path = p;
    }
    if let Some(o) = args.out {
        config.output = o;
    }
    if args.verbose {
        config.verbose = true;
    }
    if !args.ignore.is_empty() {
        // CLI ignores ADD to config ignores
        config.ignore_patterns.extend(args.ignore);
    }
    if args.respect_gitignore {
        config.respect_gitignore = true;
    }

    run(config)?;

    Ok(())
}
