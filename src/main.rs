use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use design_tokens_tailwind::{run, Config};

/// Generates a Tailwind v4 theme stylesheet from design tokens.
#[derive(Debug, Parser)]
#[command(name = "design-tokens-tailwind", version)]
struct Args {
    /// JSON config with `tokens`, `outDir` and `plugin` options.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Token documents to read, in merge order. Replaces the configured list.
    #[arg(short, long)]
    tokens: Vec<PathBuf>,

    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Name of the generated stylesheet.
    #[arg(short, long)]
    file_name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if !args.tokens.is_empty() {
        config.tokens = args.tokens;
    }
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }
    if let Some(file_name) = args.file_name {
        config.plugin.file_name = file_name;
    }

    let written = run(&config).context("generating theme")?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
