//! Headless host: reads one JSON request per stdin line, applies it to a
//! `GridComposer`, and prints one JSON response per line. See `gridshot::host`
//! for the request format.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gridshot::host::handle_line;
use gridshot::{ComposerConfig, GridComposer};

#[derive(Parser, Debug)]
#[command(name = "gridshot", version, about = "Compose a titled 10x5 image grid into a PNG")]
struct Args {
    /// Directory composed PNGs are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Title used when a compose request has an empty title
    #[arg(long)]
    placeholder: Option<String>,

    /// Row height in pixels
    #[arg(long)]
    target_height: Option<u32>,

    /// Title band height in pixels
    #[arg(long)]
    title_height: Option<u32>,
}

impl Args {
    fn config(&self) -> ComposerConfig {
        let mut cfg = ComposerConfig::default();
        if let Some(p) = &self.placeholder {
            cfg.placeholder_title = p.clone();
        }
        if let Some(h) = self.target_height {
            cfg.target_height = h;
        }
        if let Some(h) = self.title_height {
            cfg.title_height = h;
        }
        cfg
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let mut composer = GridComposer::new(args.config())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(&mut composer, &line, &args.out_dir).await;
        writeln!(out, "{}", serde_json::to_string(&response)?)?;
        out.flush()?;
    }
    Ok(())
}
