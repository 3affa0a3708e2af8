use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "vstudio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the pattern catalog as JSON.
    Patterns,
    /// Print tile geometry for a pattern and a number of synthetic tiles.
    Preview(PreviewArgs),
    /// Replay a command script and write the final studio snapshot.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Pattern id (0..=6).
    #[arg(long)]
    pattern: u8,

    /// Number of tiles to place.
    #[arg(long)]
    tiles: usize,

    /// Canvas width.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Canvas height.
    #[arg(long, default_value_t = 1080)]
    height: u32,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input command script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output snapshot JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Patterns => cmd_patterns(),
        Command::Preview(args) => cmd_preview(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn cmd_patterns() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&vstudio::PATTERNS).context("encode catalog")?;
    println!("{json}");
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let canvas = vstudio::Canvas::new(args.width, args.height)?;
    let pattern = vstudio::PatternKind::from_id(args.pattern)?;
    let tiles = vstudio::compute_geometry(pattern, canvas, args.tiles);

    let json = serde_json::json!({
        "pattern": pattern.descriptor(),
        "canvas": canvas,
        "tiles": tiles,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&json).context("encode preview")?
    );
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let script = vstudio::CommandScript::from_path(&args.in_path)
        .with_context(|| format!("load script '{}'", args.in_path.display()))?;
    let report = script.run()?;
    let json = report.studio.snapshot().to_json_pretty()?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!(
                "wrote {} ({} applied, {} no-op)",
                out.display(),
                report.applied,
                report.noops
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
