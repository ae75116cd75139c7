use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kinetext", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the render contract for one frame as JSON.
    Frame(FrameArgs),
    /// Plan every frame of an overlay and write the result as JSON.
    Plan(PlanArgs),
    /// List the effect catalog.
    Effects,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input overlay JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input overlay JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Planning chunk size in frames.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Effects => cmd_effects(),
    }
}

fn load(in_path: &PathBuf) -> anyhow::Result<kinetext::Overlay> {
    let request = kinetext::OverlayRequest::from_path(in_path)
        .with_context(|| format!("load overlay '{}'", in_path.display()))?;
    Ok(kinetext::Overlay::new(request)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let overlay = load(&args.in_path)?;
    let contract = overlay.contract_at(kinetext::FrameIndex(args.frame));
    write_json(args.out.as_ref(), &contract)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let overlay = load(&args.in_path)?;
    let threading = kinetext::PlanThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let plan = kinetext::OverlayPlan::build(&overlay, &threading)?;
    write_json(args.out.as_ref(), &plan)
}

fn cmd_effects() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for kind in kinetext::EffectKind::ALL {
        writeln!(stdout, "{}", kind.name()).context("write stdout")?;
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(out: Option<&PathBuf>, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize JSON")?;
    let Some(out) = out else {
        println!("{json}");
        return Ok(());
    };

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, json).with_context(|| format!("write json '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
