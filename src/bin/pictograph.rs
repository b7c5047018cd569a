use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pictograph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Position a single beat and print it as JSON.
    Place(PlaceArgs),
    /// Position a JSON array of beats in parallel.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Default placement table (bundled table when omitted).
    #[arg(long)]
    defaults: Option<PathBuf>,

    /// Special placement table (bundled table when omitted).
    #[arg(long)]
    special: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Input beat JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,

    /// Include the stage-by-stage arrow breakdown.
    #[arg(long, default_value_t = false)]
    explain: bool,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Input JSON array of beats.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Place(args) => cmd_place(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let beat = pictograph::Beat::from_path(&args.in_path)?;
    let engine = load_engine(&args.config);
    let ctx = pictograph::PictographContext::from(beat);
    let positioned = engine.position_pictograph(&ctx);

    let out = if args.explain {
        serde_json::json!({
            "pictograph": positioned,
            "explain": [
                engine.explain_arrow(ctx.arrow(pictograph::Role::Blue), &ctx),
                engine.explain_arrow(ctx.arrow(pictograph::Role::Red), &ctx),
            ],
        })
    } else {
        serde_json::to_value(&positioned).context("serialize pictograph")?
    };
    print_json(&out)
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let beats = pictograph::Beat::many_from_path(&args.in_path)?;
    let engine = load_engine(&args.config);
    let contexts: Vec<_> = beats
        .into_iter()
        .map(pictograph::PictographContext::from)
        .collect();

    let pool = build_thread_pool(args.threads)?;
    let positioned = pool.install(|| engine.position_many(&contexts));
    eprintln!("positioned {} beats", positioned.len());
    print_json(&positioned)
}

fn load_engine(args: &ConfigArgs) -> pictograph::PositioningEngine {
    let load = pictograph::PlacementConfig::load(&pictograph::ConfigSources {
        defaults: args.defaults.clone(),
        special: args.special.clone(),
    });
    for issue in &load.issues {
        eprintln!("warning: {issue}");
    }
    pictograph::PositioningEngine::new(load.config)
}

fn build_thread_pool(threads: Option<usize>) -> anyhow::Result<rayon::ThreadPool> {
    if threads == Some(0) {
        anyhow::bail!("'--threads' must be >= 1 when set");
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().context("build rayon thread pool")
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    println!("{text}");
    Ok(())
}
