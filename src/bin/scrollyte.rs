use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollyte", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a scene JSON file.
    Validate(ValidateArgs),
    /// Evaluate a region over a progress grid and print the item frames.
    Sweep(SweepArgs),
    /// Advance a marquee row over fixed ticks and print its offsets.
    Tick(TickArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input scene JSON. Omit to use the built-in portfolio scene.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Region id to evaluate.
    #[arg(long)]
    region: String,

    /// Number of progress steps (inclusive endpoints).
    #[arg(long, default_value_t = 10)]
    steps: usize,

    /// Emit one JSON object per progress step instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct TickArgs {
    /// Input scene JSON. Omit to use the built-in portfolio scene.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Marquee row id to advance.
    #[arg(long)]
    row: String,

    /// Tick duration in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Number of ticks.
    #[arg(long, default_value_t = 60)]
    ticks: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Tick(args) => cmd_tick(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<scrollyte::SceneDef> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: scrollyte::SceneDef =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn load_scene(in_path: Option<&Path>) -> anyhow::Result<scrollyte::SceneDef> {
    let scene = match in_path {
        Some(path) => read_scene_json(path)?,
        None => scrollyte::portfolio()?,
    };
    scene.validate()?;
    Ok(scene)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    scene.validate()?;
    println!(
        "scene '{}' ok: {} regions, {} marquees, {} gates",
        scene.name,
        scene.regions.len(),
        scene.marquees.len(),
        scene.gates.len()
    );
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("--steps must be at least 1");
    }
    let scene = load_scene(args.in_path.as_deref())?;
    let region = scene
        .region(&args.region)
        .with_context(|| format!("no region '{}' in scene '{}'", args.region, scene.name))?;
    let program = scrollyte::RegionProgram::new(region)?;

    for step in 0..=args.steps {
        let progress = scrollyte::Progress::new(step as f64 / args.steps as f64);
        let frames = scrollyte::evaluate_region(&program, progress);
        if args.json {
            let line = serde_json::json!({
                "progress": progress.value(),
                "items": frames,
            });
            println!("{line}");
        } else {
            print!("p={:>5.3}", progress.value());
            for frame in &frames {
                print!(
                    "  {}[o={:.3} s={:.3}]",
                    frame.item_id,
                    frame.channels.opacity(),
                    frame.channels.scale()
                );
            }
            println!();
        }
    }
    Ok(())
}

fn cmd_tick(args: TickArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.in_path.as_deref())?;
    let row = scene
        .marquee(&args.row)
        .with_context(|| format!("no marquee '{}' in scene '{}'", args.row, scene.name))?;
    let mut driver = scrollyte::MarqueeDriver::new(row.config)?;

    for tick in 1..=args.ticks {
        let offset = driver.tick(args.dt);
        match driver.phase() {
            Some(phase) => println!("t={:>4} offset={offset:.4} phase={phase:.4}", tick),
            None => println!("t={:>4} offset={offset:.4}", tick),
        }
    }
    Ok(())
}
