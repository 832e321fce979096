//! Plans a shortest collision-free path from the three input files.
//!
//! ```text
//! clearpath robot.txt obstacles.txt query.txt
//! clearpath robot.txt obstacles.txt query.txt --footprint circular --segments 24
//! clearpath robot.txt obstacles.txt query.txt --preview
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use clearpath::operations::Footprint;
use clearpath::{io, Planner, PlannerConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FootprintArg {
    Rhombus,
    Circular,
}

#[derive(Parser, Debug)]
#[command(name = "clearpath")]
#[command(about = "Shortest path for a round robot among polygonal obstacles")]
struct Args {
    /// Robot file: `x,y r` (start position and clearance radius)
    robot: PathBuf,

    /// Obstacle file: one polygon per line, `x,y` vertices
    obstacles: PathBuf,

    /// Query file: `x,y` destination
    query: PathBuf,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Robot footprint used for obstacle inflation
    #[arg(long, value_enum)]
    footprint: Option<FootprintArg>,

    /// Number of sides for the circular footprint
    #[arg(long, default_value_t = 16)]
    segments: u32,

    /// Only inflate obstacles and build the obstacle visibility graph
    #[arg(long)]
    preview: bool,
}

fn run(args: &Args) -> clearpath::Result<()> {
    let mut config = match &args.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    match args.footprint {
        Some(FootprintArg::Rhombus) => config.footprint = Footprint::Rhombus,
        Some(FootprintArg::Circular) => {
            config.footprint = Footprint::Circular {
                segments: args.segments,
            };
        }
        None => {}
    }

    // All files are read before any geometry runs.
    let robot = io::read_robot(&args.robot)?;
    let obstacles = io::read_obstacles(&args.obstacles)?;
    let destination = io::read_query(&args.query)?;

    let planner = Planner::new(config);

    if args.preview {
        let preview = planner.preview(&obstacles, robot.radius)?;
        println!(
            "{} inflated obstacles, {} visibility edges",
            preview.inflated.len(),
            preview.edges.len()
        );
        return Ok(());
    }

    let result = planner.plan(&obstacles, robot.position, robot.radius, destination)?;
    println!("visibility edges: {}", result.edges.len());
    println!("path:");
    for p in &result.path.points {
        println!("  {},{}", p.x, p.y);
    }
    println!("cost: {}", result.path.cost);
    Ok(())
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for clearpath.
    // Override with RUST_LOG (e.g. RUST_LOG=clearpath=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("clearpath=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
