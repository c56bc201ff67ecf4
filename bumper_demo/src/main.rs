use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bumper_sim::{MemoryRecorder, MotionMode, SceneFile, Signal, SimulationBuilder, STATUS_HINT};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "bumper_demo", version, about = "Launch a car between two bumpers and print its trajectory")]
struct Opts {
    /// Scene file (JSON with optional "simulation" and "scene" sections)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of frames to run
    #[arg(long, default_value_t = 300)]
    frames: usize,
    /// Frame rate of the polling loop
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// Override the launch velocity
    #[arg(long)]
    velocity: Option<f64>,
    /// Launch on the first frame without a launch signal
    #[arg(long)]
    auto_start: bool,
    /// Let the car translate in the plane and rotate
    #[arg(long)]
    rotation: bool,
    /// Send a reset signal on this frame, then launch again on the next
    #[arg(long)]
    reset_at: Option<usize>,
    /// Print every n-th sample in the table
    #[arg(long, default_value_t = 10)]
    every: usize,
    /// Print samples as JSON lines instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bumper_sim=info,bumper_demo=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Opts::parse()) {
        tracing::error!("{e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn load(opts: &Opts) -> Result<SceneFile> {
    let mut file = match &opts.config {
        Some(path) => SceneFile::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SceneFile::default(),
    };
    if let Some(v) = opts.velocity {
        file.scene.initial_velocity = v;
    }
    if opts.auto_start {
        file.scene.auto_start = true;
    }
    if opts.rotation {
        file.scene.mode = MotionMode::Rotation;
    }
    file.validate()?;
    Ok(file)
}

/// The signal a user would produce on `frame`.
fn script(opts: &Opts, auto_start: bool, frame: usize) -> Signal {
    match opts.reset_at {
        Some(at) if frame == at => return Signal::Reset,
        Some(at) if frame == at + 1 && !auto_start => return Signal::Launch,
        _ => {}
    }
    if frame == 0 && !auto_start {
        Signal::Launch
    } else {
        Signal::Idle
    }
}

fn run(opts: Opts) -> Result<()> {
    anyhow::ensure!(opts.fps.is_finite() && opts.fps > 0.0, "fps must be positive");
    let file = load(&opts)?;

    let mut sim = SimulationBuilder::from_file(&file)?
        .recorder(MemoryRecorder::new())
        .build()?;

    tracing::info!(
        velocity = file.scene.initial_velocity,
        mode = ?file.scene.mode,
        frames = opts.frames,
        "{STATUS_HINT}"
    );

    let frame_dt = 1.0 / opts.fps;
    for frame in 0..opts.frames {
        sim.run_frame(frame_dt, script(&opts, file.scene.auto_start, frame));
    }

    let coupled = sim.coupling().joint_fixed;
    let samples = sim.into_recorder().into_samples();

    if opts.json {
        for sample in &samples {
            println!("{}", serde_json::to_string(sample)?);
        }
        return Ok(());
    }

    println!("  t (s)  |  car x  |  car v  | bumper x | bumper v");
    println!("---------|---------|---------|----------|---------");
    for sample in samples.iter().step_by(opts.every.max(1)) {
        println!(
            "{:8.3} | {:7.3} | {:7.3} | {:8.3} | {:8.3}",
            sample.elapsed,
            sample.car.position.x,
            sample.car.velocity.x,
            sample.left_bumper_position,
            sample.left_bumper_velocity,
        );
    }
    println!("{} samples, coupled: {}", samples.len(), coupled);
    Ok(())
}
