//! Credits roll runner (default binary).
//!
//! Rolls a scene file, or the built-in demo scene, up the terminal until the
//! last line has left the screen or `q`/`Esc`/`Ctrl-C` is pressed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use credits_roll::core::{CellFont, CellStyle, Layer, Scene};
use credits_roll::engine::{FrameClock, FrameLoop, RollConfig, RollOutcome, SceneFile};
use credits_roll::input::TerminalQuitSignal;
use credits_roll::term::{load_image, solid_background, terminal_viewport, TerminalRenderer};
use credits_roll::types::Rgb;

mod demo;

const DEFAULT_LOG_PATH: &str = "/tmp/credits-roll.log";

/// Scroll two-column credits up the terminal
#[derive(Parser, Debug)]
#[command(name = "credits-roll", version, about)]
struct Args {
    /// Scene file (JSON). Rolls a built-in demo when omitted
    #[arg(value_name = "SCENE")]
    scene: Option<PathBuf>,

    /// Target frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Units scrolled per frame (a terminal row is 20 units)
    #[arg(long)]
    step: Option<i32>,

    /// Log file (defaults to $CREDITS_ROLL_LOG_PATH, then /tmp/credits-roll.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref());

    let mut config = RollConfig::from_env();
    let (scene, background) = match &args.scene {
        Some(path) => {
            let file = SceneFile::load(path)?;
            config.step = file.step.unwrap_or(config.step);
            config.fps = file.fps.unwrap_or(config.fps);
            scene_from_file(&file)?
        }
        None => (demo::scene()?, None),
    };
    config.step = args.step.unwrap_or(config.step);
    config.fps = args.fps.unwrap_or(config.fps);
    config.validate()?;

    let (viewport, cols, rows) = terminal_viewport(config.grid)?;
    let background = solid_background(cols, rows, background.unwrap_or(Rgb::new(0, 0, 0)));
    let font = CellFont::new(config.grid);
    let mut roll = FrameLoop::new(&config, scene, font, background, viewport)?;
    let mut clock = FrameClock::new(config.fps)?;

    tracing::info!(
        scene = ?args.scene,
        cols,
        rows,
        step = config.step,
        fps = config.fps,
        "credits-roll starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = roll.run(&mut term, &mut TerminalQuitSignal::new(), &mut clock);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        RollOutcome::Completed { frames } => tracing::info!(frames, "credits finished"),
        RollOutcome::Aborted { frames } => tracing::info!(frames, "credits aborted"),
    }
    Ok(())
}

/// Resolve a scene file into a scene and an optional background color.
fn scene_from_file(file: &SceneFile) -> Result<(Scene, Option<Rgb>)> {
    let color = file.color()?;
    let mut scene = Scene::new(file.text()?, color);
    for spec in &file.images {
        let image_color = match &spec.color {
            Some(c) => c
                .resolve()
                .with_context(|| format!("invalid color for image {}", spec.path.display()))?,
            None => color,
        };
        let bitmap = load_image(&spec.path, CellStyle::fg(image_color))?;
        scene.push_layer(Layer::new(bitmap, spec.placement.into()))?;
    }
    Ok((scene, file.background()?))
}

/// Log to a file so the terminal UI is left alone. No file, no logging.
fn init_tracing(log_file: Option<&Path>) {
    let path = log_file
        .map(Path::to_path_buf)
        .or_else(|| {
            std::env::var("CREDITS_ROLL_LOG_PATH")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

    if let Ok(file) = std::fs::File::create(&path) {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::sync::Arc::new(file)).with_ansi(false))
            .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
            .init();
    }
}
