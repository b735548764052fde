//! Script loading and replay.

use crate::throttle::LogThrottle;
use clap::Parser;
use serde::Serialize;
use shearsketch_core::{
    ConfigError, ControllerSnapshot, InteractionConfig, InteractionController, PointerEvent,
};
use shearsketch_render::{
    CommandCounter, RenderStyle, Renderer, RendererError, build_display_list,
};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Command line of the headless driver.
#[derive(Debug, Parser)]
#[command(
    name = "shearsketch",
    version,
    about = "Replay pointer-event scripts against the ellipse editor"
)]
pub struct Cli {
    /// JSON array of pointer events.
    pub script: PathBuf,
    /// JSON file overriding interaction constants.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Also print display-list command counts.
    #[arg(long)]
    pub summary: bool,
    /// Log one move event out of every N at debug level.
    #[arg(long, default_value_t = 10)]
    pub log_every: u64,
}

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub events: usize,
    pub redraws: usize,
    pub state: ControllerSnapshot,
    #[serde(skip)]
    pub commands: CommandCounter,
}

fn read(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON array of pointer events.
pub fn load_script(path: &Path) -> Result<Vec<PointerEvent>, AppError> {
    let events: Vec<PointerEvent> = serde_json::from_str(&read(path)?)?;
    log::debug!("loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Load interaction constants, falling back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<InteractionConfig, AppError> {
    match path {
        Some(path) => Ok(InteractionConfig::from_json(&read(path)?)?),
        None => Ok(InteractionConfig::default()),
    }
}

/// Feed `events` through a fresh controller, rendering into a counter on
/// every requested redraw.
pub fn replay(
    events: &[PointerEvent],
    config: InteractionConfig,
    log_every: u64,
) -> Result<ReplayReport, AppError> {
    let mut ctrl = InteractionController::new(config);
    let style = RenderStyle::default();
    let mut commands = CommandCounter::default();
    let mut throttle = LogThrottle::new(log_every);
    let mut redraws = 0;

    for event in events {
        let effect = ctrl.handle_event(*event);
        match event {
            PointerEvent::Move { position } => {
                if throttle.tick() {
                    log::debug!(
                        "move #{} at {position:?}: phase {:?}, dragging {}",
                        throttle.seen(),
                        ctrl.phase(),
                        ctrl.is_dragging()
                    );
                }
            }
            _ => log::debug!("{event:?} -> {effect:?}"),
        }
        if effect.needs_redraw() {
            commands.build_scene(&build_display_list(&ctrl, &style))?;
            redraws += 1;
        }
    }

    Ok(ReplayReport {
        events: events.len(),
        redraws,
        state: ctrl.snapshot(),
        commands,
    })
}

/// Run the driver for a parsed command line, returning the text to print.
pub fn run(cli: &Cli) -> Result<String, AppError> {
    let config = load_config(cli.config.as_deref())?;
    let events = load_script(&cli.script)?;
    let report = replay(&events, config, cli.log_every)?;

    let mut output = serde_json::to_string_pretty(&report)?;
    if cli.summary {
        let c = report.commands;
        // Writing to a String cannot fail.
        let _ = write!(
            output,
            "\nframes: {}, clears: {}, outlines: {}, boxes: {}, \
             handles: {} filled / {} arc, anchors: {}",
            c.frames, c.clears, c.outlines, c.boxes, c.filled_handles, c.arc_handles, c.anchors
        );
    }
    Ok(output)
}
