//! slideswitch CLI - validate toggle layouts and replay gestures against them.

mod logging;
mod render;

use clap::{Parser, Subcommand};
use serde::Serialize;
use slideswitch::{HostError, HostScreen, Toast, ToastLog};
use slideswitch_core::{DrawCommand, Widget};
use slideswitch_test::{GestureParseError, GestureStep, Harness};
use slideswitch_yaml::{Layout, ParseError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

use crate::render::TextCanvas;

#[derive(Parser)]
#[command(name = "slideswitch")]
#[command(about = "Replay touch gestures against a slide toggle layout")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a layout, replay a gesture and print every painted frame
    Run {
        /// Path to layout file
        #[arg(default_value = "layouts/main.yaml")]
        layout: PathBuf,

        /// Gesture script, e.g. "down:0,move:60,move:120,up"
        #[arg(short, long, default_value = "down:0,move:120,up")]
        gesture: String,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,

        /// Pixels per character in the text sketch
        #[arg(long, default_value_t = 10.0)]
        scale: f32,
    },

    /// Check layout validity
    Check {
        /// Path to layout file
        #[arg(default_value = "layouts/main.yaml")]
        layout: PathBuf,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("layout invalid: {0}")]
    Layout(#[from] ParseError),

    #[error("{0}")]
    Host(#[from] HostError),

    #[error("invalid gesture: {0}")]
    Gesture(#[from] GestureParseError),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct FrameReport {
    index: usize,
    commands: Vec<DrawCommand>,
}

#[derive(Serialize)]
struct RunReport {
    layout: String,
    gesture: Vec<String>,
    frames: Vec<FrameReport>,
    toasts: Vec<Toast>,
    open: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            layout,
            gesture,
            json,
            scale,
        } => run(&layout, &gesture, json, scale),
        Commands::Check { layout } => check(&layout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_layout(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn run(path: &Path, gesture: &str, json: bool, scale: f32) -> Result<(), CliError> {
    let yaml = read_layout(path)?;
    let steps = GestureStep::parse_script(gesture)?;
    let screen = HostScreen::from_yaml(&yaml, ToastLog::new())?;

    let mut harness = Harness::new(screen);
    harness.run(&steps);
    tracing::info!(
        steps = steps.len(),
        frames = harness.frame_count(),
        "gesture replayed"
    );

    let screen = harness.widget();
    let open = screen.toggle().is_open();

    if json {
        let report = RunReport {
            layout: path.display().to_string(),
            gesture: steps.iter().map(ToString::to_string).collect(),
            frames: harness
                .frames()
                .iter()
                .map(|f| FrameReport {
                    index: f.index,
                    commands: f.commands.clone(),
                })
                .collect(),
            toasts: screen.notifier().toasts().to_vec(),
            open,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for frame in harness.frames() {
        let commands: Vec<String> = frame.commands.iter().map(ToString::to_string).collect();
        println!("frame {}: {}", frame.index, commands.join("; "));
    }
    for toast in screen.notifier().toasts() {
        println!("toast: {toast} ({}ms)", toast.duration.millis());
    }

    let mut canvas = TextCanvas::new(screen.bounds().x, scale);
    screen.paint(&mut canvas);
    println!(
        "{} {}",
        canvas.render(),
        if open { "open" } else { "closed" }
    );
    Ok(())
}

fn check(path: &Path) -> Result<(), CliError> {
    println!("Checking layout: {}", path.display());

    let yaml = read_layout(path)?;
    let layout = Layout::parse(&yaml)?;
    // Loads the toggle's two bitmaps from the declared resources.
    let screen = HostScreen::from_layout(&layout, ToastLog::new())?;

    println!("Layout valid!");
    println!("  Resources: {}", layout.resources.len());
    if let Some(id) = &layout.toggle.id {
        println!("  Toggle: {id}");
    }
    println!(
        "  Initial state: {}",
        if layout.toggle.toggle_state {
            "open"
        } else {
            "closed"
        }
    );
    let size = screen.measure(slideswitch_core::Constraints::unbounded());
    println!("  Size: {}x{}", size.width, size.height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::try_parse_from([
            "slideswitch",
            "-vv",
            "run",
            "screen.yaml",
            "--gesture",
            "down:0,up",
            "--json",
        ])
        .expect("valid args");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Run {
                layout,
                gesture,
                json,
                scale,
            } => {
                assert_eq!(layout, PathBuf::from("screen.yaml"));
                assert_eq!(gesture, "down:0,up");
                assert!(json);
                assert_eq!(scale, 10.0);
            }
            Commands::Check { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_missing_layout_file() {
        let err = check(Path::new("/nonexistent/layout.yaml")).expect_err("missing file");
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().starts_with("failed to read /nonexistent/layout.yaml"));
    }
}
