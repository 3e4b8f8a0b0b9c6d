//! # Marcher Application Logic
//!
//! [`run`] dispatches on the command line mode.
//!
//! `render` loads the scene, renders one frame and writes it as a PNG.
//!
//! `interactive` keeps rendering. A reader thread parses control messages
//! from stdin and forwards them over a channel; the frame loop applies all
//! pending messages, takes a snapshot of the scene and renders it, then
//! overwrites the output PNG. When a scene file was given it is also watched
//! and reloaded on change through [`crate::watcher`]. The loop ends after
//! `--frames` frames or, without that flag, once stdin is closed or a `quit`
//! line is read.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use control::{Command, SceneConfig, SceneFile};
use render::{Renderer, SceneStore};
use tracing::{error, info, warn};

use crate::cli::{Cli, Mode, SceneArgs};
use crate::watcher;

/// Runs the selected mode to completion.
///
/// # Errors
///
/// Returns an error if the scene cannot be loaded or a frame cannot be
/// written.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Mode::Render { scene } => render_once(&scene),
        Mode::Interactive { scene, frames, fps } => interactive(&scene, frames, fps),
    }
}

fn load_config(args: &SceneArgs) -> Result<SceneConfig> {
    let mut config = match &args.scene {
        Some(path) => SceneFile::load(path)?.build()?,
        None => {
            info!("No scene file given, using the demo scene");
            SceneConfig::demo()?
        }
    };
    config.settings = args.apply(config.settings);
    Ok(config)
}

fn render_once(args: &SceneArgs) -> Result<()> {
    let config = load_config(args)?;
    let mut renderer = Renderer::new(config.settings);
    renderer.parallel = !args.serial;

    let start = Instant::now();
    let frame = renderer.render(&config.scene, &config.camera, &config.light);
    frame.save_png(&args.out)?;
    info!(
        out = %args.out.display(),
        width = frame.width(),
        height = frame.height(),
        covered = frame.covered_pixels(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "frame written"
    );
    Ok(())
}

fn interactive(args: &SceneArgs, frames: Option<u64>, fps: f32) -> Result<()> {
    let config = load_config(args)?;
    let store = Arc::new(SceneStore::new(config.scene));
    let light = config.light;
    let mut camera = config.camera;
    let mut renderer = Renderer::new(config.settings);
    renderer.parallel = !args.serial;

    let (commands, inbox) = mpsc::channel();
    let input_closed = Arc::new(AtomicBool::new(false));
    {
        let input_closed = Arc::clone(&input_closed);
        thread::Builder::new()
            .name("control-input".into())
            .spawn(move || {
                let accepted = read_commands(io::stdin().lock(), &commands);
                info!(accepted, "control input closed");
                input_closed.store(true, Ordering::Release);
            })
            .context("failed to spawn control input thread")?;
    }

    let _scene_watcher = match &args.scene {
        Some(path) => match watcher::start(path, Arc::clone(&store)) {
            Ok(w) => Some(w),
            Err(e) => {
                error!("Failed to start scene watcher: {e:?}");
                None
            }
        },
        None => None,
    };

    let frame_duration = Duration::try_from_secs_f32(1.0 / fps).unwrap_or(Duration::MAX);
    let mut last_generation = None;
    let mut frame_index = 0_u64;
    info!(fps, frames = ?frames, "Starting interactive loop");

    loop {
        if frames.is_some_and(|limit| frame_index >= limit) {
            break;
        }
        let frame_start = Instant::now();
        // Checked before draining so every message sent before the close is applied.
        let closing = frames.is_none() && input_closed.load(Ordering::Acquire);

        for command in inbox.try_iter() {
            if let Err(e) = command.apply(&store, &mut camera) {
                warn!("Control message rejected: {e}");
            }
        }

        let snapshot = store.snapshot();
        if last_generation != Some(snapshot.generation) {
            info!(
                generation = snapshot.generation,
                primitives = snapshot.scene.len(),
                "Rendering new scene generation"
            );
            last_generation = Some(snapshot.generation);
        }

        let frame = renderer.render(&snapshot.scene, &camera, &light);
        frame.save_png(&args.out)?;
        frame_index += 1;

        if frame_index % 50 == 0 {
            info!(
                frame = frame_index,
                last_frame_ms = frame_start.elapsed().as_secs_f64() * 1000.0,
                "Interactive loop running"
            );
        }
        if closing {
            break;
        }

        let frame_time = frame_start.elapsed();
        if frame_time < frame_duration {
            thread::sleep(frame_duration - frame_time);
        }
    }

    info!(frames = frame_index, out = %args.out.display(), "Interactive loop finished");
    Ok(())
}

/// Parses control messages line by line until EOF or a `quit` line.
///
/// Malformed messages are logged and skipped. Returns the number of
/// messages forwarded.
fn read_commands(reader: impl BufRead, commands: &Sender<Command>) -> usize {
    let mut accepted = 0;
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read control input: {e}");
                break;
            }
        };
        let message = line.trim();
        if message.is_empty() || message.starts_with('#') {
            continue;
        }
        if message == "quit" || message == "exit" {
            break;
        }
        match message.parse::<Command>() {
            Ok(command) => {
                if commands.send(command).is_err() {
                    break;
                }
                accepted += 1;
            }
            Err(e) => warn!("Invalid control message {message:?}: {e}"),
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn args(out: PathBuf) -> SceneArgs {
        SceneArgs {
            scene: None,
            out,
            width: Some(32),
            height: Some(24),
            preview: None,
            serial: false,
        }
    }

    #[test]
    fn read_commands_skips_bad_lines_and_stops_at_quit() {
        let input = "\
add_primitive:0,0,0,5,1
# comment

bogus
change_blend_strength:1.5
quit
add_primitive:1,0,0,5,1
";
        let (tx, rx) = mpsc::channel();
        assert_eq!(read_commands(Cursor::new(input), &tx), 2);
        let received: Vec<Command> = rx.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert_eq!(received[1], Command::ChangeBlendStrength(1.5));
    }

    #[test]
    fn demo_config_uses_overrides() {
        let config = load_config(&args(PathBuf::from("unused.png"))).unwrap();
        assert_eq!(config.scene.len(), 2);
        assert_eq!(config.settings.resolution(), (32, 24));
    }

    #[test]
    fn render_and_interactive_write_png() {
        let dir = std::env::temp_dir();
        let id = std::process::id();

        let once = dir.join(format!("marcher-once-{id}.png"));
        render_once(&args(once.clone())).unwrap();
        assert!(once.exists());

        let live = dir.join(format!("marcher-live-{id}.png"));
        interactive(&args(live.clone()), Some(2), 1000.0).unwrap();
        assert!(live.exists());

        std::fs::remove_file(once).unwrap();
        std::fs::remove_file(live).unwrap();
    }
}
