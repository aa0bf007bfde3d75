#![forbid(unsafe_code)]

//! Ambient orb backdrop rendered in the terminal.
//!
//! Drives an [`OrbField`] at a fixed cadence and paints it with the
//! half-block renderer. `c` or space regenerates the palette, terminal
//! resizes are debounced into new drift bounds, and `--reduced-motion`
//! renders a single static frame.

mod cli;
mod surface;

use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

use orbfx_core::{MotionPreference, Viewport};
use orbfx_field::{OrbField, OrbFieldConfig};

use crate::cli::Opts;
use crate::surface::HalfBlockSurface;

const LOG_PATH: &str = "orbfx-demo.log";

fn main() -> io::Result<()> {
    let opts = Opts::parse();
    init_tracing()?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = run(&opts, &mut stdout);
    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

/// Set up file logging when `ORBFX_LOG` holds a tracing filter. Logs cannot
/// go to the terminal while the alternate screen owns it.
fn init_tracing() -> io::Result<()> {
    let Ok(filter) = std::env::var("ORBFX_LOG") else {
        return Ok(());
    };
    let file = File::create(LOG_PATH)?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(opts: &Opts, stdout: &mut io::Stdout) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let config = OrbFieldConfig {
        orb_count: opts.orbs,
        motion: if opts.reduced_motion {
            MotionPreference::Reduced
        } else {
            MotionPreference::Animated
        },
        region: opts.region,
        seed: opts.seed,
        ..OrbFieldConfig::default()
    };
    let frame_budget = Duration::from_millis(1000 / opts.fps);

    let mut surface = HalfBlockSurface::new(cols, rows, config.alpha);
    let mut field = OrbField::new(config, Viewport::new(surface.width(), surface.height()));

    let mut drawn = 0u64;
    loop {
        let frame_start = Instant::now();
        field.step_at(frame_start, &mut surface);
        surface.present(stdout)?;
        stdout.flush()?;

        drawn += 1;
        if opts.frames > 0 && drawn >= opts.frames {
            return Ok(());
        }

        // Wait out the frame budget while servicing input. Under reduced
        // motion with no pending resize, block until input arrives instead
        // of redrawing an unchanged frame.
        loop {
            let idle = !field.motion().is_animated() && !field.resize_pending();
            let timeout = if idle {
                Duration::from_secs(3600)
            } else {
                frame_budget.saturating_sub(frame_start.elapsed())
            };
            if !event::poll(timeout)? {
                if idle {
                    continue;
                }
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') | KeyCode::Char(' ') => {
                        field.regenerate_palette();
                        break;
                    }
                    _ => {}
                },
                Event::Resize(new_cols, new_rows) => {
                    surface.resize(new_cols, new_rows);
                    field.notify_resize_at(
                        Viewport::new(surface.width(), surface.height()),
                        Instant::now(),
                    );
                    break;
                }
                _ => {}
            }
        }
    }
}
