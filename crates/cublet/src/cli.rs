use std::path::PathBuf;

use cublet_engine::CubeEngine;
use cublet_engine::scramble::ScrambleParams;
use cublet_notation::{Move, format_moves, invert_sequence, parse_move, parse_moves};
use cublet_prefs::{AnimationPreferences, Preferences};
use eyre::{Context, Result, bail, eyre};
use itertools::Itertools;
use serde::Serialize;
use web_time::{Duration, Instant};

use crate::report::PlayReport;

/// Frames after which a simulated run is assumed to be stuck.
const MAX_FRAMES: usize = 10_000_000;

/// Headless driver for the cublet move-execution engine.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the one in the user config
    /// directory.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print each move in normalized notation.
    Parse {
        /// Moves, such as `R` or `U'2`.
        tokens: Vec<String>,
    },
    /// Animate moves headlessly and print the final state.
    Play {
        #[command(flatten)]
        playback: PlaybackArgs,

        /// Moves, such as `R` or `U'2`.
        tokens: Vec<String>,
    },
    /// Generate a scramble.
    Scramble {
        /// Number of moves. Defaults to the length in preferences.
        #[arg(short, long)]
        len: Option<usize>,
        /// Random seed, for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Animate the scramble and print the final state.
        #[arg(long)]
        play: bool,

        #[command(flatten)]
        playback: PlaybackArgs,
    },
    /// Print the sequence of moves that undoes a sequence.
    Invert {
        /// Moves, such as `R` or `U'2`.
        tokens: Vec<String>,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct PlaybackArgs {
    /// Frames per second of the simulated clock.
    #[arg(long, default_value_t = 60)]
    pub fps: u32,
    /// Duration of each move in milliseconds. Defaults to the duration in
    /// preferences.
    #[arg(long)]
    pub duration_ms: Option<u64>,
    /// Wait for real time to pass between frames.
    #[arg(long)]
    pub realtime: bool,
    /// Print the final state as JSON.
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref());

    match args.subcommand {
        Subcommand::Parse { tokens } => {
            for token in &tokens {
                match parse_moves(token) {
                    Ok(moves) if moves.len() == 1 => println!("{token}\t{}", moves[0]),
                    Ok(moves) => {
                        eprintln!("warning: expected one move, got {} in {token:?}", moves.len());
                    }
                    Err(errors) => {
                        eprintln!("warning: invalid move {token:?}: {}", errors.iter().join("; "));
                    }
                }
            }
            Ok(())
        }

        Subcommand::Play { playback, tokens } => {
            for token in tokens.iter().filter(|t| parse_move(t).is_none()) {
                log::warn!("skipping invalid move {token:?}");
            }
            let mut engine = new_engine(&prefs.animation, &playback)?;
            engine.enqueue(&tokens);
            let frames = run(&mut engine, &playback)?;
            print_report(&PlayReport::new(frames, engine.history(), engine.state()), playback.json)
        }

        Subcommand::Scramble {
            len,
            seed,
            play,
            playback,
        } => {
            let params = ScrambleParams {
                len: len.unwrap_or(prefs.scramble.length),
                seed,
            }
            .with_resolved_seed();
            if let Some(seed) = params.seed {
                eprintln!("seed: {seed}");
            }

            if !play {
                println!("{}", format_moves(params.generate()));
                return Ok(());
            }

            let mut engine = new_engine(&prefs.animation, &playback)?;
            engine
                .scramble(&params)
                .ok_or_else(|| eyre!("engine refused to scramble"))?;
            let frames = run(&mut engine, &playback)?;
            print_report(&PlayReport::new(frames, engine.history(), engine.state()), playback.json)
        }

        Subcommand::Invert { tokens } => {
            let moves = parse_sequence(&tokens)?;
            println!("{}", format_moves(invert_sequence(&moves)));
            Ok(())
        }
    }
}

fn parse_sequence(tokens: &[String]) -> Result<Vec<Move>> {
    let s = tokens.join(" ");
    parse_moves(&s).map_err(|errors| eyre!("invalid moves {s:?}: {}", errors.iter().join("; ")))
}

fn new_engine(prefs: &AnimationPreferences, playback: &PlaybackArgs) -> Result<CubeEngine> {
    if playback.fps == 0 {
        bail!("fps must be positive");
    }
    let mut engine = CubeEngine::with_prefs((), prefs);
    if let Some(ms) = playback.duration_ms {
        engine.set_animation_prefs(&AnimationPreferences {
            twist_duration: Duration::from_millis(ms).as_secs_f32(),
            ..prefs.clone()
        });
    }
    Ok(engine)
}

/// Runs frames until the engine is idle and returns the number of frames.
fn run(engine: &mut CubeEngine, playback: &PlaybackArgs) -> Result<usize> {
    let frame_interval = Duration::from_secs(1) / playback.fps;
    let start = Instant::now();
    let mut frames = 0;
    while engine.is_running() {
        if frames >= MAX_FRAMES {
            bail!("moves still running after {MAX_FRAMES} frames");
        }
        let timestamp = if playback.realtime {
            start.elapsed()
        } else {
            frame_interval * frames as u32
        };
        engine.frame(timestamp);
        frames += 1;
        if playback.realtime {
            std::thread::sleep(frame_interval);
        }
    }
    Ok(frames)
}

fn print_report(report: &PlayReport, json: bool) -> Result<()> {
    if json {
        write_json_output(report)
    } else {
        print!("{report}");
        Ok(())
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
