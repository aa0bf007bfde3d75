#![forbid(unsafe_code)]

//! Command-line argument parsing for the orb demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `ORBFX_*` prefix.

use std::env;
use std::process;

use orbfx_field::DriftRegion;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
orbfx-demo — ambient orb backdrop in your terminal

USAGE:
    orbfx-demo [OPTIONS]

OPTIONS:
    --orbs=N             Number of orbs (default: 4)
    --seed=N             Deterministic seed for palette and motion (optional)
    --fps=N              Frame cadence in frames per second (default: 30)
    --frames=N           Auto-exit after N frames, 0 = run forever (default: 0)
    --region=MODE        Drift region: 'full' or 'anchored' (default: full)
    --reduced-motion     Render a single static frame instead of animating
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    c / Space            Regenerate the palette and restyle every orb
    q / Esc / Ctrl+C     Quit

ENVIRONMENT VARIABLES:
    ORBFX_ORBS           Override --orbs
    ORBFX_SEED           Override --seed
    ORBFX_FPS            Override --fps
    ORBFX_FRAMES         Override --frames
    ORBFX_REGION         Override --region ('full' or 'anchored')
    ORBFX_REDUCED_MOTION Override --reduced-motion (1/true to enable)
    ORBFX_LOG            Tracing filter; when set, logs go to orbfx-demo.log";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Number of orbs to spawn.
    pub orbs: usize,
    /// Deterministic seed (None = entropy).
    pub seed: Option<u64>,
    /// Frame cadence in frames per second.
    pub fps: u64,
    /// Auto-exit after this many frames (0 = disabled).
    pub frames: u64,
    /// Drift region selection.
    pub region: DriftRegion,
    /// Render a single static frame instead of animating.
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            orbs: 4,
            seed: None,
            fps: 30,
            frames: 0,
            region: DriftRegion::FullViewport,
            reduced_motion: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("orbfx-demo {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(1);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = get_env("ORBFX_ORBS")
            && let Ok(n) = val.parse()
        {
            opts.orbs = n;
        }
        if let Some(val) = get_env("ORBFX_SEED")
            && let Ok(n) = val.parse()
        {
            opts.seed = Some(n);
        }
        if let Some(val) = get_env("ORBFX_FPS")
            && let Ok(n) = val.parse()
            && n > 0
        {
            opts.fps = n;
        }
        if let Some(val) = get_env("ORBFX_FRAMES")
            && let Ok(n) = val.parse()
        {
            opts.frames = n;
        }
        if let Some(val) = get_env("ORBFX_REGION")
            && let Some(region) = parse_region(&val)
        {
            opts.region = region;
        }
        if let Some(val) = get_env("ORBFX_REDUCED_MOTION") {
            let enabled = val == "1" || val.eq_ignore_ascii_case("true");
            opts.reduced_motion = enabled;
        }

        // Parse command-line args (override env vars)
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect();
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            match arg.as_str() {
                "--help" | "-h" => {
                    return Err(ParseError::Help);
                }
                "--version" | "-V" => {
                    return Err(ParseError::Version);
                }
                "--reduced-motion" => {
                    opts.reduced_motion = true;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--orbs=") {
                        match val.parse() {
                            Ok(n) => opts.orbs = n,
                            Err(_) => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--orbs",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        match val.parse() {
                            Ok(n) => opts.seed = Some(n),
                            Err(_) => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--seed",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--fps=") {
                        match val.parse() {
                            Ok(n) if n > 0 => opts.fps = n,
                            _ => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--fps",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--frames=") {
                        match val.parse() {
                            Ok(n) => opts.frames = n,
                            Err(_) => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--frames",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--region=") {
                        match parse_region(val) {
                            Some(region) => opts.region = region,
                            None => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--region",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    }
                }
            }
            i += 1;
        }

        Ok(opts)
    }
}

fn parse_region(raw: &str) -> Option<DriftRegion> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "full" | "viewport" => Some(DriftRegion::FullViewport),
        "anchored" | "anchor" => Some(DriftRegion::Anchored),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with_env<I, S>(
        args: I,
        env_pairs: &[(&'static str, &'static str)],
    ) -> Result<Opts, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = std::collections::HashMap::new();
        for (key, value) in env_pairs {
            map.insert(*key, *value);
        }
        Opts::parse_from_env_and_args(args, |key| map.get(key).map(|value| (*value).to_string()))
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.orbs, 4);
        assert!(opts.seed.is_none());
        assert_eq!(opts.fps, 30);
        assert_eq!(opts.frames, 0);
        assert_eq!(opts.region, DriftRegion::FullViewport);
        assert!(!opts.reduced_motion);
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_contains_env_vars() {
        assert!(HELP_TEXT.contains("ORBFX_ORBS"));
        assert!(HELP_TEXT.contains("ORBFX_SEED"));
        assert!(HELP_TEXT.contains("ORBFX_REGION"));
        assert!(HELP_TEXT.contains("ORBFX_REDUCED_MOTION"));
        assert!(HELP_TEXT.contains("ORBFX_LOG"));
    }

    #[test]
    fn parse_region_variants() {
        assert_eq!(parse_region("full"), Some(DriftRegion::FullViewport));
        assert_eq!(parse_region("Anchored"), Some(DriftRegion::Anchored));
        assert_eq!(parse_region("  anchor "), Some(DriftRegion::Anchored));
        assert_eq!(parse_region("sideways"), None);
    }

    #[test]
    fn env_overrides_apply() {
        let env = [
            ("ORBFX_ORBS", "7"),
            ("ORBFX_SEED", "99"),
            ("ORBFX_REGION", "anchored"),
            ("ORBFX_REDUCED_MOTION", "true"),
        ];
        let opts = parse_with_env(Vec::<String>::new(), &env).expect("parse");
        assert_eq!(opts.orbs, 7, "env={env:?} expected orbs=7, got {}", opts.orbs);
        assert_eq!(opts.seed, Some(99));
        assert_eq!(opts.region, DriftRegion::Anchored);
        assert!(opts.reduced_motion);
    }

    #[test]
    fn args_override_env() {
        let args = ["--orbs=2", "--region=full"];
        let env = [("ORBFX_ORBS", "9"), ("ORBFX_REGION", "anchored")];
        let opts = parse_with_env(args, &env).expect("parse args");
        assert_eq!(
            opts.orbs, 2,
            "args={args:?} env={env:?} expected orbs=2, got {}",
            opts.orbs
        );
        assert_eq!(opts.region, DriftRegion::FullViewport);
    }

    #[test]
    fn args_parse_seed_fps_frames() {
        let opts = parse_with_env(["--seed=42", "--fps=12", "--frames=600"], &[]).expect("parse");
        assert_eq!(opts.seed, Some(42));
        assert_eq!(opts.fps, 12);
        assert_eq!(opts.frames, 600);
    }

    #[test]
    fn zero_fps_env_ignored() {
        let opts = parse_with_env(Vec::<String>::new(), &[("ORBFX_FPS", "0")]).expect("parse");
        assert_eq!(opts.fps, 30);
    }

    #[test]
    fn zero_fps_rejected() {
        let err = parse_with_env(["--fps=0"], &[]);
        assert!(
            matches!(err, Err(ParseError::InvalidValue { flag: "--fps", .. })),
            "expected InvalidValue for --fps=0, got {err:?}"
        );
    }

    #[test]
    fn invalid_value_reports_flag() {
        let err = parse_with_env(["--orbs=lots"], &[]);
        assert!(
            matches!(err, Err(ParseError::InvalidValue { flag: "--orbs", .. })),
            "expected InvalidValue for --orbs, got {err:?}"
        );
    }

    #[test]
    fn unknown_arg_reports_error() {
        let err = parse_with_env(["--mystery-flag"], &[]);
        assert!(
            matches!(err, Err(ParseError::UnknownArg(ref arg)) if arg == "--mystery-flag"),
            "expected UnknownArg for --mystery-flag, got {err:?}"
        );
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse_with_env(["--help"], &[]), Err(ParseError::Help));
        assert_eq!(parse_with_env(["-V"], &[]), Err(ParseError::Version));
    }
}
