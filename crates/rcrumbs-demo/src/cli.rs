#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually and accepts `RCRUMBS_DEMO_*` environment overrides.

use std::env;
use std::process;
use std::time::Duration;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
rcrumbs demo: a responsive breadcrumb trail in your terminal

USAGE:
    rcrumbs-demo [OPTIONS] [LABEL...]

Resize the terminal to watch crumbs hide and reappear.

OPTIONS:
    --no-ellipsis        Never truncate the first crumb
    --no-animation       Show and hide crumbs immediately
    --speed=MS           Transition duration in milliseconds (default: 400)
    --config=PATH        JSON trail config, merged over defaults
    --separator=TEXT     Separator between crumbs (default: ' › ')
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    q / Esc / Ctrl+C     Quit

ENVIRONMENT VARIABLES:
    RCRUMBS_DEMO_SPEED        Override --speed
    RCRUMBS_DEMO_CONFIG       Override --config
    RCRUMBS_LOG               Write logs to this file (filter via RUST_LOG)";

const DEFAULT_LABELS: [&str; 6] = [
    "Home",
    "Projects",
    "rcrumbs",
    "crates",
    "rcrumbs-core",
    "trail.rs",
];

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Crumb labels, first to last.
    pub labels: Vec<String>,
    /// Disable first-crumb truncation.
    pub no_ellipsis: bool,
    /// Disable width transitions.
    pub no_animation: bool,
    /// Transition duration override.
    pub speed: Option<Duration>,
    /// Path to a JSON config document.
    pub config: Option<String>,
    /// Separator override.
    pub separator: Option<String>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| (*s).to_string()).collect(),
            no_ellipsis: false,
            no_animation: false,
            speed: None,
            config: None,
            separator: None,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse process arguments and environment, exiting on `--help`,
    /// `--version`, or bad input.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match parse_from(&args, |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("rcrumbs-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }
}

/// Parse `args` with `env` as the environment lookup.
///
/// Environment variables override defaults; explicit flags override both.
pub fn parse_from<F>(args: &[String], env: F) -> Result<Command, String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut opts = Opts::default();
    let mut labels = Vec::new();

    if let Some(val) = env("RCRUMBS_DEMO_SPEED")
        && let Ok(ms) = val.parse()
    {
        opts.speed = Some(Duration::from_millis(ms));
    }
    if let Some(val) = env("RCRUMBS_DEMO_CONFIG") {
        opts.config = Some(val);
    }

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--no-ellipsis" => opts.no_ellipsis = true,
            "--no-animation" => opts.no_animation = true,
            other => {
                if let Some(val) = other.strip_prefix("--speed=") {
                    let ms = val
                        .parse()
                        .map_err(|_| format!("Invalid --speed value: {val}"))?;
                    opts.speed = Some(Duration::from_millis(ms));
                } else if let Some(val) = other.strip_prefix("--config=") {
                    opts.config = Some(val.to_string());
                } else if let Some(val) = other.strip_prefix("--separator=") {
                    opts.separator = Some(val.to_string());
                } else if other.starts_with("--") {
                    return Err(format!("Unknown argument: {other}"));
                } else {
                    labels.push(other.to_string());
                }
            }
        }
    }

    if !labels.is_empty() {
        opts.labels = labels;
    }
    Ok(Command::Run(opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.labels.len(), 6);
        assert!(!opts.no_ellipsis);
        assert!(!opts.no_animation);
        assert_eq!(opts.speed, None);
    }

    #[test]
    fn flags_and_labels() {
        let cmd = parse_from(
            &args(&["--no-ellipsis", "--speed=120", "a", "b", "c"]),
            no_env,
        )
        .unwrap();
        let Command::Run(opts) = cmd else {
            panic!("expected run");
        };
        assert!(opts.no_ellipsis);
        assert_eq!(opts.speed, Some(Duration::from_millis(120)));
        assert_eq!(opts.labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn env_is_overridden_by_flag() {
        let env = |key: &str| (key == "RCRUMBS_DEMO_SPEED").then(|| "900".to_string());
        let Ok(Command::Run(opts)) = parse_from(&args(&["--speed=50"]), env) else {
            panic!("expected run");
        };
        assert_eq!(opts.speed, Some(Duration::from_millis(50)));

        let Ok(Command::Run(opts)) = parse_from(&[], env) else {
            panic!("expected run");
        };
        assert_eq!(opts.speed, Some(Duration::from_millis(900)));
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse_from(&args(&["-h"]), no_env), Ok(Command::Help));
        assert_eq!(parse_from(&args(&["--version"]), no_env), Ok(Command::Version));
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(parse_from(&args(&["--speed=fast"]), no_env).is_err());
        assert!(parse_from(&args(&["--bogus"]), no_env).is_err());
    }

    #[test]
    fn help_text_lists_options() {
        assert!(HELP_TEXT.contains("--no-ellipsis"));
        assert!(HELP_TEXT.contains("RCRUMBS_LOG"));
        assert!(!VERSION.is_empty());
    }
}
