mod app;
mod clock;
mod command;
mod config;
mod consts;
mod controller;
mod game;
mod highscore;
mod input;
mod listeners;
mod ui;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::controller::GameController;
use crate::game::RandomFoodPlacer;
use crate::listeners::{EventLog, Listeners, TerminalBell};
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: gridsnake [OPTIONS]\n",
    "\n",
    "Play Snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>    Read configuration from <FILE>\n",
    "      --log-file <FILE>  Append log messages to <FILE>\n",
    "  -h, --help             Show this help message and exit\n",
    "  -V, --version          Show the program version and exit\n",
);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run { config, log_file })
    }
}

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(Cli::Run { config, log_file }) => exit_with(run(config, log_file)),
        Ok(Cli::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<PathBuf>, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = log_file {
        init_logging(&path)?;
    }
    let config = match config_path {
        Some(path) => Config::load(&path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    log::debug!("Configuration: {config:?}");
    let mut listeners = Listeners::new();
    listeners.push(EventLog);
    if config.game.sound {
        listeners.push(TerminalBell::new().with_turn_cue(config.game.turn_sound));
    }
    let wanted = config.game.bounds();
    let controller = GameController::new(
        wanted,
        config.high_score_store(),
        RandomFoodPlacer::new(),
        listeners,
    );
    let app = App::new(controller, wanted);
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
        .and_then(|()| app.run(terminal));
    if let Err(e) = execute!(io::stdout(), DisableFocusChange, DisableMouseCapture) {
        log::warn!("Failed to turn off mouse & focus reporting: {e}");
    }
    ratatui::restore();
    r.map_err(Into::into)
}

/// Send log messages to the given file.  The terminal is taken up by the
/// game, so without `--log-file` nothing is logged at all.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logging")?;
    log::info!("{} {} starting", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Ok(())
}

fn exit_with(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("gridsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_iter(
            std::iter::once("gridsnake").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            Cli::Run {
                config: None,
                log_file: None
            }
        );
    }

    #[test]
    fn all_options() {
        assert_eq!(
            parse(&["-c", "snake.toml", "--log-file=snake.log"]).unwrap(),
            Cli::Run {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("snake.log"))
            }
        );
        assert_eq!(
            parse(&["--config", "other.toml"]).unwrap(),
            Cli::Run {
                config: Some(PathBuf::from("other.toml")),
                log_file: None
            }
        );
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse(&["--help"]).unwrap(), Cli::Help);
        assert_eq!(parse(&["-c", "x.toml", "-h"]).unwrap(), Cli::Help);
        assert_eq!(parse(&["-V"]).unwrap(), Cli::Version);
    }

    #[test]
    fn bad_args() {
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["extra"]).is_err());
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn broken_pipe_detection() {
        let e = anyhow::Error::from(io::Error::from(ErrorKind::BrokenPipe));
        assert!(is_broken_pipe(&e));
        let e = anyhow::Error::from(io::Error::from(ErrorKind::PermissionDenied));
        assert!(!is_broken_pipe(&e));
        let e = anyhow::anyhow!("something else");
        assert!(!is_broken_pipe(&e));
    }
}
