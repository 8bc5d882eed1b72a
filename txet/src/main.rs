//! Txet - a reverse text adventure.
//!
//! You write the story on stdin; after each blank line the computer answers
//! with the command a player might type. Logs go to stderr so stdout carries
//! only the dialogue.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use salience_core::{ConfigError, Engine, EngineConfig, EngineError};

mod session;

use session::{Reply, Session, HELP, INTRO};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "txet")]
#[command(about = "A reverse text adventure: you write the story, the computer plays")]
struct Args {
    /// Extra verbs, one per line
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/verbs.txt"))]
    verbs: PathBuf,

    /// Noun-pattern specification file
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/noun.pattern"))]
    pattern: PathBuf,

    /// Optional TOML file with engine tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Number of nouns to keep in mind
    #[arg(long)]
    capacity: Option<usize>,

    /// Log the noun memory after every turn
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to load config: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Log level used when `RUST_LOG` is unset.
fn default_directive(debug_memory: bool) -> &'static str {
    // The memory snapshot is logged at debug
    if debug_memory {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(debug_memory: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug_memory)));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn load_config(args: &Args) -> Result<EngineConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(capacity) = args.capacity {
        config = config.with_memory_capacity(capacity);
    }
    if args.debug {
        config = config.with_debug_memory(true);
    }
    Ok(config)
}

fn run(args: &Args, config: EngineConfig) -> Result<(), AppError> {
    info!(?config, "starting session");

    let engine = Engine::load(&config, &args.verbs, &args.pattern)?;
    let mut session = Session::new(engine);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", INTRO)?;

    for line in io::stdin().lock().lines() {
        match session.feed(&line?)? {
            Reply::Listening => continue,
            Reply::Command(command) => writeln!(out, ">{}\n", command)?,
            Reply::Help => writeln!(out, "{}\n", HELP)?,
            Reply::End => break,
        }
        out.flush()?;
    }

    info!(turns = session.engine().turns(), "session closed");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = load_config(&args);
    init_tracing(config.as_ref().map_or(args.debug, |config| config.debug_memory));

    match config.and_then(|config| run(&args, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "txet stopped");
            ExitCode::FAILURE
        }
    }
}
