//! glint — terminal live code playground.
//!
//! Without a subcommand, opens the editor TUI. `tokens`, `html` and `css`
//! print highlighter output for scripting.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use glint::config::{self, AppConfig};
use glint::highlight;
use glint::lexer::tokenize;
use glint::store::{self, FileStore, KeyValueStore, MemoryStore};
use glint::theme::{self, builtin, find_theme};
use glint::tui::{App, AppOptions};

const LOG_ENV: &str = "GLINT_LOG";
const DEFAULT_FILTER: &str = "glint=info";

#[derive(Parser, Debug)]
#[command(name = "glint", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// File to open instead of the saved buffer
    file: Option<PathBuf>,

    /// Starting theme (stylish, minimal, or a custom theme name)
    #[arg(long)]
    theme: Option<String>,

    /// Seed for the scramble animation
    #[arg(long)]
    seed: Option<u64>,

    /// Show the starting buffer at once instead of typing it out
    #[arg(long)]
    no_typing: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one token per line: offset, class, lexeme
    Tokens { file: PathBuf },
    /// Print highlighted HTML markup
    Html { file: PathBuf },
    /// Print the theme's CSS variables
    Css {
        #[arg(long)]
        theme: Option<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("terminal: {0}")]
    Terminal(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.command.is_none());

    let result = match &cli.command {
        Some(Commands::Tokens { file }) => print_tokens(file),
        Some(Commands::Html { file }) => print_html(file),
        Some(Commands::Css { theme }) => print_css(theme.as_deref()),
        None => run_tui(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("glint: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Install the tracing subscriber. The TUI owns the terminal, so it logs to
/// ~/.glint/glint.log; subcommands log to stderr.
fn init_logging(to_file: bool) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if !to_file {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init();
        return;
    }

    let file = config::glint_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("glint.log"))
            .ok()
    });
    if let Some(file) = file {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(filter)
            .init();
    }
}

fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn print_tokens(path: &Path) -> Result<(), CliError> {
    let source = read_source(path)?;
    for token in tokenize(&source) {
        println!("{}\t{}\t{:?}", token.offset, token.class, token.lexeme);
    }
    Ok(())
}

fn print_html(path: &Path) -> Result<(), CliError> {
    let source = read_source(path)?;
    println!("{}", highlight::highlight(&source));
    Ok(())
}

fn print_css(name: Option<&str>) -> Result<(), CliError> {
    let themes = theme::load_themes();
    let selected = match name {
        Some(name) => find_theme(&themes, name)
            .cloned()
            .ok_or_else(|| CliError::UnknownTheme(name.to_string()))?,
        None => builtin::stylish(),
    };
    println!("{}", selected.css_variables());
    Ok(())
}

/// Seed derived from the wall clock, for runs without a configured seed.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn load_config() -> AppConfig {
    match config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring config: {e}");
            AppConfig::default()
        }
    }
}

fn open_store() -> Box<dyn KeyValueStore> {
    match FileStore::open(store::default_store_path()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("saved code unavailable, editing in memory: {e}");
            Box::new(MemoryStore::new())
        }
    }
}

fn run_tui(cli: &Cli) -> Result<(), CliError> {
    let mut config = load_config();
    if cli.no_typing {
        config.typing = false;
    }
    if cli.theme.is_some() {
        config.theme = cli.theme.clone();
    }
    let seed = cli.seed.or(config.seed).unwrap_or_else(clock_seed);

    let store = open_store();
    let source = match &cli.file {
        Some(path) => read_source(path)?,
        None => store::load_live_code(&*store),
    };

    let options = AppOptions::from_config(&config, seed);
    tracing::info!(seed, typing = config.typing, "starting glint");
    let mut app = App::new(&source, theme::load_themes(), store, options);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;
    Ok(())
}
