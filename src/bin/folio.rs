//! `folio` - show the portfolio and manage its light/dark preference.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::Term;
use tracing_subscriber::EnvFilter;

use folio::render::DEFAULT_WIDTH;
use folio::{
    AdaptiveTheme, Document, FileStore, FolioConfig, OsSystemTheme, OutputMode, Portfolio,
    PreferenceSource, Renderer, ThemeResolver,
};

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Resume page for the terminal")]
struct Cli {
    /// Config file (default: <config dir>/folio/config.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Preference file holding the saved theme
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Portfolio YAML to show instead of the built-in content
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    output: Option<OutputArg>,

    /// Line width (default: terminal width)
    #[arg(long, global = true)]
    width: Option<usize>,

    /// More log output on stderr (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page in the current theme (default)
    Show,
    /// Switch between light and dark and remember the choice
    Toggle,
    /// Forget the saved choice and follow the system again
    Reset,
    /// Print the active theme and where it came from
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Keep the page on screen, redrawing when the system theme changes
    Watch {
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
        /// Stop after this many checks
        #[arg(long)]
        max_polls: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputArg {
    Auto,
    Term,
    Text,
    Debug,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Auto => OutputMode::Auto,
            OutputArg::Term => OutputMode::Term,
            OutputArg::Text => OutputMode::Text,
            OutputArg::Debug => OutputMode::TermDebug,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let flags = FolioConfig {
        store: cli.store,
        content: cli.content,
        output: cli.output.map(OutputMode::from),
        width: cli.width,
    };
    let config = FolioConfig::discover(cli.config.as_deref())?.merge(flags);

    let store_path = config.store_path()?;
    tracing::debug!(path = %store_path.display(), "using preference store");
    let os = OsSystemTheme::new();
    let resolver = ThemeResolver::initialize(FileStore::new(store_path), &os);

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {
            let mut page = Document::mount(resolver, &os);
            print_page(&mut page, &config)?;
        }
        Command::Toggle => {
            let mut page = Document::mount(resolver, &os);
            page.toggle();
            print_page(&mut page, &config)?;
        }
        Command::Reset => {
            resolver.forget_user_choice(&os);
            println!("following system theme: {}", resolver.mode());
        }
        Command::Status { json } => {
            let preference = resolver.preference();
            if json {
                println!("{}", serde_json::to_string(&preference)?);
            } else {
                let source = match preference.source {
                    PreferenceSource::UserSet => "saved choice",
                    PreferenceSource::SystemDefault => "system default",
                };
                println!("{} ({})", preference.mode(), source);
            }
        }
        Command::Watch {
            interval_ms,
            max_polls,
        } => {
            let mut page = Document::mount(resolver, &os);
            watch(&mut page, &os, &config, Duration::from_millis(interval_ms), max_polls)?;
        }
    }
    Ok(())
}

fn build_renderer(config: &FolioConfig) -> Result<Renderer> {
    let width = config
        .width
        .or_else(|| terminal_size::terminal_size().map(|(w, _)| w.0 as usize))
        .unwrap_or(DEFAULT_WIDTH);
    Ok(Renderer::new(AdaptiveTheme::portfolio(), config.output_mode())?.with_width(width))
}

fn load_portfolio(config: &FolioConfig) -> Result<Portfolio> {
    match &config.content {
        Some(path) => Portfolio::from_path(path)
            .with_context(|| format!("loading portfolio from {}", path.display())),
        None => Ok(Portfolio::builtin()?),
    }
}

fn print_page(page: &mut Document<FileStore>, config: &FolioConfig) -> Result<()> {
    let renderer = build_renderer(config)?;
    let portfolio = load_portfolio(config)?;
    print!("{}", page.render(&renderer, &portfolio)?);
    Ok(())
}

fn watch(
    page: &mut Document<FileStore>,
    os: &OsSystemTheme,
    config: &FolioConfig,
    interval: Duration,
    max_polls: Option<u64>,
) -> Result<()> {
    let renderer = build_renderer(config)?;
    let portfolio = load_portfolio(config)?;
    let term = Term::stdout();
    os.poll();

    let mut polls = 0u64;
    loop {
        if page.take_dirty() {
            term.clear_screen().context("clearing terminal")?;
            print!("{}", page.render(&renderer, &portfolio)?);
        }
        if max_polls.is_some_and(|max| polls >= max) {
            return Ok(());
        }
        thread::sleep(interval);
        os.poll();
        polls += 1;
    }
}
