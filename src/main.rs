use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use em::{Config, EmError, Request, SystemClipboard};

#[derive(Parser)]
#[command(name = "em", version)]
#[command(about = "Emoji your friends and colleagues from the comfort of your command line", long_about = None)]
struct Cli {
    /// Text to convert to emoji
    name: Vec<String>,
    /// Search for emoji
    #[arg(short, long)]
    search: bool,
    /// Get a random emoji
    #[arg(short, long)]
    random: bool,
    /// Does not copy emoji to clipboard
    #[arg(long)]
    no_copy: bool,
    /// Custom emoji file to use instead of ~/.emojis.json
    #[arg(long, value_name = "PATH")]
    custom_file: Option<PathBuf>,
    /// Verbose logging and full error output
    #[arg(long, hide = true)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let diagnostics = cli.debug;
    init_logging(diagnostics);

    match run(cli) {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(err) => report(&err, diagnostics),
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = Config::init(cli.custom_file, cli.debug)?;
    let request = Request::new(cli.name, cli.search, cli.random, cli.no_copy);

    let mut clipboard = SystemClipboard::new();
    em::run(&request, &config, &mut clipboard, &mut rand::thread_rng())
}

fn init_logging(diagnostics: bool) {
    let level = if diagnostics { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn report(err: &anyhow::Error, diagnostics: bool) -> ExitCode {
    let user_error = err.downcast_ref::<EmError>();

    match (user_error, diagnostics) {
        (_, true) => eprintln!("{:?}", err),
        (Some(user_error), false) => eprintln!("{}", user_error),
        (None, false) => eprintln!("Error: {:#}", err),
    }

    if user_error.is_some() {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}
