use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wordbook::{
    ansi::{render_lookup, AnsiOptions},
    Config, Notification, OutputFormat, Wordbook,
};

mod ui;

#[derive(Parser)]
#[command(name = "wordbook", version, about = "Look up words and keep a personal word list")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a word and print its meaning, usage, synonyms and antonyms
    Lookup {
        word: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Add a word to the saved word list
    Add { word: String },
    /// Print the saved word list
    List,
    /// Write the default config file
    InitConfig,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let interactive = cli.command.is_none();
    let log_file = interactive.then(|| config.log_file_path());
    init_logging(cli.verbose, log_file.as_deref())?;

    match cli.command {
        None => {
            let wordbook = Wordbook::open(&config).context("Failed to open word list")?;
            ui::run(wordbook, config.theme.clone()).await
        }
        Some(Command::Lookup {
            word,
            format,
            no_color,
        }) => {
            let mut wordbook = Wordbook::open(&config).context("Failed to open word list")?;
            let lookup = match wordbook.search(&word).await {
                Ok(lookup) => lookup,
                Err(err) => exit_with(&err.notification()),
            };

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lookup)?),
                OutputFormat::Text => {
                    let options = AnsiOptions {
                        color: !no_color && std::io::stdout().is_terminal(),
                        theme: config.theme.clone(),
                        ..AnsiOptions::default()
                    };
                    print!("{}", render_lookup(&lookup, &options)?);
                }
            }
            Ok(())
        }
        Some(Command::Add { word }) => {
            let mut wordbook = Wordbook::open(&config).context("Failed to open word list")?;
            match wordbook.add_word(&word) {
                Ok(notification) => println!("{}", notification.message),
                Err(err) => exit_with(&err.notification()),
            }
            Ok(())
        }
        Some(Command::List) => {
            let wordbook = Wordbook::open(&config).context("Failed to open word list")?;
            let words = match wordbook.saved_words() {
                Ok(words) => words,
                Err(err) => exit_with(&err.notification()),
            };
            for word in words {
                println!("{word}");
            }
            Ok(())
        }
        Some(Command::InitConfig) => {
            let written = match &cli.config {
                Some(path) => {
                    Config::default().save_to(path)?;
                    Some(path.clone())
                }
                None => Config::init_default()?,
            };
            match written {
                Some(path) => println!("Wrote default config to {}", path.display()),
                None => anyhow::bail!("Could not determine a config directory"),
            }
            Ok(())
        }
    }
}

fn exit_with(notification: &Notification) -> ! {
    eprintln!("{}: {}", notification.title, notification.message);
    std::process::exit(1);
}

/// Interactive mode logs to a file so output does not tear the screen;
/// commands log to stderr.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let default_filter = match verbose {
        0 => "warn",
        1 => "wordbook=debug,warn",
        _ => "wordbook=trace,info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
