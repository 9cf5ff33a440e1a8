// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, build the store, dispatch to `ui`.
// - Returns `anyhow::Result` so unexpected I/O errors end the process with
//   a message and a non-zero exit code.

use clap::{Parser, Subcommand};
use latin_quiz::quiz::Game;
use latin_quiz::store::{QuoteStore, DEFAULT_DATA_FILE};
use latin_quiz::ui::{self, LinePrompter, Prompter, TerminalPrompter};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "latin-quiz",
    version,
    about = "A simple CLI game for learning Latin quotes.",
    arg_required_else_help = true
)]
struct Cli {
    /// JSON file holding the quote collection
    #[arg(long, global = true, env = "LATIN_QUIZ_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the Latin quiz game
    Play {
        /// Number of questions to ask
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        rounds: i64,

        /// Seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Add a new quote to the database
    Add,

    /// List all quotes in the database
    List,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the quiz on stdout.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("latin_quiz=warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();
    let store = QuoteStore::new(cli.data_file);
    let mut prompter = prompter();
    let mut out = io::stdout();

    match cli.command {
        Commands::Play { rounds, seed } => {
            // An empty database is reported by `ui::play` itself and still
            // exits with status 0.
            let styled = out.is_terminal();
            ui::play(&store, &mut Game::seeded(seed), prompter.as_mut(), &mut out, rounds, styled)?;
        }
        Commands::Add => {
            ui::add(&store, prompter.as_mut(), &mut out)?;
        }
        Commands::List => ui::list(&store, &mut out)?,
    }
    Ok(())
}

/// Interactive prompts on a terminal; plain line reads when stdin is piped.
fn prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}
