//! Crossword Builder - CLI
//!
//! Generates crossword layouts from a word list and plays them in the terminal.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use crossword_builder::{
    commands::{
        BenchmarkConfig, GenerateConfig, add_word, generate, import_words, load_or_defaults,
        remove_word, run_benchmark,
    },
    core::Difficulty,
    layout::{LayoutConfig, MAX_WORDS, RANDOM_ATTEMPTS, RANDOM_FALLBACK_LIMIT},
    output::{print_benchmark_result, print_layout, print_word_list},
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "crossword",
    about = "Crossword layout generator with an interactive play mode",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (JSON); the embedded starter list is used while it is missing or empty
    #[arg(short = 'w', long, global = true, default_value = "words.json")]
    words: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(flatten)]
    layout: LayoutArgs,
}

/// Placement policy overrides
#[derive(Args)]
struct LayoutArgs {
    /// Words considered from the longest-first order
    #[arg(long, global = true, default_value_t = MAX_WORDS)]
    max_words: usize,

    /// Random placement tries per word when no crossing fits
    #[arg(long, global = true, default_value_t = RANDOM_ATTEMPTS)]
    random_attempts: usize,

    /// Allow random placement only while fewer than this many words are placed
    #[arg(long, global = true, default_value_t = RANDOM_FALLBACK_LIMIT)]
    fallback_limit: usize,
}

impl LayoutArgs {
    const fn to_config(&self) -> LayoutConfig {
        LayoutConfig::new(self.max_words, self.random_attempts, self.fallback_limit)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Seed for layouts and hints
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print one generated layout
    Generate {
        /// Seed for the random fallback placement
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the layout as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },

    /// Generate many seeded layouts and report placement statistics
    Benchmark {
        /// Number of layouts to generate
        #[arg(short = 'n', long, default_value = "1000")]
        runs: usize,

        /// Seed of the first run; run i uses seed + i
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },

    /// Manage the word list
    Words {
        #[command(subcommand)]
        action: WordsCommand,
    },
}

#[derive(Subcommand)]
enum WordsCommand {
    /// Show every word and clue
    List,

    /// Add a word with its clue
    Add {
        word: String,
        clue: String,

        /// easy, medium or hard
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,
    },

    /// Remove a word by id
    Remove { id: String },

    /// Append the words of a WORD|clue|difficulty text file
    Import { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with grid output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = &cli.log_level;
            EnvFilter::new(format!("crossword_builder={level},crossword={level}"))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting crossword v{}", env!("CARGO_PKG_VERSION"));

    let layout = cli.layout.to_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play_command(&cli.words, layout, seed),
        Commands::Generate { seed, json } => run_generate_command(&cli.words, layout, seed, json),
        Commands::Benchmark { runs, seed } => run_benchmark_command(&cli.words, layout, runs, seed),
        Commands::Words { action } => run_words_command(&cli.words, action),
    }
}

fn run_generate_command(
    path: &Path,
    layout: LayoutConfig,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let words = load_or_defaults(path)?;
    let result = generate(words.entries(), &GenerateConfig::new(seed, layout));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_layout(&result);
    }
    Ok(())
}

fn run_benchmark_command(path: &Path, layout: LayoutConfig, runs: usize, seed: u64) -> Result<()> {
    let words = load_or_defaults(path)?;
    println!(
        "Generating {runs} layouts for {} words (seeds {seed}..)...",
        words.len()
    );

    let config = BenchmarkConfig {
        layout,
        show_progress: true,
        ..BenchmarkConfig::new(runs, seed)
    };
    let result = run_benchmark(words.entries(), &config);
    print_benchmark_result(&result);
    Ok(())
}

fn run_words_command(path: &Path, action: WordsCommand) -> Result<()> {
    match action {
        WordsCommand::List => {
            let list = load_or_defaults(path)?;
            print_word_list(&list);
        }
        WordsCommand::Add {
            word,
            clue,
            difficulty,
        } => {
            let entry = add_word(path, &word, &clue, difficulty)?;
            println!("Added {} [{}] to {}", entry.text, entry.id, path.display());
        }
        WordsCommand::Remove { id } => {
            if remove_word(path, &id)? {
                println!("Removed [{id}] from {}", path.display());
            } else {
                anyhow::bail!("no word with id '{id}' in {}", path.display());
            }
        }
        WordsCommand::Import { file } => {
            let count = import_words(path, &file)?;
            println!("Imported {count} words from {} into {}", file.display(), path.display());
        }
    }
    Ok(())
}

fn run_play_command(path: &Path, layout: LayoutConfig, seed: Option<u64>) -> Result<()> {
    use crossword_builder::interactive::{App, run_tui};

    let words = load_or_defaults(path)?;
    let app = App::new(words.entries().to_vec(), layout, seed);
    run_tui(app)
}
