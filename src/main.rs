//! Blossom Solver - CLI
//!
//! Word game assistant with TUI and CLI modes, a round-allocation planner,
//! and wordlist and score book maintenance.

use anyhow::{Context, Result, bail};
use blossom_solver::{
    commands::{
        DEFAULT_PRUNE_THRESHOLD, PlanConfig, TOP_SCORES, collect_stats, plan_bank,
        prune_weak_words, random_banks, run_simple, run_simulations, score_in_bank, search_words,
    },
    config::Settings,
    core::{Bank, ROUNDS},
    output::{
        print_plan, print_prune, print_score_result, print_search, print_simulation, print_stats,
    },
    scores::DEFAULT_SCORES,
    wordlists::DEFAULT_WORDLIST,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "blossom_solver",
    about = "Blossom word game assistant that plans words across all twelve rounds",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist file (`word!` validated, `word.` unvalidated)
    #[arg(short = 'w', long, global = true, env = "BLOSSOM_WORDLIST", default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Score book file
    #[arg(long, global = true, env = "BLOSSOM_SCORES", default_value = DEFAULT_SCORES)]
    scores: PathBuf,

    /// Engine: better (default, plans all rounds) or greedy
    #[arg(short, long, global = true, default_value = "better")]
    engine: String,

    /// Special-letter rotation: advance (default) or fixed
    #[arg(short, long, global = true, default_value = "advance")]
    rotation: String,

    /// Print text at once instead of typing it out
    #[arg(long, global = true)]
    fast: bool,

    /// Commit and push wordlist and score updates with git
    #[arg(long, global = true)]
    git: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Bank to start with, center letter first
        bank: Option<String>,
    },

    /// Simple CLI mode (line-based prompts without TUI)
    Simple {
        /// Bank to start with, center letter first
        bank: Option<String>,
    },

    /// Show the planner's allocation of words to the remaining rounds
    Plan {
        /// Bank, center letter first
        bank: String,

        /// Round number, 1-based
        #[arg(long, default_value = "1")]
        round: usize,

        /// Special letter (default: the rotation's letter for the round)
        #[arg(short, long)]
        letter: Option<char>,

        /// Points scored so far
        #[arg(short, long, default_value = "0")]
        score: u32,

        /// Words already played
        #[arg(short, long, value_delimiter = ',')]
        played: Vec<String>,
    },

    /// Score a word in a bank under every special letter
    Score {
        /// Bank, center letter first
        bank: String,

        /// Word to score
        word: String,
    },

    /// Self-play banks and report the scores
    Simulate {
        /// Banks to play, center letter first
        banks: Vec<String>,

        /// Also play N banks drawn from validated pangrams
        #[arg(short = 'n', long)]
        random: Option<usize>,

        /// Seed for drawing random banks
        #[arg(long)]
        seed: Option<u64>,

        /// Show every word played
        #[arg(short, long)]
        verbose: bool,
    },

    /// Wordlist and score book statistics
    Stats {
        /// Number of top scores to list
        #[arg(short = 'n', long, default_value_t = TOP_SCORES)]
        top: usize,
    },

    /// Look words up in the wordlist
    Search {
        /// Words to look up (comma or space separated)
        #[arg(required = true)]
        words: Vec<String>,

        /// Add or validate every word found missing or unvalidated
        #[arg(long)]
        add: bool,
    },

    /// Remove words that can never reach the threshold score
    Prune {
        /// Minimum best-case score to keep a word
        #[arg(short, long, default_value_t = DEFAULT_PRUNE_THRESHOLD)]
        threshold: u32,

        /// List the words without changing the wordlist
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings {
        wordlist: cli.wordlist,
        scores: cli.scores,
        fast: cli.fast,
        git: cli.git,
        ..Settings::default()
    }
    .with_engine(&cli.engine)?
    .with_rotation(&cli.rotation)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { bank: None });

    match command {
        Commands::Play { bank } => run_play_command(settings, bank),
        Commands::Simple { bank } => run_simple(&settings, bank),
        Commands::Plan {
            bank,
            round,
            letter,
            score,
            played,
        } => {
            if !(1..=ROUNDS).contains(&round) {
                bail!("Round must be between 1 and {ROUNDS}");
            }
            let config = PlanConfig {
                bank,
                round: round - 1,
                letter,
                score,
                played,
            };
            run_plan_command(&settings, &config)
        }
        Commands::Score { bank, word } => run_score_command(&settings, &bank, &word),
        Commands::Simulate {
            banks,
            random,
            seed,
            verbose,
        } => run_simulate_command(&settings, &banks, random, seed, verbose),
        Commands::Stats { top } => run_stats_command(&settings, top),
        Commands::Search { words, add } => run_search_command(&settings, &words, add),
        Commands::Prune { threshold, dry_run } => run_prune_command(&settings, threshold, dry_run),
    }
}

fn run_play_command(settings: Settings, bank: Option<String>) -> Result<()> {
    use blossom_solver::interactive::{App, run_tui};

    let dictionary = settings.load_dictionary()?;
    let book = settings.load_scores()?;
    let mut app = App::new(settings, dictionary, book);

    if let Some(text) = bank {
        let bank = Bank::new(&text).with_context(|| format!("Invalid bank '{text}'"))?;
        app.start_game(bank);
    }

    run_tui(app)
}

fn run_plan_command(settings: &Settings, config: &PlanConfig) -> Result<()> {
    let dictionary = settings.load_dictionary()?;
    let result = plan_bank(config, &dictionary, settings.rotation).map_err(|e| anyhow::anyhow!(e))?;
    print_plan(&result, &dictionary);
    Ok(())
}

fn run_score_command(settings: &Settings, bank: &str, word: &str) -> Result<()> {
    let dictionary = settings.load_dictionary()?;
    let result = score_in_bank(bank, word, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result, &dictionary);
    Ok(())
}

fn run_simulate_command(
    settings: &Settings,
    bank_args: &[String],
    random: Option<usize>,
    seed: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let dictionary = settings.load_dictionary()?;

    let mut banks = bank_args
        .iter()
        .map(|b| Bank::new(b).with_context(|| format!("Invalid bank '{b}'")))
        .collect::<Result<Vec<_>>>()?;
    if let Some(count) = random {
        let drawn = random_banks(&dictionary, count, seed);
        if drawn.len() < count {
            println!(
                "Only {} distinct validated pangram letter sets available.",
                drawn.len()
            );
        }
        banks.extend(drawn);
    }
    if banks.is_empty() {
        bail!("No banks to simulate; give banks or --random N");
    }

    println!(
        "Simulating {} bank{} with the {} engine...",
        banks.len(),
        if banks.len() == 1 { "" } else { "s" },
        blossom_solver::solver::Engine::name(&settings.engine)
    );
    let summary = run_simulations(&banks, &dictionary, &settings.engine, settings.rotation, true);
    print_simulation(&summary, verbose);
    Ok(())
}

fn run_stats_command(settings: &Settings, top: usize) -> Result<()> {
    let dictionary = settings.load_dictionary()?;
    let book = settings.load_scores()?;
    print_stats(&collect_stats(&dictionary, &book, top), &dictionary);
    Ok(())
}

fn run_search_command(settings: &Settings, words: &[String], add: bool) -> Result<()> {
    let dictionary = settings.load_dictionary()?;
    let result = search_words(words, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_search(&result, &dictionary);

    if add && result.needs_update() {
        let changes = result.validate_all();
        settings.save_changes(&changes)?;
        println!("Validated {} word(s).", changes.validate.len());
    }
    Ok(())
}

fn run_prune_command(settings: &Settings, threshold: u32, dry_run: bool) -> Result<()> {
    let dictionary = settings.load_dictionary()?;
    let result = prune_weak_words(&dictionary, threshold);
    print_prune(&result);

    if !dry_run && !result.removed.is_empty() {
        settings.save_changes(&result.changes())?;
        println!("Wordlist updated.");
    }
    Ok(())
}
