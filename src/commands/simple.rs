//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. The assistant proposes a word each
//! round; unvalidated words are confirmed by the player, who can reject
//! them so they are dropped from the wordlist.

use crate::config::Settings;
use crate::core::Bank;
use crate::game::Game;
use crate::output::formatters::{display_word, letter, rank_message};
use crate::output::typewriter::Printer;
use crate::scores::{ScoreBook, today};
use crate::solver::PlanError;
use crate::wordlists::{Dictionary, WordlistChanges};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

const BANNER: &str = r"
,-----.  ,--.
|  |) /_ |  | ,---.  ,---.  ,---.  ,---. ,--,--,--.
|  .-.  \|  || .-. |(  .-' (  .-' | .-. ||        |
|  '--' /|  |' '-' '.-'  `).-'  `)' '-' '|  |  |  |
`------' `--' `---' `----' `----'  `---' `--`--`--'";

const DIVIDER: &str = "🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸🌸";

/// How a single game ended
enum GameEnd {
    Finished,
    OutOfWords(PlanError),
    Quit,
}

/// Run the simple interactive CLI mode
///
/// Plays games until the player declines another, then writes the
/// wordlist changes and the score book.
///
/// # Errors
///
/// Returns an error if the wordlist or score book cannot be read or
/// written, or if there's an I/O error reading user input.
pub fn run_simple(settings: &Settings, bank: Option<String>) -> Result<()> {
    let printer = Printer::new(settings.fast);
    let mut dictionary = settings.load_dictionary()?;
    let mut book = settings.load_scores()?;
    let mut changes = WordlistChanges::default();
    let mut next_bank = bank;

    println!("{BANNER}");
    println!("{DIVIDER}\n");

    loop {
        let bank = match next_bank.take() {
            Some(text) => match Bank::new(&text) {
                Ok(bank) => {
                    printer.say(&format!("Bank: {}.", bank.label()))?;
                    bank
                }
                Err(e) => {
                    println!("{}", format!("Invalid bank: {e}").red());
                    continue;
                }
            },
            None => match ask_bank()? {
                Some(bank) => {
                    printer.say("Okay, let's play!")?;
                    bank
                }
                None => break,
            },
        };

        let mut game = Game::new(bank, settings.rotation);
        let end = play_game(settings, printer, &mut game, &dictionary, &mut book)?;

        let total = game.score();
        let game_changes = game.into_changes();
        dictionary.apply(&game_changes);
        changes.merge(game_changes);

        match end {
            GameEnd::Quit => break,
            GameEnd::OutOfWords(e) => {
                printer.say(&format!("\n{e}. Ending the game early."))?;
            }
            GameEnd::Finished => {}
        }

        printer.say(&format!("\n{DIVIDER}\n\nGame over! We scored {total} points."))?;
        let label = bank.label();
        let rank = book.record_game(&label, total, &today());
        let message = rank_message(rank, book.best_for(&label));
        if rank.is_high_score() {
            println!("{}", message.bright_green().bold());
        } else {
            println!("{message}");
        }

        if ask("Play again? (yes/no)", &["yes", "no"])?.as_deref() != Some("yes") {
            break;
        }
    }

    finish_session(settings, &changes, &book)?;
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn play_game(
    settings: &Settings,
    printer: Printer,
    game: &mut Game,
    dictionary: &Dictionary,
    book: &mut ScoreBook,
) -> Result<GameEnd> {
    let dictionary = dictionary.for_bank(game.bank());

    while !game.is_over() {
        printer.say(&format!(
            "---\nRound {}. Special letter: {}.\n",
            game.round() + 1,
            letter(game.special())
        ))?;

        let mut rejected = false;
        let proposal = loop {
            let proposal = match game.propose(&settings.engine, &dictionary) {
                Ok(p) => p,
                Err(e) => return Ok(GameEnd::OutOfWords(e)),
            };

            printer.say(&format!(
                "{}I play: {}{}",
                if rejected { "Okay, then instead " } else { "" },
                display_word(&proposal.word, &dictionary),
                if proposal.validated { ", a validated word!" } else { "" }
            ))?;
            if let Some(expected) = proposal.expected_total {
                println!("{}", format!("Expected score: {expected} points.").bright_black());
            }

            if proposal.validated {
                break proposal;
            }
            match ask("Is that valid? (yes/no/quit)", &["yes", "no", "quit"])?.as_deref() {
                Some("yes") => break proposal,
                Some("no") => {
                    game.reject(&proposal);
                    rejected = true;
                }
                _ => return Ok(GameEnd::Quit),
            }
        };

        let first = game.round() == 0;
        let special = game.special();
        let points = game.accept(&proposal);
        if book.record_word(&proposal.word, special, points) {
            println!("{}", "New word high score!".bright_yellow().bold());
        }

        printer.say(&format!(
            "{}We scored {points} {}points{}.",
            if proposal.validated { "" } else { "Great! " },
            if first { "" } else { "additional " },
            if first {
                String::new()
            } else {
                format!(", for a total of {} points", game.score())
            }
        ))?;
    }

    Ok(GameEnd::Finished)
}

fn finish_session(settings: &Settings, changes: &WordlistChanges, book: &ScoreBook) -> Result<()> {
    if settings.save_changes(changes)? {
        println!(
            "{}",
            format!(
                "Wordlist updated: {} validated, {} removed.",
                changes.validate.len(),
                changes.remove.len()
            )
            .green()
        );
    } else {
        println!("No changes to wordlist.");
    }
    settings.save_scores(book)?;
    Ok(())
}

/// Prompt for a bank until a valid one or `quit` is entered
fn ask_bank() -> Result<Option<Bank>> {
    loop {
        let Some(input) = get_user_input("What's the bank? (Center letter first)")? else {
            return Ok(None);
        };
        if input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match Bank::new(&input) {
            Ok(bank) => return Ok(Some(bank)),
            Err(_) => println!("Please enter seven unique letters, or \"quit\"."),
        }
    }
}

/// Prompt until one of `valid` is entered; `None` at end of input
fn ask(prompt: &str, valid: &[&str]) -> Result<Option<String>> {
    loop {
        let Some(input) = get_user_input(prompt)? else {
            return Ok(None);
        };
        let input = input.to_lowercase();
        if valid.contains(&input.as_str()) {
            return Ok(Some(input));
        }
        println!("Valid responses: {}.", valid.join(", "));
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}\n > ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
