//! Display functions for command results

use super::formatters::{create_progress_bar, display_word, format_bank, letter};
use crate::commands::{
    PlanResult, PruneResult, ScoreResult, SearchResult, SimulationSummary, StatsResult,
};
use crate::core::PETAL_COUNT;
use crate::wordlists::Dictionary;
use colored::Colorize;

/// Print the planner's allocation for a round
pub fn print_plan(result: &PlanResult, dictionary: &Dictionary) {
    let plan = &result.plan;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Bank: {}   Round {}   Special letter: {}",
        format_bank(&result.bank).bright_yellow().bold(),
        plan.round + 1,
        letter(plan.special).to_string().bright_magenta().bold()
    );
    println!(
        "Rotation: {}   Candidates: {}",
        result.policy.name(),
        result.candidates
    );
    println!("{}", "─".repeat(60).cyan());

    for i in 0..PETAL_COUNT {
        let petal = result.bank.petals()[i];
        let bucket = &plan.buckets[i];
        let header = format!(
            "{} ({}/{} rounds)",
            letter(petal),
            bucket.len(),
            plan.still_needed[i]
        );
        let header = if petal == plan.special {
            header.bright_magenta().bold()
        } else if bucket.len() < plan.still_needed[i] {
            header.red()
        } else {
            header.normal()
        };
        println!("\n{header}");

        for a in bucket {
            println!(
                "   {:>3}  {}",
                a.points.to_string().bright_yellow(),
                display_word(&a.word, dictionary)
            );
        }
    }

    println!();
    match plan.next() {
        Some(next) => println!(
            "📊 Play now: {} for {} points",
            display_word(&next.word, dictionary),
            next.points.to_string().bright_yellow().bold()
        ),
        None => println!(
            "{}",
            format!("❌ No legal word left for special letter {}", letter(plan.special)).red()
        ),
    }
    println!(
        "   Expected score: {} points",
        plan.expected_total.to_string().bright_green().bold()
    );
}

/// Print a word's score under each petal
pub fn print_score_result(result: &ScoreResult, dictionary: &Dictionary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} in {}",
        "SCORE:".bright_cyan().bold(),
        display_word(&result.word, dictionary),
        format_bank(&result.bank).bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Status:       {}", result.status.description());
    println!(
        "   Legal:        {}",
        if result.legal { "yes".green() } else { "no".red() }
    );
    println!(
        "   Pangram:      {}",
        if result.pangram { "yes 🌸".green() } else { "no".normal() }
    );
    println!("   Best anywhere: {} points", result.max_possible);

    let best = result.best_letter().map(|(_, p)| p).unwrap_or_default();
    println!("\n📈 {}", "By special letter:".bright_cyan().bold());
    for &(petal, points) in &result.by_letter {
        let bar = create_progress_bar(f64::from(points), f64::from(best), 30);
        println!("   {}: {} {points:3}", letter(petal), bar.green());
    }
}

/// Print a simulation summary
pub fn print_simulation(summary: &SimulationSummary, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Engine:           {}", summary.engine);
    println!("   Rotation:         {}", summary.policy.name());
    println!("   Banks played:     {}", summary.games.len());
    println!(
        "   Average score:    {}",
        format!("{:.1}", summary.average).bright_yellow().bold()
    );
    if let Some((bank, points)) = summary.best {
        println!(
            "   Best:             {} {}",
            bank.label(),
            points.to_string().green()
        );
    }
    if let Some((bank, points)) = summary.worst {
        println!(
            "   Worst:            {} {}",
            bank.label(),
            points.to_string().yellow()
        );
    }
    if summary.incomplete > 0 {
        println!(
            "   Ran out of words: {}",
            summary.incomplete.to_string().red()
        );
    }
    println!("   Time taken:       {:.2}s", summary.duration.as_secs_f64());

    let top = summary.best.map_or(0, |(_, p)| p);
    println!("\n📈 {}", "Games:".bright_cyan().bold());
    for game in &summary.games {
        let bar = create_progress_bar(f64::from(game.total), f64::from(top), 30);
        println!(
            "   {} {} {:4}{}",
            game.bank.label(),
            bar.green(),
            game.total,
            if game.completed() { "" } else { " (ended early)" }
        );

        if verbose {
            for turn in &game.turns {
                println!(
                    "      {:>2}. {} {:<12} {:3}",
                    turn.round + 1,
                    letter(turn.letter),
                    turn.word.to_uppercase(),
                    turn.points
                );
            }
        }
    }
}

/// Print wordlist and score book statistics
pub fn print_stats(result: &StatsResult, dictionary: &Dictionary) {
    let d = &result.dictionary;

    println!("\n📊 {}", "Wordlist:".bright_cyan().bold());
    println!("   Total words:        {}", d.total);
    println!(
        "   Validated words:    {} ({:.2}%)",
        d.validated,
        result.validated_pct()
    );
    println!("   Total pangrams:     {}", d.pangrams);
    println!(
        "   Validated pangrams: {} ({:.2}%)",
        d.validated_pangrams,
        result.validated_pangram_pct()
    );
    if let Some(word) = &d.longest_validated {
        println!(
            "   Longest validated:  {} ({} letters)",
            display_word(word, dictionary),
            word.len()
        );
    }

    println!("\n🏆 {}", "Scores:".bright_cyan().bold());
    if let Some(best) = &result.best_word {
        println!(
            "   Highest word score: {} ({}), {} points",
            display_word(&best.word, dictionary),
            best.letter.to_ascii_uppercase(),
            best.points
        );
    }
    println!("   Banks played:       {}", result.banks_played);

    if result.top.is_empty() {
        return;
    }
    let width = result
        .top
        .iter()
        .map(|g| g.points.to_string().len())
        .max()
        .unwrap_or(1);
    println!("\n   Top scores:");
    for (i, game) in result.top.iter().enumerate() {
        println!(
            "   {:>2}. {}: {:>width$} points, {}",
            i + 1,
            game.bank.bright_white().bold(),
            game.points,
            game.date.bright_black()
        );
    }
}

/// Print search results
pub fn print_search(result: &SearchResult, dictionary: &Dictionary) {
    let width = result.entries.iter().map(|(w, _)| w.len()).max().unwrap_or(0) + 2;

    println!("Search results:");
    for (word, status) in &result.entries {
        let shown = display_word(word, dictionary);
        // Pad on the visible text; the colored form carries escape codes
        let pad = width.saturating_sub(word.len());
        println!("{shown}{}: {}", " ".repeat(pad), status.description());
    }
}

/// Print the outcome of pruning
pub fn print_prune(result: &PruneResult) {
    if result.removed.is_empty() {
        println!(
            "No words below {} points. {} words kept.",
            result.threshold, result.remaining
        );
        return;
    }

    println!(
        "{} word{} can never reach {} points:",
        result.removed.len(),
        if result.removed.len() == 1 { "" } else { "s" },
        result.threshold
    );
    for word in &result.removed {
        println!("   - {}", word.to_uppercase().red());
    }
    println!("{} words kept.", result.remaining);
}
