//! Simulate command
//!
//! Self-plays banks to the end and compares engines. Banks are given on
//! the command line or drawn from the validated pangrams in the wordlist.

use crate::core::{BANK_SIZE, Bank, RotationPolicy};
use crate::game::{SimulationResult, simulate};
use crate::solver::Engine;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationSummary {
    pub engine: &'static str,
    pub policy: RotationPolicy,
    pub games: Vec<SimulationResult>,
    pub average: f64,
    pub best: Option<(Bank, u32)>,
    pub worst: Option<(Bank, u32)>,
    /// Games that ran out of words before the last round
    pub incomplete: usize,
    pub duration: Duration,
}

/// Draw up to `count` distinct banks from the validated pangrams
///
/// Each bank uses one pangram's letters with a randomly chosen center. The
/// same `seed` always draws the same banks.
#[must_use]
pub fn random_banks(dictionary: &Dictionary, count: usize, seed: Option<u64>) -> Vec<Bank> {
    let letter_sets: Vec<Vec<u8>> = dictionary
        .iter()
        .filter(|&(_, validated)| validated)
        .map(|(word, _)| word.bytes().collect::<BTreeSet<u8>>())
        .filter(|letters| letters.len() == BANK_SIZE)
        .map(|letters| letters.into_iter().collect())
        .collect::<BTreeSet<Vec<u8>>>()
        .into_iter()
        .collect();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let chosen: Vec<&Vec<u8>> = letter_sets.choose_multiple(&mut rng, count).collect();
    chosen
        .into_iter()
        .filter_map(|letters| {
            let center = letters[rng.random_range(0..letters.len())];
            let text: String = std::iter::once(center)
                .chain(letters.iter().copied().filter(|&b| b != center))
                .map(char::from)
                .collect();
            Bank::new(&text).ok()
        })
        .collect()
}

/// Self-play every bank with `engine`
///
/// Progress is drawn on stderr when `show_progress` is set.
pub fn run_simulations<E: Engine>(
    banks: &[Bank],
    dictionary: &Dictionary,
    engine: &E,
    policy: RotationPolicy,
    show_progress: bool,
) -> SimulationSummary {
    let pb = if show_progress {
        ProgressBar::new(banks.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut games = Vec::with_capacity(banks.len());

    for bank in banks {
        pb.set_message(bank.label());
        let filtered = dictionary.for_bank(bank);
        games.push(simulate(*bank, &filtered, engine, policy));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total: u32 = games.iter().map(|g| g.total).sum();
    let average = if games.is_empty() {
        0.0
    } else {
        f64::from(total) / games.len() as f64
    };
    let best = games
        .iter()
        .max_by_key(|g| g.total)
        .map(|g| (g.bank, g.total));
    let worst = games
        .iter()
        .min_by_key(|g| g.total)
        .map(|g| (g.bank, g.total));
    let incomplete = games.iter().filter(|g| !g.completed()).count();

    SimulationSummary {
        engine: engine.name(),
        policy,
        games,
        average,
        best,
        worst,
        incomplete,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ROUNDS;
    use crate::solver::{GreedyEngine, Planner};

    fn dictionary() -> Dictionary {
        [
            ("tensioner", true),
            ("orients", true),
            ("stonier", true),
            ("snorter", true),
            ("interior", true),
            ("terrine", true),
            ("sorties", true),
            ("rooster", true),
            ("resort", true),
            ("retire", true),
            ("senior", true),
            ("rotten", true),
            ("tinier", true),
            ("rinse", true),
            ("roost", true),
            ("snore", true),
            ("tries", true),
            ("riot", true),
            ("trio", true),
            ("torn", true),
            ("sore", true),
            ("rein", true),
            ("rent", true),
            ("tire", true),
            ("painter", true),
            ("pertain", false),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn random_banks_come_from_validated_pangrams() {
        let dict = dictionary();
        let banks = random_banks(&dict, 10, Some(7));

        // tensioner, orients and stonier share one letter set; painter is the other
        assert_eq!(banks.len(), 2);
        let mut sets: Vec<Vec<u8>> = banks
            .iter()
            .map(|b| {
                let mut letters = b.letters().to_vec();
                letters.sort_unstable();
                letters
            })
            .collect();
        sets.sort();
        assert_eq!(sets, [b"aeinprt".to_vec(), b"einorst".to_vec()]);
    }

    #[test]
    fn random_banks_are_seeded() {
        let dict = dictionary();
        assert_eq!(random_banks(&dict, 1, Some(42)), random_banks(&dict, 1, Some(42)));
        assert_eq!(random_banks(&dict, 1, Some(42)).len(), 1);
    }

    #[test]
    fn simulations_summarize() {
        let dict = dictionary();
        let banks = [Bank::new("reinost").unwrap()];
        let summary = run_simulations(&banks, &dict, &Planner, RotationPolicy::Advance, false);

        assert_eq!(summary.engine, "better");
        assert_eq!(summary.games.len(), 1);
        assert_eq!(summary.games[0].turns.len(), ROUNDS);
        assert_eq!(summary.incomplete, 0);
        assert_eq!(summary.best, summary.worst);
        assert!((summary.average - f64::from(summary.games[0].total)).abs() < f64::EPSILON);
    }

    #[test]
    fn greedy_simulation_completes() {
        let dict = dictionary();
        let banks = [Bank::new("reinost").unwrap()];
        let summary = run_simulations(&banks, &dict, &GreedyEngine, RotationPolicy::Fixed, false);
        assert_eq!(summary.engine, "greedy");
        assert_eq!(summary.policy, RotationPolicy::Fixed);
        assert_eq!(summary.incomplete, 0);
        assert_eq!(summary.games[0].turns.len(), ROUNDS);
    }

    #[test]
    fn empty_run() {
        let summary =
            run_simulations(&[], &dictionary(), &GreedyEngine, RotationPolicy::Advance, false);
        assert!(summary.games.is_empty());
        assert_eq!(summary.best, None);
        assert!(summary.average.abs() < f64::EPSILON);
    }
}
