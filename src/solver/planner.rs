//! Round-allocation planner
//!
//! Always playing the single best word for the current special letter burns
//! the strongest words early and leaves later rounds with scraps. Instead,
//! each round the planner allocates words to *all* remaining rounds at once
//! and commits only to the word for the current one:
//!
//! 1. Count how many of the remaining rounds each petal will be special in.
//! 2. Score every unplayed word under every petal.
//! 3. Walk the (petal, word) pairs from highest score down, giving a word to
//!    a petal while that petal still has open rounds and the word has not
//!    been given to any petal yet.
//! 4. Return the first word given to the current special letter.
//!
//! This is first-fit greedy, not an optimal assignment. The next round
//! re-plans from scratch with the played word removed.

use super::engine::{Engine, PlanError, RoundContext, Suggestion};
use crate::core::{PETAL_COUNT, ROUNDS, is_legal, score_word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;

/// A word allotted to a petal by the planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub word: String,
    pub letter: u8,
    pub points: u32,
}

/// Allocation of words to the remaining rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub round: usize,
    pub special: u8,
    /// Rounds left per petal, indexed like `bank.petals()`
    pub still_needed: [usize; PETAL_COUNT],
    /// Words allotted per petal in allocation order, indexed like
    /// `bank.petals()`
    pub buckets: [Vec<Assignment>; PETAL_COUNT],
    special_index: usize,
    /// Score so far plus the points of every allotted word
    pub expected_total: u32,
}

impl Plan {
    /// Word to play this round
    #[must_use]
    pub fn next(&self) -> Option<&Assignment> {
        self.buckets[self.special_index].first()
    }

    /// Number of words allotted across all petals
    #[must_use]
    pub fn allotted(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Petals whose bucket came up short of the rounds they need
    pub fn short_petals(&self) -> impl Iterator<Item = usize> + '_ {
        (0..PETAL_COUNT).filter(|&i| self.buckets[i].len() < self.still_needed[i])
    }
}

/// Build the full allocation for the round described by `ctx`
///
/// # Errors
/// Returns `PlanError::GameOver` once all rounds are played and
/// `PlanError::NotAPetal` if the special letter is the center or outside
/// the bank. A short or empty bucket is not an error here; see
/// [`Planner::suggest`].
pub fn plan_round(ctx: &RoundContext<'_>) -> Result<Plan, PlanError> {
    if ctx.round >= ROUNDS {
        return Err(PlanError::GameOver { round: ctx.round });
    }
    let special_index = ctx
        .bank
        .petal_index(ctx.special)
        .ok_or(PlanError::NotAPetal(char::from(ctx.special)))?;

    let still_needed = ctx.policy.still_needed(ctx.bank, ctx.round, ctx.special);
    let petals = ctx.bank.petals();

    let played: FxHashSet<&str> = ctx.played.iter().map(String::as_str).collect();
    let words: Vec<&str> = ctx
        .dictionary
        .words()
        .filter(|w| is_legal(ctx.bank, w) && !played.contains(w))
        .collect();

    // (points, word index, petal index); ties fall back to dictionary order
    // then petal order, so the walk is deterministic
    let mut candidates: Vec<(u32, usize, usize)> = words
        .par_iter()
        .enumerate()
        .flat_map_iter(|(wi, word)| {
            (0..PETAL_COUNT).map(move |pi| (score_word(ctx.bank, petals[pi], word), wi, pi))
        })
        .collect();
    candidates.par_sort_unstable_by_key(|&(points, wi, pi)| (Reverse(points), wi, pi));

    let slots = ROUNDS - ctx.round;
    let mut buckets: [Vec<Assignment>; PETAL_COUNT] = Default::default();
    let mut used: FxHashSet<usize> = FxHashSet::default();
    let mut allotted = 0;

    for (points, wi, pi) in candidates {
        if allotted == slots {
            break;
        }
        if buckets[pi].len() < still_needed[pi] && used.insert(wi) {
            buckets[pi].push(Assignment {
                word: words[wi].to_string(),
                letter: petals[pi],
                points,
            });
            allotted += 1;
        }
    }

    let expected_total = ctx.score
        + buckets
            .iter()
            .flatten()
            .map(|a| a.points)
            .sum::<u32>();

    Ok(Plan {
        round: ctx.round,
        special: ctx.special,
        still_needed,
        buckets,
        special_index,
        expected_total,
    })
}

/// Round-allocation ("better") engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Planner;

impl Engine for Planner {
    fn name(&self) -> &'static str {
        "better"
    }

    fn suggest(&self, ctx: &RoundContext<'_>) -> Result<Suggestion, PlanError> {
        let plan = plan_round(ctx)?;
        let next = plan.next().ok_or(PlanError::NoWordAvailable {
            letter: char::from(ctx.special),
        })?;

        Ok(Suggestion {
            word: next.word.clone(),
            points: next.points,
            expected_total: Some(plan.expected_total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bank, RotationPolicy, score_word};
    use crate::wordlists::Dictionary;

    fn bank() -> Bank {
        Bank::new("reinost").unwrap()
    }

    fn dictionary() -> Dictionary {
        [
            "tensioner", "orients", "stonier", "snorter", "interior", "terrine", "sorties",
            "rooster", "resort", "retire", "senior", "rotten", "tinier", "rinse", "roost",
            "snore", "tries", "riot", "trio", "torn", "sore", "rein", "rent", "tire",
        ]
        .into_iter()
        .map(|w| (w, true))
        .collect()
    }

    fn ctx<'a>(
        bank: &'a Bank,
        dictionary: &'a Dictionary,
        played: &'a [String],
        round: usize,
        special: u8,
    ) -> RoundContext<'a> {
        RoundContext {
            bank,
            dictionary,
            played,
            round,
            special,
            score: 0,
            policy: RotationPolicy::Advance,
        }
    }

    #[test]
    fn plan_fills_every_round() {
        let bank = bank();
        let dict = dictionary();
        let plan = plan_round(&ctx(&bank, &dict, &[], 0, b'e')).unwrap();

        assert_eq!(plan.allotted(), ROUNDS);
        assert_eq!(plan.still_needed, [2; PETAL_COUNT]);
        for (i, bucket) in plan.buckets.iter().enumerate() {
            assert_eq!(bucket.len(), 2, "petal {i}");
            for a in bucket {
                assert_eq!(a.letter, bank.petals()[i]);
                assert_eq!(a.points, score_word(&bank, a.letter, &a.word));
            }
        }
        assert_eq!(plan.short_petals().count(), 0);
    }

    #[test]
    fn plan_uses_each_word_once() {
        let bank = bank();
        let dict = dictionary();
        let plan = plan_round(&ctx(&bank, &dict, &[], 0, b'e')).unwrap();

        let words: Vec<&str> = plan.buckets.iter().flatten().map(|a| a.word.as_str()).collect();
        let unique: FxHashSet<&str> = words.iter().copied().collect();
        assert_eq!(words.len(), unique.len());
    }

    #[test]
    fn plan_reserves_best_word_for_its_letter() {
        let bank = bank();
        let dict: Dictionary = [("rooster", true), ("riot", true), ("trio", true)]
            .into_iter()
            .collect();

        // Rooster scores best under O (two Os), so on round 0 with E special
        // the planner keeps it for O instead of spending it now
        let plan = plan_round(&ctx(&bank, &dict, &[], 0, b'e')).unwrap();
        let o = bank.petal_index(b'o').unwrap();
        assert_eq!(plan.buckets[o][0].word, "rooster");
        assert_eq!(plan.buckets[o][0].points, 22);
        assert_ne!(plan.next().map(|a| a.word.as_str()), Some("rooster"));

        let on_o = Planner.suggest(&ctx(&bank, &dict, &[], 0, b'o')).unwrap();
        assert_eq!(on_o.word, "rooster");
    }

    #[test]
    fn expected_total_adds_score_so_far() {
        let bank = bank();
        let dict = dictionary();
        let mut c = ctx(&bank, &dict, &[], 0, b'e');
        let base = plan_round(&c).unwrap().expected_total;
        c.score = 40;
        assert_eq!(plan_round(&c).unwrap().expected_total, base + 40);
    }

    #[test]
    fn suggestion_never_played_and_in_dictionary() {
        let bank = bank();
        let dict = dictionary();
        let mut played: Vec<String> = Vec::new();
        let mut special = RotationPolicy::first_letter(&bank);

        for round in 0..ROUNDS {
            let suggestion = Planner.suggest(&ctx(&bank, &dict, &played, round, special)).unwrap();
            assert!(dict.contains(&suggestion.word));
            assert!(!played.contains(&suggestion.word));
            assert_eq!(
                suggestion.points,
                score_word(&bank, special, &suggestion.word)
            );

            special = RotationPolicy::Advance.next_letter(
                &bank,
                round + 1,
                special,
                Some(suggestion.word.as_str()),
            );
            played.push(suggestion.word);
        }
    }

    #[test]
    fn suggestion_is_stable() {
        let bank = bank();
        let dict = dictionary();
        let played = vec!["orients".to_string()];
        let c = ctx(&bank, &dict, &played, 3, b'o');
        let first = Planner.suggest(&c).unwrap();
        for _ in 0..5 {
            assert_eq!(Planner.suggest(&c).unwrap(), first);
        }
    }

    #[test]
    fn short_buckets_are_not_an_error_until_needed() {
        let bank = bank();
        let dict: Dictionary = [("riot", true), ("trio", true)].into_iter().collect();
        let plan = plan_round(&ctx(&bank, &dict, &[], 0, b'e')).unwrap();
        assert_eq!(plan.allotted(), 2);
        assert!(plan.short_petals().count() > 0);
    }

    #[test]
    fn empty_bucket_for_special_letter_is_reported() {
        let bank = bank();
        let dict = dictionary();
        let played: Vec<String> = dict.words().map(str::to_string).collect();
        let err = Planner.suggest(&ctx(&bank, &dict, &played, 0, b'e')).unwrap_err();
        assert_eq!(err, PlanError::NoWordAvailable { letter: 'e' });
    }

    #[test]
    fn game_over_and_bad_letter() {
        let bank = bank();
        let dict = dictionary();
        assert_eq!(
            plan_round(&ctx(&bank, &dict, &[], ROUNDS, b'e')).unwrap_err(),
            PlanError::GameOver { round: ROUNDS }
        );
        assert_eq!(
            plan_round(&ctx(&bank, &dict, &[], 0, b'r')).unwrap_err(),
            PlanError::NotAPetal('r')
        );
    }

    #[test]
    fn illegal_dictionary_words_are_skipped() {
        let bank = bank();
        let dict: Dictionary = [("roast", true), ("tone", true), ("rot", true), ("riot", true)]
            .into_iter()
            .collect();
        let plan = plan_round(&ctx(&bank, &dict, &[], 0, b'e')).unwrap();
        let words: Vec<&str> = plan.buckets.iter().flatten().map(|a| a.word.as_str()).collect();
        assert_eq!(words, ["riot"]);
    }
}
