//! Game session state
//!
//! A `Game` tracks one bank through its twelve rounds: which words have been
//! proposed, the running score, the special letter, and the wordlist
//! decisions the player made along the way.

use crate::core::{Bank, ROUNDS, RotationPolicy, score_word};
use crate::solver::{Engine, PlanError, RoundContext};
use crate::wordlists::{Dictionary, WordlistChanges};

/// A word offered to the player for the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub word: String,
    pub points: u32,
    /// Whether the dictionary already marks the word as validated
    pub validated: bool,
    pub expected_total: Option<u32>,
}

/// An accepted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub round: usize,
    pub word: String,
    pub letter: u8,
    pub points: u32,
}

/// One bank's session
#[derive(Debug, Clone)]
pub struct Game {
    bank: Bank,
    played: Vec<String>,
    turns: Vec<Turn>,
    round: usize,
    special: u8,
    score: u32,
    policy: RotationPolicy,
    changes: WordlistChanges,
}

impl Game {
    #[must_use]
    pub fn new(bank: Bank, policy: RotationPolicy) -> Self {
        Self {
            special: RotationPolicy::first_letter(&bank),
            bank,
            played: Vec::new(),
            turns: Vec::new(),
            round: 0,
            score: 0,
            policy,
            changes: WordlistChanges::default(),
        }
    }

    #[must_use]
    pub const fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Round index, 0-based
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn special(&self) -> u8 {
        self.special
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn policy(&self) -> RotationPolicy {
        self.policy
    }

    /// Every word proposed so far, accepted or rejected
    #[must_use]
    pub fn played(&self) -> &[String] {
        &self.played
    }

    /// Accepted words in round order
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn changes(&self) -> &WordlistChanges {
        &self.changes
    }

    #[must_use]
    pub fn into_changes(self) -> WordlistChanges {
        self.changes
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.round >= ROUNDS
    }

    /// Engine input for the current round
    #[must_use]
    pub fn context<'a>(&'a self, dictionary: &'a Dictionary) -> RoundContext<'a> {
        RoundContext {
            bank: &self.bank,
            dictionary,
            played: &self.played,
            round: self.round,
            special: self.special,
            score: self.score,
            policy: self.policy,
        }
    }

    /// Ask the engine for this round's word
    ///
    /// The word counts as played from here on, so a rejected word is never
    /// offered again.
    ///
    /// # Errors
    /// Returns the engine's `PlanError` when it has nothing to offer.
    pub fn propose<E: Engine>(
        &mut self,
        engine: &E,
        dictionary: &Dictionary,
    ) -> Result<Proposal, PlanError> {
        let suggestion = engine.suggest(&self.context(dictionary))?;
        let validated = dictionary.is_validated(&suggestion.word).unwrap_or(false);
        self.played.push(suggestion.word.clone());

        Ok(Proposal {
            word: suggestion.word,
            points: suggestion.points,
            validated,
            expected_total: suggestion.expected_total,
        })
    }

    /// Play a proposed word and move to the next round
    ///
    /// Returns the points earned. An unvalidated word is marked for
    /// validation.
    pub fn accept(&mut self, proposal: &Proposal) -> u32 {
        let points = score_word(&self.bank, self.special, &proposal.word);
        if !proposal.validated {
            self.changes.mark_valid(&proposal.word);
        }

        self.turns.push(Turn {
            round: self.round,
            word: proposal.word.clone(),
            letter: self.special,
            points,
        });
        self.score += points;
        self.round += 1;
        self.special = self.policy.next_letter(
            &self.bank,
            self.round,
            self.special,
            Some(proposal.word.as_str()),
        );

        points
    }

    /// Refuse a proposed word; it is marked for removal and the round stays
    pub fn reject(&mut self, proposal: &Proposal) {
        self.changes.mark_invalid(&proposal.word);
    }
}

/// Outcome of a self-played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    pub bank: Bank,
    pub turns: Vec<Turn>,
    pub total: u32,
    /// Why the game ended before the last round, if it did
    pub stopped: Option<PlanError>,
}

impl SimulationResult {
    #[must_use]
    pub fn completed(&self) -> bool {
        self.stopped.is_none()
    }
}

/// Play a bank to the end, accepting every proposal
#[must_use]
pub fn simulate<E: Engine>(
    bank: Bank,
    dictionary: &Dictionary,
    engine: &E,
    policy: RotationPolicy,
) -> SimulationResult {
    let mut game = Game::new(bank, policy);
    let mut stopped = None;

    while !game.is_over() {
        match game.propose(engine, dictionary) {
            Ok(proposal) => {
                game.accept(&proposal);
            }
            Err(e) => {
                stopped = Some(e);
                break;
            }
        }
    }

    SimulationResult {
        bank,
        total: game.score,
        turns: game.turns,
        stopped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EngineType, GreedyEngine, Planner};

    const WORDS: [&str; 24] = [
        "tensioner", "orients", "stonier", "snorter", "interior", "terrine", "sorties", "rooster",
        "resort", "retire", "senior", "rotten", "tinier", "rinse", "roost", "snore", "tries",
        "riot", "trio", "torn", "sore", "rein", "rent", "tire",
    ];

    fn bank() -> Bank {
        Bank::new("reinost").unwrap()
    }

    fn dictionary(validated: bool) -> Dictionary {
        WORDS.into_iter().map(|w| (w, validated)).collect()
    }

    #[test]
    fn new_game_starts_on_first_petal() {
        let game = Game::new(bank(), RotationPolicy::Advance);
        assert_eq!(game.round(), 0);
        assert_eq!(game.special(), b'e');
        assert_eq!(game.score(), 0);
        assert!(!game.is_over());
    }

    #[test]
    fn propose_records_word_as_played() {
        let dict = dictionary(true);
        let mut game = Game::new(bank(), RotationPolicy::Advance);
        let proposal = game.propose(&Planner, &dict).unwrap();

        assert_eq!(game.played(), [proposal.word.clone()]);
        assert!(proposal.validated);
        assert!(proposal.expected_total.is_some());
        assert_eq!(game.round(), 0);
    }

    #[test]
    fn accept_scores_and_advances() {
        let dict = dictionary(true);
        let mut game = Game::new(bank(), RotationPolicy::Fixed);
        let proposal = game.propose(&Planner, &dict).unwrap();
        let points = game.accept(&proposal);

        assert_eq!(points, proposal.points);
        assert_eq!(game.score(), points);
        assert_eq!(game.round(), 1);
        assert_eq!(game.special(), b'i');
        assert_eq!(game.turns()[0].letter, b'e');
        assert!(game.changes().is_empty());
    }

    #[test]
    fn accept_marks_unvalidated_words() {
        let dict = dictionary(false);
        let mut game = Game::new(bank(), RotationPolicy::Advance);
        let proposal = game.propose(&GreedyEngine, &dict).unwrap();
        assert!(!proposal.validated);

        game.accept(&proposal);
        assert!(game.changes().validate.contains(&proposal.word));
    }

    #[test]
    fn reject_keeps_round_and_skips_word() {
        let dict = dictionary(false);
        let mut game = Game::new(bank(), RotationPolicy::Advance);
        let first = game.propose(&Planner, &dict).unwrap();
        game.reject(&first);

        assert_eq!(game.round(), 0);
        assert!(game.changes().remove.contains(&first.word));

        let second = game.propose(&Planner, &dict).unwrap();
        assert_ne!(second.word, first.word);

        let changes = game.into_changes();
        assert!(changes.remove.contains(&first.word));
        assert!(changes.validate.is_empty());
    }

    #[test]
    fn simulate_plays_twelve_rounds() {
        let dict = dictionary(true);
        let result = simulate(bank(), &dict, &EngineType::default(), RotationPolicy::Advance);

        assert!(result.completed());
        assert_eq!(result.turns.len(), ROUNDS);
        assert_eq!(result.total, result.turns.iter().map(|t| t.points).sum::<u32>());

        let mut words: Vec<&str> = result.turns.iter().map(|t| t.word.as_str()).collect();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), ROUNDS);
    }

    #[test]
    fn simulate_stops_when_words_run_out() {
        let dict: Dictionary = [("riot", true), ("trio", true)].into_iter().collect();
        let result = simulate(bank(), &dict, &GreedyEngine, RotationPolicy::Advance);

        assert!(!result.completed());
        assert!(result.turns.len() < ROUNDS);
        assert!(matches!(result.stopped, Some(PlanError::NoWordAvailable { .. })));
    }

    #[test]
    fn propose_after_last_round_is_game_over() {
        let dict = dictionary(true);
        let mut game = Game::new(bank(), RotationPolicy::Advance);
        while !game.is_over() {
            let proposal = game.propose(&Planner, &dict).unwrap();
            game.accept(&proposal);
        }
        assert_eq!(
            game.propose(&Planner, &dict).unwrap_err(),
            PlanError::GameOver { round: ROUNDS }
        );
    }
}
