//! Command implementations

pub mod plan;
pub mod prune;
pub mod score;
pub mod search;
pub mod simple;
pub mod simulate;
pub mod stats;

pub use plan::{PlanConfig, PlanResult, plan_bank};
pub use prune::{DEFAULT_PRUNE_THRESHOLD, PruneResult, prune_weak_words};
pub use score::{ScoreResult, score_in_bank};
pub use search::{SearchResult, parse_queries, search_words};
pub use simple::run_simple;
pub use simulate::{SimulationSummary, random_banks, run_simulations};
pub use stats::{StatsResult, TOP_SCORES, collect_stats};
