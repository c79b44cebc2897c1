//! Word proposal engines for Blossom
//!
//! The round-allocation planner and the greedy baseline behind one trait.

mod engine;
pub mod greedy;
pub mod planner;

pub use engine::{Engine, EngineType, PlanError, RoundContext, Suggestion};
pub use greedy::GreedyEngine;
pub use planner::{Assignment, Plan, Planner, plan_round};
