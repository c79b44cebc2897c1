//! Turn-by-turn game sessions and self-play

mod session;

pub use session::{Game, Proposal, SimulationResult, Turn, simulate};
