//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod typewriter;

pub use display::{
    print_plan, print_prune, print_score_result, print_search, print_simulation, print_stats,
};
pub use typewriter::Printer;
