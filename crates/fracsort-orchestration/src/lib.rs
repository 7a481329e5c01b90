//! # fracsort-orchestration
//!
//! First-to-settle racing of sort strategies, strategy selection, and
//! cross-strategy verification.

pub mod interfaces;
pub mod orchestrator;
pub mod race;
pub mod strategy_selection;

pub use interfaces::{RaceOutcome, ResultPresenter, SortRunResult};
pub use orchestrator::{analyze_comparison_results, compare_sorts, race_sort, RaceOptions};
pub use race::{RaceExecutor, RaceTask};
