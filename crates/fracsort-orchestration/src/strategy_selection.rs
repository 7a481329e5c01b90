//! Strategy selection logic.

use std::sync::Arc;

use fracsort_core::error::FracError;
use fracsort_core::registry::StrategyRegistry;
use fracsort_core::strategy::SortStrategy;

/// Get strategies to run based on algorithm selection (`"all"` or a name).
pub fn get_strategies_to_run(
    algo: &str,
    registry: &dyn StrategyRegistry,
) -> Result<Vec<Arc<dyn SortStrategy>>, FracError> {
    match algo {
        "all" => registry
            .available()
            .into_iter()
            .map(|name| registry.get(name))
            .collect(),
        name => Ok(vec![registry.get(name)?]),
    }
}
