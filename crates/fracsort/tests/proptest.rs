//! Property-based tests for the sort race.

use std::sync::Arc;

use proptest::prelude::*;

use fracsort_core::cancel::CancellationToken;
use fracsort_core::fraction::BigFraction;
use fracsort_core::registry::DefaultRegistry;
use fracsort_orchestration::interfaces::NullPresenter;
use fracsort_orchestration::orchestrator::{race_sort, RaceOptions};
use fracsort_orchestration::race::RaceExecutor;
use fracsort_orchestration::strategy_selection::get_strategies_to_run;

fn fraction() -> impl Strategy<Value = BigFraction> {
    (any::<i32>(), 1i32..=1_000_000, any::<bool>())
        .prop_map(|(n, d, reduced)| BigFraction::value_of(n, d, reduced).unwrap())
}

fn race(values: &[BigFraction], algo: &str) -> Vec<BigFraction> {
    let registry = DefaultRegistry::new();
    let strategies = get_strategies_to_run(algo, &registry).unwrap();
    race_sort(
        &RaceExecutor::new(2).unwrap(),
        &strategies,
        Arc::from(values),
        &RaceOptions::default(),
        &CancellationToken::new(),
        &NullPresenter,
    )
    .unwrap()
    .sorted
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Whichever strategy wins, the race returns an ascending permutation.
    #[test]
    fn race_returns_sorted_permutation(values in prop::collection::vec(fraction(), 0..30)) {
        let sorted = race(&values, "all");
        prop_assert_eq!(sorted.len(), values.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    /// Racing a single strategy gives the same values as racing both.
    #[test]
    fn single_strategy_races_agree(values in prop::collection::vec(fraction(), 0..30)) {
        let heap = race(&values, "heap");
        let comparison = race(&values, "comparison");
        prop_assert_eq!(heap, comparison);
    }
}
