//! Strategy registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::FracError;
use crate::strategy::{ComparisonSort, HeapSort, SortStrategy};

/// Registry trait for looking up sort strategies by name.
pub trait StrategyRegistry: Send + Sync {
    /// Get or create a strategy by name.
    fn get(&self, name: &str) -> Result<Arc<dyn SortStrategy>, FracError>;

    /// List the canonical strategy names.
    fn available(&self) -> Vec<&str>;
}

/// Default registry with lazy creation and cache.
pub struct DefaultRegistry {
    cache: RwLock<HashMap<String, Arc<dyn SortStrategy>>>,
}

impl DefaultRegistry {
    /// Create a new default registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_strategy(name: &str) -> Result<Arc<dyn SortStrategy>, FracError> {
        match name {
            "comparison" | "quick" => Ok(Arc::new(ComparisonSort::new())),
            "heap" => Ok(Arc::new(HeapSort::new())),
            _ => Err(FracError::Config(format!("unknown strategy: {name}"))),
        }
    }
}

impl Default for DefaultRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyRegistry for DefaultRegistry {
    fn get(&self, name: &str) -> Result<Arc<dyn SortStrategy>, FracError> {
        if let Some(strategy) = self.cache.read().get(name) {
            return Ok(Arc::clone(strategy));
        }

        let strategy = Self::create_strategy(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&strategy));
        Ok(strategy)
    }

    fn available(&self) -> Vec<&str> {
        vec!["comparison", "heap"]
    }
}
