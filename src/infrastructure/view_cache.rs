use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;

use crate::domain::ports::ViewCache;

#[derive(Debug, Default)]
struct Views {
    rendered: HashMap<String, Value>,
    generations: HashMap<String, u64>,
}

/// Process-local store of rendered views. A path without an entry is stale.
#[derive(Debug, Default)]
pub struct InMemoryViewCache {
    views: RwLock<Views>,
}

impl ViewCache for InMemoryViewCache {
    fn get(&self, path: &str) -> Option<Value> {
        self.views
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rendered
            .get(path)
            .cloned()
    }

    fn generation(&self, path: &str) -> u64 {
        self.views
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generations
            .get(path)
            .copied()
            .unwrap_or(0)
    }

    fn store(&self, path: &str, generation: u64, view: Value) -> bool {
        let mut views = self.views.write().unwrap_or_else(PoisonError::into_inner);
        let current = views.generations.get(path).copied().unwrap_or(0);
        if current != generation {
            log::debug!(
                "Dropped view {} rendered at generation {} (now {})",
                path,
                generation,
                current
            );
            return false;
        }
        views.rendered.insert(path.to_string(), view);
        true
    }

    fn invalidate(&self, path: &str) {
        let mut views = self.views.write().unwrap_or_else(PoisonError::into_inner);
        *views.generations.entry(path.to_string()).or_insert(0) += 1;
        if views.rendered.remove(path).is_some() {
            log::debug!("Invalidated cached view {}", path);
        }
    }
}
