use std::sync::Arc;

use dashmap::DashMap;

use crate::phonemaskutil::helper_functions::build_mask_shape;
use crate::phonemaskutil::helper_types::MaskShape;

/// Concurrent memoization of derived [`MaskShape`] views, keyed by the
/// template string. A shape is a pure function of its template and the
/// set of distinct templates is small (one per country), so recomputing
/// is always safe and caching is just an allocation saver.
pub struct MaskShapeCache {
    cache: DashMap<String, Arc<MaskShape>>,
}

impl MaskShapeCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_shape(&self, template: &str) -> Arc<MaskShape> {
        if let Some(shape) = self.cache.get(template) {
            return shape.value().clone();
        }
        let entry = self
            .cache
            .entry(template.to_string())
            .or_insert_with(|| Arc::new(build_mask_shape(template)));
        entry.value().clone()
    }
}
