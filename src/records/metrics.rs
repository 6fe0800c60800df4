//! Derived summary metrics
//!
//! Always computed over the full filtered set, never over a page slice,
//! so the summary does not change as the user pages.

use serde::{Deserialize, Serialize};

use super::creator::Creator;

/// Summary statistics over a record sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// Number of records
    pub total_creators: usize,
    /// Number of active records
    pub active_creators: usize,
    /// Revenue summed over all records, active or not
    pub total_revenue: f64,
    /// Revenue of active records divided by the active count, 0 if none
    pub avg_revenue_per_active: f64,
}

impl DerivedMetrics {
    /// Computes metrics in a single pass over `data`.
    pub fn compute(data: &[Creator]) -> Self {
        let mut active_creators = 0usize;
        let mut total_revenue = 0.0;
        let mut active_revenue = 0.0;

        for creator in data {
            total_revenue += creator.revenue;
            if creator.active {
                active_creators += 1;
                active_revenue += creator.revenue;
            }
        }

        let avg_revenue_per_active = if active_creators > 0 {
            active_revenue / active_creators as f64
        } else {
            0.0
        };

        Self {
            total_creators: data.len(),
            active_creators,
            total_revenue,
            avg_revenue_per_active,
        }
    }
}

/// Computes [`DerivedMetrics`] over `data`.
pub fn derive_metrics(data: &[Creator]) -> DerivedMetrics {
    DerivedMetrics::compute(data)
}
