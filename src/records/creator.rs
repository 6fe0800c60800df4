//! Creator record type

use serde::{Deserialize, Serialize};

/// A single creator in the dataset.
///
/// Records are never mutated by the pipeline. `created_at` is carried
/// through as an opaque string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// Unique identifier within a dataset
    pub id: u64,
    /// Display name
    pub name: String,
    /// Follower count
    pub followers: u64,
    /// Revenue in currency units
    pub revenue: f64,
    /// Whether the creator is active
    pub active: bool,
    /// Creation timestamp, not parsed
    pub created_at: String,
}

impl Creator {
    /// Creates a new creator record
    pub fn new(
        id: u64,
        name: impl Into<String>,
        followers: u64,
        revenue: f64,
        active: bool,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            followers,
            revenue,
            active,
            created_at: created_at.into(),
        }
    }

    /// The built-in dataset served when no other source is configured.
    pub fn fixture() -> Vec<Creator> {
        vec![
            Creator::new(1, "Aman", 1200, 4500.0, true, "2025-01-10"),
            Creator::new(2, "Riya", 540, 0.0, false, "2025-01-12"),
            Creator::new(3, "Karan", 9800, 12000.0, true, "2025-01-21"),
            Creator::new(4, "Neha", 9800, 2000.0, true, "2025-02-02"),
        ]
    }
}
