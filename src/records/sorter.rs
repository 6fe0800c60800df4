//! Creator sorting
//!
//! Sorts by one numeric metric, deterministically. Ties on the metric are
//! broken by name ascending regardless of direction, so the result is a
//! total order and page boundaries are stable across calls.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::creator::Creator;

/// Metric a dataset can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Follower count
    Followers,
    /// Revenue
    Revenue,
}

impl SortKey {
    /// Returns the wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Followers => "followers",
            SortKey::Revenue => "revenue",
        }
    }

    fn compare(&self, a: &Creator, b: &Creator) -> Ordering {
        match self {
            SortKey::Followers => a.followers.cmp(&b.followers),
            // Adding 0.0 folds -0.0 into 0.0 so signed zeros tie
            SortKey::Revenue => (a.revenue + 0.0).total_cmp(&(b.revenue + 0.0)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "followers" => Ok(SortKey::Followers),
            "revenue" => Ok(SortKey::Revenue),
            other => Err(format!(
                "unknown sort key '{}', expected 'followers' or 'revenue'",
                other
            )),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Asc,
    /// Largest first
    #[default]
    Desc,
}

impl SortDirection {
    /// Returns the wire name of the direction
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!(
                "unknown sort direction '{}', expected 'asc' or 'desc'",
                other
            )),
        }
    }
}

/// Sort specification. No key means passthrough order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    /// Metric to sort by
    pub key: Option<SortKey>,
    /// Direction applied to the metric
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates a sort spec
    pub fn new(key: Option<SortKey>, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Ascending by `key`
    pub fn asc(key: SortKey) -> Self {
        Self::new(Some(key), SortDirection::Asc)
    }

    /// Descending by `key`
    pub fn desc(key: SortKey) -> Self {
        Self::new(Some(key), SortDirection::Desc)
    }

    /// Passthrough order
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Cycles the spec for a column header click.
    ///
    /// A new column starts descending, a descending column flips to
    /// ascending and an ascending column clears the sort.
    pub fn toggle(self, key: SortKey) -> Self {
        match (self.key, self.direction) {
            (Some(current), SortDirection::Desc) if current == key => Self::asc(key),
            (Some(current), SortDirection::Asc) if current == key => Self::unsorted(),
            _ => Self::desc(key),
        }
    }
}

/// Sorts creators into a new vector
pub struct CreatorSorter;

impl CreatorSorter {
    /// Returns a sorted copy of `data`.
    ///
    /// With no key the copy keeps the original order.
    pub fn sort(data: &[Creator], spec: &SortSpec) -> Vec<Creator> {
        let mut sorted = data.to_vec();
        if let Some(key) = spec.key {
            sorted.sort_by(|a, b| Self::compare(a, b, key, spec.direction));
        }
        sorted
    }

    /// Total order used by [`CreatorSorter::sort`].
    pub fn compare(a: &Creator, b: &Creator, key: SortKey, direction: SortDirection) -> Ordering {
        let primary = match direction {
            SortDirection::Asc => key.compare(a, b),
            SortDirection::Desc => key.compare(b, a),
        };
        primary.then_with(|| compare_names(&a.name, &b.name))
    }
}

/// Collation for the name tie-break: case-insensitive first, then by code
/// point so distinct names never compare equal.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Returns a copy of `data` ordered by `key` and `direction`.
pub fn sort_creators(data: &[Creator], key: Option<SortKey>, direction: SortDirection) -> Vec<Creator> {
    CreatorSorter::sort(data, &SortSpec::new(key, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(creators: &[Creator]) -> Vec<&str> {
        creators.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_followers_ascending() {
        let data = Creator::fixture();
        let result = sort_creators(&data, Some(SortKey::Followers), SortDirection::Asc);
        assert_eq!(names(&result), vec!["Riya", "Aman", "Karan", "Neha"]);
    }

    #[test]
    fn test_followers_descending() {
        let data = Creator::fixture();
        let result = sort_creators(&data, Some(SortKey::Followers), SortDirection::Desc);
        // Tie on 9800 stays name ascending even when descending
        assert_eq!(names(&result), vec!["Karan", "Neha", "Aman", "Riya"]);
    }

    #[test]
    fn test_revenue_ascending() {
        let data = Creator::fixture();
        let result = sort_creators(&data, Some(SortKey::Revenue), SortDirection::Asc);
        assert_eq!(names(&result), vec!["Riya", "Neha", "Aman", "Karan"]);
    }

    #[test]
    fn test_revenue_descending() {
        let data = Creator::fixture();
        let result = sort_creators(&data, Some(SortKey::Revenue), SortDirection::Desc);
        assert_eq!(names(&result), vec!["Karan", "Aman", "Neha", "Riya"]);
    }

    #[test]
    fn test_no_key_returns_copy_in_order() {
        let data = Creator::fixture();
        let result = sort_creators(&data, None, SortDirection::Asc);

        assert_eq!(result, data);
        assert_ne!(result.as_ptr(), data.as_ptr());
    }

    #[test]
    fn test_input_not_mutated() {
        let data = Creator::fixture();
        let before = data.clone();

        let _ = sort_creators(&data, Some(SortKey::Followers), SortDirection::Asc);

        assert_eq!(data, before);
    }

    #[test]
    fn test_name_tiebreak_ignores_case() {
        let data = vec![
            Creator::new(1, "zed", 5, 0.0, true, ""),
            Creator::new(2, "Amy", 5, 0.0, true, ""),
            Creator::new(3, "bob", 5, 0.0, true, ""),
        ];
        let result = sort_creators(&data, Some(SortKey::Followers), SortDirection::Desc);
        assert_eq!(names(&result), vec!["Amy", "bob", "zed"]);
    }

    #[test]
    fn test_signed_zero_revenue_ties_by_name() {
        let data = vec![
            Creator::new(1, "Aman", 1, 0.0, true, ""),
            Creator::new(2, "Zoya", 1, -0.0, true, ""),
        ];

        let asc = sort_creators(&data, Some(SortKey::Revenue), SortDirection::Asc);
        assert_eq!(names(&asc), vec!["Aman", "Zoya"]);

        let desc = sort_creators(&data, Some(SortKey::Revenue), SortDirection::Desc);
        assert_eq!(names(&desc), vec!["Aman", "Zoya"]);
    }

    #[test]
    fn test_accented_names_sort_by_code_point() {
        let data = vec![
            Creator::new(1, "Zoya", 5, 0.0, true, ""),
            Creator::new(2, "Émile", 5, 0.0, true, ""),
            Creator::new(3, "emma", 5, 0.0, true, ""),
        ];
        let result = sort_creators(&data, Some(SortKey::Followers), SortDirection::Asc);
        // "é" lowercases to U+00E9, which sorts after every ASCII letter
        assert_eq!(names(&result), vec!["emma", "Zoya", "Émile"]);
    }

    #[test]
    fn test_toggle_cycle() {
        let spec = SortSpec::unsorted().toggle(SortKey::Followers);
        assert_eq!(spec, SortSpec::desc(SortKey::Followers));

        let spec = spec.toggle(SortKey::Followers);
        assert_eq!(spec, SortSpec::asc(SortKey::Followers));

        let spec = spec.toggle(SortKey::Followers);
        assert_eq!(spec, SortSpec::unsorted());
    }

    #[test]
    fn test_toggle_other_column_starts_descending() {
        let spec = SortSpec::asc(SortKey::Followers).toggle(SortKey::Revenue);
        assert_eq!(spec, SortSpec::desc(SortKey::Revenue));
    }

    #[test]
    fn test_parse_key_and_direction() {
        assert_eq!("Followers".parse::<SortKey>(), Ok(SortKey::Followers));
        assert_eq!("revenue".parse::<SortKey>(), Ok(SortKey::Revenue));
        assert!("age".parse::<SortKey>().is_err());

        assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_spec_wire_format() {
        let spec: SortSpec = serde_json::from_str(r#"{"key":"revenue"}"#).unwrap();
        assert_eq!(spec, SortSpec::desc(SortKey::Revenue));

        let spec: SortSpec = serde_json::from_str(r#"{"key":null,"direction":"asc"}"#).unwrap();
        assert_eq!(spec, SortSpec::new(None, SortDirection::Asc));
    }
}
