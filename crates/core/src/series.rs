//! Nearest-neighbor lookups over historical valuation series.
//!
//! The papr UI charts historical marks, targets, and collateral valuations,
//! and needs "the point nearest this value" and "the value N days ago"
//! lookups over them. Series are required to be sorted ascending; the search
//! is a binary search over the insertion point, O(log n) for the hundreds to
//! low thousands of points a chart holds.

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Returns the index of the value in `haystack` closest to `needle`.
///
/// `haystack` must be sorted ascending (a precondition, not re-checked
/// here). A needle below the range returns index 0 and above the range the
/// last index; an exact match returns its own index. When two neighbors are
/// equidistant the upper index wins.
///
/// Returns `None` only for an empty slice.
///
/// # Example
///
/// ```rust
/// use papr_rs_core::series::find_closest_index;
///
/// assert_eq!(find_closest_index(&[1.0, 10.0, 11.0], 9.0), Some(1));
/// assert_eq!(find_closest_index(&[1.0, 10.0, 11.0], 2.0), Some(0));
/// ```
pub fn find_closest_index(haystack: &[f64], needle: f64) -> Option<usize> {
    if haystack.is_empty() {
        return None;
    }

    let insertion = haystack.partition_point(|&value| value < needle);
    if insertion == 0 {
        return Some(0);
    }
    if insertion == haystack.len() {
        return Some(haystack.len() - 1);
    }

    // Equidistant neighbors resolve to the upper index
    if needle - haystack[insertion - 1] < haystack[insertion] - needle {
        Some(insertion - 1)
    } else {
        Some(insertion)
    }
}

/// A timestamped valuation sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in seconds
    pub timestamp: u64,
    /// Sampled value (display-level)
    pub value: f64,
}

/// A valuation series ordered by ascending timestamp.
///
/// Ordering is validated once at construction so the lookup methods can
/// binary-search without re-checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct TimeSeries {
    points: Vec<PricePoint>,
}

impl TimeSeries {
    /// Builds a series from points sorted by non-decreasing timestamp.
    ///
    /// # Errors
    ///
    /// [`PricingError::UnsortedSeries`] naming the first out-of-order point.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, PricingError> {
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(PricingError::UnsortedSeries {
                    index: index + 1,
                    timestamp: pair[1].timestamp,
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the index of the point nearest the given timestamp.
    ///
    /// Same neighbor rule as [`find_closest_index`]: equidistant timestamps
    /// resolve to the upper index. `None` for an empty series.
    pub fn closest_index_to_time(&self, timestamp: u64) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }

        let insertion = self
            .points
            .partition_point(|point| point.timestamp < timestamp);
        if insertion == 0 {
            return Some(0);
        }
        if insertion == self.points.len() {
            return Some(self.points.len() - 1);
        }

        let before = timestamp - self.points[insertion - 1].timestamp;
        let after = self.points[insertion].timestamp - timestamp;
        if before < after {
            Some(insertion - 1)
        } else {
            Some(insertion)
        }
    }

    /// Returns the value sampled nearest the given timestamp.
    pub fn value_at(&self, timestamp: u64) -> Option<f64> {
        self.closest_index_to_time(timestamp)
            .map(|index| self.points[index].value)
    }

    /// Returns the value sampled nearest `days` days before `now`.
    pub fn value_days_ago(&self, now: u64, days: u64) -> Option<f64> {
        self.value_at(now.saturating_sub(days.saturating_mul(86_400)))
    }
}

impl TryFrom<Vec<PricePoint>> for TimeSeries {
    type Error = PricingError;

    fn try_from(points: Vec<PricePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<TimeSeries> for Vec<PricePoint> {
    fn from(series: TimeSeries) -> Self {
        series.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needle_below_range_returns_first_index() {
        assert_eq!(find_closest_index(&[2.0, 3.0, 4.0], 1.0), Some(0));
    }

    #[test]
    fn test_needle_above_range_returns_last_index() {
        assert_eq!(find_closest_index(&[2.0, 3.0, 4.0], 5.0), Some(2));
    }

    #[test]
    fn test_equidistant_neighbors_resolve_upward() {
        assert_eq!(find_closest_index(&[1.0, 3.0, 5.0], 2.0), Some(1));
        assert_eq!(find_closest_index(&[1.0, 3.0, 5.0], 4.0), Some(2));
    }

    #[test]
    fn test_strictly_closer_neighbor_wins() {
        assert_eq!(find_closest_index(&[1.0, 10.0, 11.0], 9.0), Some(1));
        assert_eq!(find_closest_index(&[1.0, 10.0, 11.0], 2.0), Some(0));
    }

    #[test]
    fn test_exact_match_returns_its_own_index() {
        let seq = [1.0, 10.0, 11.0, 42.5, 100.0];
        for (index, &value) in seq.iter().enumerate() {
            assert_eq!(find_closest_index(&seq, value), Some(index));
        }
    }

    #[test]
    fn test_empty_haystack() {
        assert_eq!(find_closest_index(&[], 1.0), None);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(find_closest_index(&[7.0], -100.0), Some(0));
        assert_eq!(find_closest_index(&[7.0], 100.0), Some(0));
    }

    #[test]
    fn test_matches_linear_scan_on_long_series() {
        let haystack: Vec<f64> = (0..1_000).map(|i| (i * i) as f64 / 7.0).collect();
        for needle in [-5.0, 0.0, 3.33, 1_000.0, 55_555.5, 1e9] {
            let by_search = find_closest_index(&haystack, needle);
            let by_scan = haystack
                .iter()
                .enumerate()
                .min_by(|(ai, a), (bi, b)| {
                    let da = (*a - needle).abs();
                    let db = (*b - needle).abs();
                    // Linear-scan oracle with the same upper-index tie rule
                    da.partial_cmp(&db)
                        .map(|ord| ord.then(bi.cmp(ai)))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|(i, _)| i);
            assert_eq!(by_search, by_scan, "needle {needle}");
        }
    }

    fn sample_series() -> TimeSeries {
        TimeSeries::new(vec![
            PricePoint { timestamp: 1_000, value: 1.00 },
            PricePoint { timestamp: 2_000, value: 1.05 },
            PricePoint { timestamp: 3_000, value: 0.97 },
            PricePoint { timestamp: 90_400, value: 1.10 },
        ])
        .unwrap()
    }

    #[test]
    fn test_closest_index_to_time() {
        let series = sample_series();
        assert_eq!(series.closest_index_to_time(0), Some(0));
        assert_eq!(series.closest_index_to_time(2_100), Some(1));
        assert_eq!(series.closest_index_to_time(2_500), Some(2)); // tie goes up
        assert_eq!(series.closest_index_to_time(1_000_000), Some(3));
    }

    #[test]
    fn test_value_days_ago() {
        let series = sample_series();
        // One day before t=90_400 is t=4_000, nearest sample is t=3_000
        assert_eq!(series.value_days_ago(90_400, 1), Some(0.97));
        // Saturates at zero for lookups past the epoch
        assert_eq!(series.value_days_ago(1_000, 30), Some(1.00));
    }

    #[test]
    fn test_unsorted_series_is_rejected() {
        let err = TimeSeries::new(vec![
            PricePoint { timestamp: 2_000, value: 1.0 },
            PricePoint { timestamp: 1_000, value: 1.0 },
        ])
        .unwrap_err();
        assert_eq!(
            err,
            PricingError::UnsortedSeries {
                index: 1,
                timestamp: 1_000
            }
        );
    }

    #[test]
    fn test_equal_timestamps_are_allowed() {
        let series = TimeSeries::new(vec![
            PricePoint { timestamp: 1_000, value: 1.0 },
            PricePoint { timestamp: 1_000, value: 2.0 },
        ])
        .unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_empty_series_lookups() {
        let series = TimeSeries::new(vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.closest_index_to_time(1_000), None);
        assert_eq!(series.value_at(1_000), None);
    }

    #[test]
    fn test_series_serde_rejects_unsorted_input() {
        let json = r#"[
            {"timestamp": 2000, "value": 1.0},
            {"timestamp": 1000, "value": 1.0}
        ]"#;
        assert!(serde_json::from_str::<TimeSeries>(json).is_err());

        let ok = r#"[
            {"timestamp": 1000, "value": 1.0},
            {"timestamp": 2000, "value": 1.5}
        ]"#;
        let series: TimeSeries = serde_json::from_str(ok).unwrap();
        assert_eq!(series.len(), 2);
    }
}
