//! Per-region aggregation of telemetry metrics.
//!
//! Groups records by region and computes mean latency, p95 latency via
//! linear interpolation, mean uptime, and the threshold breach count.

use std::collections::BTreeMap;
use vigil_common::{AnalysisResult, RegionMetrics, TelemetryRecord};

/// Aggregate telemetry for the requested regions.
///
/// Regions with no matching records are omitted from the result. Duplicate
/// names in `regions` recompute and overwrite the same key. `threshold_ms`
/// may be any integer; a negative threshold counts every observation as a
/// breach. Never mutates the dataset and never fails.
pub fn aggregate(
    dataset: &[TelemetryRecord],
    regions: &[String],
    threshold_ms: i64,
) -> AnalysisResult {
    let mut results = BTreeMap::new();

    for region in regions {
        let matching: Vec<&TelemetryRecord> = dataset
            .iter()
            .filter(|r| r.region.as_deref() == Some(region.as_str()))
            .collect();

        if matching.is_empty() {
            continue;
        }

        let latencies: Vec<f64> = matching.iter().map(|r| r.latency_ms).collect();
        let uptimes: Vec<f64> = matching.iter().map(|r| r.uptime_pct).collect();

        let breaches = latencies
            .iter()
            .filter(|&&lat| lat > threshold_ms as f64)
            .count() as u64;

        results.insert(
            region.clone(),
            RegionMetrics {
                avg_latency: round2(mean(&latencies)),
                p95_latency: round2(p95(&latencies)),
                avg_uptime: round2(mean(&uptimes)),
                breaches,
            },
        );
    }

    results
}

/// Arithmetic mean. Callers guarantee `values` is non-empty.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// 95th percentile via linear interpolation between the two nearest ranked
/// samples. A single sample is its own p95.
fn p95(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let idx = 0.95 * (n - 1) as f64;
    let lower = idx as usize;
    let upper = (lower + 1).min(n - 1);
    let frac = idx - lower as f64;

    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}

/// Round to 2 decimals, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(region: &str, latency_ms: f64, uptime_pct: f64) -> TelemetryRecord {
        TelemetryRecord {
            region: Some(region.to_string()),
            latency_ms,
            uptime_pct,
        }
    }

    #[test]
    fn test_two_record_region() {
        let dataset = vec![rec("us", 100.0, 99.9), rec("us", 200.0, 99.5)];
        let results = aggregate(&dataset, &["us".to_string()], 150);

        let us = &results["us"];
        assert_eq!(us.avg_latency, 150.0);
        // idx = 0.95, lower = 0, upper = 1, frac = 0.95 -> 100 + 0.95 * 100
        assert_eq!(us.p95_latency, 195.0);
        assert_eq!(us.avg_uptime, 99.7);
        assert_eq!(us.breaches, 1);
    }

    #[test]
    fn test_single_record_p95_is_the_value() {
        let dataset = vec![rec("eu", 42.5, 99.0)];
        let results = aggregate(&dataset, &["eu".to_string()], 100);
        assert_eq!(results["eu"].p95_latency, 42.5);
        assert_eq!(results["eu"].avg_latency, 42.5);
    }

    #[test]
    fn test_p95_interpolation_two_samples() {
        // idx = 0.95, frac = 0.95 -> 10 + 0.95 * (20 - 10)
        let dataset = vec![rec("ap", 10.0, 99.0), rec("ap", 20.0, 99.0)];
        let results = aggregate(&dataset, &["ap".to_string()], 1000);
        assert_eq!(results["ap"].p95_latency, 19.5);
    }

    #[test]
    fn test_unmatched_region_omitted() {
        let dataset = vec![rec("us", 100.0, 99.9)];
        let results = aggregate(&dataset, &["mars".to_string()], 100);
        assert!(results.is_empty());
    }

    #[test]
    fn test_record_without_region_never_matches() {
        let dataset = vec![TelemetryRecord {
            region: None,
            latency_ms: 100.0,
            uptime_pct: 99.0,
        }];
        let results = aggregate(&dataset, &["us".to_string()], 50);
        assert!(results.is_empty());
    }

    #[test]
    fn test_breach_counting_is_strict() {
        let dataset = vec![rec("us", 150.0, 99.0), rec("us", 151.0, 99.0)];
        let results = aggregate(&dataset, &["us".to_string()], 150);
        // 150 is not strictly greater than the threshold
        assert_eq!(results["us"].breaches, 1);
    }

    #[test]
    fn test_negative_threshold_breaches_everything() {
        let dataset = vec![rec("us", 0.0, 99.0), rec("us", 5.0, 99.0)];
        let results = aggregate(&dataset, &["us".to_string()], -1);
        assert_eq!(results["us"].breaches, 2);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 0.125 is exactly representable; the .5 at the hundredths place
        // rounds away from zero to 0.13 (banker's rounding would give 0.12)
        let dataset = vec![rec("us", 0.125, 0.0)];
        let results = aggregate(&dataset, &["us".to_string()], 100);
        assert_eq!(results["us"].avg_latency, 0.13);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(aggregate(&[], &["us".to_string()], 100).is_empty());
        assert!(aggregate(&[rec("us", 1.0, 1.0)], &[], 100).is_empty());
    }
}
