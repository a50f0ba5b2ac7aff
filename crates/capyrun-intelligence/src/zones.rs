// ABOUTME: Heart-rate time-in-zone histogram over user-configured zone boundaries
// ABOUTME: Sums per-sample delta seconds into right-inclusive bins between ascending bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use capyrun_core::formatters::round_to;
use capyrun_core::models::{SamplePoint, ZoneTime};
use tracing::debug;

/// Seconds spent in each heart-rate zone.
///
/// `bounds` must be ascending (as produced by `parse_zone_bounds`); `n` bounds
/// yield `n + 1` zones. A heart rate equal to a bound falls into the lower zone.
/// Samples without heart rate are not counted, so the zone seconds sum to the
/// delta seconds of the heart-rate samples.
///
/// Returns `None` when there are no bounds or no heart-rate samples.
#[must_use]
pub fn zone_time(samples: &[SamplePoint], bounds: &[u32]) -> Option<Vec<ZoneTime>> {
    if bounds.is_empty() {
        debug!("Zone time skipped: no valid zone bounds");
        return None;
    }
    if samples.iter().all(|s| s.heart_rate.is_none()) {
        debug!("Zone time skipped: no heart-rate samples");
        return None;
    }

    let mut seconds = vec![0.0_f64; bounds.len() + 1];
    for sample in samples {
        if let Some(hr) = sample.heart_rate {
            seconds[zone_index(hr, bounds)] += sample.delta_seconds;
        }
    }

    let total: f64 = seconds.iter().sum();
    let rows = seconds
        .iter()
        .enumerate()
        .map(|(index, &zone_seconds)| ZoneTime {
            zone: format!("Z{}", index + 1),
            lower_bpm: index.checked_sub(1).map(|prev| bounds[prev]),
            upper_bpm: bounds.get(index).copied(),
            seconds: zone_seconds,
            percent: if total > 0.0 {
                round_to(zone_seconds / total * 100.0, 1)
            } else {
                0.0
            },
        })
        .collect();
    Some(rows)
}

fn zone_index(hr: f64, bounds: &[u32]) -> usize {
    bounds
        .iter()
        .take_while(|&&bound| hr > f64::from(bound))
        .count()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn hr_sample(hr: Option<f64>, dt: f64) -> SamplePoint {
        SamplePoint {
            heart_rate: hr,
            delta_seconds: dt,
            ..SamplePoint::default()
        }
    }

    #[test]
    fn test_boundary_value_goes_to_lower_zone() {
        assert_eq!(zone_index(120.0, &[120, 140]), 0);
        assert_eq!(zone_index(120.5, &[120, 140]), 1);
        assert_eq!(zone_index(141.0, &[120, 140]), 2);
    }

    #[test]
    fn test_zone_rows_labels_and_bounds() {
        let samples = vec![hr_sample(Some(100.0), 10.0), hr_sample(Some(150.0), 30.0)];
        let rows = zone_time(&samples, &[120, 140]).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].zone, "Z1");
        assert_eq!(rows[0].lower_bpm, None);
        assert_eq!(rows[0].upper_bpm, Some(120));
        assert_eq!(rows[2].lower_bpm, Some(140));
        assert_eq!(rows[2].upper_bpm, None);
        assert!((rows[0].percent - 25.0).abs() < f64::EPSILON);
        assert!((rows[2].percent - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_bounds_or_no_hr_is_none() {
        let samples = vec![hr_sample(None, 1.0)];
        assert!(zone_time(&samples, &[120]).is_none());
        assert!(zone_time(&[hr_sample(Some(130.0), 1.0)], &[]).is_none());
    }
}
