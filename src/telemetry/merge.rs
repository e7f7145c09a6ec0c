//! Dual-series merger.
//!
//! Pairs two independently fetched bundles into one comparable
//! snapshot and attaches static track metadata. The two bundles may
//! have different lengths and different missing fields — the merger
//! never truncates, pads, or rejects; chart consumers render each
//! series against its own index domain and omit views a bundle lacks.

use crate::tracks;
use crate::types::{MergedTelemetry, TelemetrySeriesBundle};

/// Merge two drivers' bundles for one track.
///
/// Metadata lookup is exact-match and never fails: an unknown track
/// gets the placeholder image and an empty fact list.
pub fn merge(
    driver1: TelemetrySeriesBundle,
    driver2: TelemetrySeriesBundle,
    track: &str,
) -> MergedTelemetry {
    MergedTelemetry {
        driver1,
        driver2,
        circuit_image: tracks::circuit_image(track).to_string(),
        fun_facts: tracks::fun_facts(track)
            .iter()
            .map(|f| f.to_string())
            .collect(),
    }
}

/// Whether the sector-time comparison view can be shown.
///
/// Requires both bundles to expose the field; if either lacks it the
/// view is simply omitted, not an error.
pub fn sector_comparison_available(merged: &MergedTelemetry) -> bool {
    merged.driver1.sector_times.is_some() && merged.driver2.sector_times.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(driver: &str) -> TelemetrySeriesBundle {
        TelemetrySeriesBundle {
            driver: Some(driver.to_string()),
            sector_times: Some(vec![29.1, 38.4, 27.9]),
            speed: Some(vec![300.0, 310.0, 312.0]),
            throttle: Some(vec![100.0, 100.0, 98.0]),
            brake: Some(vec![false, false, true]),
            ..Default::default()
        }
    }

    #[test]
    fn merge_attaches_known_track_metadata() {
        let merged = merge(bundle("VER"), bundle("LEC"), "Silverstone");
        assert_eq!(merged.circuit_image, "/Silverstone_Circuit.avif");
        assert_eq!(merged.fun_facts.len(), 3);
    }

    #[test]
    fn merge_with_unknown_track_still_succeeds() {
        let merged = merge(bundle("VER"), bundle("LEC"), "Suzuka");
        assert!(!merged.circuit_image.is_empty());
        assert_eq!(merged.circuit_image, tracks::DEFAULT_CIRCUIT_IMAGE);
        assert!(merged.fun_facts.is_empty());
    }

    #[test]
    fn merge_does_not_alter_either_bundle() {
        let a = bundle("VER");
        let b = bundle("LEC");
        let (a_copy, b_copy) = (a.clone(), b.clone());
        let merged = merge(a, b, "Monaco");
        assert_eq!(merged.driver1, a_copy);
        assert_eq!(merged.driver2, b_copy);
    }

    #[test]
    fn unequal_lengths_survive_the_merge() {
        let mut a = bundle("VER");
        let mut b = bundle("LEC");
        a.speed = Some(vec![1.0, 2.0, 3.0]);
        b.speed = Some(vec![1.0, 2.0]);
        let merged = merge(a, b, "Bahrain");
        assert_eq!(merged.driver1.speed.as_ref().unwrap().len(), 3);
        assert_eq!(merged.driver2.speed.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn sector_view_needs_both_bundles() {
        let mut b = bundle("LEC");
        b.sector_times = None;
        let merged = merge(bundle("VER"), b, "Bahrain");
        assert!(!sector_comparison_available(&merged));

        let merged = merge(bundle("VER"), bundle("LEC"), "Bahrain");
        assert!(sector_comparison_available(&merged));
    }
}
