//! Analysis prompt construction.
//!
//! Produces a fixed-template prompt whose size is bounded regardless
//! of how long the telemetry series are: sector times go in full (a
//! handful of values), speed and throttle are cut to a prefix sample
//! of the first ten values with an explicit truncation marker. Brake
//! is visual-only and stays out of the prompt.

use crate::types::{AnalysisRequest, MergedTelemetry, TelemetrySeriesBundle};

use super::AnalysisError;

/// Number of leading samples rendered for each long series.
const SAMPLE_PREFIX_LEN: usize = 10;

/// Marker appended after a prefix sample.
const TRUNCATION_MARKER: &str = "... (truncated)";

/// Output bound for the generated analysis, in tokens.
const MAX_OUTPUT_TOKENS: u32 = 500;

/// Sampling temperature — varied but grounded phrasing.
const TEMPERATURE: f32 = 0.7;

const PROMPT_TEMPLATE: &str = "\
Analyze the telemetry data for two drivers and provide insights:
- Compare sector times and identify strengths and weaknesses.
- Highlight differences in throttle, brake, and speed usage.
- Suggest possible strategies for improvement.

Telemetry Data:
Driver 1 ({driver1}):
- Sector Times: {sectors1}
- Speed: {speed1}{marker}
- Throttle: {throttle1}{marker}

Driver 2 ({driver2}):
- Sector Times: {sectors2}
- Speed: {speed2}{marker}
- Throttle: {throttle2}{marker}
";

/// Build the analysis request for a merged snapshot.
///
/// Fails with [`AnalysisError::InvalidInput`] when either bundle lacks
/// a driver identifier or a sector-time sequence.
pub fn build_prompt(merged: &MergedTelemetry, model: &str) -> Result<AnalysisRequest, AnalysisError> {
    let (driver1, sectors1) = required_fields(&merged.driver1, "driver1")?;
    let (driver2, sectors2) = required_fields(&merged.driver2, "driver2")?;

    let prompt = PROMPT_TEMPLATE
        .replace("{driver1}", driver1)
        .replace("{driver2}", driver2)
        .replace("{sectors1}", &render_series(sectors1, usize::MAX))
        .replace("{sectors2}", &render_series(sectors2, usize::MAX))
        .replace(
            "{speed1}",
            &render_optional(merged.driver1.speed.as_deref()),
        )
        .replace(
            "{speed2}",
            &render_optional(merged.driver2.speed.as_deref()),
        )
        .replace(
            "{throttle1}",
            &render_optional(merged.driver1.throttle.as_deref()),
        )
        .replace(
            "{throttle2}",
            &render_optional(merged.driver2.throttle.as_deref()),
        )
        .replace("{marker}", TRUNCATION_MARKER);

    Ok(AnalysisRequest {
        prompt,
        model: model.to_string(),
        max_tokens: MAX_OUTPUT_TOKENS,
        temperature: TEMPERATURE,
    })
}

fn required_fields<'a>(
    bundle: &'a TelemetrySeriesBundle,
    which: &str,
) -> Result<(&'a str, &'a [f64]), AnalysisError> {
    let driver = bundle
        .driver
        .as_deref()
        .ok_or_else(|| AnalysisError::InvalidInput(format!("{which} is missing a driver")))?;
    let sectors = bundle.sector_times.as_deref().ok_or_else(|| {
        AnalysisError::InvalidInput(format!("{which} is missing sector times"))
    })?;
    Ok((driver, sectors))
}

/// Render at most `limit` leading values, comma-separated.
fn render_series(values: &[f64], limit: usize) -> String {
    values
        .iter()
        .take(limit)
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A missing series renders the same as an empty one — the marker
/// still follows, so the template stays well-formed.
fn render_optional(values: Option<&[f64]>) -> String {
    render_series(values.unwrap_or(&[]), SAMPLE_PREFIX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::merge::merge;
    use crate::types::TelemetrySeriesBundle;

    fn bundle(driver: &str, speed_len: usize) -> TelemetrySeriesBundle {
        TelemetrySeriesBundle {
            driver: Some(driver.to_string()),
            sector_times: Some(vec![29.1, 38.4, 27.9]),
            speed: Some((0..speed_len).map(|i| 200.0 + i as f64).collect()),
            throttle: Some((0..speed_len).map(|i| (i % 101) as f64).collect()),
            brake: Some(vec![true; speed_len]),
            ..Default::default()
        }
    }

    fn merged(speed_len: usize) -> crate::types::MergedTelemetry {
        merge(bundle("VER", speed_len), bundle("LEC", speed_len), "Bahrain")
    }

    #[test]
    fn prompt_contains_drivers_and_full_sector_times() {
        let req = build_prompt(&merged(50), "gpt-3.5-turbo").unwrap();
        assert!(req.prompt.contains("Driver 1 (VER)"));
        assert!(req.prompt.contains("Driver 2 (LEC)"));
        assert!(req.prompt.contains("29.1, 38.4, 27.9"));
    }

    #[test]
    fn long_series_are_cut_to_ten_samples() {
        let req = build_prompt(&merged(1000), "gpt-3.5-turbo").unwrap();
        // First ten speed samples are 200..209; 210 must not appear.
        assert!(req.prompt.contains("200, 201, 202, 203, 204, 205, 206, 207, 208, 209... (truncated)"));
        assert!(!req.prompt.contains("209, 210"));
    }

    #[test]
    fn short_series_render_fully_with_marker() {
        let req = build_prompt(&merged(3), "gpt-3.5-turbo").unwrap();
        assert!(req.prompt.contains("200, 201, 202... (truncated)"));
    }

    #[test]
    fn empty_series_render_empty_segment_without_failing() {
        let mut m = merged(0);
        m.driver1.speed = Some(Vec::new());
        m.driver2.speed = None;
        let req = build_prompt(&m, "gpt-3.5-turbo").unwrap();
        assert!(req.prompt.contains("- Speed: ... (truncated)"));
    }

    #[test]
    fn brake_signal_stays_out_of_the_prompt() {
        let req = build_prompt(&merged(20), "gpt-3.5-turbo").unwrap();
        assert!(!req.prompt.contains("- Brake:"));
    }

    #[test]
    fn missing_driver_is_invalid_input() {
        let mut m = merged(10);
        m.driver1.driver = None;
        let err = build_prompt(&m, "gpt-3.5-turbo").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn missing_sector_times_is_invalid_input() {
        let mut m = merged(10);
        m.driver2.sector_times = None;
        let err = build_prompt(&m, "gpt-3.5-turbo").unwrap_err();
        match err {
            AnalysisError::InvalidInput(msg) => assert!(msg.contains("driver2")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn generation_parameters_are_fixed() {
        let req = build_prompt(&merged(10), "gpt-3.5-turbo").unwrap();
        assert_eq!(req.model, "gpt-3.5-turbo");
        assert_eq!(req.max_tokens, 500);
        assert!((req.temperature - 0.7).abs() < f32::EPSILON);
    }
}
