//! Plain-text rendering of an estimation result.
//!
//! Pure formatting over an [`EstimationResult`]; machine-readable output
//! comes from the serde derives on the result types instead.

use std::fmt::Write;

use citescan_core::types::EstimationResult;

/// Render a human-readable report surfacing every field of the result.
pub fn render_report(result: &EstimationResult) -> String {
    let mut out = String::new();
    let sample = &result.sample;

    let _ = writeln!(out, "=== CITATION-FLAG ESTIMATION REPORT ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "METHODOLOGY:");
    let _ = writeln!(out, "- Random sampling from the tracked document population");
    let _ = writeln!(out, "- Sample size: {} documents", group_thousands(result.sample_size as f64));
    let _ = writeln!(out, "- Population: {} documents", group_thousands(result.population_size as f64));
    let _ = writeln!(out);
    let _ = writeln!(out, "SAMPLE STATISTICS:");
    let _ = writeln!(out, "- Mean tags per document: {:.3}", result.mean_tags_per_document);
    let _ = writeln!(out, "- Standard deviation: {:.3}", result.std_deviation);
    let _ = writeln!(out, "- Standard error: {:.3}", result.std_error);
    let _ = writeln!(out, "- Median: {}", sample.median);
    let _ = writeln!(out, "- Mode: {}", render_modes(sample.modes.as_deref()));
    let _ = writeln!(out, "- Range: {} - {} tags per document", sample.min, sample.max);
    let _ = writeln!(out, "- Documents with zero tags: {}", sample.zero_tag_documents);
    let _ = writeln!(out, "- Documents with multiple tags: {}", sample.multi_tag_documents);
    let _ = writeln!(out);
    let _ = writeln!(out, "DISTRIBUTION:");
    let _ = writeln!(out, "- 25th percentile: {:.1} tags", sample.percentiles.p25);
    let _ = writeln!(out, "- 50th percentile: {:.1} tags", sample.percentiles.p50);
    let _ = writeln!(out, "- 75th percentile: {:.1} tags", sample.percentiles.p75);
    let _ = writeln!(out, "- 90th percentile: {:.1} tags", sample.percentiles.p90);
    let _ = writeln!(out, "- 95th percentile: {:.1} tags", sample.percentiles.p95);
    let _ = writeln!(out, "- 99th percentile: {:.1} tags", sample.percentiles.p99);
    let _ = writeln!(out);
    let _ = writeln!(out, "ESTIMATION RESULTS:");
    let _ = writeln!(out, "- Estimated total tags: {}", group_thousands(result.estimated_total));
    let _ = writeln!(
        out,
        "- 95% confidence interval: {} - {}",
        group_thousands(result.confidence_interval.lower),
        group_thousands(result.confidence_interval.upper)
    );
    let _ = writeln!(out, "- Margin of error: +/-{} tags", group_thousands(result.margin_of_error));
    let _ = writeln!(
        out,
        "- Relative margin of error: +/-{:.1}%",
        result.relative_margin() * 100.0
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "INTERPRETATION:");
    let _ = writeln!(
        out,
        "We are 95% confident that the total number of citation-flag tags"
    );
    let _ = writeln!(
        out,
        "across the corpus is between {} and {}.",
        group_thousands(result.confidence_interval.lower),
        group_thousands(result.confidence_interval.upper)
    );

    out
}

fn render_modes(modes: Option<&[u64]>) -> String {
    match modes {
        Some(values) => values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        None => "no unique mode".to_string(),
    }
}

/// Round to the nearest integer and insert thousands separators.
fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
