//! Pipeline integration tests over an in-memory supplier.

use citescan_core::config::CitescanConfig;
use citescan_core::types::DocumentRef;
use citescan_corpus::{EstimationPipeline, PipelineError, StaticSupplier};

fn doc(id: u64, title: &str, text: Option<&str>) -> (DocumentRef, Option<String>) {
    (DocumentRef::new(id, title), text.map(|t| t.to_string()))
}

fn fast_config() -> CitescanConfig {
    let mut config = CitescanConfig::default();
    config.corpus.pacing_ms = Some(0);
    config
}

#[tokio::test]
async fn pipeline_estimates_from_static_supplier() {
    let supplier = StaticSupplier::new(vec![
        doc(1, "One", Some("{{fact}} and {{cn|date=2024}}")),
        doc(2, "Two", Some("no tags here")),
        doc(3, "Three", Some("{{dubious}}")),
        doc(4, "Four", Some("{{who?}} {{when?}} {{why?}}")),
    ])
    .with_population(1_000);

    let pipeline = EstimationPipeline::new(supplier, &fast_config()).unwrap();
    let result = pipeline.run(4).await.unwrap();

    // Counts are [2, 0, 1, 3]: mean 1.5, total 1,500.
    assert_eq!(result.sample_size, 4);
    assert_eq!(result.population_size, 1_000);
    assert!((result.mean_tags_per_document - 1.5).abs() < 1e-12);
    assert!((result.estimated_total - 1_500.0).abs() < 1e-9);
}

#[tokio::test]
async fn pipeline_skips_failed_documents() {
    let supplier = StaticSupplier::new(vec![
        doc(1, "One", Some("{{fact}}")),
        doc(2, "Broken", None),
        doc(3, "Three", Some("{{cn}} {{cn}}")),
    ])
    .with_population(300);

    let pipeline = EstimationPipeline::new(supplier, &fast_config()).unwrap();
    let result = pipeline.run(3).await.unwrap();

    // The unreadable document is excluded, not counted as zero.
    assert_eq!(result.sample_size, 2);
    assert!((result.mean_tags_per_document - 1.5).abs() < 1e-12);
}

#[tokio::test]
async fn pipeline_respects_population_override() {
    let supplier = StaticSupplier::new(vec![
        doc(1, "One", Some("{{fact}}")),
        doc(2, "Two", Some("{{fact}}")),
    ]);

    let mut config = fast_config();
    config.sampling.population_override = Some(553_000);

    let pipeline = EstimationPipeline::new(supplier, &config).unwrap();
    let result = pipeline.run(2).await.unwrap();
    assert_eq!(result.population_size, 553_000);
    assert!((result.estimated_total - 553_000.0).abs() < 1e-6);
}

#[tokio::test]
async fn pipeline_rejects_empty_sample() {
    let supplier = StaticSupplier::new(vec![]);
    let pipeline = EstimationPipeline::new(supplier, &fast_config()).unwrap();
    let error = pipeline.run(10).await.unwrap_err();
    assert!(matches!(error, PipelineError::Estimate(_)));
}

#[tokio::test]
async fn pipeline_rejects_single_survivor() {
    // Two documents selected, one unreadable: the surviving sample of one
    // cannot support a variance estimate.
    let supplier = StaticSupplier::new(vec![
        doc(1, "One", Some("{{fact}}")),
        doc(2, "Broken", None),
    ]);
    let pipeline = EstimationPipeline::new(supplier, &fast_config()).unwrap();
    let error = pipeline.run(2).await.unwrap_err();
    assert!(matches!(error, PipelineError::Estimate(_)));
}
