//! Random sample collection over a category population.
//!
//! Draws random offsets across the category, fetches a member batch at
//! each offset, and deduplicates titles until the desired sample size is
//! reached. Batch failures are logged and skipped.

use std::collections::HashSet;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use citescan_core::types::DocumentRef;

use crate::error::CorpusError;
use crate::mediawiki::MediaWikiClient;
use crate::supplier::DocumentSupplier;

/// Batch size for category-member fetches.
const BATCH_LIMIT: usize = 50;
/// Kept below the population end so a batch never starts past the last
/// member.
const OFFSET_HEADROOM: u64 = 500;
/// Upper bound on offset draws, regardless of sample size.
const MAX_ATTEMPTS: usize = 1000;

/// Collects a random sample of category members via random offsets.
pub struct CategorySampler {
    client: MediaWikiClient,
    pacing: Duration,
}

impl CategorySampler {
    pub fn new(client: MediaWikiClient, pacing: Duration) -> Self {
        Self { client, pacing }
    }

    /// Draw up to `desired` distinct documents from the category.
    pub async fn collect(
        &self,
        desired: usize,
        population: u64,
    ) -> Result<Vec<DocumentRef>, CorpusError> {
        let offsets = draw_offsets(&mut rand::rng(), desired, population);
        let mut documents: Vec<DocumentRef> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for offset in offsets {
            if documents.len() >= desired {
                break;
            }

            let limit = BATCH_LIMIT.min(desired - documents.len());
            match self.client.category_members(offset, limit).await {
                Ok(batch) => {
                    for doc in batch {
                        if documents.len() >= desired {
                            break;
                        }
                        if seen.insert(doc.title.clone()) {
                            documents.push(doc);
                        }
                    }
                    debug!(collected = documents.len(), desired, "sample progress");
                    tokio::time::sleep(self.pacing).await;
                }
                Err(error) => {
                    warn!(offset, %error, "failed to fetch batch, skipping");
                    continue;
                }
            }
        }

        Ok(documents)
    }
}

impl DocumentSupplier for CategorySampler {
    async fn population_size(&self) -> Result<u64, CorpusError> {
        self.client.category_size().await
    }

    async fn list_sample_documents(
        &self,
        desired: usize,
    ) -> Result<Vec<DocumentRef>, CorpusError> {
        let population = self.client.category_size().await?;
        self.collect(desired, population).await
    }

    async fn document_text(&self, doc: &DocumentRef) -> Result<String, CorpusError> {
        self.client.page_text(&doc.title).await
    }
}

/// Random offsets across the population: up to 2 × desired draws (capped
/// at [`MAX_ATTEMPTS`]), deduplicated and sorted ascending so batches walk
/// the category in order.
fn draw_offsets<R: Rng>(rng: &mut R, desired: usize, population: u64) -> Vec<u64> {
    let upper = population.saturating_sub(OFFSET_HEADROOM).max(1);
    let attempts = (desired * 2).min(MAX_ATTEMPTS);
    let mut offsets: Vec<u64> = (0..attempts).map(|_| rng.random_range(0..upper)).collect();
    offsets.sort_unstable();
    offsets.dedup();
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_offsets_are_sorted_and_deduplicated() {
        let mut rng = StdRng::seed_from_u64(7);
        let offsets = draw_offsets(&mut rng, 100, 553_000);
        assert!(offsets.len() <= 200);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_offsets_stay_below_headroom_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        let offsets = draw_offsets(&mut rng, 50, 10_000);
        assert!(offsets.iter().all(|&o| o < 10_000 - OFFSET_HEADROOM));
    }

    #[test]
    fn test_offsets_capped_at_max_attempts() {
        let mut rng = StdRng::seed_from_u64(7);
        let offsets = draw_offsets(&mut rng, 5_000, 1_000_000);
        assert!(offsets.len() <= MAX_ATTEMPTS);
    }

    #[test]
    fn test_tiny_population_degenerates_to_offset_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let offsets = draw_offsets(&mut rng, 10, 100);
        assert_eq!(offsets, vec![0]);
    }
}
