//! Tag recognition engine.
//!
//! Scans raw wiki markup against the static template catalog and reports
//! exact counts, per-family breakdowns with examples, and category
//! groupings. Pure functions of the input text: no side effects, safe
//! under concurrent callers.

pub mod catalog;

pub use catalog::{TagPatternSpec, TAG_CATALOG};

use regex::Regex;

use citescan_core::types::{
    CategorizedTags, DetailedTagCount, FamilyBreakdown, TagMatch,
};

/// Maximum literal examples recorded per family in a detailed scan.
const EXAMPLES_PER_FAMILY: usize = 2;
/// Maximum literal examples in the global example list.
const MAX_GLOBAL_EXAMPLES: usize = 15;

/// A catalog family with its compiled matcher.
struct FamilyMatcher {
    spec: &'static TagPatternSpec,
    regex: Regex,
}

/// Compiled recognizer over the full template catalog.
///
/// Construction compiles one case-insensitive regex per family; scanning
/// counts every non-overlapping occurrence. Bare and parameterized forms
/// of the same family count additively — `{{fact}} {{fact|date=2024}}`
/// counts 2 — but a single literal span is never counted twice.
pub struct TagRecognizer {
    matchers: Vec<FamilyMatcher>,
}

impl TagRecognizer {
    /// Compile the catalog into a recognizer.
    pub fn new() -> Result<Self, regex::Error> {
        let mut matchers = Vec::with_capacity(TAG_CATALOG.len());
        for spec in TAG_CATALOG {
            let regex = Regex::new(&catalog::family_pattern(spec.family))?;
            matchers.push(FamilyMatcher { spec, regex });
        }
        Ok(Self { matchers })
    }

    /// Number of catalog families the recognizer matches against.
    pub fn family_count(&self) -> usize {
        self.matchers.len()
    }

    /// Count every citation-flag tag occurrence in `text`.
    pub fn count_tags(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.matchers
            .iter()
            .map(|m| m.regex.find_iter(text).count())
            .sum()
    }

    /// Count occurrences with a per-family breakdown and bounded example
    /// lists, in catalog order.
    pub fn count_tags_detailed(&self, text: &str) -> DetailedTagCount {
        if text.is_empty() {
            return DetailedTagCount::empty();
        }

        let mut total = 0;
        let mut breakdown = Vec::new();
        let mut examples = Vec::new();

        for matcher in &self.matchers {
            let found: Vec<&str> = matcher.regex.find_iter(text).map(|f| f.as_str()).collect();
            if found.is_empty() {
                continue;
            }

            total += found.len();
            let family_examples: Vec<String> = found
                .iter()
                .take(EXAMPLES_PER_FAMILY)
                .map(|s| s.to_string())
                .collect();
            examples.extend(family_examples.iter().cloned());

            breakdown.push(FamilyBreakdown {
                family: matcher.spec.family,
                category: matcher.spec.category,
                count: found.len(),
                examples: family_examples,
            });
        }

        examples.truncate(MAX_GLOBAL_EXAMPLES);

        DetailedTagCount {
            total,
            breakdown,
            examples,
        }
    }

    /// Group every matched literal into its editorial category.
    ///
    /// Covers the same literal space as [`count_tags`](Self::count_tags):
    /// for text using only cataloged families, the per-category totals sum
    /// to the plain count.
    pub fn categorize(&self, text: &str) -> CategorizedTags {
        let mut categories = CategorizedTags::default();
        if text.is_empty() {
            return categories;
        }

        for matcher in &self.matchers {
            for found in matcher.regex.find_iter(text) {
                categories.push(matcher.spec.category, found.as_str().to_string());
            }
        }

        categories
    }

    /// Every occurrence with its position, ordered by catalog family and
    /// then by position within the text.
    pub fn find_matches(&self, text: &str) -> Vec<TagMatch> {
        let mut matches = Vec::new();
        if text.is_empty() {
            return matches;
        }

        for matcher in &self.matchers {
            for found in matcher.regex.find_iter(text) {
                matches.push(TagMatch {
                    category: matcher.spec.category,
                    family: matcher.spec.family,
                    text: found.as_str().to_string(),
                    offset: found.start(),
                });
            }
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citescan_core::types::TagCategory;

    fn recognizer() -> TagRecognizer {
        TagRecognizer::new().unwrap()
    }

    #[test]
    fn test_catalog_compiles() {
        assert_eq!(recognizer().family_count(), TAG_CATALOG.len());
    }

    #[test]
    fn test_bare_and_parameterized_count_additively() {
        let r = recognizer();
        assert_eq!(r.count_tags("{{fact}} {{fact|date=2024}}"), 2);
    }

    #[test]
    fn test_parameterized_span_counts_once() {
        let r = recognizer();
        // The bare-form alternative must not also match inside this span.
        assert_eq!(r.count_tags("{{fact|date=January 2024|reason=uncited}}"), 1);
    }

    #[test]
    fn test_case_insensitive() {
        let r = recognizer();
        assert_eq!(r.count_tags("{{FACT}}"), 1);
        assert_eq!(r.count_tags("{{Fact}}"), 1);
        assert_eq!(r.count_tags("{{Citation Needed}}"), 1);
    }

    #[test]
    fn test_empty_text() {
        let r = recognizer();
        assert_eq!(r.count_tags(""), 0);
        assert_eq!(r.count_tags_detailed("").total, 0);
        assert!(r.categorize("").is_empty());
        assert!(r.find_matches("").is_empty());
    }

    #[test]
    fn test_no_templates() {
        let r = recognizer();
        assert_eq!(r.count_tags("plain prose with {{infobox}} markup"), 0);
    }

    #[test]
    fn test_punctuated_family_names() {
        let r = recognizer();
        assert_eq!(r.count_tags("{{unreliable source?}}"), 1);
        assert_eq!(r.count_tags("{{according to whom?|date=May 2023}}"), 1);
        assert_eq!(r.count_tags("{{third-party needed}}"), 1);
    }

    #[test]
    fn test_unterminated_parameter_block_does_not_match() {
        let r = recognizer();
        assert_eq!(r.count_tags("{{fact|date=2024"), 0);
    }

    #[test]
    fn test_find_matches_positions() {
        let r = recognizer();
        let text = "abc {{cn}} def {{cn|x}}";
        let matches = r.find_matches(text);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].offset, 4);
        assert_eq!(matches[0].text, "{{cn}}");
        assert_eq!(matches[1].offset, 15);
        assert_eq!(matches[0].category, TagCategory::CitationNeeded);
    }

    #[test]
    fn test_breakdown_in_catalog_order() {
        let r = recognizer();
        // "dubious" comes after "fact" in the catalog even though it
        // appears first in the text.
        let detail = r.count_tags_detailed("{{dubious}} then {{fact}}");
        assert_eq!(detail.total, 2);
        assert_eq!(detail.breakdown[0].family, "fact");
        assert_eq!(detail.breakdown[1].family, "dubious");
    }
}
