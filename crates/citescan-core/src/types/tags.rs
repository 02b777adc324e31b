//! Tag recognition types: categories, matches, and scan summaries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editorial category of a citation-flag template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagCategory {
    /// Missing citation markers ({{fact}}, {{citation needed}}, {{cn}}).
    CitationNeeded,
    /// Present-but-inadequate source markers ({{better source needed}}, …).
    SourceQuality,
    /// Bracketed wh-question markers ({{who?}}, {{when?}}, …).
    Clarification,
    /// Verification-outcome markers ({{dubious}}, {{failed verification}}, …).
    Verification,
}

impl TagCategory {
    /// All categories, in reporting order.
    pub const ALL: [TagCategory; 4] = [
        TagCategory::CitationNeeded,
        TagCategory::SourceQuality,
        TagCategory::Clarification,
        TagCategory::Verification,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CitationNeeded => "citation_needed",
            Self::SourceQuality => "source_quality",
            Self::Clarification => "clarification",
            Self::Verification => "verification",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CitationNeeded => "Citation Needed",
            Self::SourceQuality => "Source Quality",
            Self::Clarification => "Clarification",
            Self::Verification => "Verification",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One template occurrence found in a document's text.
///
/// Produced per scan and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagMatch {
    /// Category of the matched family.
    pub category: TagCategory,
    /// Canonical family name (e.g., "citation needed").
    pub family: &'static str,
    /// The literal matched substring, as it appears in the source.
    pub text: String,
    /// Byte offset of the match in the source text.
    pub offset: usize,
}

/// Per-family aggregate from a detailed scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyBreakdown {
    /// Canonical family name.
    pub family: &'static str,
    /// Category of the family.
    pub category: TagCategory,
    /// Number of occurrences in the scanned text.
    pub count: usize,
    /// Up to 2 literal example matches.
    pub examples: Vec<String>,
}

/// Result of a detailed scan: total count, per-family breakdown, and a
/// bounded global example list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedTagCount {
    /// Total occurrences across all families.
    pub total: usize,
    /// One entry per family that matched, in catalog order.
    pub breakdown: Vec<FamilyBreakdown>,
    /// At most 15 literal examples, in catalog order.
    pub examples: Vec<String>,
}

impl DetailedTagCount {
    /// Empty scan result (no matches).
    pub fn empty() -> Self {
        Self {
            total: 0,
            breakdown: Vec::new(),
            examples: Vec::new(),
        }
    }
}

/// The same literal match space as [`DetailedTagCount`], regrouped into the
/// four editorial categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizedTags {
    pub citation_needed: Vec<String>,
    pub source_quality: Vec<String>,
    pub clarification: Vec<String>,
    pub verification: Vec<String>,
}

impl CategorizedTags {
    /// Matched literals for one category.
    pub fn get(&self, category: TagCategory) -> &[String] {
        match category {
            TagCategory::CitationNeeded => &self.citation_needed,
            TagCategory::SourceQuality => &self.source_quality,
            TagCategory::Clarification => &self.clarification,
            TagCategory::Verification => &self.verification,
        }
    }

    pub(crate) fn get_mut(&mut self, category: TagCategory) -> &mut Vec<String> {
        match category {
            TagCategory::CitationNeeded => &mut self.citation_needed,
            TagCategory::SourceQuality => &mut self.source_quality,
            TagCategory::Clarification => &mut self.clarification,
            TagCategory::Verification => &mut self.verification,
        }
    }

    /// Push a matched literal into its category bucket.
    pub fn push(&mut self, category: TagCategory, literal: String) {
        self.get_mut(category).push(literal);
    }

    /// Total matches across all four categories.
    pub fn total(&self) -> usize {
        TagCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(TagCategory::CitationNeeded.name(), "citation_needed");
        assert_eq!(TagCategory::SourceQuality.label(), "Source Quality");
        assert_eq!(TagCategory::Verification.to_string(), "verification");
    }

    #[test]
    fn test_categorized_tags_totals() {
        let mut tags = CategorizedTags::default();
        assert!(tags.is_empty());

        tags.push(TagCategory::CitationNeeded, "{{fact}}".to_string());
        tags.push(TagCategory::Clarification, "{{who?}}".to_string());
        tags.push(TagCategory::Clarification, "{{when?}}".to_string());

        assert_eq!(tags.total(), 3);
        assert_eq!(tags.get(TagCategory::Clarification).len(), 2);
        assert!(tags.get(TagCategory::Verification).is_empty());
    }
}
