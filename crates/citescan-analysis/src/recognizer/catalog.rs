//! The citation-flag template catalog: 21 families across 4 categories.
//!
//! Each family matches both the bare form `{{name}}` and the parameterized
//! form `{{name|...}}` through a single optional-suffix pattern, so the two
//! surface forms can never double count the same span. Catalog order is
//! significant: detailed breakdowns and example lists preserve it.

use citescan_core::types::TagCategory;

/// One row of the static catalog.
#[derive(Debug, Clone, Copy)]
pub struct TagPatternSpec {
    /// Canonical family name as it appears between the braces.
    pub family: &'static str,
    /// Category the family belongs to.
    pub category: TagCategory,
}

/// All recognized template families.
pub static TAG_CATALOG: &[TagPatternSpec] = &[
    // ── Citation needed ──
    TagPatternSpec { family: "fact", category: TagCategory::CitationNeeded },
    TagPatternSpec { family: "citation needed", category: TagCategory::CitationNeeded },
    TagPatternSpec { family: "cn", category: TagCategory::CitationNeeded },
    // ── Source quality ──
    TagPatternSpec { family: "better source needed", category: TagCategory::SourceQuality },
    TagPatternSpec { family: "unreliable source?", category: TagCategory::SourceQuality },
    TagPatternSpec { family: "verify source", category: TagCategory::SourceQuality },
    TagPatternSpec { family: "primary source needed", category: TagCategory::SourceQuality },
    TagPatternSpec { family: "third-party needed", category: TagCategory::SourceQuality },
    TagPatternSpec { family: "sources needed", category: TagCategory::SourceQuality },
    // ── Clarification ──
    TagPatternSpec { family: "according to whom?", category: TagCategory::Clarification },
    TagPatternSpec { family: "by whom?", category: TagCategory::Clarification },
    TagPatternSpec { family: "when?", category: TagCategory::Clarification },
    TagPatternSpec { family: "where?", category: TagCategory::Clarification },
    TagPatternSpec { family: "which?", category: TagCategory::Clarification },
    TagPatternSpec { family: "who?", category: TagCategory::Clarification },
    TagPatternSpec { family: "how?", category: TagCategory::Clarification },
    TagPatternSpec { family: "why?", category: TagCategory::Clarification },
    // ── Verification ──
    TagPatternSpec { family: "dubious", category: TagCategory::Verification },
    TagPatternSpec { family: "failed verification", category: TagCategory::Verification },
    TagPatternSpec { family: "page needed", category: TagCategory::Verification },
    TagPatternSpec { family: "full citation needed", category: TagCategory::Verification },
];

/// Build the regex source for one family: case-insensitive, bare or
/// parameterized, one match per literal occurrence.
pub(crate) fn family_pattern(family: &str) -> String {
    format!(r"(?i)\{{\{{{}(?:\|[^}}]*)?\}}\}}", regex::escape(family))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(TAG_CATALOG.len(), 21);
    }

    #[test]
    fn test_every_family_has_exactly_one_category() {
        // Family names are unique, so each maps to exactly one category.
        let mut seen = std::collections::HashSet::new();
        for spec in TAG_CATALOG {
            assert!(seen.insert(spec.family), "duplicate family: {}", spec.family);
        }
    }

    #[test]
    fn test_category_partition() {
        let count = |cat| {
            TAG_CATALOG
                .iter()
                .filter(|s| s.category == cat)
                .count()
        };
        assert_eq!(count(TagCategory::CitationNeeded), 3);
        assert_eq!(count(TagCategory::SourceQuality), 6);
        assert_eq!(count(TagCategory::Clarification), 8);
        assert_eq!(count(TagCategory::Verification), 4);
    }

    #[test]
    fn test_family_pattern_escapes_metacharacters() {
        let pattern = family_pattern("unreliable source?");
        assert!(pattern.contains(r"unreliable source\?"));
        // The literal braces are escaped, the parameter block is optional.
        assert!(pattern.starts_with(r"(?i)\{\{"));
        assert!(pattern.ends_with(r"(?:\|[^}]*)?\}\}"));
    }
}
