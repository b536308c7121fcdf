//! Document categories inferred from path hints.

use serde::Serialize;

/// Category of a document, inferred from its path.
///
/// The category decides which advanced sections are mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentCategory {
    DailyUpdate,
    Architecture,
    ValidationReport,
    MeetingTranscript,
    BusinessRules,
    #[serde(rename = "technical-specification")]
    TechnicalSpec,
    Standards,
    Configuration,
    UserProcess,
    General,
}

/// Path markers in priority order. The first entry with a matching marker wins.
const CATEGORY_MARKERS: &[(DocumentCategory, &[&str])] = &[
    (DocumentCategory::DailyUpdate, &["daily-update", "daily_update"]),
    (DocumentCategory::Architecture, &["architecture", "architectural"]),
    (DocumentCategory::ValidationReport, &["validation-report", "validation_report"]),
    (DocumentCategory::MeetingTranscript, &["meeting-transcript", "meeting_transcript"]),
    (DocumentCategory::BusinessRules, &["business-rules", "business_rules"]),
    (DocumentCategory::TechnicalSpec, &["technical-spec", "technical_spec"]),
    (DocumentCategory::Standards, &["standards"]),
    (DocumentCategory::Configuration, &["configuration"]),
    (DocumentCategory::UserProcess, &["user-process", "user_process"]),
];

impl DocumentCategory {
    /// All categories, `General` last.
    pub const ALL: [DocumentCategory; 10] = [
        Self::DailyUpdate,
        Self::Architecture,
        Self::ValidationReport,
        Self::MeetingTranscript,
        Self::BusinessRules,
        Self::TechnicalSpec,
        Self::Standards,
        Self::Configuration,
        Self::UserProcess,
        Self::General,
    ];

    /// Infer the category from a path hint (case-insensitive, first match wins).
    pub fn infer(path_hint: &str) -> Self {
        let hint = path_hint.to_lowercase();
        CATEGORY_MARKERS
            .iter()
            .find(|(_, markers)| markers.iter().any(|m| hint.contains(m)))
            .map_or(Self::General, |(category, _)| *category)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyUpdate => "daily-update",
            Self::Architecture => "architecture",
            Self::ValidationReport => "validation-report",
            Self::MeetingTranscript => "meeting-transcript",
            Self::BusinessRules => "business-rules",
            Self::TechnicalSpec => "technical-specification",
            Self::Standards => "standards",
            Self::Configuration => "configuration",
            Self::UserProcess => "user-process",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("unknown document category: {}", s))
    }
}

/// Which sections are mandatory for which categories.
///
/// Sections absent from the table are advisory everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementTable {
    entries: Vec<(&'static str, Requirement)>,
}

/// When a section is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Always,
    For(Vec<DocumentCategory>),
}

impl RequirementTable {
    pub fn new(entries: Vec<(&'static str, Requirement)>) -> Self {
        Self { entries }
    }

    /// Whether `section` must be present in a document of `category`.
    pub fn is_section_required(&self, section: &str, category: DocumentCategory) -> bool {
        self.entries.iter().find(|(name, _)| *name == section).is_some_and(|(_, req)| {
            match req {
                Requirement::Always => true,
                Requirement::For(categories) => categories.contains(&category),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("docs/daily-updates/2025-01-02.md", DocumentCategory::DailyUpdate)]
    #[case("docs/Architecture/overview.md", DocumentCategory::Architecture)]
    #[case("docs/architectural-decisions/adr-1.md", DocumentCategory::Architecture)]
    #[case("reports/validation_report_q1.md", DocumentCategory::ValidationReport)]
    #[case("meetings/meeting-transcript-jan.md", DocumentCategory::MeetingTranscript)]
    #[case("docs/BUSINESS_RULES/contracts.md", DocumentCategory::BusinessRules)]
    #[case("docs/technical-specs/api.md", DocumentCategory::TechnicalSpec)]
    #[case("docs/standards/naming.md", DocumentCategory::Standards)]
    #[case("docs/configuration/billing.md", DocumentCategory::Configuration)]
    #[case("docs/user-processes/invoicing.md", DocumentCategory::UserProcess)]
    #[case("docs/misc/readme.md", DocumentCategory::General)]
    #[case("", DocumentCategory::General)]
    fn infers_category(#[case] hint: &str, #[case] expected: DocumentCategory) {
        assert_eq!(DocumentCategory::infer(hint), expected);
    }

    #[test]
    fn earlier_marker_wins_over_later_one() {
        // business-rules is checked before standards.
        assert_eq!(
            DocumentCategory::infer("standards/business-rules/fees.md"),
            DocumentCategory::BusinessRules
        );
        // architecture is checked before configuration.
        assert_eq!(
            DocumentCategory::infer("configuration/architecture.md"),
            DocumentCategory::Architecture
        );
        // daily-update beats everything.
        assert_eq!(
            DocumentCategory::infer("architecture/daily-update.md"),
            DocumentCategory::DailyUpdate
        );
    }

    #[test]
    fn display_and_parse_agree() {
        for category in DocumentCategory::ALL {
            assert_eq!(category.to_string().parse::<DocumentCategory>(), Ok(category));
        }
        assert!("nonsense".parse::<DocumentCategory>().is_err());
    }

    #[test]
    fn serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&DocumentCategory::TechnicalSpec).unwrap(),
            "\"technical-specification\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentCategory::BusinessRules).unwrap(),
            "\"business-rules\""
        );
    }

    #[test]
    fn requirement_lookup() {
        let table = RequirementTable::new(vec![
            ("always", Requirement::Always),
            ("some", Requirement::For(vec![DocumentCategory::Standards])),
        ]);
        assert!(table.is_section_required("always", DocumentCategory::General));
        assert!(table.is_section_required("some", DocumentCategory::Standards));
        assert!(!table.is_section_required("some", DocumentCategory::General));
        assert!(!table.is_section_required("unlisted", DocumentCategory::Standards));
    }
}
