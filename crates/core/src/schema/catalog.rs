//! The built-in document schema.

use std::sync::LazyLock;

use super::category::{DocumentCategory, Requirement, RequirementTable};
use super::enums::{
    ACCESS_LEVEL, BUSINESS_VALUE, GOVERNANCE_LEVEL, IMPLEMENTATION_PRIORITY,
    SECURITY_LEVEL, STATUS, TECHNICAL_COMPLEXITY, VALIDATION_STATUS,
};
use super::types::{Constraint, FieldKind, FieldRule, SectionRule};

use FieldKind::{List, Mapping, Number, String};

static STANDARD: LazyLock<Schema> = LazyLock::new(Schema::standard);

/// Complete, read-only validation schema.
///
/// Rules are walked in declaration order, which is also the order findings
/// are reported in.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Mandatory top-level fields.
    pub core_fields: Vec<FieldRule>,
    /// Top-level fields checked only when present.
    pub optional_fields: Vec<FieldRule>,
    /// Advanced sections.
    pub sections: Vec<SectionRule>,
    /// Per-category section requirements.
    pub requirements: RequirementTable,
}

impl Schema {
    /// Shared instance of the standard schema, built on first use.
    pub fn global() -> &'static Schema {
        &STANDARD
    }

    /// Build the standard schema.
    pub fn standard() -> Self {
        Self {
            core_fields: core_fields(),
            optional_fields: optional_fields(),
            sections: sections(),
            requirements: requirements(),
        }
    }

    pub fn section(&self, name: &str) -> Option<&SectionRule> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Whether `section` must be present for documents of `category`.
    pub fn is_section_required(&self, section: &str, category: DocumentCategory) -> bool {
        self.requirements.is_section_required(section, category)
    }
}

fn core_fields() -> Vec<FieldRule> {
    vec![
        FieldRule::required("title", String),
        FieldRule::required("description", String),
        FieldRule::required("created_date", String).with(Constraint::Date),
        FieldRule::required("last_updated_date", String).with(Constraint::Date),
        FieldRule::required("version", String).with(Constraint::Version),
        FieldRule::required("status", String).with(Constraint::OneOf(&STATUS)),
        FieldRule::required("owner", String),
    ]
}

fn optional_fields() -> Vec<FieldRule> {
    vec![
        FieldRule::optional("source_documents", List),
        FieldRule::optional("source_date", String),
        FieldRule::optional("content_type", String),
        FieldRule::optional("verification_status", String),
        FieldRule::optional("verified_by", String),
        FieldRule::optional("verification_date", String).with(Constraint::Date),
        FieldRule::optional("author", String),
        FieldRule::optional("reviewer", String),
        FieldRule::optional("date", String),
        FieldRule::optional("effective_date", String),
        FieldRule::optional("configuration_owner", String),
        FieldRule::optional("process_owner", String),
        FieldRule::optional("stakeholders", List),
        FieldRule::optional("related_docs", List),
        FieldRule::optional("tags", List),
    ]
}

fn sections() -> Vec<SectionRule> {
    vec![
        SectionRule::mapping(
            "discovery_metadata",
            vec![
                FieldRule::required("discovered_date", String).with(Constraint::Date),
                FieldRule::required("discovery_method", String),
                FieldRule::required("confidence_score", Number).with(Constraint::Confidence),
                FieldRule::required("validation_status", String)
                    .with(Constraint::OneOf(&VALIDATION_STATUS)),
                FieldRule::required("knowledge_graph_id", String),
            ],
        ),
        SectionRule::list("systems"),
        SectionRule::list("components"),
        SectionRule::list("business_domains"),
        SectionRule::list("user_roles"),
        SectionRule::list_of(
            "relationships",
            vec![
                FieldRule::required("target", String),
                FieldRule::required("type", String),
                FieldRule::required("strength", Number),
            ],
        ),
        SectionRule::mapping(
            "governance",
            vec![
                FieldRule::required("access_level", String)
                    .with(Constraint::OneOf(&ACCESS_LEVEL)),
                FieldRule::required("compliance_tags", List),
                FieldRule::required("policy_constraints", List),
                FieldRule::required("policy_evaluation", Mapping),
            ],
        ),
        SectionRule::mapping(
            "fibo_classification",
            vec![
                FieldRule::required("fibo_type", String),
                FieldRule::required("domain_extensions", Mapping),
                FieldRule::optional("towne_park_type", String),
                FieldRule::optional("confidence_score", Number).with(Constraint::Confidence),
                FieldRule::optional("classification_confidence", Number)
                    .with(Constraint::Confidence),
                FieldRule::optional("ontology_version", String),
                FieldRule::optional("primary_concept", String),
                FieldRule::optional("secondary_concepts", List),
                FieldRule::optional("towne_park_extensions", List),
            ],
        ),
        SectionRule::mapping(
            "policy_governance",
            vec![
                FieldRule::required("governance_level", String)
                    .with(Constraint::OneOf(&GOVERNANCE_LEVEL)),
                FieldRule::required("policy_type", String),
                FieldRule::required("enforcement_mechanism", String),
                FieldRule::required("compliance_requirements", List),
            ],
        ),
        SectionRule::mapping(
            "knowledge_graph",
            vec![
                FieldRule::required("entity_type", String),
                FieldRule::required("relationships", Mapping),
                FieldRule::required("validation_status", String)
                    .with(Constraint::OneOf(&VALIDATION_STATUS)),
                FieldRule::required("last_validated", String).with(Constraint::Date),
            ],
        ),
        SectionRule::mapping(
            "context_discovery",
            vec![
                FieldRule::required("discovery_method", String),
                FieldRule::required("key_insights", List),
                FieldRule::required("business_value", String)
                    .with(Constraint::OneOf(&BUSINESS_VALUE)),
                FieldRule::required("technical_complexity", String)
                    .with(Constraint::OneOf(&TECHNICAL_COMPLEXITY)),
                FieldRule::required("implementation_priority", String)
                    .with(Constraint::OneOf(&IMPLEMENTATION_PRIORITY)),
                FieldRule::required("discovery_confidence", Number)
                    .with(Constraint::Confidence),
            ],
        ),
        SectionRule::mapping(
            "enterprise_metadata",
            vec![
                FieldRule::required("document_classification", String),
                FieldRule::required("security_level", String)
                    .with(Constraint::OneOf(&SECURITY_LEVEL)),
                FieldRule::required("retention_period", String),
                FieldRule::required("review_cycle", String),
                FieldRule::required("distribution_list", List),
                FieldRule::required("compliance_frameworks", List),
                FieldRule::required("change_control", String),
                FieldRule::required("approval_authority", String),
            ],
        ),
    ]
}

fn requirements() -> RequirementTable {
    use DocumentCategory::{BusinessRules, Configuration, Standards, TechnicalSpec};

    RequirementTable::new(vec![
        ("fibo_classification", Requirement::Always),
        ("policy_governance", Requirement::For(vec![BusinessRules, Standards, Configuration])),
        ("enterprise_metadata", Requirement::For(vec![BusinessRules, Standards, TechnicalSpec])),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::SectionShape;

    #[test]
    fn core_fields_in_fixed_order() {
        let names: Vec<_> = Schema::global().core_fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "title",
                "description",
                "created_date",
                "last_updated_date",
                "version",
                "status",
                "owner"
            ]
        );
        assert!(Schema::global().core_fields.iter().all(|f| f.required));
    }

    #[test]
    fn section_catalog_order() {
        let names: Vec<_> = Schema::global().sections.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "discovery_metadata",
                "systems",
                "components",
                "business_domains",
                "user_roles",
                "relationships",
                "governance",
                "fibo_classification",
                "policy_governance",
                "knowledge_graph",
                "context_discovery",
                "enterprise_metadata"
            ]
        );
    }

    #[test]
    fn section_shapes() {
        let schema = Schema::standard();
        assert_eq!(schema.section("systems").map(|s| &s.shape), Some(&SectionShape::List));
        assert!(matches!(
            schema.section("relationships").map(|s| &s.shape),
            Some(SectionShape::ListOf(_))
        ));
        assert!(matches!(
            schema.section("governance").map(|s| &s.shape),
            Some(SectionShape::Mapping(_))
        ));
        assert!(schema.section("nonexistent").is_none());
    }

    #[test]
    fn classification_required_everywhere() {
        let schema = Schema::global();
        for category in DocumentCategory::ALL {
            assert!(schema.is_section_required("fibo_classification", category));
        }
    }

    #[test]
    fn policy_governance_required_for_rule_documents() {
        let schema = Schema::global();
        let required: Vec<_> = DocumentCategory::ALL
            .into_iter()
            .filter(|c| schema.is_section_required("policy_governance", *c))
            .collect();
        assert_eq!(
            required,
            [
                DocumentCategory::BusinessRules,
                DocumentCategory::Standards,
                DocumentCategory::Configuration
            ]
        );
    }

    #[test]
    fn enterprise_metadata_required_for_formal_documents() {
        let schema = Schema::global();
        let required: Vec<_> = DocumentCategory::ALL
            .into_iter()
            .filter(|c| schema.is_section_required("enterprise_metadata", *c))
            .collect();
        assert_eq!(
            required,
            [
                DocumentCategory::BusinessRules,
                DocumentCategory::TechnicalSpec,
                DocumentCategory::Standards
            ]
        );
    }

    #[test]
    fn other_sections_are_advisory() {
        let schema = Schema::global();
        for name in ["discovery_metadata", "knowledge_graph", "systems", "relationships"] {
            for category in DocumentCategory::ALL {
                assert!(!schema.is_section_required(name, category), "{name} / {category}");
            }
        }
    }

    #[test]
    fn global_is_standard() {
        assert_eq!(Schema::global(), &Schema::standard());
    }
}
