//! Declarative form variant schemas.
//!
//! The seminar, workshop and program-application flows share one submission
//! engine; the only things that differ per variant live here as data: the
//! field set, which fields are required, extra length rules, and whether a
//! CV attachment is accepted. Changing a validation rule is a one-line edit
//! in the relevant table, not a change to three copies of a state machine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// The three registration/application flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormVariant {
    Seminar,
    Workshop,
    ProgramApplication,
}

impl FormVariant {
    pub fn schema(&self) -> &'static VariantSchema {
        match self {
            FormVariant::Seminar => &SEMINAR,
            FormVariant::Workshop => &WORKSHOP,
            FormVariant::ProgramApplication => &PROGRAM_APPLICATION,
        }
    }
}

/// One form field: its identity, validation rules, and how an empty
/// optional value is rendered in the relay message body.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub min_len: Option<usize>,
    pub empty_placeholder: Option<&'static str>,
}

/// Field state for one dialog instance, keyed by schema field name.
pub type FieldMap = BTreeMap<&'static str, String>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },
}

/// Everything that distinguishes one form variant from another.
#[derive(Debug)]
pub struct VariantSchema {
    pub variant: FormVariant,
    /// Flat label the relay indexes submissions by.
    pub registration_type: &'static str,
    /// Header of the formatted message body.
    pub section_header: &'static str,
    pub fields: &'static [FieldRule],
    pub accepts_attachment: bool,
}

impl VariantSchema {
    /// Initial (empty) field state for a fresh dialog.
    pub fn initial_fields(&self) -> FieldMap {
        self.fields
            .iter()
            .map(|rule| (rule.name, String::new()))
            .collect()
    }

    pub fn rule(&self, name: &str) -> Option<&'static FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }

    /// Validate field state against this schema.
    ///
    /// The required check is an emptiness check only: a whitespace-only
    /// value passes, matching the shipped site behavior. Length rules count
    /// characters, not bytes, and the minimum is inclusive.
    pub fn validate(&self, fields: &FieldMap) -> Result<(), Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        for rule in self.fields {
            let value = fields.get(rule.name).map(String::as_str).unwrap_or("");

            if value.is_empty() {
                if rule.required {
                    issues.push(ValidationIssue::Missing(rule.label));
                }
                continue;
            }

            if let Some(min) = rule.min_len {
                if value.chars().count() < min {
                    issues.push(ValidationIssue::TooShort {
                        label: rule.label,
                        min,
                    });
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

const IDENTITY_FIELDS: [FieldRule; 3] = [
    FieldRule {
        name: "full_name",
        label: "Full Name",
        required: true,
        min_len: None,
        empty_placeholder: None,
    },
    FieldRule {
        name: "email",
        label: "Email",
        required: true,
        min_len: None,
        empty_placeholder: None,
    },
    FieldRule {
        name: "phone",
        label: "Phone",
        required: true,
        min_len: None,
        empty_placeholder: None,
    },
];

pub static SEMINAR: VariantSchema = VariantSchema {
    variant: FormVariant::Seminar,
    registration_type: "Seminar Registration",
    section_header: "New Seminar Registration",
    fields: &[
        IDENTITY_FIELDS[0],
        IDENTITY_FIELDS[1],
        IDENTITY_FIELDS[2],
        FieldRule {
            name: "organization",
            label: "Organization",
            required: false,
            min_len: None,
            empty_placeholder: Some("Not specified"),
        },
        FieldRule {
            name: "message",
            label: "Message",
            required: false,
            min_len: None,
            empty_placeholder: Some("No additional message provided"),
        },
    ],
    accepts_attachment: false,
};

pub static WORKSHOP: VariantSchema = VariantSchema {
    variant: FormVariant::Workshop,
    registration_type: "Workshop Registration",
    section_header: "New Workshop Registration",
    fields: &[
        IDENTITY_FIELDS[0],
        IDENTITY_FIELDS[1],
        IDENTITY_FIELDS[2],
        FieldRule {
            name: "experience_level",
            label: "Experience Level",
            required: true,
            min_len: None,
            empty_placeholder: None,
        },
        FieldRule {
            name: "expectations",
            label: "Expectations",
            required: false,
            min_len: None,
            empty_placeholder: Some("No expectations mentioned"),
        },
    ],
    accepts_attachment: false,
};

/// Minimum character count for the motivation statement (inclusive).
pub const MOTIVATION_MIN_CHARS: usize = 50;

pub static PROGRAM_APPLICATION: VariantSchema = VariantSchema {
    variant: FormVariant::ProgramApplication,
    registration_type: "Program Application",
    section_header: "New Program Application",
    fields: &[
        IDENTITY_FIELDS[0],
        IDENTITY_FIELDS[1],
        IDENTITY_FIELDS[2],
        FieldRule {
            name: "education",
            label: "Education",
            required: true,
            min_len: None,
            empty_placeholder: None,
        },
        FieldRule {
            name: "prior_experience",
            label: "Prior Experience",
            required: false,
            min_len: None,
            empty_placeholder: Some("Not specified"),
        },
        FieldRule {
            name: "motivation",
            label: "Motivation",
            required: true,
            min_len: Some(MOTIVATION_MIN_CHARS),
            empty_placeholder: None,
        },
    ],
    accepts_attachment: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(schema: &VariantSchema) -> FieldMap {
        let mut fields = schema.initial_fields();
        for rule in schema.fields {
            let value = if rule.min_len.is_some() {
                "x".repeat(rule.min_len.unwrap())
            } else {
                format!("value for {}", rule.name)
            };
            fields.insert(rule.name, value);
        }
        fields
    }

    // ==================== Schema Shape Tests ====================

    #[test]
    fn test_variant_schema_lookup() {
        assert_eq!(FormVariant::Seminar.schema().registration_type, "Seminar Registration");
        assert_eq!(FormVariant::Workshop.schema().registration_type, "Workshop Registration");
        assert_eq!(
            FormVariant::ProgramApplication.schema().registration_type,
            "Program Application"
        );
    }

    #[test]
    fn test_only_application_accepts_attachment() {
        assert!(!SEMINAR.accepts_attachment);
        assert!(!WORKSHOP.accepts_attachment);
        assert!(PROGRAM_APPLICATION.accepts_attachment);
    }

    #[test]
    fn test_identity_fields_present_and_required_everywhere() {
        for schema in [&SEMINAR, &WORKSHOP, &PROGRAM_APPLICATION] {
            for name in ["full_name", "email", "phone"] {
                let rule = schema.rule(name).expect("identity field");
                assert!(rule.required, "{} should be required in {:?}", name, schema.variant);
            }
        }
    }

    #[test]
    fn test_initial_fields_cover_schema() {
        let fields = WORKSHOP.initial_fields();
        assert_eq!(fields.len(), WORKSHOP.fields.len());
        assert!(fields.values().all(String::is_empty));
    }

    #[test]
    fn test_variant_serde_codes() {
        let json = serde_json::to_string(&FormVariant::ProgramApplication).expect("serialize");
        assert_eq!(json, "\"program-application\"");
        let parsed: FormVariant = serde_json::from_str("\"seminar\"").expect("deserialize");
        assert_eq!(parsed, FormVariant::Seminar);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_passes_with_all_fields_filled() {
        for schema in [&SEMINAR, &WORKSHOP, &PROGRAM_APPLICATION] {
            assert!(schema.validate(&filled(schema)).is_ok());
        }
    }

    #[test]
    fn test_validate_fails_on_each_missing_required_field() {
        for schema in [&SEMINAR, &WORKSHOP, &PROGRAM_APPLICATION] {
            for rule in schema.fields.iter().filter(|r| r.required) {
                let mut fields = filled(schema);
                fields.insert(rule.name, String::new());

                let issues = schema.validate(&fields).expect_err("should fail");
                assert!(issues.contains(&ValidationIssue::Missing(rule.label)));
            }
        }
    }

    #[test]
    fn test_validate_optional_fields_may_be_empty() {
        let mut fields = filled(&SEMINAR);
        fields.insert("organization", String::new());
        fields.insert("message", String::new());
        assert!(SEMINAR.validate(&fields).is_ok());
    }

    #[test]
    fn test_whitespace_only_passes_required_check() {
        // Shipped behavior: the required check is emptiness, not trimming.
        let mut fields = filled(&SEMINAR);
        fields.insert("full_name", "   ".to_string());
        assert!(SEMINAR.validate(&fields).is_ok());
    }

    #[test]
    fn test_motivation_below_minimum_rejected() {
        let mut fields = filled(&PROGRAM_APPLICATION);
        fields.insert("motivation", "x".repeat(MOTIVATION_MIN_CHARS - 1));

        let issues = PROGRAM_APPLICATION.validate(&fields).expect_err("should fail");
        assert!(issues.contains(&ValidationIssue::TooShort {
            label: "Motivation",
            min: MOTIVATION_MIN_CHARS,
        }));
    }

    #[test]
    fn test_motivation_at_minimum_accepted() {
        let mut fields = filled(&PROGRAM_APPLICATION);
        fields.insert("motivation", "x".repeat(MOTIVATION_MIN_CHARS));
        assert!(PROGRAM_APPLICATION.validate(&fields).is_ok());
    }

    #[test]
    fn test_motivation_counts_characters_not_bytes() {
        let mut fields = filled(&PROGRAM_APPLICATION);
        // 50 multibyte characters: passes the character count even though
        // the byte length is larger.
        fields.insert("motivation", "م".repeat(MOTIVATION_MIN_CHARS));
        assert!(PROGRAM_APPLICATION.validate(&fields).is_ok());
    }

    #[test]
    fn test_empty_motivation_reports_missing_not_too_short() {
        let mut fields = filled(&PROGRAM_APPLICATION);
        fields.insert("motivation", String::new());

        let issues = PROGRAM_APPLICATION.validate(&fields).expect_err("should fail");
        assert_eq!(issues, vec![ValidationIssue::Missing("Motivation")]);
    }

    #[test]
    fn test_validation_issue_display() {
        let missing = ValidationIssue::Missing("Email");
        assert_eq!(missing.to_string(), "Email is required");

        let short = ValidationIssue::TooShort { label: "Motivation", min: 50 };
        assert_eq!(short.to_string(), "Motivation must be at least 50 characters");
    }
}
