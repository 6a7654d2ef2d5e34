//! Typed registration inputs: event context, experience level and the CV
//! attachment with its selection-time constraints.

use serde::Deserialize;
use thiserror::Error;

/// Context supplied by the page that opened the form, never by the user.
#[derive(Debug, Clone, Deserialize)]
pub struct EventContext {
    /// Event or program title.
    pub title: String,
    /// Event or program date, already formatted for display.
    pub date: String,
    #[serde(default)]
    pub price: Option<String>,
}

/// Workshop experience level selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

/// Maximum accepted CV size, inclusive.
pub const MAX_CV_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for CV uploads: PDF, legacy Word, OOXML Word.
pub const ALLOWED_CV_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CvRejection {
    #[error("CV exceeds the 5 MiB limit ({size} bytes)")]
    TooLarge { size: usize },
    #[error("unsupported CV content type: {content_type}")]
    UnsupportedType { content_type: String },
}

/// A validated CV attachment.
///
/// Construction is the only gate: a `CvFile` that exists satisfies the size
/// and type constraints, so payload building never re-checks them.
#[derive(Debug, Clone)]
pub struct CvFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CvFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, CvRejection> {
        let content_type = content_type.into();

        // Type is checked first: an unlisted type is rejected regardless
        // of size.
        if !ALLOWED_CV_TYPES.contains(&content_type.as_str()) {
            return Err(CvRejection::UnsupportedType { content_type });
        }

        if bytes.len() > MAX_CV_BYTES {
            return Err(CvRejection::TooLarge { size: bytes.len() });
        }

        Ok(Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        })
    }
}
