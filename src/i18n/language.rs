//! Language type: the three site languages and their derived metadata.

use serde::{Deserialize, Serialize};

/// A supported site language.
///
/// Only the three codes below exist; anything else read from persisted
/// storage falls back to English at the lookup site, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// English (default / fallback)
    En,
    /// Somali
    So,
    /// Arabic
    Ar,
}

/// Document text direction derived from the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::So, LanguageCode::Ar];

    /// Parse an ISO 639-1 code. Unknown codes return `None`; callers that
    /// need the silent-fallback behavior chain `.unwrap_or(LanguageCode::En)`.
    pub fn from_code(code: &str) -> Option<LanguageCode> {
        match code {
            "en" => Some(LanguageCode::En),
            "so" => Some(LanguageCode::So),
            "ar" => Some(LanguageCode::Ar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::So => "so",
            LanguageCode::Ar => "ar",
        }
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::So => "Somali",
            LanguageCode::Ar => "Arabic",
        }
    }

    /// Native name, used in the language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::So => "Soomaali",
            LanguageCode::Ar => "العربية",
        }
    }

    /// Text direction: Arabic renders right-to-left, everything else
    /// left-to-right. Recomputed from the code, never stored independently.
    pub fn direction(&self) -> TextDirection {
        match self {
            LanguageCode::Ar => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_valid() {
        assert_eq!(LanguageCode::from_code("en"), Some(LanguageCode::En));
        assert_eq!(LanguageCode::from_code("so"), Some(LanguageCode::So));
        assert_eq!(LanguageCode::from_code("ar"), Some(LanguageCode::Ar));
    }

    #[test]
    fn test_from_code_invalid() {
        assert_eq!(LanguageCode::from_code("fr"), None);
        assert_eq!(LanguageCode::from_code(""), None);
        assert_eq!(LanguageCode::from_code("EN"), None);
    }

    #[test]
    fn test_from_code_fallback_chain() {
        let lang = LanguageCode::from_code("xx").unwrap_or(LanguageCode::En);
        assert_eq!(lang, LanguageCode::En);
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_round_trip_codes() {
        for lang in LanguageCode::ALL {
            assert_eq!(LanguageCode::from_code(lang.as_str()), Some(lang));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(LanguageCode::So.name(), "Somali");
        assert_eq!(LanguageCode::So.native_name(), "Soomaali");
        assert_eq!(LanguageCode::Ar.native_name(), "العربية");
    }

    // ==================== Direction Tests ====================

    #[test]
    fn test_arabic_is_rtl() {
        assert_eq!(LanguageCode::Ar.direction(), TextDirection::Rtl);
        assert_eq!(LanguageCode::Ar.direction().as_str(), "rtl");
    }

    #[test]
    fn test_others_are_ltr() {
        assert_eq!(LanguageCode::En.direction(), TextDirection::Ltr);
        assert_eq!(LanguageCode::So.direction(), TextDirection::Ltr);
        assert_eq!(LanguageCode::En.direction().as_str(), "ltr");
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LanguageCode::Ar).expect("serialize");
        assert_eq!(json, "\"ar\"");

        let parsed: LanguageCode = serde_json::from_str("\"so\"").expect("deserialize");
        assert_eq!(parsed, LanguageCode::So);
    }
}
