//! Translation tables: fixed nested trees of localized site content.
//!
//! The three language trees are structurally parallel but deliberately
//! partial. Consumers must never assume a leaf exists; every lookup goes
//! through [`TranslationTable::text`], which substitutes a caller-provided
//! literal default when any path segment is absent.

use crate::i18n::LanguageCode;
use serde_json::{json, Value};
use std::sync::OnceLock;

/// Global translation table singleton.
///
/// Built once on first access from the embedded trees and immutable
/// thereafter. The three top-level languages are guaranteed present, so
/// [`TranslationTable::resolve`] is a total function.
pub struct TranslationTable {
    en: Value,
    so: Value,
    ar: Value,
}

static TABLE: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// Get the global translation table instance.
    pub fn get() -> &'static TranslationTable {
        TABLE.get_or_init(|| TranslationTable {
            en: english_tree(),
            so: somali_tree(),
            ar: arabic_tree(),
        })
    }

    /// Pure lookup of a language tree. Total: every supported code maps to
    /// a tree, there is no error path.
    pub fn resolve(&self, lang: LanguageCode) -> &Value {
        match lang {
            LanguageCode::En => &self.en,
            LanguageCode::So => &self.so,
            LanguageCode::Ar => &self.ar,
        }
    }

    /// Safe path lookup with a literal default.
    ///
    /// `path` is dot-separated; numeric segments index into arrays
    /// (e.g. `"services.services.0.title"`). If any segment is missing, or
    /// the leaf is not a string, the default is returned. This is the one
    /// fallback utility every consumer uses instead of inlining
    /// optional-chaining expressions per call site.
    pub fn text(&self, lang: LanguageCode, path: &str, default: &str) -> String {
        lookup_path(self.resolve(lang), path)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    }

    /// Safe path lookup of an array leaf (FAQ entries, service cards).
    /// Returns an empty slice when the path is absent or not an array.
    pub fn list<'a>(&'a self, lang: LanguageCode, path: &str) -> &'a [Value] {
        lookup_path(self.resolve(lang), path)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = root;
    for segment in path.split('.') {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

fn english_tree() -> Value {
    json!({
        "nav": {
            "home": "Home",
            "about": "About Us",
            "services": "Services",
            "faq": "FAQ",
            "contact": "Contact"
        },
        "hero": {
            "title": "Build the skills your future demands",
            "subtitle": "Professional seminars, hands-on workshops and certificate programs for ambitious learners."
        },
        "services": {
            "title": "Our Services",
            "services": [
                {
                    "title": "Professional Seminars",
                    "description": "Half-day sessions led by industry practitioners on leadership, finance and communication."
                },
                {
                    "title": "Hands-on Workshops",
                    "description": "Small-group practical training with equipment and materials provided."
                },
                {
                    "title": "Certificate Programs",
                    "description": "Multi-month programs with a formal application process and recognized certification."
                }
            ]
        },
        "faq": {
            "title": "Frequently Asked Questions",
            "items": [
                {
                    "question": "How do I register for a seminar?",
                    "answer": "Open the seminar you are interested in and fill in the registration form. We confirm by email within two working days."
                },
                {
                    "question": "Are the workshops suitable for beginners?",
                    "answer": "Yes. Each workshop asks for your experience level so we can group participants accordingly."
                },
                {
                    "question": "Is there a fee for certificate programs?",
                    "answer": "Fees vary by program and are listed on each program page. Scholarships are available for qualifying applicants."
                }
            ]
        },
        "forms": {
            "validation": {
                "required": "Please fill in all required fields.",
                "motivation_length": "Your motivation statement must be at least 50 characters."
            },
            "notifications": {
                "success": "Registration submitted successfully!",
                "failure": "Submission failed. Please try again."
            },
            "cv": {
                "too_large": "CV file must be 5 MB or smaller.",
                "unsupported": "Please upload a PDF or Word document."
            }
        }
    })
}

fn somali_tree() -> Value {
    json!({
        "nav": {
            "home": "Guriga",
            "about": "Nagu Saabsan",
            "services": "Adeegyada",
            "faq": "Su'aalaha",
            "contact": "Xiriir"
        },
        "hero": {
            "title": "Dhis xirfadaha mustaqbalkaagu u baahan yahay",
            "subtitle": "Seminaaro xirfadeed, tababarro gacanta lagu qabto iyo barnaamijyo shahaado leh."
        },
        "services": {
            "title": "Adeegyadayada",
            "services": [
                {
                    "title": "Seminaaro Xirfadeed",
                    "description": "Kulamo nus-maalmeed oo ay hogaaminayaan khubaro ku takhasusay hoggaaminta, maaliyadda iyo isgaarsiinta."
                },
                {
                    "title": "Tababarro Gacanta Lagu Qabto",
                    "description": "Tababar kooxo yaryar ah oo qalab iyo agab la siiyo."
                },
                {
                    "title": "Barnaamijyo Shahaado Leh",
                    "description": "Barnaamijyo dhowr bilood ah oo leh codsi rasmi ah iyo shahaado la aqoonsan yahay."
                }
            ]
        },
        "faq": {
            "title": "Su'aalaha Badanaa La Isweydiiyo",
            "items": [
                {
                    "question": "Sideen isu diiwaangeliyaa seminaar?",
                    "answer": "Fur seminaarka aad xiiseyneyso oo buuxi foomka diiwaangelinta. Waxaan kugu xaqiijin doonnaa email laba maalmood gudahood."
                },
                {
                    "question": "Tababarradu ma ku habboon yihiin kuwa bilowga ah?",
                    "answer": "Haa. Tababar kastaa wuxuu weydiiyaa heerkaaga khibradda si aan ugu kala saarno ka-qaybgalayaasha."
                }
            ]
        },
        "forms": {
            "validation": {
                "required": "Fadlan buuxi dhammaan meelaha loo baahan yahay.",
                "motivation_length": "Qoraalka ujeeddadaadu waa inuu ugu yaraan 50 xaraf ka koobnaado."
            },
            "notifications": {
                "success": "Diiwaangelintaada waa la gudbiyay!",
                "failure": "Gudbintu way fashilantay. Fadlan isku day mar kale."
            }
        }
    })
}

fn arabic_tree() -> Value {
    json!({
        "nav": {
            "home": "الرئيسية",
            "about": "من نحن",
            "services": "خدماتنا",
            "faq": "الأسئلة الشائعة",
            "contact": "اتصل بنا"
        },
        "hero": {
            "title": "اكتسب المهارات التي يتطلبها مستقبلك",
            "subtitle": "ندوات مهنية وورش عمل تطبيقية وبرامج شهادات للمتعلمين الطموحين."
        },
        "services": {
            "title": "خدماتنا",
            "services": [
                {
                    "title": "ندوات مهنية",
                    "description": "جلسات نصف يوم يقودها ممارسون في القيادة والمالية والتواصل."
                },
                {
                    "title": "ورش عمل تطبيقية",
                    "description": "تدريب عملي في مجموعات صغيرة مع توفير المعدات والمواد."
                },
                {
                    "title": "برامج الشهادات",
                    "description": "برامج تمتد لعدة أشهر مع عملية تقديم رسمية وشهادة معترف بها."
                }
            ]
        },
        "faq": {
            "title": "الأسئلة الشائعة",
            "items": [
                {
                    "question": "كيف أسجل في ندوة؟",
                    "answer": "افتح الندوة التي تهمك واملأ استمارة التسجيل. نؤكد بالبريد الإلكتروني خلال يومي عمل."
                },
                {
                    "question": "هل ورش العمل مناسبة للمبتدئين؟",
                    "answer": "نعم. تسأل كل ورشة عن مستوى خبرتك حتى نتمكن من تجميع المشاركين وفقا لذلك."
                }
            ]
        },
        "forms": {
            "validation": {
                "required": "يرجى تعبئة جميع الحقول المطلوبة.",
                "motivation_length": "يجب أن يتكون خطاب الدوافع من 50 حرفا على الأقل."
            },
            "notifications": {
                "success": "تم إرسال تسجيلك بنجاح!",
                "failure": "فشل الإرسال. يرجى المحاولة مرة أخرى."
            }
        }
    })
}
