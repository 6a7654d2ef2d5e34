//! Internationalization (i18n) module for multi-language support.
//!
//! The site is served in English, Somali and Arabic. All language-related
//! logic lives here:
//!
//! - `language`: the validated `LanguageCode` type and derived text direction
//! - `table`: the fixed nested translation trees plus safe path lookup
//! - `locale`: the persisted language preference and its single writer
//!
//! # Example
//!
//! ```rust,ignore
//! use institute_forms::i18n::{LanguageCode, TranslationTable};
//!
//! let table = TranslationTable::get();
//! let label = table.text(LanguageCode::So, "nav.home", "Home");
//! ```

mod language;
mod locale;
mod table;

pub use language::{LanguageCode, TextDirection};
pub use locale::{FilePreferenceStore, LocaleManager, PreferenceStore, DIRECTION_KEY, LANGUAGE_KEY};
pub use table::TranslationTable;
