//! Persisted language preference: single writer, silent-fallback reader.

use crate::i18n::LanguageCode;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::warn;

/// Key under which the active language code is persisted.
pub const LANGUAGE_KEY: &str = "language";

/// Key under which the derived text direction is mirrored. Never read back
/// for logic; it is recomputed from the language code on every change.
pub const DIRECTION_KEY: &str = "direction";

/// External key-value preference store.
///
/// Injected into [`LocaleManager`] so consumers depend on an explicit
/// collaborator rather than ambient global state. `set` is fire-and-forget:
/// storage failures are an operator concern, not a user-visible error.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// File-backed preference store holding a flat JSON object.
///
/// Unreadable or malformed files behave as empty: preference resolution
/// falls back silently, it never raises.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Map<String, Value> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_string(), Value::String(value.to_string()));
        let serialized = Value::Object(map).to_string();
        if let Err(e) = std::fs::write(&self.path, serialized) {
            warn!("Failed to persist preference '{}': {}", key, e);
        }
    }
}

/// Single entry point for reading and changing the active language.
pub struct LocaleManager<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> LocaleManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted language. Absent or invalid values fall back to
    /// English without raising; a stale preference is not an error.
    pub fn active_language(&self) -> LanguageCode {
        self.store
            .get(LANGUAGE_KEY)
            .and_then(|code| LanguageCode::from_code(&code))
            .unwrap_or(LanguageCode::En)
    }

    /// Persist a new language choice and mirror the derived text direction.
    /// Idempotent: repeating the same code rewrites the same state.
    pub fn set_active_language(&self, code: LanguageCode) {
        self.store.set(LANGUAGE_KEY, code.as_str());
        self.store.set(DIRECTION_KEY, code.direction().as_str());
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
