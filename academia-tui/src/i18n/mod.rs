//! Internationalization
//!
//! Plain structs checked at compile time, one `const` table per language,
//! selected through an atomic index.

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod es_es;
pub mod keys;

pub use keys::*;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Spanish (Spain)
    #[default]
    EsEs,
    /// English (United States)
    EnUs,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::EsEs, Language::EnUs]
    }

    /// Name in the language itself
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EsEs => "Español",
            Language::EnUs => "English",
        }
    }

    /// BCP 47 code
    pub fn code(self) -> &'static str {
        match self {
            Language::EsEs => "es-ES",
            Language::EnUs => "en-US",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "es-ES" | "es" => Some(Language::EsEs),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::EsEs => 0,
            Language::EnUs => 1,
        }
    }
}

/// Current language index
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EsEs

/// Translations for the current language
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &en_us::TRANSLATIONS,
        _ => &es_es::TRANSLATIONS,
    }
}

pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

pub fn current_language() -> Language {
    Language::all()
        .get(CURRENT_LANGUAGE.load(Ordering::Relaxed))
        .copied()
        .unwrap_or_default()
}
