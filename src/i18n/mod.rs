//! Internationalization module
//!
//! Provides UI strings in Spanish (es) and English (en).
//! Supports automatic language detection based on system locale.

mod en;
mod es;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language. Unsupported codes fall back to Spanish.
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            Self::detect_system_language()
        } else {
            Self::normalize(lang)
        };

        self.translations = match lang.as_str() {
            "en" => en::get_translations(),
            _ => es::get_translations(),
        };
        self.current_lang = lang;

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Get available languages
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("es", "Espa\u{00F1}ol"), ("en", "English")]
    }

    fn normalize(lang: &str) -> String {
        match lang.trim().to_lowercase().as_str() {
            "en" => "en".to_string(),
            _ => "es".to_string(),
        }
    }

    /// Detect system language
    fn detect_system_language() -> String {
        let lang_env = std::env::var("LANG")
            .or_else(|_| std::env::var("LC_ALL"))
            .or_else(|_| std::env::var("LC_MESSAGES"))
            .unwrap_or_else(|_| "es".to_string());

        // "en_US.UTF-8" -> "en"
        let lang_code = lang_env
            .split('_')
            .next()
            .unwrap_or("es")
            .split('.')
            .next()
            .unwrap_or("es");

        Self::normalize(lang_code)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}
