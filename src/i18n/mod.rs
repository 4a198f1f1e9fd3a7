//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Portuguese (Brazil)
    #[default]
    PtBR,
    /// English (US)
    EnUS,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::PtBR => "Português",
            Locale::EnUS => "English",
        }
    }

    /// BCP 47 tag, also used as the HTML `lang` attribute
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBR => "pt-BR",
            Locale::EnUS => "en-US",
        }
    }

    /// Parse a language tag such as `pt-BR`, `pt_BR` or `en`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag
            .trim()
            .split(['-', '_', '.'])
            .next()?
            .to_ascii_lowercase();
        match language.as_str() {
            "pt" => Some(Locale::PtBR),
            "en" => Some(Locale::EnUS),
            _ => None,
        }
    }

    /// Pick the locale from the user's OS settings, falling back to the default
    pub fn detect() -> Self {
        let user = locale_config::Locale::user_default().to_string();
        user.split(',')
            .find_map(|entry| {
                // entries look like "pt-BR" or "messages=en-US"
                let tag = entry.rsplit('=').next().unwrap_or(entry);
                Self::from_tag(tag)
            })
            .unwrap_or_default()
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (pt, en))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Section
    map.insert("tech-heading", ("Tecnologias que domino", "Technologies I work with"));

    // Window
    map.insert("window-title", ("Sobre mim", "About me"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(pt, en)) = translations().get(key) {
        match locale {
            Locale::PtBR => SharedString::from(pt),
            Locale::EnUS => SharedString::from(en),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_is_localized() {
        assert_eq!(t(Locale::PtBR, "tech-heading").as_ref(), "Tecnologias que domino");
        assert_eq!(t(Locale::EnUS, "tech-heading").as_ref(), "Technologies I work with");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key").as_ref(), "no-such-key");
    }

    #[test]
    fn parses_language_tags() {
        assert_eq!(Locale::from_tag("pt-BR"), Some(Locale::PtBR));
        assert_eq!(Locale::from_tag("pt_PT.UTF-8"), Some(Locale::PtBR));
        assert_eq!(Locale::from_tag("EN"), Some(Locale::EnUS));
        assert_eq!(Locale::from_tag("de-DE"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn display_names_are_native() {
        assert_eq!(Locale::PtBR.display_name(), "Português");
        assert_eq!(Locale::EnUS.display_name(), "English");
    }

    #[test]
    fn default_locale_is_portuguese() {
        assert_eq!(Locale::default(), Locale::PtBR);
        assert_eq!(Locale::default().tag(), "pt-BR");
    }
}
