use const_format::concatcp;

use crate::localization::language::LanguageCode;

pub const STATIC_ROOT: &str = "static/";
pub const CATALOG_PATH: &str = concatcp!(STATIC_ROOT, "localization/translations.json");

pub const LANGUAGE_STORAGE_KEY: &str = "language";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const LANGUAGE_QUERY_PARAM: &str = "lang";
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::En;

pub const ORGANIZATION_NAME: &str = "International Turon Federation";
pub const TITLE_SUFFIX: &str = concatcp!(" - ", ORGANIZATION_NAME);

pub const NEWS_DETAIL_PAGE: &str = "news-detail.html";

pub const COMPONENTS_ROOT: &str = "components/";
pub const NAVBAR_COMPONENT: &str = concatcp!(COMPONENTS_ROOT, "navbar.html");
pub const FOOTER_COMPONENT: &str = concatcp!(COMPONENTS_ROOT, "footer.html");

/// Settings the translation manager is constructed with.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationConfig {
    pub catalog_url: String,
    pub storage_key: String,
    pub query_param: String,
    pub default_language: LanguageCode,
    pub title_suffix: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            catalog_url: CATALOG_PATH.to_owned(),
            storage_key: LANGUAGE_STORAGE_KEY.to_owned(),
            query_param: LANGUAGE_QUERY_PARAM.to_owned(),
            default_language: DEFAULT_LANGUAGE,
            title_suffix: TITLE_SUFFIX.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_points_at_shipped_catalog() {
        let config = TranslationConfig::default();
        assert_eq!(config.catalog_url, "static/localization/translations.json");
        assert_eq!(config.title_suffix, " - International Turon Federation");
        assert_eq!(config.default_language, LanguageCode::En);
    }

    #[test]
    fn shared_fragments_live_under_components() {
        assert_eq!(NAVBAR_COMPONENT, "components/navbar.html");
        assert_eq!(FOOTER_COMPONENT, "components/footer.html");
    }
}
