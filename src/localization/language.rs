use std::fmt;

/// Languages the site is published in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageCode {
    En,
    Ru,
    Uz,
}

impl LanguageCode {
    pub const fn all() -> [Self; 3] {
        [Self::En, Self::Ru, Self::Uz]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Uz => "uz",
        }
    }

    /// Native name shown in the language selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
            Self::Uz => "O'zbekcha",
        }
    }

    /// Maps a code such as `ru` or `ru-RU` to a supported language.
    pub fn from_code(code: &str) -> Option<Self> {
        let lowered = code.trim().to_ascii_lowercase();
        let base = lowered.split(|c: char| c == '-' || c == '_').next().unwrap_or_default();
        Self::all().into_iter().find(|language| language.code() == base)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
