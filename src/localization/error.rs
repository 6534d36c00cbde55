use std::fmt;

/// Why the translation catalog could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("catalog request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("catalog request returned HTTP {0}")]
    Status(u16),
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Why a single catalog entry was left out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidEntry {
    NotAString,
    NotAnObject,
    Conflict,
}

impl fmt::Display for InvalidEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAString => f.write_str("is neither a string nor an object"),
            Self::NotAnObject => f.write_str("is not an object of entries"),
            Self::Conflict => f.write_str("clashes with another entry of the same key"),
        }
    }
}
