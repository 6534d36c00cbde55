//! Translation catalog: one validated tree of display strings per language.
//!
//! The JSON resource may spell entries nested (`{"nav": {"home": "Home"}}`)
//! or with dotted keys (`{"nav.home": "Home"}`). Both spellings are folded
//! into the same [`TranslationTree`] on load, so lookups only ever walk
//! path segments. Entries that cannot be placed in the tree are skipped with
//! a warning, and their keys fall back to the raw key like any other miss.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use super::{
    error::{CatalogLoadError, InvalidEntry},
    language::LanguageCode,
};

#[derive(Clone, Debug, PartialEq)]
enum TranslationNode {
    Text(String),
    Group(BTreeMap<String, TranslationNode>),
}

/// Display strings of a single language addressed by dotted keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslationTree {
    root: BTreeMap<String, TranslationNode>,
}

impl TranslationTree {
    fn from_object(language: LanguageCode, object: &Map<String, Value>) -> Self {
        let mut tree = Self::default();
        tree.extend(language, &[], object);
        tree
    }

    fn extend(&mut self, language: LanguageCode, prefix: &[&str], object: &Map<String, Value>) {
        for (key, value) in object {
            let mut path = prefix.to_vec();
            path.extend(key.split('.'));

            let placed = match value {
                Value::String(text) => self.insert(&path, text.clone()),
                Value::Object(children) => {
                    self.extend(language, &path, children);
                    Ok(())
                }
                _ => Err(InvalidEntry::NotAString),
            };
            if let Err(reason) = placed {
                log::warn!("Skipping translation `{}` for `{language}`: it {reason}.", path.join("."));
            }
        }
    }

    fn insert(&mut self, path: &[&str], text: String) -> Result<(), InvalidEntry> {
        let Some((last, parents)) = path.split_last() else {
            return Err(InvalidEntry::Conflict);
        };

        let mut level = &mut self.root;
        for segment in parents {
            let node = level
                .entry((*segment).to_owned())
                .or_insert_with(|| TranslationNode::Group(BTreeMap::new()));
            level = match node {
                TranslationNode::Group(children) => children,
                TranslationNode::Text(_) => return Err(InvalidEntry::Conflict),
            };
        }

        if level.contains_key(*last) {
            return Err(InvalidEntry::Conflict);
        }
        level.insert((*last).to_owned(), TranslationNode::Text(text));
        Ok(())
    }

    /// Walks `key` segment by segment. Misses, keys that stop on a group and
    /// empty strings all resolve to `None`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            node = match node {
                TranslationNode::Group(children) => children.get(segment)?,
                TranslationNode::Text(_) => return None,
            };
        }

        match node {
            TranslationNode::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Every language's tree, immutable once loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslationCatalog {
    languages: HashMap<LanguageCode, TranslationTree>,
}

impl TranslationCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let document: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self::from_document(&document))
    }

    /// Builds the catalog from an already parsed document. Unsupported
    /// languages and malformed entries are left out.
    pub fn from_document(document: &Map<String, Value>) -> Self {
        let mut languages = HashMap::new();
        for (code, entries) in document {
            let Some(language) = LanguageCode::from_code(code) else {
                log::warn!("Skipping translations for unsupported language `{code}`.");
                continue;
            };

            let Value::Object(entries) = entries else {
                log::warn!("Skipping translations for `{language}`: the section {}.", InvalidEntry::NotAnObject);
                continue;
            };
            languages.insert(language, TranslationTree::from_object(language, entries));
        }

        Self { languages }
    }

    pub fn tree(&self, language: LanguageCode) -> Option<&TranslationTree> {
        self.languages.get(&language)
    }

    pub fn lookup(&self, language: LanguageCode, key: &str) -> Option<&str> {
        self.tree(language)?.lookup(key)
    }

    pub fn languages(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        self.languages.keys().copied()
    }
}
