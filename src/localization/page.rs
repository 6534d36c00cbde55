//! What the translation manager needs from the page it rewrites.

/// Where a translated string is written on an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSlot {
    Text,
    Value,
    Placeholder,
}

impl TextSlot {
    /// Submit inputs show their `value`, inputs with a placeholder show the
    /// placeholder, everything else shows its text content.
    pub fn classify(tag_name: &str, input_type: &str, placeholder: &str) -> Self {
        if !tag_name.eq_ignore_ascii_case("input") {
            return Self::Text;
        }

        if input_type.eq_ignore_ascii_case("submit") {
            Self::Value
        } else if !placeholder.is_empty() {
            Self::Placeholder
        } else {
            Self::Text
        }
    }
}

/// An element flagged with a translation key.
pub trait TranslatableNode {
    fn translation_key(&self) -> Option<String>;
    fn slot(&self) -> TextSlot;
    fn write(&self, slot: TextSlot, text: &str);
}

pub trait Page {
    type Node: TranslatableNode;

    fn query_param(&self, name: &str) -> Option<String>;
    /// Rewrites one query parameter of the current URL without navigating.
    fn replace_query_param(&self, name: &str, value: &str);
    fn translatable_nodes(&self) -> Vec<Self::Node>;
    fn title(&self) -> String;
    fn set_title(&self, title: &str);
    fn sync_language_selector(&self, code: &str);
}
