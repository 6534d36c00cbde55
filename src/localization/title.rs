/// Static page titles and the navigation key naming each page. Checked in
/// order; the first word found in the title wins.
const PAGES: [(&str, &str); 6] = [
    ("Home", "nav.home"),
    ("About", "nav.about"),
    ("News", "nav.news"),
    ("Events", "nav.events"),
    ("Gallery", "nav.gallery"),
    ("Contact", "nav.contact"),
];

/// Navigation key of the page whose static title is `title`.
pub fn page_key(title: &str) -> Option<&'static str> {
    PAGES
        .iter()
        .find(|(word, _)| title.contains(word))
        .map(|(_, key)| *key)
}

pub fn localized_title(label: &str, suffix: &str) -> String {
    format!("{label}{suffix}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_pages_are_recognized() {
        assert_eq!(page_key("Home - International Turon Federation"), Some("nav.home"));
        assert_eq!(page_key("Photo Gallery"), Some("nav.gallery"));
        assert_eq!(page_key("Contact us"), Some("nav.contact"));
    }

    #[test]
    fn earlier_pages_take_precedence() {
        assert_eq!(page_key("News and Events"), Some("nav.news"));
    }

    #[test]
    fn unknown_titles_are_left_alone() {
        assert_eq!(page_key("Registration"), None);
        assert_eq!(page_key("home"), None);
    }

    #[test]
    fn suffix_is_appended() {
        assert_eq!(localized_title("Главная", " - ITF"), "Главная - ITF");
    }
}
