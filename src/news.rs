use crate::{config::NEWS_DETAIL_PAGE, helpers::prelude::*};

/// URL slug of a news title: lower case, whitespace runs become `-`, and
/// anything other than ASCII word characters and `-` is dropped.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }
    slug
}

pub fn detail_url(title: &str) -> String {
    format!("{NEWS_DETAIL_PAGE}?slug={}", slugify(title))
}

/// Opens the detail page of a news card when it is clicked.
pub fn install() {
    for card in Element::query_all(".news-card") {
        let this = card.clone();
        Listener::on(&card, "click", move |_| {
            let Some(title) = this
                .query_selector(".news-card-title")
                .ok()
                .flatten()
                .and_then(|title| title.text_content())
            else {
                return;
            };

            if let Err(err) = WebPage::window().location().set_href(&detail_url(&title)) {
                log::warn!("Unable to open news article: {err:?}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn titles_become_slugs() {
        assert_eq!(slugify("Turon Cup 2024 Results"), "turon-cup-2024-results");
        assert_eq!(slugify("New  season:\tregistration open!"), "new-season-registration-open");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(slugify("Чемпионат 2024"), "-2024");
    }

    #[test]
    fn detail_url_carries_slug() {
        assert_eq!(detail_url("Seminar in Tashkent"), "news-detail.html?slug=seminar-in-tashkent");
    }
}
