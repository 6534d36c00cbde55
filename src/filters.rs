use web_sys::Url;

use crate::helpers::prelude::*;

const BUTTON_SELECTOR: &str = ".filter-btn[data-filter]";
const ITEM_SELECTOR: &str = ".gallery-item, .event-card";
const TAB_SELECTOR: &str = ".gallery-tab";
const ACTIVE_CLASS: &str = "active";
const HIDDEN_CLASS: &str = "hidden";
const SHOW_ALL: &str = "all";

/// Whether an item stays visible under `filter`. `has_class` tells whether
/// the item carries a given class.
pub fn is_visible(filter: &str, has_class: impl Fn(&str) -> bool) -> bool {
    filter == SHOW_ALL || has_class(filter)
}

pub fn install() {
    install_filter_buttons();
    install_gallery_tabs();
}

fn install_filter_buttons() {
    let buttons = Element::query_all(BUTTON_SELECTOR);
    if buttons.is_empty() {
        return;
    }
    let items = Element::query_all(ITEM_SELECTOR);

    for button in &buttons {
        let (buttons, items) = (buttons.clone(), items.clone());
        let filter = button.get_attribute("data-filter").unwrap_or_default();
        let this = button.clone();
        Listener::on(button, "click", move |_| {
            activate_only(&buttons, &this);

            for item in &items {
                let classes = item.class_list();
                let hidden = !is_visible(&filter, |class| classes.contains(class));
                Element::toggle_class(item, HIDDEN_CLASS, hidden);
            }
        });
    }
}

/// Gallery type tabs only switch their highlight; the link itself is not
/// followed.
fn install_gallery_tabs() {
    let tabs = Element::query_all(TAB_SELECTOR);
    for tab in &tabs {
        let (tabs, this) = (tabs.clone(), tab.clone());
        Listener::on(tab, "click", move |event| {
            event.prevent_default();
            activate_only(&tabs, &this);
            log::debug!("Showing the {} gallery.", gallery_type(&this).as_deref().unwrap_or(SHOW_ALL));
        });
    }
}

fn activate_only(group: &[web_sys::Element], active: &web_sys::Element) {
    for other in group {
        Element::remove_class(other, ACTIVE_CLASS);
    }
    Element::add_class(active, ACTIVE_CLASS);
}

/// The `type` query parameter of a tab's link.
fn gallery_type(tab: &web_sys::Element) -> Option<String> {
    let href = tab.get_attribute("href")?;
    let base = WebPage::window().location().href().ok()?;
    Url::new_with_base(&href, &base).ok()?.search_params().get("type")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(classes: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |class| classes.iter().any(|candidate| *candidate == class)
    }

    #[test]
    fn all_shows_everything() {
        assert!(is_visible("all", item(&[])));
        assert!(is_visible("all", item(&["gallery-item", "videos"])));
    }

    #[test]
    fn category_shows_matching_items_only() {
        assert!(is_visible("videos", item(&["gallery-item", "videos"])));
        assert!(!is_visible("photos", item(&["gallery-item", "videos"])));
    }
}
