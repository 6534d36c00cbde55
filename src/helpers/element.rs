use wasm_bindgen::{JsCast, JsValue};
use web_sys::NodeList;

use super::prelude::*;

pub struct Element {}

impl Element {
    #[inline]
    pub fn by_id(element_id: &str) -> Option<web_sys::Element> {
        WebPage::document().get_element_by_id(element_id)
    }

    #[inline]
    pub fn query(selector: &str) -> Option<web_sys::Element> {
        WebPage::document().query_selector(selector).ok().flatten()
    }

    pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
        collect(WebPage::document().query_selector_all(selector), selector)
    }

    /// Descendants of `root` matching `selector`, in document order.
    pub fn query_all_in(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
        collect(root.query_selector_all(selector), selector)
    }

    pub fn html(element: &web_sys::Element) -> Option<web_sys::HtmlElement> {
        element.dyn_ref::<web_sys::HtmlElement>().cloned()
    }

    pub fn set_style(element: &web_sys::Element, property: &str, value: &str) {
        if let Some(element) = Self::html(element) {
            if let Err(err) = element.style().set_property(property, value) {
                log::warn!("Unable to set style `{property}`: {err:?}");
            }
        }
    }

    pub fn remove_style(element: &web_sys::Element, property: &str) {
        if let Some(element) = Self::html(element) {
            if let Err(err) = element.style().remove_property(property) {
                log::warn!("Unable to clear style `{property}`: {err:?}");
            }
        }
    }

    pub fn set_attribute(element: &web_sys::Element, name: &str, value: &str) {
        if let Err(err) = element.set_attribute(name, value) {
            log::warn!("Unable to set attribute `{name}`: {err:?}");
        }
    }

    pub fn add_class(element: &web_sys::Element, class: &str) {
        if let Err(err) = element.class_list().add_1(class) {
            log::warn!("Unable to add class `{class}`: {err:?}");
        }
    }

    pub fn remove_class(element: &web_sys::Element, class: &str) {
        if let Err(err) = element.class_list().remove_1(class) {
            log::warn!("Unable to remove class `{class}`: {err:?}");
        }
    }

    /// Adds `class` when `present`, removes it otherwise.
    pub fn toggle_class(element: &web_sys::Element, class: &str, present: bool) {
        if let Err(err) = element.class_list().toggle_with_force(class, present) {
            log::warn!("Unable to toggle class `{class}`: {err:?}");
        }
    }
}

fn collect(list: Result<NodeList, JsValue>, selector: &str) -> Vec<web_sys::Element> {
    let list = match list {
        Ok(list) => list,
        Err(err) => {
            log::warn!("Invalid selector `{selector}`: {err:?}");
            return Vec::new();
        }
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}
