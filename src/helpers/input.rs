use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

use super::prelude::*;

pub struct Select {}

impl Select {
    #[inline]
    pub fn by_id(element_id: &str) -> Option<HtmlSelectElement> {
        Element::by_id(element_id)?.dyn_into::<HtmlSelectElement>().ok()
    }
}
