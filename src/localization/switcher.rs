use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

use super::{
    browser::{SharedTranslator, LANGUAGE_SELECT_ID},
    language::LanguageCode,
};
use crate::helpers::prelude::*;

/// Connects the language selector and the landing-page language buttons to
/// `translator`.
pub fn install(translator: &SharedTranslator) {
    if let Some(select) = Select::by_id(LANGUAGE_SELECT_ID) {
        select.set_value(translator.borrow().language().code());

        let translator = translator.clone();
        Listener::on(&select, "change", move |event| {
            let Some(select) = event
                .current_target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            switch(&translator, &select.value());
        });
    }

    // Landing-page buttons are links into the site; the choice is saved
    // before the browser follows them.
    for button in Element::query_all(".language-btn[data-lang]") {
        let translator = translator.clone();
        let code = button.get_attribute("data-lang").unwrap_or_default();
        Listener::on(&button, "click", move |_| switch(&translator, &code));
    }
}

fn switch(translator: &SharedTranslator, code: &str) {
    match LanguageCode::from_code(code) {
        Some(language) => translator.borrow_mut().set_language(language),
        None => log::warn!("Ignoring unsupported language `{code}`."),
    }
}
