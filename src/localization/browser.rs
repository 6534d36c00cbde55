use std::{cell::RefCell, rc::Rc};

use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlInputElement, Url, UrlSearchParams};

use super::{
    catalog::TranslationCatalog,
    error::CatalogLoadError,
    page::{Page, TextSlot, TranslatableNode},
    TranslationManager,
};
use crate::{config::TranslationConfig, helpers::prelude::*};

pub const TRANSLATE_ATTRIBUTE: &str = "data-translate";
pub const LANGUAGE_SELECT_ID: &str = "languageSelect";

pub type SiteTranslator = TranslationManager<LocalStorageStore, BrowserPage>;
pub type SharedTranslator = Rc<RefCell<SiteTranslator>>;

/// The document the site scripts run in.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPage;

/// An element carrying a `data-translate` key.
pub struct BrowserNode(web_sys::Element);

impl TranslatableNode for BrowserNode {
    fn translation_key(&self) -> Option<String> {
        self.0.get_attribute(TRANSLATE_ATTRIBUTE)
    }

    fn slot(&self) -> TextSlot {
        let tag_name = self.0.tag_name();
        match self.0.dyn_ref::<HtmlInputElement>() {
            Some(input) => TextSlot::classify(&tag_name, &input.type_(), &input.placeholder()),
            None => TextSlot::classify(&tag_name, "", ""),
        }
    }

    fn write(&self, slot: TextSlot, text: &str) {
        let input = self.0.dyn_ref::<HtmlInputElement>();
        match (slot, input) {
            (TextSlot::Value, Some(input)) => input.set_value(text),
            (TextSlot::Placeholder, Some(input)) => input.set_placeholder(text),
            _ => self.0.set_text_content(Some(text)),
        }
    }
}

impl Page for BrowserPage {
    type Node = BrowserNode;

    fn query_param(&self, name: &str) -> Option<String> {
        let search = WebPage::window().location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    fn replace_query_param(&self, name: &str, value: &str) {
        if let Err(err) = replace_query_param(name, value) {
            log::warn!("Unable to update the `{name}` URL parameter: {err:?}");
        }
    }

    fn translatable_nodes(&self) -> Vec<BrowserNode> {
        Element::query_all(&format!("[{TRANSLATE_ATTRIBUTE}]"))
            .into_iter()
            .map(BrowserNode)
            .collect()
    }

    fn title(&self) -> String {
        WebPage::document().title()
    }

    fn set_title(&self, title: &str) {
        WebPage::document().set_title(title);
    }

    fn sync_language_selector(&self, code: &str) {
        if let Some(select) = Select::by_id(LANGUAGE_SELECT_ID) {
            select.set_value(code);
        }
    }
}

fn replace_query_param(name: &str, value: &str) -> Result<(), JsValue> {
    let window = WebPage::window();
    let url = Url::new(&window.location().href()?)?;
    url.search_params().set(name, value);
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
}

pub async fn fetch_catalog(url: &str) -> Result<TranslationCatalog, CatalogLoadError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(CatalogLoadError::Status(response.status()));
    }

    let body = response.text().await?;
    TranslationCatalog::from_json_str(&body)
}

pub fn create() -> SharedTranslator {
    Rc::new(RefCell::new(TranslationManager::new(
        TranslationConfig::default(),
        LocalStorageStore,
        BrowserPage,
    )))
}

/// Fetches the catalog in the background and applies it once it arrives.
/// Failures are logged and leave the static text in place.
pub fn initialize(translator: &SharedTranslator) {
    let url = translator.borrow_mut().begin_loading();
    let translator = translator.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_catalog(&url).await;
        translator.borrow_mut().finish_loading(result);
    });
}
