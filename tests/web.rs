//! Browser tests for the page scripts against a real document.
//! Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use turon_site::{
    components::{self, ComponentLoadError},
    config::TranslationConfig,
    filters,
    helpers::prelude::*,
    localization::{
        browser::{fetch_catalog, BrowserPage, LANGUAGE_SELECT_ID},
        catalog::TranslationCatalog,
        error::CatalogLoadError,
        language::LanguageCode,
        page::Page,
        switcher, LoadState, TranslationManager,
    },
    theme,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, HtmlElement, HtmlInputElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

const CATALOG: &str = r#"{
    "en": { "nav": { "home": "Home" }, "contact": { "email": "Your email", "submit": "Send" } },
    "ru": { "nav": { "home": "Главная" }, "contact": { "email": "Ваш email", "submit": "Отправить" } }
}"#;

fn config(storage_key: &str) -> TranslationConfig {
    TranslationConfig {
        storage_key: storage_key.to_owned(),
        ..TranslationConfig::default()
    }
}

fn mount(markup: &str) -> web_sys::Element {
    let document = WebPage::document();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(markup);
    WebPage::body().unwrap().append_child(&root).unwrap();
    root
}

fn by_id<T: JsCast>(id: &str) -> T {
    Element::by_id(id).unwrap().dyn_into::<T>().unwrap()
}

#[wasm_bindgen_test]
fn apply_writes_text_placeholder_and_value() {
    let root = mount(
        r#"<a id="t-home" data-translate="nav.home">Home</a>
           <input id="t-email" type="email" placeholder="Your email" data-translate="contact.email">
           <input id="t-submit" type="submit" value="Send" data-translate="contact.submit">
           <span id="t-missing" data-translate="nav.missing">static</span>"#,
    );

    let mut manager = TranslationManager::new(config("test-apply-language"), LocalStorageStore, BrowserPage);
    manager.begin_loading();
    manager.finish_loading(TranslationCatalog::from_json_str(CATALOG));
    manager.set_language(LanguageCode::Ru);

    assert_eq!(Element::by_id("t-home").unwrap().text_content().unwrap(), "Главная");
    assert_eq!(by_id::<HtmlInputElement>("t-email").placeholder(), "Ваш email");
    assert_eq!(by_id::<HtmlInputElement>("t-submit").value(), "Отправить");
    assert_eq!(Element::by_id("t-missing").unwrap().text_content().unwrap(), "nav.missing");

    root.remove();
}

#[wasm_bindgen_test]
fn set_language_updates_url_selector_and_storage_in_place() {
    let root = mount(r#"<select id="languageSelect"><option value="en">EN</option><option value="ru">RU</option></select>"#);
    let href_before = WebPage::window().location().pathname().unwrap();

    let mut manager = TranslationManager::new(config("test-url-language"), LocalStorageStore, BrowserPage);
    manager.begin_loading();
    manager.finish_loading(TranslationCatalog::from_json_str(CATALOG));
    manager.set_language(LanguageCode::Ru);

    assert_eq!(BrowserPage.query_param("lang").as_deref(), Some("ru"));
    assert_eq!(WebPage::window().location().pathname().unwrap(), href_before);
    assert_eq!(by_id::<HtmlSelectElement>(LANGUAGE_SELECT_ID).value(), "ru");
    assert_eq!(LocalStorageStore.load("test-url-language").as_deref(), Some("ru"));
    assert_eq!(manager.state(), LoadState::Ready);

    root.remove();
}

#[wasm_bindgen_test]
fn failed_load_keeps_static_markup() {
    let root = mount(r#"<a id="t-static" data-translate="nav.home">Static home</a>"#);

    let mut manager = TranslationManager::new(config("test-failed-language"), LocalStorageStore, BrowserPage);
    manager.begin_loading();
    manager.finish_loading(Err(CatalogLoadError::Status(404)));

    assert_eq!(manager.state(), LoadState::Failed);
    assert_eq!(Element::by_id("t-static").unwrap().text_content().unwrap(), "Static home");
    assert_eq!(manager.translate("nav.home"), "nav.home");

    root.remove();
}

#[wasm_bindgen_test]
async fn missing_catalog_is_reported_by_status() {
    let err = fetch_catalog("missing.json").await.unwrap_err();
    assert!(matches!(err, CatalogLoadError::Status(404)), "unexpected error: {err}");
}

#[wasm_bindgen_test]
async fn shipped_catalog_is_fetched_and_applied() {
    let root = mount(r#"<a id="t-fetched" data-translate="nav.home">Home</a>"#);

    let mut manager = TranslationManager::new(config("test-fetch-language"), LocalStorageStore, BrowserPage);
    let url = manager.begin_loading();
    manager.finish_loading(fetch_catalog(&url).await);
    manager.set_language(LanguageCode::Ru);

    assert_eq!(manager.state(), LoadState::Ready);
    assert_eq!(Element::by_id("t-fetched").unwrap().text_content().unwrap(), "Главная");

    root.remove();
}

#[wasm_bindgen_test]
async fn missing_component_is_reported_by_status() {
    let err = components::fetch_component("components/missing.html").await.unwrap_err();
    assert!(matches!(err, ComponentLoadError::Status(404)), "unexpected error: {err}");
}

#[wasm_bindgen_test]
fn language_button_switches_without_blocking_its_link() {
    let root = mount(r#"<button id="t-lang-uz" class="language-btn" data-lang="uz">O'zbek</button>"#);
    let translator = Rc::new(RefCell::new(TranslationManager::new(
        config("test-button-language"),
        LocalStorageStore,
        BrowserPage,
    )));
    switcher::install(&translator);

    let blocked = Rc::new(Cell::new(true));
    {
        let blocked = blocked.clone();
        Listener::on(&root, "click", move |event| blocked.set(event.default_prevented()));
    }
    by_id::<HtmlElement>("t-lang-uz").click();

    assert!(!blocked.get());
    assert_eq!(translator.borrow().language(), LanguageCode::Uz);
    assert_eq!(LocalStorageStore.load("test-button-language").as_deref(), Some("uz"));

    root.remove();
}

#[wasm_bindgen_test]
fn gallery_tab_click_moves_the_highlight() {
    let root = mount(
        r#"<a id="t-tab-photos" class="gallery-tab active" href="?type=photos">Photos</a>
           <a id="t-tab-videos" class="gallery-tab" href="?type=videos">Videos</a>"#,
    );
    filters::install();
    let href_before = WebPage::window().location().href().unwrap();

    by_id::<HtmlElement>("t-tab-videos").click();

    assert!(Element::by_id("t-tab-videos").unwrap().class_list().contains("active"));
    assert!(!Element::by_id("t-tab-photos").unwrap().class_list().contains("active"));
    assert_eq!(WebPage::window().location().href().unwrap(), href_before);

    root.remove();
}

#[wasm_bindgen_test]
fn class_and_attribute_helpers_write_through() {
    let root = mount(r#"<span id="t-helpers" class="card"></span>"#);
    let span = Element::by_id("t-helpers").unwrap();

    Element::toggle_class(&span, "hidden", true);
    Element::add_class(&span, "active");
    Element::remove_class(&span, "card");
    Element::set_attribute(&span, "aria-label", "Close");
    assert_eq!(span.class_name(), "hidden active");
    assert_eq!(span.get_attribute("aria-label").as_deref(), Some("Close"));

    Element::toggle_class(&span, "hidden", false);
    assert_eq!(span.class_name(), "active");

    root.remove();
}

#[wasm_bindgen_test]
fn initial_theme_is_announced() {
    let announced = Rc::new(RefCell::new(None::<String>));
    {
        let announced = announced.clone();
        Listener::on(&WebPage::window(), "themeChanged", move |event| {
            let theme = event
                .dyn_into::<CustomEvent>()
                .ok()
                .and_then(|event| js_sys::Reflect::get(&event.detail(), &JsValue::from_str("theme")).ok())
                .and_then(|theme| theme.as_string());
            *announced.borrow_mut() = theme;
        });
    }

    theme::install();

    let rendered = WebPage::document()
        .document_element()
        .and_then(|root| root.get_attribute("data-theme"));
    assert!(announced.borrow().is_some());
    assert_eq!(*announced.borrow(), rendered);
}
