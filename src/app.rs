use crate::{
    components, effects, filters, forms,
    helpers::prelude::*,
    lightbox,
    localization::{
        browser::{self, SharedTranslator},
        switcher,
    },
    menu, news, scroll, theme,
};

const LOADING_STATE: &str = "loading";

/// Wires every page script once the document has been parsed.
pub fn start() {
    let document = WebPage::document();
    if document.ready_state() == LOADING_STATE {
        Listener::on(&document, "DOMContentLoaded", |_| install());
    } else {
        install();
    }
}

/// Starts the catalog request right away, then waits for the shared navbar
/// and footer so every handler binds to the complete page.
fn install() {
    let translator = browser::create();
    log::debug!("Starting with language `{}`.", translator.borrow().language());
    browser::initialize(&translator);

    wasm_bindgen_futures::spawn_local(async move {
        let loaded = components::load_all().await;
        if loaded > 0 {
            translator.borrow().refresh();
        }
        install_handlers(&translator);
    });
}

fn install_handlers(translator: &SharedTranslator) {
    switcher::install(translator);
    theme::install();
    menu::install();
    filters::install();
    lightbox::install();
    forms::install(translator);
    news::install();
    effects::install();
    scroll::install();
}
