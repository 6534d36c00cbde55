//! Client-side localization of the static pages.
//!
//! [`TranslationManager`] owns the current language and the loaded
//! catalog. It is constructed explicitly and shared by the handlers that
//! need it; see [`browser`] for the wiring against the real DOM.

use crate::{config::TranslationConfig, helpers::storage::PreferenceStore};

use self::{
    catalog::TranslationCatalog,
    error::CatalogLoadError,
    language::LanguageCode,
    page::{Page, TranslatableNode},
};

pub mod browser;
pub mod catalog;
pub mod error;
pub mod language;
pub mod page;
pub mod switcher;
pub mod title;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
    /// The catalog could not be loaded; the page keeps its static text.
    Failed,
}

pub struct TranslationManager<S, P> {
    config: TranslationConfig,
    store: S,
    page: P,
    language: LanguageCode,
    catalog: TranslationCatalog,
    state: LoadState,
    page_key: Option<&'static str>,
}

impl<S: PreferenceStore, P: Page> TranslationManager<S, P> {
    /// Resolves the starting language: query parameter, then stored
    /// preference, then the configured default. Unsupported codes are
    /// skipped at each step.
    pub fn new(config: TranslationConfig, store: S, page: P) -> Self {
        let from_url = page.query_param(&config.query_param);
        let from_store = store.load(&config.storage_key);
        let language = [from_url, from_store]
            .into_iter()
            .flatten()
            .find_map(|code| {
                let language = LanguageCode::from_code(&code);
                if language.is_none() {
                    log::debug!("Ignoring unsupported language `{code}`.");
                }
                language
            })
            .unwrap_or(config.default_language);

        let page_key = title::page_key(&page.title());

        Self {
            config,
            store,
            page,
            language,
            catalog: TranslationCatalog::default(),
            state: LoadState::Uninitialized,
            page_key,
        }
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Marks the catalog request as started and returns where to fetch it.
    pub fn begin_loading(&mut self) -> String {
        self.state = LoadState::Loading;
        self.config.catalog_url.clone()
    }

    pub fn finish_loading(&mut self, result: Result<TranslationCatalog, CatalogLoadError>) {
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.state = LoadState::Ready;
                self.apply_to_page();
            }
            Err(err) => {
                log::error!("Failed to load translations: {err}");
                self.state = LoadState::Failed;
            }
        }
    }

    /// Switches language, remembers it, and rewrites the page and URL in
    /// place. Content is only rewritten once a catalog is loaded; a pending
    /// load applies the new language when it completes.
    pub fn set_language(&mut self, language: LanguageCode) {
        self.language = language;
        self.store.save(&self.config.storage_key, language.code());

        if self.state == LoadState::Ready {
            self.apply_to_page();
        }

        self.page.sync_language_selector(language.code());
        self.page
            .replace_query_param(&self.config.query_param, language.code());
    }

    /// Rewrites the page again after new translatable markup was inserted.
    /// Does nothing until a catalog is loaded.
    pub fn refresh(&self) {
        if self.state == LoadState::Ready {
            self.apply_to_page();
        }
    }

    /// Stored string for `key` in the current language, if any.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.catalog.lookup(self.language, key)
    }

    /// Stored string for `key`, or `key` itself when there is none.
    pub fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_owned()
    }

    pub fn apply_to_page(&self) {
        for node in self.page.translatable_nodes() {
            if let Some(key) = node.translation_key() {
                node.write(node.slot(), &self.translate(&key));
            }
        }

        if let Some(key) = self.page_key {
            self.page
                .set_title(&title::localized_title(&self.translate(key), &self.config.title_suffix));
        }
    }
}
