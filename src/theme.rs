use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, MediaQueryList, MediaQueryListEvent};

use crate::{config::THEME_STORAGE_KEY, helpers::prelude::*};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const TRANSITION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon of the theme the toggle switches to.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Current theme plus the user's saved choice. Pages start light until the
/// user picks a theme; system colour scheme changes are followed until then.
pub struct ThemeController<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        let theme = store
            .load(THEME_STORAGE_KEY)
            .and_then(|value| Theme::from_stored(&value))
            .unwrap_or(Theme::Light);
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.save(THEME_STORAGE_KEY, self.theme.as_str());
        self.theme
    }

    /// Follows a system colour scheme change unless the user chose a theme.
    pub fn follow_system(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.store.load(THEME_STORAGE_KEY).is_some() {
            return None;
        }
        self.theme = if prefers_dark { Theme::Dark } else { Theme::Light };
        Some(self.theme)
    }
}

pub fn install() {
    let controller = Rc::new(RefCell::new(ThemeController::new(LocalStorageStore)));
    let theme = controller.borrow().theme();
    render(theme);
    announce(theme);

    for toggle in Element::query_all(".theme-toggle, #themeToggle") {
        let controller = controller.clone();
        Listener::on(&toggle, "click", move |_| {
            let theme = controller.borrow_mut().toggle();
            fade_body();
            render(theme);
            announce(theme);
        });
    }

    if let Some(scheme) = dark_scheme() {
        Listener::on(&scheme, "change", move |event| {
            let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            if let Some(theme) = controller.borrow_mut().follow_system(event.matches()) {
                render(theme);
                announce(theme);
            }
        });
    }
}

fn dark_scheme() -> Option<MediaQueryList> {
    WebPage::window().match_media(DARK_SCHEME_QUERY).ok().flatten()
}

fn render(theme: Theme) {
    if let Some(root) = WebPage::document().document_element() {
        Element::set_attribute(&root, "data-theme", theme.as_str());
    }

    for icon in Element::query_all(".theme-icon") {
        icon.set_text_content(Some(theme.icon()));
        Element::set_attribute(&icon, "aria-label", theme.toggle_label());
    }
}

/// Lets other scripts react through a `themeChanged` event on `window`.
fn announce(theme: Theme) {
    let detail = Object::new();
    if let Err(err) = Reflect::set(&detail, &JsValue::from_str("theme"), &JsValue::from_str(theme.as_str())) {
        log::warn!("Unable to describe theme change: {err:?}");
        return;
    }

    let mut init = CustomEventInit::new();
    init.detail(&detail);
    let dispatched = CustomEvent::new_with_event_init_dict("themeChanged", &init)
        .and_then(|event| WebPage::window().dispatch_event(&event));
    if let Err(err) = dispatched {
        log::warn!("Unable to announce theme change: {err:?}");
    }
}

fn fade_body() {
    let Some(body) = WebPage::body() else {
        return;
    };
    Element::set_style(&body, "transition", "background-color 0.3s ease, color 0.3s ease");
    Timeout::new(TRANSITION_MS, move || Element::remove_style(&body, "transition")).forget();
}
