use web_sys::{Document, HtmlElement, Storage, Window};

pub struct WebPage {}

impl WebPage {
    #[inline]
    pub fn window() -> Window {
        web_sys::window().expect("Site scripts must run inside a browser window.")
    }

    #[inline]
    pub fn document() -> Document {
        Self::window()
            .document()
            .expect("Browser window has no document.")
    }

    #[inline]
    pub fn body() -> Option<HtmlElement> {
        Self::document().body()
    }

    /// `None` when storage is disabled, e.g. in private browsing.
    #[inline]
    pub fn local_storage() -> Option<Storage> {
        Self::window().local_storage().ok().flatten()
    }

    pub fn scroll_y() -> f64 {
        Self::window().scroll_y().unwrap_or_default()
    }
}
