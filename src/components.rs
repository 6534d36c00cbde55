//! Shared page fragments. Pages that carry an empty `#navbar-container` or
//! `#footer-container` get the common navbar and footer markup fetched into
//! them before any handler is installed.

use gloo_net::http::Request;

use crate::{
    config::{FOOTER_COMPONENT, NAVBAR_COMPONENT},
    helpers::prelude::*,
};

#[derive(Debug, thiserror::Error)]
pub enum ComponentLoadError {
    #[error("component request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("component request returned HTTP {0}")]
    Status(u16),
}

/// A placeholder element and the fragment that fills it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Component {
    pub container_id: &'static str,
    pub path: &'static str,
}

pub const COMPONENTS: [Component; 2] = [
    Component {
        container_id: "navbar-container",
        path: NAVBAR_COMPONENT,
    },
    Component {
        container_id: "footer-container",
        path: FOOTER_COMPONENT,
    },
];

pub async fn fetch_component(path: &str) -> Result<String, ComponentLoadError> {
    let response = Request::get(path).send().await?;
    if !response.ok() {
        return Err(ComponentLoadError::Status(response.status()));
    }
    Ok(response.text().await?)
}

/// Fills every container present on the page and returns how many were
/// filled. A fragment that fails to load leaves its container empty.
pub async fn load_all() -> usize {
    let mut loaded = 0;
    for component in COMPONENTS {
        let Some(container) = Element::by_id(component.container_id) else {
            continue;
        };

        match fetch_component(component.path).await {
            Ok(markup) => {
                container.set_inner_html(&markup);
                loaded += 1;
            }
            Err(err) => log::error!("Failed to load `{}`: {err}", component.path),
        }
    }
    loaded
}
