use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::helpers::prelude::*;

const SLIDE_IN_DELAY_MS: u32 = 100;
const VISIBLE_MS: u32 = 3000;
const SLIDE_OUT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    const fn background(self) -> &'static str {
        match self {
            Self::Success => "#10B981",
            Self::Error => "#EF4444",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    pub kind: ToastKind,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <div class={classes!("notification", props.kind.class())} role="status">
            {props.message.clone()}
        </div>
    }
}

fn host_style(kind: ToastKind) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; border-radius: 8px; \
         color: white; font-weight: 500; z-index: 1000; transform: translateX(100%); \
         transition: transform 0.3s ease; background: {};",
        kind.background()
    )
}

/// Slides a toast in at the top right corner and removes it a few seconds
/// later.
pub fn show(message: impl Into<String>, kind: ToastKind) {
    let Some(body) = WebPage::body() else {
        return;
    };
    let host = match WebPage::document().create_element("div") {
        Ok(host) => host,
        Err(err) => {
            log::warn!("Unable to create notification: {err:?}");
            return;
        }
    };
    Element::set_attribute(&host, "style", &host_style(kind));
    if let Err(err) = body.append_child(&host) {
        log::warn!("Unable to show notification: {err:?}");
        return;
    }

    let props = ToastProps {
        message: message.into(),
        kind,
    };
    let app = yew::Renderer::<Toast>::with_root_and_props(host.clone(), props).render();

    let slide_in = host.clone();
    Timeout::new(SLIDE_IN_DELAY_MS, move || {
        Element::set_style(&slide_in, "transform", "translateX(0)");
    })
    .forget();

    Timeout::new(VISIBLE_MS, move || {
        Element::set_style(&host, "transform", "translateX(100%)");
        Timeout::new(SLIDE_OUT_MS, move || {
            app.destroy();
            host.remove();
        })
        .forget();
    })
    .forget();
}
