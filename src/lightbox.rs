use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::{prelude::*, AppHandle};
use yew_icons::{Icon, IconId};

use crate::helpers::prelude::*;

const FADE_IN_DELAY_MS: u32 = 10;
const FADE_OUT_MS: u32 = 300;

const HOST_STYLE: &str = "position: fixed; inset: 0; z-index: 1000; opacity: 0; transition: opacity 0.3s ease;";
const BACKDROP_STYLE: &str = "width: 100%; height: 100%; background: rgba(0, 0, 0, 0.9); \
                              display: flex; align-items: center; justify-content: center;";
const CONTENT_STYLE: &str = "position: relative; max-width: 90%; max-height: 90%;";
const IMAGE_STYLE: &str = "max-width: 100%; max-height: 100%; object-fit: contain;";
const CLOSE_STYLE: &str = "position: absolute; top: -40px; right: 0; background: none; border: none; \
                           color: white; font-size: 2rem; cursor: pointer;";

type LightboxHandle = Rc<RefCell<Option<AppHandle<Lightbox>>>>;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub src: String,
    pub alt: String,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            if event.target() == event.current_target() {
                on_close.emit(());
            }
        })
    };
    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="lightbox-overlay" style={BACKDROP_STYLE} onclick={on_backdrop}>
            <div class="lightbox-content" style={CONTENT_STYLE}>
                <img class="lightbox-image" src={props.src.clone()} alt={props.alt.clone()} style={IMAGE_STYLE} />
                <button class="lightbox-close" aria-label="Close" style={CLOSE_STYLE} onclick={on_button}>
                    <Icon icon_id={IconId::BootstrapXCircle} />
                </button>
            </div>
        </div>
    }
}

/// Shows `src` full screen until the close button or the backdrop is
/// clicked. Page scrolling is locked meanwhile.
pub fn open(src: String, alt: String) {
    let Some(body) = WebPage::body() else {
        return;
    };
    let host = match WebPage::document().create_element("div") {
        Ok(host) => host,
        Err(err) => {
            log::warn!("Unable to create lightbox: {err:?}");
            return;
        }
    };
    Element::set_attribute(&host, "style", HOST_STYLE);
    if let Err(err) = body.append_child(&host) {
        log::warn!("Unable to show lightbox: {err:?}");
        return;
    }
    Element::set_style(&body, "overflow", "hidden");

    let handle = LightboxHandle::default();
    let on_close = {
        let (handle, host) = (handle.clone(), host.clone());
        Callback::from(move |_: ()| close(&handle, &host))
    };
    let props = LightboxProps { src, alt, on_close };
    *handle.borrow_mut() = Some(yew::Renderer::<Lightbox>::with_root_and_props(host.clone(), props).render());

    Timeout::new(FADE_IN_DELAY_MS, move || Element::set_style(&host, "opacity", "1")).forget();
}

fn close(handle: &LightboxHandle, host: &web_sys::Element) {
    let Some(app) = handle.borrow_mut().take() else {
        return;
    };
    Element::set_style(host, "opacity", "0");

    let host = host.clone();
    Timeout::new(FADE_OUT_MS, move || {
        app.destroy();
        host.remove();
        if let Some(body) = WebPage::body() {
            Element::remove_style(&body, "overflow");
        }
    })
    .forget();
}

pub fn install() {
    for item in Element::query_all(".gallery-item") {
        let this = item.clone();
        Listener::on(&item, "click", move |_| {
            let image = this
                .query_selector(".gallery-image")
                .ok()
                .flatten()
                .and_then(|image| image.dyn_into::<HtmlImageElement>().ok());
            if let Some(image) = image {
                open(image.src(), image.alt());
            }
        });
    }

    for button in Element::query_all(".play-button") {
        Listener::on(&button, "click", |event| event.stop_propagation());
    }
}
