//! Pointer feedback: floating pattern corners, card and button hover lifts,
//! and the press effect of the hero buttons.

use gloo_timers::callback::Timeout;
use web_sys::Event;

use crate::helpers::prelude::*;

const PATTERN_SELECTOR: &str = ".pattern-corner";
const PATTERN_STYLE_ID: &str = "pattern-float-keyframes";
const PATTERN_KEYFRAMES: &str = "@keyframes patternFloat {\
     0%, 100% { transform: rotate(0deg) scale(1); opacity: 0.4; }\
     50% { transform: rotate(5deg) scale(1.05); opacity: 0.6; }\
     }";
const PRESS_MS: u32 = 150;

/// Transforms applied while the pointer is over an element and after it
/// leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hover {
    pub enter: &'static str,
    pub leave: &'static str,
}

pub const PATTERN_HOVER: Hover = Hover {
    enter: "scale(1.1) rotate(10deg)",
    leave: "scale(1) rotate(0deg)",
};

pub const CARD_HOVER: Hover = Hover {
    enter: "translateY(-8px) scale(1.02)",
    leave: "translateY(0) scale(1)",
};

pub const LANGUAGE_BUTTON_HOVER: Hover = Hover {
    enter: "translateY(-2px) scale(1.02)",
    leave: "translateY(0) scale(1)",
};

pub const PRESSED: &str = "scale(0.95)";

/// Float animation of the `index`-th pattern corner; later corners are
/// slower so they drift out of step.
pub fn pattern_animation(index: usize) -> String {
    format!("patternFloat {}s ease-in-out infinite", 6 + index)
}

pub fn install() {
    install_patterns();

    for card in Element::query_all(".news-card") {
        on_hover(&card, CARD_HOVER);
    }
    if Element::query(".landing-page").is_some() {
        for button in Element::query_all(".language-btn") {
            on_hover(&button, LANGUAGE_BUTTON_HOVER);
        }
    }

    for button in Element::query_all(".hero-buttons .btn") {
        let this = button.clone();
        Listener::on(&button, "click", move |_: Event| {
            Element::set_style(&this, "transform", PRESSED);
            let released = this.clone();
            Timeout::new(PRESS_MS, move || Element::remove_style(&released, "transform")).forget();
        });
    }
}

fn install_patterns() {
    let patterns = Element::query_all(PATTERN_SELECTOR);
    if patterns.is_empty() {
        return;
    }
    add_keyframes();

    for (index, pattern) in patterns.iter().enumerate() {
        Element::set_style(pattern, "animation", &pattern_animation(index));
        Element::set_style(pattern, "transition", "transform 0.3s ease");
        on_hover(pattern, PATTERN_HOVER);
    }
}

fn add_keyframes() {
    if Element::by_id(PATTERN_STYLE_ID).is_some() {
        return;
    }
    let document = WebPage::document();
    let Some(head) = document.head() else {
        return;
    };

    match document.create_element("style") {
        Ok(style) => {
            style.set_id(PATTERN_STYLE_ID);
            style.set_text_content(Some(PATTERN_KEYFRAMES));
            if let Err(err) = head.append_child(&style) {
                log::warn!("Unable to add pattern animation: {err:?}");
            }
        }
        Err(err) => log::warn!("Unable to create pattern animation: {err:?}"),
    }
}

fn on_hover(element: &web_sys::Element, hover: Hover) {
    let this = element.clone();
    Listener::on(element, "mouseenter", move |_| Element::set_style(&this, "transform", hover.enter));
    let this = element.clone();
    Listener::on(element, "mouseleave", move |_| Element::set_style(&this, "transform", hover.leave));
}
