//! Scroll-driven effects: sticky navbar styling, reveal-on-scroll,
//! parallax, statistic count-up and smooth in-page anchors.

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::helpers::prelude::*;

const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
const REVEAL_SELECTOR: &str = ".news-card, .hero-content, .section-title, .footer-section, .page-header";
const REVEAL_MARGIN: &str = "0px 0px -50px 0px";
const REVEAL_THRESHOLD: f64 = 0.1;
const COUNT_UP_STEPS: u32 = 50;
const COUNT_UP_FRAME_MS: u32 = 30;

pub fn navbar_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn hero_offset(scroll_y: f64) -> f64 {
    scroll_y * -0.5
}

/// Transform of the `index`-th floating decoration; later ones drift faster.
pub fn floating_transform(scroll_y: f64, index: usize) -> String {
    let speed = 0.2 + index as f64 * 0.1;
    format!("translateY({}px) rotate({}deg)", scroll_y * speed, scroll_y * 0.1)
}

/// Integer at the start of `text`, e.g. `120` for `"120+ members"`.
pub fn leading_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Values shown while a statistic counts up from zero to `target`.
pub struct CountUp {
    target: f64,
    current: f64,
    increment: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        let target = f64::from(target);
        Self {
            target,
            current: 0.0,
            increment: target / f64::from(COUNT_UP_STEPS),
            done: false,
        }
    }
}

impl Iterator for CountUp {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }

        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            self.done = true;
        }
        Some(self.current.floor() as u32)
    }
}

pub fn install() {
    install_navbar();
    install_parallax();
    observe_once(REVEAL_SELECTOR, Some(REVEAL_MARGIN), REVEAL_THRESHOLD, |element| {
        Element::add_class(&element, "animate-in");
    });
    observe_once(".hero-stat-number", None, 0.0, |element| {
        let text = element.text_content().unwrap_or_default();
        if let Some(target) = leading_integer(&text) {
            count_up(element, CountUp::new(target));
        }
    });
    install_smooth_anchors();
}

fn install_navbar() {
    let Some(navbar) = Element::query(".navbar") else {
        return;
    };
    Listener::on(&WebPage::window(), "scroll", move |_| {
        Element::toggle_class(&navbar, "scrolled", navbar_is_scrolled(WebPage::scroll_y()));
    });
}

fn install_parallax() {
    let hero = Element::query(".hero-bg-image");
    let floating = Element::query_all(".floating-element");
    if hero.is_none() && floating.is_empty() {
        return;
    }

    Listener::on(&WebPage::window(), "scroll", move |_| {
        let scroll_y = WebPage::scroll_y();
        if let Some(hero) = &hero {
            Element::set_style(hero, "transform", &format!("translateY({}px)", hero_offset(scroll_y)));
        }
        for (index, element) in floating.iter().enumerate() {
            Element::set_style(element, "transform", &floating_transform(scroll_y, index));
        }
    });
}

/// Calls `on_visible` the first time each element matching `selector`
/// scrolls into view.
fn observe_once<F>(selector: &str, root_margin: Option<&str>, threshold: f64, mut on_visible: F)
where
    F: FnMut(web_sys::Element) + 'static,
{
    let elements = Element::query_all(selector);
    if elements.is_empty() {
        return;
    }

    let cb: Closure<dyn FnMut(Array, IntersectionObserver)> =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        });

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(threshold));
    if let Some(root_margin) = root_margin {
        options.root_margin(root_margin);
    }

    let observer = match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("Unable to observe `{selector}`: {err:?}");
            return;
        }
    };
    cb.forget();

    for element in &elements {
        observer.observe(element);
    }
}

fn count_up(element: web_sys::Element, mut frames: CountUp) {
    let Some(value) = frames.next() else {
        return;
    };
    element.set_text_content(Some(&format!("{value}+")));
    Timeout::new(COUNT_UP_FRAME_MS, move || count_up(element, frames)).forget();
}

fn install_smooth_anchors() {
    for anchor in Element::query_all("a[href^=\"#\"]") {
        let id = anchor
            .get_attribute("href")
            .map(|href| href.trim_start_matches('#').to_owned())
            .unwrap_or_default();
        if id.is_empty() {
            continue;
        }

        Listener::on(&anchor, "click", move |event| {
            let Some(target) = Element::by_id(&id) else {
                return;
            };
            event.prevent_default();

            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            options.block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn navbar_switches_past_threshold() {
        assert!(!navbar_is_scrolled(0.0));
        assert!(!navbar_is_scrolled(100.0));
        assert!(navbar_is_scrolled(100.5));
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(hero_offset(200.0), -100.0);
        assert_eq!(floating_transform(10.0, 0), "translateY(2px) rotate(1deg)");
    }

    #[test]
    fn leading_integer_reads_prefix() {
        assert_eq!(leading_integer("120+"), Some(120));
        assert_eq!(leading_integer("  35 countries"), Some(35));
        assert_eq!(leading_integer("many"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn count_up_ends_on_target() {
        let frames = CountUp::new(100).collect::<Vec<_>>();
        assert_eq!(frames.len(), 50);
        assert_eq!(frames.first(), Some(&2));
        assert_eq!(frames.last(), Some(&100));
        assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn count_up_handles_odd_targets() {
        let frames = CountUp::new(7).collect::<Vec<_>>();
        assert!(frames.len() <= 51);
        assert_eq!(frames.last(), Some(&7));
    }

    #[test]
    fn count_up_of_zero_shows_zero_once() {
        assert_eq!(CountUp::new(0).collect::<Vec<_>>(), vec![0]);
    }
}
