use std::{cell::Cell, rc::Rc};

use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, Node};

use crate::helpers::prelude::*;

const TOGGLE_ID: &str = "mobileMenuToggle";
const MENU_ID: &str = "navMenu";
const OPEN_CLASS: &str = "active";

/// Whether a click at some point of the page dismisses the open menu.
pub fn closes_on_click(open: bool, inside_menu: bool, inside_toggle: bool) -> bool {
    open && !inside_menu && !inside_toggle
}

pub fn closes_on_key(open: bool, key: &str) -> bool {
    open && key == "Escape"
}

pub fn install() {
    let (Some(toggle), Some(menu)) = (Element::by_id(TOGGLE_ID), Element::by_id(MENU_ID)) else {
        return;
    };
    let open = Rc::new(Cell::new(false));

    let on_toggle = {
        let (toggle, menu, open) = (toggle.clone(), menu.clone(), open.clone());
        move |_: Event| set_open(&toggle, &menu, &open, !open.get())
    };
    Listener::on(&toggle, "click", on_toggle);

    let document = WebPage::document();
    {
        let (toggle, menu, open) = (toggle.clone(), menu.clone(), open.clone());
        Listener::on(&document, "click", move |event| {
            let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
            let inside_menu = menu.contains(target.as_ref());
            let inside_toggle = toggle.contains(target.as_ref());
            if closes_on_click(open.get(), inside_menu, inside_toggle) {
                set_open(&toggle, &menu, &open, false);
            }
        });
    }

    Listener::on(&document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if closes_on_key(open.get(), &event.key()) {
            set_open(&toggle, &menu, &open, false);
        }
    });
}

fn set_open(toggle: &web_sys::Element, menu: &web_sys::Element, open: &Cell<bool>, value: bool) {
    open.set(value);
    for element in [toggle, menu] {
        Element::toggle_class(element, OPEN_CLASS, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_click_closes_open_menu() {
        assert!(closes_on_click(true, false, false));
    }

    #[test]
    fn clicks_inside_keep_menu_open() {
        assert!(!closes_on_click(true, true, false));
        assert!(!closes_on_click(true, false, true));
        assert!(!closes_on_click(false, false, false));
    }

    #[test]
    fn escape_closes_open_menu() {
        assert!(closes_on_key(true, "Escape"));
        assert!(!closes_on_key(true, "Enter"));
        assert!(!closes_on_key(false, "Escape"));
    }
}
