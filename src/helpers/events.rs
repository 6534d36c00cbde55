use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, EventTarget};

pub struct Listener {}

impl Listener {
    /// Attaches `handler` to `target` for the rest of the page's life.
    pub fn on<F>(target: &EventTarget, event: &str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        let cb: Closure<dyn FnMut(Event)> = Closure::new(handler);
        if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
            log::warn!("Unable to listen for `{event}`: {err:?}");
            return;
        }
        cb.forget();
    }
}
