pub use super::{
    element::Element,
    events::Listener,
    input::Select,
    storage::{LocalStorageStore, PreferenceStore},
    webpage::WebPage,
};
