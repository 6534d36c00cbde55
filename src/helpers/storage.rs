use super::prelude::*;

/// Key-value preferences that outlive the page.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Browser local storage. Reads and writes become no-ops when storage is
/// unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        WebPage::local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = WebPage::local_storage() else {
            log::warn!("Local storage is unavailable, `{key}` was not saved.");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("Unable to save `{key}`: {err:?}");
        }
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use super::PreferenceStore;

    /// In-memory store whose clones share the same values.
    #[derive(Clone, Debug, Default)]
    pub(crate) struct MemoryStore {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        pub(crate) fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.save(key, value);
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        }
    }
}
