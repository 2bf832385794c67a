use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Key of the last tab the user picked in any resource view.
pub const RESOURCE_VIEW_TAB: &str = "resourceViewTab";

/// Durable string settings shared by every open view.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub type SharedPreferences = Rc<RefCell<dyn PreferenceStore>>;

#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn shared() -> Rc<RefCell<MemoryPreferences>> {
        Rc::new(RefCell::new(MemoryPreferences::default()))
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
