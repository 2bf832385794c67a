use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TabError {
    #[error("tab {0:?} is already registered")]
    DuplicateTab(String),
}

/// A nested view placed inside a tab. It is told about visibility changes
/// so it can run its own show and hide work.
pub trait TabView {
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
}

/// Plain content area that is only ever shown or hidden.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Surface {
    hidden: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Surface { hidden: true }
    }
}

impl Surface {
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

pub enum TabContent {
    Surface(Surface),
    View(Rc<RefCell<dyn TabView>>),
}

impl TabContent {
    fn show(&mut self) {
        match self {
            TabContent::Surface(surface) => surface.hidden = false,
            TabContent::View(view) => view.borrow_mut().set_visible(true),
        }
    }

    fn hide(&mut self) {
        match self {
            TabContent::Surface(surface) => surface.hidden = true,
            TabContent::View(view) => view.borrow_mut().set_visible(false),
        }
    }

    fn is_visible(&self) -> bool {
        match self {
            TabContent::Surface(surface) => !surface.hidden,
            TabContent::View(view) => view.borrow().is_visible(),
        }
    }
}

pub struct Tab<A> {
    id: String,
    title: String,
    content: TabContent,
    on_select: A,
    selected: bool,
}

impl<A> Tab<A> {
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    /// Whether the tab header carries the selected marker.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
    pub fn is_visible(&self) -> bool {
        self.content.is_visible()
    }
}

/// Set of tabs of which at most one is visible. `A` is what a click on the
/// tab header hands back to the owner.
pub struct TabContainer<A> {
    tabs: Vec<Tab<A>>,
}

impl<A> Default for TabContainer<A> {
    fn default() -> Self {
        TabContainer { tabs: Vec::new() }
    }
}

impl<A: Clone> TabContainer<A> {
    pub fn append_tab(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        content: TabContent,
        on_select: A,
    ) -> Result<(), TabError> {
        let id = id.into();
        if self.has_tab(&id) {
            return Err(TabError::DuplicateTab(id));
        }
        let mut tab = Tab {
            id,
            title: title.into(),
            content,
            on_select,
            selected: false,
        };
        tab.content.hide();
        debug!("append tab {}", tab.id);
        self.tabs.push(tab);
        Ok(())
    }

    pub fn has_tab(&self, id: &str) -> bool {
        self.tabs.iter().any(|tab| tab.id == id)
    }

    /// Shows the tab named `id` and hides every other one. An unknown id
    /// leaves all tabs hidden.
    pub fn select_tab_by_id(&mut self, id: &str) -> bool {
        for tab in self.tabs.iter_mut() {
            if tab.id == id {
                tab.selected = true;
                tab.content.show();
            } else {
                tab.selected = false;
                tab.content.hide();
            }
        }
        self.has_tab(id)
    }

    pub fn click(&self, id: &str) -> Option<A> {
        self.tabs
            .iter()
            .find(|tab| tab.id == id)
            .map(|tab| tab.on_select.clone())
    }

    pub fn tabs(&self) -> impl Iterator<Item = &Tab<A>> {
        self.tabs.iter()
    }

    pub fn selected_tab_id(&self) -> Option<&str> {
        self.tabs
            .iter()
            .find(|tab| tab.is_visible())
            .map(|tab| tab.id.as_str())
    }
}
