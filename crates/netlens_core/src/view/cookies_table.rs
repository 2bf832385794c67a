use std::rc::Rc;

use log::debug;

use crate::data::cookies::Cookie;
use crate::view::tabbed_pane::TabView;

pub const COLUMNS: [&str; 8] = [
    "Name", "Value", "Domain", "Path", "Expires", "Size", "HTTP", "Secure",
];

pub type CookieList = Option<Rc<Vec<Cookie>>>;

/// A folder row of the cookies grid together with the cookies under it.
#[derive(Debug)]
pub struct CookieGroup {
    pub title: String,
    pub expanded: bool,
    cookies: CookieList,
    total_size: usize,
    revision: u64,
}

impl CookieGroup {
    fn new(title: &str) -> Self {
        CookieGroup {
            title: title.to_string(),
            expanded: true,
            cookies: Some(Rc::new(vec![])),
            total_size: 0,
            revision: 0,
        }
    }

    /// Returns false when `cookies` is the list already shown.
    fn assign(&mut self, cookies: CookieList) -> bool {
        let same = match (&self.cookies, &cookies) {
            (Some(current), Some(new)) => Rc::ptr_eq(current, new),
            (None, None) => true,
            _ => false,
        };
        if same {
            return false;
        }
        self.cookies = cookies;
        self.populate();
        true
    }

    fn populate(&mut self) {
        self.total_size = self
            .cookies
            .as_ref()
            .map(|cookies| cookies.iter().map(|c| c.size).sum())
            .unwrap_or(0);
        self.expanded = true;
        self.revision += 1;
        debug!(
            "{}: {} cookies, {} bytes",
            self.title,
            self.cookies().len(),
            self.total_size
        );
    }

    pub fn cookies(&self) -> &[Cookie] {
        self.cookies.as_deref().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Bumped every time the group is repopulated.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The folder row: title first, aggregate size in the size column.
    pub fn folder_cells(&self) -> [String; 8] {
        [
            self.title.clone(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            self.total_size.to_string(),
            String::new(),
            String::new(),
        ]
    }
}

pub fn cookie_cells(cookie: &Cookie) -> [String; 8] {
    let check = |flag: bool| if flag { "✓".to_string() } else { String::new() };
    [
        cookie.name.clone(),
        cookie.value.clone(),
        cookie.domain.clone(),
        cookie.path.clone(),
        cookie.expires.clone(),
        cookie.size.to_string(),
        check(cookie.http_only),
        check(cookie.secure),
    ]
}

/// Cookies tab of a resource view: a request and a response group.
#[derive(Debug)]
pub struct CookiesView {
    request: CookieGroup,
    response: CookieGroup,
    visible: bool,
    column_widths: [usize; 8],
    layout_revision: u64,
}

impl Default for CookiesView {
    fn default() -> Self {
        CookiesView {
            request: CookieGroup::new("Request Cookies"),
            response: CookieGroup::new("Response Cookies"),
            visible: false,
            column_widths: COLUMNS.map(str::len),
            layout_revision: 0,
        }
    }
}

impl CookiesView {
    pub fn set_request_cookies(&mut self, cookies: CookieList) -> bool {
        self.request.assign(cookies)
    }

    pub fn set_response_cookies(&mut self, cookies: CookieList) -> bool {
        self.response.assign(cookies)
    }

    pub fn request_group(&self) -> &CookieGroup {
        &self.request
    }

    pub fn response_group(&self) -> &CookieGroup {
        &self.response
    }

    pub fn groups(&self) -> [&CookieGroup; 2] {
        [&self.request, &self.response]
    }

    /// Recomputes each column's width in characters from its widest cell.
    pub fn resize(&mut self) {
        let mut widths = COLUMNS.map(|c| c.chars().count());
        for group in self.groups() {
            let rows = std::iter::once(group.folder_cells())
                .chain(group.cookies().iter().map(cookie_cells));
            for cells in rows {
                for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }
        self.column_widths = widths;
        self.layout_revision += 1;
    }

    pub fn column_widths(&self) -> [usize; 8] {
        self.column_widths
    }

    pub fn layout_revision(&self) -> u64 {
        self.layout_revision
    }
}

impl TabView for CookiesView {
    fn set_visible(&mut self, visible: bool) {
        let was_visible = self.visible;
        self.visible = visible;
        if visible && !was_visible {
            self.resize();
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
