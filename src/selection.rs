//! Per-request view state for pages that list stories: the active category
//! filter and which story, if any, is open in the detail overlay.
//!
//! The state is carried entirely in the query string (`filter`, `post`), so
//! every link the page renders is one transition of the machine below.

use url::form_urlencoded;

use crate::models::category::Filter;
use crate::models::post::{self, PostRecord};

/// Detail overlay state. An `Open` selection always holds a record that
/// exists in the catalog; unknown keys never get this far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(&'static PostRecord),
}

impl Selection {
    /// Resolve a raw `post` query value. Missing, empty and unknown keys all
    /// resolve to `Closed`.
    pub fn resolve(key: Option<&str>) -> Self {
        match key.map(str::trim) {
            None | Some("") => Selection::Closed,
            Some(k) => match post::find(k) {
                Some(record) => Selection::Open(record),
                None => {
                    log::debug!("Ignoring unknown post key {:?}", k);
                    Selection::Closed
                }
            },
        }
    }

    /// "Read more": replaces whatever is open, without passing through Closed.
    pub fn open(self, key: &str) -> Self {
        Self::resolve(Some(key))
    }

    pub fn dismiss(self) -> Self {
        Selection::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn key(&self) -> Option<&'static str> {
        match self {
            Selection::Open(record) => Some(record.key),
            Selection::Closed => None,
        }
    }

    pub fn record(&self) -> Option<&'static PostRecord> {
        match self {
            Selection::Open(record) => Some(record),
            Selection::Closed => None,
        }
    }
}

/// View state for one page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// Path the state links back to, e.g. "/blog" or "/".
    pub base: &'static str,
    pub filter: Filter,
    pub selection: Selection,
}

impl UiState {
    pub fn new(base: &'static str) -> Self {
        UiState {
            base,
            filter: Filter::All,
            selection: Selection::Closed,
        }
    }

    pub fn from_query(base: &'static str, filter: Option<&str>, post: Option<&str>) -> Self {
        UiState {
            filter: Filter::parse(filter),
            selection: Selection::resolve(post),
            ..UiState::new(base)
        }
    }

    /// Link for a "read more" action: keeps the filter, opens `key`.
    pub fn href_with(&self, key: &str) -> String {
        self.href(self.filter, self.selection.open(key).key())
    }

    /// Link that closes the overlay and keeps the filter.
    pub fn href_dismiss(&self) -> String {
        self.href(self.filter, self.selection.dismiss().key())
    }

    /// Link for a filter chip. Switching filters closes any open story.
    pub fn href_filter(&self, filter: Filter) -> String {
        self.href(filter, None)
    }

    fn href(&self, filter: Filter, post: Option<&str>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !filter.is_all() {
            query.append_pair("filter", filter.slug());
        }
        if let Some(key) = post {
            query.append_pair("post", key);
        }
        let query = query.finish();
        if query.is_empty() {
            self.base.to_string()
        } else {
            format!("{}?{}", self.base, query)
        }
    }
}
