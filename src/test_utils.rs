//! Shared test doubles for exercising setlist navigation without a
//! rendering backend.

use std::collections::{HashMap, HashSet};

use crate::viewer::{DocumentViewer, ViewerState};

/// A scriptable [`DocumentViewer`].
///
/// Documents are registered up front with a page count; `load` succeeds for
/// registered paths unless the path was marked as failing. Every load
/// attempt (including failed ones) is recorded in `load_log`.
#[derive(Default)]
pub struct MockViewer {
    pages_by_path: HashMap<String, usize>,
    failing_paths: HashSet<String>,
    state: ViewerState,
    pub load_log: Vec<String>,
}

impl MockViewer {
    pub fn new() -> Self {
        Self {
            state: ViewerState::new(),
            ..Self::default()
        }
    }

    /// Register a loadable document with the given page count.
    pub fn with_document(mut self, full_path: &str, page_count: usize) -> Self {
        self.pages_by_path.insert(full_path.to_string(), page_count);
        self
    }

    /// Make `load` fail for this path even if it is registered.
    pub fn with_failing(mut self, full_path: &str) -> Self {
        self.failing_paths.insert(full_path.to_string());
        self
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }
}

impl DocumentViewer for MockViewer {
    fn load(&mut self, full_path: &str) -> bool {
        self.load_log.push(full_path.to_string());
        if self.failing_paths.contains(full_path) {
            return false;
        }
        let Some(&page_count) = self.pages_by_path.get(full_path) else {
            return false;
        };
        let filename = full_path.rsplit(['/', '\\']).next().unwrap_or(full_path);
        self.state.open(filename, page_count);
        true
    }

    fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    fn filename(&self) -> &str {
        self.state.filename()
    }

    fn current_page(&self) -> usize {
        self.state.current_page()
    }

    fn page_count(&self) -> usize {
        self.state.page_count()
    }

    fn can_go_next(&self) -> bool {
        self.state.can_go_next()
    }

    fn can_go_previous(&self) -> bool {
        self.state.can_go_previous()
    }

    fn next_page(&mut self) {
        self.state.next_page();
    }

    fn previous_page(&mut self) {
        self.state.previous_page();
    }

    fn go_to_page(&mut self, page: usize) {
        self.state.go_to_page(page);
    }
}
