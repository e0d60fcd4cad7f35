//! Document viewer contract and shared navigation state.
//!
//! The setlist manager only sequences *which* document and page should be
//! visible; actual rasterization lives behind the [`DocumentViewer`] trait
//! so the manager can drive any backend (and tests can drive a mock).

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;
pub const ZOOM_STEP: f32 = 1.25;

/// The navigation surface of an open PDF document.
///
/// A viewer owns at most one open document at a time. `load` replaces any
/// currently open document; on success the current page is 0 and a render
/// of that page is scheduled. All page mutators are no-ops when the move
/// is not allowed.
pub trait DocumentViewer {
    /// Open the document at `full_path`, replacing any open document.
    fn load(&mut self, full_path: &str) -> bool;
    fn is_loaded(&self) -> bool;
    /// Display name of the open document (empty when nothing is loaded).
    fn filename(&self) -> &str;
    fn current_page(&self) -> usize;
    fn page_count(&self) -> usize;
    fn can_go_next(&self) -> bool;
    fn can_go_previous(&self) -> bool;
    fn next_page(&mut self);
    fn previous_page(&mut self);
    /// Jump to `page`; no-op if out of range or already current.
    fn go_to_page(&mut self, page: usize);
}

/// Page/zoom navigation state shared by viewer implementations.
///
/// This is the pure-state half of a viewer: a rendering backend wraps it
/// together with its document and texture handles, opens it on a successful
/// load and closes it when the document is released. Any state change that
/// affects the displayed page sets the needs-render flag; the render loop
/// clears it with [`ViewerState::take_needs_render`].
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    filename: String,
    loaded: bool,
    current_page: usize,
    page_count: usize,
    zoom: f32,
    needs_render: bool,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            ..Self::default()
        }
    }

    /// Record a freshly opened document: page 0, default zoom, render due.
    pub fn open(&mut self, filename: &str, page_count: usize) {
        self.filename = filename.to_string();
        self.loaded = true;
        self.current_page = 0;
        self.page_count = page_count;
        self.zoom = 1.0;
        self.needs_render = true;
    }

    /// Reset to the no-document state.
    pub fn close(&mut self) {
        *self = Self::new();
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn can_go_next(&self) -> bool {
        self.loaded && self.current_page + 1 < self.page_count
    }

    pub fn can_go_previous(&self) -> bool {
        self.loaded && self.current_page > 0
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
            self.needs_render = true;
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.current_page -= 1;
            self.needs_render = true;
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        if page < self.page_count && page != self.current_page {
            self.current_page = page;
            self.needs_render = true;
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        let clamped = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if (clamped - self.zoom).abs() > f32::EPSILON {
            self.zoom = clamped;
            self.needs_render = true;
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(1.0);
    }

    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    /// Returns true once per pending render and clears the flag.
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_resets_page_and_zoom() {
        let mut state = ViewerState::new();
        state.open("a.pdf", 10);
        state.go_to_page(7);
        state.set_zoom(2.0);
        state.open("b.pdf", 3);
        assert_eq!(state.current_page(), 0);
        assert_eq!(state.page_count(), 3);
        assert_eq!(state.zoom(), 1.0);
        assert!(state.take_needs_render());
    }

    #[test]
    fn page_navigation_clamps_at_bounds() {
        let mut state = ViewerState::new();
        state.open("a.pdf", 2);
        assert!(!state.can_go_previous());
        state.previous_page();
        assert_eq!(state.current_page(), 0);
        state.next_page();
        assert_eq!(state.current_page(), 1);
        assert!(!state.can_go_next());
        state.next_page();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn go_to_page_ignores_out_of_range() {
        let mut state = ViewerState::new();
        state.open("a.pdf", 5);
        let _ = state.take_needs_render();
        state.go_to_page(5);
        assert_eq!(state.current_page(), 0);
        assert!(!state.take_needs_render());
        state.go_to_page(4);
        assert_eq!(state.current_page(), 4);
        assert!(state.take_needs_render());
    }

    #[test]
    fn zoom_is_clamped() {
        let mut state = ViewerState::new();
        state.open("a.pdf", 1);
        state.set_zoom(100.0);
        assert_eq!(state.zoom(), MAX_ZOOM);
        state.set_zoom(0.0);
        assert_eq!(state.zoom(), MIN_ZOOM);
        state.reset_zoom();
        assert_eq!(state.zoom(), 1.0);
    }

    #[test]
    fn close_returns_to_empty_state() {
        let mut state = ViewerState::new();
        state.open("a.pdf", 4);
        state.close();
        assert!(!state.is_loaded());
        assert_eq!(state.filename(), "");
        assert_eq!(state.page_count(), 0);
        assert!(!state.can_go_next());
    }
}
