// Export modules for use in tests
pub mod paths;
pub mod pdf_library;
pub mod setlist;
pub mod setlist_manager;
pub mod settings;
pub mod viewer;

pub mod test_utils;

// Re-export the navigation core
pub use setlist::{Setlist, SetlistItem};
pub use setlist_manager::{ActivePosition, SetlistManager};
pub use viewer::DocumentViewer;
