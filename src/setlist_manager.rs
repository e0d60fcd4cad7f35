use anyhow::{Context, Result, bail};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::setlist::Setlist;
use crate::viewer::DocumentViewer;

// Save file format (plain text, line-based):
//
//   SETLISTS_V1
//   SETLIST:<name>
//   ITEM:<display_name>\t<full_path>
//   ITEM:<display_name>\t<full_path>
//   SETLIST:<name>
//   ITEM:<display_name>\t<full_path>
//   END
//
// Known weakness: names containing a tab or newline are written verbatim
// and will corrupt their line on reload.
const FILE_HEADER: &str = "SETLISTS_V1";
const FILE_FOOTER: &str = "END";
const SETLIST_PREFIX: &str = "SETLIST:";
const ITEM_PREFIX: &str = "ITEM:";
const DEFAULT_FILENAME: &str = "setlists.dat";

/// Position of the item currently driving the viewer: which setlist in the
/// manager's collection, and which item within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePosition {
    pub setlist: usize,
    pub item: usize,
}

/// Owns the setlist collection and navigates the active setlist as one
/// combined document.
///
/// When a setlist is active, [`SetlistManager::next`] and
/// [`SetlistManager::previous`] traverse pages within the loaded document
/// and cross into the adjacent setlist item when the end/start of the
/// document is reached. The viewer is supplied by the caller on every call;
/// the manager sequences documents but never owns the rendering resource.
#[derive(Debug, Default)]
pub struct SetlistManager {
    setlists: Vec<Setlist>,
    active: Option<ActivePosition>,
}

impl SetlistManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty setlist and return its index.
    ///
    /// An empty name gets a generated one ("Setlist {n}").
    pub fn create_setlist(&mut self, name: &str) -> usize {
        let name = if name.is_empty() {
            format!("Setlist {}", self.setlists.len() + 1)
        } else {
            name.to_string()
        };
        self.setlists.push(Setlist::new(&name));
        self.setlists.len() - 1
    }

    /// Remove a setlist. Deactivates first if it is the active one; if it
    /// sits before the active one, the active index shifts down to keep
    /// pointing at the same setlist.
    pub fn remove_setlist(&mut self, index: usize) -> bool {
        if index >= self.setlists.len() {
            return false;
        }
        match self.active {
            Some(pos) if pos.setlist == index => self.deactivate(),
            Some(pos) if index < pos.setlist => {
                self.active = Some(ActivePosition {
                    setlist: pos.setlist - 1,
                    ..pos
                });
            }
            _ => {}
        }
        self.setlists.remove(index);
        true
    }

    pub fn setlist_count(&self) -> usize {
        self.setlists.len()
    }

    pub fn setlists(&self) -> &[Setlist] {
        &self.setlists
    }

    pub fn setlist(&self, index: usize) -> Option<&Setlist> {
        self.setlists.get(index)
    }

    pub fn setlist_mut(&mut self, index: usize) -> Option<&mut Setlist> {
        self.setlists.get_mut(index)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_position(&self) -> Option<ActivePosition> {
        self.active
    }

    fn active_setlist(&self) -> Option<&Setlist> {
        self.active.and_then(|pos| self.setlists.get(pos.setlist))
    }

    /// Activate a setlist, loading its first item into the viewer.
    ///
    /// Fails on a bad index, an empty setlist, or a failed load. On failure
    /// the previous session (if any) stays active.
    pub fn activate_setlist(&mut self, index: usize, viewer: &mut dyn DocumentViewer) -> bool {
        let Some(setlist) = self.setlists.get(index) else {
            return false;
        };
        if setlist.is_empty() {
            return false;
        }

        let previous = self.active;
        self.active = Some(ActivePosition {
            setlist: index,
            item: 0,
        });
        if !self.load_item(viewer, 0) {
            self.active = previous;
            return false;
        }
        true
    }

    /// Leave setlist mode. The viewer keeps whatever document it has open.
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    /// Jump straight to an item, activating its setlist if needed.
    /// Same failure/rollback contract as [`SetlistManager::activate_setlist`].
    pub fn jump_to_item(
        &mut self,
        setlist_index: usize,
        item_index: usize,
        viewer: &mut dyn DocumentViewer,
    ) -> bool {
        let Some(setlist) = self.setlists.get(setlist_index) else {
            return false;
        };
        if item_index >= setlist.item_count() {
            return false;
        }

        let previous = self.active;
        self.active = Some(ActivePosition {
            setlist: setlist_index,
            item: item_index,
        });
        if !self.load_item(viewer, item_index) {
            self.active = previous;
            return false;
        }
        true
    }

    /// Load the item at `item_index` of the active setlist into the viewer.
    /// Only commits the new item index once the load has succeeded, so the
    /// active position never points at an item whose load failed.
    fn load_item(&mut self, viewer: &mut dyn DocumentViewer, item_index: usize) -> bool {
        let Some(pos) = self.active else {
            return false;
        };
        let Some(setlist) = self.setlists.get(pos.setlist) else {
            return false;
        };
        let Some(item) = setlist.items().get(item_index) else {
            return false;
        };

        if !viewer.load(&item.full_path) {
            warn!("Failed to load setlist item: {}", item.full_path);
            return false;
        }

        self.active = Some(ActivePosition {
            item: item_index,
            ..pos
        });
        true
    }

    /// Advance one page, crossing into the next setlist item when the
    /// current document is on its last page.
    pub fn next(&mut self, viewer: &mut dyn DocumentViewer) -> bool {
        let Some(pos) = self.active else {
            return false;
        };
        let Some(setlist) = self.setlists.get(pos.setlist) else {
            return false;
        };

        if viewer.is_loaded() && viewer.can_go_next() {
            viewer.next_page();
            return true;
        }

        let next_item = pos.item + 1;
        if next_item < setlist.item_count() {
            return self.load_item(viewer, next_item);
        }
        false
    }

    /// Go back one page, crossing into the previous setlist item when the
    /// current document is on its first page. Arriving from the end, the
    /// preceding document is positioned on its last page.
    pub fn previous(&mut self, viewer: &mut dyn DocumentViewer) -> bool {
        let Some(pos) = self.active else {
            return false;
        };
        if self.active_setlist().is_none() {
            return false;
        }

        if viewer.is_loaded() && viewer.can_go_previous() {
            viewer.previous_page();
            return true;
        }

        if pos.item == 0 {
            return false;
        }
        if !self.load_item(viewer, pos.item - 1) {
            return false;
        }
        if viewer.page_count() > 0 {
            viewer.go_to_page(viewer.page_count() - 1);
        }
        true
    }

    /// Non-mutating mirror of [`SetlistManager::next`]; used to enable UI
    /// controls, so it must agree exactly with what `next` would do.
    pub fn can_go_next(&self, viewer: &dyn DocumentViewer) -> bool {
        let Some(pos) = self.active else {
            return false;
        };
        let Some(setlist) = self.active_setlist() else {
            return false;
        };
        if viewer.is_loaded() && viewer.can_go_next() {
            return true;
        }
        pos.item + 1 < setlist.item_count()
    }

    /// Non-mutating mirror of [`SetlistManager::previous`].
    pub fn can_go_previous(&self, viewer: &dyn DocumentViewer) -> bool {
        let Some(pos) = self.active else {
            return false;
        };
        if self.active_setlist().is_none() {
            return false;
        }
        if viewer.is_loaded() && viewer.can_go_previous() {
            return true;
        }
        pos.item > 0
    }

    /// Write the whole collection to `path`, truncating any existing file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let mut out = String::new();
        out.push_str(FILE_HEADER);
        out.push('\n');
        for setlist in &self.setlists {
            out.push_str(SETLIST_PREFIX);
            out.push_str(setlist.name());
            out.push('\n');
            for item in setlist.items() {
                out.push_str(ITEM_PREFIX);
                out.push_str(&item.name);
                out.push('\t');
                out.push_str(&item.full_path);
                out.push('\n');
            }
        }
        out.push_str(FILE_FOOTER);
        out.push('\n');

        fs::write(path, out)
            .with_context(|| format!("Failed to save setlists to {}", path.display()))?;
        info!("Saved {} setlists to {}", self.setlists.len(), path.display());
        Ok(())
    }

    /// Replace the collection with the contents of `path` and deactivate.
    ///
    /// Returns `Ok(false)` when the file does not exist (no saved data is
    /// not an error). A bad header is an error and leaves the in-memory
    /// collection untouched. Malformed item lines and unknown lines are
    /// skipped; parsing stops at the `END` line or end-of-file.
    pub fn load_from_file(&mut self, path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read setlists from {}", path.display()))?;

        let mut lines = content.lines();
        if lines.next() != Some(FILE_HEADER) {
            bail!("Invalid setlists file (bad header): {}", path.display());
        }

        self.deactivate();
        self.setlists.clear();

        for line in lines {
            if line == FILE_FOOTER {
                break;
            }
            if let Some(name) = line.strip_prefix(SETLIST_PREFIX) {
                // Names are restored verbatim, not regenerated when empty
                self.setlists.push(Setlist::new(name));
            } else if let Some(rest) = line.strip_prefix(ITEM_PREFIX) {
                // An item before any SETLIST line has nowhere to go
                let Some(current) = self.setlists.last_mut() else {
                    continue;
                };
                if let Some((name, full_path)) = rest.split_once('\t') {
                    current.add_item(name, full_path);
                }
            }
            // Unknown lines are skipped
        }

        info!(
            "Loaded {} setlists from {}",
            self.setlists.len(),
            path.display()
        );
        Ok(true)
    }

    /// Default save location: `setlists.dat` in the current working
    /// directory at call time.
    pub fn default_save_path() -> PathBuf {
        std::env::current_dir()
            .map(|dir| dir.join(DEFAULT_FILENAME))
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_FILENAME))
    }
}
