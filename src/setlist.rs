use crate::pdf_library::PdfEntry;

/// A single PDF file entry within a setlist.
///
/// `full_path` identifies the file; `name` is presentation-only.
/// Items are copied by value when added, so a setlist never refers
/// back into the library that produced the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetlistItem {
    pub name: String,
    pub full_path: String,
}

/// A named, ordered list of PDF files that can be played through
/// sequentially as a single combined document.
///
/// Order is user-controlled and significant. Duplicate paths are allowed,
/// and names are not required to be unique across setlists.
#[derive(Debug, Clone)]
pub struct Setlist {
    name: String,
    items: Vec<SetlistItem>,
}

impl Setlist {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn items(&self) -> &[SetlistItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a library entry to the end of the setlist.
    pub fn add_entry(&mut self, entry: &PdfEntry) -> bool {
        self.add_item(&entry.filename, &entry.full_path)
    }

    /// Append an item to the end of the setlist.
    ///
    /// Fails only when the path is empty. The path is not checked for
    /// existence and duplicates are not rejected.
    pub fn add_item(&mut self, name: &str, full_path: &str) -> bool {
        if full_path.is_empty() {
            return false;
        }
        self.items.push(SetlistItem {
            name: name.to_string(),
            full_path: full_path.to_string(),
        });
        true
    }

    /// Remove the item at `index`, shifting later items down.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Move the item at `from_index` so it ends up at `to_index`.
    ///
    /// Splice semantics: the item is removed first and reinserted at
    /// `to_index` in the shortened list, so moving an item past its own
    /// original position accounts for the shift.
    pub fn move_item(&mut self, from_index: usize, to_index: usize) -> bool {
        if from_index >= self.items.len() || to_index >= self.items.len() {
            return false;
        }
        if from_index == to_index {
            return true;
        }
        let item = self.items.remove(from_index);
        self.items.insert(to_index, item);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
