use log::{error, info};
use std::fs;
use std::path::Path;

/// A PDF file discovered in the library folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfEntry {
    pub filename: String,
    pub full_path: String,
}

/// The set of PDF files found in a user-selected folder.
///
/// The scan is single-level: regular files whose extension matches `.pdf`
/// case-insensitively. IO errors during the scan are logged and swallowed,
/// yielding a shorter result rather than a failure.
#[derive(Debug, Default)]
pub struct PdfLibrary {
    folder_path: String,
    folder_name: String,
    files: Vec<PdfEntry>,
}

impl PdfLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `folder_path` for PDF files, replacing the current library.
    ///
    /// Fails only when the path does not name a directory.
    pub fn load_folder(&mut self, folder_path: &str) -> bool {
        self.clear();

        let path = Path::new(folder_path);
        if !path.is_dir() {
            error!("Not a directory: {folder_path}");
            return false;
        }

        self.folder_path = folder_path.to_string();
        self.folder_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            // Root paths have no final component
            .unwrap_or_else(|| folder_path.to_string());

        self.scan_folder();
        info!(
            "Loaded {} PDF files from {folder_path}",
            self.files.len()
        );
        true
    }

    pub fn clear(&mut self) {
        self.folder_path.clear();
        self.folder_name.clear();
        self.files.clear();
    }

    /// Rescan the current folder. No-op when no folder is loaded.
    pub fn refresh(&mut self) {
        if !self.folder_path.is_empty() {
            self.files.clear();
            self.scan_folder();
        }
    }

    pub fn is_loaded(&self) -> bool {
        !self.folder_path.is_empty()
    }

    pub fn folder_path(&self) -> &str {
        &self.folder_path
    }

    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    pub fn files(&self) -> &[PdfEntry] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    fn scan_folder(&mut self) {
        let entries = match fs::read_dir(&self.folder_path) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Failed to read directory {}: {e}", self.folder_path);
                return;
            }
        };

        self.files = entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                if !entry.file_type().ok()?.is_file() {
                    return None;
                }
                let path = entry.path();
                let extension = path.extension()?.to_str()?;
                if !extension.eq_ignore_ascii_case("pdf") {
                    return None;
                }
                Some(PdfEntry {
                    filename: path.file_name()?.to_str()?.to_string(),
                    full_path: path.to_str()?.to_string(),
                })
            })
            .collect();

        self.files
            .sort_by(|a, b| a.filename.to_lowercase().cmp(&b.filename.to_lowercase()));
    }
}
