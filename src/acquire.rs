//! File acquisition.
//!
//! A [`FileSelection`] is what one interaction with the file picker yields.
//! Its first file is read whole, asynchronously, into a buffer.

use crate::error::{Error, Result};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions the picker offers by default.
pub const DEFAULT_ACCEPT: [&str; 2] = ["xlsx", "xls"];

/// A selected file whose content can be read asynchronously.
pub trait FileSource {
    /// Display name of the file.
    fn name(&self) -> &str;

    /// Read the entire content.
    fn read_all(&self) -> impl Future<Output = io::Result<Vec<u8>>>;
}

/// A file on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileSource for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_all(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

/// An in-memory file, e.g. an upload already held by the caller.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    data: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

impl FileSource for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_all(&self) -> io::Result<Vec<u8>> {
        Ok(self.data.clone())
    }
}

/// The files chosen in one picker interaction, in selection order.
#[derive(Debug, Clone)]
pub struct FileSelection<F> {
    files: Vec<F>,
}

impl<F> Default for FileSelection<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F> FileSelection<F> {
    pub fn new(files: Vec<F>) -> Self {
        Self { files }
    }

    /// A selection of exactly one file.
    pub fn single(file: F) -> Self {
        Self { files: vec![file] }
    }

    /// A cancelled dialog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The file that gets loaded; later files are ignored.
    pub fn first(&self) -> Option<&F> {
        self.files.first()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSelection<LocalFile> {
    /// Build a selection from filesystem paths.
    pub fn from_paths<P: Into<PathBuf>>(paths: impl IntoIterator<Item = P>) -> Self {
        Self::new(paths.into_iter().map(LocalFile::new).collect())
    }
}

/// Read a selected file whole.
///
/// Fails with [`Error::Read`] when the read errors and [`Error::EmptyFile`]
/// when it yields nothing.
pub async fn read_file<F: FileSource>(file: &F) -> Result<Vec<u8>> {
    let data = file
        .read_all()
        .await
        .map_err(|e| Error::Read(format!("{}: {}", file.name(), e)))?;

    if data.is_empty() {
        return Err(Error::EmptyFile);
    }

    debug!(file = file.name(), bytes = data.len(), "read selected file");
    Ok(data)
}

/// Blocking variant of [`read_file`] for a path.
pub fn read_path(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data =
        std::fs::read(path).map_err(|e| Error::Read(format!("{}: {}", path.display(), e)))?;

    if data.is_empty() {
        return Err(Error::EmptyFile);
    }
    Ok(data)
}

/// Accept filter of the file picker.
///
/// A hint like the HTML `accept` attribute; content is sniffed regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePicker {
    extensions: Vec<String>,
}

impl Default for FilePicker {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPT)
    }
}

impl FilePicker {
    /// Create a picker accepting the given extensions (with or without a dot).
    pub fn new<S: AsRef<str>>(extensions: impl IntoIterator<Item = S>) -> Self {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    /// Check a path's extension against the filter (case-insensitive).
    pub fn accepts(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            })
            .unwrap_or(false)
    }

    /// The filter as an HTML `accept` attribute value, e.g. `.xlsx,.xls`.
    pub fn accept_attribute(&self) -> String {
        self.extensions
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_memory_file() {
        let file = MemoryFile::new("a.xlsx", vec![1u8, 2, 3]);
        assert_eq!(read_file(&file).await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_empty_content_is_read_error() {
        let file = MemoryFile::new("empty.xlsx", Vec::new());
        assert!(matches!(read_file(&file).await, Err(Error::EmptyFile)));
    }

    #[tokio::test]
    async fn test_missing_local_file() {
        let file = LocalFile::new("/nonexistent/dir/people.xlsx");
        assert_eq!(file.name(), "people.xlsx");
        let err = read_file(&file).await.unwrap_err();
        assert!(matches!(err, Error::Read(ref msg) if msg.starts_with("people.xlsx")));
    }

    #[tokio::test]
    async fn test_read_local_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"content").unwrap();
        let file = LocalFile::new(tmp.path());
        assert_eq!(read_file(&file).await.unwrap(), b"content");
    }

    #[test]
    fn test_read_path_empty() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(read_path(tmp.path()), Err(Error::EmptyFile)));
    }

    #[test]
    fn test_selection_first() {
        let selection = FileSelection::from_paths(["a.xlsx", "b.xlsx"]);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.first().unwrap().name(), "a.xlsx");
        assert!(FileSelection::<LocalFile>::empty().first().is_none());
    }

    #[test]
    fn test_file_picker() {
        let picker = FilePicker::default();
        assert_eq!(picker.accept_attribute(), ".xlsx,.xls");
        assert!(picker.accepts("report.XLSX"));
        assert!(picker.accepts("legacy.xls"));
        assert!(!picker.accepts("notes.csv"));
        assert!(!picker.accepts("no_extension"));

        let picker = FilePicker::new([".ods"]);
        assert_eq!(picker.accept_attribute(), ".ods");
    }
}
