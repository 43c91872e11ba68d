//! Source map for managing source files and computing source locations.
//!
//! The [`SourceMap`] owns the text of every loaded source and hands out
//! [`FileId`]s. Files are kept in insertion order; the id of a file is its
//! insertion index, so lookups by id are O(1) and lookups by name go through
//! the map's hash index.

use std::hash::BuildHasherDefault;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use super::FileId;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use selc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.sln", "var x = 42");
/// assert_eq!(file.name(), "main.sln");
/// assert_eq!(file.content(), "var x = 42");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the source text of a line (1-based), without the terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use selc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "f", "first\nsecond\n");
    /// assert_eq!(file.line_text(2), Some("second"));
    /// assert_eq!(file.line_text(9), None);
    /// ```
    pub fn line_text(&self, line: usize) -> Option<&str> {
        if line == 0 || line > self.line_starts.len() {
            return None;
        }
        let start = self.line_starts[line - 1];
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        Some(text.trim_end_matches(['\n', '\r']))
    }
}

/// Registry of all source files in a compilation
///
/// # Examples
///
/// ```
/// use selc_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let id = map.add_file("main.sln", "var x = 1");
/// let file = map.file(id).unwrap();
/// assert_eq!(file.name(), "main.sln");
/// ```
pub struct SourceMap {
    files: IndexMap<String, SourceFile, BuildHasherDefault<FxHasher>>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self {
            files: IndexMap::default(),
        }
    }

    /// Add a file and return its id
    ///
    /// Adding a file whose name is already present replaces the content and
    /// keeps the original id.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let name = name.into();
        if let Some((index, _, existing)) = self.files.get_full_mut(&name) {
            *existing = SourceFile::new(index, name, content);
            return FileId(index);
        }
        let id = self.files.len();
        let file = SourceFile::new(id, name.clone(), content);
        self.files.insert(name, file);
        FileId(id)
    }

    /// Look up a file by id
    pub fn file(&self, id: FileId) -> SourceMapResult<&SourceFile> {
        self.files
            .get_index(id.index())
            .map(|(_, file)| file)
            .ok_or(SourceMapError::UnknownFileId { id: id.index() })
    }

    /// Look up a file by name
    pub fn file_by_name(&self, name: &str) -> SourceMapResult<&SourceFile> {
        self.files
            .get(name)
            .ok_or_else(|| SourceMapError::FileNotFound(name.to_string()))
    }

    /// Number of registered files
    #[inline]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no files are registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over files in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.values()
    }
}

impl Default for SourceMap {
    fn default() -> Self {
        Self::new()
    }
}
