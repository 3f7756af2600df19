use anyhow::{Context, Result};
use std::path::PathBuf;

/// One plain-text file extracted from a corpus archive.
///
/// `index` is the file's position in the archive's enumeration order and
/// stays stable for the lifetime of one pipeline run; Stage 2 uses it to
/// find the file's Stage-1 metadata.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub index: usize,
    pub name: String,
    pub contents: String,
}

/// Source of work texts for one pipeline run.
///
/// Implementations must enumerate files in a stable, deterministic order:
/// the enumeration position becomes the file index that ties Stage-2
/// lines back to their Stage-1 metadata. A failed enumeration is fatal to
/// the whole pipeline invocation.
pub trait WorkArchive: Send + Sync {
    fn entries(&self) -> Result<Vec<ArchiveEntry>>;
}

/// An archive held entirely in memory, as `(name, contents)` pairs.
pub struct MemoryArchive {
    files: Vec<(String, String)>,
}

impl MemoryArchive {
    pub fn new(files: Vec<(String, String)>) -> Self {
        Self { files }
    }
}

impl WorkArchive for MemoryArchive {
    fn entries(&self) -> Result<Vec<ArchiveEntry>> {
        Ok(self
            .files
            .iter()
            .enumerate()
            .map(|(index, (name, contents))| ArchiveEntry {
                index,
                name: name.clone(),
                contents: contents.clone(),
            })
            .collect())
    }
}

/// An archive backed by a directory of text files.
///
/// Files are enumerated sorted by name so the file index assignment is
/// reproducible across runs on the same directory.
pub struct DirArchive {
    root: PathBuf,
}

impl DirArchive {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl WorkArchive for DirArchive {
    fn entries(&self) -> Result<Vec<ArchiveEntry>> {
        let mut paths = Vec::new();
        let dir = std::fs::read_dir(&self.root)
            .with_context(|| format!("failed to read corpus directory {}", self.root.display()))?;
        for dir_entry in dir {
            let dir_entry = dir_entry.context("failed to enumerate corpus directory")?;
            if dir_entry.file_type().context("failed to stat corpus file")?.is_file() {
                paths.push(dir_entry.path());
            }
        }
        paths.sort();

        let mut entries = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read work file {}", path.display()))?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            entries.push(ArchiveEntry {
                index,
                name,
                contents,
            });
        }
        Ok(entries)
    }
}
