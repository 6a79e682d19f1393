//! Access to the directory that holds configuration files

use async_trait::async_trait;
use parking_lot::Mutex;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::fs;

/// Listing and reading primitives used by the store
///
/// Implementations must be shareable across tasks since a single load reads
/// every file concurrently.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Names of the entries directly inside `dir`, in any order
    async fn list(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Full contents of the file at `path`
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Local file system source backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

#[async_trait]
impl ConfigSource for FsSource {
    async fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut entries = fs::read_dir(dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::trace!(name = ?raw, "skipping non UTF-8 directory entry");
                }
            }
        }

        Ok(names)
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path).await
    }
}

/// Flat in-memory source holding a single directory of files
///
/// `list` ignores its argument and returns file names in insertion order;
/// `read` looks files up by the final component of the path. Every call is
/// counted so callers can assert when the source was (or was not) touched.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: Mutex<Vec<(String, Vec<u8>)>>,
    list_calls: AtomicUsize,
    read_calls: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file. Replacing keeps the original listing position.
    pub fn insert(&self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        let name = name.into();
        let contents = contents.into();
        let mut files = self.files.lock();
        match files.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = contents,
            None => files.push((name, contents)),
        }
    }

    /// Remove a file, returning whether it existed
    pub fn remove(&self, name: &str) -> bool {
        let mut files = self.files.lock();
        let before = files.len();
        files.retain(|(existing, _)| existing != name);
        files.len() != before
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigSource for MemorySource {
    async fn list(&self, _dir: &Path) -> io::Result<Vec<String>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .files
            .lock()
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        self.files
            .lock()
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, contents)| contents.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}
