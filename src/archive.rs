//! Archive access behind the [`Archive`] trait.
//!
//! Parsing itself never performs I/O; an archive handle is only consulted
//! when a document is loaded before parsing, or when a lazy
//! [`LocalResource`](crate::content::LocalResource) payload is read.

use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::io;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use zip::ZipArchive as Zip;

/// Alias for `Result<T, ArchiveError>`.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Possible errors while accessing an ebook archive.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum ArchiveError {
    /// The archive itself cannot be opened or accessed.
    #[error("Unreadable archive: {path:?}, caused by: {source}")]
    UnreadableArchive {
        source: io::Error,
        path: Option<PathBuf>,
    },

    /// The requested entry does not exist within the archive.
    #[error("Missing archive entry: `{path}`")]
    MissingEntry { path: String },

    /// The requested entry exists but cannot be read.
    #[error("Unreadable archive entry: `{path}`, caused by: {source}")]
    UnreadableEntry { source: io::Error, path: String },

    /// The requested entry is not valid UTF-8 text.
    #[error("Archive entry is not valid UTF-8: `{path}`")]
    InvalidUtf8 { path: String },
}

/// Read access to the entries of an ebook container.
///
/// Paths are `/`-separated and relative to the archive root; a leading `/`
/// is tolerated and stripped.
pub trait Archive: Send + Sync {
    /// Reads the entire entry at `path`.
    fn read(&self, path: &str) -> ArchiveResult<Vec<u8>>;

    /// `true` if an entry exists at `path`.
    fn contains(&self, path: &str) -> bool;
}

/// Makes the path relative; zip entries are stored without a leading slash.
fn entry_key(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// An [`Archive`] over a ZIP container.
pub struct ZipArchive<R> {
    zip: Mutex<Zip<R>>,
    path: Option<PathBuf>,
}

impl<R: Read + Seek> ZipArchive<R> {
    /// `reader` (and optional `path` for more descriptive error messages).
    pub fn new(reader: R, path: Option<&Path>) -> ArchiveResult<Self> {
        Zip::new(reader)
            .map(|zip| Self {
                zip: Mutex::new(zip),
                path: path.map(Path::to_path_buf),
            })
            .map_err(|error| ArchiveError::UnreadableArchive {
                source: io::Error::other(error),
                path: path.map(Path::to_path_buf),
            })
    }
}

impl ZipArchive<BufReader<File>> {
    /// Opens a ZIP archive from the file system.
    pub fn open(path: impl AsRef<Path>) -> ArchiveResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| ArchiveError::UnreadableArchive {
            source: error,
            path: Some(path.to_path_buf()),
        })?;
        Self::new(BufReader::new(file), Some(path))
    }
}

impl<R: Read + Seek + Send> Archive for ZipArchive<R> {
    fn read(&self, path: &str) -> ArchiveResult<Vec<u8>> {
        let mut zip = self
            .zip
            .lock()
            .map_err(|_| ArchiveError::UnreadableArchive {
                source: io::Error::other("poisoned archive lock"),
                path: self.path.clone(),
            })?;

        let mut entry = match zip.by_name(entry_key(path)) {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(ArchiveError::MissingEntry { path: path.into() });
            }
            Err(error) => {
                return Err(ArchiveError::UnreadableEntry {
                    source: io::Error::other(error),
                    path: path.into(),
                });
            }
        };

        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut buf)
            .map(|_| buf)
            .map_err(|error| ArchiveError::UnreadableEntry {
                source: error,
                path: path.into(),
            })
    }

    fn contains(&self, path: &str) -> bool {
        self.zip
            .lock()
            .is_ok_and(|zip| zip.index_for_name(entry_key(path)).is_some())
    }
}

impl<R> Debug for ZipArchive<R> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("ZipArchive")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// An [`Archive`] with no entries.
///
/// Useful as a placeholder loader when resources are constructed directly,
/// such as in tests; every read reports a missing entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyArchive;

impl Archive for EmptyArchive {
    fn read(&self, path: &str) -> ArchiveResult<Vec<u8>> {
        Err(ArchiveError::MissingEntry { path: path.into() })
    }

    fn contains(&self, _path: &str) -> bool {
        false
    }
}
