use crate::archive::{Archive, ArchiveError, ArchiveResult};
use crate::content::ContentKind;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Identity shared by local and remote content references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceMeta {
    key: String,
    kind: ContentKind,
    media_type: String,
}

impl ResourceMeta {
    pub fn new(key: impl Into<String>, media_type: impl Into<String>) -> Self {
        let media_type = media_type.into();
        Self {
            key: key.into(),
            kind: ContentKind::of(&media_type),
            media_type,
        }
    }

    /// The manifest href for local entries, the absolute URL for
    /// remote entries.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// The raw MIME string as read from the manifest.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

/// A lazy reference to a content file inside the archive.
///
/// Holds the resolved in-archive path and an archive handle; the payload is
/// only read on an explicit [`read_bytes`](Self::read_bytes) or
/// [`read_text`](Self::read_text) call.
#[derive(Clone)]
pub struct LocalResource {
    meta: ResourceMeta,
    path: String,
    archive: Arc<dyn Archive>,
}

impl LocalResource {
    pub fn new(meta: ResourceMeta, path: impl Into<String>, archive: Arc<dyn Archive>) -> Self {
        Self {
            meta,
            path: path.into(),
            archive,
        }
    }

    pub fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    pub fn key(&self) -> &str {
        self.meta.key()
    }

    pub fn kind(&self) -> ContentKind {
        self.meta.kind()
    }

    pub fn media_type(&self) -> &str {
        self.meta.media_type()
    }

    /// The content-directory-relative href combined with the content root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the full payload from the archive.
    pub fn read_bytes(&self) -> ArchiveResult<Vec<u8>> {
        self.archive.read(&self.path)
    }

    /// Reads the full payload as UTF-8 text.
    pub fn read_text(&self) -> ArchiveResult<String> {
        String::from_utf8(self.read_bytes()?).map_err(|_| ArchiveError::InvalidUtf8 {
            path: self.path.clone(),
        })
    }
}

impl Debug for LocalResource {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("LocalResource")
            .field("meta", &self.meta)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl PartialEq for LocalResource {
    fn eq(&self, other: &Self) -> bool {
        self.meta == other.meta && self.path == other.path
    }
}

/// A lazy reference to content hosted outside the archive.
///
/// The key is the absolute URL; fetching is the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteResource {
    meta: ResourceMeta,
}

impl RemoteResource {
    pub fn new(meta: ResourceMeta) -> Self {
        Self { meta }
    }

    pub fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    /// The absolute URL.
    pub fn url(&self) -> &str {
        self.meta.key()
    }

    pub fn kind(&self) -> ContentKind {
        self.meta.kind()
    }

    pub fn media_type(&self) -> &str {
        self.meta.media_type()
    }
}
