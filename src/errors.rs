//! Error types shared across the crate.

pub use crate::archive::{ArchiveError, ArchiveResult};
pub use crate::xml::{XmlError, XmlResult};

/// Alias for `Result<T, EpubError>`.
pub type EpubResult<T> = Result<T, EpubError>;

/// Possible errors while parsing an EPUB.
///
/// Each structural variant identifies the document kind the violation was
/// detected in. The first violation aborts the parse of that document;
/// no partial model is ever produced.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum EpubError {
    /// File access within the ebook archive has failed.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// A document could not be tokenized into an XML tree.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// `META-INF/container.xml` is missing its package reference.
    #[error("Container error: {0}")]
    Container(String),

    /// A structural invariant of the `.opf` package is violated.
    ///
    /// This covers the package, metadata, manifest, spine, guide and
    /// collection constructs, as well as content-collection duplicate keys
    /// and malformed cover declarations.
    #[error("Package error: {0}")]
    Package(String),

    /// A structural invariant of the EPUB 2 NCX navigation document
    /// is violated.
    #[error("NCX navigation error: {0}")]
    Ncx(String),

    /// A structural invariant of the EPUB 3 navigation document is violated.
    #[error("Navigation document error: {0}")]
    NavDocument(String),

    /// A structural invariant of a media overlay (SMIL) document
    /// is violated. Always carries the offending file path.
    #[error("Media overlay error in `{path}`: {message}")]
    MediaOverlay { path: String, message: String },

    /// A content-collection lookup failed to find the requested key or path.
    #[error("Content not found: {0}")]
    NotFound(String),

    /// A lookup was invoked with an empty key or path.
    #[error("Empty {0} passed to a content lookup")]
    EmptyLookupKey(&'static str),
}
