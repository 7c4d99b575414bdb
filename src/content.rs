//! Typed, lazy references to the content files of an EPUB.
//!
//! The manifest drives classification: every item is classified by MIME
//! type into a [`ContentKind`], partitioned into local and remote, and
//! collected into dual-indexed [`ResourceCollection`]s. References are
//! lazy; they carry the resolved location and an archive handle, never
//! the payload.

mod builder;
mod collection;
mod cover;
mod kind;
mod resource;

pub use collection::ResourceCollection;
pub use kind::ContentKind;
pub use resource::{LocalResource, RemoteResource, ResourceMeta};

pub(crate) use builder::build_content;
pub(crate) use cover::resolve_cover;

/// The cross-referenced content of one EPUB.
#[derive(Clone, Debug)]
pub struct EpubContent {
    /// The resolved cover image, if any of the three cover conventions
    /// declared one.
    pub cover: Option<LocalResource>,
    /// The EPUB 3 navigation document, located via the `nav` manifest
    /// property. The first item carrying the property wins.
    pub nav_document: Option<LocalResource>,
    pub html: ResourceCollection,
    pub css: ResourceCollection,
    pub images: ResourceCollection,
    pub fonts: ResourceCollection,
    pub audio: ResourceCollection,
    /// Every manifest entry regardless of type, keyed the same way as the
    /// typed collections.
    pub all: ResourceCollection,
}
