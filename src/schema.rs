//! Owned, immutable schema models produced by the parsers.
//!
//! Each model is built once per parse call and shares no mutable state with
//! any other parse. The types mirror the documents they come from: the OPF
//! [`Package`], the EPUB 2 [`Ncx`] and EPUB 3 [`NavDocument`] navigation
//! documents, and [`Smil`] media overlays.

mod clock;
mod nav;
mod ncx;
mod package;
mod smil;

pub use clock::SmilClock;
pub use nav::{
    NavAnchor, NavDocument, NavList, NavListElement, NavListItem, NavSection, NavSpan,
    StructuralSemantics,
};
pub use ncx::{
    NavPoint, NavTarget, Ncx, NcxContent, NcxMeta, NcxNavList, PageTarget, PageTargetKind,
};
pub use package::{
    Collection, Creator, EpubVersion, Guide, GuideReference, Identifier, Manifest, ManifestItem,
    MetaEntry, MetaItem, Metadata, MetadataLink, Package, Properties, Spine, SpineItem,
};
pub use smil::{Smil, SmilAudio, SmilBody, SmilHead, SmilPar, SmilSeq, SmilText};
