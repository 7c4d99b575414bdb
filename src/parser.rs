//! Pure tree-to-model parsers.
//!
//! Each function consumes an already-built [`XmlElement`](crate::xml::XmlElement)
//! tree and produces an owned model; no I/O happens here. Strictness is
//! controlled by [`ParseOptions`](crate::ParseOptions): every flag downgrades
//! exactly one enumerated failure site.

mod container;
mod nav;
mod ncx;
mod package;
mod smil;

pub use container::parse_container;
pub use nav::parse_nav_document;
pub use ncx::parse_ncx;
pub use package::parse_package;
pub use smil::parse_smil;
