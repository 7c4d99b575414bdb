//! # quire
//!
//! A parsing library for the EPUB format, covering versions 2.0, 3.0
//! and 3.1.
//!
//! The crate is split into pure, tree-to-model parsers ([`parser`]) over a
//! small owned XML tree ([`xml`]), the resulting document models
//! ([`schema`]), lazy content references classified from the manifest
//! ([`content`]), and the unified navigation tree ([`navigation`]). The
//! [`Epub`] facade wires the whole pipeline together over a ZIP
//! [`archive`](crate::archive).
//!
//! ## Examples
//! Opening an epub file:
//! ```no_run
//! use quire::Epub;
//!
//! # fn main() -> Result<(), quire::EpubError> {
//! let epub = Epub::open("example.epub")?;
//!
//! // Package metadata
//! println!("Title = {:?}", epub.package().metadata.title());
//!
//! // The unified navigation tree
//! for item in epub.navigation() {
//!     println!("- {}", item.title());
//! }
//!
//! // Reading a content file on demand
//! if let Some(cover) = epub.cover() {
//!     let bytes = cover.read_bytes()?;
//!     println!("cover: {} bytes", bytes.len());
//! }
//! # Ok(())
//! # }
//! ```
//! Lenient parsing:
//! ```no_run
//! use quire::{Epub, ParseOptions};
//!
//! # fn main() -> Result<(), quire::EpubError> {
//! let options = ParseOptions::default()
//!     .skip_invalid_manifest_items(true)
//!     .ignore_missing_toc(true);
//! let epub = Epub::open_with("example.epub", options)?;
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod content;
pub mod errors;
pub mod navigation;
pub mod options;
pub mod parser;
pub mod schema;
pub mod xml;

mod consts;
mod epub;
mod util;

pub use crate::epub::Epub;
pub use crate::errors::{EpubError, EpubResult};
pub use crate::navigation::NavigationItem;
pub use crate::options::ParseOptions;
