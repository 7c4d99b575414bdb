//! The assembled ebook: package, content references, navigation and
//! media overlays, built from one archive pass.

use crate::archive::{Archive, ZipArchive};
use crate::consts;
use crate::content::{EpubContent, LocalResource, build_content};
use crate::errors::{EpubError, EpubResult};
use crate::navigation::{self, NavigationItem};
use crate::options::ParseOptions;
use crate::parser;
use crate::schema::{EpubVersion, Ncx, NavDocument, Package, Smil};
use crate::util::uri;
use crate::xml::XmlElement;
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::Arc;

/// A parsed EPUB.
///
/// Construction performs the whole pipeline: container, package, content
/// classification, navigation (modern or legacy) and media overlays. The
/// content references stay lazy; payloads are read on demand.
///
/// # Examples
/// ```no_run
/// use quire::Epub;
///
/// # fn main() -> Result<(), quire::EpubError> {
/// let epub = Epub::open("book.epub")?;
/// println!("{:?}", epub.package().metadata.title());
/// for item in epub.navigation() {
///     println!("- {}", item.title());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Epub {
    package: Package,
    content: EpubContent,
    navigation: Vec<NavigationItem>,
    ncx: Option<Ncx>,
    nav_document: Option<NavDocument>,
    overlays: Vec<Smil>,
    /// Archive path of the package document.
    package_path: String,
}

impl Epub {
    /// Opens and parses an EPUB file with default (strict) options.
    pub fn open(path: impl AsRef<Path>) -> EpubResult<Self> {
        Self::open_with(path, ParseOptions::default())
    }

    /// Opens and parses an EPUB file.
    pub fn open_with(path: impl AsRef<Path>, options: ParseOptions) -> EpubResult<Self> {
        let archive = ZipArchive::open(path)?;
        Self::from_archive(Arc::new(archive), options)
    }

    /// Parses an EPUB from any seekable reader, such as an in-memory
    /// buffer, with default (strict) options.
    pub fn read<R>(reader: R) -> EpubResult<Self>
    where
        R: Read + Seek + Send + 'static,
    {
        Self::read_with(reader, ParseOptions::default())
    }

    /// Parses an EPUB from any seekable reader.
    pub fn read_with<R>(reader: R, options: ParseOptions) -> EpubResult<Self>
    where
        R: Read + Seek + Send + 'static,
    {
        let archive = ZipArchive::new(reader, None)?;
        Self::from_archive(Arc::new(archive), options)
    }

    /// Runs the full pipeline over an already opened archive.
    pub fn from_archive(archive: Arc<dyn Archive>, options: ParseOptions) -> EpubResult<Self> {
        let container = load(&archive, consts::CONTAINER)?;
        let package_path = parser::parse_container(&container)?;

        let package_doc = load(&archive, &package_path)?;
        let package = parser::parse_package(&package_doc, &options)?;

        let content_dir = uri::parent(&package_path);
        let content = build_content(&package, content_dir, &archive)?;

        if !options.ignore_missing_manifest_items {
            verify_local_entries(&content, &archive)?;
        }

        let ncx = load_ncx(&package, &archive, content_dir, &options)?;
        let nav_document = content
            .nav_document
            .as_ref()
            .map(|resource| {
                let doc = load(&archive, resource.path())?;
                parser::parse_nav_document(&doc, resource.path())
            })
            .transpose()?;

        let navigation = match (&nav_document, &ncx) {
            (Some(document), _) => navigation::from_nav(document, &content.html)?,
            (None, _) if !package.version.is_epub2() => {
                return Err(EpubError::NavDocument(
                    "no manifest item carries the `nav` property".into(),
                ));
            }
            (None, Some(ncx)) => navigation::from_ncx(&ncx.nav_map, content_dir, &content.html)?,
            (None, None) => Vec::new(),
        };

        let overlays = load_overlays(&package, &content, &archive)?;

        Ok(Self {
            package,
            content,
            navigation,
            ncx,
            nav_document,
            overlays,
            package_path,
        })
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn version(&self) -> EpubVersion {
        self.package.version
    }

    pub fn content(&self) -> &EpubContent {
        &self.content
    }

    /// The resolved cover image, if any cover convention declared one.
    pub fn cover(&self) -> Option<&LocalResource> {
        self.content.cover.as_ref()
    }

    /// The unified navigation tree, from the nav document when present,
    /// otherwise from the NCX.
    pub fn navigation(&self) -> &[NavigationItem] {
        &self.navigation
    }

    /// The legacy NCX document, when the spine references one.
    pub fn ncx(&self) -> Option<&Ncx> {
        self.ncx.as_ref()
    }

    /// The parsed EPUB 3 navigation document, when the manifest declares one.
    pub fn nav_document(&self) -> Option<&NavDocument> {
        self.nav_document.as_ref()
    }

    /// All parsed media overlay documents, in manifest order.
    pub fn overlays(&self) -> &[Smil] {
        &self.overlays
    }

    /// Archive path of the package document.
    pub fn package_path(&self) -> &str {
        &self.package_path
    }
}

/// Reads and tokenizes one archive entry.
fn load(archive: &Arc<dyn Archive>, path: &str) -> EpubResult<XmlElement> {
    let bytes = archive.read(path)?;
    Ok(XmlElement::parse(&bytes)?)
}

/// Every local manifest entry must exist in the archive.
fn verify_local_entries(content: &EpubContent, archive: &Arc<dyn Archive>) -> EpubResult<()> {
    for resource in content.all.locals() {
        if !archive.contains(resource.path()) {
            return Err(EpubError::Package(format!(
                "manifest item `{}` is missing from the archive at `{}`",
                resource.key(),
                resource.path()
            )));
        }
    }
    Ok(())
}

/// Loads and parses the NCX referenced by the spine `toc` attribute.
///
/// A `toc` idref naming a non-existent manifest item is an error; an absent
/// attribute simply yields no NCX.
fn load_ncx(
    package: &Package,
    archive: &Arc<dyn Archive>,
    content_dir: &str,
    options: &ParseOptions,
) -> EpubResult<Option<Ncx>> {
    let Some(idref) = package.spine.toc.as_deref() else {
        return Ok(None);
    };
    let item = package.manifest.by_id(idref).ok_or_else(|| {
        EpubError::Package(format!(
            "spine `toc` references a non-existent manifest item: `{idref}`"
        ))
    })?;

    let path = uri::resolve(content_dir, uri::file_portion(&item.href)).into_owned();
    let doc = load(archive, &path)?;
    parser::parse_ncx(&doc, &path, options).map(Some)
}

/// Parses one media overlay per SMIL-typed local manifest item, in manifest
/// order. Remote SMIL entries are skipped.
fn load_overlays(
    package: &Package,
    content: &EpubContent,
    archive: &Arc<dyn Archive>,
) -> EpubResult<Vec<Smil>> {
    let mut overlays = Vec::new();

    for item in &package.manifest.items {
        if !item.media_type.eq_ignore_ascii_case(consts::SMIL_TYPE) {
            continue;
        }
        let Some(resource) = content.all.local(&item.href) else {
            continue;
        };
        let doc = load(archive, resource.path())?;
        overlays.push(parser::parse_smil(&doc, resource.path())?);
    }
    Ok(overlays)
}
