//! Models for the OPF package document.

use std::fmt::{Display, Formatter};

/// Supported EPUB versions.
///
/// Anything outside these three values is a hard parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EpubVersion {
    Epub2,
    Epub3,
    Epub31,
}

impl EpubVersion {
    pub(crate) fn from_str(raw: &str) -> Option<Self> {
        match raw.trim() {
            "2.0" => Some(Self::Epub2),
            "3.0" => Some(Self::Epub3),
            "3.1" => Some(Self::Epub31),
            _ => None,
        }
    }

    /// `true` for the legacy `2.0` version.
    pub fn is_epub2(self) -> bool {
        self == Self::Epub2
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Epub2 => "2.0",
            Self::Epub3 => "3.0",
            Self::Epub31 => "3.1",
        }
    }
}

impl Display for EpubVersion {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        fmt.write_str(self.as_str())
    }
}

/// The parsed OPF package: metadata, manifest, spine, optional guide and
/// any nested collections.
#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    pub version: EpubVersion,
    /// The `unique-identifier` attribute, referencing a `dc:identifier` id.
    pub unique_identifier: Option<String>,
    pub metadata: Metadata,
    pub manifest: Manifest,
    pub spine: Spine,
    /// Legacy construct, EPUB 2 only.
    pub guide: Option<Guide>,
    pub collections: Vec<Collection>,
}

/// A whitespace-separated property set, as found on manifest items,
/// spine itemrefs and metadata links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties(Vec<String>);

impl Properties {
    pub(crate) fn from_attr(raw: Option<&str>) -> Self {
        Self(
            raw.unwrap_or_default()
                .split_ascii_whitespace()
                .map(str::to_owned)
                .collect(),
        )
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.iter().any(|p| p == property)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered Dublin Core entries, metadata links and free-form meta items.
///
/// No uniqueness is enforced among entries; document order is preserved and
/// significant for `refines` chains.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    pub titles: Vec<MetaEntry>,
    pub creators: Vec<Creator>,
    pub subjects: Vec<MetaEntry>,
    pub descriptions: Vec<MetaEntry>,
    pub publishers: Vec<MetaEntry>,
    pub contributors: Vec<Creator>,
    pub dates: Vec<MetaEntry>,
    pub types: Vec<MetaEntry>,
    pub formats: Vec<MetaEntry>,
    pub identifiers: Vec<Identifier>,
    pub sources: Vec<MetaEntry>,
    pub languages: Vec<MetaEntry>,
    pub relations: Vec<MetaEntry>,
    pub coverages: Vec<MetaEntry>,
    pub rights: Vec<MetaEntry>,
    pub links: Vec<MetadataLink>,
    /// `<meta>` elements, both the EPUB 2 name/content and the EPUB 3
    /// property flavors.
    pub items: Vec<MetaItem>,
}

impl Metadata {
    /// The first title entry, if any.
    pub fn title(&self) -> Option<&str> {
        self.titles.first().map(|title| title.text.as_str())
    }

    /// The identifier entry referenced by the package `unique-identifier`.
    pub fn identifier_by_id(&self, id: &str) -> Option<&Identifier> {
        self.identifiers
            .iter()
            .find(|identifier| identifier.id.as_deref() == Some(id))
    }
}

/// A generic Dublin Core text entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaEntry {
    pub text: String,
    pub id: Option<String>,
    pub text_direction: Option<String>,
    pub language: Option<String>,
}

/// A `dc:creator` or `dc:contributor` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Creator {
    pub text: String,
    pub id: Option<String>,
    pub text_direction: Option<String>,
    pub language: Option<String>,
    pub role: Option<String>,
    pub file_as: Option<String>,
}

/// A `dc:identifier` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identifier {
    pub text: String,
    pub id: Option<String>,
    pub scheme: Option<String>,
}

/// A metadata `<link>` element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataLink {
    pub href: String,
    pub id: Option<String>,
    pub rel: Option<String>,
    pub media_type: Option<String>,
    pub properties: Properties,
    pub refines: Option<String>,
}

/// A free-form `<meta>` item: EPUB 2 `name`/`content` pairs and EPUB 3
/// `property` elements share this shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaItem {
    /// The `name` attribute (EPUB 2) or `property` attribute (EPUB 3).
    pub name: String,
    /// The `content` attribute (EPUB 2) or element text (EPUB 3).
    pub content: String,
    pub id: Option<String>,
    /// Target entry id of a refinement, with any leading `#` removed.
    pub refines: Option<String>,
    pub scheme: Option<String>,
}

/// The ordered list of all content files declared by the package.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Manifest {
    pub items: Vec<ManifestItem>,
}

impl Manifest {
    pub fn by_id(&self, id: &str) -> Option<&ManifestItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The first item carrying the given property.
    pub fn by_property(&self, property: &str) -> Option<&ManifestItem> {
        self.items
            .iter()
            .find(|item| item.properties.contains(property))
    }
}

/// A manifest `<item>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManifestItem {
    pub id: String,
    /// Percent-decoded href, relative to the content directory.
    pub href: String,
    pub media_type: String,
    pub media_overlay: Option<String>,
    pub fallback: Option<String>,
    pub fallback_style: Option<String>,
    pub required_namespace: Option<String>,
    pub required_modules: Option<String>,
    pub properties: Properties,
}

/// The package's linear reading order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spine {
    pub id: Option<String>,
    pub page_progression_direction: Option<String>,
    /// The idref of the NCX manifest item; mandatory for EPUB 2 unless
    /// parsing was configured lenient.
    pub toc: Option<String>,
    pub items: Vec<SpineItem>,
}

/// A spine `<itemref>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpineItem {
    pub id: Option<String>,
    pub idref: String,
    /// Defaults to `true`; `false` only on the literal `"no"`.
    pub linear: bool,
    pub properties: Properties,
}

/// The legacy EPUB 2 guide.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Guide {
    pub references: Vec<GuideReference>,
}

/// A guide `<reference>`; `type` and `href` are mandatory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GuideReference {
    /// The `type` attribute, such as `cover` or `toc`.
    pub kind: String,
    pub title: Option<String>,
    /// Percent-decoded href.
    pub href: String,
}

/// A package `<collection>`; nests arbitrarily.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collection {
    pub role: String,
    pub id: Option<String>,
    pub text_direction: Option<String>,
    pub language: Option<String>,
    pub metadata: Metadata,
    pub collections: Vec<Collection>,
    pub links: Vec<MetadataLink>,
}
