//! Models for the legacy EPUB 2 NCX navigation document.

/// A parsed `.ncx` document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ncx {
    /// Archive path of the document.
    pub path: String,
    pub head: Vec<NcxMeta>,
    pub doc_title: Option<String>,
    pub doc_authors: Vec<String>,
    /// The hierarchical `navMap` points.
    pub nav_map: Vec<NavPoint>,
    pub page_list: Option<Vec<PageTarget>>,
    pub nav_lists: Vec<NcxNavList>,
}

/// A `head/meta` entry; `name` and `content` are mandatory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NcxMeta {
    pub name: String,
    pub content: String,
    pub scheme: Option<String>,
}

/// A `navPoint`: at least one label and a content target, nested arbitrarily.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavPoint {
    /// Mandatory, though an empty string is permitted.
    pub id: String,
    pub class: Option<String>,
    pub play_order: Option<u32>,
    /// Never empty.
    pub labels: Vec<String>,
    pub content: NcxContent,
    pub children: Vec<NavPoint>,
}

impl NavPoint {
    /// The first label; every point carries at least one.
    pub fn label(&self) -> &str {
        self.labels.first().map_or("", String::as_str)
    }
}

/// A `content` element; `src` is mandatory and percent-decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NcxContent {
    pub id: Option<String>,
    pub src: String,
}

/// The recognized `pageTarget` types; anything else maps to `Unknown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageTargetKind {
    Front,
    Normal,
    Special,
    #[default]
    Unknown,
}

impl PageTargetKind {
    pub(crate) fn from_str(raw: &str) -> Self {
        match raw {
            "front" => Self::Front,
            "normal" => Self::Normal,
            "special" => Self::Special,
            _ => Self::Unknown,
        }
    }
}

/// A `pageList/pageTarget` entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageTarget {
    pub id: Option<String>,
    pub value: Option<String>,
    pub kind: PageTargetKind,
    pub class: Option<String>,
    pub play_order: Option<u32>,
    /// Never empty.
    pub labels: Vec<String>,
    pub content: Option<NcxContent>,
}

/// A `navList` of flat navigation targets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NcxNavList {
    pub id: Option<String>,
    pub class: Option<String>,
    /// Never empty.
    pub labels: Vec<String>,
    pub targets: Vec<NavTarget>,
}

/// A `navTarget`; `id` is mandatory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavTarget {
    pub id: String,
    pub class: Option<String>,
    pub value: Option<String>,
    pub play_order: Option<u32>,
    /// Never empty.
    pub labels: Vec<String>,
    pub content: Option<NcxContent>,
}
