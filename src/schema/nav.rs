//! Models for the modern EPUB 3 navigation document.

/// A parsed navigation `.xhtml` document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavDocument {
    /// Archive path of the document.
    pub path: String,
    pub navs: Vec<NavSection>,
}

impl NavDocument {
    /// The first `nav` section of the given structural kind.
    pub fn by_kind(&self, kind: StructuralSemantics) -> Option<&NavSection> {
        self.navs.iter().find(|nav| nav.kind == Some(kind))
    }
}

/// A `<nav>` section: optional structural type, optional heading and a
/// mandatory top-level ordered list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavSection {
    /// The first recognized `epub:type` token; unrecognized tokens
    /// are ignored.
    pub kind: Option<StructuralSemantics>,
    pub hidden: bool,
    /// The trimmed text of the first `h1`-`h6` child.
    pub header: Option<String>,
    pub list: NavList,
}

/// An `<ol>` within a nav section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavList {
    pub hidden: bool,
    pub items: Vec<NavListItem>,
}

/// An `<li>`: either an anchor or a span, plus an optional nested list.
///
/// A list item with neither an anchor nor a span is a parse failure; an
/// anchor or span with no text is legitimate.
#[derive(Clone, Debug, PartialEq)]
pub struct NavListItem {
    pub element: NavListElement,
    pub children: Option<NavList>,
}

/// The content element of an `<li>`.
#[derive(Clone, Debug, PartialEq)]
pub enum NavListElement {
    Anchor(NavAnchor),
    Span(NavSpan),
}

/// An `<a>` element within a navigation list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavAnchor {
    pub href: Option<String>,
    pub text: String,
    pub title: Option<String>,
    pub alt: Option<String>,
    /// The anchor's own `epub:type`, verbatim.
    pub kind: Option<String>,
}

/// A `<span>` element within a navigation list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavSpan {
    pub text: String,
    pub title: Option<String>,
    pub alt: Option<String>,
}

/// Recognized `epub:type` structural semantics tokens for `nav` sections.
///
/// The token table is fixed; unrecognized tokens are skipped rather than
/// failing the parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StructuralSemantics {
    Toc,
    TocBrief,
    Landmarks,
    PageList,
    /// List of audio clips.
    Loa,
    /// List of illustrations.
    Loi,
    /// List of tables.
    Lot,
    /// List of video clips.
    Lov,
    Cover,
    TitlePage,
    Frontmatter,
    Bodymatter,
    Backmatter,
    Volume,
    Part,
    Chapter,
    Subchapter,
    Division,
    Preface,
    Foreword,
    Introduction,
    Prologue,
    Epilogue,
    Afterword,
    Conclusion,
    Appendix,
    Glossary,
    Bibliography,
    Index,
    Dedication,
    Acknowledgments,
    CopyrightPage,
    Colophon,
    Footnotes,
    Endnotes,
    Errata,
}

impl StructuralSemantics {
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "toc" => Self::Toc,
            "toc-brief" => Self::TocBrief,
            "landmarks" => Self::Landmarks,
            "page-list" => Self::PageList,
            "loa" => Self::Loa,
            "loi" => Self::Loi,
            "lot" => Self::Lot,
            "lov" => Self::Lov,
            "cover" => Self::Cover,
            "titlepage" => Self::TitlePage,
            "frontmatter" => Self::Frontmatter,
            "bodymatter" => Self::Bodymatter,
            "backmatter" => Self::Backmatter,
            "volume" => Self::Volume,
            "part" => Self::Part,
            "chapter" => Self::Chapter,
            "subchapter" => Self::Subchapter,
            "division" => Self::Division,
            "preface" => Self::Preface,
            "foreword" => Self::Foreword,
            "introduction" => Self::Introduction,
            "prologue" => Self::Prologue,
            "epilogue" => Self::Epilogue,
            "afterword" => Self::Afterword,
            "conclusion" => Self::Conclusion,
            "appendix" => Self::Appendix,
            "glossary" => Self::Glossary,
            "bibliography" => Self::Bibliography,
            "index" => Self::Index,
            "dedication" => Self::Dedication,
            "acknowledgments" => Self::Acknowledgments,
            "copyright-page" => Self::CopyrightPage,
            "colophon" => Self::Colophon,
            "footnotes" => Self::Footnotes,
            "endnotes" => Self::Endnotes,
            "errata" => Self::Errata,
            _ => return None,
        })
    }
}
