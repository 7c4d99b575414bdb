//! The unified navigation tree.
//!
//! Legacy NCX maps and modern nav documents both convert into the same
//! [`NavigationItem`] tree, with every link resolved against the content
//! collections up front. Consumers never need to know which document the
//! tree came from.

use crate::content::{LocalResource, ResourceCollection};
use crate::errors::{EpubError, EpubResult};
use crate::schema::{NavDocument, NavList, NavListElement, NavPoint, StructuralSemantics};
use crate::util::uri;

/// One node of the unified navigation tree.
#[derive(Clone, Debug, PartialEq)]
pub enum NavigationItem {
    /// A grouping node without a target of its own.
    Header {
        /// Never absent, though it may be empty.
        title: String,
        children: Vec<NavigationItem>,
    },
    /// A node pointing at a content file.
    Link {
        title: String,
        /// The resolved href, fragment included.
        href: String,
        /// The resolved content file backing the link.
        resource: LocalResource,
        children: Vec<NavigationItem>,
    },
}

impl NavigationItem {
    pub fn title(&self) -> &str {
        match self {
            Self::Header { title, .. } | Self::Link { title, .. } => title,
        }
    }

    pub fn children(&self) -> &[NavigationItem] {
        match self {
            Self::Header { children, .. } | Self::Link { children, .. } => children,
        }
    }
}

/// Converts an NCX navigation map into the unified tree.
///
/// Every point becomes a link; its src resolves against the content root
/// and must name a local HTML file already present in `html`.
pub(crate) fn from_ncx(
    points: &[NavPoint],
    content_dir: &str,
    html: &ResourceCollection,
) -> EpubResult<Vec<NavigationItem>> {
    points
        .iter()
        .map(|point| {
            let src = point.content.src.as_str();
            if uri::is_remote(src) {
                return Err(EpubError::Ncx(format!(
                    "navigation target cannot be remote: `{src}`"
                )));
            }

            let href = uri::resolve(content_dir, src).into_owned();
            let resource = html
                .require_local_by_path(uri::file_portion(&href))
                .map_err(|_| {
                    EpubError::Ncx(format!(
                        "navigation target `{src}` does not resolve to a content file"
                    ))
                })?
                .clone();

            Ok(NavigationItem::Link {
                title: point.label().to_owned(),
                href,
                resource,
                children: from_ncx(&point.children, content_dir, html)?,
            })
        })
        .collect()
}

/// Converts the `toc` nav section of a nav document into the unified tree.
///
/// Nav hrefs resolve against the document's own directory, not the content
/// root. A section header, when present, wraps everything in one synthetic
/// header item. Anchors without an href and spans become headers.
pub(crate) fn from_nav(
    document: &NavDocument,
    html: &ResourceCollection,
) -> EpubResult<Vec<NavigationItem>> {
    let Some(toc) = document.by_kind(StructuralSemantics::Toc) else {
        return Ok(Vec::new());
    };

    let base_dir = uri::parent(&document.path);
    let items = from_list(&toc.list, base_dir, html)?;

    Ok(match &toc.header {
        Some(header) => vec![NavigationItem::Header {
            title: header.clone(),
            children: items,
        }],
        None => items,
    })
}

fn from_list(
    list: &NavList,
    base_dir: &str,
    html: &ResourceCollection,
) -> EpubResult<Vec<NavigationItem>> {
    list.items
        .iter()
        .map(|item| {
            let children = item
                .children
                .as_ref()
                .map(|nested| from_list(nested, base_dir, html))
                .transpose()?
                .unwrap_or_default();

            Ok(match &item.element {
                NavListElement::Anchor(anchor) => match &anchor.href {
                    Some(raw) => {
                        let href = uri::resolve(base_dir, raw).into_owned();
                        let resource = html
                            .require_local_by_path(uri::file_portion(&href))
                            .map_err(|_| {
                                EpubError::NavDocument(format!(
                                    "navigation target `{raw}` does not resolve to a content file"
                                ))
                            })?
                            .clone();

                        NavigationItem::Link {
                            title: title_of(&anchor.text, &anchor.title, &anchor.alt),
                            href,
                            resource,
                            children,
                        }
                    }
                    None => NavigationItem::Header {
                        title: title_of(&anchor.text, &anchor.title, &anchor.alt),
                        children,
                    },
                },
                NavListElement::Span(span) => NavigationItem::Header {
                    title: title_of(&span.text, &span.title, &span.alt),
                    children,
                },
            })
        })
        .collect()
}

/// First non-empty of text, `title` attribute, `alt` attribute; an empty
/// title is valid, never an error.
fn title_of(text: &str, title: &Option<String>, alt: &Option<String>) -> String {
    if !text.is_empty() {
        return text.to_owned();
    }
    [title, alt]
        .into_iter()
        .find_map(|attr| attr.as_deref().filter(|value| !value.is_empty()))
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::{NavigationItem, from_nav, from_ncx};
    use crate::archive::EmptyArchive;
    use crate::content::{LocalResource, RemoteResource, ResourceCollection, ResourceMeta};
    use crate::errors::EpubError;
    use crate::schema::{
        NavAnchor, NavDocument, NavList, NavListElement, NavListItem, NavPoint, NavSection,
        NavSpan, NcxContent, StructuralSemantics,
    };
    use std::sync::Arc;

    fn html_collection(entries: &[(&str, &str)]) -> ResourceCollection {
        let locals = entries.iter().map(|(key, path)| {
            LocalResource::new(
                ResourceMeta::new(*key, "application/xhtml+xml"),
                *path,
                Arc::new(EmptyArchive),
            )
        });
        ResourceCollection::new(locals, std::iter::empty::<RemoteResource>()).unwrap()
    }

    fn point(id: &str, label: &str, src: &str, children: Vec<NavPoint>) -> NavPoint {
        NavPoint {
            id: id.to_owned(),
            labels: vec![label.to_owned()],
            content: NcxContent {
                id: None,
                src: src.to_owned(),
            },
            children,
            ..NavPoint::default()
        }
    }

    #[test]
    fn ncx_points_become_nested_links() {
        let html = html_collection(&[("chapter1.html", "OEBPS/chapter1.html")]);
        let points = vec![point(
            "",
            "Test label 1",
            "chapter1.html",
            vec![point("np2", "Test label 3", "chapter1.html#section-1", vec![])],
        )];

        let items = from_ncx(&points, "OEBPS", &html).unwrap();
        assert_eq!(1, items.len());

        let NavigationItem::Link {
            title,
            href,
            resource,
            children,
        } = &items[0]
        else {
            panic!("expected link");
        };
        assert_eq!("Test label 1", title);
        assert_eq!("OEBPS/chapter1.html", href);
        assert_eq!("OEBPS/chapter1.html", resource.path());

        assert_eq!(1, children.len());
        assert_eq!("Test label 3", children[0].title());
        let NavigationItem::Link { href, .. } = &children[0] else {
            panic!("expected link");
        };
        assert_eq!("OEBPS/chapter1.html#section-1", href);
    }

    #[test]
    fn ncx_unresolved_target_fails() {
        let html = html_collection(&[]);
        let points = vec![point("np1", "Test label 1", "chapter1.html", vec![])];

        assert!(matches!(
            from_ncx(&points, "OEBPS", &html),
            Err(EpubError::Ncx(_))
        ));
    }

    #[test]
    fn ncx_remote_target_fails() {
        let html = html_collection(&[]);
        let points = vec![point("np1", "x", "https://example.com/c.html", vec![])];

        assert!(matches!(
            from_ncx(&points, "OEBPS", &html),
            Err(EpubError::Ncx(_))
        ));
    }

    fn anchor_item(href: Option<&str>, text: &str) -> NavListItem {
        NavListItem {
            element: NavListElement::Anchor(NavAnchor {
                href: href.map(str::to_owned),
                text: text.to_owned(),
                ..NavAnchor::default()
            }),
            children: None,
        }
    }

    #[test]
    fn nav_hrefs_resolve_against_document_directory() {
        let html = html_collection(&[("text/c1.xhtml", "OEBPS/text/c1.xhtml")]);
        let document = NavDocument {
            path: "OEBPS/nav.xhtml".to_owned(),
            navs: vec![NavSection {
                kind: Some(StructuralSemantics::Toc),
                header: Some("Contents".to_owned()),
                list: NavList {
                    hidden: false,
                    items: vec![anchor_item(Some("text/c1.xhtml"), "Chapter 1")],
                },
                hidden: false,
            }],
        };

        let items = from_nav(&document, &html).unwrap();
        // The header wraps everything in a single synthetic item.
        let NavigationItem::Header { title, children } = &items[0] else {
            panic!("expected header");
        };
        assert_eq!("Contents", title);
        let NavigationItem::Link { href, .. } = &children[0] else {
            panic!("expected link");
        };
        assert_eq!("OEBPS/text/c1.xhtml", href);
    }

    #[test]
    fn nav_span_and_bare_anchor_become_headers() {
        let html = html_collection(&[]);
        let document = NavDocument {
            path: "nav.xhtml".to_owned(),
            navs: vec![NavSection {
                kind: Some(StructuralSemantics::Toc),
                header: None,
                list: NavList {
                    hidden: false,
                    items: vec![
                        NavListItem {
                            element: NavListElement::Span(NavSpan {
                                text: String::new(),
                                title: Some("Part I".to_owned()),
                                alt: None,
                            }),
                            children: None,
                        },
                        anchor_item(None, ""),
                    ],
                },
                hidden: false,
            }],
        };

        let items = from_nav(&document, &html).unwrap();
        // Title attribute backfills empty text; a missing title stays empty.
        assert_eq!("Part I", items[0].title());
        assert!(matches!(items[0], NavigationItem::Header { .. }));
        assert_eq!("", items[1].title());
        assert!(matches!(items[1], NavigationItem::Header { .. }));
    }

    #[test]
    fn nav_without_toc_section_yields_empty_tree() {
        let html = html_collection(&[]);
        let document = NavDocument {
            path: "nav.xhtml".to_owned(),
            navs: vec![NavSection {
                kind: Some(StructuralSemantics::PageList),
                ..NavSection::default()
            }],
        };

        assert!(from_nav(&document, &html).unwrap().is_empty());
    }

    #[test]
    fn nav_unresolved_href_fails() {
        let html = html_collection(&[]);
        let document = NavDocument {
            path: "nav.xhtml".to_owned(),
            navs: vec![NavSection {
                kind: Some(StructuralSemantics::Toc),
                header: None,
                list: NavList {
                    hidden: false,
                    items: vec![anchor_item(Some("missing.xhtml"), "x")],
                },
                hidden: false,
            }],
        };

        assert!(matches!(
            from_nav(&document, &html),
            Err(EpubError::NavDocument(_))
        ));
    }
}
