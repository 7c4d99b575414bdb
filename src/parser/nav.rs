use crate::consts;
use crate::errors::{EpubError, EpubResult};
use crate::schema::{
    NavAnchor, NavDocument, NavList, NavListElement, NavListItem, NavSection, NavSpan,
    StructuralSemantics,
};
use crate::xml::XmlElement;

/// Parses an EPUB 3 navigation document into a [`NavDocument`].
///
/// The tree must contain `html` then `body`; every `nav` section found under
/// the body is parsed. `path` is the archive path of the document, retained
/// because nav hrefs resolve against its own directory.
pub fn parse_nav_document(html: &XmlElement, path: &str) -> EpubResult<NavDocument> {
    if !html.is_named(consts::HTML) {
        return Err(EpubError::NavDocument("missing `html` element".into()));
    }
    let body = html
        .first_child(consts::BODY)
        .ok_or_else(|| EpubError::NavDocument("missing `body` element".into()))?;

    let mut navs = Vec::new();
    collect_navs(body, &mut navs)?;

    Ok(NavDocument {
        path: path.to_owned(),
        navs,
    })
}

/// Nav sections may sit under wrappers like `section` or `div`; the search
/// descends into everything except a `nav` itself.
fn collect_navs(el: &XmlElement, navs: &mut Vec<NavSection>) -> EpubResult<()> {
    for child in el.children() {
        if child.is_named(consts::NAV) {
            navs.push(parse_nav(child)?);
        } else {
            collect_navs(child, navs)?;
        }
    }
    Ok(())
}

fn parse_nav(nav: &XmlElement) -> EpubResult<NavSection> {
    let list = nav
        .first_child(consts::ORDERED_LIST)
        .ok_or_else(|| EpubError::NavDocument("nav must contain ol".into()))?;

    Ok(NavSection {
        kind: nav
            .attr(consts::EPUB_TYPE)
            .into_iter()
            .flat_map(str::split_ascii_whitespace)
            .find_map(StructuralSemantics::from_token),
        hidden: nav.has_attr(consts::HIDDEN),
        header: nav
            .children()
            .iter()
            .find(|child| {
                consts::HEADINGS
                    .iter()
                    .any(|heading| child.is_named(heading))
            })
            .map(XmlElement::text_content),
        list: parse_list(list)?,
    })
}

fn parse_list(ol: &XmlElement) -> EpubResult<NavList> {
    Ok(NavList {
        hidden: ol.has_attr(consts::HIDDEN),
        items: ol
            .children_named(consts::LIST_ITEM)
            .map(parse_list_item)
            .collect::<EpubResult<_>>()?,
    })
}

fn parse_list_item(li: &XmlElement) -> EpubResult<NavListItem> {
    let element = if let Some(anchor) = li.first_child(consts::ANCHOR) {
        NavListElement::Anchor(NavAnchor {
            href: anchor.attr(consts::HREF).map(str::to_owned),
            text: anchor.text_content(),
            title: anchor.attr(consts::TITLE).map(str::to_owned),
            alt: anchor.attr(consts::ALT).map(str::to_owned),
            kind: anchor.attr(consts::EPUB_TYPE).map(str::to_owned),
        })
    } else if let Some(span) = li.first_child(consts::SPAN) {
        NavListElement::Span(NavSpan {
            text: span.text_content(),
            title: span.attr(consts::TITLE).map(str::to_owned),
            alt: span.attr(consts::ALT).map(str::to_owned),
        })
    } else {
        return Err(EpubError::NavDocument("li must contain a or span".into()));
    };

    Ok(NavListItem {
        element,
        children: li
            .first_child(consts::ORDERED_LIST)
            .map(parse_list)
            .transpose()?,
    })
}
