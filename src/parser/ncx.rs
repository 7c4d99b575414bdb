use crate::consts;
use crate::errors::{EpubError, EpubResult};
use crate::options::ParseOptions;
use crate::schema::{Ncx, NcxContent, NcxMeta, NcxNavList, NavPoint, NavTarget, PageTarget, PageTargetKind};
use crate::util::uri;
use crate::xml::XmlElement;

/// Parses an NCX document into an [`Ncx`].
///
/// `ncx`, `head`, `docTitle` and `navMap` are all mandatory; each absence
/// fails independently. `path` is the archive path of the document, retained
/// for later href resolution.
pub fn parse_ncx(ncx: &XmlElement, path: &str, options: &ParseOptions) -> EpubResult<Ncx> {
    NcxParser { options }.parse(ncx, path)
}

struct NcxParser<'a> {
    options: &'a ParseOptions,
}

impl NcxParser<'_> {
    fn parse(&self, ncx: &XmlElement, path: &str) -> EpubResult<Ncx> {
        if !ncx.is_named(consts::NCX) {
            return Err(EpubError::Ncx("missing `ncx` element".into()));
        }

        let head = Self::mandatory(ncx, consts::HEAD)?;
        let doc_title = Self::mandatory(ncx, consts::DOC_TITLE)?;
        let nav_map = Self::mandatory(ncx, consts::NAV_MAP)?;

        Ok(Ncx {
            path: path.to_owned(),
            head: head
                .children_named(consts::META)
                .map(Self::parse_meta)
                .collect::<EpubResult<_>>()?,
            doc_title: text_child(doc_title).map(str::to_owned),
            doc_authors: ncx
                .children_named(consts::DOC_AUTHOR)
                .filter_map(text_child)
                .map(str::to_owned)
                .collect(),
            nav_map: self.parse_points(nav_map)?,
            page_list: ncx
                .first_child(consts::PAGE_LIST)
                .map(|el| {
                    el.children_named(consts::PAGE_TARGET)
                        .map(Self::parse_page_target)
                        .collect::<EpubResult<_>>()
                })
                .transpose()?,
            nav_lists: ncx
                .children_named(consts::NAV_LIST)
                .map(Self::parse_nav_list)
                .collect::<EpubResult<_>>()?,
        })
    }

    fn mandatory<'b>(ncx: &'b XmlElement, name: &str) -> EpubResult<&'b XmlElement> {
        ncx.first_child(name)
            .ok_or_else(|| EpubError::Ncx(format!("missing `{name}` element")))
    }

    fn parse_meta(el: &XmlElement) -> EpubResult<NcxMeta> {
        let missing =
            |attr: &str| EpubError::Ncx(format!("head meta missing `{attr}` attribute"));

        Ok(NcxMeta {
            name: el
                .attr(consts::NAME)
                .ok_or_else(|| missing(consts::NAME))?
                .to_owned(),
            content: el
                .attr(consts::CONTENT)
                .ok_or_else(|| missing(consts::CONTENT))?
                .to_owned(),
            scheme: el.attr(consts::SCHEME).map(str::to_owned),
        })
    }

    fn parse_points(&self, parent: &XmlElement) -> EpubResult<Vec<NavPoint>> {
        let mut points = Vec::new();
        for el in parent.children_named(consts::NAV_POINT) {
            points.extend(self.parse_point(el)?);
        }
        Ok(points)
    }

    /// `Ok(None)` means the point lacked a content target and was dropped
    /// under the lenient flag, children included.
    fn parse_point(&self, el: &XmlElement) -> EpubResult<Option<NavPoint>> {
        // An empty id is permitted; absence of the attribute is not.
        let id = el
            .attr(consts::ID)
            .ok_or_else(|| EpubError::Ncx("navPoint missing `id` attribute".into()))?;

        let labels = parse_labels(el);
        if labels.is_empty() {
            return Err(EpubError::Ncx(format!(
                "navPoint `{id}` should contain at least one label"
            )));
        }

        let Some(content) = parse_content(el)? else {
            if self.options.ignore_missing_content_for_navigation_points {
                return Ok(None);
            }
            return Err(EpubError::Ncx(format!(
                "navPoint `{id}` missing `content` element"
            )));
        };

        Ok(Some(NavPoint {
            id: id.to_owned(),
            class: el.attr(consts::CLASS).map(str::to_owned),
            play_order: play_order(el),
            labels,
            content,
            children: self.parse_points(el)?,
        }))
    }

    fn parse_page_target(el: &XmlElement) -> EpubResult<PageTarget> {
        let kind = el
            .attr(consts::TYPE)
            .map(PageTargetKind::from_str)
            .ok_or_else(|| EpubError::Ncx("pageTarget missing `type` attribute".into()))?;

        let labels = parse_labels(el);
        if labels.is_empty() {
            return Err(EpubError::Ncx(
                "pageTarget should contain at least one label".into(),
            ));
        }

        Ok(PageTarget {
            id: el.attr(consts::ID).map(str::to_owned),
            value: el.attr(consts::VALUE).map(str::to_owned),
            kind,
            class: el.attr(consts::CLASS).map(str::to_owned),
            play_order: play_order(el),
            labels,
            content: parse_content(el)?,
        })
    }

    fn parse_nav_list(el: &XmlElement) -> EpubResult<NcxNavList> {
        let labels = parse_labels(el);
        if labels.is_empty() {
            return Err(EpubError::Ncx(
                "navList should contain at least one label".into(),
            ));
        }

        Ok(NcxNavList {
            id: el.attr(consts::ID).map(str::to_owned),
            class: el.attr(consts::CLASS).map(str::to_owned),
            labels,
            targets: el
                .children_named(consts::NAV_TARGET)
                .map(Self::parse_nav_target)
                .collect::<EpubResult<_>>()?,
        })
    }

    fn parse_nav_target(el: &XmlElement) -> EpubResult<NavTarget> {
        let id = el
            .attr(consts::ID)
            .ok_or_else(|| EpubError::Ncx("navTarget missing `id` attribute".into()))?;

        let labels = parse_labels(el);
        if labels.is_empty() {
            return Err(EpubError::Ncx(format!(
                "navTarget `{id}` should contain at least one label"
            )));
        }

        Ok(NavTarget {
            id: id.to_owned(),
            class: el.attr(consts::CLASS).map(str::to_owned),
            value: el.attr(consts::VALUE).map(str::to_owned),
            play_order: play_order(el),
            labels,
            content: parse_content(el)?,
        })
    }
}

/// One entry per `navLabel`, taking the first child `text` element's value
/// and ignoring other children. A label without a `text` child reads as
/// empty rather than dropping the label.
fn parse_labels(el: &XmlElement) -> Vec<String> {
    el.children_named(consts::NAV_LABEL)
        .map(|label| text_child(label).unwrap_or_default().to_owned())
        .collect()
}

fn text_child(el: &XmlElement) -> Option<&str> {
    el.first_child(consts::TEXT).map(XmlElement::text)
}

/// `src` is mandatory on a present `content` element and percent-decoded.
fn parse_content(el: &XmlElement) -> EpubResult<Option<NcxContent>> {
    let Some(content) = el.first_child(consts::NCX_CONTENT) else {
        return Ok(None);
    };
    let src = content
        .attr(consts::SRC)
        .ok_or_else(|| EpubError::Ncx("content missing `src` attribute".into()))?;

    Ok(Some(NcxContent {
        id: content.attr(consts::ID).map(str::to_owned),
        src: uri::decode(src).into_owned(),
    }))
}

fn play_order(el: &XmlElement) -> Option<u32> {
    el.attr(consts::PLAY_ORDER)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_ncx;
    use crate::errors::EpubError;
    use crate::options::ParseOptions;
    use crate::schema::{Ncx, PageTargetKind};
    use crate::xml::XmlElement;

    fn parse(data: &[u8], options: ParseOptions) -> Result<Ncx, EpubError> {
        parse_ncx(&XmlElement::parse(data).unwrap(), "toc.ncx", &options)
    }

    const SAMPLE: &[u8] = br#"
        <ncx version="2005-1">
          <head>
            <meta name="dtb:uid" content="urn:uuid:1234"/>
            <meta name="dtb:depth" content="2" scheme="depth"/>
          </head>
          <docTitle><text>Example Book</text></docTitle>
          <docAuthor><text>Jane Doe</text></docAuthor>
          <navMap>
            <navPoint id="np1" playOrder="1">
              <navLabel><text>Chapter 1</text></navLabel>
              <content src="chapter%201.xhtml"/>
              <navPoint id="np1.1" class="section" playOrder="2">
                <navLabel><text>Section 1.1</text></navLabel>
                <content src="chapter 1.xhtml#s1"/>
              </navPoint>
            </navPoint>
          </navMap>
          <pageList>
            <pageTarget id="pt1" type="normal" value="1">
              <navLabel><text>1</text></navLabel>
              <content src="chapter 1.xhtml#page1"/>
            </pageTarget>
            <pageTarget id="pt2" type="figure">
              <navLabel><text>fig</text></navLabel>
            </pageTarget>
          </pageList>
          <navList id="illustrations">
            <navLabel><text>Illustrations</text></navLabel>
            <navTarget id="nt1">
              <navLabel><text>Figure 1</text></navLabel>
              <content src="chapter 1.xhtml#fig1"/>
            </navTarget>
          </navList>
        </ncx>"#;

    #[test]
    fn parses_complete_document() {
        let ncx = parse(SAMPLE, ParseOptions::default()).unwrap();

        assert_eq!("toc.ncx", ncx.path);
        assert_eq!(2, ncx.head.len());
        assert_eq!(("dtb:uid", "urn:uuid:1234"), {
            let meta = &ncx.head[0];
            (meta.name.as_str(), meta.content.as_str())
        });
        assert_eq!(Some("depth"), ncx.head[1].scheme.as_deref());
        assert_eq!(Some("Example Book"), ncx.doc_title.as_deref());
        assert_eq!(vec!["Jane Doe".to_owned()], ncx.doc_authors);

        let point = &ncx.nav_map[0];
        assert_eq!("np1", point.id);
        assert_eq!(Some(1), point.play_order);
        assert_eq!("Chapter 1", point.label());
        // Percent-decoded.
        assert_eq!("chapter 1.xhtml", point.content.src);
        assert_eq!("chapter 1.xhtml#s1", point.children[0].content.src);

        let pages = ncx.page_list.as_ref().unwrap();
        assert_eq!(PageTargetKind::Normal, pages[0].kind);
        assert_eq!(Some("1"), pages[0].value.as_deref());
        // Unrecognized type maps to Unknown, never fails.
        assert_eq!(PageTargetKind::Unknown, pages[1].kind);
        assert!(pages[1].content.is_none());

        let list = &ncx.nav_lists[0];
        assert_eq!("Illustrations", list.labels[0]);
        assert_eq!("nt1", list.targets[0].id);
    }

    #[test]
    fn missing_top_level_elements_fail_independently() {
        let head = r#"<head/>"#;
        let title = r#"<docTitle><text>T</text></docTitle>"#;
        let map = r#"<navMap/>"#;

        for (missing, body) in [
            ("head", format!("{title}{map}")),
            ("docTitle", format!("{head}{map}")),
            ("navMap", format!("{head}{title}")),
        ] {
            let data = format!("<ncx>{body}</ncx>");
            match parse(data.as_bytes(), ParseOptions::default()) {
                Err(EpubError::Ncx(message)) => {
                    assert!(message.contains(missing), "message should name `{missing}`");
                }
                other => panic!("expected ncx error, got {other:?}"),
            }
        }
    }

    #[test]
    fn nav_point_requires_id_and_label() {
        let no_id = br#"
            <ncx><head/><docTitle><text>T</text></docTitle>
              <navMap>
                <navPoint><navLabel><text>x</text></navLabel><content src="a.xhtml"/></navPoint>
              </navMap>
            </ncx>"#;
        assert!(matches!(
            parse(no_id, ParseOptions::default()),
            Err(EpubError::Ncx(_))
        ));

        let no_label = br#"
            <ncx><head/><docTitle><text>T</text></docTitle>
              <navMap><navPoint id="np1"><content src="a.xhtml"/></navPoint></navMap>
            </ncx>"#;
        assert!(matches!(
            parse(no_label, ParseOptions::default()),
            Err(EpubError::Ncx(_))
        ));

        // Empty id is permitted.
        let empty_id = br#"
            <ncx><head/><docTitle><text>T</text></docTitle>
              <navMap>
                <navPoint id=""><navLabel><text>x</text></navLabel><content src="a.xhtml"/></navPoint>
              </navMap>
            </ncx>"#;
        let ncx = parse(empty_id, ParseOptions::default()).unwrap();
        assert_eq!("", ncx.nav_map[0].id);
    }

    #[test]
    fn missing_content_drops_whole_subtree_when_lenient() {
        let data = br#"
            <ncx><head/><docTitle><text>T</text></docTitle>
              <navMap>
                <navPoint id="broken">
                  <navLabel><text>No target</text></navLabel>
                  <navPoint id="child">
                    <navLabel><text>Nested</text></navLabel>
                    <content src="a.xhtml"/>
                  </navPoint>
                </navPoint>
                <navPoint id="ok">
                  <navLabel><text>Fine</text></navLabel>
                  <content src="b.xhtml"/>
                </navPoint>
              </navMap>
            </ncx>"#;

        assert!(matches!(
            parse(data, ParseOptions::default()),
            Err(EpubError::Ncx(_))
        ));

        let lenient =
            ParseOptions::default().ignore_missing_content_for_navigation_points(true);
        let ncx = parse(data, lenient).unwrap();
        assert_eq!(1, ncx.nav_map.len());
        assert_eq!("ok", ncx.nav_map[0].id);
    }
}
