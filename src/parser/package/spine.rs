use crate::consts;
use crate::errors::{EpubError, EpubResult};
use crate::parser::package::{PackageParser, attr_owned};
use crate::schema::{EpubVersion, Properties, Spine, SpineItem};
use crate::xml::XmlElement;

impl PackageParser<'_> {
    /// EPUB 2 requires the spine `toc` attribute to locate the NCX; with
    /// [`ignore_missing_toc`](crate::ParseOptions) set its absence is
    /// tolerated. A missing or empty `idref` is always an error, with no
    /// leniency flag.
    pub(super) fn parse_spine(
        &self,
        spine: &XmlElement,
        version: EpubVersion,
    ) -> EpubResult<Spine> {
        let toc = spine
            .attr(consts::TOC)
            .filter(|toc| !toc.is_empty())
            .map(str::to_owned);

        if toc.is_none() && version.is_epub2() && !self.options.ignore_missing_toc {
            return Err(EpubError::Package(
                "missing spine `toc` attribute referencing the ncx".into(),
            ));
        }

        Ok(Spine {
            id: attr_owned(spine, consts::ID),
            page_progression_direction: attr_owned(spine, consts::PAGE_PROGRESSION_DIRECTION),
            toc,
            items: spine
                .children_named(consts::ITEMREF)
                .map(Self::parse_itemref)
                .collect::<EpubResult<_>>()?,
        })
    }

    fn parse_itemref(el: &XmlElement) -> EpubResult<SpineItem> {
        let idref = el
            .attr(consts::IDREF)
            .filter(|idref| !idref.is_empty())
            .ok_or_else(|| {
                EpubError::Package("spine itemref missing required `idref` attribute".into())
            })?;

        Ok(SpineItem {
            id: attr_owned(el, consts::ID),
            idref: idref.to_owned(),
            linear: el.attr(consts::LINEAR) != Some("no"),
            properties: Properties::from_attr(el.attr(consts::PROPERTIES)),
        })
    }
}
