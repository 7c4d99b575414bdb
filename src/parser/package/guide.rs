use crate::consts;
use crate::errors::{EpubError, EpubResult};
use crate::parser::package::{PackageParser, attr_owned};
use crate::schema::{Guide, GuideReference};
use crate::util::uri;
use crate::xml::XmlElement;

impl PackageParser<'_> {
    /// Guide references require both `type` and `href`; no leniency flag
    /// applies here.
    pub(super) fn parse_guide(guide: &XmlElement) -> EpubResult<Guide> {
        Ok(Guide {
            references: guide
                .children_named(consts::REFERENCE)
                .map(Self::parse_reference)
                .collect::<EpubResult<_>>()?,
        })
    }

    fn parse_reference(el: &XmlElement) -> EpubResult<GuideReference> {
        let kind = el
            .attr(consts::TYPE)
            .filter(|kind| !kind.is_empty())
            .ok_or_else(|| {
                EpubError::Package("guide reference missing required `type` attribute".into())
            })?;
        let href = el
            .attr(consts::HREF)
            .filter(|href| !href.is_empty())
            .ok_or_else(|| {
                EpubError::Package("guide reference missing required `href` attribute".into())
            })?;

        Ok(GuideReference {
            kind: kind.to_owned(),
            title: attr_owned(el, consts::TITLE),
            href: uri::decode(href).into_owned(),
        })
    }
}
