use crate::consts;
use crate::errors::{EpubError, EpubResult};
use crate::parser::package::{PackageParser, attr_owned};
use crate::schema::{Manifest, ManifestItem, Properties};
use crate::util::uri;
use crate::xml::XmlElement;

impl PackageParser<'_> {
    /// `id`, `href` and `media-type` are all mandatory on every `<item>`.
    /// With [`skip_invalid_manifest_items`](crate::ParseOptions) set, items
    /// missing any of the three are dropped instead.
    pub(super) fn parse_manifest(&self, manifest: &XmlElement) -> EpubResult<Manifest> {
        let mut items = Vec::new();

        for el in manifest.children_named(consts::ITEM) {
            match Self::parse_item(el) {
                Some(item) => items.push(item),
                None if self.options.skip_invalid_manifest_items => continue,
                None => {
                    return Err(EpubError::Package(format!(
                        "manifest item missing `id`, `href` or `media-type`: id=`{}`",
                        el.attr(consts::ID).unwrap_or_default()
                    )));
                }
            }
        }
        Ok(Manifest { items })
    }

    fn parse_item(el: &XmlElement) -> Option<ManifestItem> {
        Some(ManifestItem {
            id: el.attr(consts::ID)?.to_owned(),
            href: uri::decode(el.attr(consts::HREF)?).into_owned(),
            media_type: el.attr(consts::MEDIA_TYPE)?.to_owned(),
            media_overlay: attr_owned(el, consts::MEDIA_OVERLAY),
            fallback: attr_owned(el, consts::FALLBACK),
            fallback_style: attr_owned(el, consts::FALLBACK_STYLE),
            required_namespace: attr_owned(el, consts::REQUIRED_NAMESPACE),
            required_modules: attr_owned(el, consts::REQUIRED_MODULES),
            properties: Properties::from_attr(el.attr(consts::PROPERTIES)),
        })
    }
}
