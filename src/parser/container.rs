use crate::consts;
use crate::errors::{EpubError, EpubResult};
use crate::util::uri;
use crate::xml::XmlElement;

/// Parses `META-INF/container.xml` and returns the package document path.
///
/// Multiple `rootfile` elements may exist; the first one carrying the OPF
/// package media type wins, as it is the default rendition. The `full-path`
/// is percent-decoded.
pub fn parse_container(container: &XmlElement) -> EpubResult<String> {
    let rootfiles = container
        .first_child(consts::ROOT_FILES)
        .map(XmlElement::children)
        .unwrap_or_default();

    rootfiles
        .iter()
        .filter(|el| el.is_named(consts::ROOT_FILE))
        .find_map(|el| {
            (el.attr(consts::MEDIA_TYPE) == Some(consts::PACKAGE_TYPE))
                .then(|| el.attr(consts::FULL_PATH))
                .flatten()
        })
        .map(|full_path| uri::decode(full_path).into_owned())
        .ok_or_else(|| {
            EpubError::Container(
                "missing `rootfile` element referencing the package document".into(),
            )
        })
}
