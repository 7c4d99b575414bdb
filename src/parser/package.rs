mod guide;
mod manifest;
mod metadata;
mod spine;

use crate::consts;
use crate::errors::{EpubError, EpubResult};
use crate::options::ParseOptions;
use crate::schema::{Collection, EpubVersion, Package};
use crate::xml::XmlElement;

/// Parses an OPF `package` element into a [`Package`].
///
/// `metadata`, `manifest` and `spine` children are mandatory; each absence
/// fails independently. Unrecognized elements are skipped for forward
/// compatibility.
pub fn parse_package(package: &XmlElement, options: &ParseOptions) -> EpubResult<Package> {
    PackageParser { options }.parse(package)
}

pub(super) struct PackageParser<'a> {
    options: &'a ParseOptions,
}

impl PackageParser<'_> {
    fn parse(&self, package: &XmlElement) -> EpubResult<Package> {
        if !package.is_named(consts::PACKAGE) {
            return Err(EpubError::Package("missing `package` element".into()));
        }

        let version = self.parse_version(package)?;
        let unique_identifier = package
            .attr(consts::UNIQUE_ID)
            .filter(|id| !id.is_empty())
            .map(str::to_owned);

        let metadata = Self::mandatory(package, consts::METADATA)?;
        let manifest = Self::mandatory(package, consts::MANIFEST)?;
        let spine = Self::mandatory(package, consts::SPINE)?;

        Ok(Package {
            version,
            unique_identifier,
            metadata: Self::parse_metadata(metadata),
            manifest: self.parse_manifest(manifest)?,
            spine: self.parse_spine(spine, version)?,
            guide: package
                .first_child(consts::GUIDE)
                .map(Self::parse_guide)
                .transpose()?,
            collections: package
                .children_named(consts::COLLECTION)
                .map(|el| Self::parse_collection(el))
                .collect::<EpubResult<_>>()?,
        })
    }

    fn parse_version(&self, package: &XmlElement) -> EpubResult<EpubVersion> {
        let raw = package.attr(consts::VERSION).ok_or_else(|| {
            EpubError::Package("missing package `version` attribute".into())
        })?;

        EpubVersion::from_str(raw)
            .ok_or_else(|| EpubError::Package(format!("unsupported EPUB version: `{raw}`")))
    }

    fn mandatory<'b>(package: &'b XmlElement, name: &str) -> EpubResult<&'b XmlElement> {
        package
            .first_child(name)
            .ok_or_else(|| EpubError::Package(format!("missing `{name}` element")))
    }

    /// Collections nest arbitrarily; no depth limit is enforced here.
    fn parse_collection(collection: &XmlElement) -> EpubResult<Collection> {
        let role = collection
            .attr(consts::ROLE)
            .filter(|role| !role.is_empty())
            .ok_or_else(|| {
                EpubError::Package("collection missing required `role` attribute".into())
            })?;

        Ok(Collection {
            role: role.to_owned(),
            id: attr_owned(collection, consts::ID),
            text_direction: attr_owned(collection, consts::DIR),
            language: attr_owned(collection, consts::LANG),
            metadata: collection
                .first_child(consts::METADATA)
                .map(Self::parse_metadata)
                .unwrap_or_default(),
            collections: collection
                .children_named(consts::COLLECTION)
                .map(|el| Self::parse_collection(el))
                .collect::<EpubResult<_>>()?,
            links: collection
                .children_named(consts::LINK)
                .filter_map(Self::parse_link)
                .collect(),
        })
    }
}

pub(super) fn attr_owned(el: &XmlElement, name: &str) -> Option<String> {
    el.attr(name).map(str::to_owned)
}
