use crate::consts;
use crate::parser::package::{PackageParser, attr_owned};
use crate::schema::{Creator, Identifier, MetaEntry, MetaItem, Metadata, MetadataLink, Properties};
use crate::xml::XmlElement;

impl PackageParser<'_> {
    /// Reads every recognized metadata child by local name,
    /// case-insensitively; unrecognized element names are silently skipped.
    ///
    /// Order within each list is document order, which is significant for
    /// `refines` chains.
    pub(super) fn parse_metadata(metadata: &XmlElement) -> Metadata {
        let mut result = Metadata::default();

        for el in metadata.children() {
            match el.local_name().to_ascii_lowercase().as_str() {
                "title" => result.titles.push(entry(el)),
                "creator" => result.creators.push(creator(el)),
                "subject" => result.subjects.push(entry(el)),
                "description" => result.descriptions.push(entry(el)),
                "publisher" => result.publishers.push(entry(el)),
                "contributor" => result.contributors.push(creator(el)),
                "date" => result.dates.push(entry(el)),
                "type" => result.types.push(entry(el)),
                "format" => result.formats.push(entry(el)),
                "identifier" => result.identifiers.push(identifier(el)),
                "source" => result.sources.push(entry(el)),
                "language" => result.languages.push(entry(el)),
                "relation" => result.relations.push(entry(el)),
                "coverage" => result.coverages.push(entry(el)),
                "rights" => result.rights.push(entry(el)),
                "link" => result.links.extend(Self::parse_link(el)),
                "meta" => result.items.extend(meta_item(el)),
                _ => {}
            }
        }
        result
    }

    /// A `<link>` without an href carries no usable reference and is
    /// skipped.
    pub(super) fn parse_link(el: &XmlElement) -> Option<MetadataLink> {
        Some(MetadataLink {
            href: el.attr(consts::HREF)?.to_owned(),
            id: attr_owned(el, consts::ID),
            rel: attr_owned(el, consts::REL),
            media_type: attr_owned(el, consts::MEDIA_TYPE),
            properties: Properties::from_attr(el.attr(consts::PROPERTIES)),
            refines: el.attr(consts::REFINES).map(normalize_refines),
        })
    }
}

fn entry(el: &XmlElement) -> MetaEntry {
    MetaEntry {
        text: el.text().to_owned(),
        id: attr_owned(el, consts::ID),
        text_direction: attr_owned(el, consts::DIR),
        language: attr_owned(el, consts::LANG),
    }
}

fn creator(el: &XmlElement) -> Creator {
    Creator {
        text: el.text().to_owned(),
        id: attr_owned(el, consts::ID),
        text_direction: attr_owned(el, consts::DIR),
        language: attr_owned(el, consts::LANG),
        role: el
            .attr_any(&[consts::OPF_ROLE, consts::ROLE])
            .map(str::to_owned),
        file_as: el
            .attr_any(&[consts::OPF_FILE_AS, consts::FILE_AS])
            .map(str::to_owned),
    }
}

fn identifier(el: &XmlElement) -> Identifier {
    Identifier {
        text: el.text().to_owned(),
        id: attr_owned(el, consts::ID),
        scheme: el
            .attr_any(&[consts::OPF_SCHEME, consts::SCHEME])
            .map(str::to_owned),
    }
}

/// Both `<meta>` flavors: the EPUB 2 `name`/`content` pair and the EPUB 3
/// `property` element. A meta with neither attribute is skipped.
fn meta_item(el: &XmlElement) -> Option<MetaItem> {
    let name = el.attr_any(&[consts::NAME, consts::PROPERTY])?;
    let content = el
        .attr(consts::CONTENT)
        .map_or_else(|| el.text().to_owned(), str::to_owned);

    Some(MetaItem {
        name: name.to_owned(),
        content,
        id: attr_owned(el, consts::ID),
        refines: el.attr(consts::REFINES).map(normalize_refines),
        scheme: attr_owned(el, consts::SCHEME),
    })
}

fn normalize_refines(refines: &str) -> String {
    refines.strip_prefix('#').unwrap_or(refines).to_owned()
}
