use crate::consts;
use crate::content::{LocalResource, ResourceCollection};
use crate::errors::{EpubError, EpubResult};
use crate::schema::Package;

/// Resolves the cover image across the three competing conventions.
///
/// Precedence: the EPUB 3 `cover-image` manifest property, then the EPUB 2
/// `<meta name="cover">` entry, then the EPUB 2 guide `cover` reference,
/// then none. A declared-but-malformed cover is an error; a simply absent
/// cover is `None`.
pub(crate) fn resolve_cover(
    package: &Package,
    images: &ResourceCollection,
) -> EpubResult<Option<LocalResource>> {
    if !package.version.is_epub2()
        && let Some(cover) = by_manifest_property(package, images)?
    {
        return Ok(Some(cover));
    }
    // EPUB 3 packages fall through here: the legacy conventions are
    // supported on every version.
    if let Some(cover) = by_cover_meta(package, images)? {
        return Ok(Some(cover));
    }
    by_guide_reference(package, images)
}

/// EPUB 3: the manifest item carrying the `cover-image` property.
fn by_manifest_property(
    package: &Package,
    images: &ResourceCollection,
) -> EpubResult<Option<LocalResource>> {
    let Some(item) = package.manifest.by_property(consts::COVER_IMAGE_PROPERTY) else {
        return Ok(None);
    };
    if item.href.is_empty() {
        // A property with no usable href is treated as absent.
        return Ok(None);
    }

    match lookup(images, &item.href)? {
        Some(cover) => Ok(Some(cover)),
        // The property declared a cover; it must exist.
        None => Err(EpubError::Package(format!(
            "declared cover image `{}` is missing from the manifest images",
            item.href
        ))),
    }
}

/// EPUB 2, path A: `<meta name="cover" content="...">` pointing at a
/// manifest item by id. Declared covers on this path must resolve.
fn by_cover_meta(
    package: &Package,
    images: &ResourceCollection,
) -> EpubResult<Option<LocalResource>> {
    let Some(meta) = package
        .metadata
        .items
        .iter()
        .find(|item| item.name.eq_ignore_ascii_case(consts::COVER))
    else {
        return Ok(None);
    };

    if meta.content.is_empty() {
        return Err(EpubError::Package(
            "cover meta entry has an empty `content` attribute".into(),
        ));
    }

    let item = package.manifest.by_id(&meta.content).ok_or_else(|| {
        EpubError::Package(format!(
            "cover meta entry references a non-existent manifest item: `{}`",
            meta.content
        ))
    })?;

    match lookup(images, &item.href)? {
        Some(cover) => Ok(Some(cover)),
        None => Err(EpubError::Package(format!(
            "incorrect cover manifest item `{}`: `{}` is not a local image",
            item.id, item.href
        ))),
    }
}

/// EPUB 2, path B: the guide `cover` reference. More lenient than path A:
/// an unresolvable reference is treated as absent.
fn by_guide_reference(
    package: &Package,
    images: &ResourceCollection,
) -> EpubResult<Option<LocalResource>> {
    let Some(reference) = package.guide.as_ref().and_then(|guide| {
        guide
            .references
            .iter()
            .find(|reference| reference.kind.eq_ignore_ascii_case(consts::COVER))
    }) else {
        return Ok(None);
    };

    lookup(images, &reference.href)
}

/// Shared lookup: a remote entry under the key is always an error; a local
/// entry is the cover; neither is "not found".
fn lookup(images: &ResourceCollection, key: &str) -> EpubResult<Option<LocalResource>> {
    if images.contains_remote(key) {
        return Err(EpubError::Package(format!(
            "cover image cannot be a remote resource: `{key}`"
        )));
    }
    Ok(images.local(key).cloned())
}

#[cfg(test)]
mod tests {
    use super::resolve_cover;
    use crate::archive::EmptyArchive;
    use crate::content::{LocalResource, RemoteResource, ResourceCollection, ResourceMeta};
    use crate::errors::EpubError;
    use crate::schema::{
        EpubVersion, Guide, GuideReference, Manifest, ManifestItem, MetaItem, Package, Properties,
        Spine,
    };
    use std::sync::Arc;

    fn package(version: EpubVersion) -> Package {
        Package {
            version,
            unique_identifier: None,
            metadata: Default::default(),
            manifest: Manifest::default(),
            spine: Spine::default(),
            guide: None,
            collections: Vec::new(),
        }
    }

    fn item(id: &str, href: &str, properties: Option<&str>) -> ManifestItem {
        ManifestItem {
            id: id.to_owned(),
            href: href.to_owned(),
            media_type: "image/jpeg".to_owned(),
            properties: Properties::from_attr(properties),
            ..ManifestItem::default()
        }
    }

    fn cover_meta(content: &str) -> MetaItem {
        MetaItem {
            name: "cover".to_owned(),
            content: content.to_owned(),
            ..MetaItem::default()
        }
    }

    fn local_images(entries: &[(&str, &str)]) -> ResourceCollection {
        let locals = entries.iter().map(|(key, path)| {
            LocalResource::new(
                ResourceMeta::new(*key, "image/jpeg"),
                *path,
                Arc::new(EmptyArchive),
            )
        });
        ResourceCollection::new(locals, std::iter::empty::<RemoteResource>()).unwrap()
    }

    fn remote_images(url: &str) -> ResourceCollection {
        let remote = RemoteResource::new(ResourceMeta::new(url, "image/jpeg"));
        ResourceCollection::new([], [remote]).unwrap()
    }

    #[test]
    fn epub2_meta_cover_resolves() {
        let mut package = package(EpubVersion::Epub2);
        package.metadata.items.push(cover_meta("cover-image"));
        package.manifest.items.push(item("cover-image", "cover.jpg", None));
        let images = local_images(&[("cover.jpg", "OEBPS/cover.jpg")]);

        let cover = resolve_cover(&package, &images).unwrap().unwrap();
        assert_eq!("cover.jpg", cover.key());
        assert_eq!("OEBPS/cover.jpg", cover.path());
    }

    #[test]
    fn epub2_empty_meta_content_fails() {
        let mut package = package(EpubVersion::Epub2);
        package.metadata.items.push(cover_meta(""));
        let images = local_images(&[("cover.jpg", "OEBPS/cover.jpg")]);

        assert!(matches!(
            resolve_cover(&package, &images),
            Err(EpubError::Package(_))
        ));
    }

    #[test]
    fn epub2_meta_referencing_missing_item_fails() {
        let mut package = package(EpubVersion::Epub2);
        package.metadata.items.push(cover_meta("nope"));
        let images = local_images(&[]);

        assert!(matches!(
            resolve_cover(&package, &images),
            Err(EpubError::Package(_))
        ));
    }

    #[test]
    fn remote_cover_always_fails() {
        let url = "https://example.com/cover.jpg";
        let mut package = package(EpubVersion::Epub2);
        package.metadata.items.push(cover_meta("cover-image"));
        package.manifest.items.push(item("cover-image", url, None));

        assert!(matches!(
            resolve_cover(&package, &remote_images(url)),
            Err(EpubError::Package(_))
        ));
    }

    #[test]
    fn epub3_property_takes_precedence_over_meta() {
        let mut package = package(EpubVersion::Epub3);
        package.metadata.items.push(cover_meta("legacy"));
        package.manifest.items.push(item("legacy", "old.jpg", None));
        package
            .manifest
            .items
            .push(item("modern", "new.jpg", Some("cover-image")));
        let images = local_images(&[("old.jpg", "OEBPS/old.jpg"), ("new.jpg", "OEBPS/new.jpg")]);

        let cover = resolve_cover(&package, &images).unwrap().unwrap();
        assert_eq!("new.jpg", cover.key());
    }

    #[test]
    fn epub3_declared_but_missing_cover_fails() {
        let mut package = package(EpubVersion::Epub3);
        package
            .manifest
            .items
            .push(item("modern", "new.jpg", Some("cover-image")));
        let images = local_images(&[]);

        assert!(matches!(
            resolve_cover(&package, &images),
            Err(EpubError::Package(_))
        ));
    }

    #[test]
    fn epub3_without_property_falls_back_to_legacy() {
        let mut package = package(EpubVersion::Epub3);
        package.metadata.items.push(cover_meta("legacy"));
        package.manifest.items.push(item("legacy", "old.jpg", None));
        let images = local_images(&[("old.jpg", "OEBPS/old.jpg")]);

        let cover = resolve_cover(&package, &images).unwrap().unwrap();
        assert_eq!("old.jpg", cover.key());
    }

    #[test]
    fn guide_fallback_is_lenient() {
        let mut package = package(EpubVersion::Epub2);
        package.guide = Some(Guide {
            references: vec![GuideReference {
                kind: "cover".to_owned(),
                title: None,
                href: "missing.jpg".to_owned(),
            }],
        });
        let images = local_images(&[]);

        // An unresolvable guide reference reads as absent, not an error.
        assert!(resolve_cover(&package, &images).unwrap().is_none());
    }

    #[test]
    fn absent_cover_is_none() {
        let images = local_images(&[]);
        assert!(
            resolve_cover(&package(EpubVersion::Epub2), &images)
                .unwrap()
                .is_none()
        );
    }
}
