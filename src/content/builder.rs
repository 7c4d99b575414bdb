use crate::archive::Archive;
use crate::consts;
use crate::content::{
    ContentKind, EpubContent, LocalResource, RemoteResource, ResourceCollection, ResourceMeta,
    resolve_cover,
};
use crate::errors::{EpubError, EpubResult};
use crate::schema::Package;
use crate::util::uri;
use std::sync::Arc;

/// One classified manifest entry, before partitioning into collections.
enum Classified {
    Local(LocalResource),
    Remote(RemoteResource),
}

impl Classified {
    fn kind(&self) -> ContentKind {
        match self {
            Self::Local(resource) => resource.kind(),
            Self::Remote(resource) => resource.kind(),
        }
    }
}

/// Walks the manifest and builds the content-reference graph:
/// classification, local/remote partitioning, typed routing, navigation
/// document detection and cover resolution.
pub(crate) fn build_content(
    package: &Package,
    content_dir: &str,
    archive: &Arc<dyn Archive>,
) -> EpubResult<EpubContent> {
    let mut classified = Vec::with_capacity(package.manifest.items.len());
    let mut nav_key = None;

    for item in &package.manifest.items {
        let meta = ResourceMeta::new(item.href.clone(), item.media_type.clone());
        let is_remote = uri::is_remote(&item.href);

        // The first item carrying the `nav` property wins; no duplicate
        // check is performed.
        if nav_key.is_none() && item.properties.contains(consts::NAV_PROPERTY) {
            if is_remote {
                return Err(EpubError::Package(format!(
                    "navigation document cannot be a remote resource: `{}`",
                    item.href
                )));
            }
            nav_key = Some(item.href.clone());
        }

        classified.push(if is_remote {
            Classified::Remote(RemoteResource::new(meta))
        } else {
            let path = uri::resolve(content_dir, uri::file_portion(&item.href));
            Classified::Local(LocalResource::new(meta, path, Arc::clone(archive)))
        });
    }

    let html = collect(&classified, |kind| kind == ContentKind::Xhtml)?;
    let css = collect(&classified, |kind| kind == ContentKind::Css)?;
    let images = collect(&classified, ContentKind::is_image)?;
    let fonts = collect(&classified, ContentKind::is_font)?;
    let audio = collect(&classified, ContentKind::is_audio)?;
    let all = collect(&classified, |_| true)?;

    let nav_document = match nav_key {
        Some(key) => Some(
            html.local(&key)
                .cloned()
                .ok_or_else(|| EpubError::Package(format!(
                    "navigation document `{key}` is not an XHTML manifest entry"
                )))?,
        ),
        None => None,
    };
    let cover = resolve_cover(package, &images)?;

    Ok(EpubContent {
        cover,
        nav_document,
        html,
        css,
        images,
        fonts,
        audio,
        all,
    })
}

fn collect(
    classified: &[Classified],
    matches: impl Fn(ContentKind) -> bool,
) -> EpubResult<ResourceCollection> {
    let mut locals = Vec::new();
    let mut remotes = Vec::new();

    for entry in classified.iter().filter(|entry| matches(entry.kind())) {
        match entry {
            Classified::Local(resource) => locals.push(resource.clone()),
            Classified::Remote(resource) => remotes.push(resource.clone()),
        }
    }
    ResourceCollection::new(locals, remotes)
}
