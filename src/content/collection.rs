use crate::content::{LocalResource, RemoteResource};
use crate::errors::{EpubError, EpubResult};
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered index of local and remote content references.
///
/// Local references are indexed twice, by key (manifest href) and by
/// resolved archive path; remote references by key (URL). All three indices
/// are unique: a duplicate anywhere fails construction atomically, before
/// any lookup is possible.
#[derive(Clone, Debug, Default)]
pub struct ResourceCollection {
    local: IndexMap<String, LocalResource>,
    /// Secondary index: resolved archive path to local key.
    local_by_path: HashMap<String, String>,
    remote: IndexMap<String, RemoteResource>,
}

impl ResourceCollection {
    /// Builds the collection, validating key and path uniqueness once.
    pub fn new(
        locals: impl IntoIterator<Item = LocalResource>,
        remotes: impl IntoIterator<Item = RemoteResource>,
    ) -> EpubResult<Self> {
        let mut collection = Self::default();

        for resource in locals {
            if collection
                .local_by_path
                .insert(resource.path().to_owned(), resource.key().to_owned())
                .is_some()
            {
                return Err(EpubError::Package(format!(
                    "duplicate content file path: `{}`",
                    resource.path()
                )));
            }
            let key = resource.key().to_owned();
            if collection.local.insert(key.clone(), resource).is_some() {
                return Err(EpubError::Package(format!(
                    "duplicate local content key: `{key}`"
                )));
            }
        }
        for resource in remotes {
            let url = resource.url().to_owned();
            if collection.remote.insert(url.clone(), resource).is_some() {
                return Err(EpubError::Package(format!(
                    "duplicate remote content key: `{url}`"
                )));
            }
        }

        Ok(collection)
    }

    pub fn local(&self, key: &str) -> Option<&LocalResource> {
        self.local.get(key)
    }

    /// Lookup by the resolved in-archive file path.
    pub fn local_by_path(&self, path: &str) -> Option<&LocalResource> {
        self.local_by_path
            .get(path)
            .and_then(|key| self.local.get(key))
    }

    pub fn remote(&self, url: &str) -> Option<&RemoteResource> {
        self.remote.get(url)
    }

    /// Like [`local`](Self::local), but an absent or empty key
    /// is an error.
    pub fn require_local(&self, key: &str) -> EpubResult<&LocalResource> {
        if key.is_empty() {
            return Err(EpubError::EmptyLookupKey("key"));
        }
        self.local(key)
            .ok_or_else(|| EpubError::NotFound(format!("no local entry for key `{key}`")))
    }

    /// Like [`local_by_path`](Self::local_by_path), but an absent or empty
    /// path is an error.
    pub fn require_local_by_path(&self, path: &str) -> EpubResult<&LocalResource> {
        if path.is_empty() {
            return Err(EpubError::EmptyLookupKey("path"));
        }
        self.local_by_path(path)
            .ok_or_else(|| EpubError::NotFound(format!("no local entry at path `{path}`")))
    }

    pub fn contains_local(&self, key: &str) -> bool {
        self.local.contains_key(key)
    }

    pub fn contains_remote(&self, url: &str) -> bool {
        self.remote.contains_key(url)
    }

    /// Local references in insertion order.
    pub fn locals(&self) -> impl Iterator<Item = &LocalResource> {
        self.local.values()
    }

    /// Remote references in insertion order.
    pub fn remotes(&self) -> impl Iterator<Item = &RemoteResource> {
        self.remote.values()
    }

    pub fn len(&self) -> usize {
        self.local.len() + self.remote.len()
    }

    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.remote.is_empty()
    }
}
