//! Parsing leniency configuration.

/// Leniency flags threaded through the parsers.
///
/// The default is fully strict: every structural violation is raised at the
/// point of detection. Each flag downgrades exactly one enumerated violation
/// into a "skip this item" or "treat as absent" outcome; no flag affects any
/// other failure site.
///
/// # Examples
/// ```
/// use quire::ParseOptions;
///
/// let options = ParseOptions::default()
///     .skip_invalid_manifest_items(true)
///     .ignore_missing_toc(true);
/// assert!(options.skip_invalid_manifest_items);
/// assert!(!options.ignore_missing_content_for_navigation_points);
/// ```
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop manifest `item` elements missing `id`, `href` or `media-type`
    /// instead of failing the whole package parse.
    pub skip_invalid_manifest_items: bool,

    /// Treat a missing spine `toc` attribute on an EPUB 2 package as absent
    /// instead of failing.
    pub ignore_missing_toc: bool,

    /// Drop NCX `navPoint` elements that lack a `content` child instead of
    /// failing. Dropped points are removed entirely, never retained with an
    /// empty target.
    pub ignore_missing_content_for_navigation_points: bool,

    /// Skip the archive-existence check for local manifest entries when
    /// assembling an [`Epub`](crate::Epub).
    pub ignore_missing_manifest_items: bool,
}

impl ParseOptions {
    /// See [`ParseOptions::skip_invalid_manifest_items`].
    pub fn skip_invalid_manifest_items(mut self, value: bool) -> Self {
        self.skip_invalid_manifest_items = value;
        self
    }

    /// See [`ParseOptions::ignore_missing_toc`].
    pub fn ignore_missing_toc(mut self, value: bool) -> Self {
        self.ignore_missing_toc = value;
        self
    }

    /// See [`ParseOptions::ignore_missing_content_for_navigation_points`].
    pub fn ignore_missing_content_for_navigation_points(mut self, value: bool) -> Self {
        self.ignore_missing_content_for_navigation_points = value;
        self
    }

    /// See [`ParseOptions::ignore_missing_manifest_items`].
    pub fn ignore_missing_manifest_items(mut self, value: bool) -> Self {
        self.ignore_missing_manifest_items = value;
        self
    }
}
