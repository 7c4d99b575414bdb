use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// The directory portion of an href, without the trailing slash.
pub(crate) fn parent(href: &str) -> &str {
    href.rfind('/')
        .map_or("", |index| if index == 0 { "/" } else { &href[..index] })
}

pub(crate) fn decode(encoded: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(encoded).decode_utf8_lossy()
}

/// Whether an href points outside the archive.
///
/// The `://` substring test is intentionally kept as-is: protocol-relative
/// (`//host/path`) and `data:` hrefs are classified as local. Navigation and
/// cover resolution rely on this exact heuristic being applied everywhere.
pub(crate) fn is_remote(href: &str) -> bool {
    href.contains("://")
}

/// Strips any query and fragment, leaving the file portion of an href.
pub(crate) fn file_portion(href: &str) -> &str {
    href.find(['?', '#'])
        .map_or(href, |position| &href[..position])
}

/// Resolves a relative href against a directory, normalizing `.` and `..`.
///
/// Any query or fragment on `relative` is preserved. Absolute hrefs and
/// hrefs with a scheme are returned unchanged.
pub(crate) fn resolve<'a>(parent_dir: &str, relative: &'a str) -> Cow<'a, str> {
    let main_href = file_portion(relative);
    let suffix = &relative[main_href.len()..];

    if main_href.starts_with('/') || is_remote(main_href) {
        return Cow::Borrowed(relative);
    }

    let mut buf = Path::new(parent_dir).join(main_href);
    normalize_href_path(&mut buf);

    // 1: `buf` is UTF-8 as its data derives from `parent_dir` and `relative`.
    // 2: Ensure separators are forward slashes.
    Cow::Owned(buf.to_string_lossy().replace('\\', "/") + suffix)
}

fn normalize_href_path(original: &mut PathBuf) {
    let mut stack = Vec::new();

    for component in original.components() {
        match component {
            Component::ParentDir => {
                if stack
                    .last()
                    // No content must come before the root when present.
                    .is_some_and(|component| !matches!(component, Component::RootDir))
                {
                    stack.pop();
                }
            }
            Component::CurDir => {}
            _ => {
                stack.push(component);
            }
        }
    }

    *original = PathBuf::from_iter(stack);
}
