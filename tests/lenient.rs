mod common;

use quire::{Epub, EpubError, ParseOptions};

fn epub2_entries() -> Vec<(&'static str, &'static str)> {
    vec![
        ("META-INF/container.xml", common::CONTAINER),
        ("OEBPS/content.opf", common::EPUB2_OPF),
        ("OEBPS/toc.ncx", common::EPUB2_NCX),
        ("OEBPS/chapter1.xhtml", common::CHAPTER),
        ("OEBPS/chapter2.xhtml", common::CHAPTER),
        ("OEBPS/cover.jpg", "jpg-bytes"),
    ]
}

#[test]
fn missing_archive_entry_gated_by_flag() {
    // Drop a declared chapter from the archive.
    let entries: Vec<_> = epub2_entries()
        .into_iter()
        .filter(|(path, _)| *path != "OEBPS/chapter2.xhtml")
        .collect();

    match Epub::read(common::archive(&entries)) {
        Err(EpubError::Package(message)) => assert!(message.contains("chapter2.xhtml")),
        other => panic!("expected package error, got {other:?}"),
    }

    let options = ParseOptions::default().ignore_missing_manifest_items(true);
    let epub = Epub::read_with(common::archive(&entries), options).unwrap();
    // The reference still exists; only its payload is unreadable.
    let chapter = epub.content().html.local("chapter2.xhtml").unwrap();
    assert!(chapter.read_bytes().is_err());
}

#[test]
fn invalid_manifest_item_gated_by_flag() {
    let opf = common::EPUB2_OPF.replace(
        r#"<item id="c2" href="chapter2.xhtml" media-type="application/xhtml+xml"/>"#,
        r#"<item id="c2" href="chapter2.xhtml"/>"#,
    );
    // The dropped item also leaves the NCX target unresolvable, so keep the
    // navigation pointing only at chapter 1.
    let ncx = common::EPUB2_NCX.replace("chapter2.xhtml", "chapter1.xhtml");
    let entries: Vec<(&str, &str)> = epub2_entries()
        .into_iter()
        .map(|(path, data)| match path {
            "OEBPS/content.opf" => (path, opf.as_str()),
            "OEBPS/toc.ncx" => (path, ncx.as_str()),
            _ => (path, data),
        })
        .collect();

    assert!(matches!(
        Epub::read(common::archive(&entries)),
        Err(EpubError::Package(_))
    ));

    let options = ParseOptions::default().skip_invalid_manifest_items(true);
    let epub = Epub::read_with(common::archive(&entries), options).unwrap();
    assert_eq!(3, epub.package().manifest.items.len());
    assert!(!epub.content().html.contains_local("chapter2.xhtml"));
}

#[test]
fn missing_spine_toc_gated_by_flag() {
    let opf = common::EPUB2_OPF.replace(r#"<spine toc="ncx">"#, "<spine>");
    let entries: Vec<(&str, &str)> = epub2_entries()
        .into_iter()
        .map(|(path, data)| (path, if path == "OEBPS/content.opf" { opf.as_str() } else { data }))
        .collect();

    assert!(matches!(
        Epub::read(common::archive(&entries)),
        Err(EpubError::Package(_))
    ));

    let options = ParseOptions::default().ignore_missing_toc(true);
    let epub = Epub::read_with(common::archive(&entries), options).unwrap();
    // Without a toc there is no NCX and no navigation tree.
    assert!(epub.package().spine.toc.is_none());
    assert!(epub.ncx().is_none());
    assert!(epub.navigation().is_empty());
}

#[test]
fn nav_point_without_content_gated_by_flag() {
    let ncx = common::EPUB2_NCX.replace(r#"<content src="chapter2.xhtml"/>"#, "");
    let entries: Vec<(&str, &str)> = epub2_entries()
        .into_iter()
        .map(|(path, data)| (path, if path == "OEBPS/toc.ncx" { ncx.as_str() } else { data }))
        .collect();

    assert!(matches!(
        Epub::read(common::archive(&entries)),
        Err(EpubError::Ncx(_))
    ));

    let options = ParseOptions::default().ignore_missing_content_for_navigation_points(true);
    let epub = Epub::read_with(common::archive(&entries), options).unwrap();
    // The broken point is dropped entirely from the map and the tree.
    assert_eq!(1, epub.ncx().unwrap().nav_map.len());
    assert_eq!(1, epub.navigation().len());
    assert_eq!("Chapter 1", epub.navigation()[0].title());
}

#[test]
fn remote_cover_fails() {
    let opf = common::EPUB2_OPF.replace(
        r#"href="cover.jpg" media-type="image/jpeg""#,
        r#"href="https://example.com/cover.jpg" media-type="image/jpeg""#,
    );
    let entries: Vec<(&str, &str)> = epub2_entries()
        .into_iter()
        .filter(|(path, _)| *path != "OEBPS/cover.jpg")
        .map(|(path, data)| (path, if path == "OEBPS/content.opf" { opf.as_str() } else { data }))
        .collect();

    match Epub::read(common::archive(&entries)) {
        Err(EpubError::Package(message)) => assert!(message.contains("remote")),
        other => panic!("expected package error, got {other:?}"),
    }
}
