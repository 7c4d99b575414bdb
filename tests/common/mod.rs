//! In-memory EPUB fixtures shared by the integration tests.

use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const CONTAINER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

pub const CHAPTER: &str = r#"<html><body><p>Content.</p></body></html>"#;

/// Builds an EPUB container from `(path, data)` pairs.
pub fn archive(entries: &[(&str, &str)]) -> Cursor<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (path, data) in entries {
        writer
            .start_file(*path, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data.as_bytes()).unwrap();
    }
    writer.finish().unwrap()
}

/// A complete, valid EPUB 3 book: nav document, two chapters, stylesheet,
/// cover image and one media overlay.
pub fn epub3_book() -> Cursor<Vec<u8>> {
    archive(&[
        ("META-INF/container.xml", CONTAINER),
        ("OEBPS/content.opf", EPUB3_OPF),
        ("OEBPS/nav.xhtml", EPUB3_NAV),
        ("OEBPS/text/chapter1.xhtml", CHAPTER),
        ("OEBPS/text/chapter2.xhtml", CHAPTER),
        ("OEBPS/style.css", "body { margin: 0 }"),
        ("OEBPS/images/cover.png", "png-bytes"),
        ("OEBPS/audio/chapter1.mp3", "mp3-bytes"),
        ("OEBPS/overlay/chapter1.smil", EPUB3_SMIL),
    ])
}

pub const EPUB3_OPF: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0" unique-identifier="uid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:identifier id="uid">urn:uuid:aa11bb22</dc:identifier>
    <dc:title id="t1">Fixture Book</dc:title>
    <dc:creator id="c1">Jane Doe</dc:creator>
    <meta refines="#c1" property="role" scheme="marc:relators">aut</meta>
    <dc:language>en</dc:language>
    <meta property="dcterms:modified">2024-01-01T00:00:00Z</meta>
  </metadata>
  <manifest>
    <item id="nav" href="nav.xhtml" media-type="application/xhtml+xml" properties="nav"/>
    <item id="c1" href="text/chapter1.xhtml" media-type="application/xhtml+xml"
          media-overlay="mo1"/>
    <item id="c2" href="text/chapter2.xhtml" media-type="application/xhtml+xml"/>
    <item id="css" href="style.css" media-type="text/css"/>
    <item id="cover-img" href="images/cover.png" media-type="image/png"
          properties="cover-image"/>
    <item id="audio1" href="audio/chapter1.mp3" media-type="audio/mpeg"/>
    <item id="mo1" href="overlay/chapter1.smil" media-type="application/smil+xml"/>
  </manifest>
  <spine>
    <itemref idref="c1"/>
    <itemref idref="c2"/>
  </spine>
</package>"##;

pub const EPUB3_NAV: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops">
  <head><title>Navigation</title></head>
  <body>
    <nav epub:type="toc">
      <h1>Contents</h1>
      <ol>
        <li><a href="text/chapter1.xhtml">Chapter 1</a>
          <ol>
            <li><a href="text/chapter1.xhtml#s1">Section 1.1</a></li>
          </ol>
        </li>
        <li><a href="text/chapter2.xhtml">Chapter 2</a></li>
      </ol>
    </nav>
    <nav epub:type="landmarks" hidden="">
      <ol>
        <li><a epub:type="bodymatter" href="text/chapter1.xhtml">Start</a></li>
      </ol>
    </nav>
  </body>
</html>"#;

pub const EPUB3_SMIL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<smil xmlns="http://www.w3.org/ns/SMIL" xmlns:epub="http://www.idpf.org/2007/ops" version="3.0">
  <body>
    <seq id="s1" epub:textref="../text/chapter1.xhtml#c1">
      <par id="p1">
        <text src="../text/chapter1.xhtml#para1"/>
        <audio src="../audio/chapter1.mp3" clipBegin="0:00:00.000" clipEnd="0:00:12.5"/>
      </par>
      <par id="p2">
        <text src="../text/chapter1.xhtml#para2"/>
        <audio src="../audio/chapter1.mp3" clipBegin="12.5s" clipEnd="30s"/>
      </par>
    </seq>
  </body>
</smil>"#;

/// A complete, valid EPUB 2 book: NCX navigation, meta cover and guide.
pub fn epub2_book() -> Cursor<Vec<u8>> {
    archive(&[
        ("META-INF/container.xml", CONTAINER),
        ("OEBPS/content.opf", EPUB2_OPF),
        ("OEBPS/toc.ncx", EPUB2_NCX),
        ("OEBPS/chapter1.xhtml", CHAPTER),
        ("OEBPS/chapter2.xhtml", CHAPTER),
        ("OEBPS/cover.jpg", "jpg-bytes"),
    ])
}

pub const EPUB2_OPF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="uid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/"
            xmlns:opf="http://www.idpf.org/2007/opf">
    <dc:identifier id="uid" opf:scheme="ISBN">123-456</dc:identifier>
    <dc:title>Legacy Fixture</dc:title>
    <dc:language>en</dc:language>
    <meta name="cover" content="cover-img"/>
  </metadata>
  <manifest>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
    <item id="c1" href="chapter1.xhtml" media-type="application/xhtml+xml"/>
    <item id="c2" href="chapter2.xhtml" media-type="application/xhtml+xml"/>
    <item id="cover-img" href="cover.jpg" media-type="image/jpeg"/>
  </manifest>
  <spine toc="ncx">
    <itemref idref="c1"/>
    <itemref idref="c2" linear="no"/>
  </spine>
  <guide>
    <reference type="cover" title="Cover" href="cover.jpg"/>
  </guide>
</package>"#;

pub const EPUB2_NCX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content="urn:uuid:aa11bb22"/>
  </head>
  <docTitle><text>Legacy Fixture</text></docTitle>
  <navMap>
    <navPoint id="np1" playOrder="1">
      <navLabel><text>Chapter 1</text></navLabel>
      <content src="chapter1.xhtml"/>
      <navPoint id="np2" playOrder="2">
        <navLabel><text>Section 1.1</text></navLabel>
        <content src="chapter1.xhtml#s1"/>
      </navPoint>
    </navPoint>
    <navPoint id="np3" playOrder="3">
      <navLabel><text>Chapter 2</text></navLabel>
      <content src="chapter2.xhtml"/>
    </navPoint>
  </navMap>
</ncx>"#;
