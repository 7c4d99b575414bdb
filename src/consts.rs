// General attributes
pub(crate) const ID: &str = "id";
pub(crate) const HREF: &str = "href";
pub(crate) const SRC: &str = "src";
pub(crate) const LANG: &str = "xml:lang";
pub(crate) const DIR: &str = "dir";
pub(crate) const CLASS: &str = "class";
pub(crate) const TITLE: &str = "title";

// Paths
pub(crate) const CONTAINER: &str = "META-INF/container.xml";

// Container elements & attributes
pub(crate) const ROOT_FILES: &str = "rootfiles";
pub(crate) const ROOT_FILE: &str = "rootfile";
pub(crate) const FULL_PATH: &str = "full-path";
pub(crate) const PACKAGE_TYPE: &str = "application/oebps-package+xml";

// Package elements
pub(crate) const PACKAGE: &str = "package";
pub(crate) const METADATA: &str = "metadata";
pub(crate) const MANIFEST: &str = "manifest";
pub(crate) const SPINE: &str = "spine";
pub(crate) const GUIDE: &str = "guide";
pub(crate) const COLLECTION: &str = "collection";
pub(crate) const ITEM: &str = "item";
pub(crate) const ITEMREF: &str = "itemref";
pub(crate) const REFERENCE: &str = "reference";
pub(crate) const META: &str = "meta";
pub(crate) const LINK: &str = "link";

// Package attributes
pub(crate) const VERSION: &str = "version";
pub(crate) const UNIQUE_ID: &str = "unique-identifier";

// Metadata attributes
pub(crate) const NAME: &str = "name";
pub(crate) const CONTENT: &str = "content";
pub(crate) const PROPERTY: &str = "property";
pub(crate) const REFINES: &str = "refines";
pub(crate) const SCHEME: &str = "scheme";
pub(crate) const REL: &str = "rel";
pub(crate) const ROLE: &str = "role";
pub(crate) const FILE_AS: &str = "file-as";
pub(crate) const OPF_ROLE: &str = "opf:role";
pub(crate) const OPF_FILE_AS: &str = "opf:file-as";
pub(crate) const OPF_SCHEME: &str = "opf:scheme";

// Manifest attributes
pub(crate) const MEDIA_TYPE: &str = "media-type";
pub(crate) const MEDIA_OVERLAY: &str = "media-overlay";
pub(crate) const FALLBACK: &str = "fallback";
pub(crate) const FALLBACK_STYLE: &str = "fallback-style";
pub(crate) const REQUIRED_NAMESPACE: &str = "required-namespace";
pub(crate) const REQUIRED_MODULES: &str = "required-modules";
pub(crate) const PROPERTIES: &str = "properties";

// Manifest item properties
pub(crate) const COVER_IMAGE_PROPERTY: &str = "cover-image";
pub(crate) const NAV_PROPERTY: &str = "nav";

// Legacy cover metadata
pub(crate) const COVER: &str = "cover";

// Spine attributes
pub(crate) const IDREF: &str = "idref";
pub(crate) const LINEAR: &str = "linear";
pub(crate) const TOC: &str = "toc";
pub(crate) const PAGE_PROGRESSION_DIRECTION: &str = "page-progression-direction";

// Guide attributes
pub(crate) const TYPE: &str = "type";

// NCX elements & attributes
pub(crate) const NCX: &str = "ncx";
pub(crate) const HEAD: &str = "head";
pub(crate) const DOC_TITLE: &str = "docTitle";
pub(crate) const DOC_AUTHOR: &str = "docAuthor";
pub(crate) const NAV_MAP: &str = "navMap";
pub(crate) const NAV_POINT: &str = "navPoint";
pub(crate) const NAV_LABEL: &str = "navLabel";
pub(crate) const NAV_LIST: &str = "navList";
pub(crate) const NAV_TARGET: &str = "navTarget";
pub(crate) const PAGE_LIST: &str = "pageList";
pub(crate) const PAGE_TARGET: &str = "pageTarget";
pub(crate) const TEXT: &str = "text";
pub(crate) const NCX_CONTENT: &str = "content";
pub(crate) const PLAY_ORDER: &str = "playOrder";
pub(crate) const VALUE: &str = "value";

// Navigation document elements & attributes
pub(crate) const HTML: &str = "html";
pub(crate) const BODY: &str = "body";
pub(crate) const NAV: &str = "nav";
pub(crate) const ORDERED_LIST: &str = "ol";
pub(crate) const LIST_ITEM: &str = "li";
pub(crate) const ANCHOR: &str = "a";
pub(crate) const SPAN: &str = "span";
pub(crate) const HIDDEN: &str = "hidden";
pub(crate) const ALT: &str = "alt";
pub(crate) const EPUB_TYPE: &str = "epub:type";
pub(crate) const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

// SMIL elements & attributes
pub(crate) const SMIL: &str = "smil";
pub(crate) const SEQ: &str = "seq";
pub(crate) const PAR: &str = "par";
pub(crate) const AUDIO: &str = "audio";
pub(crate) const EPUB_PREFIX: &str = "epub:prefix";
pub(crate) const EPUB_TEXTREF: &str = "epub:textref";
pub(crate) const CLIP_BEGIN: &str = "clipBegin";
pub(crate) const CLIP_END: &str = "clipEnd";
pub(crate) const SMIL_VERSION: &str = "3.0";
pub(crate) const SMIL_TYPE: &str = "application/smil+xml";
