/// The content-type taxonomy a manifest item is classified into.
///
/// Classification is a fixed, case-insensitive MIME lookup; any MIME
/// parameter (`audio/ogg; codecs=opus`) is stripped before matching, and
/// anything unmatched becomes [`ContentKind::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ContentKind {
    Xhtml,
    Css,
    /// Legacy OEBPS 1.x document.
    Oeb1Document,
    /// Legacy OEBPS 1.x stylesheet.
    Oeb1Css,
    Xml,
    Dtbook,
    DtbookNcx,
    Smil,
    Script,
    ImageGif,
    ImageJpeg,
    ImagePng,
    ImageSvg,
    ImageWebp,
    FontTruetype,
    FontOpentype,
    FontWoff,
    FontWoff2,
    AudioMp3,
    AudioMp4,
    AudioOgg,
    #[default]
    Other,
}

impl ContentKind {
    /// Classifies a raw MIME string.
    pub fn of(media_type: &str) -> Self {
        let mut normalized = media_type.trim().to_ascii_lowercase();
        // Drop any MIME parameter, e.g. `; codecs=opus`.
        if let Some(position) = normalized.find(';') {
            normalized.truncate(position);
            normalized.truncate(normalized.trim_end().len());
        }

        match normalized.as_str() {
            "application/xhtml+xml" => Self::Xhtml,
            "text/css" => Self::Css,
            "text/x-oeb1-document" => Self::Oeb1Document,
            "text/x-oeb1-css" => Self::Oeb1Css,
            "application/xml" | "text/xml" => Self::Xml,
            "application/x-dtbook+xml" => Self::Dtbook,
            "application/x-dtbncx+xml" => Self::DtbookNcx,
            "application/smil+xml" => Self::Smil,
            "application/javascript" | "application/ecmascript" | "text/javascript" => Self::Script,
            "image/gif" => Self::ImageGif,
            "image/jpeg" => Self::ImageJpeg,
            "image/png" => Self::ImagePng,
            "image/svg+xml" => Self::ImageSvg,
            "image/webp" => Self::ImageWebp,
            "font/truetype" | "font/ttf" | "application/x-font-truetype" => Self::FontTruetype,
            "font/opentype" | "font/otf" | "application/vnd.ms-opentype" => Self::FontOpentype,
            "font/woff" | "application/font-woff" => Self::FontWoff,
            "font/woff2" => Self::FontWoff2,
            "audio/mpeg" => Self::AudioMp3,
            "audio/mp4" => Self::AudioMp4,
            "audio/ogg" | "application/ogg" => Self::AudioOgg,
            _ => Self::Other,
        }
    }

    /// Whether payloads of this kind are read as text rather than bytes.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::Xhtml
                | Self::Css
                | Self::Oeb1Document
                | Self::Oeb1Css
                | Self::Xml
                | Self::Dtbook
                | Self::DtbookNcx
                | Self::Smil
                | Self::Script
        )
    }

    pub fn is_image(self) -> bool {
        matches!(
            self,
            Self::ImageGif | Self::ImageJpeg | Self::ImagePng | Self::ImageSvg | Self::ImageWebp
        )
    }

    pub fn is_font(self) -> bool {
        matches!(
            self,
            Self::FontTruetype | Self::FontOpentype | Self::FontWoff | Self::FontWoff2
        )
    }

    pub fn is_audio(self) -> bool {
        matches!(self, Self::AudioMp3 | Self::AudioMp4 | Self::AudioOgg)
    }
}

#[cfg(test)]
mod tests {
    use super::ContentKind;

    #[test]
    fn classification_table() {
        #[rustfmt::skip]
        let expected = [
            (ContentKind::Xhtml, "application/xhtml+xml"),
            (ContentKind::Xhtml, "APPLICATION/XHTML+XML"),
            (ContentKind::Css, "text/css"),
            (ContentKind::FontTruetype, "font/truetype"),
            (ContentKind::FontTruetype, "font/ttf"),
            (ContentKind::FontTruetype, "application/x-font-truetype"),
            (ContentKind::Script, "text/javascript"),
            (ContentKind::Script, "application/ecmascript"),
            (ContentKind::AudioOgg, "audio/ogg"),
            (ContentKind::AudioOgg, "audio/ogg; codecs=opus"),
            (ContentKind::AudioOgg, "application/ogg"),
            (ContentKind::Smil, "application/smil+xml"),
            (ContentKind::DtbookNcx, "application/x-dtbncx+xml"),
            (ContentKind::Other, "application/pdf"),
            (ContentKind::Other, ""),
        ];

        for (kind, media_type) in expected {
            assert_eq!(kind, ContentKind::of(media_type), "for {media_type:?}");
        }
    }

    #[test]
    fn flavor_predicates() {
        assert!(ContentKind::Xhtml.is_text());
        assert!(ContentKind::Smil.is_text());
        assert!(!ContentKind::ImagePng.is_text());
        assert!(ContentKind::ImageWebp.is_image());
        assert!(ContentKind::FontWoff2.is_font());
        assert!(ContentKind::AudioMp4.is_audio());
        assert!(!ContentKind::Other.is_text());
    }
}
