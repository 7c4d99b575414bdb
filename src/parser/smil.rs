use crate::consts;
use crate::errors::{EpubError, EpubResult};
use crate::schema::{Smil, SmilAudio, SmilBody, SmilHead, SmilPar, SmilSeq, SmilText};
use crate::xml::XmlElement;

/// Parses a media overlay document into a [`Smil`].
///
/// Only version `3.0` is accepted. Clip boundaries are captured verbatim;
/// malformed clock strings are not an error at this layer.
pub fn parse_smil(smil: &XmlElement, path: &str) -> EpubResult<Smil> {
    SmilParser { path }.parse(smil)
}

struct SmilParser<'a> {
    path: &'a str,
}

impl SmilParser<'_> {
    fn parse(&self, smil: &XmlElement) -> EpubResult<Smil> {
        if !smil.is_named(consts::SMIL) {
            return Err(self.error("missing `smil` element"));
        }

        let version = smil
            .attr(consts::VERSION)
            .ok_or_else(|| self.error("missing `version` attribute"))?;
        if version != consts::SMIL_VERSION {
            return Err(self.error(format!("unsupported SMIL version: `{version}`")));
        }

        let body = smil
            .first_child(consts::BODY)
            .ok_or_else(|| self.error("missing `body` element"))?;
        let (seqs, pars) = self.parse_level(body, consts::BODY)?;

        Ok(Smil {
            path: self.path.to_owned(),
            id: attr_owned(smil, consts::ID),
            version: version.to_owned(),
            epub_prefix: attr_owned(smil, consts::EPUB_PREFIX),
            head: parse_head(smil),
            body: SmilBody {
                id: attr_owned(body, consts::ID),
                epub_types: epub_types(body),
                textref: attr_owned(body, consts::EPUB_TEXTREF),
                seqs,
                pars,
            },
        })
    }

    /// Each `body` or `seq` level must hold at least one `seq` or `par`.
    fn parse_level(
        &self,
        el: &XmlElement,
        level: &str,
    ) -> EpubResult<(Vec<SmilSeq>, Vec<SmilPar>)> {
        let seqs = el
            .children_named(consts::SEQ)
            .map(|seq| self.parse_seq(seq))
            .collect::<EpubResult<Vec<_>>>()?;
        let pars = el
            .children_named(consts::PAR)
            .map(|par| self.parse_par(par))
            .collect::<EpubResult<Vec<_>>>()?;

        if seqs.is_empty() && pars.is_empty() {
            return Err(self.error(format!(
                "`{level}` must contain at least one `seq` or `par` element"
            )));
        }
        Ok((seqs, pars))
    }

    fn parse_seq(&self, seq: &XmlElement) -> EpubResult<SmilSeq> {
        let (seqs, pars) = self.parse_level(seq, consts::SEQ)?;

        Ok(SmilSeq {
            id: attr_owned(seq, consts::ID),
            epub_types: epub_types(seq),
            textref: attr_owned(seq, consts::EPUB_TEXTREF),
            seqs,
            pars,
        })
    }

    fn parse_par(&self, par: &XmlElement) -> EpubResult<SmilPar> {
        let mut texts = par.children_named(consts::TEXT);
        let text = texts
            .next()
            .ok_or_else(|| self.error("`par` must contain a `text` element"))?;
        if texts.next().is_some() {
            return Err(self.error("`par` must contain exactly one `text` element"));
        }

        Ok(SmilPar {
            id: attr_owned(par, consts::ID),
            epub_types: epub_types(par),
            text: SmilText {
                id: attr_owned(text, consts::ID),
                src: self.mandatory_src(text, consts::TEXT)?,
            },
            audio: par
                .first_child(consts::AUDIO)
                .map(|audio| self.parse_audio(audio))
                .transpose()?,
        })
    }

    fn parse_audio(&self, audio: &XmlElement) -> EpubResult<SmilAudio> {
        Ok(SmilAudio {
            id: attr_owned(audio, consts::ID),
            src: self.mandatory_src(audio, consts::AUDIO)?,
            clip_begin: attr_owned(audio, consts::CLIP_BEGIN),
            clip_end: attr_owned(audio, consts::CLIP_END),
        })
    }

    fn mandatory_src(&self, el: &XmlElement, name: &str) -> EpubResult<String> {
        el.attr(consts::SRC)
            .map(str::to_owned)
            .ok_or_else(|| self.error(format!("`{name}` missing `src` attribute")))
    }

    fn error(&self, message: impl Into<String>) -> EpubError {
        EpubError::MediaOverlay {
            path: self.path.to_owned(),
            message: message.into(),
        }
    }
}

fn parse_head(smil: &XmlElement) -> Option<SmilHead> {
    smil.first_child(consts::HEAD).map(|head| SmilHead {
        metadata: head
            .first_child(consts::METADATA)
            .map(|metadata| metadata.children().to_vec())
            .unwrap_or_default(),
    })
}

fn epub_types(el: &XmlElement) -> Vec<String> {
    el.attr(consts::EPUB_TYPE)
        .unwrap_or_default()
        .split_ascii_whitespace()
        .map(str::to_owned)
        .collect()
}

fn attr_owned(el: &XmlElement, name: &str) -> Option<String> {
    el.attr(name).map(str::to_owned)
}
