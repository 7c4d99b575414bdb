//! Models for media overlay (SMIL) documents.

use crate::schema::SmilClock;
use crate::xml::XmlElement;

/// A parsed media overlay document.
///
/// Only SMIL version `3.0` is accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct Smil {
    /// Archive path of the document.
    pub path: String,
    pub id: Option<String>,
    pub version: String,
    pub epub_prefix: Option<String>,
    pub head: Option<SmilHead>,
    pub body: SmilBody,
}

/// The optional `head/metadata` element, captured opaquely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmilHead {
    /// Child nodes of `metadata`, uninterpreted.
    pub metadata: Vec<XmlElement>,
}

/// The `body` element; holds at least one seq or par.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmilBody {
    pub id: Option<String>,
    pub epub_types: Vec<String>,
    pub textref: Option<String>,
    pub seqs: Vec<SmilSeq>,
    pub pars: Vec<SmilPar>,
}

/// A `seq` element, recursive; holds at least one seq or par.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmilSeq {
    pub id: Option<String>,
    pub epub_types: Vec<String>,
    pub textref: Option<String>,
    pub seqs: Vec<SmilSeq>,
    pub pars: Vec<SmilPar>,
}

/// A `par` leaf pairing a text fragment with an optional audio clip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmilPar {
    pub id: Option<String>,
    pub epub_types: Vec<String>,
    pub text: SmilText,
    pub audio: Option<SmilAudio>,
}

/// A `text` element; `src` is mandatory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmilText {
    pub id: Option<String>,
    pub src: String,
}

/// An `audio` element with raw clip boundaries.
///
/// `clip_begin`/`clip_end` are preserved verbatim; they are only run
/// through the clock parser when a consumer asks for them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmilAudio {
    pub id: Option<String>,
    pub src: String,
    pub clip_begin: Option<String>,
    pub clip_end: Option<String>,
}

impl SmilAudio {
    /// The parsed `clipBegin` timestamp, if present and well-formed.
    pub fn clip_begin_clock(&self) -> Option<SmilClock> {
        self.clip_begin.as_deref().and_then(SmilClock::parse)
    }

    /// The parsed `clipEnd` timestamp, if present and well-formed.
    pub fn clip_end_clock(&self) -> Option<SmilClock> {
        self.clip_end.as_deref().and_then(SmilClock::parse)
    }
}
