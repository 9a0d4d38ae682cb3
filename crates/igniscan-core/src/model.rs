//! Value objects shared across the inspection pipeline.

use serde::{Deserialize, Serialize};

/// Media kind of an artifact, mapped to a MIME type on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Document,
    Image,
}

impl MediaKind {
    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaKind::Video => "video/mp4",
            MediaKind::Document => "application/pdf",
            MediaKind::Image => "image/jpeg",
        }
    }
}

/// One entry of the reference corpus. Immutable once constructed; the
/// catalog holds these in a fixed insertion order, unique by `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceArtifact {
    pub key: String,
    pub kind: MediaKind,
    pub locator: String,
}

/// Where the probe content comes from: a backend-resolvable locator or raw
/// bytes uploaded with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeSource {
    Locator(String),
    Bytes(Vec<u8>),
}

/// The image under inspection. Owned by a single request and dropped after
/// the verdict is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeArtifact {
    pub kind: MediaKind,
    pub source: ProbeSource,
}

impl ProbeArtifact {
    pub fn from_locator(kind: MediaKind, locator: impl Into<String>) -> Self {
        Self {
            kind,
            source: ProbeSource::Locator(locator.into()),
        }
    }

    pub fn from_bytes(kind: MediaKind, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            source: ProbeSource::Bytes(bytes),
        }
    }
}

/// One positional element of the prompt sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPart {
    Instruction(String),
    Probe(ProbeArtifact),
    Reference(ReferenceArtifact),
}

/// Ordered multi-modal message bundle.
///
/// Order invariant: instruction text first, probe second, references after
/// in catalog order. Multi-modal backends infer the probe-vs-reference role
/// primarily from position, so the order is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptBundle {
    pub parts: Vec<PromptPart>,
}

impl PromptBundle {
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Generation parameters forwarded verbatim to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_output_tokens: 2048,
            temperature: 0.2,
            top_p: 0.8,
        }
    }
}

/// Binary inspection outcome. Never unset: an ambiguous or empty narrative
/// degrades to `Fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assessment {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Assessment::Pass => write!(f, "PASS"),
            Assessment::Fail => write!(f, "FAIL"),
        }
    }
}

/// Structured result extracted from the backend's free-text response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionVerdict {
    /// Raw narrative as returned by the backend, unmodified.
    #[serde(rename = "analysis")]
    pub narrative: String,
    #[serde(rename = "overall_assessment")]
    pub overall: Assessment,
    /// Finding text per criterion label, present only for criteria the
    /// narrative clearly addressed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub per_criterion: Vec<(String, String)>,
}

impl InspectionVerdict {
    pub fn passed(&self) -> bool {
        self.overall == Assessment::Pass
    }

    pub fn finding(&self, label: &str) -> Option<&str> {
        self.per_criterion
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, f)| f.as_str())
    }
}
