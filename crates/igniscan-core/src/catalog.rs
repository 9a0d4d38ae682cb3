//! Reference corpus catalog: resolves the fixed set of logical reference
//! keys (one video, one document, N images) to content handles.
//!
//! Only handle resolution happens here. The underlying bytes are fetched by
//! the inference backend when the bundle is submitted; unreachable bytes at
//! that point are an inference failure, not a corpus failure.

use crate::errors::{InspectError, InspectResult};
use crate::model::{MediaKind, ReferenceArtifact};
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the 1-based image index in
/// `image_uri_template`.
const IMAGE_INDEX_PLACEHOLDER: &str = "{n}";

/// Locators for the reference corpus of one deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    /// Locator of the demonstration video.
    pub video_uri: String,
    /// Locator of the specification document.
    pub document_uri: String,
    /// Template for known-good image locators; `{n}` is replaced with the
    /// 1-based image index.
    pub image_uri_template: String,
    /// Number of known-good images. A deployment parameter, not a literal.
    pub image_count: u32,
}

/// The fixed, insertion-ordered reference corpus. Read-only after `load`,
/// safe to share across concurrent inspection requests.
#[derive(Debug, Clone)]
pub struct ReferenceCorpusCatalog {
    entries: Vec<ReferenceArtifact>,
}

impl ReferenceCorpusCatalog {
    /// Resolves every configured locator into an ordered catalog:
    /// `video`, `document`, then `reference_image_1..=N`.
    ///
    /// Loading twice with the same config yields identically ordered keys.
    pub fn load(config: &CorpusConfig) -> InspectResult<Self> {
        let mut entries = Vec::with_capacity(2 + config.image_count as usize);

        entries.push(resolve_handle("video", MediaKind::Video, &config.video_uri)?);
        entries.push(resolve_handle(
            "document",
            MediaKind::Document,
            &config.document_uri,
        )?);

        if !config.image_uri_template.contains(IMAGE_INDEX_PLACEHOLDER) {
            return Err(InspectError::CorpusUnavailable {
                key: "reference_image".to_string(),
                locator: config.image_uri_template.clone(),
                reason: format!("image_uri_template is missing '{IMAGE_INDEX_PLACEHOLDER}'"),
            });
        }
        for i in 1..=config.image_count {
            let locator = config
                .image_uri_template
                .replace(IMAGE_INDEX_PLACEHOLDER, &i.to_string());
            entries.push(resolve_handle(
                &format!("reference_image_{i}"),
                MediaKind::Image,
                &locator,
            )?);
        }

        Ok(Self { entries })
    }

    /// Artifacts in catalog insertion order.
    pub fn artifacts(&self) -> &[ReferenceArtifact] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&ReferenceArtifact> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn resolve_handle(key: &str, kind: MediaKind, locator: &str) -> InspectResult<ReferenceArtifact> {
    let trimmed = locator.trim();
    if trimmed.is_empty() {
        return Err(InspectError::CorpusUnavailable {
            key: key.to_string(),
            locator: locator.to_string(),
            reason: "empty locator".to_string(),
        });
    }
    // Backends resolve object-store and https handles; anything without a
    // scheme cannot be turned into a handle at all.
    if !trimmed.contains("://") {
        return Err(InspectError::CorpusUnavailable {
            key: key.to_string(),
            locator: locator.to_string(),
            reason: "locator has no scheme".to_string(),
        });
    }
    Ok(ReferenceArtifact {
        key: key.to_string(),
        kind,
        locator: trimmed.to_string(),
    })
}
