//! Prompt assembly: instruction text, then the probe, then every reference
//! artifact in catalog order.

use crate::catalog::ReferenceCorpusCatalog;
use crate::model::{ProbeArtifact, PromptBundle, PromptPart};
use crate::profile::SeverityProfile;

/// Builds the ordered multi-modal bundle for one inspection request.
///
/// Deterministic: identical inputs produce identical part ordering and
/// identical instruction text. Nothing is dropped, reordered, or transcoded
/// here; backends infer the probe-vs-reference role from position.
pub fn assemble(
    probe: &ProbeArtifact,
    catalog: &ReferenceCorpusCatalog,
    profile: &SeverityProfile,
) -> PromptBundle {
    let mut parts = Vec::with_capacity(2 + catalog.len());
    parts.push(PromptPart::Instruction(
        profile.instruction_template.clone(),
    ));
    parts.push(PromptPart::Probe(probe.clone()));
    for artifact in catalog.artifacts() {
        parts.push(PromptPart::Reference(artifact.clone()));
    }
    PromptBundle { parts }
}
