//! Inspection service: ties catalog, profile, assembler, gateway, and
//! extractor together for one request.

use crate::catalog::ReferenceCorpusCatalog;
use crate::errors::{InspectError, InspectResult};
use crate::gateway::InferenceGateway;
use crate::model::{GenerationParams, InspectionVerdict, ProbeArtifact};
use crate::profile::SeverityProfile;
use crate::{prompt, verdict};
use std::sync::Arc;
use tracing::info;

/// One service instance per deployment. The catalog is loaded once and
/// read-only afterwards, so a single service is safely shared across
/// concurrent inspection requests.
#[derive(Clone)]
pub struct InspectionService {
    catalog: ReferenceCorpusCatalog,
    gateway: Arc<dyn InferenceGateway>,
    params: GenerationParams,
}

impl InspectionService {
    pub fn new(
        catalog: ReferenceCorpusCatalog,
        gateway: Arc<dyn InferenceGateway>,
        params: GenerationParams,
    ) -> Self {
        Self {
            catalog,
            gateway,
            params,
        }
    }

    pub fn catalog(&self) -> &ReferenceCorpusCatalog {
        &self.catalog
    }

    /// Runs one inspection: resolve profile, assemble bundle, call the
    /// backend, extract the verdict.
    ///
    /// The profile is resolved before the gateway is touched, so an unknown
    /// profile name never costs an inference call. A gateway failure
    /// surfaces as `InferenceFailure`; it is never folded into a FAIL
    /// verdict.
    pub async fn inspect(
        &self,
        probe: &ProbeArtifact,
        profile_name: &str,
    ) -> InspectResult<InspectionVerdict> {
        let profile = SeverityProfile::resolve(profile_name)?;

        let bundle = prompt::assemble(probe, &self.catalog, profile);
        let text = self.gateway.infer(&bundle, &self.params).await?;
        if text.trim().is_empty() {
            return Err(InspectError::inference(
                self.gateway.backend_name(),
                "backend returned no usable text",
            ));
        }

        let verdict = verdict::extract(&text, profile);
        info!(
            profile = profile_name,
            overall = %verdict.overall,
            findings = verdict.per_criterion.len(),
            "inspection complete"
        );
        Ok(verdict)
    }
}
