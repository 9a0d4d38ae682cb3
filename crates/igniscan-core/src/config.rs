//! Deployment configuration: the fixed surface of knobs the pipeline
//! recognizes, loaded from YAML.

use crate::catalog::CorpusConfig;
use crate::errors::{InspectError, InspectResult};
use crate::gateway::BackendConfig;
use crate::model::GenerationParams;
use crate::profile::SeverityProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IgniscanConfig {
    pub backend: BackendConfig,
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub generation: GenerationParams,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_profile")]
    pub default_profile: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("spark_plug_analysis_results")
}

fn default_profile() -> String {
    "lenient".to_string()
}

impl IgniscanConfig {
    pub fn load(path: &Path) -> InspectResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            InspectError::config(format!("failed to read config {}: {e}", path.display()))
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> InspectResult<Self> {
        let config: Self = serde_yaml::from_str(raw)
            .map_err(|e| InspectError::config(format!("failed to parse yaml: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> InspectResult<()> {
        // Reject a bad default profile at load time, not at first request.
        SeverityProfile::resolve(&self.default_profile)?;
        if self.backend.project.trim().is_empty() || self.backend.location.trim().is_empty() {
            return Err(InspectError::config(
                "backend project and location must be set",
            ));
        }
        Ok(())
    }
}
