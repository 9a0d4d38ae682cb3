//! Result sink: persists verdicts to a configured output directory with a
//! profile-specific filename.

use crate::errors::{InspectError, InspectResult};
use crate::model::InspectionVerdict;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the raw narrative to `<profile>_analysis_result.txt` plus a JSON
/// sidecar of the structured verdict. The narrative file is byte-identical
/// to the backend text, so reading it back is lossless.
#[derive(Debug, Clone)]
pub struct FileSink {
    output_dir: PathBuf,
}

impl FileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn narrative_path(&self, profile_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{profile_name}_analysis_result.txt"))
    }

    pub fn verdict_path(&self, profile_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{profile_name}_analysis_result.json"))
    }

    /// Persists the verdict and returns the narrative path.
    pub fn write(
        &self,
        profile_name: &str,
        verdict: &InspectionVerdict,
    ) -> InspectResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| sink_error(&self.output_dir, e.to_string()))?;

        let narrative_path = self.narrative_path(profile_name);
        fs::write(&narrative_path, &verdict.narrative)
            .map_err(|e| sink_error(&narrative_path, e.to_string()))?;

        let verdict_path = self.verdict_path(profile_name);
        let json = serde_json::to_string_pretty(verdict)
            .map_err(|e| sink_error(&verdict_path, e.to_string()))?;
        fs::write(&verdict_path, json).map_err(|e| sink_error(&verdict_path, e.to_string()))?;

        Ok(narrative_path)
    }

    /// Reads a previously persisted structured verdict back.
    pub fn read(&self, profile_name: &str) -> InspectResult<InspectionVerdict> {
        let path = self.verdict_path(profile_name);
        let json = fs::read_to_string(&path).map_err(|e| sink_error(&path, e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| sink_error(&path, e.to_string()))
    }
}

fn sink_error(path: &Path, message: String) -> InspectError {
    InspectError::Sink {
        path: path.display().to_string(),
        message,
    }
}
