//! Core pipeline for automated spark plug inspection: a probe image is
//! bundled with a fixed multi-modal reference corpus and submitted to a
//! generative inference backend, and the free-text response is reduced to a
//! structured PASS/FAIL verdict.
//!
//! Data flows strictly left to right:
//! catalog + profile -> assembler -> gateway -> extractor -> sink.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod model;
pub mod profile;
pub mod prompt;
pub mod service;
pub mod sink;
pub mod verdict;

pub use catalog::{CorpusConfig, ReferenceCorpusCatalog};
pub use config::IgniscanConfig;
pub use errors::{InspectError, InspectResult};
pub use gateway::InferenceGateway;
pub use model::{
    Assessment, GenerationParams, InspectionVerdict, MediaKind, ProbeArtifact, ProbeSource,
    PromptBundle, PromptPart, ReferenceArtifact,
};
pub use profile::{CriterionSpec, SeverityProfile};
pub use service::InspectionService;
