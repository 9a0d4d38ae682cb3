use crate::cli::args::InspectArgs;
use igniscan_core::catalog::ReferenceCorpusCatalog;
use igniscan_core::config::IgniscanConfig;
use igniscan_core::gateway::GeminiClient;
use igniscan_core::model::{MediaKind, ProbeArtifact};
use igniscan_core::profile::SeverityProfile;
use igniscan_core::service::InspectionService;
use igniscan_core::sink::FileSink;
use igniscan_core::{InspectError, InspectResult};
use std::path::Path;
use std::sync::Arc;

const TOKEN_ENV: &str = "IGNISCAN_ACCESS_TOKEN";

pub async fn run(config_path: &Path, args: InspectArgs) -> anyhow::Result<i32> {
    match run_inner(config_path, args).await {
        Ok(code) => Ok(code),
        Err(e) => {
            eprintln!("error: {e}");
            Ok(e.exit_code())
        }
    }
}

async fn run_inner(config_path: &Path, args: InspectArgs) -> InspectResult<i32> {
    let config = IgniscanConfig::load(config_path)?;

    // Resolve the profile before anything else: an unknown name must be
    // rejected without costing an inference call.
    let profile_name = args
        .profile
        .as_deref()
        .unwrap_or(&config.default_profile)
        .to_string();
    let profile = SeverityProfile::resolve(&profile_name)?;

    let probe = build_probe(&args.probe)?;
    let catalog = ReferenceCorpusCatalog::load(&config.corpus)?;

    let access_token = std::env::var(TOKEN_ENV)
        .map_err(|_| InspectError::config(format!("{TOKEN_ENV} is not set")))?;
    let gateway = Arc::new(GeminiClient::new(config.backend.clone(), access_token));

    let service = InspectionService::new(catalog, gateway, config.generation);
    let verdict = service.inspect(&probe, &profile.name).await?;

    if args.json {
        let json = serde_json::to_string_pretty(&verdict)
            .map_err(|e| InspectError::config(e.to_string()))?;
        println!("{json}");
    } else {
        let output_dir = args.output_dir.unwrap_or_else(|| config.output_dir.clone());
        let sink = FileSink::new(output_dir);
        let path = sink.write(&profile.name, &verdict)?;
        println!(
            "{} inspection complete: {} (result saved in {})",
            profile.name,
            verdict.overall,
            path.display()
        );
    }

    // A FAIL verdict is still a successful inspection; only pipeline errors
    // map to non-zero exit codes.
    Ok(0)
}

fn build_probe(input: &str) -> InspectResult<ProbeArtifact> {
    if input.contains("://") {
        return Ok(ProbeArtifact::from_locator(MediaKind::Image, input));
    }
    let bytes = std::fs::read(input).map_err(|e| {
        InspectError::config(format!("failed to read probe image {input}: {e}"))
    })?;
    Ok(ProbeArtifact::from_bytes(MediaKind::Image, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use igniscan_core::model::ProbeSource;

    #[test]
    fn locator_probe_is_passed_through() {
        let probe = build_probe("gs://uploads/probe.jpg").unwrap();
        assert_eq!(
            probe.source,
            ProbeSource::Locator("gs://uploads/probe.jpg".to_string())
        );
    }

    #[test]
    fn local_file_probe_is_read_inline() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("probe.jpg");
        std::fs::write(&path, [0xff, 0xd8]).unwrap();
        let probe = build_probe(path.to_str().unwrap()).unwrap();
        assert_eq!(probe.source, ProbeSource::Bytes(vec![0xff, 0xd8]));
    }

    #[test]
    fn missing_probe_file_is_a_config_error() {
        let err = build_probe("does-not-exist.jpg").unwrap_err();
        assert!(matches!(err, InspectError::Config { .. }));
    }
}
