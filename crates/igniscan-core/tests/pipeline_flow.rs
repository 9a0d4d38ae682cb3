//! End-to-end flow through the core pipeline with a fake gateway:
//! catalog + profile -> assembler -> gateway -> extractor -> sink.

use async_trait::async_trait;
use igniscan_core::catalog::{CorpusConfig, ReferenceCorpusCatalog};
use igniscan_core::gateway::InferenceGateway;
use igniscan_core::model::{
    Assessment, GenerationParams, MediaKind, ProbeArtifact, PromptBundle,
};
use igniscan_core::service::InspectionService;
use igniscan_core::sink::FileSink;
use igniscan_core::InspectResult;
use std::sync::Arc;

struct ScriptedGateway {
    text: String,
}

#[async_trait]
impl InferenceGateway for ScriptedGateway {
    async fn infer(
        &self,
        _bundle: &PromptBundle,
        _params: &GenerationParams,
    ) -> InspectResult<String> {
        Ok(self.text.clone())
    }

    fn backend_name(&self) -> &'static str {
        "scripted"
    }
}

fn corpus_config() -> CorpusConfig {
    CorpusConfig {
        video_uri: "gs://bucket/manual.mp4".to_string(),
        document_uri: "gs://bucket/spec.pdf".to_string(),
        image_uri_template: "gs://bucket/ref_{n}.jpeg".to_string(),
        image_count: 3,
    }
}

#[tokio::test]
async fn failing_inspection_persists_and_reads_back() {
    let narrative = "\
Black Marks: heavy soot deposit on the insulator base.
Missing Branding: branding is present and legible, normal.
Tip Condition: iridium tip appears melted at the edge.

Summary: two major anomalies detected.
Overall assessment: FAIL";

    let catalog = ReferenceCorpusCatalog::load(&corpus_config()).unwrap();
    let gateway = Arc::new(ScriptedGateway {
        text: narrative.to_string(),
    });
    let svc = InspectionService::new(catalog, gateway, GenerationParams::default());

    let probe = ProbeArtifact::from_bytes(MediaKind::Image, vec![0xff, 0xd8, 0xff]);
    let verdict = svc.inspect(&probe, "focused").await.unwrap();

    assert_eq!(verdict.overall, Assessment::Fail);
    assert_eq!(verdict.narrative, narrative);
    assert!(verdict.finding("Black Marks").unwrap().contains("soot"));
    assert!(verdict.finding("Tip Condition").unwrap().contains("melted"));
    assert!(verdict.finding("Nut Bending").is_none());

    let tmp = tempfile::tempdir().unwrap();
    let sink = FileSink::new(tmp.path());
    let path = sink.write("focused", &verdict).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), narrative);
    assert_eq!(sink.read("focused").unwrap(), verdict);
}

#[tokio::test]
async fn concurrent_requests_share_one_catalog() {
    let catalog = ReferenceCorpusCatalog::load(&corpus_config()).unwrap();
    let gateway = Arc::new(ScriptedGateway {
        text: "All areas normal. Overall assessment: PASS".to_string(),
    });
    let svc = Arc::new(InspectionService::new(
        catalog,
        gateway,
        GenerationParams::default(),
    ));

    // Independent inspections are embarrassingly parallel; nothing in the
    // service is mutated per request.
    let probe_a = ProbeArtifact::from_locator(MediaKind::Image, "gs://uploads/a.jpg");
    let probe_b = ProbeArtifact::from_locator(MediaKind::Image, "gs://uploads/b.jpg");
    let (a, b) = tokio::join!(
        svc.inspect(&probe_a, "lenient"),
        svc.inspect(&probe_b, "strict")
    );
    assert_eq!(a.unwrap().overall, Assessment::Pass);
    assert_eq!(b.unwrap().overall, Assessment::Pass);
}
