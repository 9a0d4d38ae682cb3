use igniscan_core::catalog::ReferenceCorpusCatalog;
use igniscan_core::config::IgniscanConfig;
use std::path::Path;

pub fn run(config_path: &Path) -> anyhow::Result<i32> {
    let result = IgniscanConfig::load(config_path)
        .and_then(|config| ReferenceCorpusCatalog::load(&config.corpus));
    match result {
        Ok(catalog) => {
            for artifact in catalog.artifacts() {
                println!("{}\t{:?}\t{}", artifact.key, artifact.kind, artifact.locator);
            }
            Ok(0)
        }
        Err(e) => {
            eprintln!("error: {e}");
            Ok(e.exit_code())
        }
    }
}
