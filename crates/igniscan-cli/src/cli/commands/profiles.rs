use igniscan_core::profile::SeverityProfile;

pub fn run() -> anyhow::Result<i32> {
    for name in SeverityProfile::names() {
        let profile = SeverityProfile::resolve(name)?;
        println!("{name} ({} criteria)", profile.criteria.len());
        for criterion in &profile.criteria {
            println!("  - {}: {}", criterion.label, criterion.description);
        }
    }
    Ok(0)
}
