//! Severity profiles: named policies controlling which defects are flagged
//! and how strictly.
//!
//! Each profile is a data value (instruction template + ordered criteria),
//! not a code path. Adding a profile means adding an entry to the registry
//! table; the assembler and extractor are profile-agnostic.

use crate::errors::{InspectError, InspectResult};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One inspection criterion evaluated by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub label: String,
    pub description: String,
}

/// A named inspection policy. Immutable constant; the three built-in
/// instances are `lenient`, `strict`, and `focused`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityProfile {
    pub name: String,
    /// Complete, self-contained instruction text for the backend. Fixed per
    /// profile; no interpolation happens at assembly time.
    pub instruction_template: String,
    pub criteria: Vec<CriterionSpec>,
}

impl SeverityProfile {
    /// Looks up a built-in profile. Fails with `UnknownProfile` before any
    /// inference work can start.
    pub fn resolve(name: &str) -> InspectResult<&'static SeverityProfile> {
        builtin()
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| InspectError::UnknownProfile {
                name: name.to_string(),
            })
    }

    /// Names of all built-in profiles, registry order.
    pub fn names() -> Vec<&'static str> {
        builtin().iter().map(|p| p.name.as_str()).collect()
    }
}

fn builtin() -> &'static [SeverityProfile] {
    static PROFILES: OnceLock<Vec<SeverityProfile>> = OnceLock::new();
    PROFILES.get_or_init(|| vec![lenient(), strict(), focused()])
}

fn criterion(label: &str, description: &str) -> CriterionSpec {
    CriterionSpec {
        label: label.to_string(),
        description: description.to_string(),
    }
}

/// Flags only gross defects; cosmetic variance within the range seen in the
/// reference images must not be flagged.
fn lenient() -> SeverityProfile {
    SeverityProfile {
        name: "lenient".to_string(),
        instruction_template: LENIENT_INSTRUCTIONS.to_string(),
        criteria: vec![
            criterion(
                "Thread Section",
                "Significant damage or deformation of threads.",
            ),
            criterion(
                "Hexagonal Nut",
                "Major damage or distortion of the hexagonal shape.",
            ),
            criterion(
                "Insulator",
                "Large cracks, chips, or major discoloration of the white ceramic.",
            ),
            criterion(
                "Branding and Markings",
                "Branding and model number clearly visible and not significantly damaged.",
            ),
            criterion(
                "Electrodes",
                "Obvious misalignment or major damage to the electrodes.",
            ),
            criterion(
                "Precious Metal Tip",
                "Presence and general condition of the iridium tip.",
            ),
            criterion(
                "Metal Shell",
                "Extensive corrosion or major damage to the metal shell.",
            ),
        ],
    }
}

/// Flags any deviation from perfect condition, however minor; unclear
/// features count as potential anomalies.
fn strict() -> SeverityProfile {
    SeverityProfile {
        name: "strict".to_string(),
        instruction_template: STRICT_INSTRUCTIONS.to_string(),
        criteria: vec![
            criterion(
                "Thread Section",
                "Exactly 18-19 threads, perfectly clean and uniformly spaced, no wear or cross-threading.",
            ),
            criterion(
                "Hexagonal Nut",
                "Perfect hexagonal shape with sharp, undamaged edges and no tool marks.",
            ),
            criterion(
                "Insulator",
                "Pristine white ceramic, no discoloration, chips, or cracks, perfectly seated.",
            ),
            criterion(
                "Branding and Markings",
                "Branding in perfect light blue, model number crisp, all markings aligned and undamaged.",
            ),
            criterion(
                "Electrodes",
                "Center and ground electrodes in perfect alignment, precise uniform gap, no erosion.",
            ),
            criterion(
                "Precious Metal Tip",
                "Iridium tip perfectly formed, fine and pointed, no wear or deformation.",
            ),
            criterion(
                "Seal Ring",
                "Present, perfectly seated, undamaged, no compression or deformation.",
            ),
            criterion(
                "Metal Shell",
                "No corrosion, scratches, or marks; perfectly uniform plating.",
            ),
            criterion(
                "Overall Dimensions and Proportions",
                "Exactly consistent with specifications.",
            ),
            criterion(
                "Manufacturing Quality",
                "No signs of poor assembly, misalignments, or residues.",
            ),
            criterion(
                "Packaging",
                "If visible: pristine, undamaged, and properly sealed.",
            ),
        ],
    }
}

/// Flags only five named defect categories; anomalies outside them must not
/// be reported.
fn focused() -> SeverityProfile {
    SeverityProfile {
        name: "focused".to_string(),
        instruction_template: FOCUSED_INSTRUCTIONS.to_string(),
        criteria: vec![
            criterion(
                "Black Marks",
                "Noticeable black marks or discolorations.",
            ),
            criterion(
                "Missing Branding",
                "Branding or model number absent or unreadable.",
            ),
            criterion(
                "Missing Parts",
                "Essential parts absent (hexagonal nut, insulator, metal shell, precious metal tip).",
            ),
            criterion(
                "Nut Bending",
                "Significant bending or distortion of the hexagonal nut.",
            ),
            criterion(
                "Tip Condition",
                "Precious metal tip blurred, damaged, worn, melted, or deformed.",
            ),
        ],
    }
}

const LENIENT_INSTRUCTIONS: &str = "\
You are a quality control AI for laser iridium spark plugs. Analyze the \
uploaded image and detect significant anomalies by comparing it to the \
provided reference materials. Focus on major issues such as black marks, \
extreme scratches, or substantial deviations from the expected appearance.

Reference standard: the provided reference images represent spark plugs \
without issues; use them as the benchmark for how a proper spark plug \
should look.

Significant anomaly criteria:
- Black Marks: noticeable black marks or discolorations not present in the \
reference images.
- Extreme Scratches: deep or extensive scratches that significantly alter \
the surface appearance.
- Major Deviations: substantial differences in shape, size, or overall \
appearance compared to the reference images.

Inspection areas:
1. Thread Section: check for significant damage or deformation of threads.
2. Hexagonal Nut: look for major damage or distortion of the hexagonal shape.
3. Insulator: identify large cracks, chips, or major discoloration of the \
white ceramic.
4. Branding and Markings: verify the branding and model number are clearly \
visible and not significantly damaged.
5. Electrodes: check for obvious misalignment or major damage.
6. Precious Metal Tip: verify the presence and general condition of the \
iridium tip.
7. Metal Shell: look for extensive corrosion or major damage.

Instructions:
1. Carefully compare the uploaded image to the reference images.
2. Flag only significant anomalies that clearly deviate from the reference \
standard.
3. For each inspection area, state whether it appears normal or if there is \
a major anomaly.
4. Describe any detected significant anomalies in detail.
5. If a feature is unclear in the image, state so explicitly but do not flag \
it as an anomaly unless you are certain.
6. Provide a summary of all detected major anomalies.
7. Conclude with an overall assessment: 'PASS' if no significant anomalies \
are found, 'FAIL' if major issues are detected.

Remember: focus on identifying clear and significant issues. Minor \
variations or imperfections within the range seen in the reference images \
must not be flagged as anomalies.

Now, analyze the uploaded spark plug image and report your findings:";

const STRICT_INSTRUCTIONS: &str = "\
You are an extremely meticulous quality control AI for laser iridium spark \
plugs. Analyze the uploaded image with utmost scrutiny and detect ANY \
deviation from perfect condition, no matter how minor. Even the slightest \
imperfection must be flagged as an anomaly.

Perfection standard: the spark plug must be in absolutely perfect \
condition. ANY scratch, mark, discoloration, or deviation from ideal \
specifications is an anomaly.

Inspection areas:
1. Thread Section: exactly 18-19 threads, perfectly clean and uniformly \
spaced; no wear, damage, or cross-threading.
2. Hexagonal Nut: perfect hexagonal shape with sharp, undamaged edges; no \
tool marks or wear.
3. Insulator: pristine white ceramic with no discoloration, chips, or \
cracks; perfectly attached to the metal shell with no gaps or misalignment.
4. Branding and Markings: branding clearly written in perfect light blue; \
model number crisp and fully legible; all markings perfectly aligned and \
undamaged.
5. Electrodes: center and ground electrodes in perfect alignment; no wear, \
erosion, or discoloration; gap precise and uniform.
6. Precious Metal Tip: iridium tip perfectly formed, fine, and pointed; no \
wear or deformation.
7. Seal Ring: present, perfectly seated, and undamaged; no compression or \
deformation.
8. Metal Shell: absolutely no corrosion, scratches, or marks; plating \
perfectly uniform.
9. Overall Dimensions and Proportions: exactly consistent with \
specifications.
10. Manufacturing Quality: no signs of poor assembly, misalignments, or \
residues.
11. Packaging (if visible): pristine, undamaged, and properly sealed.

Instructions:
1. Analyze the uploaded image with extreme attention to detail.
2. Compare against the provided reference materials meticulously.
3. Flag ANY deviation from perfect condition as an anomaly, no matter how \
minor.
4. For each inspection area, clearly state whether it is perfect or if \
there is an anomaly.
5. Describe ALL detected anomalies in detail, no matter how small.
6. If you cannot clearly see a feature, state so explicitly and consider it \
a potential anomaly.
7. Provide a summary of ALL detected anomalies, even if they seem \
insignificant.
8. Conclude with an overall assessment: 'PASS' only if absolutely perfect, \
otherwise 'FAIL'.

Remember: your role is to ensure only absolutely perfect spark plugs pass \
inspection. Be extremely strict and flag even the slightest imperfections.

Now, analyze the uploaded spark plug image and report your findings:";

const FOCUSED_INSTRUCTIONS: &str = "\
Analyze the uploaded spark plug image for these major issues only:
1. Black Marks: look for noticeable black marks or discolorations.
2. Missing Branding: check if the branding and model number are absent or \
unreadable.
3. Missing Parts: verify all essential parts are present (hexagonal nut, \
insulator, metal shell, precious metal tip).
4. Nut Bending: look for significant bending or distortion of the \
hexagonal nut.
5. Tip Condition: examine the precious metal tip for blur, damage, wear, \
melting, or deformation.

For each criterion, state if it is normal or if there is an issue. Describe \
detected anomalies in detail. Do not report anomalies outside these five \
categories. Provide a summary of all detected major anomalies.
Conclude with an overall assessment: 'PASS' if no major issues, 'FAIL' if \
any major issues detected.";
