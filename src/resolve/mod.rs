pub mod flags;
pub mod paths;

pub use flags::FeatureFlags;
pub use paths::{package_path, OutputPaths};

use crate::answers::{AnswerRecord, QuestionKey};

/// Non-fatal notes about how the answers will be interpreted.
pub fn resolution_warnings(answers: &AnswerRecord) -> Vec<String> {
    let mut warnings = Vec::new();

    for key in QuestionKey::ALL.into_iter().filter(|k| k.is_single_choice()) {
        let selected = answers.selected(key);
        if let [first, ignored @ ..] = selected.as_slice() {
            if !ignored.is_empty() {
                warnings.push(format!(
                    "'{key}' takes a single choice; using '{first}' and ignoring {}",
                    ignored.join(", ")
                ));
            }
        }
    }

    if answers.build_tool.is_empty() {
        warnings.push("no build tool selected; no build manifest will be generated".to_string());
    }

    warnings
}
