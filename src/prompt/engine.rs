use std::collections::HashMap;

use inquire::validator::{ErrorMessage, Validation};
use inquire::{CustomUserError, InquireError};

use crate::answers::{validate_base_name, validate_package_name, AnswerRecord, QuestionKey};
use crate::error::{MsgenError, Result};

#[derive(Default)]
pub struct PromptOptions {
    pub data_overrides: HashMap<String, String>,
    pub use_defaults: bool,
}

/// Ask every question in catalog order, starting from `base`.
///
/// A question with a `-d` override is never prompted. With `use_defaults`
/// the value already in `base` is kept. The returned record is validated.
pub fn collect_answers(base: AnswerRecord, options: &PromptOptions) -> Result<AnswerRecord> {
    // Reject typos before the user has answered anything.
    for key in options.data_overrides.keys() {
        if key.parse::<QuestionKey>().is_err() {
            return Err(MsgenError::UnknownQuestion { key: key.clone() });
        }
    }

    let mut record = base;

    for key in QuestionKey::ALL {
        if let Some(value) = options.data_overrides.get(key.as_str()) {
            record.apply_override(key.as_str(), value)?;
            continue;
        }

        if options.use_defaults {
            continue;
        }

        prompt_question(key, &mut record)?;
    }

    record.validate()?;
    Ok(record)
}

fn prompt_question(key: QuestionKey, record: &mut AnswerRecord) -> Result<()> {
    match key.choices() {
        None => {
            let current = record.text(key).unwrap_or_default().to_string();
            let mut prompt = inquire::Text::new(key.prompt());
            if !current.is_empty() {
                prompt = prompt.with_default(&current);
            }
            prompt = match key {
                QuestionKey::PackageName => prompt.with_validator(package_name_validator),
                QuestionKey::BaseName => prompt.with_validator(base_name_validator),
                _ => prompt,
            };
            let answer = prompt.prompt().map_err(|e| prompt_error(key, e))?;
            record.set_text(key, answer)
        }
        Some(choices) => {
            let selected = record.selected(key);
            let default_indices: Vec<usize> = choices
                .iter()
                .enumerate()
                .filter(|(_, c)| selected.contains(&c.value))
                .map(|(i, _)| i)
                .collect();

            let mut prompt = inquire::MultiSelect::new(key.prompt(), choices);
            if !default_indices.is_empty() {
                prompt = prompt.with_default(&default_indices);
            }
            let answers = prompt.prompt().map_err(|e| prompt_error(key, e))?;
            let values: Vec<&str> = answers.iter().map(|c| c.value).collect();
            record.set_selected(key, &values)
        }
    }
}

fn package_name_validator(input: &str) -> std::result::Result<Validation, CustomUserError> {
    Ok(to_validation(validate_package_name(input)))
}

fn base_name_validator(input: &str) -> std::result::Result<Validation, CustomUserError> {
    Ok(to_validation(validate_base_name(input)))
}

fn to_validation(check: std::result::Result<(), String>) -> Validation {
    match check {
        Ok(()) => Validation::Valid,
        Err(msg) => Validation::Invalid(ErrorMessage::Custom(msg)),
    }
}

fn prompt_error(key: QuestionKey, err: InquireError) -> MsgenError {
    match err {
        InquireError::NotTTY => MsgenError::PromptUnavailable {
            key: key.to_string(),
        },
        InquireError::IO(e) => MsgenError::Io {
            context: format!("reading answer for '{key}'"),
            source: e,
        },
        _ => MsgenError::PromptCancelled,
    }
}
