use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use msgen::answers::{ChoiceItem, QuestionKey};
use msgen::config::load_settings;

#[derive(Serialize)]
struct QuestionInfo {
    key: &'static str,
    prompt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    choices: Option<Vec<ChoiceItem>>,
    default: serde_json::Value,
}

pub fn run(json: bool) -> Result<()> {
    let settings = load_settings()?;
    let defaults = &settings.defaults;

    let questions: Vec<QuestionInfo> = QuestionKey::ALL
        .into_iter()
        .map(|key| QuestionInfo {
            key: key.as_str(),
            prompt: key.prompt(),
            choices: key.choices(),
            default: match defaults.text(key) {
                Some(text) => serde_json::Value::from(text),
                None => serde_json::Value::from(defaults.selected(key)),
            },
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&questions).into_diagnostic()?;
        println!("{out}");
        return Ok(());
    }

    for q in &questions {
        println!("{} {}", style(q.key).cyan().bold(), style(q.prompt).dim());
        match &q.choices {
            Some(choices) => {
                let values: Vec<_> = choices.iter().map(|c| c.value).collect();
                println!("  {} {}", style("choices:").dim(), values.join(", "));
                println!("  {} [{}]", style("default:").dim(), list_default(&q.default));
            }
            None => {
                println!(
                    "  {} {}",
                    style("default:").dim(),
                    q.default.as_str().unwrap_or_default()
                );
            }
        }
    }

    println!(
        "\nAnswer any of these up front with {}",
        style("msgen new -d key=value").cyan()
    );

    Ok(())
}

fn list_default(value: &serde_json::Value) -> String {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}
