pub mod answers;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod resolve;
pub mod template;

use std::path::{Path, PathBuf};

use console::style;

use crate::answers::{load_answers, write_answers, AnswerRecord};
use crate::error::{MsgenError, Result};
use crate::prompt::{collect_answers, PromptOptions};
use crate::render::{execute_plan, plan_jobs, plan_render, GeneratedProject, GenerationPlan};
use crate::config::Settings;
use crate::resolve::{resolution_warnings, FeatureFlags, OutputPaths};
use crate::template::TemplateSource;

#[derive(Default)]
pub struct GenerateOptions {
    /// Directory the `<base_name>/` tree is created in. Defaults to the current directory.
    pub output: Option<String>,
    /// Pre-supplied key=value answers.
    pub data: Vec<(String, String)>,
    /// Accept defaults without prompting.
    pub defaults: bool,
    /// TOML answers file to start from; implies `defaults`.
    pub answers: Option<PathBuf>,
    /// Where to write the final answers, if anywhere.
    pub save_answers: Option<PathBuf>,
    /// Template directory overriding the built-in templates.
    pub templates: Option<PathBuf>,
}

/// Everything needed to execute a generation that has been planned but not yet written.
pub struct FullGenerationPlan {
    pub render_plan: GenerationPlan,
    pub output_dir: PathBuf,
    pub answers: AnswerRecord,
    pub source: TemplateSource,
    /// Written by [`execute_generation`], never while only planning.
    pub save_answers: Option<PathBuf>,
}

/// Resolve answers into flags and paths, select the jobs, and render them in memory.
///
/// Pure with respect to the filesystem apart from reading a directory
/// template source; the same answers always give the same plan.
pub fn plan_project(answers: &AnswerRecord, source: &TemplateSource) -> Result<GenerationPlan> {
    let flags = FeatureFlags::derive(answers);
    let paths = OutputPaths::new(&flags.base_name, &flags.package_name);
    let jobs = plan_jobs(&flags, &paths)?;
    tracing::debug!("{} template jobs selected", jobs.len());
    plan_render(&jobs, source)
}

/// Plan a project generation: collect answers, then render in memory.
///
/// All prompting happens here, so an input error can never leave files behind.
pub fn plan_generation(options: GenerateOptions) -> Result<FullGenerationPlan> {
    plan_generation_with(options, config::load_settings()?)
}

/// [`plan_generation`] with the user config already resolved.
pub fn plan_generation_with(
    options: GenerateOptions,
    settings: Settings,
) -> Result<FullGenerationPlan> {

    let base = match &options.answers {
        Some(path) => {
            tracing::info!("loading answers from {}", path.display());
            load_answers(path, &settings.defaults)?
        }
        None => settings.defaults,
    };

    let prompt_options = PromptOptions {
        data_overrides: options.data.into_iter().collect(),
        use_defaults: options.defaults || options.answers.is_some(),
    };
    let answers = collect_answers(base, &prompt_options)?;

    for warning in resolution_warnings(&answers) {
        eprintln!(
            "{} {}",
            style("warning:").yellow().bold(),
            style(warning).yellow()
        );
    }

    let output_dir = match &options.output {
        Some(out) => Path::new(out).to_path_buf(),
        None => std::env::current_dir().map_err(|e| MsgenError::Io {
            context: "getting current directory".into(),
            source: e,
        })?,
    };

    let source = TemplateSource::from_option(
        options
            .templates
            .as_deref()
            .or(settings.templates.as_deref()),
    );
    tracing::info!("rendering from {source}");

    let render_plan = plan_project(&answers, &source)?;

    Ok(FullGenerationPlan {
        render_plan,
        output_dir,
        answers,
        source,
        save_answers: options.save_answers,
    })
}

/// Execute a previously planned generation: write every file, overwriting what is there.
pub fn execute_generation(plan: FullGenerationPlan) -> Result<GeneratedProject> {
    let result = execute_plan(&plan.render_plan, &plan.output_dir)?;

    if let Some(path) = &plan.save_answers {
        write_answers(path, &plan.answers)?;
        tracing::info!("saved answers to {}", path.display());
    }
    let project_dir = plan.output_dir.join(&plan.answers.base_name);

    println!(
        "\n{} Project generated at {}",
        style("✓").green().bold(),
        style(project_dir.display()).cyan()
    );
    println!(
        "  {} files rendered, {} files copied",
        result.files_created.len(),
        result.files_copied.len()
    );

    Ok(result)
}

/// Generate a project: collect answers, then write the templated tree.
pub fn generate(options: GenerateOptions) -> Result<GeneratedProject> {
    let plan = plan_generation(options)?;
    execute_generation(plan)
}
