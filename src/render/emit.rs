use std::path::{Path, PathBuf};

use crate::error::{MsgenError, Result};
use crate::render::catalog::TemplateJob;
use crate::render::file::render_file_content;
use crate::template::TemplateSource;

#[derive(Debug)]
pub struct GeneratedProject {
    pub files_created: Vec<PathBuf>,
    pub files_copied: Vec<PathBuf>,
}

/// A file that would be created during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the output directory.
    pub relative_path: PathBuf,
    /// The file content (rendered template or copied bytes).
    pub content: Vec<u8>,
    /// Whether this file was copied verbatim (true) or rendered from a template (false).
    pub is_copy: bool,
}

/// The result of planning a generation without writing to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub files: Vec<PlannedFile>,
}

/// Render every job in memory, in job order. Stops at the first failure.
pub fn plan_render(jobs: &[TemplateJob], source: &TemplateSource) -> Result<GenerationPlan> {
    let mut files = Vec::with_capacity(jobs.len());

    for job in jobs {
        let content = if job.is_copy() {
            source.load(job.template)?.into_owned()
        } else {
            let body = source.load_text(job.template)?;
            render_file_content(job.template, &body, &job.context)?.into_bytes()
        };

        tracing::debug!(
            template = job.template,
            destination = %job.destination.display(),
            bytes = content.len(),
            "planned file"
        );

        files.push(PlannedFile {
            relative_path: job.destination.clone(),
            content,
            is_copy: job.is_copy(),
        });
    }

    Ok(GenerationPlan { files })
}

/// Write the files from a generation plan to disk.
///
/// Existing files are overwritten. A failed write aborts the run; files
/// written before it stay on disk.
pub fn execute_plan(plan: &GenerationPlan, output_dir: &Path) -> Result<GeneratedProject> {
    let mut files_created = Vec::new();
    let mut files_copied = Vec::new();

    for file in &plan.files {
        let dest_path = output_dir.join(&file.relative_path);
        if let Some(parent) = dest_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MsgenError::Io {
                context: format!("creating directory {}", parent.display()),
                source: e,
            })?;
        }
        std::fs::write(&dest_path, &file.content).map_err(|e| MsgenError::Io {
            context: format!("writing {}", dest_path.display()),
            source: e,
        })?;
        tracing::debug!("wrote {}", dest_path.display());

        if file.is_copy {
            files_copied.push(file.relative_path.clone());
        } else {
            files_created.push(file.relative_path.clone());
        }
    }

    Ok(GeneratedProject {
        files_created,
        files_copied,
    })
}
