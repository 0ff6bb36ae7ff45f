pub mod catalog;
pub mod context;
pub mod diff;
pub mod emit;
pub mod file;

pub use catalog::{all_templates, plan_jobs, TemplateJob};
pub use context::{build_context, ContextKind};
pub use diff::{compare_with_existing, FileChange};
pub use emit::{execute_plan, plan_render, GeneratedProject, GenerationPlan, PlannedFile};
