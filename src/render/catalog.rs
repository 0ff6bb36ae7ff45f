use std::path::{Path, PathBuf};

use tera::Context;

use crate::answers::BuildTool;
use crate::error::Result;
use crate::render::context::ContextKind;
use crate::resolve::{FeatureFlags, OutputPaths};
use crate::template::TEMPLATE_SUFFIX;

/// One unit of emission: a template, where it goes, and what it is rendered with.
#[derive(Debug, Clone)]
pub struct TemplateJob {
    pub template: &'static str,
    /// Relative to the output root.
    pub destination: PathBuf,
    pub context: Context,
}

impl TemplateJob {
    /// Copy jobs are written byte-for-byte without rendering.
    pub fn is_copy(&self) -> bool {
        !self.template.ends_with(TEMPLATE_SUFFIX)
    }
}

#[derive(Debug, Clone, Copy)]
enum Dir {
    Base,
    Source,
    Test,
    Resources,
    Api,
    Configuration,
    Controller,
}

impl Dir {
    fn resolve(self, paths: &OutputPaths) -> &Path {
        match self {
            Self::Base => &paths.base_dir,
            Self::Source => &paths.source_root,
            Self::Test => &paths.test_root,
            Self::Resources => &paths.resources_root,
            Self::Api => &paths.api_dir,
            Self::Configuration => &paths.configuration_dir,
            Self::Controller => &paths.controller_dir,
        }
    }
}

type Entry = (&'static str, Dir, &'static str, ContextKind);

/// Jobs emitted on every run, in emission order.
static UNCONDITIONAL: &[Entry] = &[
    ("Application.java.tera", Dir::Source, "Application.java", ContextKind::Package),
    ("RFC3339DateFormat.java.tera", Dir::Source, "RFC3339DateFormat.java", ContextKind::Package),
    ("ApplicationTests.java.tera", Dir::Test, "ApplicationTests.java", ContextKind::Package),
    ("ApiException.java.tera", Dir::Api, "ApiException.java", ContextKind::Package),
    ("ApiResponseMessage.java.tera", Dir::Api, "ApiResponseMessage.java", ContextKind::Package),
    ("NotFoundException.java.tera", Dir::Api, "NotFoundException.java", ContextKind::Package),
    (
        "SwaggerDocumentationConfig.java.tera",
        Dir::Configuration,
        "SwaggerDocumentationConfig.java",
        ContextKind::Package,
    ),
    ("HomeController.java.tera", Dir::Controller, "HomeController.java", ContextKind::Package),
    ("Dockerfile.tera", Dir::Base, "Dockerfile", ContextKind::BaseName),
    ("entrypoint.sh", Dir::Base, "entrypoint.sh", ContextKind::Verbatim),
    ("build.sh.tera", Dir::Base, "build.sh", ContextKind::Image),
    ("run.sh.tera", Dir::Base, "run.sh", ContextKind::Image),
    ("push.sh.tera", Dir::Base, "push.sh", ContextKind::Push),
    ("gitignore", Dir::Base, ".gitignore", ContextKind::Verbatim),
];

static GRADLE_MANIFEST: Entry = ("build.gradle.tera", Dir::Base, "build.gradle", ContextKind::Manifest);
static MAVEN_MANIFEST: Entry = ("pom.xml.tera", Dir::Base, "pom.xml", ContextKind::Manifest);
static BOOTSTRAP_CONFIG: Entry = ("bootstrap.yml.tera", Dir::Resources, "bootstrap.yml", ContextKind::BaseName);
static LOCAL_CONFIG: Entry = ("application.yml.tera", Dir::Resources, "application.yml", ContextKind::BaseName);

/// Every template id the catalog can reference.
pub fn all_templates() -> Vec<&'static str> {
    UNCONDITIONAL
        .iter()
        .chain([&GRADLE_MANIFEST, &MAVEN_MANIFEST, &BOOTSTRAP_CONFIG, &LOCAL_CONFIG])
        .map(|(template, ..)| *template)
        .collect()
}

/// Select the jobs for one run: the unconditional ones, then at most one
/// build manifest and exactly one of the two config files.
pub fn plan_jobs(flags: &FeatureFlags, paths: &OutputPaths) -> Result<Vec<TemplateJob>> {
    let mut entries: Vec<&Entry> = UNCONDITIONAL.iter().collect();

    match flags.build_tool {
        Some(BuildTool::Gradle) => entries.push(&GRADLE_MANIFEST),
        Some(BuildTool::Maven) => entries.push(&MAVEN_MANIFEST),
        None => {}
    }

    entries.push(if flags.config_client {
        &BOOTSTRAP_CONFIG
    } else {
        &LOCAL_CONFIG
    });

    entries
        .into_iter()
        .map(|&(template, dir, file_name, kind)| -> Result<TemplateJob> {
            Ok(TemplateJob {
                template,
                destination: dir.resolve(paths).join(file_name),
                context: kind.build(flags)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{AnswerRecord, CloudOption, Selection};
    use rstest::rstest;

    fn jobs_for(answers: &AnswerRecord) -> Vec<TemplateJob> {
        let flags = FeatureFlags::derive(answers);
        let paths = OutputPaths::new(&answers.base_name, &answers.package_name);
        plan_jobs(&flags, &paths).unwrap()
    }

    fn destinations(jobs: &[TemplateJob]) -> Vec<PathBuf> {
        jobs.iter().map(|j| j.destination.clone()).collect()
    }

    #[rstest]
    #[case(vec![BuildTool::Maven], Some("app/pom.xml"))]
    #[case(vec![BuildTool::Gradle], Some("app/build.gradle"))]
    #[case(vec![BuildTool::Gradle, BuildTool::Maven], Some("app/build.gradle"))]
    #[case(vec![], None)]
    fn test_manifest_selection(#[case] tools: Vec<BuildTool>, #[case] expected: Option<&str>) {
        let answers = AnswerRecord {
            build_tool: Selection::new(tools),
            ..AnswerRecord::default()
        };
        let dests = destinations(&jobs_for(&answers));

        let manifests: Vec<_> = dests
            .iter()
            .filter(|d| d.ends_with("pom.xml") || d.ends_with("build.gradle"))
            .collect();
        assert_eq!(manifests.len(), usize::from(expected.is_some()));
        if let Some(path) = expected {
            assert_eq!(manifests[0].as_path(), Path::new(path));
        }
    }

    #[rstest]
    #[case(vec![], "application.yml")]
    #[case(vec![CloudOption::ConfigClient], "bootstrap.yml")]
    #[case(vec![CloudOption::Eureka, CloudOption::ConfigClient], "bootstrap.yml")]
    fn test_exactly_one_config_file(#[case] cloud: Vec<CloudOption>, #[case] expected: &str) {
        let answers = AnswerRecord {
            cloud: Selection::new(cloud),
            ..AnswerRecord::default()
        };
        let dests = destinations(&jobs_for(&answers));

        let configs: Vec<_> = dests
            .iter()
            .filter(|d| d.ends_with("bootstrap.yml") || d.ends_with("application.yml"))
            .collect();
        assert_eq!(configs, vec![&Path::new("app/src/main/resources").join(expected)]);
    }

    #[test]
    fn test_unconditional_jobs_come_first() {
        let answers = AnswerRecord {
            build_tool: Selection::new(vec![BuildTool::Maven]),
            ..AnswerRecord::default()
        };
        let jobs = jobs_for(&answers);

        assert_eq!(jobs.len(), UNCONDITIONAL.len() + 2);
        assert_eq!(jobs[0].template, "Application.java.tera");
        assert_eq!(jobs[jobs.len() - 2].template, "pom.xml.tera");
        assert_eq!(jobs[jobs.len() - 1].template, "application.yml.tera");
    }

    #[test]
    fn test_java_sources_follow_package_path() {
        let answers = AnswerRecord {
            base_name: "svc".into(),
            package_name: "org.acme.orders".into(),
            ..AnswerRecord::default()
        };
        let dests = destinations(&jobs_for(&answers));
        let java = Path::new("svc/src/main/java/org/acme/orders");

        assert!(dests.contains(&java.join("Application.java")));
        assert!(dests.contains(&java.join("api/NotFoundException.java")));
        assert!(dests.contains(&java.join("configuration/SwaggerDocumentationConfig.java")));
        assert!(dests.contains(&java.join("controller/HomeController.java")));
        assert!(dests.contains(&PathBuf::from(
            "svc/src/test/java/org/acme/orders/ApplicationTests.java"
        )));
        assert!(dests.contains(&PathBuf::from("svc/.gitignore")));
    }

    #[test]
    fn test_copy_jobs() {
        let jobs = jobs_for(&AnswerRecord::default());
        let copies: Vec<_> = jobs.iter().filter(|j| j.is_copy()).map(|j| j.template).collect();
        assert_eq!(copies, vec!["entrypoint.sh", "gitignore"]);
    }

    #[test]
    fn test_all_templates_lists_conditional_ones() {
        let all = all_templates();
        assert_eq!(all.len(), UNCONDITIONAL.len() + 4);
        for name in ["build.gradle.tera", "pom.xml.tera", "bootstrap.yml.tera", "application.yml.tera"] {
            assert!(all.contains(&name), "{name}");
        }
    }
}
