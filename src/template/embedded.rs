//! Templates compiled into the binary.
//!
//! Every id used by the job catalog must appear here; the `include_str!`
//! paths are checked at compile time.

macro_rules! embed {
    ($($name:literal),+ $(,)?) => {
        &[$(($name, include_str!(concat!("../../templates/", $name)))),+]
    };
}

pub const TEMPLATES: &[(&str, &str)] = embed![
    "Application.java.tera",
    "RFC3339DateFormat.java.tera",
    "ApplicationTests.java.tera",
    "ApiException.java.tera",
    "ApiResponseMessage.java.tera",
    "NotFoundException.java.tera",
    "SwaggerDocumentationConfig.java.tera",
    "HomeController.java.tera",
    "Dockerfile.tera",
    "entrypoint.sh",
    "build.sh.tera",
    "run.sh.tera",
    "push.sh.tera",
    "gitignore",
    "build.gradle.tera",
    "pom.xml.tera",
    "bootstrap.yml.tera",
    "application.yml.tera",
];

pub fn get(name: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(id, _)| *id == name)
        .map(|(_, content)| *content)
}
