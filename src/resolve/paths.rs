use std::path::{Path, PathBuf};

/// Directories of the generated project, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub base_dir: PathBuf,
    pub source_root: PathBuf,
    pub test_root: PathBuf,
    pub resources_root: PathBuf,
    pub controller_dir: PathBuf,
    pub api_dir: PathBuf,
    pub configuration_dir: PathBuf,
}

impl OutputPaths {
    pub fn new(base_name: &str, package_name: &str) -> Self {
        let base_dir = PathBuf::from(base_name);
        let package = package_path(package_name);
        let source_root = base_dir.join("src/main/java").join(&package);
        let test_root = base_dir.join("src/test/java").join(&package);

        Self {
            resources_root: base_dir.join("src/main/resources"),
            controller_dir: source_root.join("controller"),
            api_dir: source_root.join("api"),
            configuration_dir: source_root.join("configuration"),
            source_root,
            test_root,
            base_dir,
        }
    }
}

/// `com.myapp.orders` -> `com/myapp/orders`, using the platform separator.
pub fn package_path(package_name: &str) -> PathBuf {
    package_name.split('.').map(Path::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a.b.c", &["a", "b", "c"])]
    #[case("a", &["a"])]
    #[case("com.myapp", &["com", "myapp"])]
    fn test_package_path(#[case] package: &str, #[case] segments: &[&str]) {
        let expected: PathBuf = segments.iter().collect();
        assert_eq!(package_path(package), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_package_path_uses_slashes_on_unix() {
        assert_eq!(package_path("a.b.c").to_str(), Some("a/b/c"));
    }

    #[test]
    fn test_output_paths_layout() {
        let paths = OutputPaths::new("app", "com.myapp");
        let java = Path::new("app/src/main/java/com/myapp");

        assert_eq!(paths.base_dir, Path::new("app"));
        assert_eq!(paths.source_root, java);
        assert_eq!(paths.test_root, Path::new("app/src/test/java/com/myapp"));
        assert_eq!(paths.resources_root, Path::new("app/src/main/resources"));
        assert_eq!(paths.controller_dir, java.join("controller"));
        assert_eq!(paths.api_dir, java.join("api"));
        assert_eq!(paths.configuration_dir, java.join("configuration"));
    }
}
