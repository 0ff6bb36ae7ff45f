pub mod options;
pub mod question;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MsgenError, Result};

pub use options::{
    BuildTool, Choice, CloudOption, DbOption, NoSqlOption, PackagingType, Selection,
};
pub use question::{ChoiceItem, QuestionKey};

/// Everything the user answered, one field per question.
///
/// Built once by the prompt engine and handed by value to the resolver;
/// nothing downstream mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnswerRecord {
    pub boot_version: String,
    pub spring_cloud_version: String,
    pub springfox_version: String,
    pub package_name: String,
    pub base_name: String,
    pub java_version: String,
    pub packaging_type: Selection<PackagingType>,
    pub build_tool: Selection<BuildTool>,
    pub db: Selection<DbOption>,
    pub nosql: Selection<NoSqlOption>,
    pub cloud: Selection<CloudOption>,
    pub image_name: String,
    pub registry: String,
}

impl Default for AnswerRecord {
    fn default() -> Self {
        Self {
            boot_version: "1.5.8.RELEASE".to_string(),
            spring_cloud_version: "Dalston.SR4".to_string(),
            springfox_version: "2.6.1".to_string(),
            package_name: "com.myapp".to_string(),
            base_name: "app".to_string(),
            java_version: "1.8".to_string(),
            packaging_type: Selection::new(vec![PackagingType::Jar]),
            build_tool: Selection::empty(),
            db: Selection::empty(),
            nosql: Selection::empty(),
            cloud: Selection::empty(),
            image_name: String::new(),
            registry: String::new(),
        }
    }
}

impl AnswerRecord {
    /// The current free-text answer, `None` for multi-select questions.
    pub fn text(&self, key: QuestionKey) -> Option<&str> {
        let value = match key {
            QuestionKey::BootVersion => &self.boot_version,
            QuestionKey::SpringCloudVersion => &self.spring_cloud_version,
            QuestionKey::SpringfoxVersion => &self.springfox_version,
            QuestionKey::PackageName => &self.package_name,
            QuestionKey::BaseName => &self.base_name,
            QuestionKey::JavaVersion => &self.java_version,
            QuestionKey::ImageName => &self.image_name,
            QuestionKey::Registry => &self.registry,
            _ => return None,
        };
        Some(value)
    }

    /// The selected option values of a multi-select question, in order.
    pub fn selected(&self, key: QuestionKey) -> Vec<&'static str> {
        match key {
            QuestionKey::PackagingType => self.packaging_type.values(),
            QuestionKey::BuildTool => self.build_tool.values(),
            QuestionKey::Db => self.db.values(),
            QuestionKey::NoSql => self.nosql.values(),
            QuestionKey::Cloud => self.cloud.values(),
            _ => Vec::new(),
        }
    }

    pub fn set_text(&mut self, key: QuestionKey, value: String) -> Result<()> {
        let slot = match key {
            QuestionKey::BootVersion => &mut self.boot_version,
            QuestionKey::SpringCloudVersion => &mut self.spring_cloud_version,
            QuestionKey::SpringfoxVersion => &mut self.springfox_version,
            QuestionKey::PackageName => &mut self.package_name,
            QuestionKey::BaseName => &mut self.base_name,
            QuestionKey::JavaVersion => &mut self.java_version,
            QuestionKey::ImageName => &mut self.image_name,
            QuestionKey::Registry => &mut self.registry,
            _ => {
                return Err(MsgenError::InvalidAnswer {
                    key: key.to_string(),
                    message: "expected a list of options, not free text".into(),
                })
            }
        };
        *slot = value;
        Ok(())
    }

    pub fn set_selected<S: AsRef<str>>(&mut self, key: QuestionKey, values: &[S]) -> Result<()> {
        let invalid = |message: String| MsgenError::InvalidAnswer {
            key: key.to_string(),
            message,
        };
        match key {
            QuestionKey::PackagingType => {
                self.packaging_type = Selection::parse(values).map_err(invalid)?
            }
            QuestionKey::BuildTool => self.build_tool = Selection::parse(values).map_err(invalid)?,
            QuestionKey::Db => self.db = Selection::parse(values).map_err(invalid)?,
            QuestionKey::NoSql => self.nosql = Selection::parse(values).map_err(invalid)?,
            QuestionKey::Cloud => self.cloud = Selection::parse(values).map_err(invalid)?,
            _ => return Err(invalid("expected free text, not a list of options".into())),
        }
        Ok(())
    }

    /// Apply a `key=value` override. Multi-select values are comma-separated;
    /// an empty value clears the selection.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<()> {
        let key: QuestionKey = key.parse().map_err(|_| MsgenError::UnknownQuestion {
            key: key.to_string(),
        })?;

        if key.is_multi_select() {
            let values: Vec<&str> = value
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .collect();
            self.set_selected(key, &values)
        } else {
            self.set_text(key, value.to_string())
        }
    }

    /// Check the answers the output layout depends on.
    pub fn validate(&self) -> Result<()> {
        validate_package_name(&self.package_name).map_err(|message| {
            MsgenError::InvalidAnswer {
                key: QuestionKey::PackageName.to_string(),
                message,
            }
        })?;
        validate_base_name(&self.base_name).map_err(|message| MsgenError::InvalidAnswer {
            key: QuestionKey::BaseName.to_string(),
            message,
        })?;
        Ok(())
    }

    /// Layer a TOML table of answers over this record. Keys absent from the
    /// table keep their current value.
    pub fn overlay(&self, table: toml::Table) -> std::result::Result<Self, toml::de::Error> {
        let current = toml::to_string(self)
            .map_err(|e| <toml::de::Error as serde::de::Error>::custom(e.to_string()))?;
        let mut merged: toml::Table = toml::from_str(&current)?;
        merged.extend(table);
        toml::Value::Table(merged).try_into()
    }
}

/// Split a `-d key=value` argument. The value may itself contain `=`.
pub fn parse_data_pair(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(MsgenError::InvalidAnswer {
            key: arg.to_string(),
            message: "expected KEY=VALUE".to_string(),
        }),
    }
}

/// A dotted Java package identifier such as `com.myapp`.
pub fn validate_package_name(name: &str) -> std::result::Result<(), String> {
    let re = regex_lite::Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
        .map_err(|e| e.to_string())?;
    if re.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "'{name}' is not a dotted package identifier (e.g. com.myapp)"
        ))
    }
}

pub fn validate_base_name(name: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err("base name must not be empty".to_string());
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(format!("'{name}' must be a single directory name"));
    }
    Ok(())
}

/// Load an answers file, filling keys it leaves out from `base`.
pub fn load_answers(path: &Path, base: &AnswerRecord) -> Result<AnswerRecord> {
    let content = std::fs::read_to_string(path).map_err(|e| MsgenError::Io {
        context: format!("reading answers file {}", path.display()),
        source: e,
    })?;

    let parse_err = |source| MsgenError::AnswersParse {
        path: path.to_path_buf(),
        source,
    };
    let table: toml::Table = toml::from_str(&content).map_err(parse_err)?;
    base.overlay(table).map_err(parse_err)
}

pub fn write_answers(path: &Path, answers: &AnswerRecord) -> Result<()> {
    let content =
        toml::to_string(answers).map_err(|e| MsgenError::AnswersSerialize { source: e })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MsgenError::Io {
            context: format!("creating directory {}", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, content).map_err(|e| MsgenError::Io {
        context: format!("writing answers file {}", path.display()),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_match_question_catalog() {
        let record = AnswerRecord::default();
        assert_eq!(record.text(QuestionKey::BootVersion), Some("1.5.8.RELEASE"));
        assert_eq!(record.text(QuestionKey::PackageName), Some("com.myapp"));
        assert_eq!(record.selected(QuestionKey::PackagingType), vec!["jar"]);
        assert!(record.build_tool.is_empty());
        assert_eq!(record.text(QuestionKey::Cloud), None);
    }

    #[test]
    fn test_apply_override_text_and_lists() {
        let mut record = AnswerRecord::default();
        record.apply_override("base_name", "svc").unwrap();
        record.apply_override("cloud", "eureka, configclient").unwrap();
        record.apply_override("packaging_type", "").unwrap();

        assert_eq!(record.base_name, "svc");
        assert_eq!(record.cloud.values(), vec!["eureka", "configclient"]);
        assert!(record.packaging_type.is_empty());
    }

    #[test]
    fn test_apply_override_unknown_key() {
        let mut record = AnswerRecord::default();
        let err = record.apply_override("baseName", "svc").unwrap_err();
        assert!(matches!(err, MsgenError::UnknownQuestion { key } if key == "baseName"));
    }

    #[test]
    fn test_apply_override_unknown_option() {
        let mut record = AnswerRecord::default();
        let err = record.apply_override("build_tool", "ant").unwrap_err();
        assert!(matches!(err, MsgenError::InvalidAnswer { key, .. } if key == "build_tool"));
    }

    #[test]
    fn test_set_text_rejects_multi_select_key() {
        let mut record = AnswerRecord::default();
        assert!(record.set_text(QuestionKey::Db, "jpa".into()).is_err());
        assert!(record.set_selected(QuestionKey::Registry, &["x"]).is_err());
    }

    #[rstest]
    #[case("base_name=orders", Some(("base_name", "orders")))]
    #[case("cloud=", Some(("cloud", "")))]
    #[case("registry=host:5000/team=a", Some(("registry", "host:5000/team=a")))]
    #[case("base_name", None)]
    #[case("=orders", None)]
    #[case("", None)]
    fn test_parse_data_pair(#[case] input: &str, #[case] expected: Option<(&str, &str)>) {
        match expected {
            Some((key, value)) => {
                assert_eq!(
                    parse_data_pair(input).unwrap(),
                    (key.to_string(), value.to_string())
                );
            }
            None => {
                let err = parse_data_pair(input).unwrap_err();
                assert!(matches!(err, MsgenError::InvalidAnswer { key, .. } if key == input));
            }
        }
    }

    #[rstest]
    #[case("com.myapp", true)]
    #[case("a", true)]
    #[case("org.example_1.$svc", true)]
    #[case("", false)]
    #[case("com..myapp", false)]
    #[case("com.1app", false)]
    #[case(".com", false)]
    #[case("com.my-app", false)]
    fn test_validate_package_name(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(validate_package_name(input).is_ok(), valid, "{input}");
    }

    #[rstest]
    #[case("app", true)]
    #[case("my-service", true)]
    #[case("", false)]
    #[case("  ", false)]
    #[case("a/b", false)]
    #[case("..", false)]
    fn test_validate_base_name(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(validate_base_name(input).is_ok(), valid, "{input}");
    }

    #[test]
    fn test_overlay_keeps_unset_keys() {
        let mut base = AnswerRecord::default();
        base.registry = "registry.example.com".into();

        let table: toml::Table = toml::from_str(
            r#"
base_name = "orders"
build_tool = ["gradle"]
"#,
        )
        .unwrap();
        let merged = base.overlay(table).unwrap();

        assert_eq!(merged.base_name, "orders");
        assert_eq!(merged.build_tool.first(), Some(BuildTool::Gradle));
        assert_eq!(merged.registry, "registry.example.com");
        assert_eq!(merged.package_name, "com.myapp");
    }

    #[test]
    fn test_overlay_rejects_unknown_keys() {
        let table: toml::Table = toml::from_str(r#"baseName = "orders""#).unwrap();
        assert!(AnswerRecord::default().overlay(table).is_err());
    }

    #[test]
    fn test_write_then_load_answers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/answers.toml");

        let mut record = AnswerRecord::default();
        record.build_tool = Selection::new(vec![BuildTool::Maven]);
        record.db = Selection::new(vec![DbOption::Jpa, DbOption::Mysql]);
        record.image_name = "orders".into();

        write_answers(&path, &record).unwrap();
        let loaded = load_answers(&path, &AnswerRecord::default()).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_load_answers_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.toml");
        std::fs::write(&path, "db = [\"oracle\"]").unwrap();

        let err = load_answers(&path, &AnswerRecord::default()).unwrap_err();
        assert!(matches!(err, MsgenError::AnswersParse { path: p, .. } if p == path));
    }
}
