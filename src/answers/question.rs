use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::options::{BuildTool, Choice, CloudOption, DbOption, NoSqlOption, PackagingType};

/// One entry of a multi-select choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceItem {
    pub value: &'static str,
    pub label: &'static str,
}

impl fmt::Display for ChoiceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

fn items<T: Choice>() -> Vec<ChoiceItem> {
    T::ALL
        .iter()
        .map(|c| ChoiceItem {
            value: c.value(),
            label: c.label(),
        })
        .collect()
}

/// Every question the generator asks, in the order it asks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuestionKey {
    BootVersion,
    SpringCloudVersion,
    SpringfoxVersion,
    PackageName,
    BaseName,
    JavaVersion,
    PackagingType,
    BuildTool,
    Db,
    NoSql,
    Cloud,
    ImageName,
    Registry,
}

impl QuestionKey {
    pub const ALL: [QuestionKey; 13] = [
        Self::BootVersion,
        Self::SpringCloudVersion,
        Self::SpringfoxVersion,
        Self::PackageName,
        Self::BaseName,
        Self::JavaVersion,
        Self::PackagingType,
        Self::BuildTool,
        Self::Db,
        Self::NoSql,
        Self::Cloud,
        Self::ImageName,
        Self::Registry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BootVersion => "boot_version",
            Self::SpringCloudVersion => "spring_cloud_version",
            Self::SpringfoxVersion => "springfox_version",
            Self::PackageName => "package_name",
            Self::BaseName => "base_name",
            Self::JavaVersion => "java_version",
            Self::PackagingType => "packaging_type",
            Self::BuildTool => "build_tool",
            Self::Db => "db",
            Self::NoSql => "nosql",
            Self::Cloud => "cloud",
            Self::ImageName => "image_name",
            Self::Registry => "registry",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::BootVersion => "Enter Spring Boot version:",
            Self::SpringCloudVersion => "Enter Spring Cloud version:",
            Self::SpringfoxVersion => "Enter Springfox version:",
            Self::PackageName => "Enter default package name:",
            Self::BaseName => "Enter base name of app:",
            Self::JavaVersion => "Enter Java version:",
            Self::PackagingType => "Package type:",
            Self::BuildTool => "Select a build tool:",
            Self::Db => "Select Data support:",
            Self::NoSql => "Select NoSQL support:",
            Self::Cloud => "Select Spring Cloud support:",
            Self::ImageName => "Enter docker image name:",
            Self::Registry => "Enter docker registry path:",
        }
    }

    /// The choice list of a multi-select question, `None` for free text.
    pub fn choices(self) -> Option<Vec<ChoiceItem>> {
        match self {
            Self::PackagingType => Some(items::<PackagingType>()),
            Self::BuildTool => Some(items::<BuildTool>()),
            Self::Db => Some(items::<DbOption>()),
            Self::NoSql => Some(items::<NoSqlOption>()),
            Self::Cloud => Some(items::<CloudOption>()),
            _ => None,
        }
    }

    pub fn is_multi_select(self) -> bool {
        matches!(
            self,
            Self::PackagingType | Self::BuildTool | Self::Db | Self::NoSql | Self::Cloud
        )
    }

    /// Multi-select questions whose answer is consumed as a single choice.
    pub fn is_single_choice(self) -> bool {
        matches!(self, Self::BuildTool)
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKey {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|k| k.as_str() == s).ok_or(())
    }
}
