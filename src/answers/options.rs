use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A closed set of options offered by one multi-select question.
pub trait Choice: Copy + Eq + fmt::Debug + FromStr<Err = String> + 'static {
    /// Every variant, in prompt order.
    const ALL: &'static [Self];

    /// The value stored in answers files and `-d` overrides.
    fn value(self) -> &'static str;

    /// The label shown at the prompt.
    fn label(self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == value)
    }

    fn values() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.value()).collect()
    }
}

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal : $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Self::from_value(s).ok_or_else(|| {
                    format!(
                        "unknown option '{s}' (expected one of: {})",
                        Self::values().join(", ")
                    )
                })
            }
        }
    };
}

choice_enum!(
    /// How the service is packaged.
    PackagingType {
        Jar => "jar": "Jar",
        War => "war": "War",
    }
);

choice_enum!(
    /// Which build manifest is generated.
    BuildTool {
        Gradle => "gradle": "Gradle",
        Maven => "maven": "Maven",
    }
);

choice_enum!(
    DbOption {
        Jdbc => "jdbc": "Jdbc",
        Jpa => "jpa": "JPA",
        Mysql => "mysql": "MySQL",
        Mssql => "mssql": "MsSql",
    }
);

choice_enum!(
    NoSqlOption {
        Redis => "redis": "Redis",
        Elasticsearch => "elasticsearch": "Elasticsearch",
        Mongo => "mongo": "Mongo",
        Cassandra => "cassandra": "Cassandra",
    }
);

choice_enum!(
    CloudOption {
        ConfigClient => "configclient": "Config Client",
        Eureka => "eureka": "Eureka Discovery",
        Hystrix => "hystrix": "Hystrix",
        Ribbon => "ribbon": "Ribbon",
        Zipkin => "zipkin": "Zipkin Client",
    }
);

/// The ordered answer to a multi-select question.
///
/// Order is kept as entered, so `first()` reflects what the user picked first.
/// Membership ignores both order and duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection<T>(Vec<T>);

impl<T: Choice> Selection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self(items)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, option: T) -> bool {
        self.0.contains(&option)
    }

    pub fn first(&self) -> Option<T> {
        self.0.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse raw option values, e.g. from a comma-separated override.
    pub fn parse<S: AsRef<str>>(values: &[S]) -> std::result::Result<Self, String> {
        values
            .iter()
            .map(|v| v.as_ref().trim().parse::<T>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn values(&self) -> Vec<&'static str> {
        self.0.iter().map(|c| c.value()).collect()
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}
