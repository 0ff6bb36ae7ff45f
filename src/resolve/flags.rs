use serde::Serialize;

use crate::answers::{AnswerRecord, BuildTool, CloudOption, DbOption, NoSqlOption, PackagingType};

/// Substitution values derived from an [`AnswerRecord`].
///
/// Every boolean is a membership test against one multi-select answer, so the
/// whole struct is a pure function of the record it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub boot_version: String,
    pub spring_cloud_version: String,
    pub springfox_version: String,
    pub package_name: String,
    pub base_name: String,
    pub java_version: String,
    pub image_name: String,
    pub registry: String,

    /// First selected build tool; picks the manifest template.
    pub build_tool: Option<BuildTool>,

    pub jar: bool,
    pub war: bool,

    pub jdbc: bool,
    pub jpa: bool,
    pub mysql: bool,
    pub mssql: bool,

    pub redis: bool,
    pub es: bool,
    pub mongo: bool,
    pub cassandra: bool,

    pub config_client: bool,
    pub eureka: bool,
    pub hystrix: bool,
    pub ribbon: bool,
    pub zipkin: bool,
}

impl FeatureFlags {
    pub fn derive(answers: &AnswerRecord) -> Self {
        let db = |o: DbOption| answers.db.contains(o);
        let nosql = |o: NoSqlOption| answers.nosql.contains(o);
        let cloud = |o: CloudOption| answers.cloud.contains(o);

        Self {
            boot_version: answers.boot_version.clone(),
            spring_cloud_version: answers.spring_cloud_version.clone(),
            springfox_version: answers.springfox_version.clone(),
            package_name: answers.package_name.clone(),
            base_name: answers.base_name.clone(),
            java_version: answers.java_version.clone(),
            image_name: answers.image_name.clone(),
            registry: answers.registry.clone(),

            build_tool: answers.build_tool.first(),

            jar: answers.packaging_type.contains(PackagingType::Jar),
            war: answers.packaging_type.contains(PackagingType::War),

            jdbc: db(DbOption::Jdbc),
            jpa: db(DbOption::Jpa),
            mysql: db(DbOption::Mysql),
            mssql: db(DbOption::Mssql),

            redis: nosql(NoSqlOption::Redis),
            es: nosql(NoSqlOption::Elasticsearch),
            mongo: nosql(NoSqlOption::Mongo),
            cassandra: nosql(NoSqlOption::Cassandra),

            config_client: cloud(CloudOption::ConfigClient),
            eureka: cloud(CloudOption::Eureka),
            hystrix: cloud(CloudOption::Hystrix),
            ribbon: cloud(CloudOption::Ribbon),
            zipkin: cloud(CloudOption::Zipkin),
        }
    }
}
