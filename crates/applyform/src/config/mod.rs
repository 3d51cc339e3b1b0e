use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub form: FormConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let skills = env::var("APP_SKILLS").unwrap_or_else(|_| DEFAULT_SKILLS.to_string());
        let skill_catalog = parse_skill_catalog(&skills)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            form: FormConfig { skill_catalog },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for the rendered form itself.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Skills offered as checkboxes, in display order.
    pub skill_catalog: Vec<String>,
}

const DEFAULT_SKILLS: &str = "JavaScript,CSS,Python";

fn parse_skill_catalog(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut catalog: Vec<String> = Vec::new();
    for skill in raw.split(',') {
        let skill = skill.trim();
        if skill.is_empty() {
            continue;
        }
        if !catalog.iter().any(|known| known == skill) {
            catalog.push(skill.to_string());
        }
    }
    if catalog.is_empty() {
        return Err(ConfigError::EmptySkillCatalog);
    }
    Ok(catalog)
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptySkillCatalog,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySkillCatalog => {
                write!(f, "APP_SKILLS must list at least one skill")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
