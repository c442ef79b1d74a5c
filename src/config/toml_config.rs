use crate::core::catalog::StaticCatalog;
use crate::core::session::DEFAULT_STORAGE_KEY;
use crate::core::Offering;
use crate::utils::error::{GymError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

const BUILTIN_SITE: &str = include_str!("../../config/site.toml");

static ENV_VAR_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub programs: Vec<Offering>,
    pub session: Option<SessionConfig>,
    pub simulation: Option<SimulationConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub storage_key: Option<String>,
    pub storage_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub login_latency_ms: Option<u64>,
    pub signup_latency_ms: Option<u64>,
    pub checkout_latency_ms: Option<u64>,
    pub contact_latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GymError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GymError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 內建的網站配置 (六個課程)
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_SITE)
    }

    /// 替換環境變數 (例如 ${STORAGE_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("site.name", &self.site.name)?;

        if self.programs.is_empty() {
            return Err(GymError::ConfigError {
                message: "at least one [[programs]] entry is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for program in &self.programs {
            if !seen.insert(program.id) {
                return Err(GymError::InvalidConfigValueError {
                    field: "programs.id".to_string(),
                    value: program.id.to_string(),
                    reason: "Duplicate program id".to_string(),
                });
            }
            crate::utils::validation::validate_program_id(program.id)?;
            crate::utils::validation::validate_non_empty_string("programs.title", &program.title)?;
        }

        if let Some(key) = self.session.as_ref().and_then(|s| s.storage_key.as_deref()) {
            crate::utils::validation::validate_non_empty_string("session.storage_key", key)?;
        }
        if let Some(dir) = self.session.as_ref().and_then(|s| s.storage_dir.as_deref()) {
            crate::utils::validation::validate_path("session.storage_dir", dir)?;
        }

        Ok(())
    }

    pub fn catalog(&self) -> StaticCatalog {
        StaticCatalog::new(self.programs.clone())
    }

    pub fn storage_key(&self) -> &str {
        self.session
            .as_ref()
            .and_then(|s| s.storage_key.as_deref())
            .unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn storage_dir(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.storage_dir.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn login_latency(&self) -> Duration {
        self.latency(|s| s.login_latency_ms)
    }

    pub fn signup_latency(&self) -> Duration {
        self.latency(|s| s.signup_latency_ms)
    }

    pub fn checkout_latency(&self) -> Duration {
        self.latency(|s| s.checkout_latency_ms)
    }

    pub fn contact_latency(&self) -> Duration {
        self.latency(|s| s.contact_latency_ms)
    }

    fn latency(&self, pick: impl Fn(&SimulationConfig) -> Option<u64>) -> Duration {
        Duration::from_millis(self.simulation.as_ref().and_then(pick).unwrap_or(0))
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
