use crate::core::ConfigProvider;
use crate::domain::category::Category;
use crate::utils::error::{PlacesError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub search: SearchConfig,
    pub provider: ProviderConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub address: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    #[serde(default = "default_radius")]
    pub radius_m: u32,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub page_delay_ms: Option<u64>,
    pub detail_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    #[serde(default)]
    pub compress: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub json_logs: Option<bool>,
}

fn default_categories() -> Vec<Category> {
    vec![Category::default()]
}

fn default_radius() -> u32 {
    500
}

fn default_language() -> String {
    "ja".to_string()
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlacesError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GOOGLE_MAPS_API_KEY})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn api_key(&self) -> Result<&str> {
        let key = validation::validate_required_field("provider.api_key", &self.provider.api_key)?;
        if key.starts_with("${") {
            return Err(PlacesError::MissingConfigError {
                field: format!("provider.api_key (unset environment variable {})", key),
            });
        }
        Ok(key)
    }

    pub fn base_url(&self) -> &str {
        self.provider
            .base_url
            .as_deref()
            .unwrap_or(crate::adapters::DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.provider.timeout_seconds.map(Duration::from_secs)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn address(&self) -> &str {
        &self.search.address
    }

    fn categories(&self) -> &[Category] {
        &self.search.categories
    }

    fn radius_m(&self) -> u32 {
        self.search.radius_m
    }

    fn language(&self) -> &str {
        &self.search.language
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn page_delay(&self) -> Duration {
        self.provider
            .page_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::core::collector::DEFAULT_PAGE_DELAY)
    }

    fn detail_delay(&self) -> Duration {
        self.provider
            .detail_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::core::records::DEFAULT_DETAIL_DELAY)
    }

    fn compress_output(&self) -> bool {
        self.load.compress
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.api_key()?;
        validation::validate_non_empty_string("search.address", &self.search.address)?;
        validation::validate_non_empty_list("search.categories", &self.search.categories)?;
        validation::validate_radius("search.radius_m", self.search.radius_m)?;
        validation::validate_language("search.language", &self.search.language)?;
        validation::validate_url("provider.base_url", self.base_url())?;
        if let Some(timeout) = self.provider.timeout_seconds {
            validation::validate_range("provider.timeout_seconds", timeout, 1, 300)?;
        }
        validation::validate_path("load.output_path", &self.load.output_path)?;
        Ok(())
    }
}
