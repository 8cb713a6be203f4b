#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::category::Category;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "nearby-places")]
#[command(about = "List places of interest around a business address")]
pub struct CliConfig {
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    #[arg(long, default_value = "")]
    pub address: String,

    /// Comma-separated category ids or Japanese labels (e.g. cafe,銀行)
    #[arg(long, value_delimiter = ',', default_value = "restaurant")]
    pub categories: Vec<Category>,

    #[arg(long, default_value = "500", help = "Search radius in metres")]
    pub radius: u32,

    #[arg(long, default_value = "ja")]
    pub language: String,

    #[arg(long, default_value = crate::adapters::DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "2000")]
    pub page_delay_ms: u64,

    #[arg(long, default_value = "100")]
    pub detail_delay_ms: u64,

    #[arg(long, help = "Bundle the outputs into a single ZIP archive")]
    pub zip: bool,

    #[arg(long, help = "Log per-phase memory and timing statistics")]
    pub monitor: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Print the supported categories and exit")]
    pub list_categories: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn address(&self) -> &str {
        &self.address
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn radius_m(&self) -> u32 {
        self.radius
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    fn detail_delay(&self) -> Duration {
        Duration::from_millis(self.detail_delay_ms)
    }

    fn compress_output(&self) -> bool {
        self.zip
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("api_key", &self.api_key)?;
        validation::validate_non_empty_string("address", &self.address)?;
        validation::validate_non_empty_list("categories", &self.categories)?;
        validation::validate_radius("radius", self.radius)?;
        validation::validate_language("language", &self.language)?;
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
