use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::ingredients::Vocabulary;
use crate::model::DEFAULT_SERVINGS;

/// Main import configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Units, phrases and split markers used by the ingredient parser
    #[serde(default)]
    pub vocabulary: Vocabulary,
    /// Page scraping settings
    #[serde(default)]
    pub scraping: ScrapingConfig,
    /// Servings written in the header when none is given
    #[serde(default = "default_servings")]
    pub default_servings: u32,
}

/// Settings for fetching and reading recipe pages
#[derive(Debug, Deserialize, Clone)]
pub struct ScrapingConfig {
    /// Text of the heading introducing the ingredient list
    #[serde(default = "default_ingredients_header")]
    pub ingredients_header: String,
    /// Word introducing each numbered step heading ("Étape 1", "Étape 2"...)
    #[serde(default = "default_step_header")]
    pub step_header: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with page requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            scraping: ScrapingConfig::default(),
            default_servings: default_servings(),
        }
    }
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            ingredients_header: default_ingredients_header(),
            step_header: default_step_header(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

fn default_ingredients_header() -> String {
    "Ingrédients".to_string()
}

fn default_step_header() -> String {
    "Étape".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; CookbookImport/0.1)".to_string()
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKBOOK__ prefix
    /// 2. cookbook.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: COOKBOOK__SCRAPING__TIMEOUT=10.
/// Lists are comma separated: COOKBOOK__VOCABULARY__UNITS=g,kg,cl
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("cookbook").required(false))
        .add_source(
            Environment::with_prefix("COOKBOOK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("vocabulary.units")
                .with_list_parse_key("vocabulary.phrases")
                .with_list_parse_key("vocabulary.split_markers"),
        )
        .build()?;

    settings.try_deserialize()
}
