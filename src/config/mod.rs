use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

pub struct MdreportConfig {
    figment: Figment,
}

impl MdreportConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment
                .merge(Toml::file(custom_path))
                .merge(Json::file(custom_path))
                .merge(Yaml::file(custom_path));
        } else {
            // Standard priority: user config -> repo config
            figment = figment
                .merge(Toml::file(Self::user_config_path()))
                .merge(Toml::file("mdreport.toml"))
                .merge(Json::file("mdreport.json"))
                .merge(Yaml::file("mdreport.yaml"))
                .merge(Yaml::file("mdreport.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("MDREPORT_"));

        Ok(MdreportConfig { figment })
    }

    /// Get a boolean value from config
    pub fn get_bool(&self, path: &str) -> Result<bool> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get a usize value from config
    pub fn get_usize(&self, path: &str) -> Result<usize> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get a string value from config
    pub fn get_string(&self, path: &str) -> Result<String> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/mdreport/config.toml", home),
            Err(_) => "~/.config/mdreport/config.toml".to_string(),
        }
    }
}

/// Render knobs resolved once per invocation. Missing or invalid config
/// values fall back to the embedded defaults rather than erroring.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Character budget for description cells
    pub description_limit: usize,
    /// Character budget for reference-list cells
    pub reference_limit: usize,
    /// Retry the bare file name in cwd on a permission failure
    pub fallback_to_cwd: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            description_limit: 100,
            reference_limit: 50,
            fallback_to_cwd: true,
        }
    }
}

impl RenderSettings {
    pub fn from_config(config: &MdreportConfig) -> Self {
        let defaults = Self::default();
        Self {
            description_limit: config
                .get_usize("render.description_limit")
                .unwrap_or(defaults.description_limit),
            reference_limit: config
                .get_usize("render.reference_limit")
                .unwrap_or(defaults.reference_limit),
            fallback_to_cwd: config
                .get_bool("output.fallback_to_cwd")
                .unwrap_or(defaults.fallback_to_cwd),
        }
    }
}
