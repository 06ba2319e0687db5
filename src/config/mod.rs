use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validator;

use crate::adapters::html_generator::DEFAULT_MAX_DEPTH;
use crate::cli::Cli;
use crate::domain::Locale;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub defaults: LengthDefaults,
}

/// How the registry's generators are built
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneratorSettings {
    /// Vocabulary used for names, addresses and other semantic values
    #[serde(default)]
    pub locale: Locale,
    /// Fixed seed for reproducible output; entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Nesting cap for generated HTML
    #[serde(default = "default_html_max_depth")]
    pub html_max_depth: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            seed: None,
            html_max_depth: default_html_max_depth(),
        }
    }
}

/// Bounds applied when `generate` is called without `--min`/`--max`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LengthDefaults {
    #[serde(default = "default_min_length")]
    pub min_length: i64,
    #[serde(default = "default_max_length")]
    pub max_length: i64,
}

impl Default for LengthDefaults {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

fn default_html_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_min_length() -> i64 {
    8
}

fn default_max_length() -> i64 {
    32
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (config file, then CLI flags and env)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(cli.config.clone()).required(false))
            .set_default("generator.locale", Locale::default().as_str())?
            .set_default("generator.html_max_depth", DEFAULT_MAX_DEPTH as i64)?
            .set_default("defaults.min_length", default_min_length())?
            .set_default("defaults.max_length", default_max_length())?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `metis-formats.{toml,yaml,json}` from `root`, if one exists
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("metis-formats");
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .set_default("generator.locale", Locale::default().as_str())?
            .set_default("generator.html_max_depth", DEFAULT_MAX_DEPTH as i64)?
            .set_default("defaults.min_length", default_min_length())?
            .set_default("defaults.max_length", default_max_length())?
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(locale) = cli.locale {
            self.generator.locale = locale;
        }
        if let Some(seed) = cli.seed {
            self.generator.seed = Some(seed);
        }
        if let Some(depth) = cli.html_max_depth {
            self.generator.html_max_depth = depth;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
