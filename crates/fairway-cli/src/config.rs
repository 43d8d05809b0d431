use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fairway_core::config::{ScoringConfig, ScoringSystemKind};
use fairway_core::validation::{ValidationError, validate_scoring};

pub const DEFAULT_CONFIG_FILE: &str = "fairway.toml";

/// Defaults for rounds scored from the command line, loaded from
/// `fairway.toml`. A round file's own settings take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub scoring: ScoringConfig,
    pub system: ScoringSystemKind,
    pub output: OutputConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            system: ScoringSystemKind::Fighter,
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indented JSON.
    pub pretty: bool,
    /// Per-hole detail in the summary. The round-level views are always
    /// printed.
    pub include_holes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            include_holes: true,
        }
    }
}

impl CliConfig {
    /// Config file to read: an explicit path, then `FAIRWAY_CONFIG`, then
    /// `fairway.toml` in the working directory.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match std::env::var("FAIRWAY_CONFIG") {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load config from `path` if it exists, then apply env var overrides.
    pub fn load(path: &Path) -> Self {
        let mut config = Self::load_file(path);
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    fn load_file(path: &Path) -> Self {
        let shown = path.display();
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<CliConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from {shown}");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {shown}: {e}, using defaults");
                    CliConfig::default()
                },
            },
            Err(_) => {
                tracing::debug!("No {shown} found, using defaults");
                CliConfig::default()
            },
        }
    }

    /// Apply `FAIRWAY_SYSTEM` and `FAIRWAY_PRETTY` from `lookup`. Values that
    /// don't parse are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("FAIRWAY_SYSTEM")
            && !value.is_empty()
        {
            match value.parse::<ScoringSystemKind>() {
                Ok(system) => self.system = system,
                Err(e) => tracing::warn!("Ignoring FAIRWAY_SYSTEM: {e}"),
            }
        }
        if let Some(value) = lookup("FAIRWAY_PRETTY")
            && let Some(pretty) = parse_flag(&value)
        {
            self.output.pretty = pretty;
        }
    }

    /// Validate the default scoring values, returning every problem found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        validate_scoring(&self.scoring)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_values() {
        let cfg = CliConfig::default();
        assert_eq!(cfg.system, ScoringSystemKind::Fighter);
        assert_eq!(cfg.scoring, ScoringConfig::default());
        assert!(cfg.output.pretty);
        assert!(cfg.output.include_holes);
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
system = "single_winner"

[scoring]
birdie = 3

[output]
pretty = false
"#;
        let cfg: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.system, ScoringSystemKind::SingleWinner);
        assert_eq!(cfg.scoring.birdie, 3);
        assert_eq!(cfg.scoring.eagle_or_better, 4);
        assert!(!cfg.output.pretty);
        assert!(cfg.output.include_holes);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = CliConfig::load_file(Path::new("/nonexistent/fairway.toml"));
        assert_eq!(cfg, CliConfig::default());
    }

    #[test]
    fn env_overrides_apply() {
        let mut cfg = CliConfig::default();
        cfg.apply_overrides(env(&[("FAIRWAY_SYSTEM", "single-winner"), ("FAIRWAY_PRETTY", "off")]));
        assert_eq!(cfg.system, ScoringSystemKind::SingleWinner);
        assert!(!cfg.output.pretty);
    }

    #[test]
    fn bad_env_values_ignored() {
        let mut cfg = CliConfig::default();
        cfg.apply_overrides(env(&[("FAIRWAY_SYSTEM", "skins"), ("FAIRWAY_PRETTY", "maybe")]));
        assert_eq!(cfg, CliConfig::default());
    }

    #[test]
    fn explicit_path_wins() {
        let path = CliConfig::resolve_path(Some(Path::new("custom.toml")));
        assert_eq!(path, PathBuf::from("custom.toml"));
    }

    #[test]
    fn validate_reports_out_of_range_scoring() {
        let mut cfg = CliConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.scoring.par = 11;
        cfg.scoring.bogey = -11;
        let errors = cfg.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "scoring.par");
    }
}
