use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use seclint_core::Severity;
use seclint_rules::{builtin_rules, find_rule, Rule};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown rule in config: {0}")]
    UnknownRule(String),
}

/// Contents of `seclint.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl Config {
    /// Every builtin rule listed explicitly at its default severity.
    pub fn default_file() -> Self {
        let rules = builtin_rules()
            .iter()
            .map(|r| {
                let rc = RuleConfig {
                    enabled: Some(true),
                    severity: Some(r.default_severity()),
                };
                (r.id().to_string(), rc)
            })
            .collect();
        Self { rules }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(s).with_context(|| "parse seclint.toml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::parse(&s).with_context(|| format!("load {}", path.display()))
    }

    /// Falls back to the defaults when `path` does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for id in self.rules.keys() {
            if find_rule(id).is_none() {
                return Err(ConfigError::UnknownRule(id.clone()));
            }
        }
        Ok(())
    }

    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules.get(rule_id).and_then(|c| c.enabled).unwrap_or(true)
    }

    pub fn severity_for(&self, rule: &dyn Rule) -> Severity {
        self.rules
            .get(rule.id())
            .and_then(|c| c.severity)
            .unwrap_or_else(|| rule.default_severity())
    }

    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join("seclint.toml")
    }

    /// Writes `default_file()` into `dir`. Refuses to overwrite an existing config.
    pub fn init_in(dir: &Path) -> Result<PathBuf> {
        let path = Self::config_path(dir);
        if path.exists() {
            return Err(anyhow!("{} already exists", path.display()));
        }
        Self::default_file().save_to(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seclint_rules::{OperationMustHaveSecurity, OPERATION_MUST_HAVE_SECURITY};

    #[test]
    fn empty_config_enables_everything() {
        let cfg = Config::parse("").unwrap();
        assert!(cfg.is_rule_enabled(OPERATION_MUST_HAVE_SECURITY));
        assert_eq!(cfg.severity_for(&OperationMustHaveSecurity), Severity::Error);
    }

    #[test]
    fn overrides_severity_and_enabled() {
        let cfg = Config::parse(
            r#"
[rules.operation-must-have-security]
enabled = false
severity = "warn"
"#,
        )
        .unwrap();
        assert!(!cfg.is_rule_enabled(OPERATION_MUST_HAVE_SECURITY));
        assert_eq!(cfg.severity_for(&OperationMustHaveSecurity), Severity::Warn);
    }

    #[test]
    fn rejects_unknown_rule() {
        let err = Config::parse("[rules.made-up]\nenabled = true\n").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some(), "{err:#}");
    }

    #[test]
    fn rejects_unknown_severity() {
        assert!(Config::parse("[rules.operation-must-have-security]\nseverity = \"fatal\"\n").is_err());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::config_path(&dir.path().join("nested"));
        let cfg = Config::default_file();
        cfg.save_to(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[rules.operation-must-have-security]"), "{text}");
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::init_in(dir.path()).unwrap();
        assert_eq!(path, Config::config_path(dir.path()));
        assert_eq!(Config::load_from(&path).unwrap(), Config::default_file());

        std::fs::write(&path, "[rules.operation-must-have-security]\nseverity = \"warn\"\n").unwrap();
        let before = std::fs::read_to_string(&path).unwrap();
        let err = Config::init_in(dir.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"), "{err:#}");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_or_default(&dir.path().join("seclint.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
