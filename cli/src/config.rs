//! CLI configuration: YAML file, then `CHAINLENS_*` environment variables,
//! then command-line flags (applied in `main`).

use anyhow::{Context, Result};
use chainlens_directory::{AssetDirectory, ChainDirectory, ClassifierConfig, ItsAssetDirectory};
use chainlens_observability::LogConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "chainlens.yaml";

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Chains API snapshot (JSON)
    #[serde(default)]
    pub chains: Option<PathBuf>,
    /// Assets API snapshot (JSON)
    #[serde(default)]
    pub assets: Option<PathBuf>,
    /// ITS assets API snapshot (JSON)
    #[serde(default)]
    pub its_assets: Option<PathBuf>,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub log: LogConfig,
    /// File this config was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl CliConfig {
    /// Load `path`, or `./chainlens.yaml` if present, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        };
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config '{}'", path.display()))?;
        let mut cfg: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config '{}'", path.display()))?;
        cfg.source = Some(path);
        Ok(cfg)
    }

    /// Apply `CHAINLENS_*` overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("CHAINLENS_CHAINS") {
            self.chains = Some(v.into());
        }
        if let Some(v) = lookup("CHAINLENS_ASSETS") {
            self.assets = Some(v.into());
        }
        if let Some(v) = lookup("CHAINLENS_ITS_ASSETS") {
            self.its_assets = Some(v.into());
        }
        if let Some(v) = lookup("CHAINLENS_HOME_PREFIX") {
            self.classifier.home_prefix = v;
        }
        if let Some(v) = lookup("CHAINLENS_VALIDATOR_PREFIX") {
            self.classifier.validator_prefix = v;
        }
        if let Some(v) = lookup("CHAINLENS_LOG") {
            self.log.level = v;
        }
        if let Some(v) = lookup("CHAINLENS_LOG_JSON") {
            self.log.json = matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }
    }

    /// Chain directory from the configured file; empty when none is set.
    pub fn chain_directory(&self) -> Result<ChainDirectory> {
        match &self.chains {
            Some(p) => ChainDirectory::load_file(p)
                .with_context(|| format!("loading chains from '{}'", p.display())),
            None => Ok(ChainDirectory::default()),
        }
    }

    pub fn asset_directory(&self) -> Result<AssetDirectory> {
        match &self.assets {
            Some(p) => AssetDirectory::load_file(p)
                .with_context(|| format!("loading assets from '{}'", p.display())),
            None => Ok(AssetDirectory::default()),
        }
    }

    pub fn its_asset_directory(&self) -> Result<ItsAssetDirectory> {
        match &self.its_assets {
            Some(p) => ItsAssetDirectory::load_file(p)
                .with_context(|| format!("loading ITS assets from '{}'", p.display())),
            None => Ok(ItsAssetDirectory::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn yaml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chains: ./chains.json\nlog:\n  level: debug").unwrap();
        let cfg = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.chains, Some(PathBuf::from("./chains.json")));
        assert_eq!(cfg.assets, None);
        assert_eq!(cfg.log.level, "debug");
        assert_eq!(cfg.classifier, ClassifierConfig::default());
        assert_eq!(cfg.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn env_overrides_file() {
        let env: HashMap<&str, &str> = [
            ("CHAINLENS_CHAINS", "/tmp/chains.json"),
            ("CHAINLENS_HOME_PREFIX", "osmo"),
            ("CHAINLENS_LOG_JSON", "true"),
        ]
        .into_iter()
        .collect();
        let mut cfg = CliConfig::default();
        cfg.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.chains, Some(PathBuf::from("/tmp/chains.json")));
        assert_eq!(cfg.classifier.home_prefix, "osmo");
        assert_eq!(cfg.classifier.validator_prefix, "axelarvaloper");
        assert!(cfg.log.json);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/chainlens.yaml"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn unset_directories_are_empty() {
        let cfg = CliConfig::default();
        assert!(cfg.chain_directory().unwrap().is_empty());
        assert!(cfg.asset_directory().unwrap().is_empty());
        assert!(cfg.its_asset_directory().unwrap().is_empty());
        assert_eq!(cfg.source, None);
    }
}
