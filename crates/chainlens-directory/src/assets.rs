//! Asset and ITS asset directories.
//!
//! Unlike chains there is no prefix fallback: an asset key either equals one
//! of an asset's identifiers or it does not resolve.

use crate::load;
use chainlens_core::{
    asset::{AssetDescriptor, ItsAssetDescriptor},
    error::DirectoryError,
    text::remove_double_quote,
};
use std::path::Path;
use tracing::debug;

fn normalize_key(key: &str) -> Option<&str> {
    let key = remove_double_quote(key.trim());
    (!key.is_empty()).then_some(key)
}

/// Native and IBC assets in API order.
#[derive(Debug, Clone, Default)]
pub struct AssetDirectory {
    assets: Vec<AssetDescriptor>,
}

impl AssetDirectory {
    pub fn new(assets: Vec<AssetDescriptor>) -> Result<Self, DirectoryError> {
        load::check_unique_ids("asset", assets.iter().map(|a| a.id.as_str()))?;
        debug!("Asset directory loaded with {} assets", assets.len());
        Ok(Self { assets })
    }

    pub fn from_json_str(s: &str) -> Result<Self, DirectoryError> {
        Self::new(load::entries_from_str(s)?)
    }

    pub fn load_file(path: &Path) -> Result<Self, DirectoryError> {
        Self::new(load::entries_from_file(path)?)
    }

    pub fn assets(&self) -> &[AssetDescriptor] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// First asset whose denom, symbol, or any per-chain address / IBC denom
    /// / symbol equals `key` (case-insensitive).
    pub fn asset_data(&self, key: &str) -> Option<&AssetDescriptor> {
        let key = normalize_key(key)?;
        self.assets.iter().find(|a| a.matches(key))
    }
}

/// Interchain Token Service assets in API order.
#[derive(Debug, Clone, Default)]
pub struct ItsAssetDirectory {
    assets: Vec<ItsAssetDescriptor>,
}

impl ItsAssetDirectory {
    pub fn new(assets: Vec<ItsAssetDescriptor>) -> Result<Self, DirectoryError> {
        load::check_unique_ids("ITS asset", assets.iter().map(|a| a.id.as_str()))?;
        debug!("ITS asset directory loaded with {} assets", assets.len());
        Ok(Self { assets })
    }

    pub fn from_json_str(s: &str) -> Result<Self, DirectoryError> {
        Self::new(load::entries_from_str(s)?)
    }

    pub fn load_file(path: &Path) -> Result<Self, DirectoryError> {
        Self::new(load::entries_from_file(path)?)
    }

    pub fn assets(&self) -> &[ItsAssetDescriptor] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// First ITS asset whose id, symbol or any token address equals `key`.
    pub fn its_asset_data(&self, key: &str) -> Option<&ItsAssetDescriptor> {
        let key = normalize_key(key)?;
        self.assets.iter().find(|a| a.matches(key))
    }
}
