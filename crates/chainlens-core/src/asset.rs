//! Asset descriptors: native/IBC assets and Interchain Token Service tokens.

use crate::serde_helpers::default_on_null;
use crate::text::equals_ignore_case;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-chain representation of an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAddress {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, alias = "ibcDenom")]
    pub ibc_denom: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub decimals: Option<u8>,
}

impl AssetAddress {
    fn matches(&self, key: &str) -> bool {
        [&self.address, &self.ibc_denom, &self.symbol]
            .into_iter()
            .flatten()
            .any(|v| equals_ignore_case(v, key))
    }
}

/// A fungible asset known to the assets API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub id: String,
    #[serde(default)]
    pub denom: Option<String>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub denoms: Vec<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub decimals: Option<u8>,
    #[serde(default)]
    pub image: Option<String>,
    /// chain id → per-chain representation, in API order
    #[serde(default, deserialize_with = "default_on_null")]
    pub addresses: IndexMap<String, AssetAddress>,
}

impl AssetDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            denom: None,
            denoms: vec![],
            symbol: None,
            name: None,
            decimals: None,
            image: None,
            addresses: IndexMap::new(),
        }
    }

    /// All denoms: `denom` first, then `denoms`.
    pub fn all_denoms(&self) -> impl Iterator<Item = &str> {
        self.denom
            .iter()
            .chain(self.denoms.iter())
            .map(String::as_str)
    }

    /// Case-insensitive match on a denom, the symbol, or any per-chain
    /// address / IBC denom / symbol.
    pub fn matches(&self, key: &str) -> bool {
        self.all_denoms().any(|d| equals_ignore_case(d, key))
            || self.symbol.as_deref().is_some_and(|s| equals_ignore_case(s, key))
            || self.addresses.values().any(|a| a.matches(key))
    }

    /// Representation of this asset on `chain`, if registered.
    pub fn on_chain(&self, chain: &str) -> Option<&AssetAddress> {
        self.addresses
            .iter()
            .find(|(c, _)| equals_ignore_case(c, chain))
            .map(|(_, a)| a)
    }
}

/// An ITS token deployment on one chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItsChainToken {
    #[serde(default, alias = "tokenAddress")]
    pub token_address: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// An Interchain Token Service asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItsAssetDescriptor {
    /// Token id (32-byte hex).
    pub id: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub decimals: Option<u8>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub addresses: Vec<String>,
    /// chain id → deployment
    #[serde(default, deserialize_with = "default_on_null")]
    pub chains: IndexMap<String, ItsChainToken>,
}

impl ItsAssetDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: None,
            name: None,
            decimals: None,
            image: None,
            addresses: vec![],
            chains: IndexMap::new(),
        }
    }

    /// Case-insensitive match on id, symbol, any listed address, or any
    /// per-chain token address.
    pub fn matches(&self, key: &str) -> bool {
        equals_ignore_case(&self.id, key)
            || self.symbol.as_deref().is_some_and(|s| equals_ignore_case(s, key))
            || self.addresses.iter().any(|a| equals_ignore_case(a, key))
            || self
                .chains
                .values()
                .filter_map(|c| c.token_address.as_deref())
                .any(|a| equals_ignore_case(a, key))
    }
}
