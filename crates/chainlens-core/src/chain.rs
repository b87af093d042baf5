//! Chain descriptors as served by the chains API.

use crate::serde_helpers::default_on_null;
use serde::{Deserialize, Serialize};
use std::fmt;

/// VM family of a chain. Unknown families deserialize as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Evm,
    Cosmos,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainType::Evm => write!(f, "evm"),
            ChainType::Cosmos => write!(f, "cosmos"),
            ChainType::Other => write!(f, "other"),
        }
    }
}

/// Native chain identifier: an EVM chain id (`1`) or a Cosmos chain id
/// (`"axelar-dojo-1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NativeChainId {
    Numeric(u64),
    Named(String),
}

impl fmt::Display for NativeChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeChainId::Numeric(n) => write!(f, "{n}"),
            NativeChainId::Named(s) => write!(f, "{s}"),
        }
    }
}

/// Block explorer settings for a chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Base URL, e.g. `"https://etherscan.io"`
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Path template containing `{block}`
    #[serde(default)]
    pub block_path: Option<String>,
    /// Path template containing `{address}`
    #[serde(default)]
    pub address_path: Option<String>,
    /// Path template containing `{address}`
    #[serde(default)]
    pub contract_path: Option<String>,
    /// Path template containing `{tx}`
    #[serde(default)]
    pub transaction_path: Option<String>,
    /// The explorer expects hashes and addresses without a leading `0x`.
    #[serde(default, alias = "noLeadingHex", deserialize_with = "default_on_null")]
    pub no_0x: bool,
    /// Contracts only render on `contract_path`, not on the address page.
    #[serde(default, alias = "cannotLinkContractViaAddress", deserialize_with = "default_on_null")]
    pub cannot_link_contract_via_address: bool,
}

/// Entity an explorer link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Block,
    Address,
    Contract,
    Transaction,
}

impl ExplorerConfig {
    /// Build a link to `value` on this explorer, or `None` if no base URL is
    /// configured.
    pub fn link(&self, kind: LinkKind, value: &str) -> Option<String> {
        let base = self.url.as_deref().filter(|u| !u.is_empty())?;
        let base = base.trim_end_matches('/');

        let value = match kind {
            LinkKind::Block => value,
            _ if self.no_0x => value.strip_prefix("0x").unwrap_or(value),
            _ => value,
        };

        let path = match kind {
            LinkKind::Block => template(&self.block_path, "/block/{block}"),
            LinkKind::Address => template(&self.address_path, "/address/{address}"),
            LinkKind::Contract if self.cannot_link_contract_via_address => {
                template(&self.contract_path, template(&self.address_path, "/address/{address}"))
            }
            LinkKind::Contract => template(&self.address_path, "/address/{address}"),
            LinkKind::Transaction => template(&self.transaction_path, "/tx/{tx}"),
        };
        let path = path
            .replace("{block}", value)
            .replace("{address}", value)
            .replace("{tx}", value);
        Some(format!("{base}{path}"))
    }
}

fn template<'a>(configured: &'a Option<String>, fallback: &'a str) -> &'a str {
    configured.as_deref().filter(|p| !p.is_empty()).unwrap_or(fallback)
}

/// One supported blockchain.
///
/// Field names follow the chains API; the camelCase spellings used by the
/// explorer UI are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDescriptor {
    /// Canonical slug, unique within a directory.
    pub id: String,
    #[serde(default, alias = "chainId")]
    pub chain_id: Option<NativeChainId>,
    #[serde(default, alias = "chainName")]
    pub chain_name: Option<String>,
    #[serde(default, alias = "maintainerId")]
    pub maintainer_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub aliases: Vec<String>,
    /// Bech32 human-readable prefix, e.g. `"axelar"`
    #[serde(default, alias = "addressPrefix")]
    pub prefix_address: Option<String>,
    #[serde(default, alias = "chainIdPrefixes", deserialize_with = "default_on_null")]
    pub prefix_chain_ids: Vec<String>,
    #[serde(default, alias = "chainType", deserialize_with = "default_on_null")]
    pub chain_type: ChainType,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub deprecated: bool,
    #[serde(default, deserialize_with = "default_on_null")]
    pub explorer: ExplorerConfig,
}

impl ChainDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            chain_id: None,
            chain_name: None,
            maintainer_id: None,
            name: None,
            aliases: vec![],
            prefix_address: None,
            prefix_chain_ids: vec![],
            chain_type: ChainType::Other,
            image: None,
            deprecated: false,
            explorer: ExplorerConfig::default(),
        }
    }

    /// Every string this chain can be referred to by exactly: id, native
    /// chain id, chain name, maintainer id, name, then aliases.
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids = Vec::with_capacity(5 + self.aliases.len());
        ids.push(self.id.clone());
        ids.extend(self.chain_id.as_ref().map(ToString::to_string));
        ids.extend(self.chain_name.iter().cloned());
        ids.extend(self.maintainer_id.iter().cloned());
        ids.extend(self.name.iter().cloned());
        ids.extend(self.aliases.iter().cloned());
        ids
    }

    /// Address prefix followed by chain-id prefixes, blanks skipped.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefix_address
            .iter()
            .chain(self.prefix_chain_ids.iter())
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }

    /// Explorer link for this chain, see [`ExplorerConfig::link`].
    pub fn explorer_link(&self, kind: LinkKind, value: &str) -> Option<String> {
        self.explorer.link(kind, value)
    }
}

impl fmt::Display for ChainDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
