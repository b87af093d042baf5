//! Chain directory and chain-key resolution.

use crate::load;
use chainlens_core::{
    chain::ChainDescriptor,
    error::DirectoryError,
    text::{equals_ignore_case, remove_double_quote},
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// How strictly a key must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Identifier equality only.
    Exact,
    /// Identifier equality, then address / chain-id prefix.
    Loose,
}

/// What two or more chains collide on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmbiguityKind {
    /// The same identifier (alias, name, chain id…) on several chains.
    Identifier,
    /// One chain's prefix is a prefix of another's.
    Prefix,
}

/// A key that resolves to the first of several candidate chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambiguity {
    pub kind: AmbiguityKind,
    /// The colliding identifier or the shorter prefix (lower-cased).
    pub value: String,
    /// Chain ids in directory order; the first one wins.
    pub chains: Vec<String>,
}

/// Immutable list of chains in API order.
#[derive(Debug, Clone, Default)]
pub struct ChainDirectory {
    chains: Vec<ChainDescriptor>,
}

impl ChainDirectory {
    /// Build a directory, rejecting blank or duplicate ids.
    ///
    /// Colliding aliases and prefixes are allowed (the first chain wins) but
    /// logged at `warn`.
    pub fn new(chains: Vec<ChainDescriptor>) -> Result<Self, DirectoryError> {
        load::check_unique_ids("chain", chains.iter().map(|c| c.id.as_str()))?;
        let dir = Self { chains };
        for a in dir.ambiguities() {
            warn!(
                "Ambiguous chain {:?} '{}': {} (first wins)",
                a.kind,
                a.value,
                a.chains.join(", ")
            );
        }
        debug!("Chain directory loaded with {} chains", dir.chains.len());
        Ok(dir)
    }

    /// Parse a chains API response (bare array or `{"data": [...]}`).
    pub fn from_json_str(s: &str) -> Result<Self, DirectoryError> {
        Self::new(load::entries_from_str(s)?)
    }

    pub fn load_file(path: &Path) -> Result<Self, DirectoryError> {
        Self::new(load::entries_from_file(path)?)
    }

    pub fn chains(&self) -> &[ChainDescriptor] {
        &self.chains
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChainDescriptor> {
        self.chains.iter()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Chain with exactly this id.
    pub fn get(&self, id: &str) -> Option<&ChainDescriptor> {
        self.chains.iter().find(|c| c.id == id)
    }

    /// Resolve a loosely specified key to a canonical chain id.
    ///
    /// Wrapping double quotes are stripped first. When nothing matches, the
    /// lower-cased key is returned as a pseudo-id. Only a blank key yields
    /// `None`.
    pub fn chain_key(&self, key: &str, mode: Match) -> Option<String> {
        let key = remove_double_quote(key.trim());
        if key.is_empty() {
            return None;
        }

        if let Some(chain) = self
            .chains
            .iter()
            .find(|c| c.identifiers().iter().any(|id| equals_ignore_case(id, key)))
        {
            return Some(chain.id.clone());
        }

        if mode == Match::Loose {
            let lower = key.to_lowercase();
            if let Some(chain) = self
                .chains
                .iter()
                .find(|c| c.prefixes().any(|p| lower.starts_with(&p.to_lowercase())))
            {
                debug!("Chain key '{}' resolved by prefix to '{}'", key, chain.id);
                return Some(chain.id.clone());
            }
        }

        debug!("Chain key '{}' unresolved, using it as id", key);
        Some(key.to_lowercase())
    }

    /// Resolve `key` to its descriptor. Usually called with [`Match::Exact`]
    /// so that a near-miss never lands on an unrelated chain.
    pub fn chain_data(&self, key: &str, mode: Match) -> Option<&ChainDescriptor> {
        let id = self.chain_key(key, mode)?;
        self.get(&id)
    }

    /// Keys that resolve by list position rather than uniquely.
    pub fn ambiguities(&self) -> Vec<Ambiguity> {
        let mut out = Vec::new();

        let mut by_identifier: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for chain in &self.chains {
            let mut ids: Vec<String> = chain
                .identifiers()
                .into_iter()
                .map(|i| i.to_lowercase())
                .filter(|i| !i.is_empty())
                .collect();
            ids.sort();
            ids.dedup();
            for id in ids {
                by_identifier.entry(id).or_default().push(chain.id.clone());
            }
        }
        out.extend(
            by_identifier
                .into_iter()
                .filter(|(_, chains)| chains.len() > 1)
                .map(|(value, chains)| Ambiguity {
                    kind: AmbiguityKind::Identifier,
                    value,
                    chains,
                }),
        );

        let prefixes: Vec<String> = self
            .chains
            .iter()
            .flat_map(|c| c.prefixes().map(str::to_lowercase))
            .collect();
        let mut by_prefix: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for short in &prefixes {
            let chains: Vec<String> = self
                .chains
                .iter()
                .filter(|c| c.prefixes().any(|p| p.to_lowercase().starts_with(short.as_str())))
                .map(|c| c.id.clone())
                .collect();
            if chains.len() > 1 {
                by_prefix.entry(short.clone()).or_insert(chains);
            }
        }
        out.extend(by_prefix.into_iter().map(|(value, chains)| Ambiguity {
            kind: AmbiguityKind::Prefix,
            value,
            chains,
        }));

        out
    }
}
