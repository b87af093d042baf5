//! Search-input classification.
//!
//! Patterns are tried top to bottom and the first hit wins:
//!
//! | # | pattern                                   | kind               |
//! |---|-------------------------------------------|--------------------|
//! | 1 | `0x` + 64 hex                             | `TxHash`           |
//! | 2 | `0x` + 40 hex                             | `EvmAddress`       |
//! | 3 | `label.label…tld` (1–6 letter TLD)        | `DomainName`       |
//! | 4 | validator prefix (`axelarvaloper…`)       | `ValidatorAddress` |
//! | 5 | home prefix (`axelar…`)                   | `AxelarAddress`    |
//! | 6 | another chain's bech32 prefix             | `CosmosAddress`    |
//! | 7 | digits only                               | `BlockHeight`      |
//! | – | anything else                             | `TxHash`           |

use crate::chains::ChainDirectory;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// What a search string most likely refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InputKind {
    BlockHeight,
    TxHash,
    EvmAddress,
    DomainName,
    ValidatorAddress,
    /// Account on the home chain.
    AxelarAddress,
    /// Bech32 account on another Cosmos chain.
    CosmosAddress { chain: String },
}

/// A classified search string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedInput<'a> {
    #[serde(flatten)]
    pub kind: InputKind,
    /// The trimmed input.
    pub input: &'a str,
}

/// Home-chain prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_home_prefix")]
    pub home_prefix: String,
    #[serde(default = "default_validator_prefix")]
    pub validator_prefix: String,
}

fn default_home_prefix() -> String {
    "axelar".into()
}

fn default_validator_prefix() -> String {
    "axelarvaloper".into()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            home_prefix: default_home_prefix(),
            validator_prefix: default_validator_prefix(),
        }
    }
}

fn tx_hash_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{64}$").expect("valid regex"))
}

fn evm_address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("valid regex"))
}

fn domain_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{1,6}$")
            .expect("valid regex")
    })
}

fn block_height_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("valid regex"))
}

/// Classifier bound to a chain directory.
#[derive(Debug, Clone)]
pub struct Classifier<'d> {
    directory: &'d ChainDirectory,
    config: ClassifierConfig,
}

impl<'d> Classifier<'d> {
    pub fn new(directory: &'d ChainDirectory) -> Self {
        Self::with_config(directory, ClassifierConfig::default())
    }

    pub fn with_config(directory: &'d ChainDirectory, config: ClassifierConfig) -> Self {
        Self { directory, config }
    }

    /// Classify `input`. Blank input is unclassified (`None`); anything else
    /// always gets a kind.
    pub fn classify<'a>(&self, input: &'a str) -> Option<ClassifiedInput<'a>> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        Some(ClassifiedInput {
            kind: self.kind_of(input),
            input,
        })
    }

    fn kind_of(&self, input: &str) -> InputKind {
        if tx_hash_re().is_match(input) {
            return InputKind::TxHash;
        }
        if evm_address_re().is_match(input) {
            return InputKind::EvmAddress;
        }
        if domain_re().is_match(input) {
            return InputKind::DomainName;
        }

        let lower = input.to_lowercase();
        let home = self.config.home_prefix.to_lowercase();
        let validator = self.config.validator_prefix.to_lowercase();
        if !validator.is_empty() && lower.starts_with(&validator) {
            return InputKind::ValidatorAddress;
        }
        if !home.is_empty() && lower.starts_with(&home) {
            return InputKind::AxelarAddress;
        }

        let other_chain = self.directory.iter().find(|c| {
            c.prefix_address
                .as_deref()
                .map(str::to_lowercase)
                .is_some_and(|p| !p.is_empty() && p != home && lower.starts_with(&p))
        });
        if let Some(chain) = other_chain {
            return InputKind::CosmosAddress {
                chain: chain.id.clone(),
            };
        }

        if block_height_re().is_match(input) {
            InputKind::BlockHeight
        } else {
            InputKind::TxHash
        }
    }
}

/// Classify with the default home-chain prefixes.
pub fn classify<'a>(input: &'a str, directory: &ChainDirectory) -> Option<ClassifiedInput<'a>> {
    Classifier::new(directory).classify(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainlens_core::chain::ChainDescriptor;

    fn directory() -> ChainDirectory {
        let mut axelar = ChainDescriptor::new("axelarnet");
        axelar.prefix_address = Some("axelar".into());
        let mut osmosis = ChainDescriptor::new("osmosis");
        osmosis.prefix_address = Some("osmo".into());
        let mut cosmos = ChainDescriptor::new("cosmoshub");
        cosmos.prefix_address = Some("cosmos".into());
        ChainDirectory::new(vec![axelar, osmosis, cosmos]).unwrap()
    }

    fn kind(input: &str) -> Option<InputKind> {
        classify(input, &directory()).map(|c| c.kind)
    }

    #[test]
    fn tx_hash_beats_evm_address() {
        let hash = format!("0x{}", "ab".repeat(32));
        assert_eq!(hash.len(), 66);
        assert_eq!(kind(&hash), Some(InputKind::TxHash));
        assert_eq!(kind(&hash[..42]), Some(InputKind::EvmAddress));
    }

    #[test]
    fn domain_names() {
        assert_eq!(kind("vitalik.eth"), Some(InputKind::DomainName));
        assert_eq!(kind("sub.name.axelar"), Some(InputKind::DomainName));
        assert_ne!(kind("1.5"), Some(InputKind::DomainName));
    }

    #[test]
    fn validator_before_home_address() {
        assert_eq!(
            kind("axelarvaloper1abcdef"),
            Some(InputKind::ValidatorAddress)
        );
        assert_eq!(kind("axelar1abcdef"), Some(InputKind::AxelarAddress));
    }

    #[test]
    fn other_cosmos_chains_by_prefix() {
        assert_eq!(
            kind("osmo1xyz"),
            Some(InputKind::CosmosAddress {
                chain: "osmosis".into()
            })
        );
        assert_eq!(
            kind("cosmos1xyz"),
            Some(InputKind::CosmosAddress {
                chain: "cosmoshub".into()
            })
        );
    }

    #[test]
    fn fallbacks() {
        assert_eq!(kind("  123456 "), Some(InputKind::BlockHeight));
        assert_eq!(
            kind("A1B2C3D4E5F60718293A4B5C6D7E8F90A1B2C3D4E5F60718293A4B5C6D7E8F90"),
            Some(InputKind::TxHash)
        );
        assert_eq!(kind(""), None);
        assert_eq!(kind("   "), None);
    }

    #[test]
    fn custom_home_prefix() {
        let dir = directory();
        let classifier = Classifier::with_config(
            &dir,
            ClassifierConfig {
                home_prefix: "osmo".into(),
                validator_prefix: "osmovaloper".into(),
            },
        );
        let out = classifier.classify("osmovaloper1q").unwrap();
        assert_eq!(out.kind, InputKind::ValidatorAddress);
        assert_eq!(out.input, "osmovaloper1q");
        assert_eq!(
            classifier.classify("axelar1q").unwrap().kind,
            InputKind::CosmosAddress {
                chain: "axelarnet".into()
            }
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let dir = directory();
        let out = classify("osmo1abc", &dir).unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["kind"], "cosmosAddress");
        assert_eq!(json["chain"], "osmosis");
        assert_eq!(json["input"], "osmo1abc");
    }
}
