//! # chainlens-core
//!
//! Primitive normalizers and the shared data model used by every ChainLens
//! crate. Nothing in here performs I/O: values come in as borrowed strings or
//! `serde_json::Value`s and leave as typed results.
//!
//! Normalization never fails loudly. A value that cannot be interpreted
//! becomes `None`, an empty sequence, or a documented fallback, so display
//! code can render a blank field instead of bailing out.

pub mod asset;
pub mod bytes;
pub mod chain;
pub mod error;
pub mod json;
pub mod number;
pub mod serde_helpers;
pub mod text;

pub use asset::{AssetAddress, AssetDescriptor, ItsAssetDescriptor, ItsChainToken};
pub use bytes::{decode_bytes, normalize_recovery_bytes, RecoveryInput};
pub use chain::{ChainDescriptor, ChainType, ExplorerConfig, LinkKind, NativeChainId};
pub use error::{DecodeError, DirectoryError};
pub use json::{parse_json_like, to_json};
pub use number::{format_units, is_number, parse_number, to_fixed, to_number};
pub use text::{split, to_array, to_case, Case, SplitOptions};
