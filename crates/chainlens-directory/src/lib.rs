//! # chainlens-directory
//!
//! In-memory chain and asset directories with loose-key resolution, plus the
//! search-input classifier that sits on top of them.
//!
//! ## Resolution order
//! 1. Case-insensitive equality on any identifier (first descriptor wins)
//! 2. Loose mode only: address / chain-id prefix match (first descriptor wins)
//! 3. The lower-cased key itself, so callers always get a deterministic slug
//!
//! Directories are immutable snapshots. Load them once from the chains /
//! assets API responses and share them (`Arc`) across callers.

pub mod assets;
pub mod chains;
pub mod classifier;
mod load;

pub use assets::{AssetDirectory, ItsAssetDirectory};
pub use chains::{Ambiguity, AmbiguityKind, ChainDirectory, Match};
pub use classifier::{classify, ClassifiedInput, Classifier, ClassifierConfig, InputKind};
