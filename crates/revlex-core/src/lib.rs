//! Core library for revlex.
//!
//! This crate implements the dictionary pipeline behind the `revlex`
//! CLI: filtering a raw wiktextract dump down to one language,
//! building the flat dictionary, deriving the common-word subset, and
//! constructing the English → French reverse lookup index.
//!
//! # Modules
//!
//! - [`kaikki`] - Raw dump models and the per-language line filter
//! - [`database`] - Flat dictionary construction
//! - [`common`] - Common-word subset and verb forms index
//! - [`index`] - Reverse index construction
//! - [`quality`] - Index quality validation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use revlex_core::{ConfigLoader, FrequencyTable, Lexicon};
//!
//! let (config, _sources) = ConfigLoader::new().load().expect("load configuration");
//! let lexicon = Lexicon::load(Utf8Path::new("data/fr-dict.json.gz")).expect("load dictionary");
//! let frequency =
//!     FrequencyTable::load(Utf8Path::new("data/fr_10k.tsv")).expect("load frequency list");
//! let index = revlex_core::index::build(&lexicon, &frequency);
//! println!("{} English words indexed ({})", index.len(), config.language);
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod common;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod frequency;
pub mod index;
pub mod kaikki;
pub mod lexicon;
pub mod quality;
pub mod rank;
pub mod score;
pub mod storage;
pub mod synonyms;
pub mod word_lists;

pub use classify::WordTraits;
pub use common::FormsIndex;
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{BuildError, BuildResult, ConfigError, ConfigResult};
pub use frequency::FrequencyTable;
pub use index::ReverseIndex;
pub use lexicon::Lexicon;
pub use quality::QualityReport;
