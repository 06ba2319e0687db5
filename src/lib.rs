//! # Metis Formats - format-keyed random data
//!
//! Generates random strings for named formats such as `uuid`, `byte`,
//! `html`, `date-time`, `city` or `words`, the way a mock server fills in
//! schema fields that carry a `format` annotation.
//!
//! ## Features
//!
//! - **~100 format keys**: addresses, names, internet identifiers, codes with
//!   valid check digits, lorem text, hacker jargon and more
//! - **Length-aware generators**: base64 and HTML whose serialized length
//!   lands inside the requested window
//! - **Count-aware lorem**: exact numbers of characters, words, sentences or
//!   paragraphs
//! - **Locales**: English, French and Chinese vocabularies via `fake`
//! - **Reproducible**: optional seed for the shared random source
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use metis_formats::adapters::format_registry::FormatRegistry;
//! use metis_formats::adapters::random_source::RandomSource;
//! use metis_formats::domain::Locale;
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = FormatRegistry::build(Locale::En, Arc::new(RandomSource::seeded(42)));
//!
//!     let encoded = registry.generate("byte", 10, 10)?;
//!     assert_eq!(encoded.len(), 10);
//!
//!     if let Some(generator) = registry.lookup("words") {
//!         println!("{}", generator.generate(5, 5)?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: length constraints, locales, field enums, the provider port
//!   and the error taxonomy
//! - **Adapters**: random source, generators and the format registry
//! - **Config**: layered settings and validation

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

pub use adapters::format_registry::{FormatGenerator, FormatRegistry};
pub use adapters::random_source::RandomSource;
pub use domain::{FormatError, FormatFamily, LengthConstraint, Locale};
