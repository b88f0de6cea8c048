//! File-level loading on top of the parser and binder.
//!
//! Responsibilities:
//! - Locate and read an INI file (`ConfigLoader`), optionally after loading `.env`.
//! - Keep the last parsed map for callers that want it later (`ConfigCache`).
//!
//! Does NOT handle:
//! - Line parsing or field coercion (see `datamap` and `binder`).

mod builder;
mod cache;

pub use builder::ConfigLoader;
pub use cache::ConfigCache;
