//! INI configuration parsing and binding with environment overrides.
//!
//! This crate parses INI-style text into a section-aware [`DataMap`] and
//! binds it into typed structs described by [`FieldSpec`] tables, with
//! environment variables and declared defaults layered on top.

pub mod binder;
pub mod constants;
pub mod datamap;
mod env;
mod error;
mod loader;

pub use binder::{Bindable, FieldKind, FieldSpec, Slot, bind, is_truthy, unmarshal};
pub use datamap::{Comment, DataMap, Section};
pub use env::env_var_or_none;
pub use error::{BindError, ConfigError, ParseError};
pub use loader::{ConfigCache, ConfigLoader};
