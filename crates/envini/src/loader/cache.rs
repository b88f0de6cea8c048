//! Caller-owned holder for the most recently parsed map.
//!
//! Invariants:
//! - Every `load*` call discards the previous map before parsing, so a failed
//!   call leaves the cache empty rather than holding a stale map.
//! - Nothing here is global; each cache belongs to whoever created it.

use super::builder::ConfigLoader;
use crate::binder::{Bindable, unmarshal};
use crate::datamap::DataMap;
use crate::error::{BindError, ConfigError};

/// Keeps the `DataMap` from the last successful bind for later inspection.
#[derive(Debug, Default)]
pub struct ConfigCache {
    current: Option<DataMap>,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `data`, bind it into `dest`, and keep the resulting map.
    pub fn load(&mut self, data: &[u8], dest: &mut dyn Bindable) -> Result<&DataMap, BindError> {
        self.current = None;
        let map = unmarshal(data, dest)?;
        Ok(self.current.insert(map))
    }

    /// Same as [`ConfigCache::load`] but reads the file named by `loader`.
    pub fn load_file(
        &mut self,
        loader: &ConfigLoader,
        dest: &mut dyn Bindable,
    ) -> Result<&DataMap, ConfigError> {
        self.current = None;
        let map = loader.load_into(dest)?;
        Ok(self.current.insert(map))
    }

    pub fn get(&self) -> Option<&DataMap> {
        self.current.as_ref()
    }

    pub fn take(&mut self) -> Option<DataMap> {
        self.current.take()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
