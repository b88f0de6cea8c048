//! Rendering of a parsed `DataMap` for stdout.

use std::path::Path;

use anyhow::Result;
use envini::DataMap;

use crate::args::OutputFormat;

/// Render `map` in the requested format.
///
/// JSON output is prefixed with a `<path> as JSON:` header line.
pub fn render(map: &DataMap, format: OutputFormat, path: &Path) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!(
            "{} as JSON:\n{}",
            path.display(),
            serde_json::to_string_pretty(&map.to_json())?
        )),
        OutputFormat::Text => Ok(map.to_string()),
    }
}
