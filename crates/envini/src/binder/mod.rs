//! Recursive binder from a `DataMap` into typed destinations.
//!
//! Responsibilities:
//! - Walk a destination's field table in declaration order.
//! - Choose each scalar's literal from the environment, the map, or the declared default.
//! - Coerce the literal into the field's declared kind.
//! - Recurse into nested structures using the nested field's tag as the section.
//!
//! Does NOT handle:
//! - Reading files or `.env` loading (see `loader`).
//!
//! Invariants:
//! - Precedence per field: environment > stored value (section, then GLOBAL) > default.
//! - The environment only replaces a value that was chosen from the map or a default.
//! - A nested field switches the section for itself AND for every later sibling.
//! - Fields with no chosen literal keep their caller-supplied value.
//! - The first error stops the walk; earlier fields keep their new values.

mod coerce;
mod field;

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::constants::GLOBAL_SECTION;
use crate::datamap::DataMap;
use crate::env::env_override;
use crate::error::BindError;

pub use coerce::is_truthy;
pub use field::{Bindable, FieldKind, FieldSpec, Slot};

/// Parse `data` into a fresh map and bind it into `dest` starting at `GLOBAL`.
///
/// The map is returned so callers can inspect or keep it; nothing from an
/// earlier call survives into this one.
pub fn unmarshal(data: &[u8], dest: &mut dyn Bindable) -> Result<DataMap, BindError> {
    let map = DataMap::parse(data)?;
    bind(&map, GLOBAL_SECTION, dest)?;
    Ok(map)
}

/// Bind `map` into `dest`, resolving scalar tags against `section` first.
pub fn bind(map: &DataMap, section: &str, dest: &mut dyn Bindable) -> Result<(), BindError> {
    debug!(section, fields = dest.field_specs().len(), "binding destination");
    let mut current = section.to_string();
    for spec in dest.field_specs() {
        current = bind_field(map, current, spec, dest)?;
    }
    Ok(())
}

/// Bind one field and return the section later siblings resolve against.
fn bind_field(
    map: &DataMap,
    section: String,
    spec: &FieldSpec,
    dest: &mut dyn Bindable,
) -> Result<String, BindError> {
    if spec.name.is_empty() {
        return Err(BindError::InvalidDestination {
            field: spec.name.to_string(),
            reason: format!("field with tag '{}' has an empty name", spec.tag),
        });
    }

    let slot = dest
        .slot(spec.name)
        .ok_or_else(|| BindError::InvalidDestination {
            field: spec.name.to_string(),
            reason: "declared field has no slot".to_string(),
        })?;
    if slot.kind() != spec.kind {
        return Err(BindError::InvalidDestination {
            field: spec.name.to_string(),
            reason: format!("declared as {} but slot is {}", spec.kind, slot.kind()),
        });
    }

    match slot {
        Slot::Section(nested) => {
            trace!(field = spec.name, section = spec.tag, "entering nested section");
            bind(map, spec.tag, nested)?;
            Ok(spec.tag.to_string())
        }
        Slot::Unsupported(kind) => Err(BindError::UnsupportedFieldKind {
            field: spec.name.to_string(),
            kind,
        }),
        scalar => {
            let Some(value) = choose_value(map, &section, spec) else {
                trace!(field = spec.name, tag = spec.tag, section = %section, "no value, keeping initial");
                return Ok(section);
            };
            trace!(field = spec.name, tag = spec.tag, section = %section, value = %value, "assigning");
            coerce::assign(scalar, &value).map_err(|message| BindError::FieldCoercion {
                field: spec.name.to_string(),
                tag: spec.tag.to_string(),
                section: section.clone(),
                kind: spec.kind,
                value: value.to_string(),
                message,
            })?;
            Ok(section)
        }
    }
}

/// Stored value (with GLOBAL fallback) or default, replaced by a non-empty environment override.
fn choose_value<'m>(map: &'m DataMap, section: &str, spec: &FieldSpec) -> Option<Cow<'m, str>> {
    let chosen = map.get_key(spec.tag, section).or(spec.default)?;
    if let Some(value) = spec.env.and_then(env_override) {
        trace!(field = spec.name, var = spec.env, "environment override");
        return Some(Cow::Owned(value));
    }
    Some(Cow::Borrowed(chosen))
}
