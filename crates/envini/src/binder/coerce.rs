//! String-to-field coercion.
//!
//! Invariants:
//! - Booleans never fail: anything outside the truthy set is `false`.
//! - Floats parse as `f64`; `f32` fields receive the narrowed value.
//! - Integers parse base-10 directly into the field's width, so overflow fails.
//! - Strings are assigned verbatim.

use std::fmt::Display;
use std::str::FromStr;

use super::field::Slot;
use crate::constants::TRUTHY_LITERALS;

/// True for `true`, `t`, `yes`, `y`, `1` in any letter case.
pub fn is_truthy(value: &str) -> bool {
    TRUTHY_LITERALS
        .iter()
        .any(|literal| literal.eq_ignore_ascii_case(value))
}

fn parse<T>(value: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse::<T>().map_err(|e| e.to_string())
}

/// Write `value` into a scalar slot.
///
/// Returns the parser's message on failure; the caller adds field context.
/// Nested and unsupported slots are rejected, they have no scalar form.
pub(crate) fn assign(slot: Slot<'_>, value: &str) -> Result<(), String> {
    match slot {
        Slot::Bool(target) => *target = is_truthy(value),
        Slot::I8(target) => *target = parse(value)?,
        Slot::I16(target) => *target = parse(value)?,
        Slot::I32(target) => *target = parse(value)?,
        Slot::I64(target) => *target = parse(value)?,
        Slot::Isize(target) => *target = parse(value)?,
        Slot::U8(target) => *target = parse(value)?,
        Slot::U16(target) => *target = parse(value)?,
        Slot::U32(target) => *target = parse(value)?,
        Slot::U64(target) => *target = parse(value)?,
        Slot::Usize(target) => *target = parse(value)?,
        Slot::F32(target) => *target = parse::<f64>(value)? as f32,
        Slot::F64(target) => *target = parse(value)?,
        Slot::Str(target) => *target = value.to_string(),
        Slot::Section(_) | Slot::Unsupported(_) => {
            return Err("field has no scalar representation".to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_literals_ignore_case() {
        for value in ["True", "YES", "y", "1", "t", "TRUE", "Yes"] {
            assert!(is_truthy(value), "{value} should be true");
        }
        for value in ["false", "no", "0", "", "on", "2", "yes please"] {
            assert!(!is_truthy(value), "{value} should be false");
        }
    }

    #[test]
    fn test_bool_assignment_never_fails() {
        let mut flag = true;
        assign(Slot::Bool(&mut flag), "whatever").unwrap();
        assert!(!flag);
    }

    #[test]
    fn test_float_parse_failure_leaves_target_untouched() {
        let mut value = 1.5_f64;
        let err = assign(Slot::F64(&mut value), "abc").unwrap_err();
        assert!(!err.is_empty());
        assert_eq!(value, 1.5);
    }

    #[test]
    fn test_f32_narrows_from_f64() {
        let mut value = 0.0_f32;
        assign(Slot::F32(&mut value), "3.25").unwrap();
        assert_eq!(value, 3.25);
    }

    #[test]
    fn test_integer_overflow_is_an_error() {
        let mut small = 0_u8;
        assert!(assign(Slot::U8(&mut small), "256").is_err());
        assign(Slot::U8(&mut small), "42").unwrap();
        assert_eq!(small, 42);

        let mut signed = 0_i8;
        assert!(assign(Slot::I8(&mut signed), "-129").is_err());
        assign(Slot::I8(&mut signed), "-128").unwrap();
        assert_eq!(signed, -128);
    }

    #[test]
    fn test_unsigned_rejects_negative_numbers() {
        let mut value = 5_u64;
        assert!(assign(Slot::U64(&mut value), "-1").is_err());
        assert_eq!(value, 5);
    }

    #[test]
    fn test_string_is_verbatim() {
        let mut text = String::new();
        assign(Slot::Str(&mut text), "  spaced  ").unwrap();
        assert_eq!(text, "  spaced  ");
    }

    #[test]
    fn test_unsupported_slot_is_rejected() {
        assert!(assign(Slot::Unsupported("Vec<u8>"), "1,2").is_err());
    }
}
