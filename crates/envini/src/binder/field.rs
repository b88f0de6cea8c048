//! Field descriptors and typed slots for bind destinations.
//!
//! Responsibilities:
//! - Describe each destination field (`FieldSpec`): name, kind, tag, env var, default.
//! - Hand out typed mutable references to fields (`Slot`) for coercion.
//! - Provide the `bindable!` macro that implements `Bindable` for plain structs.
//!
//! Invariants:
//! - A destination's `field_specs()` is a static table; order is declaration order.
//! - `slot(name)` returns a slot whose kind equals the kind declared for `name`.

use std::fmt;

/// Declared value kind of a destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Str,
    /// A nested structure bound from its own section.
    Section,
    /// A kind with no coercion (lists, maps, ...), named for error messages.
    Unsupported(&'static str),
}

impl FieldKind {
    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::I8 => "i8",
            FieldKind::I16 => "i16",
            FieldKind::I32 => "i32",
            FieldKind::I64 => "i64",
            FieldKind::Isize => "isize",
            FieldKind::U8 => "u8",
            FieldKind::U16 => "u16",
            FieldKind::U32 => "u32",
            FieldKind::U64 => "u64",
            FieldKind::Usize => "usize",
            FieldKind::F32 => "f32",
            FieldKind::F64 => "f64",
            FieldKind::Str => "string",
            FieldKind::Section => "section",
            FieldKind::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binding descriptor for one destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, used to ask the destination for its slot.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Stored key for scalars; section name for nested structures.
    pub tag: &'static str,
    /// Environment variable that overrides the stored value when set.
    pub env: Option<&'static str>,
    /// Literal used when the tag is missing from the map.
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind, tag: &'static str) -> Self {
        Self {
            name,
            kind,
            tag,
            env: None,
            default: None,
        }
    }

    /// Descriptor for a nested structure read from section `tag`.
    pub const fn section(name: &'static str, tag: &'static str) -> Self {
        Self::new(name, FieldKind::Section, tag)
    }

    pub const fn with_env(mut self, var: &'static str) -> Self {
        self.env = Some(var);
        self
    }

    pub const fn with_default(mut self, literal: &'static str) -> Self {
        self.default = Some(literal);
        self
    }
}

/// Mutable reference to one destination field, tagged by kind.
pub enum Slot<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Str(&'a mut String),
    Section(&'a mut dyn Bindable),
    Unsupported(&'static str),
}

impl Slot<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Slot::Bool(_) => FieldKind::Bool,
            Slot::I8(_) => FieldKind::I8,
            Slot::I16(_) => FieldKind::I16,
            Slot::I32(_) => FieldKind::I32,
            Slot::I64(_) => FieldKind::I64,
            Slot::Isize(_) => FieldKind::Isize,
            Slot::U8(_) => FieldKind::U8,
            Slot::U16(_) => FieldKind::U16,
            Slot::U32(_) => FieldKind::U32,
            Slot::U64(_) => FieldKind::U64,
            Slot::Usize(_) => FieldKind::Usize,
            Slot::F32(_) => FieldKind::F32,
            Slot::F64(_) => FieldKind::F64,
            Slot::Str(_) => FieldKind::Str,
            Slot::Section(_) => FieldKind::Section,
            Slot::Unsupported(name) => FieldKind::Unsupported(*name),
        }
    }
}

/// A structured destination the binder can fill.
///
/// Implement by hand for unusual layouts, or use [`bindable!`](crate::bindable)
/// for plain structs.
pub trait Bindable {
    /// Descriptor table, one entry per bound field in declaration order.
    fn field_specs(&self) -> &'static [FieldSpec];

    /// Typed slot for the field called `name`.
    fn slot(&mut self, name: &str) -> Option<Slot<'_>>;
}

/// Implement [`Bindable`] for a struct from a field table.
///
/// Each entry is `field: Kind => "tag"`, optionally followed by
/// `, env = "VAR"` and `, default = "literal"`, and terminated by `;`.
/// `Kind` is a [`FieldKind`] variant other than `Unsupported`; nested
/// structures use `Section` and must implement `Bindable` themselves.
///
/// ```
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// envini::bindable!(Server {
///     host: Str => "host", default = "localhost";
///     port: U16 => "port", env = "SERVER_PORT", default = "8080";
/// });
///
/// let mut server = Server::default();
/// envini::unmarshal(b"host = example.org\n", &mut server).unwrap();
/// assert_eq!(server.host, "example.org");
/// ```
#[macro_export]
macro_rules! bindable {
    (
        $ty:ty {
            $(
                $field:ident : $kind:ident => $tag:literal
                $(, env = $env:literal)?
                $(, default = $default:literal)?
            );* $(;)?
        }
    ) => {
        impl $crate::Bindable for $ty {
            fn field_specs(&self) -> &'static [$crate::FieldSpec] {
                const SPECS: &[$crate::FieldSpec] = &[
                    $(
                        $crate::FieldSpec::new(
                            stringify!($field),
                            $crate::FieldKind::$kind,
                            $tag,
                        )
                        $(.with_env($env))?
                        $(.with_default($default))?
                    ),*
                ];
                SPECS
            }

            fn slot(&mut self, name: &str) -> Option<$crate::Slot<'_>> {
                match name {
                    $(stringify!($field) => Some($crate::Slot::$kind(&mut self.$field)),)*
                    _ => None,
                }
            }
        }
    };
}
