// SPDX-License-Identifier: Apache-2.0

//! The in-memory tree a Syrup item decodes into.

mod float;
mod integer;

pub use float::Float;
pub use integer::Integer;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// A decoded (or to-be-encoded) Syrup item.
///
/// String, symbol and bytes payloads borrow from the input buffer when
/// decoded zero-copy (`Cow::Borrowed`); owning APIs such as
/// [`Value::into_owned`] detach a `Value` from its source buffer's
/// lifetime when the caller needs to keep it around longer.
///
/// `null`, tagged values and errors are not separate wire kinds — they
/// are plain records (`<"null">`, `<label ...>`, `<"error" reason>`) and
/// are represented here as [`Value::Record`]; see [`Value::as_null`],
/// [`Value::as_error`] for the sugar accessors.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    /// `t` / `f`.
    Boolean(bool),
    /// `digit+ sign`.
    Integer(Integer),
    /// `D` + 8 bytes.
    Float(Float),
    /// `len "` + bytes, required to be valid UTF-8.
    String(Cow<'a, str>),
    /// `len '` + bytes, an identifier-like atom.
    Symbol(Cow<'a, str>),
    /// `len :` + bytes, opaque payload.
    Bytes(Cow<'a, [u8]>),
    /// `[ ... ]`, order-preserving.
    List(Vec<Value<'a>>),
    /// `# ... $`, canonical order, no duplicates.
    Set(Vec<Value<'a>>),
    /// `{ ... }`, canonical key order, no duplicate keys.
    Dictionary(Vec<(Value<'a>, Value<'a>)>),
    /// `< label field... >`.
    Record {
        /// The record's leading item, conventionally a symbol or string
        /// naming its shape.
        label: Box<Value<'a>>,
        /// The record's remaining items.
        fields: Vec<Value<'a>>,
    },
}

impl<'a> Value<'a> {
    /// The `<"null">` record sugar for absent/unit values.
    pub fn null() -> Self {
        Value::Record {
            label: Box::new(Value::String(Cow::Borrowed("null"))),
            fields: Vec::new(),
        }
    }

    /// `true` if this is the `<"null">` record sugar.
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Value::Record { label, fields }
                if fields.is_empty() && matches!(label.as_ref(), Value::String(s) if s == "null")
        )
    }

    /// Builds the `<"error" reason>` record sugar.
    pub fn error(reason: Value<'a>) -> Self {
        Value::Record {
            label: Box::new(Value::String(Cow::Borrowed("error"))),
            fields: alloc::vec![reason],
        }
    }

    /// Returns the wrapped reason if this is the `<"error" reason>` record
    /// sugar.
    pub fn as_error(&self) -> Option<&Value<'a>> {
        match self {
            Value::Record { label, fields } if fields.len() == 1 => match label.as_ref() {
                Value::String(s) if s == "error" => fields.first(),
                _ => None,
            },
            _ => None,
        }
    }

    /// A short name for the value's kind, used in schema mismatch
    /// diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Dictionary(_) => "dictionary",
            Value::Record { .. } => "record",
        }
    }

    /// Detaches every borrowed payload from the source buffer's lifetime,
    /// copying where necessary.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Boolean(b) => Value::Boolean(b),
            Value::Integer(i) => Value::Integer(i),
            Value::Float(f) => Value::Float(f),
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Symbol(s) => Value::Symbol(Cow::Owned(s.into_owned())),
            Value::Bytes(b) => Value::Bytes(Cow::Owned(b.into_owned())),
            Value::List(items) => {
                Value::List(items.into_iter().map(Value::into_owned).collect())
            }
            Value::Set(items) => Value::Set(items.into_iter().map(Value::into_owned).collect()),
            Value::Dictionary(entries) => Value::Dictionary(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect(),
            ),
            Value::Record { label, fields } => Value::Record {
                label: Box::new(label.into_owned()),
                fields: fields.into_iter().map(Value::into_owned).collect(),
            },
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Float(Float::new(value))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::String(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::String(Cow::Owned(value))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(value: &'a [u8]) -> Self {
        Value::Bytes(Cow::Borrowed(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                fn from(value: $t) -> Self {
                    Value::Integer(Integer::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
