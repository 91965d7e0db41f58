// SPDX-License-Identifier: Apache-2.0

//! Converting between [`Value`] trees and concrete Rust types via serde.
//!
//! Optional fields that are absent serialize as the `<"null">` record
//! sugar (see [`Value::null`]) rather than being omitted, since Syrup has
//! no notion of a sparse record.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::de::{
    DeserializeSeed, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde::ser::{
    SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant, SerializeTuple,
    SerializeTupleStruct, SerializeTupleVariant,
};
use serde::{de, ser, Deserialize, Serialize};

use crate::error::SchemaMismatch;
use crate::value::{Float, Integer, Value};

/// Converts any `Serialize` value into a [`Value`] tree.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Value<'static>, SchemaMismatch> {
    value.serialize(ValueSerializer)
}

/// Converts a [`Value`] tree into any `Deserialize` type.
pub fn deserialize<'a, T: Deserialize<'a>>(value: Value<'a>) -> Result<T, SchemaMismatch> {
    T::deserialize(ValueDeserializer(value))
}

fn mismatch(expected: &str, actual: &Value<'_>) -> SchemaMismatch {
    SchemaMismatch {
        expected: expected.into(),
        actual: actual.kind_name().into(),
        path: String::new(),
    }
}

impl ser::Error for SchemaMismatch {
    fn custom<T: core::fmt::Display>(msg: T) -> Self {
        SchemaMismatch {
            expected: "a representable value".into(),
            actual: msg.to_string(),
            path: String::new(),
        }
    }
}

impl de::Error for SchemaMismatch {
    fn custom<T: core::fmt::Display>(msg: T) -> Self {
        SchemaMismatch {
            expected: "a representable value".into(),
            actual: msg.to_string(),
            path: String::new(),
        }
    }
}

struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value<'static>;
    type Error = SchemaMismatch;
    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeTupleVariant = VariantSeqSerializer;
    type SerializeMap = MapSerializer;
    type SerializeStruct = MapSerializer;
    type SerializeStructVariant = VariantMapSerializer;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok, Self::Error> {
        self.serialize_i64(v as i64)
    }
    fn serialize_i16(self, v: i16) -> Result<Self::Ok, Self::Error> {
        self.serialize_i64(v as i64)
    }
    fn serialize_i32(self, v: i32) -> Result<Self::Ok, Self::Error> {
        self.serialize_i64(v as i64)
    }
    fn serialize_i64(self, v: i64) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(Integer::from(v)))
    }
    fn serialize_i128(self, v: i128) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(Integer::from(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok, Self::Error> {
        self.serialize_u64(v as u64)
    }
    fn serialize_u16(self, v: u16) -> Result<Self::Ok, Self::Error> {
        self.serialize_u64(v as u64)
    }
    fn serialize_u32(self, v: u32) -> Result<Self::Ok, Self::Error> {
        self.serialize_u64(v as u64)
    }
    fn serialize_u64(self, v: u64) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(Integer::from(v)))
    }
    fn serialize_u128(self, v: u128) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Integer(Integer::from(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok, Self::Error> {
        self.serialize_f64(v as f64)
    }
    fn serialize_f64(self, v: f64) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Float(Float::new(v)))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok, Self::Error> {
        Ok(Value::String(Cow::Owned(v.to_string())))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
        Ok(Value::String(Cow::Owned(v.into())))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Bytes(Cow::Owned(v.into())))
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(Value::null())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(Value::null())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(Value::null())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Record {
            label: Box::new(Value::Symbol(Cow::Owned(variant.into()))),
            fields: Vec::new(),
        })
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Record {
            label: Box::new(Value::Symbol(Cow::Owned(variant.into()))),
            fields: alloc::vec![value.serialize(ValueSerializer)?],
        })
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(SeqSerializer(Vec::with_capacity(len.unwrap_or(0))))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(VariantSeqSerializer {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(MapSerializer {
            entries: Vec::new(),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(MapSerializer {
            entries: Vec::new(),
            pending_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Ok(VariantMapSerializer {
            variant,
            entries: Vec::new(),
        })
    }
}

struct SeqSerializer(Vec<Value<'static>>);

impl SerializeSeq for SeqSerializer {
    type Ok = Value<'static>;
    type Error = SchemaMismatch;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        self.0.push(value.serialize(ValueSerializer)?);
        Ok(())
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(Value::List(self.0))
    }
}

impl SerializeTuple for SeqSerializer {
    type Ok = Value<'static>;
    type Error = SchemaMismatch;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        SerializeSeq::serialize_element(self, value)
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        SerializeSeq::end(self)
    }
}

impl SerializeTupleStruct for SeqSerializer {
    type Ok = Value<'static>;
    type Error = SchemaMismatch;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        SerializeSeq::serialize_element(self, value)
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        SerializeSeq::end(self)
    }
}

struct VariantSeqSerializer {
    variant: &'static str,
    items: Vec<Value<'static>>,
}

impl SerializeTupleVariant for VariantSeqSerializer {
    type Ok = Value<'static>;
    type Error = SchemaMismatch;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(Value::Record {
            label: Box::new(Value::Symbol(Cow::Owned(self.variant.into()))),
            fields: self.items,
        })
    }
}

struct MapSerializer {
    entries: Vec<(Value<'static>, Value<'static>)>,
    pending_key: Option<Value<'static>>,
}

impl SerializeMap for MapSerializer {
    type Ok = Value<'static>;
    type Error = SchemaMismatch;
    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Self::Error> {
        self.pending_key = Some(key.serialize(ValueSerializer)?);
        Ok(())
    }
    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| ser::Error::custom("serialize_value called before serialize_key"))?;
        self.entries.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        let mut value = Value::Dictionary(self.entries);
        crate::canonical::canonicalize(&mut value);
        Ok(value)
    }
}

impl SerializeStruct for MapSerializer {
    type Ok = Value<'static>;
    type Error = SchemaMismatch;
    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        self.entries.push((
            Value::Symbol(Cow::Borrowed(key)),
            value.serialize(ValueSerializer)?,
        ));
        Ok(())
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        let mut value = Value::Dictionary(self.entries);
        crate::canonical::canonicalize(&mut value);
        Ok(value)
    }
}

struct VariantMapSerializer {
    variant: &'static str,
    entries: Vec<(Value<'static>, Value<'static>)>,
}

impl SerializeStructVariant for VariantMapSerializer {
    type Ok = Value<'static>;
    type Error = SchemaMismatch;
    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        self.entries.push((
            Value::Symbol(Cow::Borrowed(key)),
            value.serialize(ValueSerializer)?,
        ));
        Ok(())
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        let mut dict = Value::Dictionary(self.entries);
        crate::canonical::canonicalize(&mut dict);
        Ok(Value::Record {
            label: Box::new(Value::Symbol(Cow::Owned(self.variant.into()))),
            fields: alloc::vec![dict],
        })
    }
}

struct ValueDeserializer<'a>(Value<'a>);

impl<'de> de::Deserializer<'de> for ValueDeserializer<'de> {
    type Error = SchemaMismatch;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Boolean(b) => visitor.visit_bool(b),
            Value::Integer(i) => match i.to_i128() {
                Some(v) if v >= 0 => visitor.visit_u128(v as u128),
                Some(v) => visitor.visit_i128(v),
                None => visitor.visit_str(&i.to_string()),
            },
            Value::Float(f) => visitor.visit_f64(f.get()),
            Value::String(s) => visitor.visit_string(s.into_owned()),
            Value::Symbol(s) => visitor.visit_string(s.into_owned()),
            Value::Bytes(b) => visitor.visit_byte_buf(b.into_owned()),
            Value::List(items) | Value::Set(items) => {
                visitor.visit_seq(SeqAccessImpl(items.into_iter()))
            }
            Value::Dictionary(entries) => visitor.visit_map(MapAccessImpl {
                entries: entries.into_iter(),
                pending: None,
            }),
            other @ Value::Record { .. } if other.is_null() => visitor.visit_unit(),
            Value::Record { label, fields } => {
                visitor.visit_map(MapAccessImpl {
                    entries: alloc::vec![(*label, Value::List(fields))].into_iter(),
                    pending: None,
                })
            }
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        if self.0.is_null() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Record { label, fields } => visitor.visit_enum(EnumAccessImpl {
                label: *label,
                fields,
            }),
            Value::Symbol(s) => visitor.visit_enum(EnumAccessImpl {
                label: Value::Symbol(s),
                fields: Vec::new(),
            }),
            other => Err(mismatch("record or symbol (enum)", &other)),
        }
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqAccessImpl<'a>(alloc::vec::IntoIter<Value<'a>>);

impl<'de> SeqAccess<'de> for SeqAccessImpl<'de> {
    type Error = SchemaMismatch;
    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Self::Error> {
        match self.0.next() {
            Some(v) => seed.deserialize(ValueDeserializer(v)).map(Some),
            None => Ok(None),
        }
    }
}

struct MapAccessImpl<'a> {
    entries: alloc::vec::IntoIter<(Value<'a>, Value<'a>)>,
    pending: Option<Value<'a>>,
}

impl<'de> MapAccess<'de> for MapAccessImpl<'de> {
    type Error = SchemaMismatch;
    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Self::Error> {
        match self.entries.next() {
            Some((k, v)) => {
                self.pending = Some(v);
                seed.deserialize(ValueDeserializer(k)).map(Some)
            }
            None => Ok(None),
        }
    }
    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Self::Error> {
        let value = self
            .pending
            .take()
            .ok_or_else(|| de::Error::custom("value requested before key"))?;
        seed.deserialize(ValueDeserializer(value))
    }
}

struct EnumAccessImpl<'a> {
    label: Value<'a>,
    fields: Vec<Value<'a>>,
}

impl<'de> EnumAccess<'de> for EnumAccessImpl<'de> {
    type Error = SchemaMismatch;
    type Variant = VariantAccessImpl<'de>;

    fn variant_seed<V: DeserializeSeed<'de>>(
        self,
        seed: V,
    ) -> Result<(V::Value, Self::Variant), Self::Error> {
        let tag = seed.deserialize(ValueDeserializer(self.label))?;
        Ok((tag, VariantAccessImpl(self.fields)))
    }
}

struct VariantAccessImpl<'a>(Vec<Value<'a>>);

impl<'de> VariantAccess<'de> for VariantAccessImpl<'de> {
    type Error = SchemaMismatch;

    fn unit_variant(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> Result<T::Value, Self::Error> {
        let mut fields = self.0.into_iter();
        let value = fields
            .next()
            .ok_or_else(|| de::Error::custom("missing newtype variant payload"))?;
        seed.deserialize(ValueDeserializer(value))
    }

    fn tuple_variant<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_seq(SeqAccessImpl(self.0.into_iter()))
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.0.into_iter().next() {
            Some(Value::Dictionary(entries)) => visitor.visit_map(MapAccessImpl {
                entries: entries.into_iter(),
                pending: None,
            }),
            _ => Err(de::Error::custom("missing struct variant body")),
        }
    }
}

