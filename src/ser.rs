//! Serde bridge into the [`Value`] model.
//!
//! [`to_value`] converts anything implementing `Serialize` into an
//! inspectable value graph, so ordinary Rust data can be rendered without
//! hand-building objects:
//!
//! ```rust
//! use ocular::{inspect, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let v = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(inspect(&v), "{ x: 1, y: 2 }");
//! ```
//!
//! The mapping is lossy by design: structs and maps become plain objects,
//! sequences become arrays, `Option::None` and units become `null`, and byte
//! slices become `Uint8Array`s. Maps with non-string keys are rejected.

use serde::{ser, Serialize};

use crate::error::{Error, Result};
use crate::value::{TypedArrayKind, Value};

/// Converts any serializable Rust value into a [`Value`].
pub fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Serializer producing [`Value`] graphs.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    entries: Vec<(String, Value)>,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = ser::Impossible<Value, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = ser::Impossible<Value, Error>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::typed_array(
            TypedArrayKind::Uint8,
            v.iter().map(|b| *b as f64).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value> {
        Err(Error::unsupported_type(format!("newtype variant of {name}")))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type(format!("tuple variant of {name}")))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type(format!("struct variant of {name}")))
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        match key.serialize(ValueSerializer)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::unsupported_type(format!(
                "map key must be a string, got {other:?}"
            ))),
        }
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called before serialize_key"))?;
        self.entries.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::object(self.entries))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.entries
            .push((key.to_string(), value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::object(self.entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Config {
        name: String,
        port: u16,
        tags: Vec<String>,
        fallback: Option<String>,
    }

    #[test]
    fn test_struct_to_object() {
        let v = to_value(&Config {
            name: "api".to_string(),
            port: 8080,
            tags: vec!["a".to_string(), "b".to_string()],
            fallback: None,
        })
        .unwrap();
        assert_eq!(
            inspect(&v),
            "{ name: 'api', port: 8080, tags: [ 'a', 'b' ], fallback: null }"
        );
    }

    #[test]
    fn test_primitives() {
        assert_eq!(inspect(&to_value(&true).unwrap()), "true");
        assert_eq!(inspect(&to_value(&1.5f64).unwrap()), "1.5");
        assert_eq!(inspect(&to_value(&"hi").unwrap()), "'hi'");
        assert_eq!(inspect(&to_value(&()).unwrap()), "null");
    }

    #[test]
    fn test_unit_variant_is_name() {
        #[derive(Serialize)]
        enum Mode {
            Fast,
        }
        assert_eq!(inspect(&to_value(&Mode::Fast).unwrap()), "'Fast'");
    }

    #[test]
    fn test_map_requires_string_keys() {
        use std::collections::BTreeMap;
        let mut m = BTreeMap::new();
        m.insert(1, "one");
        assert!(to_value(&m).is_err());
    }

    #[test]
    fn test_bytes_become_typed_array() {
        use serde::Serializer as _;
        let v = ValueSerializer.serialize_bytes(&[1, 2, 3]).unwrap();
        assert_eq!(inspect(&v), "Uint8Array(3) [ 1, 2, 3 ]");
    }

    #[test]
    fn test_nested_collections() {
        let v = to_value(&vec![vec![1, 2], vec![3]]).unwrap();
        assert_eq!(inspect(&v), "[ [ 1, 2 ], [ 3 ] ]");
    }
}
