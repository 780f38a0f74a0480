//! Dynamic value representation for inspection.
//!
//! This module provides the [`Value`] enum, a runtime value graph the
//! inspection engine renders. Primitives are held by value; everything
//! composite is a [`Value::Object`] holding an [`ObjectHandle`], a shared
//! reference-counted cell. Identity is the allocation address of the handle,
//! so cloning a handle preserves identity and genuine cycles (`o.self = o`)
//! are expressible.
//!
//! ## Core Types
//!
//! - [`Value`]: any inspectable value
//! - [`ObjectHandle`] / [`ObjectData`]: shared composite values with an
//!   ordered own-property map and a prototype slot
//! - [`ObjectKind`]: the closed set of composite variants (arrays, sets,
//!   maps, functions, errors, dates, buffers, ...)
//! - [`ObjectBuilder`]: fluent construction of objects with class names,
//!   tags, getters, and inspection hooks
//!
//! ## Examples
//!
//! ```rust
//! use ocular::{inspect, Value};
//!
//! let v = Value::object([("name", Value::from("Ada")), ("age", Value::from(36))]);
//! assert_eq!(inspect(&v), "{ name: 'Ada', age: 36 }");
//! ```
//!
//! Cycles are detected and labeled:
//!
//! ```rust
//! use ocular::{inspect, ObjectBuilder};
//!
//! let obj = ObjectBuilder::new().build_handle();
//! obj.set("own", obj.clone().into());
//! assert_eq!(inspect(&obj.into()), "<ref *1> { own: [Circular *1] }");
//! ```

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::options::InspectOptions;

/// The property key used for type-tag markers, the analogue of a
/// `toStringTag` symbol. Stored as a symbol-keyed property.
pub const TO_STRING_TAG: &str = "Symbol.toStringTag";

/// Indices can exceed this only in sparse arrays; slots past it render as a
/// trailing hole summary and never as individual items.
pub const MAX_ARRAY_INDEX: u64 = u32::MAX as u64 - 1;

/// A symbol primitive, identified by its optional description.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub description: Option<String>,
}

impl Symbol {
    pub fn new(description: Option<String>) -> Self {
        Symbol { description }
    }

    /// The canonical `Symbol(description)` rendering, before escaping.
    pub fn display_text(&self) -> String {
        match &self.description {
            Some(desc) => format!("Symbol({desc})"),
            None => "Symbol()".to_string(),
        }
    }
}

/// Any inspectable runtime value.
#[derive(Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    Object(ObjectHandle),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectHandle> {
        match self {
            Value::Object(handle) => Some(handle),
            _ => None,
        }
    }

    /// True when both values are the same primitive or the same allocation.
    pub fn same_identity(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => self == other,
        }
    }

    /// Builds a plain object from key/value pairs, all enumerable.
    pub fn object<K, I>(props: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut builder = ObjectBuilder::new();
        for (key, value) in props {
            builder = builder.prop(key, value);
        }
        builder.build()
    }

    /// Builds a dense array.
    pub fn array(items: Vec<Value>) -> Value {
        Value::from_kind(ObjectKind::Array(
            items.into_iter().map(ArraySlot::Item).collect(),
        ))
    }

    /// Builds an array from explicit slots, allowing hole runs.
    pub fn sparse_array(slots: Vec<ArraySlot>) -> Value {
        Value::from_kind(ObjectKind::Array(slots))
    }

    pub fn set(items: Vec<Value>) -> Value {
        Value::from_kind(ObjectKind::Set(items))
    }

    pub fn map(entries: Vec<(Value, Value)>) -> Value {
        Value::from_kind(ObjectKind::Map(entries))
    }

    /// A set iterator holding its remaining items. Previewing drains them.
    pub fn set_iterator(items: Vec<Value>) -> Value {
        Value::from_kind(ObjectKind::SetIterator(items))
    }

    /// A map entries iterator. Previewing drains it.
    pub fn map_iterator(entries: Vec<(Value, Value)>) -> Value {
        Value::from_kind(ObjectKind::MapIterator(entries))
    }

    pub fn typed_array(kind: TypedArrayKind, values: Vec<f64>) -> Value {
        Value::from_kind(ObjectKind::TypedArray(TypedArrayData {
            kind,
            elements: TypedElements::Numbers(values),
            buffer: None,
        }))
    }

    pub fn bigint_typed_array(kind: TypedArrayKind, values: Vec<BigInt>) -> Value {
        Value::from_kind(ObjectKind::TypedArray(TypedArrayData {
            kind,
            elements: TypedElements::BigInts(values),
            buffer: None,
        }))
    }

    pub fn function(name: impl Into<String>) -> Value {
        Value::from_kind(ObjectKind::Function(FunctionData {
            name: name.into(),
            source: None,
            is_async: false,
            is_generator: false,
        }))
    }

    pub fn async_function(name: impl Into<String>) -> Value {
        Value::from_kind(ObjectKind::Function(FunctionData {
            name: name.into(),
            source: None,
            is_async: true,
            is_generator: false,
        }))
    }

    pub fn generator_function(name: impl Into<String>) -> Value {
        Value::from_kind(ObjectKind::Function(FunctionData {
            name: name.into(),
            source: None,
            is_async: false,
            is_generator: true,
        }))
    }

    pub fn async_generator_function(name: impl Into<String>) -> Value {
        Value::from_kind(ObjectKind::Function(FunctionData {
            name: name.into(),
            source: None,
            is_async: true,
            is_generator: true,
        }))
    }

    /// A class constructor; detection keys off the source text.
    pub fn class(name: impl Into<String>) -> Value {
        let name = name.into();
        let source = format!("class {name} {{}}");
        Value::from_kind(ObjectKind::Function(FunctionData {
            name,
            source: Some(source),
            is_async: false,
            is_generator: false,
        }))
    }

    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Value {
        Value::from_kind(ObjectKind::Error(ErrorData {
            name: name.into(),
            message: message.into(),
            stack: None,
        }))
    }

    pub fn error_with_stack(
        name: impl Into<String>,
        message: impl Into<String>,
        stack: impl Into<String>,
    ) -> Value {
        Value::from_kind(ObjectKind::Error(ErrorData {
            name: name.into(),
            message: message.into(),
            stack: Some(stack.into()),
        }))
    }

    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Value {
        Value::from_kind(ObjectKind::RegExp {
            source: source.into(),
            flags: flags.into(),
        })
    }

    pub fn date(when: DateTime<Utc>) -> Value {
        Value::from_kind(ObjectKind::Date(Some(when)))
    }

    pub fn invalid_date() -> Value {
        Value::from_kind(ObjectKind::Date(None))
    }

    pub fn array_buffer(bytes: Vec<u8>) -> Value {
        Value::from_kind(ObjectKind::ArrayBuffer {
            bytes: Some(bytes),
            shared: false,
        })
    }

    pub fn shared_array_buffer(bytes: Vec<u8>) -> Value {
        Value::from_kind(ObjectKind::ArrayBuffer {
            bytes: Some(bytes),
            shared: true,
        })
    }

    pub fn detached_array_buffer() -> Value {
        Value::from_kind(ObjectKind::ArrayBuffer {
            bytes: None,
            shared: false,
        })
    }

    pub fn data_view(byte_length: usize, byte_offset: usize, buffer: Value) -> Value {
        Value::from_kind(ObjectKind::DataView {
            byte_length,
            byte_offset,
            buffer: Box::new(buffer),
        })
    }

    pub fn promise() -> Value {
        Value::from_kind(ObjectKind::Promise)
    }

    pub fn weak_map() -> Value {
        Value::from_kind(ObjectKind::WeakMap)
    }

    pub fn weak_set() -> Value {
        Value::from_kind(ObjectKind::WeakSet)
    }

    pub fn url(href: impl Into<String>) -> Value {
        Value::from_kind(ObjectKind::Url(href.into()))
    }

    pub fn symbol(description: impl Into<String>) -> Value {
        Value::Symbol(Symbol::new(Some(description.into())))
    }

    pub fn boxed_number(n: f64) -> Value {
        Value::from_kind(ObjectKind::Boxed(BoxedValue::Number(n)))
    }

    pub fn boxed_string(s: impl Into<String>) -> Value {
        Value::from_kind(ObjectKind::Boxed(BoxedValue::String(s.into())))
    }

    pub fn boxed_bool(b: bool) -> Value {
        Value::from_kind(ObjectKind::Boxed(BoxedValue::Bool(b)))
    }

    pub fn boxed_bigint(b: BigInt) -> Value {
        Value::from_kind(ObjectKind::Boxed(BoxedValue::BigInt(b)))
    }

    fn from_kind(kind: ObjectKind) -> Value {
        Value::Object(ObjectHandle::new(ObjectData::new(kind)))
    }
}

impl PartialEq for Value {
    /// Primitives compare by value (NaN is unequal to itself); objects
    /// compare by identity.
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::inspect(self))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Value {
        Value::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<BigInt> for Value {
    fn from(b: BigInt) -> Value {
        Value::BigInt(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::array(items)
    }
}

impl From<ObjectHandle> for Value {
    fn from(handle: ObjectHandle) -> Value {
        Value::Object(handle)
    }
}

/// A shared composite value. Cloning is cheap and preserves identity.
#[derive(Clone)]
pub struct ObjectHandle(Rc<RefCell<ObjectData>>);

impl ObjectHandle {
    pub fn new(data: ObjectData) -> Self {
        ObjectHandle(Rc::new(RefCell::new(data)))
    }

    /// A stable identity token for cycle detection.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    pub fn ptr_eq(&self, other: &ObjectHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn borrow(&self) -> Ref<'_, ObjectData> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, ObjectData> {
        self.0.borrow_mut()
    }

    /// Inserts or replaces an enumerable string-keyed property.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.borrow_mut().properties.insert(
            PropertyKey::Str(key.into()),
            PropertySlot {
                property: Property::Value(value),
                enumerable: true,
            },
        );
    }

    /// Reads a string-keyed data property, ignoring accessors.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self.borrow().properties.get(&PropertyKey::Str(key.to_string())) {
            Some(PropertySlot {
                property: Property::Value(v),
                ..
            }) => Some(v.clone()),
            _ => None,
        }
    }
}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::inspect(&Value::Object(self.clone())))
    }
}

/// A property key: a plain string or a symbol identified by description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Str(String),
    Symbol(String),
}

impl PropertyKey {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::Str(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> PropertyKey {
        PropertyKey::Str(s.to_string())
    }
}

/// A fallible accessor body. `Err` carries the thrown message.
pub type GetterFn = dyn Fn() -> std::result::Result<Value, String>;

/// The signature handed to custom inspect hooks for recursive formatting.
pub type InspectFn = fn(&Value, &InspectOptions) -> String;

/// A custom inspect hook: receives the remaining depth (`None` when
/// unlimited), a snapshot of the active options, and a formatting callback.
pub type CustomInspectFn =
    dyn Fn(Option<i64>, &InspectOptions, InspectFn) -> std::result::Result<Value, String>;

/// An own property's payload.
#[derive(Clone)]
pub enum Property {
    Value(Value),
    Getter(Rc<GetterFn>),
    Setter,
    GetterSetter(Rc<GetterFn>),
}

/// A property plus its enumerability.
#[derive(Clone)]
pub struct PropertySlot {
    pub property: Property,
    pub enumerable: bool,
}

impl PropertySlot {
    pub fn value(value: Value) -> Self {
        PropertySlot {
            property: Property::Value(value),
            enumerable: true,
        }
    }
}

/// The prototype slot of an object.
#[derive(Clone)]
pub enum Proto {
    /// The default prototype for the object's kind.
    Builtin,
    /// No prototype at all.
    Null,
    /// An explicit prototype object.
    Object(ObjectHandle),
}

/// One slot of an array: a present item or a run of consecutive holes.
#[derive(Clone, Debug)]
pub enum ArraySlot {
    Item(Value),
    Holes(u64),
}

/// Total length of an array in index space, holes included.
pub fn array_length(slots: &[ArraySlot]) -> u64 {
    slots
        .iter()
        .map(|slot| match slot {
            ArraySlot::Item(_) => 1,
            ArraySlot::Holes(n) => *n,
        })
        .sum()
}

/// Element type of a typed array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl TypedArrayKind {
    pub fn name(&self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
            TypedArrayKind::BigInt64 => "BigInt64Array",
            TypedArrayKind::BigUint64 => "BigUint64Array",
        }
    }

    pub fn bytes_per_element(&self) -> usize {
        match self {
            TypedArrayKind::Int8 | TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => 1,
            TypedArrayKind::Int16 | TypedArrayKind::Uint16 => 2,
            TypedArrayKind::Int32 | TypedArrayKind::Uint32 | TypedArrayKind::Float32 => 4,
            TypedArrayKind::Float64 | TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => 8,
        }
    }
}

/// Elements of a typed array.
#[derive(Clone, Debug)]
pub enum TypedElements {
    Numbers(Vec<f64>),
    BigInts(Vec<BigInt>),
}

impl TypedElements {
    pub fn len(&self) -> usize {
        match self {
            TypedElements::Numbers(v) => v.len(),
            TypedElements::BigInts(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone)]
pub struct TypedArrayData {
    pub kind: TypedArrayKind,
    pub elements: TypedElements,
    /// The backing buffer, surfaced only under `show_hidden`.
    pub buffer: Option<Value>,
}

impl TypedArrayData {
    pub fn byte_length(&self) -> usize {
        self.elements.len() * self.kind.bytes_per_element()
    }
}

#[derive(Clone, Debug)]
pub struct FunctionData {
    pub name: String,
    /// Source text, when known. Class constructors are detected from it.
    pub source: Option<String>,
    pub is_async: bool,
    pub is_generator: bool,
}

#[derive(Clone, Debug)]
pub struct ErrorData {
    pub name: String,
    pub message: String,
    /// Stack text including the leading `Name: message` line. When absent,
    /// a minimal header is synthesized.
    pub stack: Option<String>,
}

/// A boxed primitive object.
#[derive(Clone, Debug)]
pub enum BoxedValue {
    Bool(bool),
    Number(f64),
    String(String),
    BigInt(BigInt),
    Symbol(Symbol),
}

impl BoxedValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            BoxedValue::Bool(_) => "Boolean",
            BoxedValue::Number(_) => "Number",
            BoxedValue::String(_) => "String",
            BoxedValue::BigInt(_) => "BigInt",
            BoxedValue::Symbol(_) => "Symbol",
        }
    }

    /// The wrapped primitive as a plain value.
    pub fn unbox(&self) -> Value {
        match self {
            BoxedValue::Bool(b) => Value::Bool(*b),
            BoxedValue::Number(n) => Value::Number(*n),
            BoxedValue::String(s) => Value::String(s.clone()),
            BoxedValue::BigInt(b) => Value::BigInt(b.clone()),
            BoxedValue::Symbol(s) => Value::Symbol(s.clone()),
        }
    }
}

/// The closed set of composite variants. Every object is exactly one of
/// these; classification never guesses.
#[derive(Clone)]
pub enum ObjectKind {
    Plain,
    Array(Vec<ArraySlot>),
    TypedArray(TypedArrayData),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// Remaining items of a set iterator; previewing drains them.
    SetIterator(Vec<Value>),
    /// Remaining entries of a map iterator; previewing drains them.
    MapIterator(Vec<(Value, Value)>),
    Function(FunctionData),
    Error(ErrorData),
    RegExp {
        source: String,
        flags: String,
    },
    /// `None` is an invalid date.
    Date(Option<DateTime<Utc>>),
    Boxed(BoxedValue),
    /// `bytes: None` means detached.
    ArrayBuffer {
        bytes: Option<Vec<u8>>,
        shared: bool,
    },
    DataView {
        byte_length: usize,
        byte_offset: usize,
        buffer: Box<Value>,
    },
    Promise,
    WeakMap,
    WeakSet,
    Url(String),
}

/// The data behind an [`ObjectHandle`].
pub struct ObjectData {
    pub kind: ObjectKind,
    /// Own properties in insertion order. Array indices live in the kind,
    /// not here.
    pub properties: IndexMap<PropertyKey, PropertySlot>,
    pub proto: Proto,
    /// Consulted before default rendering when `custom_inspect` is enabled.
    pub custom_inspect: Option<Rc<CustomInspectFn>>,
    /// A custom string conversion, the analogue of an own `toString`.
    pub to_display: Option<Rc<dyn Fn() -> String>>,
}

impl ObjectData {
    pub fn new(kind: ObjectKind) -> Self {
        ObjectData {
            kind,
            properties: IndexMap::new(),
            proto: Proto::Builtin,
            custom_inspect: None,
            to_display: None,
        }
    }
}

/// Fluent construction of composite values.
///
/// ```rust
/// use ocular::{inspect, ObjectBuilder, Value};
///
/// let v = ObjectBuilder::new()
///     .class("Point")
///     .prop("x", Value::from(1))
///     .prop("y", Value::from(2))
///     .build();
/// assert_eq!(inspect(&v), "Point { x: 1, y: 2 }");
/// ```
pub struct ObjectBuilder {
    data: ObjectData,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        ObjectBuilder {
            data: ObjectData::new(ObjectKind::Plain),
        }
    }

    /// Replaces the kind; properties and prototype are kept.
    #[must_use]
    pub fn kind(mut self, kind: ObjectKind) -> Self {
        self.data.kind = kind;
        self
    }

    /// Gives the object a named class by installing a prototype whose
    /// `constructor` is a function of that name.
    #[must_use]
    pub fn class(mut self, name: impl Into<String>) -> Self {
        let mut proto = ObjectData::new(ObjectKind::Plain);
        proto.properties.insert(
            PropertyKey::Str("constructor".to_string()),
            PropertySlot {
                property: Property::Value(Value::function(name)),
                enumerable: false,
            },
        );
        self.data.proto = Proto::Object(ObjectHandle::new(proto));
        self
    }

    #[must_use]
    pub fn null_proto(mut self) -> Self {
        self.data.proto = Proto::Null;
        self
    }

    #[must_use]
    pub fn proto(mut self, proto: ObjectHandle) -> Self {
        self.data.proto = Proto::Object(proto);
        self
    }

    /// Attaches a non-enumerable type-tag marker.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.data.properties.insert(
            PropertyKey::Symbol(TO_STRING_TAG.to_string()),
            PropertySlot {
                property: Property::Value(Value::String(tag.into())),
                enumerable: false,
            },
        );
        self
    }

    /// Adds an enumerable data property.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data
            .properties
            .insert(PropertyKey::Str(key.into()), PropertySlot::value(value));
        self
    }

    /// Adds a non-enumerable data property.
    #[must_use]
    pub fn hidden_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.properties.insert(
            PropertyKey::Str(key.into()),
            PropertySlot {
                property: Property::Value(value),
                enumerable: false,
            },
        );
        self
    }

    /// Adds an enumerable symbol-keyed data property.
    #[must_use]
    pub fn symbol_prop(mut self, description: impl Into<String>, value: Value) -> Self {
        self.data.properties.insert(
            PropertyKey::Symbol(description.into()),
            PropertySlot::value(value),
        );
        self
    }

    /// Adds an enumerable accessor property with a getter only.
    #[must_use]
    pub fn getter<F>(mut self, key: impl Into<String>, get: F) -> Self
    where
        F: Fn() -> std::result::Result<Value, String> + 'static,
    {
        self.data.properties.insert(
            PropertyKey::Str(key.into()),
            PropertySlot {
                property: Property::Getter(Rc::new(get)),
                enumerable: true,
            },
        );
        self
    }

    /// Adds an accessor property with both a getter and a setter.
    #[must_use]
    pub fn getter_setter<F>(mut self, key: impl Into<String>, get: F) -> Self
    where
        F: Fn() -> std::result::Result<Value, String> + 'static,
    {
        self.data.properties.insert(
            PropertyKey::Str(key.into()),
            PropertySlot {
                property: Property::GetterSetter(Rc::new(get)),
                enumerable: true,
            },
        );
        self
    }

    /// Adds a setter-only accessor property.
    #[must_use]
    pub fn setter(mut self, key: impl Into<String>) -> Self {
        self.data.properties.insert(
            PropertyKey::Str(key.into()),
            PropertySlot {
                property: Property::Setter,
                enumerable: true,
            },
        );
        self
    }

    /// Installs a custom inspect hook.
    #[must_use]
    pub fn custom_inspect<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<i64>, &InspectOptions, InspectFn) -> std::result::Result<Value, String>
            + 'static,
    {
        self.data.custom_inspect = Some(Rc::new(hook));
        self
    }

    /// Installs a custom string conversion used by `%s` template formatting.
    #[must_use]
    pub fn to_display<F>(mut self, convert: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        self.data.to_display = Some(Rc::new(convert));
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.build_handle())
    }

    pub fn build_handle(self) -> ObjectHandle {
        ObjectHandle::new(self.data)
    }
}

impl Default for ObjectBuilder {
    fn default() -> Self {
        ObjectBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_follows_the_allocation() {
        let a = ObjectBuilder::new().build_handle();
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.id(), b.id());

        let c = ObjectBuilder::new().build_handle();
        assert!(!a.ptr_eq(&c));
    }

    #[test]
    fn test_primitive_equality() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_eq!(Value::from("x"), Value::String("x".to_string()));
        assert_ne!(Value::Null, Value::Undefined);
    }

    #[test]
    fn test_array_length_counts_holes() {
        let slots = vec![
            ArraySlot::Item(Value::from(1)),
            ArraySlot::Holes(4),
            ArraySlot::Item(Value::from(2)),
        ];
        assert_eq!(array_length(&slots), 6);
    }

    #[test]
    fn test_builder_properties() {
        let handle = ObjectBuilder::new()
            .prop("visible", Value::from(1))
            .hidden_prop("hidden", Value::from(2))
            .build_handle();
        let data = handle.borrow();
        assert_eq!(data.properties.len(), 2);
        assert!(data.properties[&PropertyKey::Str("visible".into())].enumerable);
        assert!(!data.properties[&PropertyKey::Str("hidden".into())].enumerable);
    }

    #[test]
    fn test_set_and_get() {
        let handle = ObjectBuilder::new().build_handle();
        handle.set("k", Value::from("v"));
        assert_eq!(handle.get("k"), Some(Value::from("v")));
        assert_eq!(handle.get("missing"), None);
    }

    #[test]
    fn test_typed_array_byte_length() {
        let data = TypedArrayData {
            kind: TypedArrayKind::Int32,
            elements: TypedElements::Numbers(vec![1.0, 2.0, 3.0]),
            buffer: None,
        };
        assert_eq!(data.byte_length(), 12);
    }
}
