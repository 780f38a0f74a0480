//! Variant classification for composite values.
//!
//! Classification answers four questions about an object without rendering
//! anything: which renderer handles it (the tag), what its constructor is
//! called (or that it has none), whether it carries a type-tag marker, and
//! the canonical fallback name for its kind. It is total and side-effect
//! free apart from guarded marker-getter probes.

use crate::value::{
    ObjectHandle, ObjectKind, Property, PropertyKey, Proto, Value, TO_STRING_TAG,
};

/// Which renderer a composite value is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    PlainObject,
    Array,
    TypedArray,
    Set,
    Map,
    SetIterator,
    MapIterator,
    Function,
    Error,
    RegExp,
    Date,
    Boxed,
    ArrayBuffer,
    DataView,
    Promise,
    WeakMap,
    WeakSet,
    Url,
}

/// The classifier's answer for one object.
#[derive(Debug, Clone)]
pub struct Classification {
    pub tag: Tag,
    /// Resolved constructor name; `None` means a null prototype.
    pub constructor: Option<String>,
    /// The type-tag marker shown in prefixes, empty when absent.
    pub marker: String,
}

/// The built-in fallback name for a kind, used when the prototype chain
/// gives no better answer.
pub fn canonical_name(kind: &ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Plain | ObjectKind::SetIterator(_) | ObjectKind::MapIterator(_) => "Object",
        ObjectKind::Array(_) => "Array",
        ObjectKind::TypedArray(data) => data.kind.name(),
        ObjectKind::Set(_) => "Set",
        ObjectKind::Map(_) => "Map",
        ObjectKind::Function(_) => "Function",
        ObjectKind::Error(_) => "Error",
        ObjectKind::RegExp { .. } => "RegExp",
        ObjectKind::Date(_) => "Date",
        ObjectKind::Boxed(boxed) => boxed.type_name(),
        ObjectKind::ArrayBuffer { shared: false, .. } => "ArrayBuffer",
        ObjectKind::ArrayBuffer { shared: true, .. } => "SharedArrayBuffer",
        ObjectKind::DataView { .. } => "DataView",
        ObjectKind::Promise => "Promise",
        ObjectKind::WeakMap => "WeakMap",
        ObjectKind::WeakSet => "WeakSet",
        ObjectKind::Url(_) => "URL",
    }
}

fn tag_for(kind: &ObjectKind) -> Tag {
    match kind {
        ObjectKind::Plain => Tag::PlainObject,
        ObjectKind::Array(_) => Tag::Array,
        ObjectKind::TypedArray(_) => Tag::TypedArray,
        ObjectKind::Set(_) => Tag::Set,
        ObjectKind::Map(_) => Tag::Map,
        ObjectKind::SetIterator(_) => Tag::SetIterator,
        ObjectKind::MapIterator(_) => Tag::MapIterator,
        ObjectKind::Function(_) => Tag::Function,
        ObjectKind::Error(_) => Tag::Error,
        ObjectKind::RegExp { .. } => Tag::RegExp,
        ObjectKind::Date(_) => Tag::Date,
        ObjectKind::Boxed(_) => Tag::Boxed,
        ObjectKind::ArrayBuffer { .. } => Tag::ArrayBuffer,
        ObjectKind::DataView { .. } => Tag::DataView,
        ObjectKind::Promise => Tag::Promise,
        ObjectKind::WeakMap => Tag::WeakMap,
        ObjectKind::WeakSet => Tag::WeakSet,
        ObjectKind::Url(_) => Tag::Url,
    }
}

/// Names that identify built-in prototypes when walking a chain.
static BUILTIN_NAMES: &[&str] = &[
    "Object",
    "Array",
    "Function",
    "Set",
    "Map",
    "WeakSet",
    "WeakMap",
    "Date",
    "RegExp",
    "Error",
    "TypeError",
    "RangeError",
    "SyntaxError",
    "ReferenceError",
    "EvalError",
    "URIError",
    "AggregateError",
    "Promise",
    "ArrayBuffer",
    "SharedArrayBuffer",
    "DataView",
    "Boolean",
    "Number",
    "String",
    "Symbol",
    "BigInt",
    "URL",
    "Int8Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "Int16Array",
    "Uint16Array",
    "Int32Array",
    "Uint32Array",
    "Float32Array",
    "Float64Array",
    "BigInt64Array",
    "BigUint64Array",
];

pub fn is_builtin_name(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

const MAX_PROTO_HOPS: usize = 100;

/// Reads the `constructor` data property of a prototype object, if it is a
/// named function.
pub(crate) fn constructor_of(proto: &ObjectHandle) -> Option<String> {
    let data = proto.borrow();
    let slot = data
        .properties
        .get(&PropertyKey::Str("constructor".to_string()))?;
    if let Property::Value(Value::Object(handle)) = &slot.property {
        if let ObjectKind::Function(func) = &handle.borrow().kind {
            if !func.name.is_empty() {
                return Some(func.name.clone());
            }
        }
    }
    None
}

fn resolve_constructor(handle: &ObjectHandle) -> Option<String> {
    let first_proto = handle.borrow().proto.clone();
    let mut proto = match first_proto {
        Proto::Builtin => return Some(canonical_name(&handle.borrow().kind).to_string()),
        Proto::Null => return None,
        Proto::Object(p) => p,
    };
    for _ in 0..MAX_PROTO_HOPS {
        if let Some(name) = constructor_of(&proto) {
            return Some(name);
        }
        let next = proto.borrow().proto.clone();
        match next {
            Proto::Builtin => return Some(canonical_name(&handle.borrow().kind).to_string()),
            // The chain had objects but never named a constructor.
            Proto::Null => return Some("<uninspectable>".to_string()),
            Proto::Object(p) => proto = p,
        }
    }
    Some("<uninspectable>".to_string())
}

/// Reads the type-tag marker through a guarded probe; a throwing getter is
/// treated as absent.
fn probe_marker(handle: &ObjectHandle, show_hidden: bool) -> String {
    let key = PropertyKey::Symbol(TO_STRING_TAG.to_string());
    let (tag, enumerable) = {
        let data = handle.borrow();
        match data.properties.get(&key) {
            Some(slot) => {
                let enumerable = slot.enumerable;
                let getter = match &slot.property {
                    Property::Value(Value::String(s)) => {
                        return filter_marker(s.clone(), enumerable, show_hidden)
                    }
                    Property::Value(_) | Property::Setter => return String::new(),
                    Property::Getter(g) | Property::GetterSetter(g) => g.clone(),
                };
                (getter, enumerable)
            }
            None => {
                // Iterators carry an implicit marker.
                return match &data.kind {
                    ObjectKind::SetIterator(_) => "Set Iterator".to_string(),
                    ObjectKind::MapIterator(_) => "Map Iterator".to_string(),
                    _ => String::new(),
                };
            }
        }
    };
    match tag() {
        Ok(Value::String(s)) => filter_marker(s, enumerable, show_hidden),
        _ => String::new(),
    }
}

/// An own marker is shown in the prefix only when it would not also appear
/// in the property list: hidden-property mode lists every own property, and
/// enumerable markers are listed even without it.
fn filter_marker(marker: String, enumerable: bool, show_hidden: bool) -> String {
    if show_hidden || enumerable {
        String::new()
    } else {
        marker
    }
}

/// Classifies a composite value.
pub fn classify(handle: &ObjectHandle, show_hidden: bool) -> Classification {
    let tag = tag_for(&handle.borrow().kind);
    let constructor = resolve_constructor(handle);
    let mut marker = probe_marker(handle, show_hidden);
    if Some(marker.as_str()) == constructor.as_deref() {
        marker = String::new();
    }
    Classification {
        tag,
        constructor,
        marker,
    }
}

/// Builds the descriptive prefix placed before braces: constructor name,
/// size, marker, and the null-prototype form. Always ends with a space.
pub fn get_prefix(constructor: Option<&str>, marker: &str, fallback: &str, size: &str) -> String {
    match constructor {
        None => {
            if !marker.is_empty() && fallback != marker {
                format!("[{fallback}{size}: null prototype] [{marker}] ")
            } else {
                format!("[{fallback}{size}: null prototype] ")
            }
        }
        Some(ctor) => {
            if !marker.is_empty() && ctor != marker {
                format!("{ctor}{size} [{marker}] ")
            } else {
                format!("{ctor}{size} ")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ObjectBuilder;

    fn classify_value(v: &Value) -> Classification {
        classify(v.as_object().unwrap(), false)
    }

    #[test]
    fn test_builtin_constructors() {
        let c = classify_value(&Value::array(vec![]));
        assert_eq!(c.tag, Tag::Array);
        assert_eq!(c.constructor.as_deref(), Some("Array"));
        assert_eq!(c.marker, "");

        let c = classify_value(&Value::map(vec![]));
        assert_eq!(c.tag, Tag::Map);
        assert_eq!(c.constructor.as_deref(), Some("Map"));
    }

    #[test]
    fn test_null_prototype() {
        let v = ObjectBuilder::new().null_proto().build();
        let c = classify_value(&v);
        assert_eq!(c.tag, Tag::PlainObject);
        assert_eq!(c.constructor, None);
    }

    #[test]
    fn test_named_class() {
        let v = ObjectBuilder::new().class("Point").build();
        let c = classify_value(&v);
        assert_eq!(c.constructor.as_deref(), Some("Point"));
    }

    #[test]
    fn test_marker_respects_enumerability() {
        let v = ObjectBuilder::new().tag("Custom").build();
        let c = classify_value(&v);
        assert_eq!(c.marker, "Custom");

        // In hidden mode the marker shows up as a property instead.
        let c = classify(v.as_object().unwrap(), true);
        assert_eq!(c.marker, "");
    }

    #[test]
    fn test_iterator_markers() {
        let c = classify_value(&Value::set_iterator(vec![]));
        assert_eq!(c.tag, Tag::SetIterator);
        assert_eq!(c.marker, "Set Iterator");
    }

    #[test]
    fn test_prefix_forms() {
        assert_eq!(get_prefix(Some("Array"), "", "Array", "(3)"), "Array(3) ");
        assert_eq!(get_prefix(Some("Foo"), "Bar", "Object", ""), "Foo [Bar] ");
        assert_eq!(
            get_prefix(None, "", "Object", ""),
            "[Object: null prototype] "
        );
        assert_eq!(
            get_prefix(None, "Tagged", "Object", ""),
            "[Object: null prototype] [Tagged] "
        );
    }
}
