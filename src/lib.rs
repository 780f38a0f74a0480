//! # ocular
//!
//! Bounded, human-readable previews of arbitrary runtime values.
//!
//! ## What is ocular?
//!
//! ocular renders a dynamic [`Value`] graph — primitives, objects, arrays,
//! sets, maps, errors, functions, buffers — into the kind of terse terminal
//! text a REPL prints: cycles are labeled instead of looping, depth and size
//! are budgeted, and output is packed onto single lines or aligned columns
//! whenever it fits.
//!
//! ## Key Features
//!
//! - **Total**: every value renders to something; broken getters and hooks
//!   degrade to placeholders instead of failing the whole preview
//! - **Bounded**: depth, entry count, string length, and line width are all
//!   capped, with explicit `... n more items` truncation
//! - **Cycle-safe**: shared structure is detected by identity and labeled
//!   `<ref *1>` / `[Circular *1]`
//! - **Serde Compatible**: [`to_value`] turns any `Serialize` type into an
//!   inspectable graph
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ocular = "0.1"
//! ```
//!
//! ### Inspecting values
//!
//! ```rust
//! use ocular::{inspect, value};
//!
//! let v = value!({
//!     "name": "Alice",
//!     "scores": [98, 87, 91],
//!     "active": true
//! });
//! assert_eq!(
//!     inspect(&v),
//!     "{ name: 'Alice', scores: [ 98, 87, 91 ], active: true }"
//! );
//! ```
//!
//! ### Controlling depth and layout
//!
//! ```rust
//! use ocular::{inspect_with_options, InspectOptions, Value};
//!
//! let v = Value::object([("outer", Value::object([("inner", Value::from(1))]))]);
//! let shallow = InspectOptions::new().with_depth(Some(0));
//! assert_eq!(inspect_with_options(&v, &shallow), "{ outer: [Object] }");
//! ```
//!
//! ### Template formatting
//!
//! ```rust
//! use ocular::{format_template, Value};
//!
//! let line = format_template(&[
//!     Value::from("listening on %s:%d"),
//!     Value::from("0.0.0.0"),
//!     Value::from(8080),
//! ]);
//! assert_eq!(line, "listening on 0.0.0.0:8080");
//! ```
//!
//! ### From serde types
//!
//! ```rust
//! use ocular::{inspect, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User { id: u32, name: String }
//!
//! let v = to_value(&User { id: 7, name: "Ada".to_string() }).unwrap();
//! assert_eq!(inspect(&v), "{ id: 7, name: 'Ada' }");
//! ```
//!
//! ## Guarantees
//!
//! - Inspection itself never fails; [`Error`] only arises from the serde
//!   bridge
//! - Output is deterministic for identical graphs and options
//! - No panics in the public API

pub mod classify;
pub mod error;
pub mod escape;
mod formatter;
mod layout;
pub mod macros;
pub mod options;
pub mod ser;
pub mod style;
pub mod template;
pub mod value;
pub mod width;

pub use classify::{classify, Classification, Tag};
pub use error::{Error, Result};
pub use escape::{escape_control, quote_string};
pub use formatter::{inspect, inspect_with_options};
pub use options::{Compact, Getters, InspectOptions, Sorted, StylizeFn};
pub use ser::{to_value, ValueSerializer};
pub use style::{color_codes, remove_colors, Role};
pub use template::{format_template, format_template_with_options};
pub use value::{
    array_length, ArraySlot, BoxedValue, CustomInspectFn, ErrorData, FunctionData, GetterFn,
    InspectFn, ObjectBuilder, ObjectData, ObjectHandle, ObjectKind, Property, PropertyKey,
    PropertySlot, Proto, Symbol, TypedArrayData, TypedArrayKind, TypedElements, Value,
};
pub use width::string_width;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_primitives() {
        assert_eq!(inspect(&Value::Undefined), "undefined");
        assert_eq!(inspect(&Value::Null), "null");
        assert_eq!(inspect(&Value::from(true)), "true");
        assert_eq!(inspect(&Value::from(-0.5)), "-0.5");
        assert_eq!(inspect(&Value::from("text")), "'text'");
    }

    #[test]
    fn test_inspect_object_graph() {
        let v = value!({
            "id": 1,
            "names": ["a", "b"],
            "meta": { "ok": true }
        });
        assert_eq!(
            inspect(&v),
            "{ id: 1, names: [ 'a', 'b' ], meta: { ok: true } }"
        );
    }

    #[test]
    fn test_roundtrip_through_serde() {
        use serde::Serialize;

        #[derive(Serialize)]
        struct Entry {
            key: String,
            count: u32,
        }

        let v = to_value(&vec![
            Entry { key: "a".to_string(), count: 1 },
            Entry { key: "b".to_string(), count: 2 },
        ])
        .unwrap();
        assert_eq!(
            inspect(&v),
            "[ { key: 'a', count: 1 }, { key: 'b', count: 2 } ]"
        );
    }
}
