//! Printf-style template formatting on top of the inspection engine.
//!
//! [`format_template`] consumes a leading format string containing `%`
//! placeholders and substitutes the remaining arguments; arguments without a
//! placeholder are appended space-separated, inspected unless they are plain
//! strings.
//!
//! ```rust
//! use ocular::{format_template, Value};
//!
//! let out = format_template(&[
//!     Value::from("%s has %d points"),
//!     Value::from("Ada"),
//!     Value::from(42),
//! ]);
//! assert_eq!(out, "Ada has 42 points");
//! ```

use crate::formatter::{
    format_bigint_with, format_number_with, inspect_with_options, js_number_to_string, Styler,
};
use crate::options::{Compact, InspectOptions};
use crate::value::{
    ArraySlot, ObjectKind, Property, PropertyKey, PropertySlot, TypedElements, Value,
};

/// Formats with default options.
pub fn format_template(args: &[Value]) -> String {
    format_template_with_options(&InspectOptions::new(), args)
}

/// Formats with explicit options, applied to every inspected substitution.
///
/// Recognized placeholders: `%s` (string), `%d` (number), `%i` (integer),
/// `%f` (float), `%j` (JSON), `%o` / `%O` (inspected object), `%c`
/// (swallowed), `%%` (literal percent). Placeholders without a matching
/// argument and unknown placeholders are left in place.
pub fn format_template_with_options(options: &InspectOptions, args: &[Value]) -> String {
    let mut a = 0usize;
    let mut str = String::new();
    let mut join = "";

    if let Some(Value::String(first)) = args.first() {
        if args.len() == 1 {
            return first.clone();
        }
        let bytes = first.as_bytes();
        let mut last_pos = 0usize;
        let mut i = 0usize;
        while i + 1 < bytes.len() {
            if bytes[i] != b'%' {
                i += 1;
                continue;
            }
            let spec = bytes[i + 1];
            if a + 1 != args.len() {
                match spec {
                    b'%' => {
                        str += &first[last_pos..=i];
                        last_pos = i + 2;
                    }
                    b's' | b'j' | b'd' | b'O' | b'o' | b'i' | b'f' | b'c' => {
                        a += 1;
                        let arg = &args[a];
                        let temp = match spec {
                            b's' => string_placeholder(arg, options),
                            b'j' => json_placeholder(arg),
                            b'd' => decimal_placeholder(arg, options),
                            b'O' => inspect_with_options(arg, options),
                            b'o' => inspect_with_options(
                                arg,
                                &options
                                    .clone()
                                    .with_show_hidden(true)
                                    .with_show_proxy(true)
                                    .with_depth(Some(4)),
                            ),
                            b'i' => integer_placeholder(arg, options),
                            b'f' => float_placeholder(arg, options),
                            // %c is a browser styling directive, swallowed.
                            _ => String::new(),
                        };
                        str += &first[last_pos..i];
                        str += &temp;
                        last_pos = i + 2;
                    }
                    // Any other character is not a placeholder.
                    _ => {}
                }
            } else if spec == b'%' {
                str += &first[last_pos..=i];
                last_pos = i + 2;
            }
            i += 2;
        }
        if last_pos != 0 {
            a += 1;
            join = " ";
            if last_pos < first.len() {
                str += &first[last_pos..];
            }
        }
    }

    while a < args.len() {
        let value = &args[a];
        str += join;
        match value {
            Value::String(s) => str += s,
            other => str += &inspect_with_options(other, options),
        }
        join = " ";
        a += 1;
    }
    str
}

/// `%s`: strings pass through, numbers keep separator handling, and objects
/// with a custom display conversion use it; everything else is inspected
/// shallowly.
fn string_placeholder(value: &Value, options: &InspectOptions) -> String {
    match value {
        Value::Number(n) => format_number_with(&Styler::Plain, *n, options.numeric_separator),
        Value::BigInt(b) => format_bigint_with(&Styler::Plain, b, options.numeric_separator),
        Value::Object(handle) => {
            let to_display = handle.borrow().to_display.clone();
            match to_display {
                Some(display) => display(),
                None => {
                    let opts = options
                        .clone()
                        .with_compact(Compact::Limit(3))
                        .with_colors(false)
                        .with_depth(Some(0));
                    inspect_with_options(value, &opts)
                }
            }
        }
        other => loose_to_string(other, options),
    }
}

fn decimal_placeholder(value: &Value, options: &InspectOptions) -> String {
    match value {
        Value::BigInt(b) => format_bigint_with(&Styler::Plain, b, options.numeric_separator),
        Value::Symbol(_) => "NaN".to_string(),
        other => format_number_with(&Styler::Plain, to_number(other), options.numeric_separator),
    }
}

fn integer_placeholder(value: &Value, options: &InspectOptions) -> String {
    match value {
        Value::BigInt(b) => format_bigint_with(&Styler::Plain, b, options.numeric_separator),
        Value::Symbol(_) => "NaN".to_string(),
        other => format_number_with(
            &Styler::Plain,
            js_parse_int(&loose_to_string(other, options)),
            options.numeric_separator,
        ),
    }
}

fn float_placeholder(value: &Value, options: &InspectOptions) -> String {
    match value {
        Value::Symbol(_) => "NaN".to_string(),
        other => format_number_with(
            &Styler::Plain,
            js_parse_float(&loose_to_string(other, options)),
            options.numeric_separator,
        ),
    }
}

/// The loose string conversion placeholders apply before numeric parsing.
fn loose_to_string(value: &Value, options: &InspectOptions) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number_with(&Styler::Plain, *n, options.numeric_separator),
        Value::BigInt(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Symbol(sym) => sym.display_text(),
        Value::Object(handle) => {
            let to_display = handle.borrow().to_display.clone();
            if let Some(display) = to_display {
                return display();
            }
            let kind = handle.borrow().kind.clone();
            match kind {
                ObjectKind::Array(slots) => {
                    let mut seen = vec![handle.id()];
                    join_array(&slots, &mut seen)
                }
                _ => "[object Object]".to_string(),
            }
        }
    }
}

/// Arrays stringify as their comma-joined elements; nullish elements and
/// cyclic references contribute empty strings.
fn join_array(slots: &[ArraySlot], seen: &mut Vec<usize>) -> String {
    let mut parts = Vec::new();
    for slot in slots {
        match slot {
            ArraySlot::Holes(n) => {
                for _ in 0..*n {
                    parts.push(String::new());
                }
            }
            ArraySlot::Item(Value::Undefined) | ArraySlot::Item(Value::Null) => {
                parts.push(String::new());
            }
            ArraySlot::Item(Value::Number(n)) => parts.push(js_number_to_string(*n)),
            ArraySlot::Item(Value::Object(inner)) => {
                let inner_kind = inner.borrow().kind.clone();
                if let ObjectKind::Array(inner_slots) = inner_kind {
                    let id = inner.id();
                    if seen.contains(&id) {
                        parts.push(String::new());
                    } else {
                        seen.push(id);
                        parts.push(join_array(&inner_slots, seen));
                        seen.pop();
                    }
                } else {
                    let options = InspectOptions::new();
                    parts.push(loose_to_string(&Value::Object(inner.clone()), &options));
                }
            }
            ArraySlot::Item(other) => {
                let options = InspectOptions::new();
                parts.push(loose_to_string(other, &options));
            }
        }
    }
    parts.join(",")
}

fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => *n,
        Value::String(s) => string_to_number(s),
        Value::BigInt(_) | Value::Symbol(_) => f64::NAN,
        Value::Object(handle) => {
            let kind = handle.borrow().kind.clone();
            match kind {
                ObjectKind::Boxed(boxed) => to_number(&boxed.unbox()),
                ObjectKind::Date(Some(dt)) => dt.timestamp_millis() as f64,
                ObjectKind::Array(slots) => {
                    let mut seen = vec![handle.id()];
                    string_to_number(&join_array(&slots, &mut seen))
                }
                _ => f64::NAN,
            }
        }
    }
}

fn string_to_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        return match i64::from_str_radix(hex, 16) {
            Ok(n) => n as f64,
            Err(_) => f64::NAN,
        };
    }
    match t {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => t.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Integer parsing over a leading digit run, hex prefixes included.
fn js_parse_int(s: &str) -> f64 {
    let t = s.trim_start();
    let (sign, rest) = match t.strip_prefix('-') {
        Some(r) => (-1.0, r),
        None => (1.0, t.strip_prefix('+').unwrap_or(t)),
    };
    let (radix, digits) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(h) => (16u32, h),
        None => (10u32, rest),
    };
    let mut acc = f64::NAN;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => {
                if acc.is_nan() {
                    acc = 0.0;
                }
                acc = acc * radix as f64 + d as f64;
            }
            None => break,
        }
    }
    sign * acc
}

/// Float parsing over the longest valid numeric prefix.
fn js_parse_float(s: &str) -> f64 {
    let t = s.trim_start();
    if t.starts_with("Infinity") || t.starts_with("+Infinity") {
        return f64::INFINITY;
    }
    if t.starts_with("-Infinity") {
        return f64::NEG_INFINITY;
    }
    let bytes = t.as_bytes();
    let mut i = 0usize;
    let mut had_digits = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        had_digits = true;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        let mut frac = false;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            frac = true;
        }
        // A bare dot only counts when digits surround it.
        if had_digits || frac {
            i = j;
            had_digits = had_digits || frac;
        }
    }
    if !had_digits {
        return f64::NAN;
    }
    let mut end = i;
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }
    t[..end].parse::<f64>().unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// %j

struct CircularJson;

/// `%j`: JSON serialization; cyclic graphs collapse to `[Circular]` and
/// unrepresentable top-level values render as `undefined`.
fn json_placeholder(value: &Value) -> String {
    let mut seen = Vec::new();
    match json_value(value, &mut seen) {
        Ok(Some(text)) => text,
        Ok(None) => "undefined".to_string(),
        Err(CircularJson) => "[Circular]".to_string(),
    }
}

fn json_quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

fn json_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    js_number_to_string(n)
}

fn json_value(value: &Value, seen: &mut Vec<usize>) -> Result<Option<String>, CircularJson> {
    Ok(Some(match value {
        Value::Undefined | Value::Symbol(_) => return Ok(None),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => json_number(*n),
        Value::BigInt(b) => b.to_string(),
        Value::String(s) => json_quote(s),
        Value::Object(handle) => {
            let id = handle.id();
            if seen.contains(&id) {
                return Err(CircularJson);
            }
            let kind = handle.borrow().kind.clone();
            match kind {
                ObjectKind::Function(_) => return Ok(None),
                ObjectKind::Date(Some(dt)) => {
                    json_quote(&dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
                }
                ObjectKind::Date(None) => "null".to_string(),
                ObjectKind::Boxed(boxed) => return json_value(&boxed.unbox(), seen),
                ObjectKind::Array(slots) => {
                    seen.push(id);
                    let mut items = Vec::new();
                    for slot in &slots {
                        match slot {
                            // Holes serialize as nulls.
                            ArraySlot::Holes(n) => {
                                for _ in 0..*n {
                                    items.push("null".to_string());
                                }
                            }
                            ArraySlot::Item(v) => items.push(
                                json_value(v, seen)?.unwrap_or_else(|| "null".to_string()),
                            ),
                        }
                    }
                    seen.pop();
                    format!("[{}]", items.join(","))
                }
                ObjectKind::TypedArray(data) => {
                    let mut fields = Vec::new();
                    match &data.elements {
                        TypedElements::Numbers(values) => {
                            for (i, n) in values.iter().enumerate() {
                                fields.push(format!("\"{i}\":{}", json_number(*n)));
                            }
                        }
                        TypedElements::BigInts(values) => {
                            for (i, b) in values.iter().enumerate() {
                                fields.push(format!("\"{i}\":{b}"));
                            }
                        }
                    }
                    format!("{{{}}}", fields.join(","))
                }
                _ => {
                    seen.push(id);
                    let props: Vec<(PropertyKey, PropertySlot)> = handle
                        .borrow()
                        .properties
                        .iter()
                        .filter(|(_, slot)| slot.enumerable)
                        .map(|(k, s)| (k.clone(), s.clone()))
                        .collect();
                    let mut fields = Vec::new();
                    for (key, slot) in props {
                        let PropertyKey::Str(name) = key else { continue };
                        let resolved = match slot.property {
                            Property::Value(v) => Some(v),
                            // A throwing getter drops the key.
                            Property::Getter(get) | Property::GetterSetter(get) => get().ok(),
                            Property::Setter => None,
                        };
                        let Some(resolved) = resolved else { continue };
                        if let Some(text) = json_value(&resolved, seen)? {
                            fields.push(format!("{}:{}", json_quote(&name), text));
                        }
                    }
                    seen.pop();
                    format!("{{{}}}", fields.join(","))
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ObjectBuilder;

    #[test]
    fn test_basic_placeholders() {
        let out = format_template(&[
            Value::from("%s:%d"),
            Value::from("a"),
            Value::from(10),
        ]);
        assert_eq!(out, "a:10");
    }

    #[test]
    fn test_percent_escape() {
        let out = format_template(&[Value::from("100%% sure"), Value::from("x")]);
        assert_eq!(out, "100% sure x");
    }

    #[test]
    fn test_missing_arguments_keep_placeholder() {
        let out = format_template(&[Value::from("%s and %s"), Value::from("one")]);
        assert_eq!(out, "one and %s");
    }

    #[test]
    fn test_single_string_passthrough() {
        assert_eq!(format_template(&[Value::from("%d untouched")]), "%d untouched");
    }

    #[test]
    fn test_extra_arguments_appended() {
        let out = format_template(&[
            Value::from("head"),
            Value::from("tail"),
            Value::from(1),
        ]);
        assert_eq!(out, "head tail 1");
    }

    #[test]
    fn test_leading_non_string() {
        let out = format_template(&[Value::from(1), Value::from(2)]);
        assert_eq!(out, "1 2");
    }

    #[test]
    fn test_integer_and_float() {
        let out = format_template(&[
            Value::from("%i %f"),
            Value::from("42.9px"),
            Value::from("42.9px"),
        ]);
        assert_eq!(out, "42 42.9");
    }

    #[test]
    fn test_numeric_placeholders_coerce_arrays() {
        let out = format_template(&[
            Value::from("%d %i %f"),
            Value::array(vec![Value::from(5)]),
            Value::array(vec![Value::from(42)]),
            Value::array(vec![Value::from("2.5")]),
        ]);
        assert_eq!(out, "5 42 2.5");
    }

    #[test]
    fn test_array_to_number_edges() {
        let out = format_template(&[Value::from("%d"), Value::array(vec![])]);
        assert_eq!(out, "0");
        let out = format_template(&[
            Value::from("%d"),
            Value::array(vec![Value::from(1), Value::from(2)]),
        ]);
        assert_eq!(out, "NaN");
    }

    #[test]
    fn test_symbol_is_nan_for_numbers() {
        let out = format_template(&[Value::from("%d"), Value::symbol("s")]);
        assert_eq!(out, "NaN");
    }

    #[test]
    fn test_c_swallows_argument() {
        let out = format_template(&[Value::from("a%cb"), Value::from("color: red")]);
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let out = format_template(&[Value::from("%x"), Value::from(1)]);
        assert_eq!(out, "%x 1");
    }

    #[test]
    fn test_json_placeholder() {
        let obj = Value::object([("a", Value::from(1)), ("b", Value::from("x"))]);
        let out = format_template(&[Value::from("%j"), obj]);
        assert_eq!(out, r#"{"a":1,"b":"x"}"#);
    }

    #[test]
    fn test_json_circular() {
        let obj = ObjectBuilder::new().build_handle();
        obj.set("own", obj.clone().into());
        let out = format_template(&[Value::from("%j"), obj.into()]);
        assert_eq!(out, "[Circular]");
    }

    #[test]
    fn test_json_array_holes() {
        let arr = Value::sparse_array(vec![
            ArraySlot::Item(Value::from(1)),
            ArraySlot::Holes(2),
            ArraySlot::Item(Value::from(4)),
        ]);
        let out = format_template(&[Value::from("%j"), arr]);
        assert_eq!(out, "[1,null,null,4]");
    }

    #[test]
    fn test_string_placeholder_shallow_inspect() {
        let nested = Value::object([(
            "inner",
            Value::object(std::iter::empty::<(&str, Value)>()),
        )]);
        let out = format_template(&[Value::from("%s"), nested]);
        assert_eq!(out, "{ inner: [Object] }");
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(js_parse_int("  -12abc"), -12.0);
        assert_eq!(js_parse_int("0x1f"), 31.0);
        assert!(js_parse_int("abc").is_nan());
        assert_eq!(js_parse_float("3.5e2x"), 350.0);
        assert_eq!(js_parse_float("3."), 3.0);
        assert!(js_parse_float(".").is_nan());
        assert_eq!(string_to_number("  "), 0.0);
        assert!(string_to_number("12px").is_nan());
    }
}
