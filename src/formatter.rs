//! The recursive rendering engine.
//!
//! [`format_value`] is the single entry point per value: primitives take a
//! fast path, composites go through the cycle check and then [`format_raw`],
//! which classifies the object, renders its variant-specific fragments and
//! own properties, and hands the pieces to the layout engine. A fresh
//! [`Context`] is created per top-level call and threads the seen stack,
//! circular labels, indentation, and per-level output budget.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::classify::{
    canonical_name, classify, constructor_of, get_prefix, is_builtin_name, Classification,
};
use crate::escape::quote_string;
use crate::layout::reduce_to_single_string;
use crate::options::{Compact, Getters, InspectOptions, Sorted, StylizeFn};
use crate::style::{stylize_plain, stylize_with_color, Role};
use crate::value::{
    array_length, ArraySlot, ErrorData, FunctionData, ObjectHandle, ObjectKind, Property,
    PropertyKey, PropertySlot, Proto, TypedArrayData, TypedElements, Value, MAX_ARRAY_INDEX,
};
use crate::width::string_width;

/// Strings shorter than this never wrap onto continuation lines.
const MIN_LINE_LENGTH: usize = 16;

/// Hard ceiling on nested composite values, independent of the user `depth`
/// option. Exceeding it degrades the subtree to a placeholder instead of
/// exhausting the host stack.
const RECURSION_LIMIT: u32 = 1000;

/// Cumulative output per indentation level beyond which the rest of the call
/// renders only placeholders.
const BUDGET_LIMIT: usize = 1 << 27;

/// Renders a value with default options.
///
/// ```rust
/// use ocular::{inspect, Value};
///
/// assert_eq!(inspect(&Value::array(vec![
///     Value::from(1),
///     Value::from("two"),
///     Value::Null,
/// ])), "[ 1, 'two', null ]");
/// ```
pub fn inspect(value: &Value) -> String {
    inspect_with_options(value, &InspectOptions::new())
}

/// Renders a value with explicit options.
pub fn inspect_with_options(value: &Value, options: &InspectOptions) -> String {
    let mut ctx = Context::new(options);
    format_value(&mut ctx, value, 0)
}

#[derive(Clone)]
pub(crate) enum Styler {
    Plain,
    Color,
    Custom(Rc<StylizeFn>),
}

impl Styler {
    pub(crate) fn apply(&self, text: &str, role: Role) -> String {
        match self {
            Styler::Plain => stylize_plain(text, role),
            Styler::Color => stylize_with_color(text, role),
            Styler::Custom(f) => f(text, role),
        }
    }

    fn is_plain(&self) -> bool {
        matches!(self, Styler::Plain)
    }
}

/// Per-call rendering state.
pub(crate) struct Context {
    pub(crate) depth: Option<i64>,
    pub(crate) colors: bool,
    pub(crate) show_hidden: bool,
    pub(crate) custom_inspect: bool,
    pub(crate) getters: Getters,
    pub(crate) sorted: Sorted,
    pub(crate) compact: Compact,
    pub(crate) numeric_separator: bool,
    pub(crate) break_length: usize,
    pub(crate) max_array_length: usize,
    pub(crate) max_string_length: usize,
    pub(crate) styler: Styler,
    pub(crate) extra: IndexMap<String, Value>,
    /// Identity tokens of the objects currently being rendered, innermost
    /// last. Pushes and pops are strictly paired.
    pub(crate) seen: Vec<usize>,
    /// Identity token to circular label, labels assigned from 1 in discovery
    /// order.
    pub(crate) circular: IndexMap<usize, usize>,
    pub(crate) budget: HashMap<usize, usize>,
    pub(crate) indentation_lvl: usize,
    /// The innermost depth of the part just inspected, maintained on the way
    /// down; layout compares it against the node's own depth.
    pub(crate) current_depth: i64,
    recursion: u32,
}

impl Context {
    fn new(options: &InspectOptions) -> Self {
        let styler = match (&options.stylize, options.colors) {
            (Some(f), _) => Styler::Custom(f.clone()),
            (None, true) => Styler::Color,
            (None, false) => Styler::Plain,
        };
        Context {
            depth: options.depth,
            colors: options.colors,
            show_hidden: options.show_hidden,
            custom_inspect: options.custom_inspect,
            getters: options.getters,
            sorted: options.sorted.clone(),
            compact: options.compact,
            numeric_separator: options.numeric_separator,
            break_length: options.break_length,
            max_array_length: options.max_array_length.unwrap_or(usize::MAX),
            max_string_length: options.max_string_length.unwrap_or(usize::MAX),
            styler,
            extra: options.extra.clone(),
            seen: Vec::new(),
            circular: IndexMap::new(),
            budget: HashMap::new(),
            indentation_lvl: 0,
            current_depth: 0,
            recursion: 0,
        }
    }

    pub(crate) fn stylize(&self, text: &str, role: Role) -> String {
        self.styler.apply(text, role)
    }

    /// The options snapshot handed to custom inspect hooks.
    fn user_options(&self) -> InspectOptions {
        let mut options = InspectOptions::new();
        options.depth = self.depth;
        options.colors = self.colors;
        options.show_hidden = self.show_hidden;
        options.custom_inspect = self.custom_inspect;
        options.getters = self.getters;
        options.sorted = self.sorted.clone();
        options.compact = self.compact;
        options.numeric_separator = self.numeric_separator;
        options.break_length = self.break_length;
        options.max_array_length = if self.max_array_length == usize::MAX {
            None
        } else {
            Some(self.max_array_length)
        };
        options.max_string_length = if self.max_string_length == usize::MAX {
            None
        } else {
            Some(self.max_string_length)
        };
        options.stylize = match &self.styler {
            Styler::Custom(f) => Some(f.clone()),
            _ => None,
        };
        options.extra = self.extra.clone();
        options
    }

    fn depth_exceeded(&self, recurse_times: u32) -> bool {
        self.depth.is_some_and(|d| (recurse_times as i64) > d)
    }
}

/// Whether a node's extra own properties come from an array-like renderer or
/// a plain-object one; layout treats the two differently.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extras {
    Object,
    ArrayLike,
}

pub(crate) fn format_value(ctx: &mut Context, value: &Value, recurse_times: u32) -> String {
    let handle = match value {
        Value::Null => return ctx.stylize("null", Role::Null),
        Value::Object(handle) => handle.clone(),
        primitive => return format_primitive(&ctx.styler.clone(), primitive, ctx),
    };

    if ctx.custom_inspect {
        let hook = handle.borrow().custom_inspect.clone();
        if let Some(hook) = hook {
            // Report the remaining depth the way callers configured it, not
            // the internal counter.
            let depth = ctx.depth.map(|d| d - recurse_times as i64);
            match hook(depth, &ctx.user_options(), inspect_with_options) {
                Ok(ret) => {
                    // A hook returning its receiver falls through to default
                    // rendering instead of recursing forever.
                    if !ret.same_identity(value) {
                        if let Value::String(s) = &ret {
                            let indent = format!("\n{}", " ".repeat(ctx.indentation_lvl));
                            return s.replace('\n', &indent);
                        }
                        return format_value(ctx, &ret, recurse_times);
                    }
                }
                Err(message) => {
                    return ctx
                        .stylize(&format!("<Inspection threw ({message})>"), Role::Special);
                }
            }
        }
    }

    let id = handle.id();
    if ctx.seen.contains(&id) {
        let index = match ctx.circular.get(&id) {
            Some(&index) => index,
            None => {
                let index = ctx.circular.len() + 1;
                ctx.circular.insert(id, index);
                index
            }
        };
        return ctx.stylize(&format!("[Circular *{index}]"), Role::Special);
    }

    format_raw(ctx, &handle, recurse_times)
}

fn format_raw(ctx: &mut Context, handle: &ObjectHandle, recurse_times: u32) -> String {
    ctx.recursion += 1;
    let res = format_raw_inner(ctx, handle, recurse_times);
    ctx.recursion -= 1;
    res
}

fn format_raw_inner(ctx: &mut Context, handle: &ObjectHandle, recurse_times: u32) -> String {
    let Classification {
        tag: _,
        constructor,
        marker,
    } = classify(handle, ctx.show_hidden);
    let kind = handle.borrow().kind.clone();
    let canonical = canonical_name(&kind);
    let ctor = constructor.as_deref();

    if ctx.recursion > RECURSION_LIMIT {
        let style = get_ctx_style(ctor, &marker, canonical);
        let name = &style[..style.len() - 1];
        return ctx.stylize(
            &format!("[{name}: Inspection interrupted prematurely. Maximum recursion depth reached.]"),
            Role::Special,
        );
    }

    let mut proto_props = if ctx.show_hidden && !ctx.depth_exceeded(recurse_times) {
        let mut out = Vec::new();
        add_prototype_properties(ctx, handle, recurse_times, &mut out);
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    } else {
        None
    };

    let mut keys = get_keys(handle, ctx.show_hidden);
    let mut base = String::new();
    let mut braces = ("{".to_string(), "}".to_string());
    let mut extras = Extras::Object;
    let mut renderer = Renderer::Empty;
    let mut numeric = false;

    match kind {
        ObjectKind::Array(slots) => {
            let len = array_length(&slots);
            let prefix = if ctor != Some("Array") || !marker.is_empty() {
                get_prefix(ctor, &marker, "Array", &format!("({len})"))
            } else {
                String::new()
            };
            braces = (format!("{prefix}["), "]".to_string());
            if len == 0 && keys.is_empty() && proto_props.is_none() {
                return format!("{}]", braces.0);
            }
            extras = Extras::ArrayLike;
            numeric = !slots.is_empty()
                && slots.iter().all(|slot| {
                    matches!(
                        slot,
                        ArraySlot::Item(Value::Number(_)) | ArraySlot::Item(Value::BigInt(_))
                    )
                });
            renderer = Renderer::Array(slots);
        }
        ObjectKind::Set(items) => {
            let prefix = get_prefix(ctor, &marker, "Set", &format!("({})", items.len()));
            if items.is_empty() && keys.is_empty() && proto_props.is_none() {
                return format!("{prefix}{{}}");
            }
            braces = (format!("{prefix}{{"), "}".to_string());
            renderer = Renderer::Set(items);
        }
        ObjectKind::Map(entries) => {
            let prefix = get_prefix(ctor, &marker, "Map", &format!("({})", entries.len()));
            if entries.is_empty() && keys.is_empty() && proto_props.is_none() {
                return format!("{prefix}{{}}");
            }
            braces = (format!("{prefix}{{"), "}".to_string());
            renderer = Renderer::Map(entries);
        }
        ObjectKind::TypedArray(data) => {
            let size = data.elements.len();
            let prefix = get_prefix(ctor, &marker, data.kind.name(), &format!("({size})"));
            braces = (format!("{prefix}["), "]".to_string());
            if size == 0 && keys.is_empty() && !ctx.show_hidden {
                return format!("{}]", braces.0);
            }
            extras = Extras::ArrayLike;
            numeric = true;
            renderer = Renderer::TypedArray(data);
        }
        ObjectKind::MapIterator(_) => {
            braces = get_iterator_braces("Map", &marker);
            renderer = Renderer::MapIter;
        }
        ObjectKind::SetIterator(_) => {
            braces = get_iterator_braces("Set", &marker);
            renderer = Renderer::SetIter;
        }
        ObjectKind::Function(func) => {
            base = get_function_base(handle, &func, ctor, &marker);
            if keys.is_empty() && proto_props.is_none() {
                return ctx.stylize(&base, Role::Special);
            }
        }
        ObjectKind::Plain => {
            if ctor == Some("Object") {
                if !marker.is_empty() {
                    braces.0 = format!("{}{{", get_prefix(ctor, &marker, "Object", ""));
                }
                if keys.is_empty() && proto_props.is_none() {
                    return format!("{}}}", braces.0);
                }
            } else {
                braces.0 = format!("{}{{", get_ctx_style(ctor, &marker, canonical));
                if keys.is_empty() && proto_props.is_none() {
                    return format!("{}}}", braces.0);
                }
            }
        }
        ObjectKind::RegExp { source, flags } => {
            base = format!("/{source}/{flags}");
            let prefix = get_prefix(ctor, &marker, "RegExp", "");
            if prefix != "RegExp " {
                base = format!("{prefix}{base}");
            }
            if (keys.is_empty() && proto_props.is_none()) || ctx.depth_exceeded(recurse_times) {
                return ctx.stylize(&base, Role::RegExp);
            }
        }
        ObjectKind::Date(when) => {
            base = match when {
                Some(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
                None => "Invalid Date".to_string(),
            };
            let prefix = get_prefix(ctor, &marker, "Date", "");
            if prefix != "Date " {
                base = format!("{prefix}{base}");
            }
            if keys.is_empty() && proto_props.is_none() {
                return ctx.stylize(&base, Role::Date);
            }
        }
        ObjectKind::Error(err) => {
            base = format_error(ctx, handle, &err, ctor, &marker, &mut keys);
            if keys.is_empty() && proto_props.is_none() {
                return base;
            }
        }
        ObjectKind::ArrayBuffer { bytes, .. } => {
            let prefix = get_prefix(ctor, &marker, canonical, "");
            braces.0 = format!("{prefix}{{");
            renderer = Renderer::ArrayBuffer(bytes);
        }
        ObjectKind::DataView {
            byte_length,
            byte_offset,
            buffer,
        } => {
            braces.0 = format!("{}{{", get_prefix(ctor, &marker, "DataView", ""));
            renderer = Renderer::DataView {
                byte_length,
                byte_offset,
                buffer: *buffer,
            };
        }
        ObjectKind::Promise => {
            braces.0 = format!("{}{{", get_prefix(ctor, &marker, "Promise", ""));
            renderer = Renderer::Promise;
        }
        ObjectKind::WeakSet | ObjectKind::WeakMap => {
            braces.0 = format!("{}{{", get_prefix(ctor, &marker, canonical, ""));
            renderer = Renderer::Weak;
        }
        ObjectKind::Boxed(boxed) => {
            base = get_boxed_base(ctx, &boxed, ctor, &marker, keys.is_empty());
            if keys.is_empty() && proto_props.is_none() {
                return base;
            }
        }
        ObjectKind::Url(href) => {
            if !ctx.depth_exceeded(recurse_times) {
                base = href;
                if keys.is_empty() && proto_props.is_none() {
                    return base;
                }
            }
        }
    }

    if ctx.depth_exceeded(recurse_times) {
        let style = get_ctx_style(ctor, &marker, canonical);
        let mut name = style[..style.len() - 1].to_string();
        if constructor.is_some() {
            name = format!("[{name}]");
        }
        return ctx.stylize(&name, Role::Special);
    }

    let recurse_times = recurse_times + 1;
    let id = handle.id();
    ctx.seen.push(id);
    ctx.current_depth = recurse_times as i64;

    let mut output = match renderer {
        Renderer::Empty => Vec::new(),
        Renderer::Array(slots) => format_array(ctx, &slots, recurse_times),
        Renderer::TypedArray(data) => format_typed_array(ctx, &data, recurse_times),
        Renderer::Set(items) => format_set(ctx, &items, recurse_times),
        Renderer::Map(entries) => format_map(ctx, &entries, recurse_times),
        Renderer::SetIter => {
            let entries = drain_set_iterator(handle);
            format_set_iter_inner(ctx, recurse_times, &entries)
        }
        Renderer::MapIter => {
            let entries = drain_map_iterator(handle);
            // Mark entry iterators as such.
            if let Some(head) = braces.0.strip_suffix(" Iterator] {") {
                braces.0 = format!("{head} Entries] {{");
            }
            format_map_iter_inner(ctx, recurse_times, &entries)
        }
        Renderer::ArrayBuffer(bytes) => format_array_buffer(ctx, bytes.as_deref()),
        Renderer::DataView {
            byte_length,
            byte_offset,
            buffer,
        } => format_data_view(ctx, byte_length, byte_offset, &buffer, recurse_times),
        Renderer::Promise => vec![ctx.stylize("<state unknown>", Role::Special)],
        Renderer::Weak => vec![ctx.stylize("<items unknown>", Role::Special)],
    };
    for key in &keys {
        output.push(format_property(ctx, handle, recurse_times, key, extras, None));
    }
    if let Some(pp) = proto_props.take() {
        output.extend(pp);
    }

    if let Some(&index) = ctx.circular.get(&id) {
        let reference = ctx.stylize(&format!("<ref *{index}>"), Role::Special);
        // The reference always goes to the very beginning of the output.
        if ctx.compact != Compact::Always {
            base = if base.is_empty() {
                reference
            } else {
                format!("{reference} {base}")
            };
        } else {
            braces.0 = format!("{reference} {}", braces.0);
        }
    }
    ctx.seen.pop();

    match ctx.sorted.clone() {
        Sorted::No => {}
        Sorted::Lexicographic => sort_fragments(&mut output, &keys, extras, |a, b| a.cmp(b)),
        Sorted::By(cmp) => sort_fragments(&mut output, &keys, extras, |a, b| cmp(a, b)),
    }

    let res = reduce_to_single_string(ctx, output, &base, &braces, extras, recurse_times, numeric);

    let budget = ctx.budget.get(&ctx.indentation_lvl).copied().unwrap_or(0);
    let new_length = budget + res.len();
    ctx.budget.insert(ctx.indentation_lvl, new_length);
    // Without this cap the recursion could keep producing output long after
    // any reasonable consumer stopped reading.
    if new_length > BUDGET_LIMIT {
        ctx.depth = Some(-1);
    }
    res
}

enum Renderer {
    Empty,
    Array(Vec<ArraySlot>),
    TypedArray(TypedArrayData),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
    SetIter,
    MapIter,
    ArrayBuffer(Option<Vec<u8>>),
    DataView {
        byte_length: usize,
        byte_offset: usize,
        buffer: Value,
    },
    Promise,
    Weak,
}

fn sort_fragments<F>(output: &mut [String], keys: &[PropertyKey], extras: Extras, cmp: F)
where
    F: Fn(&str, &str) -> std::cmp::Ordering,
{
    if extras == Extras::Object {
        output.sort_by(|a, b| cmp(a, b));
    } else if keys.len() > 1 {
        let start = output.len() - keys.len();
        output[start..].sort_by(|a, b| cmp(a, b));
    }
}

fn get_ctx_style(constructor: Option<&str>, marker: &str, fallback: &str) -> String {
    let fallback = if constructor.is_none() {
        if fallback == marker {
            "Object"
        } else {
            fallback
        }
    } else {
        ""
    };
    get_prefix(constructor, marker, fallback, "")
}

fn get_iterator_braces(ty: &str, marker: &str) -> (String, String) {
    let iterator_tag = format!("{ty} Iterator");
    let tag = if marker == iterator_tag {
        iterator_tag
    } else if marker.is_empty() {
        iterator_tag
    } else {
        format!("{marker}] [{iterator_tag}")
    };
    (format!("[{tag}] {{"), "}".to_string())
}

/// Own keys in render order: string keys first, then symbols, both in
/// insertion order. Non-enumerable keys only appear in hidden mode.
fn get_keys(handle: &ObjectHandle, show_hidden: bool) -> Vec<PropertyKey> {
    let data = handle.borrow();
    let mut strings = Vec::new();
    let mut symbols = Vec::new();
    for (key, slot) in &data.properties {
        if !show_hidden && !slot.enumerable {
            continue;
        }
        match key {
            PropertyKey::Str(_) => strings.push(key.clone()),
            PropertyKey::Symbol(_) => symbols.push(key.clone()),
        }
    }
    strings.extend(symbols);
    strings
}

fn drain_set_iterator(handle: &ObjectHandle) -> Vec<Value> {
    let mut data = handle.borrow_mut();
    if let ObjectKind::SetIterator(items) = &mut data.kind {
        std::mem::take(items)
    } else {
        Vec::new()
    }
}

fn drain_map_iterator(handle: &ObjectHandle) -> Vec<(Value, Value)> {
    let mut data = handle.borrow_mut();
    if let ObjectKind::MapIterator(entries) = &mut data.kind {
        std::mem::take(entries)
    } else {
        Vec::new()
    }
}

/// Extra properties found on up to three explicit prototype layers, rendered
/// dimmed when colors are on. Stops at builtins and null.
fn add_prototype_properties(
    ctx: &mut Context,
    main: &ObjectHandle,
    recurse_times: u32,
    output: &mut Vec<String>,
) {
    let mut obj = main.clone();
    let mut key_set: HashSet<PropertyKey> = HashSet::new();
    let mut prev_keys: Vec<PropertyKey> = Vec::new();
    for depth in 0..3 {
        let next = match obj.borrow().proto.clone() {
            Proto::Object(p) => p,
            // Null and builtin prototypes end the walk.
            _ => return,
        };
        if let Some(name) = constructor_of(&next) {
            if is_builtin_name(&name) {
                return;
            }
        }
        obj = next;
        if depth > 0 {
            key_set.extend(prev_keys.drain(..));
        }
        let entries: Vec<(PropertyKey, PropertySlot)> = obj
            .borrow()
            .properties
            .iter()
            .map(|(k, s)| (k.clone(), s.clone()))
            .collect();
        ctx.seen.push(main.id());
        for (key, slot) in &entries {
            // Skip the constructor, keys the object shadows, and keys
            // already found on closer layers.
            if key.as_str() == Some("constructor")
                || main.borrow().properties.contains_key(key)
                || (depth != 0 && key_set.contains(key))
            {
                continue;
            }
            if let Property::Value(Value::Object(h)) = &slot.property {
                if matches!(h.borrow().kind, ObjectKind::Function(_)) {
                    continue;
                }
            }
            let rendered = format_property(
                ctx,
                &obj,
                recurse_times,
                key,
                Extras::Object,
                Some(slot.clone()),
            );
            if ctx.colors {
                output.push(format!("\u{1b}[2m{rendered}\u{1b}[22m"));
            } else {
                output.push(rendered);
            }
        }
        ctx.seen.pop();
        prev_keys = entries.into_iter().map(|(k, _)| k).collect();
    }
}

fn remaining_text(remaining: u64) -> String {
    format!(
        "... {remaining} more item{}",
        if remaining > 1 { "s" } else { "" }
    )
}

fn format_array_item(ctx: &mut Context, value: &Value, recurse_times: u32) -> String {
    ctx.indentation_lvl += 2;
    let str = format_value(ctx, value, recurse_times);
    ctx.indentation_lvl -= 2;
    str
}

fn format_array(ctx: &mut Context, slots: &[ArraySlot], recurse_times: u32) -> Vec<String> {
    let val_len = array_length(slots);
    let len = (ctx.max_array_length as u64).min(val_len);
    if slots
        .iter()
        .any(|slot| matches!(slot, ArraySlot::Holes(n) if *n > 0))
    {
        return format_special_array(ctx, slots, recurse_times, len, val_len);
    }
    let mut output = Vec::new();
    for slot in slots.iter().take(len as usize) {
        if let ArraySlot::Item(value) = slot {
            output.push(format_array_item(ctx, value, recurse_times));
        }
    }
    let remaining = val_len - len;
    if remaining > 0 {
        output.push(remaining_text(remaining));
    }
    output
}

/// The sparse-array renderer: hole runs collapse into `<N empty items>`
/// markers, indices past the representable maximum are never itemized.
fn format_special_array(
    ctx: &mut Context,
    slots: &[ArraySlot],
    recurse_times: u32,
    max_length: u64,
    total_len: u64,
) -> Vec<String> {
    let mut output: Vec<String> = Vec::new();
    let mut index: u64 = 0;
    let mut pending: u64 = 0;
    'slots: for slot in slots {
        if output.len() as u64 >= max_length {
            break;
        }
        match slot {
            ArraySlot::Holes(n) => pending += n,
            ArraySlot::Item(value) => {
                let item_index = index + pending;
                if item_index > MAX_ARRAY_INDEX {
                    break 'slots;
                }
                if pending > 0 {
                    let ending = if pending > 1 { "s" } else { "" };
                    output.push(
                        ctx.stylize(&format!("<{pending} empty item{ending}>"), Role::Undefined),
                    );
                    index = item_index;
                    pending = 0;
                    if output.len() as u64 == max_length {
                        break 'slots;
                    }
                }
                output.push(format_array_item(ctx, value, recurse_times));
                index += 1;
            }
        }
    }
    let remaining = total_len - index;
    if (output.len() as u64) != max_length {
        if remaining > 0 {
            let ending = if remaining > 1 { "s" } else { "" };
            output.push(ctx.stylize(&format!("<{remaining} empty item{ending}>"), Role::Undefined));
        }
    } else if remaining > 0 {
        output.push(remaining_text(remaining));
    }
    output
}

fn format_typed_array(ctx: &mut Context, data: &TypedArrayData, recurse_times: u32) -> Vec<String> {
    let length = data.elements.len();
    let max_length = ctx.max_array_length.min(length);
    let remaining = (length - max_length) as u64;
    let mut output = Vec::with_capacity(max_length);
    match &data.elements {
        TypedElements::Numbers(values) => {
            for n in &values[..max_length] {
                output.push(format_number_with(&ctx.styler, *n, ctx.numeric_separator));
            }
        }
        TypedElements::BigInts(values) => {
            for b in &values[..max_length] {
                output.push(format_bigint_with(&ctx.styler, b, ctx.numeric_separator));
            }
        }
    }
    if remaining > 0 {
        output.push(remaining_text(remaining));
    }
    if ctx.show_hidden {
        // The buffer goes last, it's not a primitive like the others.
        ctx.indentation_lvl += 2;
        let styler = ctx.styler.clone();
        let sep = ctx.numeric_separator;
        output.push(format!(
            "[BYTES_PER_ELEMENT]: {}",
            format_number_with(&styler, data.kind.bytes_per_element() as f64, sep)
        ));
        output.push(format!(
            "[length]: {}",
            format_number_with(&styler, length as f64, sep)
        ));
        output.push(format!(
            "[byteLength]: {}",
            format_number_with(&styler, data.byte_length() as f64, sep)
        ));
        output.push(format!(
            "[byteOffset]: {}",
            format_number_with(&styler, 0.0, sep)
        ));
        if let Some(buffer) = &data.buffer {
            output.push(format!(
                "[buffer]: {}",
                format_value(ctx, buffer, recurse_times)
            ));
        }
        ctx.indentation_lvl -= 2;
    }
    output
}

fn format_set(ctx: &mut Context, items: &[Value], recurse_times: u32) -> Vec<String> {
    let max_length = ctx.max_array_length.min(items.len());
    let remaining = (items.len() - max_length) as u64;
    let mut output = Vec::new();
    ctx.indentation_lvl += 2;
    for value in &items[..max_length] {
        output.push(format_value(ctx, value, recurse_times));
    }
    if remaining > 0 {
        output.push(remaining_text(remaining));
    }
    ctx.indentation_lvl -= 2;
    output
}

fn format_map(ctx: &mut Context, entries: &[(Value, Value)], recurse_times: u32) -> Vec<String> {
    let max_length = ctx.max_array_length.min(entries.len());
    let remaining = (entries.len() - max_length) as u64;
    let mut output = Vec::new();
    ctx.indentation_lvl += 2;
    for (key, value) in &entries[..max_length] {
        output.push(format!(
            "{} => {}",
            format_value(ctx, key, recurse_times),
            format_value(ctx, value, recurse_times)
        ));
    }
    if remaining > 0 {
        output.push(remaining_text(remaining));
    }
    ctx.indentation_lvl -= 2;
    output
}

fn format_set_iter_inner(ctx: &mut Context, recurse_times: u32, entries: &[Value]) -> Vec<String> {
    let max_length = ctx.max_array_length.min(entries.len());
    let mut output = Vec::with_capacity(max_length);
    ctx.indentation_lvl += 2;
    for value in &entries[..max_length] {
        output.push(format_value(ctx, value, recurse_times));
    }
    ctx.indentation_lvl -= 2;
    let remaining = (entries.len() - max_length) as u64;
    if remaining > 0 {
        output.push(remaining_text(remaining));
    }
    output
}

fn format_map_iter_inner(
    ctx: &mut Context,
    recurse_times: u32,
    entries: &[(Value, Value)],
) -> Vec<String> {
    let max_length = ctx.max_array_length.min(entries.len());
    let remaining = (entries.len() - max_length) as u64;
    let mut output = Vec::with_capacity(max_length);
    ctx.indentation_lvl += 2;
    let brackets = ("[".to_string(), "]".to_string());
    for (key, value) in &entries[..max_length] {
        let pair = vec![
            format_value(ctx, key, recurse_times),
            format_value(ctx, value, recurse_times),
        ];
        output.push(reduce_to_single_string(
            ctx,
            pair,
            "",
            &brackets,
            Extras::ArrayLike,
            recurse_times,
            false,
        ));
    }
    ctx.indentation_lvl -= 2;
    if remaining > 0 {
        output.push(remaining_text(remaining));
    }
    output
}

fn format_array_buffer(ctx: &Context, bytes: Option<&[u8]>) -> Vec<String> {
    let mut output = match bytes {
        None => vec![ctx.stylize("(detached)", Role::Special)],
        Some(buffer) => {
            let shown = &buffer[..ctx.max_array_length.min(buffer.len())];
            let mut contents = shown
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect::<Vec<_>>()
                .join(" ");
            let remaining = buffer.len().saturating_sub(ctx.max_array_length);
            if remaining > 0 {
                contents += &format!(
                    " ... {remaining} more byte{}",
                    if remaining > 1 { "s" } else { "" }
                );
            }
            vec![format!(
                "{}: <{contents}>",
                ctx.stylize("[Uint8Contents]", Role::Special)
            )]
        }
    };
    let byte_length = bytes.map_or(0, <[u8]>::len);
    output.push(format!(
        "byteLength: {}",
        format_number_with(&ctx.styler, byte_length as f64, ctx.numeric_separator)
    ));
    output
}

fn format_data_view(
    ctx: &mut Context,
    byte_length: usize,
    byte_offset: usize,
    buffer: &Value,
    recurse_times: u32,
) -> Vec<String> {
    ctx.indentation_lvl += 2;
    let styler = ctx.styler.clone();
    let sep = ctx.numeric_separator;
    let output = vec![
        format!(
            "byteLength: {}",
            format_number_with(&styler, byte_length as f64, sep)
        ),
        format!(
            "byteOffset: {}",
            format_number_with(&styler, byte_offset as f64, sep)
        ),
        format!("buffer: {}", format_value(ctx, buffer, recurse_times)),
    ];
    ctx.indentation_lvl -= 2;
    output
}

fn is_identifier_like(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn format_property(
    ctx: &mut Context,
    owner: &ObjectHandle,
    recurse_times: u32,
    key: &PropertyKey,
    etype: Extras,
    desc_override: Option<PropertySlot>,
) -> String {
    let slot = desc_override.or_else(|| owner.borrow().properties.get(key).cloned());
    let (property, enumerable) = match slot {
        Some(slot) => (slot.property, slot.enumerable),
        None => (Property::Value(Value::Undefined), true),
    };

    let mut extra = " ".to_string();
    let str = match &property {
        Property::Value(value) => {
            let diff = if ctx.compact == Compact::Always && etype == Extras::Object {
                3
            } else {
                2
            };
            ctx.indentation_lvl += diff;
            let str = format_value(ctx, value, recurse_times);
            if diff == 3 && ctx.break_length < string_width(&str) {
                extra = format!("\n{}", " ".repeat(ctx.indentation_lvl));
            }
            ctx.indentation_lvl -= diff;
            str
        }
        Property::Getter(get) | Property::GetterSetter(get) => {
            let has_setter = matches!(property, Property::GetterSetter(_));
            let label = if has_setter { "Getter/Setter" } else { "Getter" };
            let allowed = match ctx.getters {
                Getters::No => false,
                Getters::All => true,
                Getters::GetOnly => !has_setter,
                Getters::SetOnly => has_setter,
            };
            if allowed {
                let open = ctx.stylize(&format!("[{label}:"), Role::Special);
                let close = ctx.stylize("]", Role::Special);
                match get() {
                    Ok(tmp) => {
                        ctx.indentation_lvl += 2;
                        let str = if tmp.is_null() {
                            format!("{open} {}{close}", ctx.stylize("null", Role::Null))
                        } else if tmp.is_object() {
                            format!(
                                "{} {}",
                                ctx.stylize(&format!("[{label}]"), Role::Special),
                                format_value(ctx, &tmp, recurse_times)
                            )
                        } else {
                            let primitive = format_primitive(&ctx.styler.clone(), &tmp, ctx);
                            format!("{open} {primitive}{close}")
                        };
                        ctx.indentation_lvl -= 2;
                        str
                    }
                    Err(message) => {
                        format!("{open} <Inspection threw ({message})>{close}")
                    }
                }
            } else {
                ctx.stylize(&format!("[{label}]"), Role::Special)
            }
        }
        Property::Setter => ctx.stylize("[Setter]", Role::Special),
    };
    if etype == Extras::ArrayLike {
        return str;
    }

    let name = match key {
        PropertyKey::Symbol(desc) => format!(
            "[{}]",
            ctx.stylize(
                &crate::escape::escape_control(&format!("Symbol({desc})")),
                Role::Symbol,
            )
        ),
        PropertyKey::Str(k) if k == "__proto__" => "['__proto__']".to_string(),
        PropertyKey::Str(k) if !enumerable => {
            format!("[{}]", crate::escape::escape_control(k))
        }
        PropertyKey::Str(k) if is_identifier_like(k) => ctx.stylize(k, Role::Name),
        PropertyKey::Str(k) => ctx.stylize(&quote_string(k), Role::String),
    };
    format!("{name}:{extra}{str}")
}

fn get_boxed_base(
    ctx: &Context,
    boxed: &crate::value::BoxedValue,
    ctor: Option<&str>,
    marker: &str,
    keys_empty: bool,
) -> String {
    let type_name = boxed.type_name();
    let mut base = format!("[{type_name}");
    if Some(type_name) != ctor {
        match ctor {
            None => base += " (null prototype)",
            Some(c) => base += &format!(" ({c})"),
        }
    }
    let inner = format_primitive(&Styler::Plain, &boxed.unbox(), ctx);
    base += &format!(": {inner}]");
    if !marker.is_empty() && Some(marker) != ctor {
        base += &format!(" [{marker}]");
    }
    if !keys_empty || ctx.styler.is_plain() {
        return base;
    }
    let role = match boxed {
        crate::value::BoxedValue::Number(_) => Role::Number,
        crate::value::BoxedValue::String(_) => Role::String,
        crate::value::BoxedValue::Bool(_) => Role::Boolean,
        crate::value::BoxedValue::BigInt(_) => Role::BigInt,
        crate::value::BoxedValue::Symbol(_) => Role::Symbol,
    };
    ctx.stylize(&base, role)
}

fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '/' {
            match chars.peek() {
                Some('/') => {
                    for n in chars.by_ref() {
                        if n == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                    continue;
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\u{0}';
                    for n in chars.by_ref() {
                        if prev == '*' && n == '/' {
                            break;
                        }
                        prev = n;
                    }
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }
    out
}

fn looks_like_class(source: &str) -> bool {
    let mut chars = source.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => {}
        _ => return false,
    }
    for c in chars {
        match c {
            '{' => return true,
            '(' => return false,
            _ => {}
        }
    }
    false
}

fn get_class_base(
    handle: &ObjectHandle,
    func: &FunctionData,
    ctor: Option<&str>,
    marker: &str,
) -> String {
    let name = if func.name.is_empty() {
        "(anonymous)"
    } else {
        func.name.as_str()
    };
    let mut base = format!("class {name}");
    if let Some(c) = ctor {
        if c != "Function" {
            base += &format!(" [{c}]");
        }
    }
    if !marker.is_empty() && ctor != Some(marker) {
        base += &format!(" [{marker}]");
    }
    if ctor.is_some() {
        if let Proto::Object(p) = &handle.borrow().proto {
            if let ObjectKind::Function(superclass) = &p.borrow().kind {
                if !superclass.name.is_empty() {
                    base += &format!(" extends {}", superclass.name);
                }
            }
        }
    } else {
        base += " extends [null prototype]";
    }
    format!("[{base}]")
}

fn get_function_base(
    handle: &ObjectHandle,
    func: &FunctionData,
    ctor: Option<&str>,
    marker: &str,
) -> String {
    if let Some(source) = &func.source {
        if source.starts_with("class") && source.ends_with('}') {
            let slice = &source[5..source.len() - 1];
            if let Some(bracket) = slice.find('{') {
                if !slice[..bracket].contains('(') || looks_like_class(&strip_comments(slice)) {
                    return get_class_base(handle, func, ctor, marker);
                }
            }
        }
    }
    let mut ty = String::from("Function");
    if func.is_generator {
        ty = format!("Generator{ty}");
    }
    if func.is_async {
        ty = format!("Async{ty}");
    }
    let mut base = format!("[{ty}");
    if ctor.is_none() {
        base += " (null prototype)";
    }
    if func.name.is_empty() {
        base += " (anonymous)";
    } else {
        base += &format!(": {}", func.name);
    }
    base += "]";
    if let Some(c) = ctor {
        if c != ty {
            base += &format!(" {c}");
        }
    }
    if !marker.is_empty() && ctor != Some(marker) {
        base += &format!(" [{marker}]");
    }
    base
}

// ---------------------------------------------------------------------------
// Errors

fn get_stack_string(err: &ErrorData) -> String {
    if let Some(stack) = &err.stack {
        return stack.clone();
    }
    let name = if err.name.is_empty() {
        "Error"
    } else {
        err.name.as_str()
    };
    if err.message.is_empty() {
        name.to_string()
    } else {
        format!("{name}: {}", err.message)
    }
}

/// Suppresses `name`, `message`, and `stack` own properties when they are
/// plain strings already reflected in the stack text.
fn remove_duplicate_error_keys(
    ctx: &Context,
    keys: &mut Vec<PropertyKey>,
    handle: &ObjectHandle,
    stack: &str,
) {
    if ctx.show_hidden || keys.is_empty() {
        return;
    }
    for name in ["name", "message", "stack"] {
        if let Some(index) = keys.iter().position(|k| k.as_str() == Some(name)) {
            let remove = match handle.get(name) {
                Some(Value::String(s)) => stack.contains(&s),
                _ => true,
            };
            if remove {
                keys.remove(index);
            }
        }
    }
}

fn extract_error_prefix(stack: &str) -> Option<String> {
    let mut chars = stack.char_indices();
    if let Some((_, first)) = chars.next() {
        if first.is_ascii_uppercase() {
            let mut end = None;
            for (i, c) in chars {
                let in_class = c.is_ascii_alphanumeric()
                    || matches!(c, '_' | ' ' | '[' | ']' | '(' | ')' | '-');
                if !in_class {
                    end = Some(i);
                    break;
                }
            }
            if let Some(i) = end {
                if i >= 2 && (stack[i..].starts_with(':') || stack[i..].starts_with("\n    at")) {
                    return Some(stack[..i].to_string());
                }
            }
        }
    }
    // A bare error name with nothing else behind it.
    if stack.ends_with("Error")
        && stack
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Some(stack.to_string());
    }
    None
}

/// Rewrites the head of a stack so non-default constructors, markers, and
/// null prototypes are visible. Only "regular looking" stacks are touched.
fn improve_stack(mut stack: String, ctor: Option<&str>, name: &str, marker: &str) -> String {
    let mut len = name.len();
    let looks_normal = name.ends_with("Error")
        && stack.starts_with(name)
        && (stack.len() == len || stack[len..].starts_with(':') || stack[len..].starts_with('\n'));
    if ctor.is_none() || looks_normal {
        let mut fallback = String::from("Error");
        if ctor.is_none() {
            fallback = extract_error_prefix(&stack).unwrap_or_default();
            len = fallback.len();
            if fallback.is_empty() {
                fallback = String::from("Error");
            }
        }
        let prefix_full = get_prefix(ctor, marker, &fallback, "");
        let prefix = &prefix_full[..prefix_full.len() - 1];
        if name != prefix {
            let tail = &stack[len.min(stack.len())..];
            if prefix.contains(name) {
                if len == 0 {
                    stack = format!("{prefix}: {stack}");
                } else {
                    stack = format!("{prefix}{tail}");
                }
            } else {
                stack = format!("{prefix} [{name}]{tail}");
            }
        }
    }
    stack
}

/// Finds the first run of more than three consecutive entries of `a` that
/// also appear consecutively in `b`.
fn identical_sequence_range(a: &[String], b: &[&str]) -> (usize, usize) {
    if a.len() > 3 {
        for i in 0..a.len() - 3 {
            if let Some(pos) = b.iter().position(|frame| *frame == a[i]) {
                let rest = b.len() - pos;
                if rest > 3 {
                    let max_len = (a.len() - i).min(rest);
                    let mut len = 1;
                    while max_len > len && a[i + len] == b[pos + len] {
                        len += 1;
                    }
                    if len > 3 {
                        return (len, i);
                    }
                }
            }
        }
    }
    (0, 0)
}

/// Splits a stack's frame section into lines, collapsing frames shared with
/// the cause's stack into a single counting line.
fn get_stack_frames(ctx: &Context, handle: &ObjectHandle, stack: &str) -> Vec<String> {
    let mut frames: Vec<String> = stack.split('\n').map(String::from).collect();

    let cause_prop = {
        let data = handle.borrow();
        data.properties
            .get(&PropertyKey::Str("cause".to_string()))
            .map(|slot| slot.property.clone())
    };
    let cause = match cause_prop {
        Some(Property::Value(v)) => Some(v),
        // A throwing cause getter is ignored.
        Some(Property::Getter(get)) | Some(Property::GetterSetter(get)) => get().ok(),
        _ => None,
    };

    if let Some(Value::Object(cause_handle)) = cause {
        if let ObjectKind::Error(cause_err) = &cause_handle.borrow().kind {
            let cause_stack = get_stack_string(cause_err);
            if let Some(start) = cause_stack.find("\n    at") {
                let cause_frames: Vec<&str> = cause_stack[start + 1..].split('\n').collect();
                let (len, offset) = identical_sequence_range(&frames, &cause_frames);
                if len > 0 {
                    let skipped = len - 2;
                    let msg = format!("    ... {skipped} lines matching cause stack trace ...");
                    let styled = ctx.stylize(&msg, Role::Undefined);
                    frames.splice(offset + 1..offset + 1 + skipped, [styled]);
                }
            }
        }
    }
    frames
}

fn format_error(
    ctx: &mut Context,
    handle: &ObjectHandle,
    err: &ErrorData,
    ctor: Option<&str>,
    marker: &str,
    keys: &mut Vec<PropertyKey>,
) -> String {
    let name = if err.name.is_empty() {
        "Error".to_string()
    } else {
        err.name.clone()
    };
    let mut stack = get_stack_string(err);

    remove_duplicate_error_keys(ctx, keys, handle, &stack);

    let has_own = |key: &str| {
        handle
            .borrow()
            .properties
            .contains_key(&PropertyKey::Str(key.to_string()))
    };
    if has_own("cause") && !keys.iter().any(|k| k.as_str() == Some("cause")) {
        keys.push(PropertyKey::Str("cause".to_string()));
    }
    // Surface errors aggregated under an `errors` array.
    let errors_is_array = matches!(
        handle.get("errors"),
        Some(Value::Object(h)) if matches!(h.borrow().kind, ObjectKind::Array(_))
    );
    if errors_is_array && !keys.iter().any(|k| k.as_str() == Some("errors")) {
        keys.push(PropertyKey::Str("errors".to_string()));
    }

    stack = improve_stack(stack, ctor, &name, marker);

    // Ignore the message portion when looking for the first frame.
    let pos = if !err.message.is_empty() {
        stack
            .find(&err.message)
            .map_or(0, |p| p + err.message.len())
    } else {
        0
    };
    match stack[pos..].find("\n    at") {
        // No stack trace at all: wrap the header in brackets.
        None => stack = format!("[{stack}]"),
        Some(rel) => {
            let stack_start = pos + rel;
            let head = stack[..stack_start].to_string();
            let frame_part = &stack[stack_start + 1..];
            let lines = get_stack_frames(ctx, handle, frame_part);
            stack = format!("{head}\n{}", lines.join("\n"));
        }
    }
    // The message and the frames have to be indented as well.
    if ctx.indentation_lvl != 0 {
        let indentation = format!("\n{}", " ".repeat(ctx.indentation_lvl));
        stack = stack.replace('\n', &indentation);
    }
    stack
}

// ---------------------------------------------------------------------------
// Primitives

pub(crate) fn js_number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == n.trunc() && n.abs() < 1e21 {
        return format!("{}", n as i128);
    }
    // Magnitudes of 1e21 and above, or below 1e-6, use exponent form with
    // an explicit sign on non-negative exponents.
    if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let s = format!("{n:e}");
        if let Some(pos) = s.find('e') {
            if !s[pos + 1..].starts_with('-') {
                return format!("{}e+{}", &s[..pos], &s[pos + 1..]);
            }
        }
        return s;
    }
    format!("{n}")
}

fn add_numeric_separator(s: &str) -> String {
    let mut result = String::new();
    let mut i = s.len();
    let start = if s.starts_with('-') { 1 } else { 0 };
    while i >= start + 4 {
        result = format!("_{}{}", &s[i - 3..i], result);
        i -= 3;
    }
    if i == s.len() {
        s.to_string()
    } else {
        format!("{}{}", &s[..i], result)
    }
}

fn add_numeric_separator_end(s: &str) -> String {
    let mut result = String::new();
    let mut i = 0;
    while i + 3 < s.len() {
        result += &s[i..i + 3];
        result.push('_');
        i += 3;
    }
    if i == 0 {
        s.to_string()
    } else {
        format!("{}{}", result, &s[i..])
    }
}

pub(crate) fn format_number_with(styler: &Styler, n: f64, numeric_separator: bool) -> String {
    if !numeric_separator {
        // A plain comparison can't tell 0 from -0.
        if n == 0.0 && n.is_sign_negative() {
            return styler.apply("-0", Role::Number);
        }
        return styler.apply(&js_number_to_string(n), Role::Number);
    }
    let string = js_number_to_string(n);
    if !n.is_finite() || string.contains('e') {
        return styler.apply(&string, Role::Number);
    }
    match string.find('.') {
        None => styler.apply(&add_numeric_separator(&string), Role::Number),
        Some(dot) => styler.apply(
            &format!(
                "{}.{}",
                add_numeric_separator(&string[..dot]),
                add_numeric_separator_end(&string[dot + 1..])
            ),
            Role::Number,
        ),
    }
}

pub(crate) fn format_bigint_with(styler: &Styler, b: &BigInt, numeric_separator: bool) -> String {
    let string = b.to_string();
    if !numeric_separator {
        return styler.apply(&format!("{string}n"), Role::BigInt);
    }
    styler.apply(&format!("{}n", add_numeric_separator(&string)), Role::BigInt)
}

pub(crate) fn format_primitive(styler: &Styler, value: &Value, ctx: &Context) -> String {
    match value {
        Value::String(s) => {
            let char_len = s.chars().count();
            let truncated;
            let (text, trailer) = if char_len > ctx.max_string_length {
                let remaining = char_len - ctx.max_string_length;
                truncated = s.chars().take(ctx.max_string_length).collect::<String>();
                (
                    truncated.as_str(),
                    format!(
                        "... {remaining} more character{}",
                        if remaining > 1 { "s" } else { "" }
                    ),
                )
            } else {
                (s.as_str(), String::new())
            };
            let text_len = text.chars().count();
            if ctx.compact != Compact::Always
                && text_len > MIN_LINE_LENGTH
                && text_len > ctx.break_length.saturating_sub(ctx.indentation_lvl + 4)
            {
                let joiner = format!(" +\n{}", " ".repeat(ctx.indentation_lvl + 2));
                let joined = text
                    .split_inclusive('\n')
                    .map(|line| styler.apply(&quote_string(line), Role::String))
                    .collect::<Vec<_>>()
                    .join(&joiner);
                return joined + &trailer;
            }
            styler.apply(&quote_string(text), Role::String) + &trailer
        }
        Value::Number(n) => format_number_with(styler, *n, ctx.numeric_separator),
        Value::BigInt(b) => format_bigint_with(styler, b, ctx.numeric_separator),
        Value::Bool(b) => styler.apply(if *b { "true" } else { "false" }, Role::Boolean),
        Value::Undefined => styler.apply("undefined", Role::Undefined),
        Value::Symbol(sym) => styler.apply(&sym.display_text(), Role::Symbol),
        Value::Null => styler.apply("null", Role::Null),
        Value::Object(_) => String::new(),
    }
}
