//! Configuration options for inspection.
//!
//! This module provides [`InspectOptions`], the knobs controlling how much of
//! a value graph is rendered and how it is laid out:
//!
//! - [`Compact`]: single-line eligibility for the innermost levels
//! - [`Sorted`]: property ordering
//! - [`Getters`]: whether accessor properties are invoked
//!
//! ## Examples
//!
//! ```rust
//! use ocular::{inspect_with_options, InspectOptions, Value};
//!
//! let value = Value::object([("inner", Value::object([("deep", Value::from(1))]))]);
//! let options = InspectOptions::new().with_depth(Some(0));
//! assert_eq!(inspect_with_options(&value, &options), "{ inner: [Object] }");
//! ```

use std::cmp::Ordering;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::style::Role;
use crate::value::Value;

/// How aggressively output is packed onto single lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Compact {
    /// Pack every node that fits the break length onto one line.
    Always,
    /// Only the given number of innermost levels may collapse to one line;
    /// `Limit(0)` disables single-line output entirely.
    Limit(u32),
}

/// Property ordering applied to rendered fragments.
#[derive(Clone)]
pub enum Sorted {
    /// Insertion order.
    No,
    /// Lexicographic by rendered fragment.
    Lexicographic,
    /// A caller-supplied comparator over rendered fragments.
    By(Rc<dyn Fn(&str, &str) -> Ordering>),
}

/// Whether accessor properties are invoked during inspection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Getters {
    /// Never invoke; render `[Getter]` markers.
    No,
    /// Invoke every accessor.
    All,
    /// Invoke only accessors without a corresponding setter.
    GetOnly,
    /// Invoke only accessors with a corresponding setter.
    SetOnly,
}

/// A styling override: receives the fragment text and its role.
pub type StylizeFn = dyn Fn(&str, Role) -> String;

/// Options controlling depth, size, width, and presentation.
///
/// The defaults favor terse terminal output: two levels of nesting, one
/// hundred array entries, eighty columns.
#[derive(Clone)]
pub struct InspectOptions {
    /// Recursion depth for composite values; `None` is unlimited.
    pub depth: Option<i64>,
    /// Emit ANSI color codes.
    pub colors: bool,
    /// Include non-enumerable properties, symbol keys, and prototype
    /// properties.
    pub show_hidden: bool,
    /// Consult custom inspect hooks.
    pub custom_inspect: bool,
    /// Accepted for compatibility; proxies are not representable, so this
    /// has no effect.
    pub show_proxy: bool,
    /// Entries shown per array-like before truncation; `None` is unlimited.
    pub max_array_length: Option<usize>,
    /// Characters shown per string before truncation; `None` is unlimited.
    pub max_string_length: Option<usize>,
    /// Column budget for single-line layout.
    pub break_length: usize,
    pub compact: Compact,
    pub sorted: Sorted,
    pub getters: Getters,
    /// Group digits with `_` separators.
    pub numeric_separator: bool,
    /// Overrides the built-in role styling.
    pub stylize: Option<Rc<StylizeFn>>,
    /// Passed through to custom inspect hooks unvalidated.
    pub extra: IndexMap<String, Value>,
}

impl InspectOptions {
    pub fn new() -> Self {
        InspectOptions {
            depth: Some(2),
            colors: false,
            show_hidden: false,
            custom_inspect: true,
            show_proxy: false,
            max_array_length: Some(100),
            max_string_length: Some(10_000),
            break_length: 80,
            compact: Compact::Limit(3),
            sorted: Sorted::No,
            getters: Getters::No,
            numeric_separator: false,
            stylize: None,
            extra: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: Option<i64>) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    #[must_use]
    pub fn with_custom_inspect(mut self, custom_inspect: bool) -> Self {
        self.custom_inspect = custom_inspect;
        self
    }

    #[must_use]
    pub fn with_show_proxy(mut self, show_proxy: bool) -> Self {
        self.show_proxy = show_proxy;
        self
    }

    #[must_use]
    pub fn with_max_array_length(mut self, max: Option<usize>) -> Self {
        self.max_array_length = max;
        self
    }

    #[must_use]
    pub fn with_max_string_length(mut self, max: Option<usize>) -> Self {
        self.max_string_length = max;
        self
    }

    #[must_use]
    pub fn with_break_length(mut self, break_length: usize) -> Self {
        self.break_length = break_length;
        self
    }

    #[must_use]
    pub fn with_compact(mut self, compact: Compact) -> Self {
        self.compact = compact;
        self
    }

    #[must_use]
    pub fn with_sorted(mut self, sorted: Sorted) -> Self {
        self.sorted = sorted;
        self
    }

    #[must_use]
    pub fn with_getters(mut self, getters: Getters) -> Self {
        self.getters = getters;
        self
    }

    #[must_use]
    pub fn with_numeric_separator(mut self, numeric_separator: bool) -> Self {
        self.numeric_separator = numeric_separator;
        self
    }

    #[must_use]
    pub fn with_stylize(mut self, stylize: Rc<StylizeFn>) -> Self {
        self.stylize = Some(stylize);
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = InspectOptions::default();
        assert_eq!(options.depth, Some(2));
        assert_eq!(options.max_array_length, Some(100));
        assert_eq!(options.max_string_length, Some(10_000));
        assert_eq!(options.break_length, 80);
        assert_eq!(options.compact, Compact::Limit(3));
        assert!(!options.colors);
        assert!(options.custom_inspect);
        assert_eq!(options.getters, Getters::No);
    }

    #[test]
    fn test_builder_chain() {
        let options = InspectOptions::new()
            .with_depth(None)
            .with_colors(true)
            .with_break_length(120)
            .with_compact(Compact::Always)
            .with_numeric_separator(true);
        assert_eq!(options.depth, None);
        assert!(options.colors);
        assert_eq!(options.break_length, 120);
        assert_eq!(options.compact, Compact::Always);
        assert!(options.numeric_separator);
    }
}
