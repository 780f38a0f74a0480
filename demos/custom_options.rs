//! Tuning inspection output with InspectOptions.
//!
//! Run with: cargo run --example custom_options

use ocular::{inspect_with_options, value, Compact, InspectOptions, Sorted};

fn main() {
    let data = value!({
        "zulu": 26,
        "alpha": 1,
        "payload": { "deep": { "deeper": { "deepest": true } } },
        "items": [10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
    });

    // Defaults: depth 2, 80-column lines, up to 100 array entries
    println!("Defaults:\n{}\n", inspect_with_options(&data, &InspectOptions::new()));

    // Shallow preview with truncated arrays
    let shallow = InspectOptions::new()
        .with_depth(Some(1))
        .with_max_array_length(Some(3));
    println!("Shallow:\n{}\n", inspect_with_options(&data, &shallow));

    // Sorted keys, everything packed as tightly as possible
    let tight = InspectOptions::new()
        .with_sorted(Sorted::Lexicographic)
        .with_compact(Compact::Always)
        .with_break_length(usize::MAX);
    println!("Tight:\n{}\n", inspect_with_options(&data, &tight));

    // ANSI-colored output with digit grouping
    let pretty = InspectOptions::new()
        .with_colors(true)
        .with_numeric_separator(true);
    let big = value!({ "population": 8100000000u64 });
    println!("Colored:\n{}", inspect_with_options(&big, &pretty));
}
