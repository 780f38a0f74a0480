//! Layout of rendered fragments: single-line packing, column grouping for
//! array-like output, and the multi-line fallback.
//!
//! Everything here measures visible columns, so color codes are discounted
//! before any width comparison.

use crate::formatter::{Context, Extras};
use crate::style::remove_colors;
use crate::width::string_width;

const SEPARATOR_SPACE: usize = 2; // one space plus one comma

/// True when every fragment fits on one line within the break length and the
/// base text has no embedded line breaks.
pub(crate) fn is_below_break_length(
    ctx: &Context,
    output: &[String],
    start: usize,
    base: &str,
) -> bool {
    // Each entry is separated by at least a comma, so the total starts at
    // the entry count.
    let mut total_length = output.len() + start;
    if total_length + output.len() > ctx.break_length {
        return false;
    }
    for entry in output {
        total_length += if ctx.colors {
            remove_colors(entry).chars().count()
        } else {
            entry.chars().count()
        };
        if total_length > ctx.break_length {
            return false;
        }
    }
    base.is_empty() || !base.contains('\n')
}

fn pad_start(s: &str, target: usize) -> String {
    let len = s.chars().count();
    if len >= target {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(target - len), s)
    }
}

fn pad_end(s: &str, target: usize) -> String {
    let len = s.chars().count();
    if len >= target {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(target - len))
    }
}

/// Rearranges short array fragments into aligned columns. Numeric content is
/// right-aligned, everything else left-aligned. Returns the input unchanged
/// when grouping would not improve readability.
pub(crate) fn group_array_elements(
    ctx: &Context,
    output: Vec<String>,
    numeric: bool,
) -> Vec<String> {
    let mut output_length = output.len();
    if ctx.max_array_length < output.len() {
        // Keep the "... n more items" entry out of the math.
        output_length -= 1;
    }
    let mut total_length = 0usize;
    let mut max_length = 0usize;
    let mut data_len = Vec::with_capacity(output_length);
    for entry in output.iter().take(output_length) {
        let len = string_width(entry);
        data_len.push(len);
        total_length += len + SEPARATOR_SPACE;
        if len > max_length {
            max_length = len;
        }
    }
    // Account for the separator between entries.
    let actual_max = max_length + SEPARATOR_SPACE;
    // Only group when at least three entries fit side by side and no single
    // entry dominates a fifth of the combined width.
    if actual_max * 3 + ctx.indentation_lvl < ctx.break_length
        && (total_length as f64 / actual_max as f64 > 5.0 || max_length <= 6)
    {
        let approx_char_heights = 2.5;
        let average_bias = ((actual_max as f64) - total_length as f64 / output.len() as f64).sqrt();
        let biased_max = ((actual_max as f64) - 3.0 - average_bias).max(1.0);
        // Aim for a square: characters are roughly 2.5 times as tall as they
        // are wide, so solve the area formula for the column count.
        let columns_by_area =
            ((approx_char_heights * biased_max * output_length as f64).sqrt() / biased_max).round();
        let columns_by_width =
            ((ctx.break_length - ctx.indentation_lvl) as f64 / actual_max as f64).floor();
        let compact_limit = match ctx.compact {
            crate::options::Compact::Limit(n) => (n as f64) * 4.0,
            crate::options::Compact::Always => f64::INFINITY,
        };
        let columns = columns_by_area
            .min(columns_by_width)
            .min(compact_limit)
            .min(15.0) as usize;
        if columns <= 1 {
            return output;
        }
        let mut max_line_length = Vec::with_capacity(columns);
        for i in 0..columns {
            let mut line_max = 0usize;
            let mut j = i;
            while j < output_length {
                if data_len[j] > line_max {
                    line_max = data_len[j];
                }
                j += columns;
            }
            max_line_length.push(line_max + SEPARATOR_SPACE);
        }
        let mut tmp = Vec::new();
        let mut i = 0;
        while i < output_length {
            let max = (i + columns).min(output_length);
            let mut line = String::new();
            for j in i..max - 1 {
                // Padding targets include the color-code overhead of each
                // entry, which the measured width excludes.
                let padding = max_line_length[j - i] + output[j].chars().count() - data_len[j];
                let cell = format!("{}, ", output[j]);
                line += &if numeric {
                    pad_start(&cell, padding)
                } else {
                    pad_end(&cell, padding)
                };
            }
            let j = max - 1;
            if numeric {
                let padding =
                    max_line_length[j - i] + output[j].chars().count()
                        - data_len[j]
                        - SEPARATOR_SPACE;
                line += &pad_start(&output[j], padding);
            } else {
                line += &output[j];
            }
            tmp.push(line);
            i += columns;
        }
        if ctx.max_array_length < output.len() {
            tmp.push(output[output_length].clone());
        }
        return tmp;
    }
    output
}

/// Combines fragments, base text, and braces into the final rendering of one
/// node: a single packed line when permitted, otherwise one entry per line.
pub(crate) fn reduce_to_single_string(
    ctx: &Context,
    mut output: Vec<String>,
    base: &str,
    braces: &(String, String),
    extras: Extras,
    recurse_times: u32,
    numeric: bool,
) -> String {
    match ctx.compact {
        crate::options::Compact::Limit(limit) => {
            if limit >= 1 {
                let entries = output.len();
                if extras == Extras::ArrayLike && entries > 6 {
                    output = group_array_elements(ctx, output, numeric);
                }
                // `current_depth` tracks the innermost depth of the part just
                // inspected; only that many levels above it may collapse.
                if ctx.current_depth - (recurse_times as i64) < limit as i64
                    && entries == output.len()
                {
                    // The constant keeps single-line output visually clear of
                    // the other factors reducing the break length.
                    let start =
                        output.len() + ctx.indentation_lvl + braces.0.len() + base.len() + 10;
                    if is_below_break_length(ctx, &output, start, base) {
                        let joined = output.join(", ");
                        if !joined.contains('\n') {
                            let lead = if base.is_empty() {
                                String::new()
                            } else {
                                format!("{base} ")
                            };
                            return format!("{lead}{} {joined} {}", braces.0, braces.1);
                        }
                    }
                }
            }
            let indentation = format!("\n{}", " ".repeat(ctx.indentation_lvl));
            let lead = if base.is_empty() {
                String::new()
            } else {
                format!("{base} ")
            };
            format!(
                "{lead}{}{indentation}  {}{indentation}{}",
                braces.0,
                output.join(&format!(",{indentation}  ")),
                braces.1
            )
        }
        crate::options::Compact::Always => {
            if is_below_break_length(ctx, &output, 0, base) {
                let mid = if base.is_empty() {
                    String::new()
                } else {
                    format!(" {base}")
                };
                return format!("{}{mid} {} {}", braces.0, output.join(", "), braces.1);
            }
            let indentation = " ".repeat(ctx.indentation_lvl);
            // A one-character opening brace keeps the first entry on the same
            // line; longer openings force a break so entries line up.
            let ln = if base.is_empty() && braces.0.len() == 1 {
                " ".to_string()
            } else {
                let mid = if base.is_empty() {
                    String::new()
                } else {
                    format!(" {base}")
                };
                format!("{mid}\n{indentation}  ")
            };
            format!(
                "{}{ln}{} {}",
                braces.0,
                output.join(&format!(",\n{indentation}  ")),
                braces.1
            )
        }
    }
}
