//! Display-width measurement for rendered fragments.
//!
//! Layout decisions care about visible columns, not byte or char counts:
//! East-Asian full-width code points occupy two columns, combining marks
//! occupy none, and terminal control sequences occupy none at all.

/// Returns the number of terminal columns required to display `s`.
///
/// VT control sequences are stripped first, full-width code points count as
/// two columns and zero-width code points as none.
///
/// ```rust
/// assert_eq!(ocular::string_width("abc"), 3);
/// assert_eq!(ocular::string_width("日本"), 4);
/// assert_eq!(ocular::string_width("\u{1b}[32mok\u{1b}[39m"), 2);
/// ```
pub fn string_width(s: &str) -> usize {
    let stripped;
    let visible = if s.contains('\u{1b}') || s.contains('\u{9b}') {
        stripped = strip_vt_control_characters(s);
        stripped.as_str()
    } else {
        s
    };
    visible
        .chars()
        .map(|ch| {
            let code = ch as u32;
            if is_full_width(code) {
                2
            } else if is_zero_width(code) {
                0
            } else {
                1
            }
        })
        .sum()
}

/// Removes VT control sequences (CSI and OSC) from a string.
pub fn strip_vt_control_characters(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        let introducer = match ch {
            '\u{1b}' => chars.next(),
            '\u{9b}' => Some('['),
            _ => {
                out.push(ch);
                continue;
            }
        };
        match introducer {
            // CSI: parameters and intermediates, terminated by 0x40..=0x7e
            Some('[') => {
                for c in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&c) {
                        break;
                    }
                }
            }
            // OSC: terminated by BEL or ST (ESC \)
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\u{7}' {
                        break;
                    }
                    if c == '\u{1b}' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            // Two-character escape sequence
            Some(_) => {}
            None => {}
        }
    }
    out
}

// Ranges derived from the Unicode EastAsianWidth data file.
fn is_full_width(code: u32) -> bool {
    code >= 0x1100
        && (code <= 0x115f // Hangul Jamo
            || code == 0x2329
            || code == 0x232a
            // CJK Radicals Supplement .. Enclosed CJK Letters and Months
            || (0x2e80..=0x3247).contains(&code) && code != 0x303f
            // Enclosed CJK Letters and Months .. CJK Unified Ideographs Ext. A
            || (0x3250..=0x4dbf).contains(&code)
            // CJK Unified Ideographs .. Yi Radicals
            || (0x4e00..=0xa4c6).contains(&code)
            // Hangul Jamo Extended-A
            || (0xa960..=0xa97c).contains(&code)
            // Hangul Syllables
            || (0xac00..=0xd7a3).contains(&code)
            // CJK Compatibility Ideographs
            || (0xf900..=0xfaff).contains(&code)
            // Vertical Forms
            || (0xfe10..=0xfe19).contains(&code)
            // CJK Compatibility Forms .. Small Form Variants
            || (0xfe30..=0xfe6b).contains(&code)
            // Halfwidth and Fullwidth Forms
            || (0xff01..=0xff60).contains(&code)
            || (0xffe0..=0xffe6).contains(&code)
            // Kana Supplement
            || (0x1b000..=0x1b001).contains(&code)
            // Enclosed Ideographic Supplement
            || (0x1f200..=0x1f251).contains(&code)
            // Miscellaneous Symbols and Pictographs .. Emoticons
            || (0x1f300..=0x1f64f).contains(&code)
            // CJK Unified Ideographs Ext. B .. Tertiary Ideographic Plane
            || (0x20000..=0x3fffd).contains(&code))
}

fn is_zero_width(code: u32) -> bool {
    code <= 0x1f // C0 controls
        || (0x7f..=0x9f).contains(&code) // C1 controls
        || (0x300..=0x36f).contains(&code) // Combining Diacritical Marks
        || (0x200b..=0x200f).contains(&code) // Invisible modifiers
        || (0x20d0..=0x20ff).contains(&code) // Combining Marks for Symbols
        || (0xfe00..=0xfe0f).contains(&code) // Variation Selectors
        || (0xfe20..=0xfe2f).contains(&code) // Combining Half Marks
        || (0xe0100..=0xe01ef).contains(&code) // Variation Selectors Supplement
}
