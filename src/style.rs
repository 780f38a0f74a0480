//! ANSI color registry and the role-based styling applied to rendered text.
//!
//! The registry is a fixed table of SGR open/close code pairs. Alias names
//! (`grey`, `doubleUnderline`, ...) are resolved at lookup time rather than
//! materialized as table entries, so the table itself never changes and
//! lookups stay deterministic.

/// Semantic roles assigned to rendered fragments.
///
/// Each role maps to a fixed color when color output is enabled. `Name` is
/// deliberately unstyled so property names stay readable on any background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Placeholders and structural markers (`[Object]`, `<ref *1>`, ...)
    Special,
    /// Numbers, including `-0` and non-finite values
    Number,
    /// BigInt values (rendered with the `n` suffix)
    BigInt,
    /// `true` and `false`
    Boolean,
    /// `undefined` and sparse-array hole markers
    Undefined,
    /// `null`
    Null,
    /// Quoted strings
    String,
    /// Symbol descriptions
    Symbol,
    /// Date bases
    Date,
    /// Regular expression bases
    RegExp,
    /// Property names
    Name,
    /// Module specifiers in stack traces
    Module,
}

/// SGR open/close code pairs, matching the conventional terminal palette.
static COLORS: &[(&str, (u8, u8))] = &[
    ("reset", (0, 0)),
    ("bold", (1, 22)),
    ("dim", (2, 22)),
    ("italic", (3, 23)),
    ("underline", (4, 24)),
    ("blink", (5, 25)),
    ("inverse", (7, 27)),
    ("hidden", (8, 28)),
    ("strikethrough", (9, 29)),
    ("doubleunderline", (21, 24)),
    ("black", (30, 39)),
    ("red", (31, 39)),
    ("green", (32, 39)),
    ("yellow", (33, 39)),
    ("blue", (34, 39)),
    ("magenta", (35, 39)),
    ("cyan", (36, 39)),
    ("white", (37, 39)),
    ("bgBlack", (40, 49)),
    ("bgRed", (41, 49)),
    ("bgGreen", (42, 49)),
    ("bgYellow", (43, 49)),
    ("bgBlue", (44, 49)),
    ("bgMagenta", (45, 49)),
    ("bgCyan", (46, 49)),
    ("bgWhite", (47, 49)),
    ("framed", (51, 54)),
    ("overlined", (53, 55)),
    ("gray", (90, 39)),
    ("redBright", (91, 39)),
    ("greenBright", (92, 39)),
    ("yellowBright", (93, 39)),
    ("blueBright", (94, 39)),
    ("magentaBright", (95, 39)),
    ("cyanBright", (96, 39)),
    ("whiteBright", (97, 39)),
    ("bgGray", (100, 49)),
    ("bgRedBright", (101, 49)),
    ("bgGreenBright", (102, 49)),
    ("bgYellowBright", (103, 49)),
    ("bgBlueBright", (104, 49)),
    ("bgMagentaBright", (105, 49)),
    ("bgCyanBright", (106, 49)),
    ("bgWhiteBright", (107, 49)),
];

/// Alternate spellings accepted for registry lookups.
static ALIASES: &[(&str, &str)] = &[
    ("grey", "gray"),
    ("bgGrey", "bgGray"),
    ("greyBright", "gray"),
    ("strikeThrough", "strikethrough"),
    ("strike-through", "strikethrough"),
    ("crossedout", "strikethrough"),
    ("crossed-out", "strikethrough"),
    ("doubleUnderline", "doubleunderline"),
    ("double-underline", "doubleunderline"),
    ("hiddenBright", "hidden"),
    ("conceal", "hidden"),
];

/// Looks up the SGR open/close codes for a color name, resolving aliases.
pub fn color_codes(name: &str) -> Option<(u8, u8)> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, target)| *target);
    COLORS
        .iter()
        .find(|(color, _)| *color == canonical)
        .map(|(_, codes)| *codes)
}

fn role_color(role: Role) -> Option<&'static str> {
    match role {
        Role::Special => Some("cyan"),
        Role::Number | Role::BigInt | Role::Boolean => Some("yellow"),
        Role::Undefined => Some("grey"),
        Role::Null => Some("bold"),
        Role::String | Role::Symbol => Some("green"),
        Role::Date => Some("magenta"),
        Role::RegExp => Some("red"),
        Role::Module => Some("underline"),
        Role::Name => None,
    }
}

/// Wraps `text` in the SGR codes for `role`. Roles without a color map
/// (and unknown registry names) pass the text through unchanged.
pub fn stylize_with_color(text: &str, role: Role) -> String {
    if let Some((open, close)) = role_color(role).and_then(color_codes) {
        format!("\u{1b}[{open}m{text}\u{1b}[{close}m")
    } else {
        text.to_string()
    }
}

/// Identity styling, used when colors are disabled.
pub fn stylize_plain(text: &str, _role: Role) -> String {
    text.to_string()
}

/// Strips the SGR color sequences this crate emits (`ESC [ n m` with a one-
/// or two-digit code). Other escape sequences are left untouched.
pub fn remove_colors(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0x1b && i + 1 < bytes.len() && bytes[i + 1] == b'[' {
            let mut j = i + 2;
            let mut digits = 0;
            while j < bytes.len() && bytes[j].is_ascii_digit() && digits < 2 {
                j += 1;
                digits += 1;
            }
            if digits > 0 && j < bytes.len() && bytes[j] == b'm' {
                i = j + 1;
                continue;
            }
        }
        let ch = s[i..].chars().next().unwrap();
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_codes() {
        assert_eq!(color_codes("red"), Some((31, 39)));
        assert_eq!(color_codes("bgCyanBright"), Some((106, 49)));
        assert_eq!(color_codes("nope"), None);
    }

    #[test]
    fn test_alias_resolution() {
        assert_eq!(color_codes("grey"), color_codes("gray"));
        assert_eq!(color_codes("doubleUnderline"), Some((21, 24)));
        assert_eq!(color_codes("crossed-out"), color_codes("strikethrough"));
    }

    #[test]
    fn test_stylize_roles() {
        assert_eq!(stylize_with_color("42", Role::Number), "\u{1b}[33m42\u{1b}[39m");
        assert_eq!(stylize_with_color("null", Role::Null), "\u{1b}[1mnull\u{1b}[22m");
        assert_eq!(stylize_with_color("key", Role::Name), "key");
        assert_eq!(stylize_plain("42", Role::Number), "42");
    }

    #[test]
    fn test_remove_colors() {
        let colored = stylize_with_color("'hi'", Role::String);
        assert_eq!(remove_colors(&colored), "'hi'");
        assert_eq!(remove_colors("plain"), "plain");
        // Sequences with three-digit codes are not ours; leave them alone.
        assert_eq!(
            remove_colors("\u{1b}[106mx\u{1b}[49m"),
            "\u{1b}[106mx"
        );
    }
}
