//! String escaping for quoted output.
//!
//! Quote selection prefers single quotes, falls back to double quotes when
//! the text contains a single quote, and to backticks when it contains both
//! kinds (unless a backtick or `${` would make that ambiguous). Control
//! characters use the conventional mnemonics where one exists and `\xHH`
//! otherwise. Unpaired surrogate halves cannot occur in Rust strings, so no
//! `\uHHHH` fallback for them is needed.

fn escape_char(ch: char, quote: char, out: &mut String) {
    match ch {
        '\u{8}' => out.push_str("\\b"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\u{c}' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        '\\' => out.push_str("\\\\"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if (c as u32) < 0x20 || (0x7f..=0x9f).contains(&(c as u32)) => {
            out.push_str(&format!("\\x{:02X}", c as u32));
        }
        c => out.push(c),
    }
}

/// Escapes `s` and wraps it in the preferred quote character.
pub fn quote_string(s: &str) -> String {
    let mut quote = '\'';
    if s.contains('\'') {
        if !s.contains('"') {
            quote = '"';
        } else if !s.contains('`') && !s.contains("${") {
            quote = '`';
        }
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        escape_char(ch, quote, &mut out);
    }
    out.push(quote);
    out
}

/// Escapes control characters and backslashes without adding quotes.
///
/// Used for text that is rendered bare, like symbol descriptions.
pub fn escape_control(s: &str) -> String {
    if !s
        .chars()
        .any(|c| (c as u32) < 0x20 || c == '\\' || (0x7f..=0x9f).contains(&(c as u32)))
    {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        // '\u{0}' never equals a real quote, so only controls and backslashes
        // get rewritten here.
        escape_char(ch, '\u{0}', &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_strings_use_single_quotes() {
        assert_eq!(quote_string("hello"), "'hello'");
        assert_eq!(quote_string(""), "''");
    }

    #[test]
    fn test_quote_selection() {
        assert_eq!(quote_string("it's"), "\"it's\"");
        assert_eq!(quote_string("she said \"hi\""), "'she said \"hi\"'");
        assert_eq!(quote_string("both ' and \""), "`both ' and \"`");
        // A template-literal marker forces escaping inside single quotes.
        assert_eq!(quote_string("' \" ${x} `"), "'\\' \" ${x} `'");
    }

    #[test]
    fn test_control_escapes() {
        assert_eq!(quote_string("a\tb\nc"), "'a\\tb\\nc'");
        assert_eq!(quote_string("bell\u{7}"), "'bell\\x07'");
        assert_eq!(quote_string("del\u{7f}"), "'del\\x7F'");
        assert_eq!(quote_string("c1\u{9b}"), "'c1\\x9B'");
        assert_eq!(quote_string("back\\slash"), "'back\\\\slash'");
    }

    #[test]
    fn test_non_ascii_pass_through() {
        assert_eq!(quote_string("héllo 日本"), "'héllo 日本'");
    }

    #[test]
    fn test_escape_control_bare() {
        assert_eq!(escape_control("plain"), "plain");
        assert_eq!(escape_control("line\nbreak"), "line\\nbreak");
        assert_eq!(escape_control("a'b\"c"), "a'b\"c");
    }
}
