//! CSS identifier escaping
//!
//! Class tokens and ids on real pages routinely contain characters that are
//! not valid in a bare CSS identifier (`md:w-1/2`, `2col`, `a.b`). Escaping
//! keeps synthesized selectors parseable and pointing at the node they came
//! from.

use std::fmt::Write;

/// Serialize `ident` as a CSS identifier, following the CSSOM
/// "serialize an identifier" rules.
///
/// ```rust
/// use card_scout::selector::escape_identifier;
///
/// assert_eq!(escape_identifier("card"), "card");
/// assert_eq!(escape_identifier("md:w-1/2"), r"md\:w-1\/2");
/// assert_eq!(escape_identifier("2col"), r"\32 col");
/// ```
#[must_use]
pub fn escape_identifier(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let first = ident.chars().next();

    if ident == "-" {
        return r"\-".to_string();
    }

    for (index, ch) in ident.chars().enumerate() {
        let code = ch as u32;
        let leading_digit = ch.is_ascii_digit()
            && (index == 0 || (index == 1 && first == Some('-')));

        if ch == '\0' {
            out.push('\u{FFFD}');
        } else if (0x01..=0x1F).contains(&code) || code == 0x7F || leading_digit {
            let _ = write!(out, "\\{code:x} ");
        } else if code >= 0x80 || ch == '-' || ch == '_' || ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else {
            out.push('\\');
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_are_untouched() {
        assert_eq!(escape_identifier("product-card_2"), "product-card_2");
        assert_eq!(escape_identifier("-webkit"), "-webkit");
    }

    #[test]
    fn punctuation_is_backslash_escaped() {
        assert_eq!(escape_identifier("a.b"), r"a\.b");
        assert_eq!(escape_identifier("w-[10px]"), r"w-\[10px\]");
        assert_eq!(escape_identifier("x#y"), r"x\#y");
    }

    #[test]
    fn leading_digits_use_code_points() {
        assert_eq!(escape_identifier("1"), r"\31 ");
        assert_eq!(escape_identifier("-1a"), r"-\31 a");
        assert_eq!(escape_identifier("a1"), "a1");
    }

    #[test]
    fn lone_dash_and_control_characters() {
        assert_eq!(escape_identifier("-"), r"\-");
        assert_eq!(escape_identifier("a\tb"), r"a\9 b");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(escape_identifier("carte-é"), "carte-é");
    }
}
