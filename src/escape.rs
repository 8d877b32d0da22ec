//! Escape vocabulary shared by the parser and the serializer.
//!
//! Both directions go through [`EscapePolicy`] so that text written by
//! [`escape_key`] / [`escape_value`] always decodes back to the same strings.

use serde::{Deserialize, Serialize};

/// Starts an escape sequence or a line continuation.
pub const ESCAPE: u8 = b'\\';
/// Separates a key from its value.
pub const SEPARATOR: u8 = b'=';
/// Starts a comment line.
pub const COMMENT: u8 = b'#';
/// Ends a physical line.
pub const NEWLINE: u8 = b'\n';

/// Which characters may follow a backslash.
///
/// `Strict` accepts only `\\` and `\=`. `Extended` also accepts `\n`, `\r`
/// and `\t`, which decode to the matching control characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapePolicy {
    Strict,
    #[default]
    Extended,
}

impl EscapePolicy {
    /// Decodes the character following a backslash.
    ///
    /// Returns `None` when `target` is not part of the vocabulary.
    pub fn decode(
        self,
        target: u8,
    ) -> Option<u8> {
        match (self, target) {
            (_, ESCAPE) => Some(ESCAPE),
            (_, SEPARATOR) => Some(SEPARATOR),
            (Self::Extended, b'n') => Some(b'\n'),
            (Self::Extended, b'r') => Some(b'\r'),
            (Self::Extended, b't') => Some(b'\t'),
            _ => None,
        }
    }

    /// Escaped form of `c`, or `None` if it is written verbatim.
    fn encode(
        self,
        c: char,
        in_key: bool,
    ) -> Option<&'static str> {
        match (self, c) {
            (_, '\\') => Some("\\\\"),
            (_, '=') if in_key => Some("\\="),
            (Self::Strict, '\n') => Some("\\\n"),
            (Self::Extended, '\n') => Some("\\n"),
            (Self::Extended, '\r') => Some("\\r"),
            (Self::Extended, '\t') => Some("\\t"),
            _ => None,
        }
    }
}

/// Whitespace that is dropped before a member and trimmed after it.
///
/// Carriage return is included so that CRLF text loads like LF text.
#[inline]
pub fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}

/// Appends the escaped form of `key` to `out`.
///
/// The vocabulary has no escape for `#` or for a space, so some keys cannot
/// be written faithfully: a key starting with `#` reads back as a comment
/// and is dropped, and spaces at either end of a key are trimmed on load.
pub fn escape_key(
    policy: EscapePolicy,
    key: &str,
    out: &mut String,
) {
    escape_into(policy, key, true, out);
}

/// Appends the escaped form of `value` to `out`.
///
/// `=` is left alone: everything after the first unescaped separator already
/// belongs to the value.
///
/// Spaces at either end of a value are trimmed on load.
pub fn escape_value(
    policy: EscapePolicy,
    value: &str,
    out: &mut String,
) {
    escape_into(policy, value, false, out);
}

fn escape_into(
    policy: EscapePolicy,
    s: &str,
    in_key: bool,
    out: &mut String,
) {
    out.reserve(s.len());
    let mut run_start = 0;
    for (i, c) in s.char_indices() {
        if let Some(escaped) = policy.encode(c, in_key) {
            out.push_str(&s[run_start..i]);
            out.push_str(escaped);
            run_start = i + c.len_utf8();
        }
    }
    out.push_str(&s[run_start..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(
        policy: EscapePolicy,
        s: &str,
    ) -> String {
        let mut out = String::new();
        escape_key(policy, s, &mut out);
        out
    }

    fn value(
        policy: EscapePolicy,
        s: &str,
    ) -> String {
        let mut out = String::new();
        escape_value(policy, s, &mut out);
        out
    }

    #[test]
    fn test_decode_common_targets() {
        for policy in [EscapePolicy::Strict, EscapePolicy::Extended] {
            assert_eq!(policy.decode(b'\\'), Some(b'\\'));
            assert_eq!(policy.decode(b'='), Some(b'='));
            assert_eq!(policy.decode(b'X'), None);
            assert_eq!(policy.decode(b' '), None);
        }
    }

    #[test]
    fn test_decode_control_targets_depend_on_policy() {
        assert_eq!(EscapePolicy::Extended.decode(b'n'), Some(b'\n'));
        assert_eq!(EscapePolicy::Extended.decode(b'r'), Some(b'\r'));
        assert_eq!(EscapePolicy::Extended.decode(b't'), Some(b'\t'));
        assert_eq!(EscapePolicy::Strict.decode(b'n'), None);
        assert_eq!(EscapePolicy::Strict.decode(b'r'), None);
        assert_eq!(EscapePolicy::Strict.decode(b't'), None);
    }

    #[test]
    fn test_escape_key_escapes_separator_and_backslash() {
        assert_eq!(key(EscapePolicy::Strict, "a=b"), "a\\=b");
        assert_eq!(key(EscapePolicy::Strict, "a\\b"), "a\\\\b");
        assert_eq!(key(EscapePolicy::Extended, "plain key"), "plain key");
    }

    #[test]
    fn test_escape_value_keeps_separator() {
        assert_eq!(value(EscapePolicy::Extended, "a=b=c"), "a=b=c");
        assert_eq!(value(EscapePolicy::Extended, "c:\\dir"), "c:\\\\dir");
    }

    #[test]
    fn test_escape_newlines_per_policy() {
        assert_eq!(value(EscapePolicy::Strict, "a\nb"), "a\\\nb");
        assert_eq!(value(EscapePolicy::Extended, "a\nb"), "a\\nb");
        assert_eq!(value(EscapePolicy::Extended, "\ta\r"), "\\ta\\r");
        assert_eq!(value(EscapePolicy::Strict, "\ta\r"), "\ta\r");
    }

    #[test]
    fn test_escape_preserves_multibyte_text() {
        assert_eq!(key(EscapePolicy::Extended, "ключ=знач"), "ключ\\=знач");
        assert_eq!(value(EscapePolicy::Extended, "日本\\語"), "日本\\\\語");
    }

    #[test]
    fn test_policy_deserializes_lowercase() {
        let p: EscapePolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(p, EscapePolicy::Strict);
        assert_eq!(EscapePolicy::default(), EscapePolicy::Extended);
    }
}
