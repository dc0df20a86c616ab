use crate::error::DecodeError;

use std::borrow::Cow;

/// Percent-decodes a captured segment.
///
/// Empty input is returned as is. A `%` that is not followed by two hex digits,
/// or an escape sequence that decodes to invalid UTF-8, yields a [`DecodeError`].
pub fn decode_param(raw: &str) -> Result<Cow<'_, str>, DecodeError> {
    if raw.is_empty() || !raw.contains('%') {
        return Ok(Cow::Borrowed(raw));
    }

    if !is_well_formed(raw.as_bytes()) {
        return Err(DecodeError::new(raw));
    }

    urlencoding::decode(raw).map_err(|_| DecodeError::new(raw))
}

fn is_well_formed(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(&[h, l]) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

#[test]
fn decode_plain() {
    assert_eq!(decode_param("").unwrap(), "");
    assert_eq!(decode_param("abc").unwrap(), "abc");
    assert!(matches!(decode_param("abc").unwrap(), Cow::Borrowed(_)));
    assert_eq!(decode_param("a+b").unwrap(), "a+b");
}

#[test]
fn decode_escapes() {
    assert_eq!(decode_param("foo%20bar").unwrap(), "foo bar");
    assert_eq!(decode_param("%2Fetc%2fpasswd").unwrap(), "/etc/passwd");
    assert_eq!(decode_param("caf%C3%A9").unwrap(), "café");
    assert_eq!(decode_param("%25").unwrap(), "%");
}

#[test]
fn decode_malformed() {
    for raw in ["%", "%2", "%zz", "abc%", "%E0%A4%A", "%FF", "%C3"] {
        let err = decode_param(raw).unwrap_err();
        assert_eq!(err.value(), raw);
        assert_eq!(err.status(), 400);
        assert_eq!(err.to_string(), format!("Failed to decode param '{}'", raw));
    }
}
