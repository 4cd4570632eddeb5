//! Byte-to-literal encoding.
//!
//! These functions turn a buffer of raw bytes into C++ literal text. They are
//! total over all 256 byte values and depend on nothing but their input, so
//! the same bytes always produce the same text.
//!
//! ## Array form
//!
//! Each byte becomes an uppercase hex integer literal, comma separated:
//! `[0x48, 0x00]` encodes as `0x48,0x00`.
//!
//! ## String form
//!
//! Printable ASCII is emitted as is, with `\\`, `"` and `?` escaped (the last
//! one keeps trigraph sequences from forming). Newline, carriage return and
//! tab use their short escapes. Everything else becomes a three digit octal
//! escape, which can never absorb a following character the way a `\x`
//! escape would.

/// Encodes `bytes` as the body of a C++ `unsigned char` array initializer
pub fn to_cpp_char_array(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    // "0xNN" plus a comma for every byte but the first
    let mut out = String::with_capacity(bytes.len() * 5);
    for (i, &byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str("0x");
        out.push(HEX[usize::from(byte >> 4)] as char);
        out.push(HEX[usize::from(byte & 0x0F)] as char);
    }
    out
}

/// Encodes `bytes` as the contents of a C++ string literal, without quotes
pub fn to_cpp_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    escape_into(&mut out, bytes);
    out
}

/// Appends the escaped form of `bytes` to `out`
pub fn escape_into(out: &mut String, bytes: &[u8]) {
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'?' => out.push_str("\\?"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7E => out.push(byte as char),
            _ => {
                out.push('\\');
                out.push(char::from(b'0' + (byte >> 6)));
                out.push(char::from(b'0' + ((byte >> 3) & 0o7)));
                out.push(char::from(b'0' + (byte & 0o7)));
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Parses the output of [`to_cpp_char_array`] back into bytes
    pub(crate) fn parse_char_array(text: &str) -> Vec<u8> {
        text.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| {
                let hex = item.strip_prefix("0x").expect("hex literal");
                u8::from_str_radix(hex, 16).expect("valid hex byte")
            })
            .collect()
    }

    /// Evaluates the escapes produced by [`to_cpp_string`]
    pub(crate) fn unescape_cpp_string(text: &str) -> Vec<u8> {
        let bytes = text.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b'\\' {
                assert_ne!(bytes[i], b'"', "unescaped quote in literal");
                out.push(bytes[i]);
                i += 1;
                continue;
            }
            let next = bytes[i + 1];
            match next {
                b'\\' | b'"' | b'?' => {
                    out.push(next);
                    i += 2;
                }
                b'n' => {
                    out.push(b'\n');
                    i += 2;
                }
                b'r' => {
                    out.push(b'\r');
                    i += 2;
                }
                b't' => {
                    out.push(b'\t');
                    i += 2;
                }
                b'0'..=b'7' => {
                    let digits = &text[i + 1..i + 4];
                    out.push(u8::from_str_radix(digits, 8).expect("octal escape"));
                    i += 4;
                }
                other => panic!("unexpected escape \\{}", other as char),
            }
        }
        out
    }

    fn all_bytes() -> Vec<u8> {
        (0..=255u8).collect()
    }

    #[test]
    fn test_char_array() {
        assert_eq!(to_cpp_char_array(&[]), "");
        assert_eq!(to_cpp_char_array(&[0x48]), "0x48");
        assert_eq!(to_cpp_char_array(&[0x48, 0x65, 0x6C]), "0x48,0x65,0x6C");
        assert_eq!(to_cpp_char_array(&[0x00, 0xFF, 0x0a]), "0x00,0xFF,0x0A");
    }

    #[test]
    fn test_char_array_all_bytes() {
        let bytes = all_bytes();
        assert_eq!(parse_char_array(&to_cpp_char_array(&bytes)), bytes);
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(to_cpp_string(b"hello"), "hello");
        assert_eq!(to_cpp_string(b"a\\b"), "a\\\\b");
        assert_eq!(to_cpp_string(b"say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(to_cpp_string(b"??="), "\\?\\?=");
        assert_eq!(to_cpp_string(b"a\nb\r\tc"), "a\\nb\\r\\tc");
        assert_eq!(to_cpp_string(&[0x00, b'1']), "\\0001");
        assert_eq!(to_cpp_string(&[0xFF, 0x7F]), "\\377\\177");
    }

    #[test]
    fn test_string_all_bytes() {
        let bytes = all_bytes();
        let text = to_cpp_string(&bytes);
        assert!(text.is_ascii());
        assert_eq!(unescape_cpp_string(&text), bytes);
    }

    #[test]
    fn test_deterministic() {
        let bytes = all_bytes();
        assert_eq!(to_cpp_string(&bytes), to_cpp_string(&bytes));
        assert_eq!(to_cpp_char_array(&bytes), to_cpp_char_array(&bytes));
    }
}
