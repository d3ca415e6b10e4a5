//! Decoding of numeric and string literal tokens.

use crate::ast::NodeKind;

/// Decode an integer literal token (`42`, `0x1F`, `0b101`, `0o17`, `017`,
/// `1_000`).
///
/// Values that do not fit in an `i64` become floats, as in PHP. Returns
/// `None` for malformed literals such as `09`.
pub fn parse_int_literal(text: &str) -> Option<NodeKind> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    let (radix, body) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        Some("0b" | "0B") => (2, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        _ if digits.len() > 1 && digits.starts_with('0') => (8, &digits[1..]),
        _ => (10, digits.as_str()),
    };
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    match u128::from_str_radix(body, radix) {
        Ok(value) => Some(match i64::try_from(value) {
            Ok(value) => NodeKind::Int { value },
            Err(_) => NodeKind::Float {
                value: value as f64,
            },
        }),
        Err(_) => {
            let value = body.chars().fold(0f64, |acc, c| {
                acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
            });
            Some(NodeKind::Float { value })
        }
    }
}

/// Decode a float literal token (`3.14`, `.5`, `1e3`, `1_000.5`).
pub fn parse_float_literal(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    // Rust rejects a trailing `.` ("1."), PHP accepts it
    let digits = digits.strip_suffix('.').unwrap_or(&digits);
    digits.parse::<f64>().ok()
}

/// Decode the body of a `'...'` literal (quotes included in `raw`).
///
/// Only `\'` and `\\` are escapes; every other backslash is literal.
pub fn unescape_single_quoted(raw: &str) -> String {
    let body = strip_quotes(raw);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next @ ('\'' | '\\')) = chars.peek() {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Decode the body of a `"..."` literal (quotes included in `raw`).
///
/// Returns `None` when the string interpolates variables (`"$x"`,
/// `"{$x}"`), which the tree has no plain-string form for.
pub fn unescape_double_quoted(raw: &str) -> Option<String> {
    let body = strip_quotes(raw).as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut i = 0;

    while i < body.len() {
        let b = body[i];
        match b {
            b'$' if body
                .get(i + 1)
                .is_some_and(|&n| n == b'_' || n.is_ascii_alphabetic() || n >= 0x80) =>
            {
                return None;
            }
            b'{' if body.get(i + 1) == Some(&b'$') => return None,
            b'\\' if i + 1 < body.len() => {
                let next = body[i + 1];
                i += 2;
                match next {
                    b'n' => out.push(b'\n'),
                    b't' => out.push(b'\t'),
                    b'r' => out.push(b'\r'),
                    b'v' => out.push(0x0b),
                    b'e' => out.push(0x1b),
                    b'f' => out.push(0x0c),
                    b'\\' => out.push(b'\\'),
                    b'$' => out.push(b'$'),
                    b'"' => out.push(b'"'),
                    b'0'..=b'7' => {
                        let start = i - 1;
                        let mut end = start + 1;
                        while end < body.len()
                            && end < start + 3
                            && (b'0'..=b'7').contains(&body[end])
                        {
                            end += 1;
                        }
                        let digits = std::str::from_utf8(&body[start..end]).unwrap_or("0");
                        let value = u32::from_str_radix(digits, 8).unwrap_or(0);
                        out.push((value & 0xff) as u8);
                        i = end;
                    }
                    b'x' if body.get(i).is_some_and(|c| c.is_ascii_hexdigit()) => {
                        let mut end = i + 1;
                        if body.get(end).is_some_and(|c| c.is_ascii_hexdigit()) {
                            end += 1;
                        }
                        let digits = std::str::from_utf8(&body[i..end]).unwrap_or("0");
                        out.push(u8::from_str_radix(digits, 16).unwrap_or(0));
                        i = end;
                    }
                    b'u' if body.get(i) == Some(&b'{') => {
                        let close = body[i..].iter().position(|&c| c == b'}').map(|p| i + p);
                        let decoded = close.and_then(|close| {
                            let hex = std::str::from_utf8(&body[i + 1..close]).ok()?;
                            let ch = char::from_u32(u32::from_str_radix(hex, 16).ok()?)?;
                            Some((ch, close))
                        });
                        match decoded {
                            Some((ch, close)) => {
                                let mut buf = [0u8; 4];
                                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                                i = close + 1;
                            }
                            None => out.extend_from_slice(b"\\u"),
                        }
                    }
                    other => {
                        out.push(b'\\');
                        out.push(other);
                    }
                }
                continue;
            }
            _ => out.push(b),
        }
        i += 1;
    }

    Some(String::from_utf8_lossy(&out).into_owned())
}

fn strip_quotes(raw: &str) -> &str {
    raw.get(1..raw.len().saturating_sub(1)).unwrap_or("")
}

#[cfg(test)]
#[path = "../../tests/literals_tests.rs"]
mod tests;
