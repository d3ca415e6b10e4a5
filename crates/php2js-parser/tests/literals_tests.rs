use super::*;

#[test]
fn test_decimal_and_prefixed_integers() {
    assert_eq!(parse_int_literal("4"), Some(NodeKind::Int { value: 4 }));
    assert_eq!(parse_int_literal("1_000"), Some(NodeKind::Int { value: 1000 }));
    assert_eq!(parse_int_literal("0x1F"), Some(NodeKind::Int { value: 31 }));
    assert_eq!(parse_int_literal("0b101"), Some(NodeKind::Int { value: 5 }));
    assert_eq!(parse_int_literal("0o17"), Some(NodeKind::Int { value: 15 }));
    assert_eq!(parse_int_literal("017"), Some(NodeKind::Int { value: 15 }));
    assert_eq!(parse_int_literal("0"), Some(NodeKind::Int { value: 0 }));
}

#[test]
fn test_malformed_legacy_octal() {
    assert_eq!(parse_int_literal("09"), None);
}

#[test]
fn test_integer_overflow_becomes_float() {
    assert_eq!(
        parse_int_literal("9223372036854775808"),
        Some(NodeKind::Float {
            value: 9223372036854775808.0
        })
    );
    assert_eq!(
        parse_int_literal("9223372036854775807"),
        Some(NodeKind::Int { value: i64::MAX })
    );
}

#[test]
fn test_float_literals() {
    assert_eq!(parse_float_literal("3.14"), Some(3.14));
    assert_eq!(parse_float_literal(".5"), Some(0.5));
    assert_eq!(parse_float_literal("1e3"), Some(1000.0));
    assert_eq!(parse_float_literal("1."), Some(1.0));
    assert_eq!(parse_float_literal("1_000.5"), Some(1000.5));
}

#[test]
fn test_single_quoted_escapes() {
    assert_eq!(unescape_single_quoted(r"'it\'s'"), "it's");
    assert_eq!(unescape_single_quoted(r"'a\\b'"), r"a\b");
    assert_eq!(unescape_single_quoted(r"'a\nb'"), r"a\nb");
    assert_eq!(unescape_single_quoted("'Åsmund'"), "Åsmund");
}

#[test]
fn test_double_quoted_escapes() {
    assert_eq!(unescape_double_quoted(r#""a\nb""#).as_deref(), Some("a\nb"));
    assert_eq!(unescape_double_quoted(r#""say \"hi\"""#).as_deref(), Some("say \"hi\""));
    assert_eq!(unescape_double_quoted(r#""\x41\101""#).as_deref(), Some("AA"));
    assert_eq!(unescape_double_quoted(r#""\u{c5}""#).as_deref(), Some("Å"));
    assert_eq!(unescape_double_quoted(r#""cost: \$5""#).as_deref(), Some("cost: $5"));
    assert_eq!(unescape_double_quoted(r#""\q""#).as_deref(), Some(r"\q"));
}

#[test]
fn test_double_quoted_dollar_without_name_is_literal() {
    assert_eq!(unescape_double_quoted(r#""$5 or $""#).as_deref(), Some("$5 or $"));
}

#[test]
fn test_interpolation_is_detected() {
    assert_eq!(unescape_double_quoted(r#""hello $name""#), None);
    assert_eq!(unescape_double_quoted(r#""hello {$user->name}""#), None);
}
