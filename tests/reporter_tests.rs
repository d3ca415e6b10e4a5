use super::reporter::Reporter;
use crate::driver::{ConvertError, convert_ast_json, convert_source};

fn plain(error: &ConvertError) -> String {
    Reporter::new(false).format_error(error)
}

#[test]
fn test_emit_error_with_snippet() {
    let source = include_str!("fixtures/unsupported.php");
    let err = convert_source(source, "unsupported.php").unwrap_err();
    assert_eq!(
        plain(&err),
        "unsupported.php:4:1 - error: unsupported node kind `Stmt_Echo`\n    4   echo $total;\n        ~~~~~~~~~~~~"
    );
}

#[test]
fn test_parse_error_underlines_token() {
    let err = convert_source("<?php\n$a = ;\n", "bad.php").unwrap_err();
    assert_eq!(
        plain(&err),
        "bad.php:2:6 - error: parse error: expected expression, found `;`\n    2   $a = ;\n             ~"
    );
}

#[test]
fn test_underline_stops_at_node_end() {
    let err = convert_source("<?php\n$x = [1, $list[]];\n", "index.php").unwrap_err();
    let rendered = plain(&err);
    assert!(
        rendered.starts_with("index.php:2:10 - error: "),
        "{rendered}"
    );
    assert!(
        rendered.ends_with("\n    2   $x = [1, $list[]];\n                 ~~~~~~~"),
        "{rendered}"
    );
}

#[test]
fn test_ast_dump_error_has_no_snippet() {
    let err = convert_ast_json("{}", "dump.json").unwrap_err();
    assert_eq!(
        plain(&err),
        "dump.json - error: invalid AST dump: invalid AST JSON: expected an array of statements"
    );
}

#[test]
fn test_io_error_has_no_location() {
    let err = crate::driver::convert("/definitely/not/here.php").unwrap_err();
    let rendered = plain(&err);
    assert!(
        rendered.starts_with("error: failed to read /definitely/not/here.php: "),
        "{rendered}"
    );
    assert!(!rendered.contains('\n'));
}

#[test]
fn test_render_joins_errors_with_newline() {
    let first = convert_ast_json("{}", "a.json").unwrap_err();
    let second = convert_ast_json("[", "b.json").unwrap_err();
    let rendered = Reporter::new(false).render(&[first, second]);
    assert_eq!(rendered.lines().count(), 2);
    assert!(rendered.starts_with("a.json - error: "));
    assert!(rendered.contains("\nb.json - error: invalid AST dump: invalid AST JSON: "));
}

#[test]
fn test_color_output_keeps_message() {
    colored::control::set_override(true);
    let err = convert_source("<?php echo 1;", "color.php").unwrap_err();
    let rendered = Reporter::new(true).format_error(&err);
    colored::control::unset_override();
    assert!(rendered.contains("\u{1b}["), "{rendered:?}");
    assert!(rendered.contains("unsupported node kind `Stmt_Echo`"));
}
