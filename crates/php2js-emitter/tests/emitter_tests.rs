//! End-to-end emitter tests: PHP source through the parser and the printer

use php2js_common::Span;
use php2js_emitter::{EmitContext, EmitError, emit_program};
use php2js_parser::parse_source;

fn translate(source: &str) -> Result<String, EmitError> {
    let stmts = parse_source(source).expect("parse should succeed");
    emit_program(&stmts, EmitContext::with_source("test.php", source))
}

/// Translate a single expression statement.
fn js(code: &str) -> String {
    translate(&format!("<?php {code};")).expect("emit should succeed")
}

/// Count the top-level elements of a JavaScript array literal, ignoring
/// commas inside nested brackets, parentheses and quoted strings.
fn top_level_elements(array: &str) -> usize {
    let inner = &array[1..array.len() - 1];
    if inner.is_empty() {
        return 0;
    }
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escaped = false;
    let mut count = 1;
    for ch in inner.chars() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '\'' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '\'' => in_string = true,
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth -= 1,
            ',' if depth == 0 => count += 1,
            _ => {}
        }
    }
    count
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn test_scenario_array_literal() {
    assert_eq!(js(r#"["A", "B", 3.14, 4, null]"#), "['A', 'B', 3.14, 4, null]");
}

#[test]
fn test_keyed_and_nested_arrays() {
    assert_eq!(js("['a' => 1, 'b' => [2, 3]]"), "['a': 1, 'b': [2, 3]]");
    assert_eq!(js("array(1, 2)"), "[1, 2]");
    assert_eq!(js("[]"), "[]");
}

#[test]
fn test_sparse_array_slot_is_null() {
    assert_eq!(js("[1, , 3]"), "[1, null, 3]");
}

#[test]
fn test_array_element_count_is_preserved() {
    for code in [
        "[f(1, 2), [3, 4], 'x,y']",
        "[1]",
        "[]",
        "['it\\'s', [1, [2, 3]], $a->b(1, 2)]",
        "[1, , 3]",
    ] {
        let output = js(code);
        let expected = match code {
            "[]" => 0,
            "[1]" => 1,
            _ => 3,
        };
        assert_eq!(top_level_elements(&output), expected, "{code} -> {output}");
    }
}

#[test]
fn test_string_escaping() {
    assert_eq!(js(r"'it\'s'"), r"'it\'s'");
    assert_eq!(js(r#""say \"hi\"""#), r#"'say "hi"'"#);
    // a real newline, copied unescaped
    assert_eq!(js(r#""a\nb""#), "'a\nb'");
    assert_eq!(js(r"'C:\\dir'"), r"'C:\dir'");
}

#[test]
fn test_constants_pass_through() {
    assert_eq!(js("true"), "true");
    assert_eq!(js("null"), "null");
    assert_eq!(js("PHP_EOL"), "PHP_EOL");
}

#[test]
fn test_numbers() {
    assert_eq!(js("42"), "42");
    assert_eq!(js("0x1F"), "31");
    assert_eq!(js("1.5"), "1.5");
}

#[test]
fn test_float_overflow_is_infinity() {
    assert_eq!(js("$x = 1e999"), "x = Infinity");
    assert_eq!(js("[1e999, 2.5]"), "[Infinity, 2.5]");
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn test_scenario_object_construction() {
    assert_eq!(js("new Person(\"Åsmund\")"), "(new Person('Åsmund'))");
    assert_eq!(js("new Person"), "(new Person())");
}

#[test]
fn test_construction_binds_before_member_access() {
    assert_eq!(js("(new Person('a'))->greet()"), "(new Person('a')).greet()");
}

#[test]
fn test_method_call_chain() {
    assert_eq!(
        js("$window->addEventListener('load', fn () => $document->getElementById('theDiv'))"),
        "window.addEventListener('load', () => document.getElementById('theDiv'))"
    );
}

#[test]
fn test_function_call() {
    assert_eq!(js("alert('hi', 2)"), "alert('hi', 2)");
    assert_eq!(js("$callback($x)"), "callback(x)");
}

#[test]
fn test_property_and_index_access() {
    assert_eq!(js("$e->target['id']"), "e.target['id']");
    assert_eq!(js("$this->items[0]->name"), "this.items[0].name");
}

#[test]
fn test_dynamic_member_names_are_unsupported() {
    for (code, kind, member) in [
        ("$o->$p", "Expr_PropertyFetch_Dynamic", "$o->$p"),
        ("$o->{'a-b'}", "Expr_PropertyFetch_Dynamic", "$o->{'a-b'}"),
        ("$o->{$p . 'x'}", "Expr_PropertyFetch_Dynamic", "$o->{$p . 'x'}"),
        ("$o->$m()", "Expr_MethodCall_Dynamic", "$o->$m()"),
        ("$o->{'go'}(1)", "Expr_MethodCall_Dynamic", "$o->{'go'}(1)"),
    ] {
        let source = format!("<?php $a = {code};");
        let err = translate(&source).unwrap_err();
        let EmitError::UnsupportedNodeKind { kind: found, span } = &err else {
            panic!("{code}: expected unsupported node kind, got {err:?}");
        };
        assert_eq!(found, kind, "{code}");
        assert_eq!(span.slice(&source), Some(member), "{code}");
    }
}

#[test]
fn test_keyword_member_names_still_translate() {
    assert_eq!(js("$o->class"), "o.class");
    assert_eq!(js("$o->list()"), "o.list()");
}

#[test]
fn test_assignments() {
    assert_eq!(js("$a = $b"), "a = b");
    assert_eq!(js("$a = $b = 1"), "a = b = 1");
    assert_eq!(js("$total += 2"), "total += 2");
}

#[test]
fn test_concatenation_becomes_addition() {
    assert_eq!(js("'Hello, ' . $name"), "'Hello, ' + name");
    assert_eq!(js("$a . $b . $c"), "a + b + c");
}

#[test]
fn test_arrow_functions() {
    assert_eq!(js("fn () => 1"), "() => 1");
    assert_eq!(js("fn ($a, $b) => $a"), "(a, b) => a");
}

#[test]
fn test_closures() {
    assert_eq!(
        js("function ($e) use ($x) { $console->log($e); return $x; }"),
        "function(e){\nconsole.log(e)\nreturn x\n}"
    );
    assert_eq!(js("function () {}"), "function(){\n\n}");
}

// =============================================================================
// Statements and documents
// =============================================================================

#[test]
fn test_top_level_results_are_separated_by_blank_line() {
    assert_eq!(translate("<?php $a = 1; $b = 2;").unwrap(), "a = 1\n\nb = 2");
}

#[test]
fn test_namespace_contributes_only_its_body() {
    assert_eq!(
        translate("<?php namespace A\\B; $a = 1; $b = 2;").unwrap(),
        "a = 1\nb = 2"
    );
    assert_eq!(
        translate("<?php namespace A { $a = 1; } namespace B { $b = 2; }").unwrap(),
        "a = 1\n\nb = 2"
    );
}

#[test]
fn test_return() {
    assert_eq!(translate("<?php return $x;").unwrap(), "return x");
    assert_eq!(translate("<?php return;").unwrap(), "return");
}

#[test]
fn test_empty_file() {
    assert_eq!(translate("<?php\n").unwrap(), "");
}

#[test]
fn test_page_script_fixture() {
    let source = include_str!("../../../tests/fixtures/page_script.php");
    let expected = include_str!("../../../tests/fixtures/page_script.js");
    assert_eq!(translate(source).unwrap(), expected);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_scenario_missing_array_index() {
    let source = "<?php $list[] = 1;";
    let err = translate(source).unwrap_err();
    assert_eq!(err, EmitError::MissingArrayIndex { span: Span::new(6, 13) });
    assert_eq!(err.span().slice(source), Some("$list[]"));
}

#[test]
fn test_scenario_qualified_name() {
    let err = translate("<?php Foo\\bar();").unwrap_err();
    assert!(
        matches!(err, EmitError::UnsupportedNameShape { ref name, .. } if name == "Foo\\bar"),
        "{err:?}"
    );

    let err = translate("<?php \\strlen('a');").unwrap_err();
    assert!(
        matches!(err, EmitError::UnsupportedNameShape { ref name, .. } if name == "\\strlen"),
        "{err:?}"
    );
}

#[test]
fn test_unsupported_statement_names_its_kind() {
    let source = "<?php $a = 1; echo $a;";
    let err = translate(source).unwrap_err();
    let EmitError::UnsupportedNodeKind { kind, span } = &err else {
        panic!("expected unsupported node kind, got {err:?}");
    };
    assert_eq!(kind, "Stmt_Echo");
    assert_eq!(span.slice(source), Some("echo $a;"));
    assert_eq!(err.to_string(), "unsupported node kind `Stmt_Echo`");
}

#[test]
fn test_unsupported_expressions() {
    for (code, kind) in [
        ("$a * 2", "Expr_BinaryOp_Mul"),
        ("-5", "Expr_UnaryMinus"),
        ("Foo::bar()", "Expr_StaticCall"),
        ("\"hi $name\"", "Scalar_InterpolatedString"),
        ("$a -= 1", "Expr_AssignOp_Minus"),
    ] {
        let err = translate(&format!("<?php {code};")).unwrap_err();
        assert!(
            matches!(err, EmitError::UnsupportedNodeKind { kind: ref k, .. } if k == kind),
            "{code}: {err:?}"
        );
    }
}

#[test]
fn test_inline_html_is_unsupported() {
    let err = translate("<p>hi</p>").unwrap_err();
    assert!(matches!(
        err,
        EmitError::UnsupportedNodeKind { ref kind, .. } if kind == "Stmt_InlineHTML"
    ));
}

#[test]
fn test_failure_deep_in_tree_aborts_everything() {
    let err = translate("<?php $ok = 1; $console->log([1, 2, $a * 3]);").unwrap_err();
    assert!(matches!(
        err,
        EmitError::UnsupportedNodeKind { ref kind, .. } if kind == "Expr_BinaryOp_Mul"
    ));
}
