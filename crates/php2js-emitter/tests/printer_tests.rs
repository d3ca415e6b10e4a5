use super::*;
use php2js_common::Span;
use php2js_common::limits::CONVERT_STACK_SIZE;

fn printer() -> Printer<'static> {
    Printer::new(EmitContext::new("test.php"))
}

fn var(name: &str) -> Node {
    Node::synthetic(NodeKind::Variable { name: name.into() })
}

#[test]
fn test_fast_paths_unwrap() {
    let mut printer = printer();
    let expr = Node::synthetic(NodeKind::Expression {
        expr: Node::synthetic(NodeKind::Argument {
            value: var("x").boxed(),
        })
        .boxed(),
    });
    assert_eq!(printer.emit(&expr).unwrap(), "x");

    let param = Node::synthetic(NodeKind::Parameter {
        var: var("e").boxed(),
    });
    assert_eq!(printer.emit(&param).unwrap(), "e");
}

#[test]
fn test_numbers_pass_through() {
    let mut printer = printer();
    assert_eq!(printer.emit(&Node::synthetic(NodeKind::Int { value: 4 })).unwrap(), "4");
    assert_eq!(printer.emit(&Node::synthetic(NodeKind::Int { value: -7 })).unwrap(), "-7");
    assert_eq!(
        printer.emit(&Node::synthetic(NodeKind::Float { value: 3.14 })).unwrap(),
        "3.14"
    );
    assert_eq!(
        printer.emit(&Node::synthetic(NodeKind::Float { value: 0.5 })).unwrap(),
        "0.5"
    );
}

#[test]
fn test_other_is_unsupported() {
    let node = Node::new(
        NodeKind::Other {
            kind: "Stmt_Echo".into(),
            children: Vec::new(),
        },
        Span::new(6, 14),
    );
    assert_eq!(
        printer().emit(&node),
        Err(EmitError::UnsupportedNodeKind {
            kind: "Stmt_Echo".into(),
            span: Span::new(6, 14),
        })
    );
}

#[test]
fn test_first_failure_aborts_list() {
    let nodes = vec![
        var("a"),
        Node::synthetic(NodeKind::Other {
            kind: "Expr_BinaryOp_Mul".into(),
            children: Vec::new(),
        }),
        var("b"),
    ];
    let err = printer().emit_list(&nodes, ", ").unwrap_err();
    assert!(matches!(
        err,
        EmitError::UnsupportedNodeKind { ref kind, .. } if kind == "Expr_BinaryOp_Mul"
    ));
}

#[test]
fn test_emit_list_separators() {
    let nodes = vec![var("a"), var("b"), var("c")];
    assert_eq!(printer().emit_list(&nodes, ", ").unwrap(), "a, b, c");
    assert_eq!(printer().emit_program(&nodes).unwrap(), "a\n\nb\n\nc");
    assert_eq!(printer().emit_program(&[]).unwrap(), "");
}

#[test]
fn test_depth_is_restored_after_error() {
    let mut printer = printer();
    let bad = Node::synthetic(NodeKind::Expression {
        expr: Node::synthetic(NodeKind::Other {
            kind: "Stmt_Echo".into(),
            children: Vec::new(),
        })
        .boxed(),
    });
    assert!(printer.emit(&bad).is_err());
    assert_eq!(printer.depth, 0);
    assert_eq!(printer.emit(&var("ok")).unwrap(), "ok");
}

#[test]
fn test_nesting_limit() {
    // Built and dropped on a large stack: the tree itself is deeper than
    // the emit limit.
    let handle = std::thread::Builder::new()
        .stack_size(CONVERT_STACK_SIZE)
        .spawn(|| {
            let mut node = var("x");
            for _ in 0..(MAX_EMIT_DEPTH + 10) {
                node = Node::synthetic(NodeKind::Concat {
                    left: node.boxed(),
                    right: var("y").boxed(),
                });
            }
            printer().emit(&node)
        })
        .expect("spawn emitter thread");
    let result = handle.join().expect("emitter thread panicked");
    assert!(matches!(result, Err(EmitError::NestingTooDeep { .. })));
}

#[test]
fn test_nesting_below_limit_is_fine() {
    let handle = std::thread::Builder::new()
        .stack_size(CONVERT_STACK_SIZE)
        .spawn(|| {
            let mut node = var("x");
            for _ in 0..100 {
                node = Node::synthetic(NodeKind::Concat {
                    left: node.boxed(),
                    right: var("y").boxed(),
                });
            }
            printer().emit(&node)
        })
        .expect("spawn emitter thread");
    let output = handle.join().expect("emitter thread panicked").unwrap();
    assert!(output.starts_with("x + y + y"));
    assert_eq!(output.matches(" + ").count(), 100);
}

#[test]
fn test_context_snippet() {
    let source = "<?php echo 1;";
    let printer = Printer::new(EmitContext::with_source("a.php", source));
    assert_eq!(printer.context().snippet(Span::new(6, 13)), Some("echo 1;"));
    assert_eq!(printer.context().snippet(Span::dummy()), None);
    assert_eq!(EmitContext::new("b.json").snippet(Span::new(0, 1)), None);
}
