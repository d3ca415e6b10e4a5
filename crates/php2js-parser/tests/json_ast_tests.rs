//! Integration tests for the php-parser JSON dump reader

use php2js_common::Span;
use php2js_parser::{Modifiers, NodeKind, parse_ast_json};

/// `$console->log(new Person("Åsmund"));` as dumped by php-parser 5.x.
const METHOD_CALL_V5: &str = r#"[
    {
        "nodeType": "Stmt_Expression",
        "expr": {
            "nodeType": "Expr_MethodCall",
            "var": {
                "nodeType": "Expr_Variable",
                "name": "console",
                "attributes": { "startLine": 1, "startFilePos": 6, "endFilePos": 13 }
            },
            "name": { "nodeType": "Identifier", "name": "log", "attributes": {} },
            "args": [
                {
                    "nodeType": "Arg",
                    "name": null,
                    "value": {
                        "nodeType": "Expr_New",
                        "class": { "nodeType": "Name", "name": "Person", "attributes": {} },
                        "args": [
                            {
                                "nodeType": "Arg",
                                "name": null,
                                "value": { "nodeType": "Scalar_String", "value": "Åsmund", "attributes": {} },
                                "byRef": false,
                                "unpack": false,
                                "attributes": {}
                            }
                        ],
                        "attributes": {}
                    },
                    "byRef": false,
                    "unpack": false,
                    "attributes": {}
                }
            ],
            "attributes": {}
        },
        "attributes": {}
    }
]"#;

#[test]
fn test_reads_method_call_dump() {
    let stmts = parse_ast_json(METHOD_CALL_V5).expect("dump should read");
    assert_eq!(stmts.len(), 1);
    let NodeKind::Expression { expr } = &stmts[0].kind else {
        panic!("expected expression statement");
    };
    let NodeKind::MethodCall { target, method, args } = &expr.kind else {
        panic!("expected method call");
    };
    assert_eq!(target.kind, NodeKind::Variable { name: "console".into() });
    assert_eq!(target.span, Span::new(6, 14));
    assert_eq!(method.kind, NodeKind::Identifier { name: "log".into() });
    let NodeKind::Argument { value } = &args[0].kind else {
        panic!("expected argument");
    };
    let NodeKind::New { class, args } = &value.kind else {
        panic!("expected new");
    };
    assert_eq!(
        class.kind,
        NodeKind::Name {
            parts: vec!["Person".into()],
            fully_qualified: false
        }
    );
    assert_eq!(args.len(), 1);
}

#[test]
fn test_missing_positions_give_dummy_spans() {
    let stmts = parse_ast_json(METHOD_CALL_V5).expect("dump should read");
    assert!(stmts[0].span.is_dummy());
}

#[test]
fn test_reads_v4_node_names() {
    let json = r#"[
        {
            "nodeType": "Stmt_Expression",
            "expr": {
                "nodeType": "Expr_Array",
                "items": [
                    {
                        "nodeType": "Expr_ArrayItem",
                        "key": null,
                        "value": { "nodeType": "Scalar_LNumber", "value": 4 },
                        "byRef": false,
                        "unpack": false
                    },
                    null,
                    {
                        "nodeType": "Expr_ArrayItem",
                        "key": { "nodeType": "Scalar_String", "value": "pi" },
                        "value": { "nodeType": "Scalar_DNumber", "value": 3.14 },
                        "byRef": false,
                        "unpack": false
                    }
                ]
            }
        },
        {
            "nodeType": "Stmt_Expression",
            "expr": {
                "nodeType": "Expr_ConstFetch",
                "name": { "nodeType": "Name", "parts": ["Foo", "BAR"] }
            }
        }
    ]"#;
    let stmts = parse_ast_json(json).expect("dump should read");

    let NodeKind::Expression { expr } = &stmts[0].kind else {
        panic!("expected expression statement");
    };
    let NodeKind::Array { items } = &expr.kind else {
        panic!("expected array");
    };
    assert_eq!(items.len(), 3);
    assert!(items[1].is_none());
    let Some(NodeKind::ArrayItem { key: None, value }) = items[0].as_ref().map(|n| &n.kind) else {
        panic!("expected positional item");
    };
    assert_eq!(value.kind, NodeKind::Int { value: 4 });
    let Some(NodeKind::ArrayItem {
        key: Some(_),
        value,
    }) = items[2].as_ref().map(|n| &n.kind)
    else {
        panic!("expected keyed item");
    };
    assert_eq!(value.kind, NodeKind::Float { value: 3.14 });

    let NodeKind::Expression { expr } = &stmts[1].kind else {
        panic!("expected expression statement");
    };
    let NodeKind::ConstFetch { name } = &expr.kind else {
        panic!("expected constant fetch");
    };
    assert_eq!(
        name.kind,
        NodeKind::Name {
            parts: vec!["Foo".into(), "BAR".into()],
            fully_qualified: false
        }
    );
}

#[test]
fn test_reads_class_declaration() {
    let json = r#"[
        {
            "nodeType": "Stmt_Class",
            "attrGroups": [],
            "flags": 0,
            "name": { "nodeType": "Identifier", "name": "Person" },
            "extends": null,
            "implements": [],
            "stmts": [
                {
                    "nodeType": "Stmt_Property",
                    "flags": 12,
                    "type": null,
                    "props": [
                        {
                            "nodeType": "Stmt_PropertyProperty",
                            "name": { "nodeType": "VarLikeIdentifier", "name": "anyValue" },
                            "default": { "nodeType": "Scalar_String", "value": "a" }
                        }
                    ],
                    "attrGroups": []
                },
                {
                    "nodeType": "Stmt_ClassMethod",
                    "flags": 1,
                    "byRef": false,
                    "name": { "nodeType": "Identifier", "name": "__construct" },
                    "params": [
                        {
                            "nodeType": "Param",
                            "type": { "nodeType": "Identifier", "name": "string" },
                            "byRef": false,
                            "variadic": false,
                            "var": { "nodeType": "Expr_Variable", "name": "name" },
                            "default": null,
                            "flags": 0,
                            "attrGroups": []
                        }
                    ],
                    "returnType": null,
                    "stmts": [],
                    "attrGroups": []
                },
                {
                    "nodeType": "Stmt_ClassMethod",
                    "flags": 17,
                    "byRef": false,
                    "name": { "nodeType": "Identifier", "name": "run" },
                    "params": [],
                    "returnType": null,
                    "stmts": null,
                    "attrGroups": []
                }
            ],
            "namespacedName": { "nodeType": "Name", "name": "Person" }
        }
    ]"#;
    let stmts = parse_ast_json(json).expect("dump should read");
    let NodeKind::Class {
        namespaced_name,
        members,
        ..
    } = &stmts[0].kind
    else {
        panic!("expected class");
    };
    assert!(namespaced_name.is_some());
    assert_eq!(members.len(), 3);

    let NodeKind::Property { modifiers, props } = &members[0].kind else {
        panic!("expected property");
    };
    assert_eq!(*modifiers, Modifiers::PRIVATE | Modifiers::STATIC);
    let NodeKind::PropertyItem { name, .. } = &props[0].kind else {
        panic!("expected property item");
    };
    assert_eq!(name.kind, NodeKind::Identifier { name: "anyValue".into() });

    let NodeKind::ClassMethod { params, body, .. } = &members[1].kind else {
        panic!("expected method");
    };
    assert_eq!(params.len(), 1);
    assert_eq!(body.as_ref().map(Vec::len), Some(0));

    let NodeKind::ClassMethod { modifiers, body, .. } = &members[2].kind else {
        panic!("expected method");
    };
    assert_eq!(*modifiers, Modifiers::PUBLIC | Modifiers::ABSTRACT);
    assert!(body.is_none());
}

#[test]
fn test_closure_uses_become_variables() {
    let json = r#"[
        {
            "nodeType": "Stmt_Expression",
            "expr": {
                "nodeType": "Expr_Closure",
                "static": false,
                "byRef": false,
                "params": [],
                "uses": [
                    {
                        "nodeType": "ClosureUse",
                        "var": { "nodeType": "Expr_Variable", "name": "total" },
                        "byRef": false
                    }
                ],
                "returnType": null,
                "stmts": [ { "nodeType": "Stmt_Return", "expr": null } ]
            }
        }
    ]"#;
    let stmts = parse_ast_json(json).expect("dump should read");
    let NodeKind::Expression { expr } = &stmts[0].kind else {
        panic!("expected expression statement");
    };
    let NodeKind::Closure { uses, stmts, .. } = &expr.kind else {
        panic!("expected closure");
    };
    assert_eq!(uses[0].kind, NodeKind::Variable { name: "total".into() });
    assert_eq!(stmts[0].kind, NodeKind::Return { expr: None });
}

#[test]
fn test_unknown_node_types_become_other() {
    let json = r#"[
        { "nodeType": "Stmt_Echo", "exprs": [ { "nodeType": "Scalar_Int", "value": 1 } ] },
        { "nodeType": "Stmt_Expression", "expr": {
            "nodeType": "Expr_FuncCall",
            "name": { "nodeType": "Name_Relative", "name": "foo" },
            "args": []
        } }
    ]"#;
    let stmts = parse_ast_json(json).expect("dump should read");
    assert_eq!(
        stmts[0].kind,
        NodeKind::Other {
            kind: "Stmt_Echo".into(),
            children: Vec::new()
        }
    );
    let NodeKind::Expression { expr } = &stmts[1].kind else {
        panic!("expected expression statement");
    };
    let NodeKind::FunctionCall { name, .. } = &expr.kind else {
        panic!("expected function call");
    };
    assert_eq!(name.kind_name(), "Name_Relative");
}

#[test]
fn test_rejects_malformed_json() {
    let err = parse_ast_json("[{").expect_err("should fail");
    assert!(err.message.starts_with("invalid AST JSON:"), "{}", err.message);

    let err = parse_ast_json("{}").expect_err("should fail");
    assert_eq!(err.message, "invalid AST JSON: expected an array of statements");

    let err = parse_ast_json(r#"[{ "expr": null }]"#).expect_err("should fail");
    assert_eq!(err.message, "invalid AST JSON: node without `nodeType`");
}

#[test]
fn test_rejects_missing_children() {
    let err = parse_ast_json(r#"[{ "nodeType": "Stmt_Expression" }]"#).expect_err("should fail");
    assert_eq!(err.message, "missing `expr` in Stmt_Expression");
}

#[test]
fn test_rejects_meaning_losing_flags() {
    let inheritance = r#"[{
        "nodeType": "Stmt_Class",
        "name": { "nodeType": "Identifier", "name": "A" },
        "extends": { "nodeType": "Name", "name": "B" },
        "implements": [],
        "stmts": []
    }]"#;
    let err = parse_ast_json(inheritance).expect_err("should fail");
    assert_eq!(err.message, "class inheritance is not supported in Stmt_Class");

    let named_arg = r#"[{ "nodeType": "Arg",
        "name": { "nodeType": "Identifier", "name": "body" },
        "value": { "nodeType": "Scalar_Int", "value": 1 },
        "byRef": false, "unpack": false }]"#;
    let err = parse_ast_json(named_arg).expect_err("should fail");
    assert_eq!(err.message, "named arguments are not supported in Arg");

    let promoted = r#"[{ "nodeType": "Param",
        "var": { "nodeType": "Expr_Variable", "name": "a" },
        "default": null, "byRef": false, "variadic": false, "flags": 4 }]"#;
    let err = parse_ast_json(promoted).expect_err("should fail");
    assert_eq!(err.message, "constructor property promotion is not supported in Param");
}
