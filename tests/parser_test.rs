// Integration tests for the minimal C parser

use minic::parser::ast::{Node, NodeKind};
use minic::parser::parse::{Parser, SyntaxError};
use minic::parser::token::{Token, TokenKind};
use minic::{compile, CompileError};

fn tok(kind: TokenKind, text: &str, offset: usize) -> Token {
    Token::new(kind, text, offset)
}

#[test]
fn single_function_program_has_one_declaration_at_root() {
    let root = compile("int main() { return 0; }").expect("parsing failed");

    assert_eq!(root.kind(), NodeKind::Block);
    assert_eq!(root.children().len(), 1);
    match &root.children()[0] {
        Node::FunctionDef { name, body, .. } => {
            assert_eq!(name, "main");
            assert_eq!(body.kind(), NodeKind::Block);
        }
        other => panic!("expected function declaration, got {:?}", other),
    }
}

#[test]
fn raw_tokens_disambiguate_function_from_variable() {
    // int f ( ) { }  →  function declaration
    let tokens = vec![
        tok(TokenKind::Keyword, "int", 0),
        tok(TokenKind::Identifier, "f", 4),
        tok(TokenKind::Punctuator, "(", 5),
        tok(TokenKind::Punctuator, ")", 6),
        tok(TokenKind::Punctuator, "{", 8),
        tok(TokenKind::Punctuator, "}", 9),
    ];
    let root = Parser::new(tokens).parse_program().expect("parsing failed");
    match root.children() {
        [Node::FunctionDef { name, params, body, .. }] => {
            assert_eq!(name, "f");
            assert!(params.is_empty());
            assert!(body.children().is_empty());
        }
        other => panic!("expected function declaration, got {:?}", other),
    }

    // int x ;  →  variable declaration
    let tokens = vec![
        tok(TokenKind::Keyword, "int", 0),
        tok(TokenKind::Identifier, "x", 4),
        tok(TokenKind::Punctuator, ";", 5),
    ];
    let root = Parser::new(tokens).parse_program().expect("parsing failed");
    match root.children() {
        [Node::VarDecl { name, init, .. }] => {
            assert_eq!(name, "x");
            assert!(init.is_none());
        }
        other => panic!("expected variable declaration, got {:?}", other),
    }
}

#[test]
fn if_statement_else_branch_is_optional() {
    let root = compile("if (1) return 1; else return 2;").expect("parsing failed");
    match &root.children()[0] {
        Node::If { else_branch, .. } => {
            assert!(matches!(
                else_branch.as_deref(),
                Some(Node::Return { expr: Some(_) })
            ));
        }
        other => panic!("expected if statement, got {:?}", other),
    }

    let root = compile("if (1) return 1;").expect("parsing failed");
    match &root.children()[0] {
        Node::If { else_branch, .. } => assert!(else_branch.is_none()),
        other => panic!("expected if statement, got {:?}", other),
    }
}

#[test]
fn for_loop_clause_shapes() {
    let root = compile("for (int i = 0; i < 10; i ++) { }").expect("parsing failed");

    match &root.children()[0] {
        Node::For {
            init,
            condition,
            update,
            body,
        } => {
            assert!(matches!(init.as_ref(), Node::VarDecl { init: Some(_), .. }));
            match condition.as_ref() {
                Node::BinaryOp { op, left, right } => {
                    assert_eq!(op, "<");
                    assert!(matches!(left.as_deref(), Some(Node::Identifier { .. })));
                    assert!(matches!(right.as_ref(), Node::Literal { .. }));
                }
                other => panic!("expected comparison condition, got {:?}", other),
            }
            match update.as_ref() {
                Node::UnaryOp { op, operand } => {
                    assert_eq!(op, "++");
                    assert!(matches!(operand.as_ref(), Node::Identifier { .. }));
                }
                other => panic!("expected post-increment update, got {:?}", other),
            }
            assert_eq!(body.kind(), NodeKind::Block);
            assert!(body.children().is_empty());
        }
        other => panic!("expected for statement, got {:?}", other),
    }
}

#[test]
fn for_update_accepts_terminated_form_too() {
    // The semicolon-terminated update of the original grammar still parses.
    let root = compile("for (int i = 0; i < 3; i ++;) i ++;").expect("parsing failed");
    assert_eq!(root.children()[0].kind(), NodeKind::For);
}

#[test]
fn for_init_may_be_any_statement() {
    // The grammar's documented looseness: the init clause runs through the
    // general statement rule.
    let root = compile("for (f(); 1; i ++) { }").expect("parsing failed");
    match &root.children()[0] {
        Node::For { init, .. } => assert_eq!(init.kind(), NodeKind::Call),
        other => panic!("expected for statement, got {:?}", other),
    }
}

#[test]
fn call_and_post_increment_statements() {
    let root = compile("int main() { print(1, 2); i ++; }").expect("parsing failed");
    match &root.children()[0] {
        Node::FunctionDef { body, .. } => {
            assert_eq!(body.children().len(), 2);
            match &body.children()[0] {
                Node::Call { name, args } => {
                    assert_eq!(name, "print");
                    assert_eq!(args.len(), 2);
                }
                other => panic!("expected call statement, got {:?}", other),
            }
            assert_eq!(body.children()[1].kind(), NodeKind::UnaryOp);
        }
        other => panic!("expected function declaration, got {:?}", other),
    }
}

#[test]
fn bare_identifier_statement_is_rejected() {
    let err = compile("int main() { x; }").expect_err("bare identifier must fail");
    match err {
        CompileError::Syntax(SyntaxError::Unexpected { found, .. }) => {
            assert_eq!(found, "x");
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn dangling_token_at_statement_position_fails() {
    let err = compile(")").expect_err("dangling token must fail");
    match err {
        CompileError::Syntax(SyntaxError::Unexpected { found, offset }) => {
            assert_eq!(found, ")");
            assert_eq!(offset, 0);
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn return_without_expression() {
    let root = compile("int stop() { return; }").expect("parsing failed");
    match &root.children()[0] {
        Node::FunctionDef { body, .. } => {
            assert!(matches!(body.children()[0], Node::Return { expr: None }));
        }
        other => panic!("expected function declaration, got {:?}", other),
    }
}

#[test]
fn nested_blocks_keep_source_order() {
    let root = compile("int main() { { int a; } { int b; int c; } }").expect("parsing failed");
    match &root.children()[0] {
        Node::FunctionDef { body, .. } => {
            assert_eq!(body.children().len(), 2);
            assert_eq!(body.children()[0].children().len(), 1);
            assert_eq!(body.children()[1].children().len(), 2);
        }
        other => panic!("expected function declaration, got {:?}", other),
    }
}

#[test]
fn traversal_is_pure_and_repeatable() {
    fn kinds(node: &Node, out: &mut Vec<NodeKind>) {
        out.push(node.kind());
        for child in node.children() {
            kinds(child, out);
        }
    }

    let source = "int main() { for (int i = 0; i < 3; i ++) { print(i); } return 0; }";
    let root = compile(source).expect("parsing failed");

    let mut first = Vec::new();
    kinds(&root, &mut first);
    let mut second = Vec::new();
    kinds(&root, &mut second);
    assert_eq!(first, second);

    // Two independent parses of the same source produce equal trees.
    assert_eq!(root, compile(source).expect("parsing failed"));
}
