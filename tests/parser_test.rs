use voidc::ast::expr::Expr;
use voidc::ast::op::{ BinaryOp, UnaryOp };
use voidc::ast::ty::{ PtrType, Type };
use voidc::error::ParseError;
use voidc::lex::cached_lexer::CachedLexer;
use voidc::parse;
use voidc::parse::parser::Parser;

/* --- atoms --- */

#[test]
fn parse_integer_literal_expr() {
    let expr = parse::parse_expr("123").expect("integer literal should parse");

    assert!(matches!(expr, Expr::Int(123)));
}

#[test]
fn parse_identifier_expr() {
    let expr = parse::parse_expr("_foo42").expect("identifier should parse");

    match expr {
        Expr::Ident(name) => assert_eq!(name, "_foo42"),
        _ => panic!("expected Ident"),
    }
}

#[test]
fn negative_integer_literal_parses() {
    let expr = parse::parse_expr("-7").expect("negative literal should parse");

    assert!(matches!(expr, Expr::Int(-7)));
}

#[test]
fn plus_signed_literal_parses() {
    let expr = parse::parse_expr("+7").expect("plus-signed literal should parse");

    assert!(matches!(expr, Expr::Int(7)));
}

#[test]
fn i32_min_literal_parses() {
    let expr = parse::parse_expr("-2147483648").expect("i32::MIN should parse");

    assert!(matches!(expr, Expr::Int(i32::MIN)));
}

#[test]
fn minus_is_binary_when_a_left_operand_exists() {
    // `2 - -3` => SUB(2, -3): the additive tier takes the first minus,
    // the atom takes the second as the literal's sign
    let expr = parse::parse_expr("2 - -3").expect("expression should parse");

    match expr {
        Expr::Binary(sub) => {
            assert!(matches!(sub.op(), BinaryOp::Sub));
            assert!(matches!(sub.lhs(), Expr::Int(2)));
            assert!(matches!(sub.rhs(), Expr::Int(-3)));
        }
        _ => panic!("root must be a subtraction binary-expr"),
    }
}

#[test]
fn sign_without_digits_is_rejected() {
    // a sign at atom position must be followed by a literal
    let err = parse::parse_expr("-x").expect_err("'-x' must fail");
    match err {
        ParseError::Syntax { expected, rest } => {
            assert_eq!(expected, "an integer literal");
            assert_eq!(rest, "x");
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn out_of_range_literal_is_rejected() {
    // does not fit an i32, in either direction
    assert!(parse::parse_expr("99999999999999999999").is_err());
    assert!(parse::parse_expr("-99999999999999999999").is_err());
    assert!(parse::parse_expr("+2147483648").is_err());
}

/* --- precedence and associativity --- */

#[test]
fn binary_precedence_multiplication_binds_tighter_than_addition() {
    // `1 + 2 * 3` => ADD(1, MUL(2, 3))
    let expr = parse::parse_expr("1 + 2 * 3").expect("expression should parse");

    match expr {
        Expr::Binary(add) => {
            assert!(matches!(add.op(), BinaryOp::Add));
            assert!(matches!(add.lhs(), Expr::Int(1)));
            match add.rhs() {
                Expr::Binary(mul) => {
                    assert!(matches!(mul.op(), BinaryOp::Mul));
                    assert!(matches!(mul.lhs(), Expr::Int(2)));
                    assert!(matches!(mul.rhs(), Expr::Int(3)));
                }
                _ => panic!("right-hand side of add must be a multiplication"),
            }
        }
        _ => panic!("root must be an addition binary-expr"),
    }
}

#[test]
fn binary_parentheses_override_precedence() {
    // `(1 + 2) * 3` => MUL(ADD(1,2), 3)
    let expr = parse::parse_expr("(1 + 2) * 3").expect("expression should parse");

    match expr {
        Expr::Binary(mul) => {
            assert!(matches!(mul.op(), BinaryOp::Mul));
            assert!(matches!(mul.rhs(), Expr::Int(3)));
            match mul.lhs() {
                Expr::Binary(add) => {
                    assert!(matches!(add.op(), BinaryOp::Add));
                    assert!(matches!(add.lhs(), Expr::Int(1)));
                    assert!(matches!(add.rhs(), Expr::Int(2)));
                }
                _ => panic!("left-hand side of multiplication must be an addition"),
            }
        }
        _ => panic!("root must be a multiplication binary-expr"),
    }
}

#[test]
fn parenthesized_atom_leaves_no_residue_in_the_tree() {
    let expr = parse::parse_expr("(1 + 2)").expect("expression should parse");

    match expr {
        Expr::Binary(add) => {
            assert!(matches!(add.op(), BinaryOp::Add));
            assert!(matches!(add.lhs(), Expr::Int(1)));
            assert!(matches!(add.rhs(), Expr::Int(2)));
        }
        _ => panic!("root must be the inner addition"),
    }
}

#[test]
fn logical_tiers_nest_lowest_last() {
    // `a && b || c` => LOR(LAND(a, b), c)
    let expr = parse::parse_expr("a && b || c").expect("expression should parse");

    match expr {
        Expr::Binary(lor) => {
            assert!(matches!(lor.op(), BinaryOp::Lor));
            assert!(matches!(lor.rhs(), Expr::Ident(name) if name == "c"));
            match lor.lhs() {
                Expr::Binary(land) => {
                    assert!(matches!(land.op(), BinaryOp::Land));
                    assert!(matches!(land.lhs(), Expr::Ident(name) if name == "a"));
                    assert!(matches!(land.rhs(), Expr::Ident(name) if name == "b"));
                }
                _ => panic!("left-hand side of || must be the && expression"),
            }
        }
        _ => panic!("root must be a logical-or binary-expr"),
    }
}

#[test]
fn shift_and_comparison_tiers() {
    // `1 << 2 <= 3` => LE(SHL(1, 2), 3)
    let expr = parse::parse_expr("1 << 2 <= 3").expect("expression should parse");

    match expr {
        Expr::Binary(le) => {
            assert!(matches!(le.op(), BinaryOp::Le));
            assert!(matches!(le.rhs(), Expr::Int(3)));
            match le.lhs() {
                Expr::Binary(shl) => {
                    assert!(matches!(shl.op(), BinaryOp::Shfl));
                    assert!(matches!(shl.lhs(), Expr::Int(1)));
                    assert!(matches!(shl.rhs(), Expr::Int(2)));
                }
                _ => panic!("left-hand side of <= must be the shift"),
            }
        }
        _ => panic!("root must be a comparison binary-expr"),
    }
}

/* --- the single-repetition quirk, pinned on purpose --- */

#[test]
fn three_term_chain_stops_after_one_operator() {
    // each binary tier matches its operator at most once, so the prefix
    // parse of `1 + 2 + 3` yields ADD(1, 2) and leaves `+ 3` behind
    let mut parser = Parser::new(CachedLexer::new("1 + 2 + 3"));
    let expr = parser.parse_expr().expect("prefix should parse");

    match expr {
        Expr::Binary(add) => {
            assert!(matches!(add.op(), BinaryOp::Add));
            assert!(matches!(add.lhs(), Expr::Int(1)));
            assert!(matches!(add.rhs(), Expr::Int(2)));
        }
        _ => panic!("prefix must be a single addition"),
    }

    let err = parser.finish().expect_err("trailing `+ 3` must remain");
    assert_eq!(err, ParseError::incomplete("+ 3"));
}

#[test]
fn three_term_chain_is_incomplete_at_top_level() {
    let err = parse::parse_expr("1 + 2 + 3").expect_err("chain must not fully parse");
    assert!(matches!(err, ParseError::Incomplete { .. }));
}

#[test]
fn same_tier_second_operator_ends_the_prefix() {
    // mul tier: lhs 2, one STAR, rhs 3 => no second repetition for `/ 4`
    let mut parser = Parser::new(CachedLexer::new("2 * 3 / 4"));
    let prefix = parser.parse_expr().expect("prefix should parse");
    match prefix {
        Expr::Binary(mul) => assert!(matches!(mul.op(), BinaryOp::Mul)),
        _ => panic!("prefix must be the multiplication"),
    }
    assert_eq!(
        parser.finish().expect_err("`/ 4` must remain"),
        ParseError::incomplete("/ 4"),
    );
}

/* --- prefix operators --- */

#[test]
fn prefix_star_is_reference() {
    let expr = parse::parse_expr("*x").expect("expression should parse");

    match expr {
        Expr::Unary(unary) => {
            assert!(matches!(unary.op(), UnaryOp::Ref));
            assert!(matches!(unary.operand(), Expr::Ident(name) if name == "x"));
        }
        _ => panic!("expected a unary expression"),
    }
}

#[test]
fn prefix_amp_is_dereference() {
    let expr = parse::parse_expr("&x").expect("expression should parse");

    match expr {
        Expr::Unary(unary) => assert!(matches!(unary.op(), UnaryOp::Dref)),
        _ => panic!("expected a unary expression"),
    }
}

#[test]
fn prefix_not() {
    let expr = parse::parse_expr("!x").expect("expression should parse");

    match expr {
        Expr::Unary(unary) => assert!(matches!(unary.op(), UnaryOp::Not)),
        _ => panic!("expected a unary expression"),
    }
}

#[test]
fn prefix_tiers_nest_in_order() {
    // `*&!x` => REF(DREF(NOT(x)))
    let expr = parse::parse_expr("*&!x").expect("expression should parse");

    let Expr::Unary(r) = expr else { panic!("expected ref node") };
    assert!(matches!(r.op(), UnaryOp::Ref));
    let Expr::Unary(d) = r.operand() else { panic!("expected dref node") };
    assert!(matches!(d.op(), UnaryOp::Dref));
    let Expr::Unary(n) = d.operand() else { panic!("expected not node") };
    assert!(matches!(n.op(), UnaryOp::Not));
    assert!(matches!(n.operand(), Expr::Ident(name) if name == "x"));
}

#[test]
fn double_star_prefix_is_rejected() {
    // ref applies once and the dref tier below it cannot match `*`
    assert!(parse::parse_expr("**x").is_err());
}

#[test]
fn star_is_binary_between_operands_and_prefix_before_them() {
    // `*a * *b` => MUL(REF(a), REF(b))
    let expr = parse::parse_expr("*a * *b").expect("expression should parse");

    match expr {
        Expr::Binary(mul) => {
            assert!(matches!(mul.op(), BinaryOp::Mul));
            for side in [mul.lhs(), mul.rhs()] {
                match side {
                    Expr::Unary(unary) => assert!(matches!(unary.op(), UnaryOp::Ref)),
                    _ => panic!("both operands must be ref expressions"),
                }
            }
        }
        _ => panic!("root must be a multiplication"),
    }
}

/* --- percent is lexed but never matched by a tier --- */

#[test]
fn modulo_is_not_part_of_the_expression_grammar() {
    let err = parse::parse_expr("4 % 2").expect_err("no tier matches '%'");
    assert_eq!(err, ParseError::incomplete("% 2"));
}

/* --- declarations --- */

#[test]
fn plain_void_declaration() {
    let decl = parse::parse_var_decl("void x;").expect("declaration should parse");

    assert_eq!(decl.name(), "x");
    assert_eq!(*decl.ty(), Type::Void);
}

#[test]
fn double_pointer_declaration_accumulates_left_to_right() {
    let decl = parse::parse_var_decl("void**p;").expect("declaration should parse");

    assert_eq!(decl.name(), "p");
    let expected = Type::Ptr(Box::new(PtrType::new(
        Type::Ptr(Box::new(PtrType::new(Type::Void)))
    )));
    assert_eq!(*decl.ty(), expected);
}

#[test]
fn whitespace_between_stars_is_insignificant() {
    let decl = parse::parse_var_decl("  void * * p ;  ").expect("declaration should parse");

    assert_eq!(decl.name(), "p");
    assert!(matches!(decl.ty(), Type::Ptr(_)));
}

#[test]
fn declaration_missing_semicolon_fails() {
    let err = parse::parse_var_decl("void x").expect_err("missing ';' must fail");
    assert!(matches!(err, ParseError::Syntax { .. }));
    assert_eq!(err.rest(), "", "failure sits at the end of the input");
}

#[test]
fn declaration_without_void_keyword_fails() {
    let err = parse::parse_var_decl("int x;").expect_err("'int' is not a type");
    match err {
        ParseError::Syntax { expected, rest } => {
            assert_eq!(expected, "'void'");
            assert_eq!(rest, "int x;");
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn declaration_with_literal_name_fails() {
    assert!(parse::parse_var_decl("void 1;").is_err());
}

#[test]
fn trailing_input_after_declaration_is_incomplete() {
    let err = parse::parse_var_decl("void x; void y;").expect_err("two declarations");
    assert_eq!(err, ParseError::incomplete("void y;"));
}

/* --- failure diagnostics --- */

#[test]
fn dangling_operator_reports_expected_expression() {
    let err = parse::parse_expr("1 + ").expect_err("dangling '+' must fail");
    match err {
        ParseError::Syntax { expected, rest } => {
            assert_eq!(expected, "an expression");
            assert_eq!(rest, "");
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn unclosed_paren_reports_expected_rparen() {
    let err = parse::parse_expr("(1 + 2").expect_err("unclosed paren must fail");
    match err {
        ParseError::Syntax { expected, .. } => assert_eq!(expected, "')'"),
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn every_failure_is_retryable() {
    // independent parses share no state, a failure poisons nothing
    assert!(parse::parse_expr("@").is_err());
    assert!(parse::parse_expr("1 + 2").is_ok());
}
