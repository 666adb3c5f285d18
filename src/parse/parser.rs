use crate::ast::decl::VarDecl;
use crate::ast::expr::{ BinaryExpr, Expr, UnaryExpr };
use crate::ast::op::{ BinaryOp, UnaryOp };
use crate::ast::ty::{ PtrType, Type };
use crate::error::ParseError;
use crate::lex::cached_lexer::CachedLexer;
use crate::lex::token::{ BinaryOpKind, Token, TokenKind };

/*
 * *** Parser Rule ***
 *
 * see PARSER_RULES in parse/mod.rs for the grammar this implements.
 *
 * Binary tiers match their operator at most once: the right operand is
 * parsed one tier up and never re-enters the current tier, so a chain
 * like `a + b + c` stops after `a + b` and leaves `+ c` unconsumed.
 * This mirrors the language definition exactly and is pinned by tests.
 */
pub struct Parser<'s> {
    lexer: CachedLexer<'s>,
    prec_table: BinOpPrec,
}

impl<'s> Parser<'s> {
    pub fn new(lexer: CachedLexer<'s>) -> Self {
        Self { lexer, prec_table: BinOpPrec::new() }
    }

    fn rest_from(&self, tok: &Token) -> String {
        self.lexer.input()[tok.start()..].to_string()
    }

    fn expect(&mut self, kind: TokenKind, what: &'static str) -> Result<Token<'s>, ParseError> {
        let tok = self.lexer.lex()?;
        if *tok.kind() == kind {
            Ok(tok)
        }
        else {
            Err(ParseError::syntax(what, self.rest_from(&tok)))
        }
    }

    /// Succeeds only if the whole input has been consumed.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        let tok = self.lexer.peek()?.clone();
        if *tok.kind() == TokenKind::EOF {
            Ok(())
        }
        else {
            Err(ParseError::incomplete(self.rest_from(&tok)))
        }
    }

    /// Parses the longest expression prefix, leaving the rest (a trailing
    /// `;`, a closing paren, an unmatched operator) for the caller.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_expr(0)
    }

    fn parse_binary_expr(&mut self, prec: usize) -> Result<Expr, ParseError> {
        let parse_next_prec: Box<dyn Fn(&mut Parser<'s>) -> Result<Expr, ParseError>> =
            if prec == self.prec_table.max_prec() {
                Box::new(|this: &mut Self| { this.parse_ref_expr() })
            }
            else {
                Box::new(move |this: &mut Self| { this.parse_binary_expr(prec + 1) })
            };

        let lhs = parse_next_prec(self)?;

        if let Ok(op_kind) = TryInto::<BinaryOpKind>::try_into(self.lexer.peek()?.kind().clone()) {
            if self.prec_table.ops_with_prec(prec).contains(&op_kind.into()) {
                self.lexer.lex()?;
                let rhs = parse_next_prec(self)?;

                return Ok(Expr::Binary(Box::new(
                    BinaryExpr::new(op_kind.into(), lhs, rhs)
                )));
            }
        }

        Ok(lhs)
    }

    // the prefix tiers each consume their marker at most once and wrap
    // the next tier down, so `*&!x` nests while `**x` is rejected
    fn parse_ref_expr(&mut self) -> Result<Expr, ParseError> {
        if *self.lexer.peek()?.kind() == TokenKind::STAR {
            self.lexer.lex()?;
            let operand = self.parse_dref_expr()?;

            Ok(Expr::Unary(Box::new(UnaryExpr::new(UnaryOp::Ref, operand))))
        }
        else {
            self.parse_dref_expr()
        }
    }

    fn parse_dref_expr(&mut self) -> Result<Expr, ParseError> {
        if *self.lexer.peek()?.kind() == TokenKind::AMP {
            self.lexer.lex()?;
            let operand = self.parse_not_expr()?;

            Ok(Expr::Unary(Box::new(UnaryExpr::new(UnaryOp::Dref, operand))))
        }
        else {
            self.parse_not_expr()
        }
    }

    fn parse_not_expr(&mut self) -> Result<Expr, ParseError> {
        if *self.lexer.peek()?.kind() == TokenKind::NOT {
            self.lexer.lex()?;
            let operand = self.parse_primary_expr()?;

            Ok(Expr::Unary(Box::new(UnaryExpr::new(UnaryOp::Not, operand))))
        }
        else {
            self.parse_primary_expr()
        }
    }

    fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        let tok = self.lexer.peek()?.clone();

        match tok.kind() {
            TokenKind::ID => {
                self.lexer.lex()?;
                Ok(Expr::Ident(tok.lexeme().to_string()))
            }

            TokenKind::INT => {
                self.lexer.lex()?;
                self.int_literal(tok.lexeme(), &tok)
            }

            // a sign at atom position belongs to the literal, as in
            // `2 - -3`; binary +/- never reach here because the additive
            // tier consumes them whenever a left operand exists
            TokenKind::PLUS | TokenKind::MINUS => {
                self.lexer.lex()?;
                let int = self.expect(TokenKind::INT, "an integer literal")?;
                let text = format!("{}{}", tok.lexeme(), int.lexeme());

                self.int_literal(&text, &tok)
            }

            TokenKind::LPAREN => {
                self.lexer.lex()?;
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RPAREN, "')'")?;

                Ok(expr)
            }

            _ => Err(ParseError::syntax("an expression", self.rest_from(&tok))),
        }
    }

    // parsing the signed text directly lets i32::MIN through, negating
    // after the fact would overflow first
    fn int_literal(&self, text: &str, at: &Token) -> Result<Expr, ParseError> {
        match text.parse::<i32>() {
            Ok(value) => Ok(Expr::Int(value)),
            Err(_) => Err(ParseError::syntax(
                "an integer literal in range", self.rest_from(at)
            )),
        }
    }

    pub fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let ty = self.parse_type()?;
        let name = self.expect(TokenKind::ID, "an identifier")?;
        self.expect(TokenKind::SEMI, "';'")?;

        Ok(VarDecl::new(ty, name.lexeme().to_string()))
    }

    fn parse_type(&mut self) -> Result<Type, ParseError> {
        self.expect(TokenKind::VOID, "'void'")?;

        // stars accumulate left to right: void** is ptr(ptr(void))
        let mut ty = Type::Void;
        while *self.lexer.peek()?.kind() == TokenKind::STAR {
            self.lexer.lex()?;
            ty = Type::Ptr(Box::new(PtrType::new(ty)));
        }

        Ok(ty)
    }
}

struct BinOpPrec {
    prec_table: Vec<Vec<BinaryOp>>,
}

impl BinOpPrec {
    pub fn new() -> Self {
        // lowest binding first; Mod is deliberately absent, '%' is lexed
        // but no tier of the grammar matches it
        let table = vec![
            vec![BinaryOp::Lor],
            vec![BinaryOp::Land],
            vec![BinaryOp::Eq, BinaryOp::Ne],
            vec![BinaryOp::Lt, BinaryOp::Le, BinaryOp::Gt, BinaryOp::Ge],
            vec![BinaryOp::Shfl, BinaryOp::Shfr],
            vec![BinaryOp::Add, BinaryOp::Sub],
            vec![BinaryOp::Mul, BinaryOp::Div],
        ];

        Self { prec_table: table }
    }

    pub fn ops_with_prec(&self, prec: usize) -> &Vec<BinaryOp> {
        &self.prec_table[prec]
    }

    pub fn max_prec(&self) -> usize {
        self.prec_table.len() - 1
    }
}
