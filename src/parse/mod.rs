pub mod parser;

use crate::ast::decl::VarDecl;
use crate::ast::expr::Expr;
use crate::error::ParseError;
use crate::lex::cached_lexer::CachedLexer;
use crate::parse::parser::Parser;

pub const PARSER_RULES: &'static str = r#"
var_decl
    : type ID SEMI
    ;

type: VOID STAR*
    ;

expr: lor_expr
    ;

lor_expr
    : land_expr (OROR land_expr)?
    ;

land_expr
    : eq_expr (ANDAND eq_expr)?
    ;

eq_expr
    : cmp_expr ((EQEQ | NE) cmp_expr)?
    ;

cmp_expr
    : shf_expr ((LT | LE | GT | GE) shf_expr)?
    ;

shf_expr
    : add_expr ((SHL | SHR) add_expr)?
    ;

add_expr
    : mul_expr ((PLUS | MINUS) mul_expr)?
    ;

mul_expr
    : ref_expr ((STAR | SLASH) ref_expr)?
    ;

ref_expr
    : STAR dref_expr
    | dref_expr
    ;

dref_expr
    : AMP not_expr
    | not_expr
    ;

not_expr
    : NOT primary_expr
    | primary_expr
    ;

primary_expr
    : ID
    | literal
    | paren_expr
    ;

literal
    : (PLUS | MINUS)? INT
    ;

paren_expr
    : LPAREN expr RPAREN
    ;
"#;

/// Parses `src` as a single expression covering the entire input.
pub fn parse_expr(src: &str) -> Result<Expr, ParseError> {
    log::trace!("parsing expression from {} bytes of input", src.len());

    let mut parser = Parser::new(CachedLexer::new(src));
    let expr = parser.parse_expr()?;
    parser.finish()?;

    Ok(expr)
}

/// Parses `src` as a single variable declaration covering the entire input.
pub fn parse_var_decl(src: &str) -> Result<VarDecl, ParseError> {
    log::trace!("parsing declaration from {} bytes of input", src.len());

    let mut parser = Parser::new(CachedLexer::new(src));
    let decl = parser.parse_var_decl()?;
    parser.finish()?;

    Ok(decl)
}
