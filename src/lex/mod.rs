pub mod token;
pub mod lexer;
mod keyword;
pub mod cached_lexer;

use crate::error::ParseError;
use crate::lex::lexer::Lexer;
use crate::lex::token::{ Token, TokenKind::EOF };

pub const LEXER_RULES: &'static str = r#"
VOID : 'void';

NOT : '!';
AMP : '&';
STAR : '*';
SLASH : '/';
PERCENT : '%';
PLUS : '+';
MINUS : '-';
SHL : '<<';
SHR : '>>';
LT : '<';
LE : '<=';
GT : '>';
GE : '>=';
EQEQ : '==';
NE : '!=';
ANDAND : '&&';
OROR : '||';
LPAREN : '(' ;
RPAREN : ')' ;
SEMI : ';' ;

INT : [0-9]+;
ID: [a-zA-Z_][a-zA-Z_0-9]*;
WS: [ \t\n\r\f]+ -> skip ;
"#;

pub fn lex_all(src: &str) -> Result<Vec<Token>, ParseError> {
    let mut lx = Lexer::new(src);
    let mut out = Vec::new();

    loop {
        let tok = lx.lex()?;
        let eof = *tok.kind() == EOF;
        out.push(tok);
        if eof { break; }
    }

    Ok(out)
}
