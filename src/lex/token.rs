use subenum::subenum;

#[subenum(KeywordKind, BinaryOpKind)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[subenum(KeywordKind)]
    VOID,

    NOT,
    AMP,

    #[subenum(BinaryOpKind)]
    STAR,

    #[subenum(BinaryOpKind)]
    SLASH,

    #[subenum(BinaryOpKind)]
    PERCENT,

    #[subenum(BinaryOpKind)]
    PLUS,

    #[subenum(BinaryOpKind)]
    MINUS,

    #[subenum(BinaryOpKind)]
    SHL,

    #[subenum(BinaryOpKind)]
    SHR,

    #[subenum(BinaryOpKind)]
    LT,

    #[subenum(BinaryOpKind)]
    LE,

    #[subenum(BinaryOpKind)]
    GT,

    #[subenum(BinaryOpKind)]
    GE,

    #[subenum(BinaryOpKind)]
    EQEQ,

    #[subenum(BinaryOpKind)]
    NE,

    #[subenum(BinaryOpKind)]
    ANDAND,

    #[subenum(BinaryOpKind)]
    OROR,

    LPAREN,
    RPAREN,
    SEMI,

    INT,
    ID,
    EOF,
}

impl KeywordKind {
    pub fn spelling(&self) -> &'static str {
        match self {
            KeywordKind::VOID => "void",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'s> {
    kind: TokenKind,
    lexeme: &'s str,
    // byte offset of the lexeme in the full input, so diagnostics can
    // quote the unconsumed remainder from here on
    start: usize,
}

impl<'s> Token<'s> {
    pub fn new(kind: TokenKind, lexeme: &'s str, start: usize) -> Self {
        Token { kind, lexeme, start }
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn lexeme(&self) -> &'s str {
        self.lexeme
    }

    pub fn start(&self) -> usize {
        self.start
    }
}
