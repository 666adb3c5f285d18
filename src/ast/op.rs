use subenum::subenum;

use crate::lex::token::BinaryOpKind;

// `Ref` spells "*" and `Dref` spells "&": taking a reference uses the
// star in this language, dereferencing uses the ampersand.
#[subenum(UnaryOp, BinaryOp)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    #[subenum(UnaryOp)]
    Not,

    #[subenum(UnaryOp)]
    Dref,

    #[subenum(UnaryOp)]
    Ref,

    #[subenum(BinaryOp)]
    Mul,

    #[subenum(BinaryOp)]
    Div,

    #[subenum(BinaryOp)]
    Mod,

    #[subenum(BinaryOp)]
    Add,

    #[subenum(BinaryOp)]
    Sub,

    #[subenum(BinaryOp)]
    Shfl,

    #[subenum(BinaryOp)]
    Shfr,

    #[subenum(BinaryOp)]
    Lt,

    #[subenum(BinaryOp)]
    Le,

    #[subenum(BinaryOp)]
    Gt,

    #[subenum(BinaryOp)]
    Ge,

    #[subenum(BinaryOp)]
    Eq,

    #[subenum(BinaryOp)]
    Ne,

    #[subenum(BinaryOp)]
    Land,

    #[subenum(BinaryOp)]
    Lor,
}

impl Operator {
    /// Canonical text form, used both for matching input and for rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::Dref => "&",
            Operator::Ref => "*",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Shfl => "<<",
            Operator::Shfr => ">>",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Land => "&&",
            Operator::Lor => "||",
        }
    }
}

impl From<BinaryOpKind> for BinaryOp {
    fn from(kind: BinaryOpKind) -> Self {
        match kind {
            BinaryOpKind::STAR => BinaryOp::Mul,
            BinaryOpKind::SLASH => BinaryOp::Div,
            BinaryOpKind::PERCENT => BinaryOp::Mod,
            BinaryOpKind::PLUS => BinaryOp::Add,
            BinaryOpKind::MINUS => BinaryOp::Sub,
            BinaryOpKind::SHL => BinaryOp::Shfl,
            BinaryOpKind::SHR => BinaryOp::Shfr,
            BinaryOpKind::LT => BinaryOp::Lt,
            BinaryOpKind::LE => BinaryOp::Le,
            BinaryOpKind::GT => BinaryOp::Gt,
            BinaryOpKind::GE => BinaryOp::Ge,
            BinaryOpKind::EQEQ => BinaryOp::Eq,
            BinaryOpKind::NE => BinaryOp::Ne,
            BinaryOpKind::ANDAND => BinaryOp::Land,
            BinaryOpKind::OROR => BinaryOp::Lor,
        }
    }
}
