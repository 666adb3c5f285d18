use crate::ast::op::{ BinaryOp, UnaryOp };

// consider this a union of smart pointers: composite nodes are boxed so
// the variant stays finite while the tree nests arbitrarily deep
#[derive(Clone, Debug)]
pub enum Expr {
    Int(i32),
    Ident(String),
    Unary(Box<UnaryExpr>),
    Binary(Box<BinaryExpr>),
}

#[derive(Clone, Debug)]
pub struct UnaryExpr {
    op: UnaryOp,
    operand: Expr,
}

impl UnaryExpr {
    pub fn new(op: UnaryOp, operand: Expr) -> Self {
        UnaryExpr { op, operand }
    }

    pub fn op(&self) -> &UnaryOp {
        &self.op
    }

    pub fn operand(&self) -> &Expr {
        &self.operand
    }
}

#[derive(Clone, Debug)]
pub struct BinaryExpr {
    op: BinaryOp,
    exprs: [Expr; 2],
}

impl BinaryExpr {
    pub fn new(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        BinaryExpr { op, exprs: [lhs, rhs] }
    }

    pub fn op(&self) -> &BinaryOp {
        &self.op
    }

    pub fn lhs(&self) -> &Expr {
        &self.exprs[0]
    }

    pub fn rhs(&self) -> &Expr {
        &self.exprs[1]
    }
}
