//! Canonical text rendering. Re-parsing the output describes the same
//! value, though binary nodes always come back fully parenthesized.

use std::fmt;

use crate::ast::decl::VarDecl;
use crate::ast::expr::{ BinaryExpr, Expr, UnaryExpr };
use crate::ast::op::{ BinaryOp, Operator, UnaryOp };
use crate::ast::ty::{ PtrType, Type };

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Operator::from(*self).fmt(f)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Operator::from(*self).fmt(f)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(value) => write!(f, "{}", value),
            Expr::Ident(name) => f.write_str(name),
            Expr::Unary(expr) => expr.fmt(f),
            Expr::Binary(expr) => expr.fmt(f),
        }
    }
}

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op(), self.operand())
    }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.lhs(), self.op(), self.rhs())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => f.write_str("void"),
            Type::Ptr(ptr) => ptr.fmt(f),
        }
    }
}

impl fmt::Display for PtrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // nested pointers accumulate trailing stars: void**
        write!(f, "{}*", self.pointee())
    }
}

impl fmt::Display for VarDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty(), self.name())
    }
}
