pub mod decl;
pub mod expr;
pub mod op;
pub mod render;
pub mod ty;
