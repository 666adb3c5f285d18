pub mod ast;
pub mod driver;
pub mod error;
pub mod lex;
pub mod parse;
