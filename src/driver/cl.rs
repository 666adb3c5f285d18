use std::path::PathBuf;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct CLOpt {
    #[arg(value_name = "FILE", num_args = 1..)]
    files: Vec<PathBuf>,

    /// Parse the input as a bare expression instead of a declaration.
    #[arg(long)]
    expr: bool,

    #[arg(long)]
    dump_ast: bool,
}

impl CLOpt {
    pub fn files(&self) -> &Vec<PathBuf> {
        &self.files
    }

    pub fn expr(&self) -> bool {
        self.expr
    }

    pub fn dump_ast(&self) -> bool {
        self.dump_ast
    }
}
