pub mod cl;

use std::fs;

use clap::Parser as _;
use either::Either;

use crate::ast::decl::VarDecl;
use crate::ast::expr::Expr;
use crate::driver::cl::CLOpt;
use crate::parse;

/// Runs the frontend over one input file and reports pass or fail
/// through the exit code, printing the canonical rendering on success.
pub fn run(args: Vec<String>) -> i32 {
    // parse args
    let args = match CLOpt::try_parse_from(args) {
        Ok(parsed_args) => parsed_args,
        Err(e) => {
            eprintln!("{}", e);
            return 2;
        }
    };

    if args.files().len() != 1 {
        eprintln!("Currently only one file is supported");
        return 1;
    }

    let input_file = &args.files()[0];
    let Ok(code) = fs::read_to_string(input_file) else {
        eprintln!("Error reading file {}", input_file.display());
        return 3;
    };

    log::debug!("parsing {} ({} bytes)", input_file.display(), code.len());

    let parsed: Either<Expr, VarDecl> = if args.expr() {
        match parse::parse_expr(&code) {
            Ok(expr) => Either::Left(expr),
            Err(e) => {
                eprintln!("Error parsing file {}: {}", input_file.display(), e);
                return 4;
            }
        }
    }
    else {
        match parse::parse_var_decl(&code) {
            Ok(decl) => Either::Right(decl),
            Err(e) => {
                eprintln!("Error parsing file {}: {}", input_file.display(), e);
                return 4;
            }
        }
    };

    if args.dump_ast() {
        println!("{:?}", parsed);
    }

    println!("{}", parsed);
    0
}
