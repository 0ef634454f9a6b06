use std::{env, io, process};

use lox_lang::lox;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut lox = lox::new(io::stdout());

    match args.len() {
        n if n > 2 => {
            println!("Usage: lox [script]");
            process::exit(64);
        },
        2 => lox.run_file(args[1].clone()),
        _ => lox.run_prompt(),
    };
}
