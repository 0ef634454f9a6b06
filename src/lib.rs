//! Lox is a dynamically typed scripting language with lexical scoping,
//! first-class functions, closures and single inheritance. This crate is a
//! tree-walk interpreter for it with a hand-written recursive descent
//! parser, inspired by the [Crafting Interpreters](https://craftinginterpreters.com/)
//! book by Bob Nystrom.
//!
//! ## Scanning
//! The first step in the interpreter is scanning. Scanning is the process of
//! converting a string of characters into a list of tokens. A token is a
//! single unit of the language; the string `1 + 2` becomes the tokens
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module as an
//! iterator over the characters in the source code. It reports trivial
//! problems like an unterminated string literal or an unexpected character,
//! and keeps scanning after reporting so the user can fix several mistakes
//! at once.
//!
//! ## Parsing
//! The second step is parsing: converting the list of tokens into an
//! abstract syntax tree. The parser is implemented in the [`parser`](parser)
//! module as a recursive descent parser over [`expressions`](expr::Expr),
//! pieces of code that produce an [`Object`](object::Object), and
//! [`statements`](stmt::Stmt), pieces of code that perform some action. For
//! example, `print 1 + 2;` becomes
//! ```text
//! PrintStatement {
//!     BinaryExpression {
//!         left: Number(1),
//!         operator: Plus,
//!         right: Number(2),
//!     }
//! }
//! ```
//! The parser catches errors that span multiple tokens, like a binary
//! expression missing its right-hand operand. Much like the scanner, it
//! continues past an error using a technique called synchronization: it
//! skips ahead to the next statement boundary and picks up parsing there.
//!
//! ## Resolving
//! The third step is resolving. The [`resolver`](resolver) walks the
//! finished AST and computes, for every use of a variable, how many scopes
//! lie between the use and the binding it refers to. This pre-pass is what
//! makes lexical scoping robust: a closure keeps seeing the binding it
//! captured even if a later declaration shadows it. The resolver also
//! rejects programs that are syntactically valid but semantically wrong,
//! such as
//! ```text
//! {
//!    var a = 1;
//!    var a = 2;
//! }
//! ```
//!
//! ## Interpreting
//! The final step is interpreting. The [`interpreter`](interpreter) walks
//! the AST and evaluates each node. Most remaining errors can only be caught
//! here, at runtime, like adding a number to a boolean. The interpreter
//! manages the [`environments`](environment::Environment) that map variable
//! names to values; each scope in the program gets an environment chained to
//! its parent, and closures keep their defining environment alive after the
//! scope that created it returns.

use std::{fs, process};
use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use error::Reporter;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// The interpreter session: owns the interpreter state and the diagnostics
/// sink. `print` output goes to the writer the session is created with,
/// diagnostics go to stderr.
#[allow(non_camel_case_types)]
pub struct lox<'w> {
    interpreter: Interpreter<'w>,
    reporter: Reporter,
}

impl<'w> lox<'w> {
    pub fn new(output: impl Write + 'w) -> Self {
        lox {
            interpreter: Interpreter::new(output),
            reporter: Reporter::new(),
        }
    }

    /// Runs a script from a file. Exits with 65 if the script had a syntax
    /// or resolve error, and with 70 if it had a runtime error.
    pub fn run_file(&mut self, path: String) {
        let contents = fs::read_to_string(path)
            .expect("Should have been able to read the file");

        self.run(&contents);

        if self.reporter.had_error() {
            process::exit(65);
        }
        if self.reporter.had_runtime_error() {
            process::exit(70);
        }
    }

    /// Runs an interactive prompt until end of input or an interrupt.
    /// Every line shares the same globals, and the error flags are reset
    /// between lines so one mistake does not end the session.
    pub fn run_prompt(&mut self) {
        let mut editor = DefaultEditor::new().expect("readline editor to be available");

        let history = home::home_dir().map(|dir| dir.join(".lox_history"));
        if let Some(path) = &history {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.run(&line);
                    self.reporter.reset();
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("{error}");
                    break;
                },
            }
        }

        if let Some(path) = &history {
            let _ = editor.save_history(path);
        }
    }

    /// Runs a piece of source code through the whole pipeline. Each stage
    /// only runs if the previous ones reported no errors; a program with a
    /// syntax or resolve error never executes.
    fn run(&mut self, source: &str) {
        let mut scanner = Scanner::new(source, &mut self.reporter);
        let tokens = scanner.scan_tokens();

        if self.reporter.had_error() {
            return;
        }

        let mut parser = Parser::new(tokens, &mut self.reporter);
        let statements = parser.parse();

        if self.reporter.had_error() {
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter, &mut self.reporter);
        resolver.resolve(&statements);

        if self.reporter.had_error() {
            return;
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            self.reporter.runtime_error(&error);
        }
    }
}
