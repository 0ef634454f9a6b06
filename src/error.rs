use crate::object::Object;
use crate::token::{Token, Type};

/// Represents an error that occurs during parsing. Raised by the parser's
/// `consume` and unwound to the nearest declaration, which reports it and
/// synchronizes.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

/// Represents an error that occurs during runtime. Carries the offending
/// token so the report can name the line.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

/// A non-local exit unwinding through statement execution. A `return`
/// statement rides the same propagation path as a runtime error until the
/// nearest function call catches it; neither variant ever escapes the crate.
#[derive(Debug)]
pub enum Interrupt {
    Error(RuntimeError),
    Return(Object),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Interrupt::Error(error)
    }
}

/// Collects diagnostics from every stage of the pipeline and remembers
/// whether any occurred. One reporter is created per interpreter session and
/// lent to the scanner, parser and resolver in turn; a syntax or resolve
/// error prevents the program from executing, a runtime error aborts the
/// current run.
#[derive(Debug, Default)]
pub struct Reporter {
    had_error: bool,
    had_runtime_error: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Reports an error that has no token to point at (scanner errors).
    pub fn syntax_error(&mut self, line: usize, message: &str) {
        eprintln!("[line {line}] Error: {message}");
        self.had_error = true;
    }

    /// Reports an error at a token. Used for parse and resolve errors.
    pub fn syntax_error_at(&mut self, token: &Token, message: &str) {
        if token.r#type == Type::EOF {
            eprintln!("[line {line}] Error at end: {message}", line = token.location.line);
        } else {
            eprintln!(
                "[line {line}] Error at '{lexeme}': {message}",
                line = token.location.line,
                lexeme = token.lexeme,
            );
        }

        self.had_error = true;
    }

    /// Reports an error that occurred while the program was running.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{message}\n[line: {line}]", message = error.message, line = error.token.location.line);
        self.had_runtime_error = true;
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears both flags. Used between prompts so one bad line does not
    /// poison the rest of a session.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}
