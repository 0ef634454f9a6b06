use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};
use substring::Substring;

use crate::error::Reporter;
use crate::literal::Literal;
use crate::token::{Location, Token, Type};

/// Turns source code into a list of tokens. The scanner walks the source one
/// character at a time with up to two characters of lookahead, keeping the
/// `start`/`current` char indices in sync with the iterator so lexemes can be
/// sliced out of the original source.
pub struct Scanner<'a> {
    source: &'a str,
    chars: PeekMoreIterator<Chars<'a>>,
    reporter: &'a mut Reporter,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column_offset: usize,
    location: Location,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner.
    pub fn new(source: &'a str, reporter: &'a mut Reporter) -> Scanner<'a> {
        Scanner {
            source,
            chars: source.chars().peekmore(),
            reporter,
            tokens: vec!(),
            start: 0,
            current: 0,
            line: 1,
            column_offset: 0,
            location: Location::new(1, 0),
        }
    }

    /// Scans the source code and returns a vector of tokens. The list is
    /// always terminated by an EOF token carrying the final line number.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(
            Token::new(
                Type::EOF,
                String::from(""),
                None,
                Location::new(self.line, 0)
            )
        );

        self.tokens.clone()
    }

    /// Consumes and returns the next character.
    fn advance(&mut self) -> char {
        self.current += 1;
        self.chars.next().expect("tried to advance past end of the file")
    }

    /// Returns the next character without consuming it.
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Returns the next next character without consuming it. The peek cursor
    /// is reset afterwards so lookahead never desyncs the stream.
    fn peek_next(&mut self) -> Option<char> {
        let char = self.chars.peek_next().copied();
        self.chars.reset_cursor();
        char
    }

    /// Returns if the character after the next one is the expected character.
    fn match_next(&mut self, expected: char) -> bool {
        self.peek_next() == Some(expected)
    }

    /// Returns if the scanner has reached the end of the file.
    fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Adds a new token to the list of tokens. The lexeme is the exact
    /// source slice between `start` and `current`.
    fn add_token(&mut self, r#type: Type, literal: Option<Literal>) {
        let lexeme = self.source.substring(self.start, self.current).to_string();
        self.tokens.push(Token::new(r#type, lexeme, literal, self.location));
    }

    /// Adds a new single char token to the list of tokens.
    fn add_single_char_token(&mut self, r#type: Type) {
        self.advance();
        self.add_token(r#type, None);
    }

    /// Adds a new double char token to the list of tokens.
    fn add_double_char_token(&mut self, r#type: Type) {
        self.advance();
        self.advance();
        self.add_token(r#type, None);
    }

    /// Handles a string literal. Strings may span multiple lines and have no
    /// escape sequences; the literal is the raw contents between the quotes
    /// while the lexeme keeps the quotes.
    fn string(&mut self) {
        let opening_line = self.line;
        self.advance(); // Move past the starting double quotes.

        while let Some(char) = self.peek() {
            if char == '"' {
                break;
            }

            self.advance();

            if char == '\n' {
                self.line += 1;
                self.column_offset = self.current;
            }
        }

        if self.is_at_end() {
            self.reporter.syntax_error(opening_line, "Unterminated string.");
            return;
        }

        self.advance(); // Move past the closing double quotes.

        let value = self.source.substring(self.start + 1, self.current - 1).to_string();
        self.add_token(Type::String, Some(Literal::String(value)));
    }

    /// Handles a number literal: digits with an optional fractional part. A
    /// dot that is not followed by a digit is not part of the number and is
    /// left for the next token.
    fn number(&mut self) {
        while matches!(self.peek(), Some(char) if char.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && matches!(self.peek_next(), Some(char) if char.is_ascii_digit()) {
            self.advance(); // Consume the dot.

            while matches!(self.peek(), Some(char) if char.is_ascii_digit()) {
                self.advance();
            }
        }

        let value = self.source.substring(self.start, self.current);
        let number: f64 = value.parse().expect("scanned number to be a valid float");

        self.add_token(Type::Number, Some(Literal::Number(number)));
    }

    /// Handles an identifier or a keyword.
    fn identifier(&mut self) {
        // is_alphanumeric does not include underscores.
        while matches!(self.peek(), Some(char) if char.is_alphanumeric() || char == '_') {
            self.advance();
        }

        let value = self.source.substring(self.start, self.current);
        let token_type = match value {
            "and"      => Type::And,
            "class"    => Type::Class,
            "else"     => Type::Else,
            "false"    => Type::False,
            "for"      => Type::For,
            "fun"      => Type::Fun,
            "if"       => Type::If,
            "nil"      => Type::Nil,
            "or"       => Type::Or,
            "print"    => Type::Print,
            "return"   => Type::Return,
            "super"    => Type::Super,
            "this"     => Type::This,
            "true"     => Type::True,
            "var"      => Type::Var,
            "while"    => Type::While,
            _          => Type::Identifier,
        };

        self.add_token(token_type, None);
    }

    /// Scans the next token.
    fn scan_token(&mut self) {
        let Some(char) = self.peek() else { return };
        self.location = Location::new(self.line, self.start - self.column_offset);

        match char {
            // One character tokens
            '(' => self.add_single_char_token(Type::LeftParen),
            ')' => self.add_single_char_token(Type::RightParen),
            '{' => self.add_single_char_token(Type::LeftBrace),
            '}' => self.add_single_char_token(Type::RightBrace),
            ',' => self.add_single_char_token(Type::Comma),
            '.' => self.add_single_char_token(Type::Dot),
            '-' => self.add_single_char_token(Type::Minus),
            '+' => self.add_single_char_token(Type::Plus),
            ';' => self.add_single_char_token(Type::Semicolon),
            '*' => self.add_single_char_token(Type::Star),

            // Two character tokens
            '!' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::BangEqual);
                } else {
                    self.add_single_char_token(Type::Bang)
                };
            },
            '=' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::EqualEqual);
                } else {
                    self.add_single_char_token(Type::Equal)
                };
            },
            '<' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::LessEqual);
                } else {
                    self.add_single_char_token(Type::Less)
                };
            },
            '>' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::GreaterEqual);
                } else {
                    self.add_single_char_token(Type::Greater)
                };
            },
            '/' => {
                if self.match_next('/') {
                    // A comment runs until the end of the line.
                    while matches!(self.peek(), Some(char) if char != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_single_char_token(Type::Slash);
                }
            },

            // Ignore whitespace
            ' ' | '\r' | '\t' => {
                self.advance();
            },

            // Update line counter
            '\n' => {
                self.advance();

                self.line += 1;
                self.column_offset = self.current;
            },

            // String
            '"' => self.string(),

            // Numbers
            char if char.is_ascii_digit() => self.number(),

            // Identifiers
            char if char.is_alphabetic() || char == '_' => self.identifier(),

            _ => {
                self.advance();

                self.reporter.syntax_error(self.line, &format!("Unexpected character '{char}'."));
            },
        }
    }
}
