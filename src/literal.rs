use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Represents a literal value in the language.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    String(String),
    Number(f64),
    Bool(bool),
    Nil,
}

impl Literal {
    /// Returns the truthiness of the literal. Only `nil` and `false` are
    /// falsey; every other value, including `0` and `""`, is truthy.
    pub fn as_bool(&self) -> bool {
        match self {
            Literal::Bool(b) => *b,
            Literal::Nil => false,
            _ => true,
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(String::from(s))
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

// Arithmetic over literals returns `None` when the operand types do not
// support the operation. The interpreter turns `None` into a runtime error
// at the offending operator.

impl Add for Literal {
    type Output = Option<Literal>;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Literal::Number(left), Literal::Number(right)) => Some(Literal::Number(left + right)),
            // A string on either side concatenates, stringifying the other operand.
            (left @ Literal::String(_), right) | (left, right @ Literal::String(_)) => {
                Some(Literal::String(format!("{left}{right}")))
            },
            _ => None,
        }
    }
}

impl Sub for Literal {
    type Output = Option<Literal>;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Literal::Number(left), Literal::Number(right)) => Some(Literal::Number(left - right)),
            _ => None,
        }
    }
}

impl Mul for Literal {
    type Output = Option<Literal>;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Literal::Number(left), Literal::Number(right)) => Some(Literal::Number(left * right)),
            _ => None,
        }
    }
}

impl Div for Literal {
    type Output = Option<Literal>;

    fn div(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Literal::Number(left), Literal::Number(right)) => Some(Literal::Number(left / right)),
            _ => None,
        }
    }
}

impl Neg for Literal {
    type Output = Option<Literal>;

    fn neg(self) -> Self::Output {
        match self {
            Literal::Number(number) => Some(Literal::Number(-number)),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{s}"),
            // f64's Display already trims a whole number's fraction: `1` not `1.0`.
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Nil => write!(f, "nil"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Literal::Nil.as_bool());
        assert!(!Literal::Bool(false).as_bool());
        assert!(Literal::Bool(true).as_bool());
        assert!(Literal::Number(0.0).as_bool());
        assert!(Literal::String(String::new()).as_bool());
    }

    #[test]
    fn add_concatenates_with_either_string() {
        assert_eq!(
            Literal::from("scalar") + Literal::from(1.0),
            Some(Literal::from("scalar1")),
        );
        assert_eq!(
            Literal::from(2.0) + Literal::from("x"),
            Some(Literal::from("2x")),
        );
        assert_eq!(Literal::from(true) + Literal::Nil, None);
    }

    #[test]
    fn display_trims_whole_numbers() {
        assert_eq!(Literal::Number(1.0).to_string(), "1");
        assert_eq!(Literal::Number(1.5).to_string(), "1.5");
        assert_eq!(Literal::Number(0.0).to_string(), "0");
    }
}
