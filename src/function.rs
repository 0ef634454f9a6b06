use std::cell::RefCell;
use std::fmt::{Debug, Display};
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::{Interrupt, RuntimeError};
use crate::interpreter::Interpreter;
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::FunctionData;
use crate::token::Token;

/// Represents a user-defined function. The declaration is shared between
/// every binding of the same method, and the closure is the environment that
/// was current when the function was declared.
#[derive(Debug, Clone)]
pub struct Function {
    pub declaration: Rc<FunctionData>,
    pub closure: Rc<RefCell<Environment>>,
    pub is_initializer: bool,
}

impl Function {
    pub fn new(declaration: Rc<FunctionData>, closure: Rc<RefCell<Environment>>, is_initializer: bool) -> Self {
        Function { declaration, closure, is_initializer }
    }

    /// Returns a copy of this function whose closure has `this` bound to the
    /// given instance. Used when a method is read off an instance.
    pub fn bind(&self, instance: Object) -> Function {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));
        environment.define("this", instance);

        Function {
            declaration: Rc::clone(&self.declaration),
            closure: Rc::new(RefCell::new(environment)),
            is_initializer: self.is_initializer,
        }
    }

    /// Returns the instance an initializer is running for. Initializers are
    /// always called through `bind`, so `this` lives in the closure itself.
    fn this(&self) -> Result<Object, RuntimeError> {
        self.closure.borrow().get_at(0, &Token::from("this"))
    }
}

impl Callable for Function {
    fn call(&self, interpreter: &mut Interpreter<'_>, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));

        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            environment.define(&param.lexeme, argument);
        }

        match interpreter.execute_block(&self.declaration.body, Rc::new(RefCell::new(environment))) {
            Ok(()) if self.is_initializer => self.this(),
            Ok(()) => Ok(Object::from(Literal::Nil)),
            // An initializer always hands back its instance, even on a bare return.
            Err(Interrupt::Return(_)) if self.is_initializer => self.this(),
            Err(Interrupt::Return(value)) => Ok(value),
            Err(Interrupt::Error(error)) => Err(error),
        }
    }

    fn arity(&self) -> usize {
        self.declaration.params.len()
    }
}

/// Two functions are equal only if they are the same declaration captured in
/// the same environment. Closures returned by separate calls of the same
/// factory compare unequal.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.declaration, &other.declaration) && Rc::ptr_eq(&self.closure, &other.closure)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<fn {}>", self.declaration.name.lexeme)
    }
}

/// Represents a function that is implemented in the host language and
/// exposed to user code through the globals environment.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: Token,
    pub arity: usize,
    pub function: fn(&mut Interpreter<'_>, Vec<Object>) -> Result<Object, RuntimeError>,
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter<'_>, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        (self.function)(interpreter, arguments)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl NativeFunction {
    /// Returns the native functions that every interpreter starts with.
    pub fn get_globals() -> Vec<NativeFunction> {
        vec![
            NativeFunction {
                name: Token::from("clock"),
                arity: 0,
                function: |_, _| {
                    let now = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .expect("system clock to be past the epoch")
                        .as_secs_f64();
                    Ok(Object::from(now))
                },
            },
        ]
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name.lexeme == other.name.lexeme && self.function == other.function
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name.lexeme)
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name.lexeme)
    }
}
