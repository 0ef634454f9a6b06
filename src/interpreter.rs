use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::{Interrupt, RuntimeError};
use crate::expr::{Expr, ExprVisitor};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{Stmt, StmtVisitor};
use crate::token::{Token, Type};

type EvalResult = Result<Object, RuntimeError>;
type ExecResult = Result<(), Interrupt>;

/// Runtime error for arithmetic or comparison on non-number operands.
fn numbers_error(operator: &Token) -> RuntimeError {
    RuntimeError {
        token: operator.clone(),
        message: "Operands must be numbers.".to_string(),
    }
}

/// Walks the AST and evaluates each node. Expressions evaluate to an
/// [`Object`] or fail with a [`RuntimeError`]; statements execute for their
/// side effects and may additionally unwind with a `return` value, which the
/// nearest enclosing function call catches.
pub struct Interpreter<'w> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<Token, usize>,
    output: Box<dyn Write + 'w>,
}

impl<'w> Interpreter<'w> {
    /// Creates a new interpreter writing `print` output to `output`. The
    /// globals start out holding the native functions.
    pub fn new(output: impl Write + 'w) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            let name = native.name.lexeme.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            output: Box::new(output),
        }
    }

    /// Executes the statements in order. The first runtime error aborts the
    /// rest of the program.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => (),
                Err(Interrupt::Error(error)) => return Err(error),
                Err(Interrupt::Return(_)) => {
                    unreachable!("return outside of a function is rejected during resolution")
                },
            }
        }

        Ok(())
    }

    /// Records how many environments separate a name's use from its binding.
    /// Called by the resolver; keyed by the use site's token.
    pub fn resolve(&mut self, name: &Token, depth: usize) {
        self.locals.insert(name.clone(), depth);
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    /// Executes the statements with the given environment as the current
    /// frame. The previous frame is restored on every exit path, including
    /// unwinds.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = mem::replace(&mut self.environment, environment);

        let result = statements.iter().try_for_each(|statement| self.execute(statement));

        self.environment = previous;
        result
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Looks up a name through the depth the resolver recorded, or in the
    /// globals if it recorded none. Globals stay late-bound so a session can
    /// refer to names defined later.
    fn look_up_variable(&self, name: &Token) -> EvalResult {
        match self.locals.get(name) {
            Some(distance) => self.environment.borrow().get_at(*distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    /// Checks the argument count against the callable's arity and calls it.
    fn invoke(&mut self, callable: &impl Callable, paren: &Token, arguments: Vec<Object>) -> EvalResult {
        if arguments.len() != callable.arity() {
            return Err(RuntimeError {
                token: paren.clone(),
                message: format!("Expected {} arguments but got {}.", callable.arity(), arguments.len()),
            });
        }

        callable.call(self, arguments)
    }
}

impl<'w> ExprVisitor<EvalResult> for Interpreter<'w> {
    fn visit_assign_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Assign(assign) = expr else { unreachable!() };

        let value = self.evaluate(&assign.value)?;

        match self.locals.get(&assign.name) {
            Some(distance) => {
                self.environment.borrow_mut().assign_at(*distance, &assign.name, value.clone());
            },
            None => {
                self.globals.borrow_mut().assign(&assign.name, value.clone())?;
            },
        }

        Ok(value)
    }

    fn visit_binary_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Binary(binary) = expr else { unreachable!() };

        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        match binary.operator.r#type {
            Type::Plus => (left + right).ok_or_else(|| RuntimeError {
                token: binary.operator.clone(),
                message: "Operands must be numbers or strings.".to_string(),
            }),
            Type::Minus => (left - right).ok_or_else(|| numbers_error(&binary.operator)),
            Type::Star => (left * right).ok_or_else(|| numbers_error(&binary.operator)),
            Type::Slash => (left / right).ok_or_else(|| numbers_error(&binary.operator)),
            Type::Greater | Type::GreaterEqual | Type::Less | Type::LessEqual => {
                match (&left, &right) {
                    (Object::Literal(Literal::Number(left)), Object::Literal(Literal::Number(right))) => {
                        // Comparing the floats directly keeps IEEE semantics
                        // for NaN instead of erroring on it.
                        let result = match binary.operator.r#type {
                            Type::Greater => left > right,
                            Type::GreaterEqual => left >= right,
                            Type::Less => left < right,
                            Type::LessEqual => left <= right,
                            _ => unreachable!(),
                        };

                        Ok(Object::from(result))
                    },
                    _ => Err(numbers_error(&binary.operator)),
                }
            },
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            _ => unreachable!(),
        }
    }

    fn visit_call_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Call(call) = expr else { unreachable!() };

        let callee = self.evaluate(&call.callee)?;

        // Arguments evaluate left to right, before the callee is checked.
        let mut arguments = Vec::new();
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        match callee {
            Object::Function(function) => self.invoke(&function, &call.paren, arguments),
            Object::NativeFunction(function) => self.invoke(&function, &call.paren, arguments),
            Object::Class(class) => self.invoke(&class, &call.paren, arguments),
            _ => Err(RuntimeError {
                token: call.paren.clone(),
                message: "Can only call functions and classes.".to_string(),
            }),
        }
    }

    fn visit_get_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Get(get) = expr else { unreachable!() };

        match self.evaluate(&get.object)? {
            Object::Instance(instance) => {
                let object = Object::from(Rc::clone(&instance));
                let result = instance.borrow().get(&get.name, &object);
                result
            },
            _ => Err(RuntimeError {
                token: get.name.clone(),
                message: "Only instances have properties.".to_string(),
            }),
        }
    }

    fn visit_grouping_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Grouping(grouping) = expr else { unreachable!() };

        self.evaluate(&grouping.expr)
    }

    fn visit_literal_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Literal(literal) = expr else { unreachable!() };

        Ok(Object::from(literal.clone()))
    }

    fn visit_logical_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Logical(logical) = expr else { unreachable!() };

        let left = self.evaluate(&logical.left)?;

        // The right operand only evaluates when the left cannot decide.
        match logical.operator.r#type {
            Type::Or if left.as_bool() => Ok(left),
            Type::And if !left.as_bool() => Ok(left),
            _ => self.evaluate(&logical.right),
        }
    }

    fn visit_set_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Set(set) = expr else { unreachable!() };

        match self.evaluate(&set.object)? {
            Object::Instance(instance) => {
                let value = self.evaluate(&set.value)?;
                instance.borrow_mut().set(&set.name, value.clone());
                Ok(value)
            },
            _ => Err(RuntimeError {
                token: set.name.clone(),
                message: "Only instances have fields.".to_string(),
            }),
        }
    }

    fn visit_super_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Super(super_expr) = expr else { unreachable!() };

        let distance = *self.locals.get(&super_expr.keyword)
            .expect("'super' to be resolved before execution");

        let superclass = match self.environment.borrow().get_at(distance, &super_expr.keyword)? {
            Object::Class(class) => class,
            _ => unreachable!(),
        };

        // The instance lives in the scope just inside the superclass scope.
        let instance = self.environment.borrow().get_at(distance - 1, &Token::from("this"))?;

        let method = superclass.borrow().get_method(&super_expr.method.lexeme)
            .ok_or_else(|| RuntimeError {
                token: super_expr.method.clone(),
                message: format!("Undefined property '{}'.", super_expr.method.lexeme),
            })?;

        Ok(Object::from(method.bind(instance)))
    }

    fn visit_this_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::This(this) = expr else { unreachable!() };

        self.look_up_variable(&this.keyword)
    }

    fn visit_unary_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Unary(unary) = expr else { unreachable!() };

        let right = self.evaluate(&unary.expr)?;

        match unary.operator.r#type {
            Type::Minus => (-right).ok_or_else(|| RuntimeError {
                token: unary.operator.clone(),
                message: "Operand must be a number.".to_string(),
            }),
            Type::Bang => Ok(Object::from(!right.as_bool())),
            _ => unreachable!(),
        }
    }

    fn visit_variable_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Variable(variable) = expr else { unreachable!() };

        self.look_up_variable(&variable.name)
    }
}

impl<'w> StmtVisitor<ExecResult> for Interpreter<'w> {
    fn visit_block_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Block(block) = stmt else { unreachable!() };

        let environment = Environment::new(Some(Rc::clone(&self.environment)));
        self.execute_block(&block.statements, Rc::new(RefCell::new(environment)))
    }

    fn visit_class_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Class(class_stmt) = stmt else { unreachable!() };

        let superclass = match &class_stmt.superclass {
            Some(superclass) => {
                let Expr::Variable(variable) = superclass else { unreachable!() };

                match self.evaluate(superclass)? {
                    Object::Class(class) => Some(class),
                    _ => return Err(Interrupt::Error(RuntimeError {
                        token: variable.name.clone(),
                        message: "Superclass must be a class.".to_string(),
                    })),
                }
            },
            None => None,
        };

        // The class name is visible, as nil, while the methods are built so
        // they can close over it.
        self.environment.borrow_mut().define(&class_stmt.name.lexeme, Object::from(Literal::Nil));

        // Methods of a subclass close over an extra scope binding `super`.
        let enclosing = match &superclass {
            Some(superclass) => {
                let enclosing = Rc::clone(&self.environment);

                let mut environment = Environment::new(Some(Rc::clone(&self.environment)));
                environment.define("super", Object::from(Rc::clone(superclass)));
                self.environment = Rc::new(RefCell::new(environment));

                Some(enclosing)
            },
            None => None,
        };

        let mut methods = HashMap::new();
        for method in &class_stmt.methods {
            let Stmt::Function(function) = method else { unreachable!() };

            let is_initializer = function.name.lexeme.eq("init");
            methods.insert(
                function.name.lexeme.clone(),
                Function::new(Rc::new(function.clone()), Rc::clone(&self.environment), is_initializer),
            );
        }

        let class = Class::new(class_stmt.name.lexeme.clone(), superclass, methods);
        let class = Object::from(Rc::new(RefCell::new(class)));

        if let Some(enclosing) = enclosing {
            self.environment = enclosing;
        }

        self.environment.borrow_mut().assign(&class_stmt.name, class)?;

        Ok(())
    }

    fn visit_expression_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Expression(expression) = stmt else { unreachable!() };

        self.evaluate(&expression.expr)?;

        Ok(())
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Function(function) = stmt else { unreachable!() };

        // The current environment becomes the function's closure.
        let object = Function::new(Rc::new(function.clone()), Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&function.name.lexeme, Object::from(object));

        Ok(())
    }

    fn visit_if_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::If(if_stmt) = stmt else { unreachable!() };

        if self.evaluate(&if_stmt.condition)?.as_bool() {
            self.execute(&if_stmt.then_branch)?;
        } else if let Some(else_branch) = &if_stmt.else_branch {
            self.execute(else_branch)?;
        }

        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Print(print) = stmt else { unreachable!() };

        let value = self.evaluate(&print.expr)?;
        writeln!(self.output, "{value}").expect("output stream to be writable");

        Ok(())
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Return(return_stmt) = stmt else { unreachable!() };

        let value = match &return_stmt.value {
            Some(value) => self.evaluate(value)?,
            None => Object::from(Literal::Nil),
        };

        Err(Interrupt::Return(value))
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Var(var) = stmt else { unreachable!() };

        let value = match &var.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&var.name.lexeme, value);

        Ok(())
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::While(while_stmt) = stmt else { unreachable!() };

        while self.evaluate(&while_stmt.condition)?.as_bool() {
            self.execute(&while_stmt.body)?;
        }

        Ok(())
    }
}
