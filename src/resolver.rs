use std::collections::HashMap;
use std::mem;

use crate::error::Reporter;
use crate::expr::{Expr, ExprVisitor};
use crate::interpreter::Interpreter;
use crate::stmt::{Stmt, StmtVisitor};
use crate::token::Token;

/// What kind of function body is currently being resolved. Used to reject
/// `return` statements that have no function to return from and initializers
/// that try to return a value.
enum FunctionType {
    None,
    Function,
    Initializer,
    Method,
}

/// What kind of class body is currently being resolved. Used to reject
/// `this` and `super` outside their classes.
enum ClassType {
    None,
    Class,
    Subclass,
}

/// Statically resolves every variable use to the scope that binds it. The
/// resolver walks the AST after parsing, tracking a stack of scopes; for
/// each use of a name it records how many scopes lie between the use and the
/// binding into the interpreter's side table. Names that no local scope
/// binds are left for the globals at runtime.
///
/// The resolver also rejects programs that are syntactically valid but
/// semantically wrong, like a variable that reads itself in its own
/// initializer. These errors are reported and resolution continues.
pub struct Resolver<'a, 'w> {
    interpreter: &'a mut Interpreter<'w>,
    reporter: &'a mut Reporter,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionType,
    current_class: ClassType,
}

impl<'a, 'w> Resolver<'a, 'w> {
    pub fn new(interpreter: &'a mut Interpreter<'w>, reporter: &'a mut Reporter) -> Self {
        Resolver {
            interpreter,
            reporter,
            scopes: vec![],
            current_function: FunctionType::None,
            current_class: ClassType::None,
        }
    }

    pub fn resolve(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        expr.accept(self);
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        stmt.accept(self);
    }

    fn resolve_function(&mut self, function: &Stmt, r#type: FunctionType) {
        let Stmt::Function(function) = function else { unreachable!() };

        let enclosing_function = mem::replace(&mut self.current_function, r#type);

        self.begin_scope();
        for param in &function.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve(&function.body);
        self.end_scope();

        self.current_function = enclosing_function;
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Marks a name as existing but not yet usable in the innermost scope.
    /// The global scope is not tracked.
    fn declare(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        let scope = self.scopes.last_mut().expect("stack to be not empty");
        if scope.contains_key(&name.lexeme) {
            self.reporter.syntax_error_at(
                name,
                &format!("A variable is already defined with name '{}' in this scope.", name.lexeme),
            );
        }
        scope.insert(name.lexeme.to_owned(), false);
    }

    /// Marks a name as fully initialized and usable.
    fn define(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        self.scopes
            .last_mut()
            .expect("stack to be not empty")
            .insert(name.lexeme.to_owned(), true);
    }

    /// Records the distance between a use of a name and the innermost scope
    /// that binds it. Unbound names are left alone and resolve to the
    /// globals at runtime.
    fn resolve_local(&mut self, name: &Token) {
        for (i, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(name, i);
                return;
            }
        }
    }
}

impl<'a, 'w> ExprVisitor<()> for Resolver<'a, 'w> {
    fn visit_assign_expr(&mut self, expr: &Expr) {
        let Expr::Assign(assign) = expr else { unreachable!() };

        self.resolve_expr(&assign.value);
        self.resolve_local(&assign.name);
    }

    fn visit_binary_expr(&mut self, expr: &Expr) {
        let Expr::Binary(binary) = expr else { unreachable!() };

        self.resolve_expr(&binary.left);
        self.resolve_expr(&binary.right);
    }

    fn visit_call_expr(&mut self, expr: &Expr) {
        let Expr::Call(call) = expr else { unreachable!() };

        self.resolve_expr(&call.callee);

        for argument in &call.arguments {
            self.resolve_expr(argument);
        }
    }

    fn visit_get_expr(&mut self, expr: &Expr) {
        let Expr::Get(get) = expr else { unreachable!() };

        // Properties are looked up dynamically; only the object resolves.
        self.resolve_expr(&get.object);
    }

    fn visit_grouping_expr(&mut self, expr: &Expr) {
        let Expr::Grouping(grouping) = expr else { unreachable!() };

        self.resolve_expr(&grouping.expr);
    }

    fn visit_literal_expr(&mut self, expr: &Expr) {
        let Expr::Literal(_) = expr else { unreachable!() };
    }

    fn visit_logical_expr(&mut self, expr: &Expr) {
        let Expr::Logical(logical) = expr else { unreachable!() };

        self.resolve_expr(&logical.left);
        self.resolve_expr(&logical.right);
    }

    fn visit_set_expr(&mut self, expr: &Expr) {
        let Expr::Set(set) = expr else { unreachable!() };

        self.resolve_expr(&set.value);
        self.resolve_expr(&set.object);
    }

    fn visit_super_expr(&mut self, expr: &Expr) {
        let Expr::Super(super_expr) = expr else { unreachable!() };

        match self.current_class {
            ClassType::Subclass => (),
            ClassType::None => self.reporter.syntax_error_at(
                &super_expr.keyword,
                "Cannot use 'super' outside of a class.",
            ),
            _ => self.reporter.syntax_error_at(
                &super_expr.keyword,
                "Cannot use 'super' in a class with no superclass.",
            ),
        }

        self.resolve_local(&super_expr.keyword);
    }

    fn visit_this_expr(&mut self, expr: &Expr) {
        let Expr::This(this) = expr else { unreachable!() };

        if let ClassType::None = self.current_class {
            self.reporter.syntax_error_at(&this.keyword, "Cannot use 'this' outside of a class.");

            return;
        }

        self.resolve_local(&this.keyword);
    }

    fn visit_unary_expr(&mut self, expr: &Expr) {
        let Expr::Unary(unary) = expr else { unreachable!() };

        self.resolve_expr(&unary.expr);
    }

    fn visit_variable_expr(&mut self, expr: &Expr) {
        let Expr::Variable(variable) = expr else { unreachable!() };

        if let Some(scope) = self.scopes.last() {
            if let Some(defined) = scope.get(&variable.name.lexeme) {
                if !defined {
                    self.reporter.syntax_error_at(
                        &variable.name,
                        "Cannot read local variable in its own initializer.",
                    );
                }
            }
        }

        self.resolve_local(&variable.name);
    }
}

impl<'a, 'w> StmtVisitor<()> for Resolver<'a, 'w> {
    fn visit_block_stmt(&mut self, stmt: &Stmt) {
        let Stmt::Block(block) = stmt else { unreachable!() };

        self.begin_scope();
        self.resolve(&block.statements);
        self.end_scope();
    }

    fn visit_class_stmt(&mut self, stmt: &Stmt) {
        let Stmt::Class(class_stmt) = stmt else { unreachable!() };

        let enclosing_class = mem::replace(&mut self.current_class, ClassType::Class);

        self.declare(&class_stmt.name);
        self.define(&class_stmt.name);

        if let Some(ref superclass) = class_stmt.superclass {
            if let Expr::Variable(variable) = superclass {
                if class_stmt.name.lexeme == variable.name.lexeme {
                    self.reporter.syntax_error_at(&variable.name, "A class cannot inherit from itself.");
                }
            } else {
                unreachable!();
            }

            self.current_class = ClassType::Subclass;

            self.resolve_expr(superclass);

            self.begin_scope();
            self.scopes
                .last_mut()
                .expect("stack to be not empty")
                .insert("super".to_string(), true);
        }

        self.begin_scope();
        self.scopes
            .last_mut()
            .expect("stack to be not empty")
            .insert("this".to_string(), true);

        for method in &class_stmt.methods {
            if let Stmt::Function(function) = method {
                let decleration = if function.name.lexeme.eq("init") {
                    FunctionType::Initializer
                } else {
                    FunctionType::Method
                };
                self.resolve_function(method, decleration);
            } else {
                unreachable!();
            }
        }

        self.end_scope();

        if class_stmt.superclass.is_some() {
            self.end_scope();
        }

        self.current_class = enclosing_class;
    }

    fn visit_expression_stmt(&mut self, stmt: &Stmt) {
        let Stmt::Expression(expression) = stmt else { unreachable!() };

        self.resolve_expr(&expression.expr);
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt) {
        let Stmt::Function(function) = stmt else { unreachable!() };

        self.declare(&function.name);
        self.define(&function.name);

        self.resolve_function(stmt, FunctionType::Function);
    }

    fn visit_if_stmt(&mut self, stmt: &Stmt) {
        let Stmt::If(if_stmt) = stmt else { unreachable!() };

        self.resolve_expr(&if_stmt.condition);
        self.resolve_stmt(&if_stmt.then_branch);
        if let Some(else_branch) = &if_stmt.else_branch {
            self.resolve_stmt(else_branch);
        }
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt) {
        let Stmt::Print(print) = stmt else { unreachable!() };

        self.resolve_expr(&print.expr);
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt) {
        let Stmt::Return(return_stmt) = stmt else { unreachable!() };

        if let FunctionType::None = self.current_function {
            self.reporter.syntax_error_at(&return_stmt.keyword, "Cannot return from top-level code.");
        }

        if let Some(value) = &return_stmt.value {
            if let FunctionType::Initializer = self.current_function {
                self.reporter.syntax_error_at(
                    &return_stmt.keyword,
                    "Cannot return a value from an initializer.",
                );
                return;
            }

            self.resolve_expr(value);
        }
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt) {
        let Stmt::Var(var) = stmt else { unreachable!() };

        self.declare(&var.name);
        if let Some(initializer) = &var.initializer {
            self.resolve_expr(initializer);
        }
        self.define(&var.name);
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt) {
        let Stmt::While(while_stmt) = stmt else { unreachable!() };

        self.resolve_expr(&while_stmt.condition);
        self.resolve_stmt(&while_stmt.body);
    }
}
