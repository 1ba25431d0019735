//! Statement execution.

use std::rc::Rc;

use lox_ir::ast::{ClassDecl, ExprKind, FunctionDecl, Stmt, StmtKind};
use lox_ir::Name;
use lox_stack::ensure_sufficient_stack;
use tracing::debug;

use super::{Completion, Interpreter};
use crate::{Class, Environment, EvalError, EvalErrorKind, Function, MethodTable, Value};

impl Interpreter {
    /// Execute one statement.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<Completion, EvalError> {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> Result<Completion, EvalError> {
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Completion::Normal)
            }
            StmtKind::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(Completion::Normal)
            }
            StmtKind::Var { name, initializer } => {
                match initializer {
                    Some(init) => {
                        let value = self.evaluate(init)?;
                        self.env.define(name.lexeme, value);
                    }
                    None => self.env.declare(name.lexeme),
                }
                Ok(Completion::Normal)
            }
            StmtKind::Block(statements) => {
                let frame = self.env.child();
                self.execute_block(statements, frame)
            }
            StmtKind::Function(decl) => {
                self.declare_function(decl);
                Ok(Completion::Normal)
            }
            StmtKind::Class(class) => {
                self.declare_class(class)?;
                Ok(Completion::Normal)
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Completion::Normal)
                }
            }
            StmtKind::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    match self.execute(body)? {
                        Completion::Normal => {}
                        Completion::Break => break,
                        ret @ Completion::Return(_) => return Ok(ret),
                    }
                }
                Ok(Completion::Normal)
            }
            StmtKind::Break { .. } => Ok(Completion::Break),
            StmtKind::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(Completion::Return(value))
            }
        }
    }

    /// Execute `statements` in `frame`, stopping at the first abrupt
    /// completion. The previous frame is restored on every exit.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        frame: Environment,
    ) -> Result<Completion, EvalError> {
        let mut scoped = self.scoped(frame);
        for stmt in statements {
            match scoped.execute(stmt)? {
                Completion::Normal => {}
                abrupt => return Ok(abrupt),
            }
        }
        Ok(Completion::Normal)
    }

    fn declare_function(&mut self, decl: &Rc<FunctionDecl>) {
        let Some(name) = decl.name else {
            return;
        };
        let function = Function::new(
            Some(self.interner.lookup(name.lexeme)),
            Rc::clone(decl),
            self.env.clone(),
            false,
        );
        self.env.define(name.lexeme, Value::Function(Rc::new(function)));
    }

    fn declare_class(&mut self, class: &ClassDecl) -> Result<(), EvalError> {
        let superclass = match &class.superclass {
            Some(expr) => match self.evaluate(expr)? {
                Value::Class(superclass) => Some(superclass),
                _ => {
                    let error = match &expr.kind {
                        ExprKind::Variable { name } => EvalErrorKind::SuperclassNotClass.at(name),
                        _ => EvalError::new(
                            EvalErrorKind::SuperclassNotClass,
                            expr.span,
                            class.name.line,
                        ),
                    };
                    return Err(error);
                }
            },
            None => None,
        };

        // Methods of a subclass close over an extra frame holding `super`
        let closure = match &superclass {
            Some(superclass) => {
                let frame = self.env.child();
                frame.define(Name::SUPER, Value::Class(Rc::clone(superclass)));
                frame
            }
            None => self.env.clone(),
        };

        let methods = self.method_table(&class.methods, &closure, true);
        let getters = self.method_table(&class.getters, &closure, false);
        let name = self.interner.lookup(class.name.lexeme);
        debug!(
            class = name,
            superclass = superclass.as_ref().map(|s| s.name()),
            methods = methods.len(),
            getters = getters.len(),
            "defined class"
        );

        let class_value = Class::new(name, superclass, methods, getters);
        self.env
            .define(class.name.lexeme, Value::Class(Rc::new(class_value)));
        Ok(())
    }

    fn method_table(
        &self,
        decls: &[Rc<FunctionDecl>],
        closure: &Environment,
        may_initialize: bool,
    ) -> MethodTable {
        decls
            .iter()
            .filter_map(|decl| {
                let name = decl.name?;
                let function = Function::new(
                    Some(self.interner.lookup(name.lexeme)),
                    Rc::clone(decl),
                    closure.clone(),
                    may_initialize && name.lexeme == Name::INIT,
                );
                Some((name.lexeme, Rc::new(function)))
            })
            .collect()
    }
}
