//! Expression evaluation.

use std::rc::Rc;

use lox_ir::ast::{Expr, ExprKind, LiteralValue, LogicalOp};
use lox_ir::{Name, Token};
use lox_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::{errors, evaluate_binary, evaluate_unary, EvalErrorKind, EvalResult, Function, Value};

impl Interpreter {
    /// Evaluate an expression to a value.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(self.literal(*literal)),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Unary {
                op,
                operator,
                operand,
            } => {
                let operand = self.evaluate(operand)?;
                evaluate_unary(*op, &operand).map_err(|kind| kind.at(operator))
            }
            ExprKind::Binary {
                left,
                op,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(*op, &left, &right).map_err(|kind| kind.at(operator))
            }
            ExprKind::Logical {
                left, op, right, ..
            } => {
                let left = self.evaluate(left)?;
                let short_circuits = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            ExprKind::Variable { name } => self.look_up(name.lexeme, name),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env
                    .assign(name.lexeme, value.clone())
                    .map_err(|error| self.lookup_error(error, name))?;
                Ok(value)
            }
            ExprKind::Call {
                callee,
                paren,
                args,
            } => {
                let callee = self.evaluate(callee)?;
                let mut arguments = Vec::with_capacity(args.len());
                for arg in args {
                    arguments.push(self.evaluate(arg)?);
                }
                self.call_value(&callee, arguments, paren)
            }
            ExprKind::Get { object, name } => match self.evaluate(object)? {
                Value::Instance(instance) => instance.get(name, self),
                _ => Err(EvalErrorKind::PropertyOnNonInstance.at(name)),
            },
            ExprKind::Set {
                object,
                name,
                value,
            } => {
                let Value::Instance(instance) = self.evaluate(object)? else {
                    return Err(EvalErrorKind::FieldOnNonInstance.at(name));
                };
                let value = self.evaluate(value)?;
                instance.set(name.lexeme, value.clone());
                Ok(value)
            }
            ExprKind::This { keyword } => self.look_up(Name::THIS, keyword),
            ExprKind::Super { keyword, method } => self.super_property(keyword, method),
            ExprKind::Function(decl) => Ok(Value::Function(Rc::new(Function::new(
                None,
                Rc::clone(decl),
                self.env.clone(),
                false,
            )))),
        }
    }

    fn literal(&self, literal: LiteralValue) -> Value {
        match literal {
            LiteralValue::Nil => Value::Nil,
            LiteralValue::Bool(b) => Value::Bool(b),
            LiteralValue::Number(n) => Value::Number(n),
            LiteralValue::Str(s) => Value::string(self.interner.lookup(s)),
        }
    }

    fn look_up(&self, name: Name, token: &Token) -> EvalResult {
        self.env
            .get(name)
            .map_err(|error| self.lookup_error(error, token))
    }

    /// `super.method`: look up from the superclass of the class whose
    /// method contains the expression, binding to the current `this`.
    fn super_property(&mut self, keyword: &Token, method: &Token) -> EvalResult {
        let Value::Class(superclass) = self.look_up(Name::SUPER, keyword)? else {
            return Err(errors::undefined_variable(keyword, &self.interner));
        };
        let receiver = self.look_up(Name::THIS, keyword)?;

        if let Some(getter) = superclass.find_getter(method.lexeme) {
            let bound = getter.bind(receiver);
            return self.call_callable(&bound, Vec::new(), method);
        }
        if let Some(found) = superclass.find_method(method.lexeme) {
            return Ok(Value::Function(Rc::new(found.bind(receiver))));
        }
        Err(errors::undefined_property(method, &self.interner))
    }
}
