//! Unary and binary operators.
//!
//! The operand types are fixed, so dispatch is a direct match on the
//! operator and the operand variants. Errors are returned as bare
//! [`EvalErrorKind`]s; the caller attaches the operator's location.

use lox_ir::ast::{BinaryOp, UnaryOp};

use crate::{EvalErrorKind, Value};

/// Evaluate `op operand`.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalErrorKind> {
    match op {
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(EvalErrorKind::OperandNotNumber),
        },
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
    }
}

/// Evaluate `left op right`. Both operands are already evaluated.
///
/// Division by zero follows IEEE-754 and produces an infinity or NaN.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => numeric(left, right, |a, b| Value::Number(a - b)),
        BinaryOp::Mul => numeric(left, right, |a, b| Value::Number(a * b)),
        BinaryOp::Div => numeric(left, right, |a, b| Value::Number(a / b)),
        BinaryOp::Lt => numeric(left, right, |a, b| Value::Bool(a < b)),
        BinaryOp::LtEq => numeric(left, right, |a, b| Value::Bool(a <= b)),
        BinaryOp::Gt => numeric(left, right, |a, b| Value::Bool(a > b)),
        BinaryOp::GtEq => numeric(left, right, |a, b| Value::Bool(a >= b)),
    }
}

fn add(left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(&joined))
        }
        _ => Err(EvalErrorKind::InvalidAddOperands),
    }
}

#[inline]
fn numeric(
    left: &Value,
    right: &Value,
    apply: impl FnOnce(f64, f64) -> Value,
) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(apply(*a, *b)),
        _ => Err(EvalErrorKind::OperandsNotNumbers),
    }
}
