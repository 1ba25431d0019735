//! Prefix-notation AST printer.
//!
//! Renders trees as parenthesized s-expressions, e.g. `1 + 2 * 3` becomes
//! `(+ 1 (* 2 3))`. Used by the `parse` command and parser tests, where
//! the printed form makes precedence and desugaring visible at a glance.

use super::{ClassDecl, Expr, ExprKind, FunctionDecl, LiteralValue, Stmt, StmtKind};
use crate::{StringInterner, Token};

/// Renders AST nodes, resolving names through the interner.
pub struct AstPrinter<'a> {
    interner: &'a StringInterner,
}

impl<'a> AstPrinter<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        AstPrinter { interner }
    }

    /// One line per top-level statement.
    pub fn print_program(&self, statements: &[Stmt]) -> String {
        statements
            .iter()
            .map(|stmt| self.print_stmt(stmt))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn print_stmt(&self, stmt: &Stmt) -> String {
        match &stmt.kind {
            StmtKind::Expression(expr) => format!("(; {})", self.print_expr(expr)),
            StmtKind::Print(expr) => format!("(print {})", self.print_expr(expr)),
            StmtKind::Var { name, initializer } => match initializer {
                Some(init) => format!("(var {} {})", self.lexeme(name), self.print_expr(init)),
                None => format!("(var {})", self.lexeme(name)),
            },
            StmtKind::Block(statements) => self.parenthesize_stmts("block", statements),
            StmtKind::Function(decl) => self.print_function("fun", decl),
            StmtKind::Class(class) => self.print_class(class),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => match else_branch {
                Some(else_branch) => format!(
                    "(if {} {} {})",
                    self.print_expr(condition),
                    self.print_stmt(then_branch),
                    self.print_stmt(else_branch)
                ),
                None => format!(
                    "(if {} {})",
                    self.print_expr(condition),
                    self.print_stmt(then_branch)
                ),
            },
            StmtKind::While { condition, body } => format!(
                "(while {} {})",
                self.print_expr(condition),
                self.print_stmt(body)
            ),
            StmtKind::Break { .. } => "(break)".to_string(),
            StmtKind::Return { value, .. } => match value {
                Some(value) => format!("(return {})", self.print_expr(value)),
                None => "(return)".to_string(),
            },
        }
    }

    pub fn print_expr(&self, expr: &Expr) -> String {
        match &expr.kind {
            ExprKind::Literal(value) => self.print_literal(*value),
            ExprKind::Grouping(inner) => format!("(group {})", self.print_expr(inner)),
            ExprKind::Unary { op, operand, .. } => {
                format!("({} {})", op.as_symbol(), self.print_expr(operand))
            }
            ExprKind::Binary {
                left, op, right, ..
            } => format!(
                "({} {} {})",
                op.as_symbol(),
                self.print_expr(left),
                self.print_expr(right)
            ),
            ExprKind::Logical {
                left, op, right, ..
            } => format!(
                "({} {} {})",
                op.as_symbol(),
                self.print_expr(left),
                self.print_expr(right)
            ),
            ExprKind::Variable { name } => self.lexeme(name).to_string(),
            ExprKind::Assign { name, value } => {
                format!("(= {} {})", self.lexeme(name), self.print_expr(value))
            }
            ExprKind::Call { callee, args, .. } => {
                let mut out = format!("(call {}", self.print_expr(callee));
                for arg in args {
                    out.push(' ');
                    out.push_str(&self.print_expr(arg));
                }
                out.push(')');
                out
            }
            ExprKind::Get { object, name } => {
                format!("(. {} {})", self.print_expr(object), self.lexeme(name))
            }
            ExprKind::Set {
                object,
                name,
                value,
            } => format!(
                "(= (. {} {}) {})",
                self.print_expr(object),
                self.lexeme(name),
                self.print_expr(value)
            ),
            ExprKind::This { .. } => "this".to_string(),
            ExprKind::Super { method, .. } => format!("(super {})", self.lexeme(method)),
            ExprKind::Function(decl) => self.print_function("fun", decl),
        }
    }

    fn print_literal(&self, value: LiteralValue) -> String {
        match value {
            LiteralValue::Nil => "nil".to_string(),
            LiteralValue::Bool(b) => b.to_string(),
            LiteralValue::Number(n) => n.to_string(),
            LiteralValue::Str(s) => format!("{:?}", self.interner.lookup(s)),
        }
    }

    /// `(fun name (a b) body...)`, name omitted for anonymous functions.
    fn print_function(&self, head: &str, decl: &FunctionDecl) -> String {
        let mut out = format!("({head}");
        if let Some(name) = &decl.name {
            out.push(' ');
            out.push_str(self.lexeme(name));
        }
        let params: Vec<&str> = decl.params.iter().map(|p| self.lexeme(p)).collect();
        out.push_str(" (");
        out.push_str(&params.join(" "));
        out.push(')');
        for stmt in &decl.body {
            out.push(' ');
            out.push_str(&self.print_stmt(stmt));
        }
        out.push(')');
        out
    }

    fn print_class(&self, class: &ClassDecl) -> String {
        let mut out = format!("(class {}", self.lexeme(&class.name));
        if let Some(superclass) = &class.superclass {
            out.push_str(" < ");
            out.push_str(&self.print_expr(superclass));
        }
        for method in &class.methods {
            out.push(' ');
            out.push_str(&self.print_function("fun", method));
        }
        for getter in &class.getters {
            out.push(' ');
            out.push_str(&self.print_function("get", getter));
        }
        out.push(')');
        out
    }

    fn parenthesize_stmts(&self, head: &str, statements: &[Stmt]) -> String {
        let mut out = format!("({head}");
        for stmt in statements {
            out.push(' ');
            out.push_str(&self.print_stmt(stmt));
        }
        out.push(')');
        out
    }

    fn lexeme(&self, token: &Token) -> &'static str {
        token.text(self.interner)
    }
}

#[cfg(test)]
mod tests;
