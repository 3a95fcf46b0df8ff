use std::rc::Rc;

use tracing::trace;

use crate::analyzer::decorated_ast::{BinaryOperator, Expression, Program, Statement, UnaryOperator};

/// Truth value of a literal test. Numbers are true unless zero.
pub fn truthiness(expr: &Expression) -> Option<bool> {
    match expr {
        Expression::Boolean(value) => Some(*value),
        Expression::Number(value) => Some(*value != 0.0 && !value.is_nan()),
        _ => None,
    }
}

fn fold_numbers(operator: BinaryOperator, a: f64, b: f64) -> Option<Expression> {
    let value = match operator {
        BinaryOperator::Add => a + b,
        BinaryOperator::Subtract => a - b,
        BinaryOperator::Multiply => a * b,
        // Division and modulo by zero are left for the target to evaluate
        BinaryOperator::Divide if b != 0.0 => a / b,
        BinaryOperator::Modulo if b != 0.0 => a % b,
        BinaryOperator::Power => a.powf(b),
        BinaryOperator::Less => return Some(Expression::Boolean(a < b)),
        BinaryOperator::LessEqual => return Some(Expression::Boolean(a <= b)),
        BinaryOperator::Equal => return Some(Expression::Boolean(a == b)),
        BinaryOperator::NotEqual => return Some(Expression::Boolean(a != b)),
        BinaryOperator::GreaterEqual => return Some(Expression::Boolean(a >= b)),
        BinaryOperator::Greater => return Some(Expression::Boolean(a > b)),
        _ => return None,
    };

    // A literal must render back as a number
    if !value.is_finite() {
        return None;
    }
    Some(Expression::Number(value))
}

fn fold_booleans(operator: BinaryOperator, a: bool, b: bool) -> Option<Expression> {
    let value = match operator {
        BinaryOperator::And => a && b,
        BinaryOperator::Or => a || b,
        BinaryOperator::Equal => a == b,
        BinaryOperator::NotEqual => a != b,
        _ => return None,
    };
    Some(Expression::Boolean(value))
}

fn is_number(expr: &Expression, expected: f64) -> bool {
    matches!(expr, Expression::Number(value) if *value == expected)
}

/// Whether `expr` may be multiplied away by zero. Only call-free arithmetic
/// over variables and finite literals qualifies; a literal pair still standing
/// after folding overflowed or divided by zero, so its value is not finite.
fn is_finite_arithmetic(expr: &Expression) -> bool {
    match expr {
        Expression::Number(value) => value.is_finite(),
        Expression::Variable(_) => true,
        Expression::Unary {
            operator: UnaryOperator::Negate,
            operand,
        } => is_finite_arithmetic(operand),
        Expression::Binary {
            operator: BinaryOperator::Add | BinaryOperator::Subtract | BinaryOperator::Multiply,
            left,
            right,
        } => !(left.is_literal() && right.is_literal()) && is_finite_arithmetic(left) && is_finite_arithmetic(right),
        _ => false,
    }
}

/// Rewrites a binary node whose operands are already optimized.
pub fn fold_binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    let folded = match (&left, &right) {
        (Expression::Number(a), Expression::Number(b)) => fold_numbers(operator, *a, *b),
        (Expression::Boolean(a), Expression::Boolean(b)) => fold_booleans(operator, *a, *b),
        _ => None,
    };
    if let Some(folded) = folded {
        trace!(%operator, "folded literal operands");
        return folded;
    }

    match operator {
        BinaryOperator::Add if is_number(&right, 0.0) => left,
        BinaryOperator::Add if is_number(&left, 0.0) => right,
        BinaryOperator::Subtract if is_number(&right, 0.0) => left,
        BinaryOperator::Multiply if is_number(&right, 1.0) => left,
        BinaryOperator::Multiply if is_number(&left, 1.0) => right,
        BinaryOperator::Multiply if is_number(&right, 0.0) && is_finite_arithmetic(&left) => Expression::Number(0.0),
        BinaryOperator::Multiply if is_number(&left, 0.0) && is_finite_arithmetic(&right) => Expression::Number(0.0),
        BinaryOperator::Divide if is_number(&right, 1.0) => left,
        BinaryOperator::Power if is_number(&right, 1.0) => left,
        _ => Expression::binary(operator, left, right),
    }
}

pub fn fold_unary(operator: UnaryOperator, operand: Expression) -> Expression {
    match (operator, operand) {
        (UnaryOperator::Negate, Expression::Number(value)) => Expression::Number(-value),
        (UnaryOperator::Not, Expression::Boolean(value)) => Expression::Boolean(!value),
        (operator, operand) => Expression::unary(operator, operand),
    }
}

pub fn optimize_expr(expr: Expression) -> Expression {
    match expr {
        Expression::Binary { operator, left, right } => {
            fold_binary(operator, optimize_expr(*left), optimize_expr(*right))
        },
        Expression::Unary { operator, operand } => fold_unary(operator, optimize_expr(*operand)),
        Expression::Conditional { test, consequent, alternate } => {
            let test = optimize_expr(*test);
            match truthiness(&test) {
                Some(true) => {
                    trace!("dropped conditional alternate");
                    optimize_expr(*consequent)
                },
                Some(false) => {
                    trace!("dropped conditional consequent");
                    optimize_expr(*alternate)
                },
                None => Expression::conditional(test, optimize_expr(*consequent), optimize_expr(*alternate)),
            }
        },
        Expression::Call { callee, arguments } => Expression::Call {
            callee,
            arguments: arguments.into_iter().map(optimize_expr).collect(),
        },
        leaf @ (Expression::Number(_) | Expression::Boolean(_) | Expression::Variable(_)) => leaf,
    }
}

/// Optimizes one statement; `None` means it has no effect and is dropped.
pub fn optimize_stmt(stmt: Statement) -> Option<Statement> {
    match stmt {
        Statement::VariableDeclaration { variable, initializer } => Some(Statement::VariableDeclaration {
            variable,
            initializer: optimize_expr(initializer),
        }),
        Statement::FunctionDeclaration { function, parameters, body } => Some(Statement::FunctionDeclaration {
            function,
            parameters,
            body: optimize_expr(body),
        }),
        Statement::Assignment { target, source } => {
            let source = optimize_expr(source);
            if let Expression::Variable(variable) = &source {
                if Rc::ptr_eq(variable, &target) {
                    trace!(name = %target.name, "dropped self assignment");
                    return None;
                }
            }
            Some(Statement::Assignment { target, source })
        },
        Statement::Print(argument) => Some(Statement::Print(optimize_expr(argument))),
        Statement::While { test, body } => {
            let test = optimize_expr(test);
            if truthiness(&test) == Some(false) {
                trace!("dropped loop that never runs");
                return None;
            }
            Some(Statement::While { test, body: optimize_block(body) })
        },
    }
}

pub fn optimize_block(statements: Vec<Statement>) -> Vec<Statement> {
    statements.into_iter().filter_map(optimize_stmt).collect()
}

/// Folds constants and removes dead code in a single bottom-up pass.
/// The result is a fixed point: optimizing it again changes nothing.
pub fn optimize(program: Program) -> Program {
    Program {
        statements: optimize_block(program.statements),
    }
}
