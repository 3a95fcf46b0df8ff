use std::rc::Rc;

use crate::{
    ast::{
        ast::{ExprType, ExprWrapper, StmtType, StmtWrapper},
        expressions::{BinaryExpr, BooleanExpr, CallExpr, ConditionalExpr, NumberExpr, PrefixExpr, SymbolExpr},
        statements::{AssignmentStmt, BlockStmt, FnDeclStmt, PrintStmt, VarDeclStmt, WhileStmt},
    },
    entities::entities::{Entity, Function, Variable},
    errors::errors::{EntityKind, Error, ErrorImpl},
};

use super::{
    decorated_ast::{BinaryOperator, Expression, Program, Statement, UnaryOperator},
    scope::Scope,
};

/// Finds the nearest binding for `symbol`, whatever its kind.
fn resolve<'s>(scope: &'s Scope<'_>, symbol: &SymbolExpr) -> Result<&'s Entity, Error> {
    scope.lookup(&symbol.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::UndeclaredName {
                name: symbol.value.clone(),
            },
            symbol.span.start.clone(),
        )
    })
}

fn wrong_kind(symbol: &SymbolExpr, expected: EntityKind, found: EntityKind) -> Error {
    Error::new(
        ErrorImpl::WrongEntityKind {
            name: symbol.value.clone(),
            expected,
            found,
        },
        symbol.span.start.clone(),
    )
}

pub fn resolve_variable(scope: &Scope<'_>, symbol: &SymbolExpr) -> Result<Rc<Variable>, Error> {
    match resolve(scope, symbol)? {
        Entity::Variable(variable) => Ok(Rc::clone(variable)),
        Entity::Function(_) => Err(wrong_kind(symbol, EntityKind::Variable, EntityKind::Function)),
    }
}

pub fn resolve_function(scope: &Scope<'_>, symbol: &SymbolExpr) -> Result<Rc<Function>, Error> {
    match resolve(scope, symbol)? {
        Entity::Function(function) => Ok(Rc::clone(function)),
        Entity::Variable(_) => Err(wrong_kind(symbol, EntityKind::Function, EntityKind::Variable)),
    }
}

pub fn analyze_expr(scope: &Scope<'_>, ast: &ExprWrapper) -> Result<Expression, Error> {
    match ast.get_expr_type() {
        ExprType::Number => Ok(Expression::Number(ast.downcast::<NumberExpr>().value)),
        ExprType::Boolean => Ok(Expression::Boolean(ast.downcast::<BooleanExpr>().value)),
        ExprType::Symbol => {
            let symbol = ast.downcast::<SymbolExpr>();
            Ok(Expression::Variable(resolve_variable(scope, symbol)?))
        },
        ExprType::Binary => {
            let binary = ast.downcast::<BinaryExpr>();
            let Some(operator) = BinaryOperator::from_token(binary.operator.kind) else {
                unreachable!("parser produced binary expression with operator {}", binary.operator.kind)
            };

            let left = analyze_expr(scope, &binary.left)?;
            let right = analyze_expr(scope, &binary.right)?;
            Ok(Expression::binary(operator, left, right))
        },
        ExprType::Prefix => {
            let prefix = ast.downcast::<PrefixExpr>();
            let Some(operator) = UnaryOperator::from_token(prefix.operator.kind) else {
                unreachable!("parser produced prefix expression with operator {}", prefix.operator.kind)
            };

            Ok(Expression::unary(operator, analyze_expr(scope, &prefix.right_expr)?))
        },
        ExprType::Conditional => {
            let conditional = ast.downcast::<ConditionalExpr>();
            let test = analyze_expr(scope, &conditional.test)?;
            let consequent = analyze_expr(scope, &conditional.consequent)?;
            let alternate = analyze_expr(scope, &conditional.alternate)?;
            Ok(Expression::conditional(test, consequent, alternate))
        },
        ExprType::Call => {
            let call = ast.downcast::<CallExpr>();
            let callee = resolve_function(scope, &call.callee)?;

            if call.arguments.len() != callee.param_count {
                return Err(Error::new(ErrorImpl::ArityMismatch {
                    expected: callee.param_count,
                    received: call.arguments.len()
                }, call.callee.span.start.clone()));
            }

            let arguments = call
                .arguments
                .iter()
                .map(|argument| analyze_expr(scope, argument))
                .collect::<Result<Vec<Expression>, Error>>()?;

            Ok(Expression::Call { callee, arguments })
        },
    }
}

pub fn analyze_stmt(scope: &mut Scope<'_>, ast: &StmtWrapper) -> Result<Statement, Error> {
    match ast.get_stmt_type() {
        StmtType::VarDeclStmt => {
            let var_decl_stmt = ast.downcast::<VarDeclStmt>();

            // The initializer cannot see the name it initializes
            let initializer = analyze_expr(scope, &var_decl_stmt.assigned_value)?;

            let variable = Variable::new(var_decl_stmt.identifier.value.clone(), false);
            scope.declare(&var_decl_stmt.identifier, Entity::Variable(Rc::clone(&variable)))?;

            Ok(Statement::VariableDeclaration { variable, initializer })
        },
        StmtType::FnDeclStmt => {
            let fn_decl_stmt = ast.downcast::<FnDeclStmt>();

            // Declared before the body is analyzed so the body can recurse
            let function = Function::new(fn_decl_stmt.identifier.value.clone(), fn_decl_stmt.parameters.len(), true);
            scope.declare(&fn_decl_stmt.identifier, Entity::Function(Rc::clone(&function)))?;

            let (parameters, body) = {
                let mut body_scope = Scope::child(scope);

                let mut parameters = Vec::with_capacity(fn_decl_stmt.parameters.len());
                for parameter in fn_decl_stmt.parameters.iter() {
                    let variable = Variable::new(parameter.value.clone(), true);
                    body_scope.declare(parameter, Entity::Variable(Rc::clone(&variable)))?;
                    parameters.push(variable);
                }

                let body = analyze_expr(&body_scope, &fn_decl_stmt.body)?;
                (parameters, body)
            };

            Ok(Statement::FunctionDeclaration { function, parameters, body })
        },
        StmtType::AssignmentStmt => {
            let assignment = ast.downcast::<AssignmentStmt>();
            let target = resolve_variable(scope, &assignment.assignee)?;

            if target.read_only {
                return Err(Error::new(ErrorImpl::ReadOnlyAssignment {
                    name: assignment.assignee.value.clone()
                }, assignment.assignee.span.start.clone()));
            }

            let source = analyze_expr(scope, &assignment.value)?;
            Ok(Statement::Assignment { target, source })
        },
        StmtType::PrintStmt => {
            let print = ast.downcast::<PrintStmt>();
            Ok(Statement::Print(analyze_expr(scope, &print.argument)?))
        },
        StmtType::WhileStmt => {
            let while_stmt = ast.downcast::<WhileStmt>();
            let test = analyze_expr(scope, &while_stmt.condition)?;
            let body = analyze_block(scope, &while_stmt.body)?;
            Ok(Statement::While { test, body })
        },
        StmtType::BlockStmt => {
            unreachable!("blocks only appear as loop bodies and the program root")
        },
    }
}

/// Blocks do not open a scope; their declarations land in `scope`.
pub fn analyze_block(scope: &mut Scope<'_>, ast: &BlockStmt) -> Result<Vec<Statement>, Error> {
    ast.iter().map(|stmt| analyze_stmt(scope, stmt)).collect()
}

/// Resolves and checks a whole program against a fresh root scope.
pub fn analyze(ast: &BlockStmt) -> Result<Program, Error> {
    let mut root = Scope::root();
    let statements = analyze_block(&mut root, ast)?;
    Ok(Program { statements })
}
