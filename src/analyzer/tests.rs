//! Unit tests for the analyzer module.
//!
//! This module contains tests for:
//! - Name resolution and shadowing
//! - Declaration order and recursion
//! - Read-only parameters and constants
//! - Entity kind and arity checks
//! - Entity identity in the decorated tree

use std::rc::Rc;

use crate::{
    errors::errors::{EntityKind, Error, ErrorImpl},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::{
    analyzer::analyze,
    decorated_ast::{BinaryOperator, Expression, Program, Statement},
};

fn analyze_source(source: &str) -> Result<Program, Error> {
    let file = Rc::new("test.bella".to_string());
    let tokens = tokenize(source, Rc::clone(&file)).unwrap();
    let ast = parse(tokens, file).unwrap();
    analyze(&ast)
}

fn analysis_error(source: &str) -> Error {
    analyze_source(source).expect_err("analysis should fail")
}

#[test]
fn test_analyze_empty_program() {
    let program = analyze_source("").unwrap();
    assert!(program.statements.is_empty());
}

#[test]
fn test_analyze_preserves_statement_order() {
    let program = analyze_source("let a = 1; print a; a = 2; print a;").unwrap();

    assert_eq!(program.statements.len(), 4);
    assert!(matches!(program.statements[0], Statement::VariableDeclaration { .. }));
    assert!(matches!(program.statements[1], Statement::Print(_)));
    assert!(matches!(program.statements[2], Statement::Assignment { .. }));
    assert!(matches!(program.statements[3], Statement::Print(_)));
}

#[test]
fn test_undeclared_name() {
    let error = analysis_error("print y;");

    assert_eq!(error.kind(), &ErrorImpl::UndeclaredName { name: "y".to_string() });
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_self_referential_initializer_is_undeclared() {
    let error = analysis_error("let x = x;");

    assert_eq!(error.kind(), &ErrorImpl::UndeclaredName { name: "x".to_string() });
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_initializer_sees_outer_binding() {
    let program = analyze_source("let x = 1; function f(x) = x + 1;").unwrap();
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_duplicate_declaration_in_same_scope() {
    let error = analysis_error("let x = 1;\nlet x = 2;");

    assert_eq!(error.kind(), &ErrorImpl::DuplicateDeclaration { name: "x".to_string() });
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_duplicate_function_and_variable_names() {
    let error = analysis_error("let f = 1; function f(x) = x;");
    assert_eq!(error.kind(), &ErrorImpl::DuplicateDeclaration { name: "f".to_string() });
}

#[test]
fn test_duplicate_parameter() {
    let error = analysis_error("function f(a, a) = a;");
    assert_eq!(error.kind(), &ErrorImpl::DuplicateDeclaration { name: "a".to_string() });
}

#[test]
fn test_parameter_shadows_outer_variable() {
    let program = analyze_source("let x = 1; function f(x) = x * 2;").unwrap();

    let Statement::VariableDeclaration { variable: outer, .. } = &program.statements[0] else {
        panic!("expected a variable declaration");
    };
    let Statement::FunctionDeclaration { parameters, body, .. } = &program.statements[1] else {
        panic!("expected a function declaration");
    };

    let Expression::Binary { left, .. } = body else {
        panic!("expected a binary body");
    };
    assert_eq!(**left, Expression::Variable(Rc::clone(&parameters[0])));
    assert_ne!(**left, Expression::Variable(Rc::clone(outer)));
}

#[test]
fn test_parameter_shadows_stdlib_name() {
    assert!(analyze_source("function f(sqrt) = sqrt + 1;").is_ok());
}

#[test]
fn test_stdlib_name_cannot_be_redeclared_at_top_level() {
    let error = analysis_error("let π = 3;");
    assert_eq!(error.kind(), &ErrorImpl::DuplicateDeclaration { name: "π".to_string() });
}

#[test]
fn test_recursive_function() {
    let program = analyze_source("function f(n) = n <= 1 ? 1 : n * f(n - 1);").unwrap();

    let Statement::FunctionDeclaration { function, body, .. } = &program.statements[0] else {
        panic!("expected a function declaration");
    };
    let Expression::Conditional { alternate, .. } = body else {
        panic!("expected a conditional body");
    };
    let Expression::Binary { right, .. } = &**alternate else {
        panic!("expected a product");
    };
    let Expression::Call { callee, .. } = &**right else {
        panic!("expected a recursive call");
    };

    assert_eq!(callee, function);
    assert!(function.is_user_defined);
    assert_eq!(function.param_count, 1);
}

#[test]
fn test_backward_reference_between_functions() {
    assert!(analyze_source("function g(x) = x; function f(x) = g(x);").is_ok());
}

#[test]
fn test_forward_reference_between_functions_fails() {
    let error = analysis_error("function f(x) = g(x); function g(x) = x;");
    assert_eq!(error.kind(), &ErrorImpl::UndeclaredName { name: "g".to_string() });
}

#[test]
fn test_parameters_are_read_only() {
    let program = analyze_source("function f(a, b) = a + b;").unwrap();

    let Statement::FunctionDeclaration { parameters, .. } = &program.statements[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(parameters.len(), 2);
    assert!(parameters.iter().all(|p| p.read_only));
}

#[test]
fn test_let_variables_are_mutable() {
    let program = analyze_source("let x = 1; x = 3;").unwrap();

    let Statement::VariableDeclaration { variable, .. } = &program.statements[0] else {
        panic!("expected a variable declaration");
    };
    let Statement::Assignment { target, source } = &program.statements[1] else {
        panic!("expected an assignment");
    };

    assert!(!variable.read_only);
    assert_eq!(target, variable);
    assert_eq!(source, &Expression::Number(3.0));
}

#[test]
fn test_assigning_to_constant_fails() {
    let error = analysis_error("π = 3;");
    assert_eq!(error.kind(), &ErrorImpl::ReadOnlyAssignment { name: "π".to_string() });
}

#[test]
fn test_assigning_to_function_fails() {
    let error = analysis_error("sqrt = 3;");

    assert_eq!(error.kind(), &ErrorImpl::WrongEntityKind {
        name: "sqrt".to_string(),
        expected: EntityKind::Variable,
        found: EntityKind::Function,
    });
}

#[test]
fn test_function_used_as_variable() {
    let error = analysis_error("function f(x) = x; print f + 1;");

    assert_eq!(error.kind(), &ErrorImpl::WrongEntityKind {
        name: "f".to_string(),
        expected: EntityKind::Variable,
        found: EntityKind::Function,
    });
}

#[test]
fn test_variable_called_as_function() {
    let error = analysis_error("let x = 1; print x(2);");

    assert_eq!(error.kind(), &ErrorImpl::WrongEntityKind {
        name: "x".to_string(),
        expected: EntityKind::Function,
        found: EntityKind::Variable,
    });
    assert_eq!(error.get_position().column, 18);
}

#[test]
fn test_arity_mismatch() {
    let error = analysis_error("function f(x) = 3 * x;\nprint f(2, 3);");

    assert_eq!(error.kind(), &ErrorImpl::ArityMismatch { expected: 1, received: 2 });
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_arity_ignores_argument_literal_kinds() {
    assert!(analyze_source("function f(a, b) = a; print f(true, 2.5);").is_ok());
}

#[test]
fn test_stdlib_function_arity() {
    assert!(analyze_source("print sqrt(16) + hypot(3, 4);").is_ok());

    let error = analysis_error("print sqrt(1, 2);");
    assert_eq!(error.kind(), &ErrorImpl::ArityMismatch { expected: 1, received: 2 });
}

#[test]
fn test_stdlib_constant_is_a_variable() {
    let program = analyze_source("print 2 * π;").unwrap();

    let Statement::Print(Expression::Binary { right, .. }) = &program.statements[0] else {
        panic!("expected a print of a product");
    };
    let Expression::Variable(pi) = &**right else {
        panic!("expected a variable reference");
    };
    assert_eq!(pi.name, "π");
    assert!(pi.read_only);
}

#[test]
fn test_while_body_shares_enclosing_scope() {
    let error = analysis_error("let x = 0; while x < 3 { let x = 1; }");
    assert_eq!(error.kind(), &ErrorImpl::DuplicateDeclaration { name: "x".to_string() });

    let program = analyze_source("while false { let y = 1; } print y;").unwrap();
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_declaration_and_reads_share_entity() {
    let program = analyze_source("let x = 1; print x; print x + x;").unwrap();

    let Statement::VariableDeclaration { variable, .. } = &program.statements[0] else {
        panic!("expected a variable declaration");
    };
    let Statement::Print(Expression::Variable(read)) = &program.statements[1] else {
        panic!("expected a print of a variable");
    };
    assert!(Rc::ptr_eq(variable, read));

    let Statement::Print(Expression::Binary { operator, left, right }) = &program.statements[2] else {
        panic!("expected a print of a sum");
    };
    assert_eq!(*operator, BinaryOperator::Add);
    assert_eq!(left, right);
}

#[test]
fn test_runs_do_not_share_entities() {
    let first = analyze_source("print π;").unwrap();
    let second = analyze_source("print π;").unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_exponent_literal() {
    let program = analyze_source("print 2.75E+19;").unwrap();
    assert_eq!(program.statements[0], Statement::Print(Expression::Number(2.75e19)));
}

mod scope {
    use std::rc::Rc;

    use crate::{
        analyzer::scope::Scope,
        ast::expressions::SymbolExpr,
        entities::entities::{Entity, Variable},
        errors::errors::ErrorImpl,
        Position, Span,
    };

    fn symbol(name: &str) -> SymbolExpr {
        let position = Position::new(0, 1, 1, Rc::new("test.bella".to_string()));
        SymbolExpr {
            value: name.to_string(),
            span: Span {
                start: position.clone(),
                end: position,
            },
        }
    }

    #[test]
    fn test_root_is_seeded_with_stdlib() {
        let root = Scope::root();

        assert!(matches!(root.lookup("sqrt"), Some(Entity::Function(f)) if f.param_count == 1));
        assert!(matches!(root.lookup("π"), Some(Entity::Variable(v)) if v.read_only));
        assert!(root.lookup("dozen").is_none());
    }

    #[test]
    fn test_child_lookup_walks_to_root() {
        let root = Scope::root();
        let mut child = Scope::child(&root);
        child.declare(&symbol("a"), Entity::Variable(Variable::new("a", true))).unwrap();

        assert!(matches!(child.lookup("a"), Some(Entity::Variable(v)) if v.read_only));
        assert!(child.lookup("sqrt").is_some());
        assert!(root.lookup("a").is_none());
    }

    #[test]
    fn test_inner_binding_shadows_outer() {
        let mut root = Scope::root();
        let outer = Variable::new("x", false);
        root.declare(&symbol("x"), Entity::Variable(Rc::clone(&outer))).unwrap();

        let mut child = Scope::child(&root);
        let inner = Variable::new("x", true);
        child.declare(&symbol("x"), Entity::Variable(Rc::clone(&inner))).unwrap();

        assert_eq!(child.lookup("x"), Some(&Entity::Variable(inner)));
        assert_eq!(root.lookup("x"), Some(&Entity::Variable(outer)));
    }

    #[test]
    fn test_redeclaration_in_same_frame_fails() {
        let mut root = Scope::root();
        root.declare(&symbol("x"), Entity::Variable(Variable::new("x", false))).unwrap();

        let error = root
            .declare(&symbol("x"), Entity::Variable(Variable::new("x", false)))
            .unwrap_err();
        assert_eq!(error.kind(), &ErrorImpl::DuplicateDeclaration { name: "x".to_string() });
    }
}
