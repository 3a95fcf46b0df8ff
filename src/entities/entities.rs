use std::{fmt::Debug, rc::Rc};

use crate::errors::errors::EntityKind;

/// A declared variable: a `let` binding, a function parameter or a
/// standard-library constant.
///
/// Equality is identity. Two variables with the same name declared in
/// different scopes are different entities, so `PartialEq` compares the
/// addresses of the shared allocations rather than the fields.
pub struct Variable {
    pub name: String,
    pub read_only: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, read_only: bool) -> Rc<Self> {
        Rc::new(Variable {
            name: name.into(),
            read_only,
        })
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Variable {}

impl Debug for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Variable({}", self.name)?;
        if self.read_only {
            write!(f, ", read-only")?;
        }
        write!(f, ")")
    }
}

/// A declared function: user functions and standard-library functions.
///
/// Like [`Variable`], equality is identity.
pub struct Function {
    pub name: String,
    pub param_count: usize,
    pub is_user_defined: bool,
}

impl Function {
    pub fn new(name: impl Into<String>, param_count: usize, is_user_defined: bool) -> Rc<Self> {
        Rc::new(Function {
            name: name.into(),
            param_count,
            is_user_defined,
        })
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Function {}

impl Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Function({}/{}", self.name, self.param_count)?;
        if !self.is_user_defined {
            write!(f, ", builtin")?;
        }
        write!(f, ")")
    }
}

/// Anything a name can be bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Variable(Rc<Variable>),
    Function(Rc<Function>),
}

impl Entity {
    pub fn name(&self) -> &str {
        match self {
            Entity::Variable(variable) => &variable.name,
            Entity::Function(function) => &function.name,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Variable(_) => EntityKind::Variable,
            Entity::Function(_) => EntityKind::Function,
        }
    }
}
