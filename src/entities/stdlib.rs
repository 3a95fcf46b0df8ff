//! The built-in names every program can see.
//!
//! The table itself is immutable and shared. Each analysis run turns it into
//! fresh entities with [`entities`], so no entity outlives or crosses a run.

use super::entities::{Entity, Function, Variable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdlibKind {
    /// A read-only predefined value.
    Constant,
    /// A function taking the given number of arguments.
    Function(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct StdlibEntry {
    pub name: &'static str,
    pub kind: StdlibKind,
}

pub const STANDARD_LIBRARY: &[StdlibEntry] = &[
    StdlibEntry { name: "π", kind: StdlibKind::Constant },
    StdlibEntry { name: "sqrt", kind: StdlibKind::Function(1) },
    StdlibEntry { name: "sin", kind: StdlibKind::Function(1) },
    StdlibEntry { name: "cos", kind: StdlibKind::Function(1) },
    StdlibEntry { name: "exp", kind: StdlibKind::Function(1) },
    StdlibEntry { name: "ln", kind: StdlibKind::Function(1) },
    StdlibEntry { name: "hypot", kind: StdlibKind::Function(2) },
];

impl StdlibEntry {
    pub fn instantiate(&self) -> Entity {
        match self.kind {
            StdlibKind::Constant => Entity::Variable(Variable::new(self.name, true)),
            StdlibKind::Function(arity) => Entity::Function(Function::new(self.name, arity, false)),
        }
    }
}

/// Fresh entities for every standard-library name, in table order.
pub fn entities() -> impl Iterator<Item = Entity> {
    STANDARD_LIBRARY.iter().map(StdlibEntry::instantiate)
}
