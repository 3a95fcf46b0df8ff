use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::expressions::SymbolExpr,
    entities::{entities::Entity, stdlib},
    errors::errors::{Error, ErrorImpl},
};

/// One frame of the scope chain.
///
/// A frame owns its name table and borrows its parent, so a child frame can
/// only live while the analyzer is inside the function body that opened it.
/// Entities are reference counted and outlive the frames that index them.
#[derive(Debug)]
pub struct Scope<'parent> {
    parent: Option<&'parent Scope<'parent>>,
    locals: HashMap<String, Entity>,
    depth: usize,
}

impl Scope<'static> {
    /// A root frame seeded with fresh standard-library entities.
    pub fn root() -> Self {
        let mut locals = HashMap::new();
        for entity in stdlib::entities() {
            locals.insert(entity.name().to_string(), entity);
        }

        Scope {
            parent: None,
            locals,
            depth: 0,
        }
    }
}

impl<'parent> Scope<'parent> {
    pub fn child(parent: &'parent Scope<'parent>) -> Self {
        let depth = parent.depth + 1;
        trace!(depth, "scope pushed");

        Scope {
            parent: Some(parent),
            locals: HashMap::new(),
            depth,
        }
    }

    /// Binds `name` in this frame. Shadowing an outer binding is fine;
    /// rebinding a name already in this frame is not.
    pub fn declare(&mut self, name: &SymbolExpr, entity: Entity) -> Result<(), Error> {
        if self.locals.contains_key(&name.value) {
            return Err(Error::new(
                ErrorImpl::DuplicateDeclaration {
                    name: name.value.clone(),
                },
                name.span.start.clone(),
            ));
        }

        trace!(name = %name.value, kind = %entity.kind(), depth = self.depth, "declared");
        self.locals.insert(name.value.clone(), entity);
        Ok(())
    }

    /// Nearest binding of `name`, searching outward to the root.
    pub fn lookup(&self, name: &str) -> Option<&Entity> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(entity) = current.locals.get(name) {
                return Some(entity);
            }
            scope = current.parent;
        }
        None
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        if self.parent.is_some() {
            trace!(depth = self.depth, "scope popped");
        }
    }
}
