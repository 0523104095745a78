use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A configuration scope.
///
/// Scopes form a chain: each one holds the values provided at its level
/// plus a link to its parent. Lookups return the nearest value of the
/// requested type, so an inner scope shadows an outer one. Values are
/// read-only once provided; changing a value means providing a new scope.
#[derive(Default)]
pub struct Scope {
    parent: Option<Arc<Scope>>,
    values: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Scope {
    /// An empty root scope with nothing provided
    pub fn root() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create a child scope that makes `value` visible to everything below it
    pub fn provide<T: Any + Send + Sync>(self: &Arc<Self>, value: T) -> Arc<Self> {
        let mut values: HashMap<TypeId, Arc<dyn Any + Send + Sync>> = HashMap::new();
        values.insert(TypeId::of::<T>(), Arc::new(value));

        Arc::new(Self {
            parent: Some(Arc::clone(self)),
            values,
        })
    }

    /// Find the nearest provided value of type `T`
    pub fn lookup<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let mut scope = Some(self);

        while let Some(current) = scope {
            if let Some(value) = current.values.get(&TypeId::of::<T>()) {
                return Arc::clone(value).downcast::<T>().ok();
            }
            scope = current.parent.as_deref();
        }

        None
    }

    /// Number of scopes between this one and the root (root is 0)
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut parent = self.parent.as_deref();
        while let Some(scope) = parent {
            depth += 1;
            parent = scope.parent.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.depth())
            .field("values", &self.values.len())
            .finish()
    }
}
