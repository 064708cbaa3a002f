// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable, derivable carrier of call-scoped values.
//!
//! A [`Context`] is a persistent key-value store: every derivation returns a
//! new context holding an `Arc` to its parent plus one added slot, and lookup
//! walks the parent chain with the nearest slot winning. Derivation is O(1)
//! and never mutates the original, so concurrent branches of the same context
//! tree are independent without any synchronization.
//!
//! Slots are keyed by value *type*, the extensions idiom: a private newtype
//! key keeps an association invisible to unrelated code sharing the same
//! context.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    parent: Option<Context>,
    slot: Option<Slot>,
}

struct Slot {
    key: TypeId,
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl Context {
    /// The empty root context: no parent, no values.
    pub fn root() -> Context {
        Context {
            inner: Arc::new(ContextInner {
                parent: None,
                slot: None,
            }),
        }
    }

    /// A new context derived from this one that additionally carries `value`,
    /// keyed by its type. This context is unaffected.
    pub fn with_value<T: Send + Sync + 'static>(&self, value: T) -> Context {
        Context {
            inner: Arc::new(ContextInner {
                parent: Some(self.clone()),
                slot: Some(Slot {
                    key: TypeId::of::<T>(),
                    type_name: std::any::type_name::<T>(),
                    value: Box::new(value),
                }),
            }),
        }
    }

    /// The nearest value of type `T` on the chain from this context to the
    /// root, or `None` if no ancestor carries one.
    pub fn value<T: Send + Sync + 'static>(&self) -> Option<&T> {
        let mut current = Some(self);
        while let Some(ctx) = current {
            if let Some(slot) = &ctx.inner.slot {
                if slot.key == TypeId::of::<T>() {
                    return slot.value.downcast_ref::<T>();
                }
            }
            current = ctx.inner.parent.as_ref();
        }
        None
    }

    /// Number of derivations between this context and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(parent) = &current.inner.parent {
            depth += 1;
            current = parent;
        }
        depth
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::root()
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Context {}

impl Hash for Context {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).hash(state);
    }
}

impl fmt::Debug for ContextInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextInner")
            .field("slot", &self.slot.as_ref().map(|s| s.type_name))
            .field("parent", &self.parent)
            .finish()
    }
}

/*
Boilerplate notes.

# Context

Clone is an Arc bump. Equality and Hash are pointer identity, matching the
derivation model: two contexts are the same only if they are the same node of
the tree, never by structural comparison of opaque slot values. Display is
not implemented; there is no user-meaningful rendering of an opaque store.
*/
