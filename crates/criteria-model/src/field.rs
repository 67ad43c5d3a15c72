//! Lock-protected entity fields and accessor adapters for column binding.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// A field an entity shares with its criteria columns.
///
/// Columns hold accessor closures over the entity, never the field itself,
/// so the entity stays the single owner of the value.
#[derive(Default)]
pub struct FieldCell<T> {
    value: Mutex<T>,
}

impl<T> FieldCell<T> {
    /// Create a field holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }

    fn guard(&self) -> MutexGuard<'_, T> {
        self.value.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        *self.guard() = value;
    }

    /// Replace the value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.guard(), value)
    }

    /// Mutate the value in place under the field's lock.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.guard())
    }
}

impl<T: Clone> FieldCell<T> {
    /// Copy of the current value.
    pub fn get(&self) -> T {
        self.guard().clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for FieldCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldCell").field(&*self.guard()).finish()
    }
}

/// Build a getter/setter pair for the field `project` selects on `entity`.
///
/// The closures keep the entity alive; they are what a column stores.
pub fn accessors<E, T>(
    entity: &Arc<E>,
    project: fn(&E) -> &FieldCell<T>,
) -> (
    impl Fn() -> T + Send + Sync + use<E, T>,
    impl Fn(T) + Send + Sync + use<E, T>,
)
where
    E: Send + Sync + 'static,
    T: Clone + Send + 'static,
{
    let reader = Arc::clone(entity);
    let writer = Arc::clone(entity);
    (
        move || project(&reader).get(),
        move |value: T| project(&writer).set(value),
    )
}
