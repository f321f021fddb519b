//! Structure registry keyed by structure name.

use std::collections::HashMap;
use std::sync::Arc;

type Factory<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Registry mapping a structure name to a constructor for it.
///
/// Populated once at program start, typically from the list of structures a
/// generation run produced, and read-only afterwards.
pub struct StructureRegistry<T> {
    factories: HashMap<String, Factory<T>>,
}

impl<T> StructureRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory, replacing any previous one for the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Constructs the structure registered under `name`.
    #[must_use]
    pub fn create(&self, name: &str) -> Option<T> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Returns true if a factory is registered for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns the registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered structures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<T> Default for StructureRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for StructureRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructureRegistry")
            .field("names", &self.names())
            .finish()
    }
}
