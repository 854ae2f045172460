//! Container storage for the migration direction.
//!
//! Migration reads a container, decides on a method, and appends it. The
//! store guards that read-decide-write sequence with a generation counter:
//! every successful mutation bumps it, and an append made against a stale
//! generation is rejected with [`StoreError::Conflict`] so the caller can
//! re-read and retry.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use weave_ir::{MethodDecl, MethodSignature, TargetContainer};

use crate::StoreError;

/// A container as of one store generation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    pub container: TargetContainer,
    /// The declarations behind `container`'s method table, in the same order.
    pub declarations: Vec<MethodDecl>,
    pub generation: u64,
}

impl Snapshot {
    /// The stored declaration whose identity is `signature`.
    pub fn declaration(&self, signature: &MethodSignature) -> Option<&MethodDecl> {
        self.declarations
            .iter()
            .find(|decl| MethodSignature::from_decl(decl) == *signature)
    }
}

pub trait ContainerStore: Sync {
    /// Current generation. Never decreases.
    fn generation(&self) -> u64;

    /// The named container, or `None` if it does not exist yet.
    fn snapshot(&self, name: &str) -> Result<Option<Snapshot>, StoreError>;

    /// Create the named container if it is missing. Idempotent.
    fn create(&self, name: &str) -> Result<(), StoreError>;

    /// Append a declaration, provided nothing changed since `expected`.
    /// Returns the new generation.
    fn append(&self, name: &str, expected: u64, decl: MethodDecl) -> Result<u64, StoreError>;
}

#[derive(Default)]
struct Entry {
    container: TargetContainer,
    decls: Vec<MethodDecl>,
}

#[derive(Default)]
struct State {
    generation: u64,
    containers: FxHashMap<String, Entry>,
}

/// Thread-safe in-process store.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a container with already-declared methods, replacing any
    /// container of the same name.
    pub fn insert(&self, name: &str, decls: Vec<MethodDecl>) {
        let mut state = self.state.write();
        let container = TargetContainer::from_decls(name, &decls);
        state
            .containers
            .insert(name.to_string(), Entry { container, decls });
        state.generation += 1;
    }

    /// Declarations appended to (or seeded into) the named container.
    pub fn declarations(&self, name: &str) -> Vec<MethodDecl> {
        self.state
            .read()
            .containers
            .get(name)
            .map(|entry| entry.decls.clone())
            .unwrap_or_default()
    }

    /// Container names, sorted.
    pub fn container_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().containers.keys().cloned().collect();
        names.sort();
        names
    }
}

impl ContainerStore for InMemoryStore {
    fn generation(&self) -> u64 {
        self.state.read().generation
    }

    fn snapshot(&self, name: &str) -> Result<Option<Snapshot>, StoreError> {
        let state = self.state.read();
        Ok(state.containers.get(name).map(|entry| Snapshot {
            container: entry.container.clone(),
            declarations: entry.decls.clone(),
            generation: state.generation,
        }))
    }

    fn create(&self, name: &str) -> Result<(), StoreError> {
        let mut state = self.state.write();
        if !state.containers.contains_key(name) {
            state.containers.insert(
                name.to_string(),
                Entry {
                    container: TargetContainer::new(name),
                    decls: Vec::new(),
                },
            );
            state.generation += 1;
            tracing::debug!(container = name, "created container");
        }
        Ok(())
    }

    fn append(&self, name: &str, expected: u64, decl: MethodDecl) -> Result<u64, StoreError> {
        let mut state = self.state.write();
        if state.generation != expected {
            return Err(StoreError::Conflict {
                expected,
                actual: state.generation,
            });
        }
        let entry = state
            .containers
            .get_mut(name)
            .ok_or_else(|| StoreError::Unavailable(format!("container `{name}` does not exist")))?;
        entry.container.push(MethodSignature::from_decl(&decl));
        entry.decls.push(decl);
        state.generation += 1;
        Ok(state.generation)
    }
}
