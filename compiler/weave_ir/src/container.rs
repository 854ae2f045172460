//! Target containers: the class-like groups that own logging methods.
//!
//! A container is the namespace for method names and event ids. Its method
//! table is append-only: entries are never edited or removed during a batch.

use crate::{LogLevel, MethodDecl, TypeRef};

/// The identity-relevant facts about one method in a container.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodSignature {
    pub name: String,
    /// Every parameter type in declaration order, logger first.
    pub param_types: Vec<TypeRef>,
    /// Constant level; `None` when the level is a parameter.
    pub level: Option<LogLevel>,
    pub template: String,
    pub event_id: i32,
}

impl MethodSignature {
    pub fn from_decl(decl: &MethodDecl) -> Self {
        MethodSignature {
            name: decl.name.clone(),
            param_types: decl.parameters.iter().map(|p| p.ty.clone()).collect(),
            level: decl.attribute.level,
            template: decl.attribute.message.clone(),
            event_id: decl.attribute.event_id,
        }
    }

    /// Same parameter types, severity and template; name and event id are
    /// not compared.
    pub fn same_shape(&self, param_types: &[TypeRef], level: Option<LogLevel>, template: &str) -> bool {
        self.param_types == param_types && self.level == level && self.template == template
    }
}

/// A group of logging methods sharing name and event-id namespaces.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetContainer {
    pub name: String,
    methods: Vec<MethodSignature>,
}

impl TargetContainer {
    pub fn new(name: impl Into<String>) -> Self {
        TargetContainer {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Seed a container from already-declared methods.
    pub fn from_decls<'a>(name: impl Into<String>, decls: impl IntoIterator<Item = &'a MethodDecl>) -> Self {
        TargetContainer {
            name: name.into(),
            methods: decls.into_iter().map(MethodSignature::from_decl).collect(),
        }
    }

    pub fn methods(&self) -> &[MethodSignature] {
        &self.methods
    }

    /// Append a method. The table only grows.
    pub fn push(&mut self, method: MethodSignature) {
        self.methods.push(method);
    }

    /// Methods declared under `name` (overloads share a name).
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodSignature> + 'a {
        self.methods.iter().filter(move |m| m.name == name)
    }

    pub fn max_event_id(&self) -> Option<i32> {
        self.methods.iter().map(|m| m.event_id).max()
    }

    /// `max + 1`, or `base` when the container has no methods yet.
    ///
    /// `None` once `i32::MAX` is taken: there is no fresh id left to mint.
    pub fn next_event_id(&self, base: i32) -> Option<i32> {
        match self.max_event_id() {
            None => Some(base),
            Some(max) => max.checked_add(1).map(|next| next.max(base)),
        }
    }
}

#[cfg(test)]
mod tests;
