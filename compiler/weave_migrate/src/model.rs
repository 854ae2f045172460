//! Host seams used by migration.
//!
//! The front end that found a legacy call also owns its types and syntax.
//! [`SemanticModel`] is the narrow interface migration needs from it, so
//! tests can swap in models that fail at any single step.

use weave_ir::{Span, TypeOracle, TypeRef, TypeTable, WellKnownType};

use crate::{CallArgument, LegacyCall};

pub trait SemanticModel: Sync {
    /// Type-compatibility checks for argument classification.
    fn oracle(&self) -> &dyn TypeOracle;

    /// The canonical type for a well-known type, or `None` when the host
    /// cannot resolve it.
    fn well_known(&self, known: WellKnownType) -> Option<TypeRef>;

    /// The static type of an argument expression.
    fn type_of(&self, argument: &CallArgument) -> Option<TypeRef>;

    /// Find the call again, returning its current span.
    ///
    /// Called after the container store has been touched; `None` means the
    /// node is gone and the fix must be abandoned.
    fn reacquire(&self, call: &LegacyCall) -> Option<Span>;
}

/// A model backed by a [`TypeTable`] and the types recorded on the
/// arguments themselves.
#[derive(Clone, Debug, Default)]
pub struct TableModel {
    types: TypeTable,
}

impl TableModel {
    pub fn new(types: TypeTable) -> Self {
        TableModel { types }
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }
}

impl SemanticModel for TableModel {
    fn oracle(&self) -> &dyn TypeOracle {
        &self.types
    }

    fn well_known(&self, known: WellKnownType) -> Option<TypeRef> {
        self.types.canonical(known).cloned()
    }

    fn type_of(&self, argument: &CallArgument) -> Option<TypeRef> {
        argument.ty.clone()
    }

    fn reacquire(&self, call: &LegacyCall) -> Option<Span> {
        Some(call.span)
    }
}
