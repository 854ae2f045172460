//! weave IR - Intermediate Representation Types
//!
//! This crate contains the data shared by every phase of the logging-call
//! compiler:
//! - Spans for source locations supplied by the front end
//! - Log levels and opaque type references
//! - The injected type-identity test ([`TypeOracle`])
//! - Raw method declarations ([`MethodDecl`]) and validated
//!   [`CallDescriptor`]s
//! - Emission strategies and structured field-list shapes
//! - Target containers and method signatures
//!
//! Every type derives `Clone, Eq, Hash, Debug` so results can be compared
//! and cached. With the `serde` feature they also serialize, for handing IR
//! to an out-of-process back end.

mod container;
mod decl;
mod descriptor;
mod fields;
mod level;
mod span;
mod types;

pub use container::{MethodSignature, TargetContainer};
pub use decl::{LogAttribute, MethodDecl, MethodModifiers, ParamModifier, Parameter, ReturnType};
pub use descriptor::{
    CallDescriptor, EmissionStrategy, ParamRole, ParameterDescriptor, SeveritySource,
};
pub use fields::{
    FieldIndexError, FieldListShape, FieldSlot, SlotRendering, SlotSource, ORIGINAL_FORMAT,
};
pub use level::LogLevel;
pub use span::Span;
pub use types::{TypeOracle, TypeRef, TypeTable, WellKnownType};

/// Re-exported so downstream crates can name the strategy payload type.
pub use smallvec::SmallVec;
