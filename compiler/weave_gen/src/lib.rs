//! Generator direction of the weave logging-call compiler.
//!
//! Turns annotated logging-method declarations into emission plans:
//!
//! 1. [`classify`] assigns each parameter a role.
//! 2. [`validate`] checks the declaration, its parameters and its template.
//! 3. [`select`] picks the fixed-arity fast path or the generic fallback.
//! 4. [`synthesize`] lays out the field list for the generic fallback.
//!
//! [`lower_method`] and [`lower_container`] run the whole pipeline. Every
//! function here is pure; containers can be lowered in parallel.

mod classify;
mod lower;
mod options;
mod strategy;
mod synth;
mod validate;

pub use classify::{classify, Classification};
pub use lower::{lower_container, lower_method, ContainerOutput, LoweredMethod, MethodOutput};
pub use options::GenOptions;
pub use strategy::select;
pub use synth::synthesize;
pub use validate::{validate, Validation};
