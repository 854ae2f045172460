//! Migration direction of the weave logging-call compiler.
//!
//! Rewrites ad-hoc legacy logging calls into calls of generated logging
//! methods. For each call site the migrator:
//!
//! 1. works out the role of every argument ([`analyze`]),
//! 2. derives a method name from the template ([`derive_identifier`]),
//! 3. reuses an identical method or mints a new one ([`resolve`]),
//! 4. appends the new declaration to its container and returns the call
//!    rewrite ([`Migrator::migrate`]).
//!
//! A fix is all-or-nothing: either a declaration plus rewrite is produced,
//! or a [`MigrationError`] and no edit at all.

mod error;
mod fix;
mod ident;
mod legacy;
mod model;
mod options;
mod resolve;
mod store;

pub use error::{MigrationError, StoreError};
pub use fix::{migrate_call, MigrationFix, Migrator};
pub use ident::{derive_identifier, is_identifier, parameter_names, FALLBACK_IDENTIFIER};
pub use legacy::{analyze, ArgConstant, CallArgument, LegacyAnalysis, LegacyCall, LevelArg, LOG_METHOD};
pub use model::{SemanticModel, TableModel};
pub use options::MigrateOptions;
pub use resolve::{resolve, Candidate, Resolution};
pub use store::{ContainerStore, InMemoryStore, Snapshot};
