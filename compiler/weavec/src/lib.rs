//! weavec - batch driver for the weave logging-call compiler.
//!
//! Ties the phase crates together:
//!
//! - [`compile_batch`] lowers the declarations of many containers,
//!   optionally in parallel (containers are independent), and gathers
//!   their diagnostics into one sorted, limited list.
//! - [`migrate_batch`] rewrites legacy call sites one after another against
//!   a shared container store.
//! - Both have `_cancellable` variants that stop early on a shared
//!   [`Cancellation`] and then return [`Cancelled`] instead of partial
//!   results.
//! - [`init_tracing`] installs a hierarchical `tracing` subscriber when
//!   `WEAVE_LOG` or `RUST_LOG` is set.
//!
//! The phase crates are re-exported so a front end needs only this one.

mod batch;
mod cancel;
mod options;

use std::sync::Once;

pub use batch::{
    compile_batch, compile_batch_cancellable, migrate_batch, migrate_batch_cancellable,
    BatchOutput, ContainerInput, MigrationBatch,
};
pub use cancel::{Cancellation, Cancelled};
pub use options::CompilerOptions;

pub use weave_diagnostic;
pub use weave_gen;
pub use weave_ir;
pub use weave_migrate;
pub use weave_rt;
pub use weave_template;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber for compiler diagnostics output.
///
/// The filter comes from `WEAVE_LOG`, or `RUST_LOG` when that is unset.
/// Nothing is installed when neither is set, and a subscriber the host
/// already installed is left alone. Safe to call more than once.
///
/// ```text
/// WEAVE_LOG=weave_migrate=debug  # resolver and retry decisions
/// WEAVE_LOG=weave_gen=trace      # per-method strategy choices
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Ok(filter) =
            EnvFilter::try_from_env("WEAVE_LOG").or_else(|_| EnvFilter::try_from_default_env())
        else {
            return;
        };
        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_targets(true)
            .with_indent_lines(true);
        // Fails only when another global subscriber is already set.
        let _ = tracing_subscriber::registry().with(layer).with(filter).try_init();
    });
}
