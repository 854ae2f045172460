//! Batch entry points for both compiler directions.

use rayon::prelude::*;
use weave_diagnostic::{Diagnostic, DiagnosticQueue, ErrorGuaranteed};
use weave_gen::{lower_container, ContainerOutput};
use weave_ir::{MethodDecl, TypeOracle};
use weave_migrate::{
    ContainerStore, LegacyCall, MigrationError, MigrationFix, Migrator, SemanticModel,
};

use crate::{Cancellation, Cancelled, CompilerOptions};

/// Declarations of one target container, as handed over by the front end.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ContainerInput {
    pub name: String,
    pub decls: Vec<MethodDecl>,
}

impl ContainerInput {
    pub fn new(name: impl Into<String>, decls: Vec<MethodDecl>) -> Self {
        ContainerInput {
            name: name.into(),
            decls,
        }
    }
}

/// Result of [`compile_batch`].
#[derive(Clone, Debug, Default)]
pub struct BatchOutput {
    /// One entry per input container, in input order.
    pub containers: Vec<ContainerOutput>,
    /// Diagnostics of all containers, sorted by span and capped by the
    /// configured error limit.
    pub diagnostics: Vec<Diagnostic>,
    pub errors: Option<ErrorGuaranteed>,
}

impl BatchOutput {
    pub fn has_errors(&self) -> bool {
        self.errors.is_some()
    }
}

/// Lower every container of a batch.
///
/// Containers share nothing, so with `options.parallel` they are lowered on
/// a scoped rayon pool. The output is identical to a sequential run.
pub fn compile_batch(
    inputs: &[ContainerInput],
    oracle: &(dyn TypeOracle + Sync),
    options: &CompilerOptions,
) -> BatchOutput {
    // Nobody else holds this token, so the run cannot be cancelled.
    compile_batch_cancellable(inputs, oracle, options, &Cancellation::new())
        .unwrap_or_default()
}

/// [`compile_batch`], checking `cancel` before each container.
///
/// Once cancelled, containers not yet started are skipped and everything
/// lowered so far is dropped.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(containers = inputs.len(), parallel = options.parallel)
)]
pub fn compile_batch_cancellable(
    inputs: &[ContainerInput],
    oracle: &(dyn TypeOracle + Sync),
    options: &CompilerOptions,
    cancel: &Cancellation,
) -> Result<BatchOutput, Cancelled> {
    let lower = |input: &ContainerInput| {
        if cancel.is_cancelled() {
            return None;
        }
        Some(lower_container(&input.name, &input.decls, oracle, &options.gen))
    };

    let lowered: Option<Vec<ContainerOutput>> = if options.parallel && inputs.len() > 1 {
        // A scoped pool is torn down before returning, so no worker outlives
        // the borrowed oracle.
        rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| inputs.par_iter().map(lower).collect())
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), lowering sequentially");
                inputs.iter().map(lower).collect()
            })
    } else {
        inputs.iter().map(lower).collect()
    };
    let Some(containers) = lowered else {
        tracing::debug!("cancelled, dropping partial results");
        return Err(Cancelled);
    };

    let mut queue = DiagnosticQueue::with_config(options.diagnostics.clone());
    for output in &containers {
        queue.extend(output.diagnostics.iter().cloned());
    }
    let errors = queue.has_errors();
    let diagnostics = queue.flush();

    tracing::debug!(
        methods = containers.iter().map(|c| c.methods.len()).sum::<usize>(),
        diagnostics = diagnostics.len(),
        failed = errors.is_some(),
        "batch lowered"
    );

    Ok(BatchOutput {
        containers,
        diagnostics,
        errors,
    })
}

/// Result of [`migrate_batch`]: one entry per call, in call order.
#[derive(Clone, Debug, Default)]
pub struct MigrationBatch {
    pub fixes: Vec<Result<MigrationFix, MigrationError>>,
}

impl MigrationBatch {
    /// Fixes that were produced.
    pub fn applied(&self) -> impl Iterator<Item = &MigrationFix> {
        self.fixes.iter().filter_map(|fix| fix.as_ref().ok())
    }

    /// Calls left untouched, by index, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &MigrationError)> {
        self.fixes
            .iter()
            .enumerate()
            .filter_map(|(index, fix)| fix.as_ref().err().map(|e| (index, e)))
    }

    /// Number of declarations appended to the store.
    pub fn minted(&self) -> usize {
        self.applied().filter(|fix| !fix.reused).count()
    }
}

/// Migrate legacy calls in order against one store.
///
/// Calls run one after another so generated names and event ids come out
/// the same on every run. A failed call does not stop the batch.
pub fn migrate_batch(
    calls: &[LegacyCall],
    model: &dyn SemanticModel,
    store: &dyn ContainerStore,
    options: &CompilerOptions,
) -> MigrationBatch {
    // Nobody else holds this token, so the run cannot be cancelled.
    migrate_batch_cancellable(calls, model, store, options, &Cancellation::new())
        .unwrap_or_default()
}

/// [`migrate_batch`], checking `cancel` before each call.
///
/// On cancellation no fix is returned, so the host applies no edit.
/// Declarations already appended stay in the store; a rerun reuses them.
#[tracing::instrument(level = "debug", skip_all, fields(calls = calls.len()))]
pub fn migrate_batch_cancellable(
    calls: &[LegacyCall],
    model: &dyn SemanticModel,
    store: &dyn ContainerStore,
    options: &CompilerOptions,
    cancel: &Cancellation,
) -> Result<MigrationBatch, Cancelled> {
    let migrator = Migrator::new(model, store, options.migrate.clone());
    let mut fixes = Vec::with_capacity(calls.len());
    for call in calls {
        cancel.check()?;
        fixes.push(migrator.migrate(call));
    }

    let batch = MigrationBatch { fixes };
    tracing::debug!(
        applied = batch.applied().count(),
        minted = batch.minted(),
        failed = batch.failures().count(),
        "batch migrated"
    );
    Ok(batch)
}
