//! Driver configuration.

use weave_diagnostic::DiagnosticConfig;
use weave_gen::GenOptions;
use weave_migrate::MigrateOptions;

/// Options for one compiler run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompilerOptions {
    pub gen: GenOptions,
    pub migrate: MigrateOptions,
    pub diagnostics: DiagnosticConfig,
    /// Lower containers on a rayon pool.
    pub parallel: bool,
    /// Worker count for the pool; 0 lets rayon choose.
    pub threads: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            gen: GenOptions::default(),
            migrate: MigrateOptions::default(),
            diagnostics: DiagnosticConfig::default(),
            parallel: true,
            threads: 0,
        }
    }
}

impl CompilerOptions {
    /// Single-threaded options, handy for reproducing a run step by step.
    pub fn sequential() -> Self {
        CompilerOptions {
            parallel: false,
            ..Self::default()
        }
    }
}
