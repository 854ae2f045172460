//! Generator configuration.

/// Knobs for the generator direction.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GenOptions {
    /// Largest regular-parameter count the fixed-arity fast path accepts.
    ///
    /// Bounded by the arities the runtime ships pre-built formatters for.
    pub fast_path_max_arity: usize,
    /// Leading character reserved for compiler-synthesized members.
    pub reserved_prefix: char,
}

impl Default for GenOptions {
    fn default() -> Self {
        GenOptions {
            fast_path_max_arity: 6,
            reserved_prefix: '_',
        }
    }
}

impl GenOptions {
    pub fn is_reserved(&self, name: &str) -> bool {
        name.starts_with(self.reserved_prefix)
    }
}
