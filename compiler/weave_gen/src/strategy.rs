//! Emission-strategy selection.

use smallvec::SmallVec;
use weave_ir::{CallDescriptor, EmissionStrategy, SeveritySource};

use crate::GenOptions;

/// Pick the payload representation for a validated descriptor.
///
/// The fixed-arity fast path is chosen only when all of these hold:
/// the regular-parameter count is within `fast_path_max_arity`, the
/// severity is a constant, and the placeholders are exactly the regular
/// parameters in declaration order (compared case-insensitively, no
/// repeats, none missing, none extra). Anything else falls back to the
/// structured field list.
pub fn select(descriptor: &CallDescriptor, options: &GenOptions) -> EmissionStrategy {
    let count = descriptor.regular_count();
    if count > options.fast_path_max_arity {
        tracing::trace!(method = %descriptor.target_name, count, "arity exceeds fast path");
        return EmissionStrategy::GenericFallback;
    }

    if let SeveritySource::Parameter(_) = descriptor.severity {
        tracing::trace!(method = %descriptor.target_name, "dynamic severity");
        return EmissionStrategy::GenericFallback;
    }

    let in_order = descriptor.placeholders.len() == count
        && descriptor
            .regular_parameters()
            .zip(&descriptor.placeholders)
            .all(|(param, placeholder)| param.name.eq_ignore_ascii_case(placeholder));
    if !in_order {
        tracing::trace!(method = %descriptor.target_name, "placeholders do not line up");
        return EmissionStrategy::GenericFallback;
    }

    let types: SmallVec<[_; 6]> = descriptor
        .regular_parameters()
        .map(|p| p.ty.clone())
        .collect();
    EmissionStrategy::FixedArityFastPath(types)
}

#[cfg(test)]
mod tests;
