//! Field-list synthesis for the generic fallback.

use weave_ir::{
    CallDescriptor, FieldListShape, FieldSlot, SlotRendering, SlotSource, TypeOracle,
};

/// Lay out the structured field list for a generic-fallback call.
///
/// One slot per regular parameter in declaration order, then the
/// `{OriginalFormat}` slot. A slot is named after the placeholder that
/// matches its parameter case-insensitively, keeping the placeholder's
/// casing, or after the parameter itself when nothing matches. Sequence
/// parameters render lazily as `[e0, e1, ...]`.
pub fn synthesize(descriptor: &CallDescriptor, oracle: &dyn TypeOracle) -> FieldListShape {
    let slots = descriptor
        .regular_parameters()
        .map(|param| {
            let name = descriptor
                .placeholders
                .iter()
                .find(|placeholder| placeholder.eq_ignore_ascii_case(&param.name))
                .unwrap_or(&param.name)
                .clone();
            let rendering = if oracle.is_sequence(&param.ty) {
                SlotRendering::LazySequence
            } else {
                SlotRendering::Plain
            };
            FieldSlot {
                name,
                source: SlotSource::Parameter {
                    name: param.name.clone(),
                    ty: param.ty.clone(),
                },
                rendering,
            }
        })
        .collect();

    FieldListShape::new(slots, descriptor.template.clone())
}
