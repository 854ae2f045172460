//! Shape of the structured field list built by the generic fallback.
//!
//! At run time a generic-fallback call hands the sink an ordered, fixed-size,
//! read-only list of `(name, value)` pairs whose last entry is always
//! `("{OriginalFormat}", template)`. [`FieldListShape`] is the compile-time
//! description of that list: which parameter feeds which slot, under which
//! name, and how the slot renders.

use std::fmt;

use crate::TypeRef;

/// Name of the terminal slot holding the raw template text.
pub const ORIGINAL_FORMAT: &str = "{OriginalFormat}";

/// How a slot's value is turned into text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotRendering {
    /// The value's own textual form.
    Plain,
    /// An iterable rendered as `[e0, e1, ...]`, or `(null)` when absent,
    /// computed only when the text is requested.
    LazySequence,
}

/// Where a slot's value comes from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotSource {
    /// The named method parameter.
    Parameter { name: String, ty: TypeRef },
    /// The raw template text.
    OriginalFormat(String),
}

/// One `(name, value)` entry of the field list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSlot {
    pub name: String,
    pub source: SlotSource,
    pub rendering: SlotRendering,
}

/// Indexing past the end of a field list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldIndexError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for FieldIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field index {} is out of range (field list has {} entries)",
            self.index, self.len
        )
    }
}

impl std::error::Error for FieldIndexError {}

/// Ordered slots of a generic-fallback field list.
///
/// Invariant: non-empty, and the last slot is the `{OriginalFormat}` slot.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldListShape {
    slots: Vec<FieldSlot>,
}

impl FieldListShape {
    /// Build a shape from the parameter slots; the terminal slot is appended.
    pub fn new(parameter_slots: Vec<FieldSlot>, template: impl Into<String>) -> Self {
        let mut slots = parameter_slots;
        slots.push(FieldSlot {
            name: ORIGINAL_FORMAT.to_string(),
            source: SlotSource::OriginalFormat(template.into()),
            rendering: SlotRendering::Plain,
        });
        FieldListShape { slots }
    }

    /// Number of slots, terminal slot included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: the terminal slot is always present.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&FieldSlot, FieldIndexError> {
        self.slots.get(index).ok_or(FieldIndexError {
            index,
            len: self.slots.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSlot> {
        self.slots.iter()
    }

    /// Slots fed by parameters, in order.
    pub fn parameter_slots(&self) -> &[FieldSlot] {
        &self.slots[..self.slots.len() - 1]
    }

    /// The raw template carried by the terminal slot.
    pub fn template(&self) -> &str {
        match self.slots.last().map(|slot| &slot.source) {
            Some(SlotSource::OriginalFormat(template)) => template,
            _ => "",
        }
    }
}
