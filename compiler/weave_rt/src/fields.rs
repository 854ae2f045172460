//! The structured field list handed to sinks by generic-fallback calls.
//!
//! An ordered, fixed-size, read-only sequence of `(name, value)` pairs. The
//! last entry is always `("{OriginalFormat}", template)`, so a list for
//! `n` parameters has `n + 1` entries.

use weave_ir::{FieldIndexError, FieldListShape, SlotRendering, ORIGINAL_FORMAT};
use weave_template::MessageTemplate;

use crate::render::render;
use crate::{FieldValue, FormatError, LazySequence};

/// A read-only view of one entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: &'a FieldValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StructuredFieldList {
    names: Vec<String>,
    /// Parameter values followed by the template text.
    values: Vec<FieldValue>,
    template: MessageTemplate,
}

impl StructuredFieldList {
    /// Pair `values` with the slots of `shape`, in slot order.
    ///
    /// Values for lazily rendered slots are wrapped as sequences: a null
    /// becomes an absent sequence, any other scalar a one-element one.
    pub fn from_shape(shape: &FieldListShape, values: Vec<FieldValue>) -> Result<Self, FormatError> {
        let slots = shape.parameter_slots();
        if slots.len() != values.len() {
            return Err(FormatError::ValueCountMismatch {
                expected: slots.len(),
                actual: values.len(),
            });
        }

        let values = slots
            .iter()
            .zip(values)
            .map(|(slot, value)| match (slot.rendering, value) {
                (SlotRendering::LazySequence, FieldValue::Null) => FieldValue::Seq(LazySequence::null()),
                (SlotRendering::LazySequence, FieldValue::Seq(seq)) => FieldValue::Seq(seq),
                (SlotRendering::LazySequence, scalar) => FieldValue::Seq(LazySequence::new(vec![scalar])),
                (SlotRendering::Plain, value) => value,
            });
        Ok(Self::build(
            slots.iter().map(|slot| slot.name.clone()),
            values,
            shape.template(),
        ))
    }

    /// A list from explicit `(name, value)` pairs.
    pub fn from_pairs<N: Into<String>>(pairs: impl IntoIterator<Item = (N, FieldValue)>, template: &str) -> Self {
        let (names, values): (Vec<String>, Vec<FieldValue>) =
            pairs.into_iter().map(|(n, v)| (n.into(), v)).unzip();
        Self::build(names, values, template)
    }

    fn build(
        names: impl IntoIterator<Item = String>,
        values: impl IntoIterator<Item = FieldValue>,
        template: &str,
    ) -> Self {
        let mut names: Vec<String> = names.into_iter().collect();
        let mut values: Vec<FieldValue> = values.into_iter().collect();
        names.push(ORIGINAL_FORMAT.to_string());
        values.push(FieldValue::Str(template.to_string()));
        StructuredFieldList {
            names,
            values,
            template: MessageTemplate::new(template),
        }
    }

    /// Entry count, `{OriginalFormat}` included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<Field<'_>, FieldIndexError> {
        match (self.names.get(index), self.values.get(index)) {
            (Some(name), Some(value)) => Ok(Field { name, value }),
            _ => Err(FieldIndexError {
                index,
                len: self.values.len(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Field<'_>> {
        self.names
            .iter()
            .zip(&self.values)
            .map(|(name, value)| Field { name, value })
    }

    /// First entry with this exact name.
    pub fn find(&self, name: &str) -> Option<&FieldValue> {
        self.iter().find(|field| field.name == name).map(|field| field.value)
    }

    pub fn template(&self) -> &str {
        self.template.text()
    }

    /// Render the message: each placeholder is replaced by the entry of
    /// the same name, with alignment applied. Placeholders without an
    /// entry are left as written.
    pub fn format(&self) -> String {
        let params = &self.names[..self.names.len() - 1];
        render(self.template.text(), &self.template.segments(), |placeholder| {
            params
                .iter()
                .position(|name| *name == placeholder.name)
                .map(|i| &self.values[i] as &dyn std::fmt::Display)
        })
    }
}
