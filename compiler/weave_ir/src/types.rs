//! Type references and the injected type-identity test.
//!
//! The compiler never inspects host-language types itself. It carries the
//! front end's type names as opaque [`TypeRef`]s and asks a [`TypeOracle`]
//! whether a type is one of the handful of [`WellKnownType`]s it cares about.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

/// Opaque, front-end supplied name of a type (e.g. `"ILogger"`, `"int"`).
///
/// Equality is textual: two references to the same type must be spelled the
/// same way by the front end.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeRef(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::new(name)
    }
}

/// Types the compiler reasons about by identity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WellKnownType {
    /// The logger handle passed as first argument.
    Logger,
    /// Exception values attached to a record.
    Exception,
    /// The severity enum.
    LogLevel,
    /// Event identifiers accepted by legacy calls.
    EventId,
    /// Calendar timestamps, rendered differently per host culture.
    Timestamp,
    /// Iterables of unknown element type.
    Enumerable,
    /// The host string type. Strings are iterable but render as text.
    String,
}

impl WellKnownType {
    pub const ALL: &[WellKnownType] = &[
        WellKnownType::Logger,
        WellKnownType::Exception,
        WellKnownType::LogLevel,
        WellKnownType::EventId,
        WellKnownType::Timestamp,
        WellKnownType::Enumerable,
        WellKnownType::String,
    ];
}

/// Type-identity test supplied by the host.
///
/// `is_assignable(ty, target)` must hold only for identity or an implicit
/// upcast (`ty` derives from or implements `target`). Narrowing and
/// user-defined conversions must answer `false`.
pub trait TypeOracle {
    fn is_assignable(&self, ty: &TypeRef, target: WellKnownType) -> bool;

    /// Iterable that is not a string: rendered element-wise.
    fn is_sequence(&self, ty: &TypeRef) -> bool {
        self.is_assignable(ty, WellKnownType::Enumerable)
            && !self.is_assignable(ty, WellKnownType::String)
    }
}

/// Table-driven [`TypeOracle`] for hosts that can enumerate their type
/// hierarchy up front.
///
/// Each registered type lists the well-known types it is identical to or
/// implicitly convertible to.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    entries: FxHashMap<TypeRef, FxHashSet<WellKnownType>>,
    canonical: FxHashMap<WellKnownType, TypeRef>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table preloaded with the conventional host names.
    pub fn with_defaults() -> Self {
        let mut table = TypeTable::new();
        table.define(WellKnownType::Logger, "ILogger");
        table.define(WellKnownType::Exception, "Exception");
        table.define(WellKnownType::LogLevel, "LogLevel");
        table.define(WellKnownType::EventId, "EventId");
        table.define(WellKnownType::Timestamp, "DateTime");
        table.define(WellKnownType::Enumerable, "IEnumerable");
        table.define(WellKnownType::String, "string");
        table.register("string", WellKnownType::Enumerable);
        table.register("DateTimeOffset", WellKnownType::Timestamp);
        table
    }

    /// Declare `name` as the canonical spelling of a well-known type.
    pub fn define(&mut self, known: WellKnownType, name: &str) -> &mut Self {
        self.canonical.insert(known, TypeRef::new(name));
        self.register(name, known)
    }

    /// Record that `name` is identical to, or upcasts to, `known`.
    pub fn register(&mut self, name: &str, known: WellKnownType) -> &mut Self {
        self.entries
            .entry(TypeRef::new(name))
            .or_default()
            .insert(known);
        self
    }

    /// The canonical type reference for a well-known type, if defined.
    pub fn canonical(&self, known: WellKnownType) -> Option<&TypeRef> {
        self.canonical.get(&known)
    }
}

impl TypeOracle for TypeTable {
    fn is_assignable(&self, ty: &TypeRef, target: WellKnownType) -> bool {
        self.entries
            .get(ty)
            .is_some_and(|known| known.contains(&target))
    }
}
