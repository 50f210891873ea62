use crate::schema::SchemaViolation;
use crate::types::FieldDefinition;
use crate::types::UnresolvedFieldDefinition;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, SchemaViolation>;

/// One entry of a freshly built field map: either a concrete definition or
/// a deferred one that has not been forced yet.
#[derive(Clone, Debug)]
pub enum FieldMapEntry {
    Defined(Arc<FieldDefinition>),
    Deferred(UnresolvedFieldDefinition),
}
impl FieldMapEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Defined(field) => field.name(),
            Self::Deferred(unresolved) => unresolved.name(),
        }
    }
}

/// The storage slot for a single field of an object or interface type.
///
/// A deferred slot forces its producer on first access and keeps the
/// outcome (including a failure) for the lifetime of the slot. Concurrent
/// first accesses block on a single initialization.
#[derive(Debug)]
pub enum FieldSlot {
    Defined(Arc<FieldDefinition>),
    Deferred {
        forced: OnceLock<Result<Arc<FieldDefinition>>>,
        pending: UnresolvedFieldDefinition,
    },
}
impl FieldSlot {
    pub fn force(&self) -> Result<&Arc<FieldDefinition>> {
        match self {
            Self::Defined(field) => Ok(field),
            Self::Deferred { forced, pending } =>
                forced.get_or_init(|| pending.resolve())
                    .as_ref()
                    .map_err(Clone::clone),
        }
    }

    /// Indicates whether this slot holds a concrete (or already forced)
    /// field, so that accessing it will not invoke a producer.
    pub fn is_forced(&self) -> bool {
        match self {
            Self::Defined(_) => true,
            Self::Deferred { forced, .. } => forced.get().is_some(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Defined(field) => field.name(),
            Self::Deferred { pending, .. } => pending.name(),
        }
    }
}
impl std::convert::From<FieldMapEntry> for FieldSlot {
    fn from(value: FieldMapEntry) -> Self {
        match value {
            FieldMapEntry::Defined(field) => Self::Defined(field),
            FieldMapEntry::Deferred(pending) => Self::Deferred {
                forced: OnceLock::new(),
                pending,
            },
        }
    }
}

/// The fields of an object or interface type, keyed by name in declaration
/// order.
#[derive(Debug, Default)]
pub struct FieldMap(IndexMap<String, FieldSlot>);
impl FieldMap {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Looks up (forcing if necessary) the field named `name`.
    pub fn field(&self, name: &str) -> Result<Option<&Arc<FieldDefinition>>> {
        self.0.get(name).map(FieldSlot::force).transpose()
    }

    /// Forces every deferred slot, returning the definitions in declaration
    /// order along with the violations of any slots that failed to force.
    pub fn force_all(&self) -> (Vec<&Arc<FieldDefinition>>, Vec<SchemaViolation>) {
        let mut fields = vec![];
        let mut errors = vec![];
        for slot in self.0.values() {
            match slot.force() {
                Ok(field) => fields.push(field),
                Err(err) => errors.push(err),
            }
        }
        (fields, errors)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FieldSlot> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn slot(&self, name: &str) -> Option<&FieldSlot> {
        self.0.get(name)
    }
}
impl std::convert::From<IndexMap<String, FieldMapEntry>> for FieldMap {
    fn from(value: IndexMap<String, FieldMapEntry>) -> Self {
        Self(value.into_iter()
            .map(|(name, entry)| (name, entry.into()))
            .collect())
    }
}
