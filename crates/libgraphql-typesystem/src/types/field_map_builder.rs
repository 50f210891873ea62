use crate::descriptor::ConfigValue;
use crate::schema::SchemaViolation;
use crate::types::FieldDeclaration;
use crate::types::FieldKey;
use crate::types::FieldMapEntry;
use crate::utils;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaViolation>;

/// Zero-argument producer of an entire field set: a map of field name to
/// declaration, or a list of named declarations.
#[derive(Clone)]
pub struct FieldSetThunk(Arc<dyn Fn() -> ConfigValue + Send + Sync>);
impl FieldSetThunk {
    pub fn produce(&self) -> ConfigValue {
        (self.0)()
    }
}

/// The declared fields of an object or interface type, before
/// normalization.
#[derive(Clone)]
pub enum FieldSetDeclaration {
    Entries(Vec<(FieldKey, ConfigValue)>),
    Thunk(FieldSetThunk),
}
impl FieldSetDeclaration {
    /// Fields produced by `f` when the field map is first built.
    pub fn deferred(f: impl Fn() -> ConfigValue + Send + Sync + 'static) -> Self {
        Self::Thunk(FieldSetThunk(Arc::new(f)))
    }

    /// Fields keyed by position. Each declaration must carry its own name.
    pub fn list<V: Into<ConfigValue>>(entries: impl IntoIterator<Item = V>) -> Self {
        Self::Entries(
            entries.into_iter()
                .enumerate()
                .map(|(idx, value)| (FieldKey::Position(idx), value.into()))
                .collect(),
        )
    }

    /// Fields keyed by name.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        Self::Entries(
            entries.into_iter()
                .map(|(key, value)| (FieldKey::Name(key.into()), value.into()))
                .collect(),
        )
    }
}
impl std::default::Default for FieldSetDeclaration {
    fn default() -> Self {
        Self::Entries(vec![])
    }
}
impl std::fmt::Debug for FieldSetDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entries(entries) =>
                f.debug_tuple("Entries").field(entries).finish(),
            Self::Thunk(_) => f.write_str("Thunk(..)"),
        }
    }
}

/// Normalizes a [`FieldSetDeclaration`] into a map of field name to
/// [`FieldMapEntry`].
pub struct FieldMapBuilder;
impl FieldMapBuilder {
    pub fn define_field_map(
        type_name: &str,
        declaration: &FieldSetDeclaration,
    ) -> Result<IndexMap<String, FieldMapEntry>> {
        let entries = match declaration {
            FieldSetDeclaration::Entries(entries) => entries.to_owned(),
            FieldSetDeclaration::Thunk(thunk) => match thunk.produce() {
                ConfigValue::Map(descriptor) =>
                    descriptor.into_iter()
                        .map(|(key, value)| (FieldKey::Name(key), value))
                        .collect(),
                ConfigValue::List(list) =>
                    list.into_iter()
                        .enumerate()
                        .map(|(idx, value)| (FieldKey::Position(idx), value))
                        .collect(),
                other => return Err(SchemaViolation::FieldSetNotIterable {
                    rendered: utils::print_safe(&other),
                    type_name: type_name.to_string(),
                }),
            },
        };

        let mut field_map = IndexMap::with_capacity(entries.len());
        for (key, value) in entries {
            let entry =
                FieldDeclaration::classify(type_name, &key, value)?
                    .into_map_entry(type_name)?;
            let field_name = entry.name().to_string();
            if field_map.contains_key(&field_name) {
                return Err(SchemaViolation::DuplicateFieldDefinition {
                    field_name,
                    type_name: type_name.to_string(),
                });
            }
            field_map.insert(field_name, entry);
        }

        log::debug!(
            "Built the field map of `{type_name}` with {} field(s).",
            field_map.len(),
        );
        Ok(field_map)
    }
}
