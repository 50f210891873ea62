use crate::descriptor::Callable;
use crate::descriptor::ConfigValue;
use crate::descriptor::Descriptor;
use crate::descriptor::FieldProducer;
use crate::descriptor::keys;
use crate::schema::SchemaViolation;
use crate::types::FieldDefinition;
use crate::types::FieldMapEntry;
use crate::types::NamedGraphQLTypeRef;
use crate::types::UnresolvedFieldDefinition;
use crate::utils;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaViolation>;

/// The key a field declaration is listed under in a field set: a field name,
/// or a position in a list of declarations.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKey {
    Name(String),
    Position(usize),
}
impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Position(position) => write!(f, "{position}"),
        }
    }
}

/// A single field declaration, classified by shape.
///
/// Raw [`ConfigValue`]s are classified exactly once, by
/// [`FieldDeclaration::classify`]; everything downstream dispatches over
/// these variants.
#[derive(Debug)]
pub enum FieldDeclaration {
    /// A producer to be forced on first access to the field.
    Deferred {
        name: String,
        producer: FieldProducer,
    },

    /// An already-constructed definition, passed through as-is.
    Definition(Arc<FieldDefinition>),

    /// A field descriptor whose `name` entry is known to be set.
    Descriptor(Descriptor),

    /// A bare type declared under a field name. Equivalent to the descriptor
    /// `{name: <name>, type: <type_value>}`.
    TypeShorthand {
        name: String,
        type_value: ConfigValue,
    },
}
impl FieldDeclaration {
    pub fn classify(
        type_name: &str,
        key: &FieldKey,
        value: ConfigValue,
    ) -> Result<Self> {
        match (value, key) {
            (ConfigValue::Map(mut descriptor), _) => {
                let has_name = matches!(
                    descriptor.get(keys::NAME),
                    Some(ConfigValue::String(_)),
                );
                if !has_name {
                    match key {
                        FieldKey::Name(name) => {
                            descriptor.insert(keys::NAME, name.as_str());
                        },
                        FieldKey::Position(position) =>
                            return Err(SchemaViolation::MissingFieldName {
                                position: *position,
                                type_name: type_name.to_string(),
                            }),
                    }
                }

                if let Some(args) = descriptor.get(keys::ARGS)
                    && !args.is_structured() {
                    return Err(SchemaViolation::InvalidFieldArgs {
                        field_name:
                            descriptor.get_str(keys::NAME)
                                .unwrap_or_default()
                                .to_string(),
                        rendered: utils::print_safe(args),
                        type_name: type_name.to_string(),
                    });
                }

                Ok(Self::Descriptor(descriptor))
            },

            (ConfigValue::Field(field), _) => Ok(Self::Definition(field)),

            (ConfigValue::Callable(Callable::FieldProducer(producer)), FieldKey::Name(name)) =>
                Ok(Self::Deferred {
                    name: name.to_string(),
                    producer,
                }),

            (ConfigValue::Callable(Callable::FieldProducer(_)), FieldKey::Position(position)) =>
                Err(SchemaViolation::DeferredFieldRequiresName {
                    position: *position,
                    type_name: type_name.to_string(),
                }),

            (value, FieldKey::Name(name)) if !value.is_empty_value() =>
                Ok(Self::TypeShorthand {
                    name: name.to_string(),
                    type_value: value,
                }),

            (value, key) => Err(SchemaViolation::InvalidFieldDeclaration {
                key: key.to_string(),
                rendered: utils::print_safe(&value),
                type_name: type_name.to_string(),
            }),
        }
    }

    /// Forces this declaration into a concrete [`FieldDefinition`], invoking
    /// (possibly nested) deferred producers along the way.
    pub fn into_field_definition(self, type_name: &str) -> Result<Arc<FieldDefinition>> {
        self.into_field_definition_at_depth(type_name, 0)
    }

    /// `deferred_depth` counts the producers already forced to reach this
    /// declaration.
    pub(super) fn into_field_definition_at_depth(
        self,
        type_name: &str,
        deferred_depth: usize,
    ) -> Result<Arc<FieldDefinition>> {
        match self.into_map_entry(type_name)? {
            FieldMapEntry::Defined(field) => Ok(field),
            FieldMapEntry::Deferred(unresolved) =>
                unresolved.resolve_at_depth(deferred_depth),
        }
    }

    /// Converts this declaration into a field map entry without forcing any
    /// deferred producer.
    pub fn into_map_entry(self, type_name: &str) -> Result<FieldMapEntry> {
        Ok(match self {
            Self::Deferred { name, producer } =>
                FieldMapEntry::Deferred(UnresolvedFieldDefinition::new(
                    name,
                    NamedGraphQLTypeRef::new(type_name),
                    producer,
                )),

            Self::Definition(field) => FieldMapEntry::Defined(field),

            Self::Descriptor(descriptor) =>
                FieldMapEntry::Defined(Arc::new(FieldDefinition::create(type_name, descriptor)?)),

            Self::TypeShorthand { name, type_value } => {
                let descriptor = Descriptor::new()
                    .with(keys::NAME, name)
                    .with(keys::TYPE, type_value);
                FieldMapEntry::Defined(Arc::new(FieldDefinition::create(type_name, descriptor)?))
            },
        })
    }
}
