use crate::schema::SchemaViolation;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::TypeResolver;
use crate::types::UnionTypeValidator;
use crate::utils;
use indexmap::IndexMap;
use inherent::inherent;

/// The registry of named types that field and argument types are resolved
/// against. Every [`TypesMap`] starts out holding the builtin scalars.
#[derive(Debug)]
pub struct TypesMap {
    types: IndexMap<String, GraphQLType>,
}
impl TypesMap {
    /// Registers a new named type.
    ///
    /// Fails if the name is not a valid GraphQL name (or uses the reserved
    /// `__` prefix) or if a type with the same name is already registered.
    pub fn add_new_type(&mut self, type_: impl Into<GraphQLType>) -> Result<(), SchemaViolation> {
        let type_ = type_.into();
        let type_name = type_.name().to_string();

        utils::validate_name(&type_name).map_err(
            |source| SchemaViolation::InvalidTypeName {
                type_name: type_name.to_string(),
                source,
            }
        )?;

        if self.types.contains_key(&type_name) {
            return Err(SchemaViolation::DuplicateTypeDefinition { type_name });
        }

        log::trace!("Registered the `{type_name}` type.");
        self.types.insert(type_name, type_);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, GraphQLType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn new() -> Self {
        let builtins = [
            GraphQLType::Bool,
            GraphQLType::Float,
            GraphQLType::ID,
            GraphQLType::Int,
            GraphQLType::String,
        ];
        Self {
            types: builtins.into_iter()
                .map(|type_| (type_.name().to_string(), type_))
                .collect(),
        }
    }

    /// Runs the validation pass over every registered type, collecting the
    /// violations of all of them rather than stopping at the first.
    pub fn validate(&self) -> Vec<SchemaViolation> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Object(obj_type) =>
                    errors.append(&mut ObjectOrInterfaceTypeValidator::new(
                        &obj_type.0,
                        self,
                    ).validate()),

                GraphQLType::Interface(iface_type) =>
                    errors.append(&mut ObjectOrInterfaceTypeValidator::new(
                        &iface_type.0,
                        self,
                    ).validate()),

                GraphQLType::Union(union_type) =>
                    errors.append(&mut UnionTypeValidator::new(
                        union_type,
                        self,
                    ).validate()),

                GraphQLType::InputObject(input_obj_type) =>
                    errors.append(&mut InputObjectTypeValidator::new(
                        input_obj_type,
                        self,
                    ).validate()),

                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => (),
            }
        }
        errors
    }
}
impl std::default::Default for TypesMap {
    fn default() -> Self {
        Self::new()
    }
}

#[inherent]
impl TypeResolver for TypesMap {
    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }
}
