use crate::directives::Directive;
use crate::directives::DirectiveSet;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::TypeResolver;
use crate::types::TypesMap;
use inherent::inherent;
use std::sync::Arc;

/// Represents a fully built, validated, and immutable GraphQL schema.
#[derive(Debug)]
pub struct Schema {
    pub(super) directives: DirectiveSet,
    pub(super) types: TypesMap,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&Arc<Directive>> {
        self.directives.get(name)
    }

    /// All directives defined in this [`Schema`], including the builtin
    /// directives that were not replaced by a directive of the same name.
    pub fn directives(&self) -> &DirectiveSet {
        &self.directives
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// All types defined in this [`Schema`], including the builtin scalars.
    pub fn types(&self) -> &TypesMap {
        &self.types
    }
}

#[inherent]
impl TypeResolver for Schema {
    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }
}
