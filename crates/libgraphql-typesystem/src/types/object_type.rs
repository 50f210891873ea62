use crate::schema::SchemaViolation;
use crate::types::FieldDefinition;
use crate::types::FieldMap;
use crate::types::FieldSetDeclaration;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use inherent::inherent;
use std::sync::Arc;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects).
#[derive(Debug)]
pub struct ObjectType(pub(super) ObjectOrInterfaceTypeData);
impl ObjectType {
    pub fn new(name: impl Into<String>, field_set: FieldSetDeclaration) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name.into(), field_set))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The description of this [`ObjectType`], if one was provided.
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// Looks up the field named `name`, forcing it if it was declared
    /// lazily.
    pub fn field(&self, name: &str) -> Result<Option<&Arc<FieldDefinition>>, SchemaViolation> {
        self.0.field(name)
    }

    /// A map from FieldName -> field for all fields declared on this
    /// [`ObjectType`], in declaration order.
    ///
    /// The map is built from the type's field set declaration on the first
    /// call. Lazily declared fields are not forced until they are accessed.
    pub fn fields(&self) -> Result<&FieldMap, SchemaViolation> {
        self.0.fields()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
