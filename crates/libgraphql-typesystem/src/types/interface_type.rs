use crate::schema::SchemaViolation;
use crate::types::FieldDefinition;
use crate::types::FieldMap;
use crate::types::FieldSetDeclaration;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use inherent::inherent;
use std::sync::Arc;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
#[derive(Debug)]
pub struct InterfaceType(pub(super) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn new(name: impl Into<String>, field_set: FieldSetDeclaration) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name.into(), field_set))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// Looks up the field named `name`, forcing it if it was declared
    /// lazily.
    pub fn field(&self, name: &str) -> Result<Option<&Arc<FieldDefinition>>, SchemaViolation> {
        self.0.field(name)
    }

    /// A map from FieldName -> field for all fields declared on this
    /// [`InterfaceType`], in declaration order.
    ///
    /// The map is built from the type's field set declaration on the first
    /// call. Lazily declared fields are not forced until they are accessed.
    pub fn fields(&self) -> Result<&FieldMap, SchemaViolation> {
        self.0.fields()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
