use crate::schema::SchemaViolation;
use crate::types::FieldDefinition;
use crate::types::FieldMap;
use crate::types::FieldMapBuilder;
use crate::types::FieldSetDeclaration;
use crate::types::ObjectOrInterfaceTypeTrait;
use inherent::inherent;
use std::sync::Arc;
use std::sync::OnceLock;

#[derive(Debug)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) description: Option<String>,
    pub(super) field_set: FieldSetDeclaration,
    pub(super) fields: OnceLock<Result<FieldMap, SchemaViolation>>,
    pub(super) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn new(name: String, field_set: FieldSetDeclaration) -> Self {
        Self {
            description: None,
            field_set,
            fields: OnceLock::new(),
            name,
        }
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Result<Option<&Arc<FieldDefinition>>, SchemaViolation> {
        self.fields()?.field(name)
    }

    pub fn fields(&self) -> Result<&FieldMap, SchemaViolation> {
        self.fields
            .get_or_init(|| {
                FieldMapBuilder::define_field_map(&self.name, &self.field_set)
                    .map(FieldMap::from)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
