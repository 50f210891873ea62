use crate::schema::SchemaViolation;
use crate::types::FieldDefinition;
use crate::types::FieldMap;
use std::sync::Arc;

pub(super) trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn field(&self, name: &str) -> Result<Option<&Arc<FieldDefinition>>, SchemaViolation>;
    fn fields(&self) -> Result<&FieldMap, SchemaViolation>;
    fn name(&self) -> &str;
}
