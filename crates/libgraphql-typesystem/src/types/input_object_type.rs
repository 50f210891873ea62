use crate::types::Argument;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
///
/// Input fields share their model with field and directive arguments: each
/// is a named, input-typed [`Argument`] with an optional default value.
#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Argument>,
    pub(super) name: String,
}
impl InputObjectType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A map from FieldName -> input field, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Argument> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: IndexMap::new(),
            name: name.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: Argument) -> Self {
        self.fields.insert(field.name().to_string(), field);
        self
    }
}
