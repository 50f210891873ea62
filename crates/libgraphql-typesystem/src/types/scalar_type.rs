/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars). The
/// builtin scalars are [`GraphQLType::Bool`](crate::types::GraphQLType::Bool),
/// [`GraphQLType::Float`](crate::types::GraphQLType::Float), and so on.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl ScalarType {
    /// The description of this [`ScalarType`], if one was provided.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    // The name of this [`ScalarType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
