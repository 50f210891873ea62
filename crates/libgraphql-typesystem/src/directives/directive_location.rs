use crate::descriptor::ConfigValue;
use thiserror::Error;

/// A syntactic position at which a directive may be applied.
///
/// See
/// [Directive Locations](https://spec.graphql.org/October2021/#DirectiveLocations).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    VariableDefinition,
}
impl DirectiveLocation {
    pub const ALL: [DirectiveLocation; 19] = [
        Self::ArgumentDefinition,
        Self::Enum,
        Self::EnumValue,
        Self::Field,
        Self::FieldDefinition,
        Self::FragmentDefinition,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::InputFieldDefinition,
        Self::InputObject,
        Self::Interface,
        Self::Mutation,
        Self::Object,
        Self::Query,
        Self::Scalar,
        Self::Schema,
        Self::Subscription,
        Self::Union,
        Self::VariableDefinition,
    ];

    /// The name of this location as written in SDL (e.g. `FIELD_DEFINITION`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::Field => "FIELD",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Query => "QUERY",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Subscription => "SUBSCRIPTION",
            Self::Union => "UNION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }

    /// Indicates if this is an
    /// [executable directive location](https://spec.graphql.org/October2021/#ExecutableDirectiveLocation)
    /// (as opposed to a type system location).
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Self::Field
            | Self::FragmentDefinition
            | Self::FragmentSpread
            | Self::InlineFragment
            | Self::Mutation
            | Self::Query
            | Self::Subscription
            | Self::VariableDefinition,
        )
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl std::str::FromStr for DirectiveLocation {
    type Err = DirectiveLocationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| DirectiveLocationParseError(s.to_string()))
    }
}
impl std::convert::From<DirectiveLocation> for ConfigValue {
    fn from(value: DirectiveLocation) -> Self {
        ConfigValue::String(value.as_str().to_string())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("`{0}` is not a known directive location")]
pub struct DirectiveLocationParseError(pub String);
