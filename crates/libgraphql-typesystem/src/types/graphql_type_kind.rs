use crate::types::GraphQLType;

/// Similar to [`GraphQLType`] except without the corresponding type metadata.
/// Useful when representing a group or category of [`GraphQLType`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    /// Indicates if types of this kind can be used as an
    /// [input type](https://spec.graphql.org/October2021/#IsInputType()).
    pub fn is_input_type(&self) -> bool {
        match self {
            Self::Bool
            | Self::Enum
            | Self::Float
            | Self::ID
            | Self::InputObject
            | Self::Int
            | Self::Scalar
            | Self::String => true,

            Self::Interface
            | Self::Object
            | Self::Union => false,
        }
    }

    /// Indicates if types of this kind can be used as an
    /// [output type](https://spec.graphql.org/October2021/#IsOutputType()).
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum => "Enum",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject => "InputObject",
            Self::Int => "Int",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::String => "String",
            Self::Union => "Union",
        }
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Bool => GraphQLTypeKind::Bool,
            GraphQLType::Enum(_) => GraphQLTypeKind::Enum,
            GraphQLType::Float => GraphQLTypeKind::Float,
            GraphQLType::ID => GraphQLTypeKind::ID,
            GraphQLType::InputObject(_) => GraphQLTypeKind::InputObject,
            GraphQLType::Int => GraphQLTypeKind::Int,
            GraphQLType::Interface(_) => GraphQLTypeKind::Interface,
            GraphQLType::Object(_) => GraphQLTypeKind::Object,
            GraphQLType::Scalar(_) => GraphQLTypeKind::Scalar,
            GraphQLType::String => GraphQLTypeKind::String,
            GraphQLType::Union(_) => GraphQLTypeKind::Union,
        }
    }
}
