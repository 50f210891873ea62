use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypesMap;
use crate::types::UnionType;

/// Represents a defined GraphQL type.
#[derive(Debug)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// Indicates if this is one of the scalar types every schema includes:
    /// `Boolean`, `Float`, `ID`, `Int`, or `String`.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String,
        )
    }

    pub fn is_input_type(&self) -> bool {
        self.kind().is_input_type()
    }

    pub fn is_output_type(&self) -> bool {
        self.kind().is_output_type()
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = TypesMap;

    fn deref_name<'a>(
        types: &'a TypesMap,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
impl std::convert::From<EnumType> for GraphQLType {
    fn from(value: EnumType) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InputObjectType> for GraphQLType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(value)
    }
}
impl std::convert::From<InterfaceType> for GraphQLType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(value)
    }
}
impl std::convert::From<ObjectType> for GraphQLType {
    fn from(value: ObjectType) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ScalarType> for GraphQLType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}
impl std::convert::From<UnionType> for GraphQLType {
    fn from(value: UnionType) -> Self {
        Self::Union(value)
    }
}

pub type NamedGraphQLTypeRef = NamedRef<GraphQLType>;
