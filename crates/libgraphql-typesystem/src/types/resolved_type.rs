use crate::named_ref::DerefByNameError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypesMap;

/// The result of resolving a [`TypeRef`](crate::types::TypeRef): the same
/// list/non-null wrapping, with the innermost type identified by name and
/// kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedType {
    List(Box<ResolvedType>),
    Named {
        kind: GraphQLTypeKind,
        type_ref: NamedGraphQLTypeRef,
    },
    NonNull(Box<ResolvedType>),
}
impl ResolvedType {
    pub(crate) fn named(type_: &GraphQLType) -> Self {
        Self::Named {
            kind: GraphQLTypeKind::from(type_),
            type_ref: NamedGraphQLTypeRef::new(type_.name()),
        }
    }

    /// The [`GraphQLTypeKind`] of the innermost named type.
    pub fn innermost_kind(&self) -> &GraphQLTypeKind {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_kind(),
            Self::Named { kind, .. } => kind,
        }
    }

    /// Looks up the innermost named type in `types`.
    pub fn innermost_type<'a>(
        &self,
        types: &'a TypesMap,
    ) -> Result<&'a GraphQLType, DerefByNameError> {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_type(types),
            Self::Named { type_ref, .. } => type_ref.deref(types),
        }
    }

    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_type_name(),
            Self::Named { type_ref, .. } => type_ref.name(),
        }
    }

    /// Indicates if the innermost named type can be used as an
    /// [input type](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types).
    pub fn is_input_type(&self) -> bool {
        self.innermost_kind().is_input_type()
    }

    /// Indicates if the innermost named type can be used as an
    /// [output type](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types).
    pub fn is_output_type(&self) -> bool {
        self.innermost_kind().is_output_type()
    }

    /// Indicates if this type is nullable (i.e. not wrapped in non-null at
    /// its outermost layer).
    pub fn nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }
}
impl std::fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named { type_ref, .. } => f.write_str(type_ref.name()),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
