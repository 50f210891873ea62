use crate::types::GraphQLType;
use crate::types::ResolvedType;
use crate::types::TypeResolver;
use std::sync::Arc;
use thiserror::Error;

/// Upper bound on how many deferred producers may be chained (a producer
/// returning a producer returning ...) before resolution gives up.
const MAX_DEFERRED_DEPTH: usize = 32;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeResolutionError {
    #[error(
        "Deferred type references were nested more than {max_depth} levels \
        deep"
    )]
    DeferredTypeDepthExceeded {
        max_depth: usize,
    },

    #[error("No type was provided")]
    MissingType,

    #[error("Non-null types cannot wrap other non-null types: `{rendered_type}`")]
    NestedNonNull {
        rendered_type: String,
    },

    #[error("There is no type defined with the name `{type_name}`")]
    UndefinedTypeName {
        type_name: String,
    },
}

/// Zero-argument producer of a [`TypeRef`], used to reference types that
/// may not have been constructed yet.
#[derive(Clone)]
pub struct TypeProducer(Arc<dyn Fn() -> TypeRef + Send + Sync>);
impl TypeProducer {
    pub fn produce(&self) -> TypeRef {
        (self.0)()
    }
}

/// A raw, unresolved reference to the type of a field or argument.
#[derive(Clone)]
pub enum TypeRef {
    Deferred(TypeProducer),
    List(Box<TypeRef>),
    Named(String),
    NonNull(Box<TypeRef>),
    Type(Arc<GraphQLType>),
}
impl TypeRef {
    pub fn deferred(f: impl Fn() -> TypeRef + Send + Sync + 'static) -> Self {
        Self::Deferred(TypeProducer(Arc::new(f)))
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn named(name: impl AsRef<str>) -> Self {
        Self::Named(name.as_ref().to_string())
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Resolves this reference against `types`, forcing any deferred
    /// producers along the way.
    pub fn resolve(
        &self,
        types: &dyn TypeResolver,
    ) -> Result<ResolvedType, TypeResolutionError> {
        self.resolve_impl(types, 0)
    }

    fn resolve_impl(
        &self,
        types: &dyn TypeResolver,
        deferred_depth: usize,
    ) -> Result<ResolvedType, TypeResolutionError> {
        match self {
            Self::Deferred(producer) => {
                if deferred_depth >= MAX_DEFERRED_DEPTH {
                    return Err(TypeResolutionError::DeferredTypeDepthExceeded {
                        max_depth: MAX_DEFERRED_DEPTH,
                    });
                }
                producer.produce().resolve_impl(types, deferred_depth + 1)
            },

            Self::List(inner) =>
                Ok(ResolvedType::List(Box::new(
                    inner.resolve_impl(types, deferred_depth)?,
                ))),

            Self::Named(name) => {
                let type_ = types.lookup_type(name).ok_or_else(
                    || TypeResolutionError::UndefinedTypeName {
                        type_name: name.to_string(),
                    }
                )?;
                Ok(ResolvedType::named(type_))
            },

            Self::NonNull(inner) => {
                let inner = inner.resolve_impl(types, deferred_depth)?;
                if matches!(inner, ResolvedType::NonNull(_)) {
                    return Err(TypeResolutionError::NestedNonNull {
                        rendered_type: format!("{inner}!"),
                    });
                }
                Ok(ResolvedType::NonNull(Box::new(inner)))
            },

            Self::Type(type_) => Ok(ResolvedType::named(type_)),
        }
    }
}
impl std::fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeRef({self})")
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deferred(_) => f.write_str("<deferred type>"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::Type(type_) => f.write_str(type_.name()),
        }
    }
}
impl std::convert::From<Arc<GraphQLType>> for TypeRef {
    fn from(value: Arc<GraphQLType>) -> Self {
        Self::Type(value)
    }
}
