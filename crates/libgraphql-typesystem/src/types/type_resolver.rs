use crate::types::GraphQLType;

/// The schema-level lookup a [`TypeRef`](crate::types::TypeRef) is resolved
/// against.
///
/// Named type references are looked up lazily, at resolution time, so a type
/// may refer to types registered after it (or to itself).
pub trait TypeResolver {
    fn lookup_type(&self, name: &str) -> Option<&GraphQLType>;
}
