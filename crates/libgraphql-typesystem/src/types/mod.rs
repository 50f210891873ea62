mod argument;
mod argument_owner;
mod enum_type;
mod field_declaration;
mod field_definition;
mod field_map;
mod field_map_builder;
mod field_resolution;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod input_object_type_validator;
mod interface_type;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_or_interface_type_validator;
mod object_type;
mod resolved_type;
mod scalar_type;
mod type_ref;
mod type_resolver;
mod types_map;
mod union_type;
mod union_type_validator;
mod unresolved_field_definition;

pub use argument::Argument;
pub use argument_owner::ArgumentOwner;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field_declaration::FieldDeclaration;
pub use field_declaration::FieldKey;
pub use field_definition::FieldDefinition;
pub use field_map::FieldMap;
pub use field_map::FieldMapEntry;
pub use field_map::FieldSlot;
pub use field_map_builder::FieldMapBuilder;
pub use field_map_builder::FieldSetDeclaration;
pub use field_map_builder::FieldSetThunk;
pub use field_resolution::FieldResolution;
pub use graphql_type::GraphQLType;
pub use graphql_type::NamedGraphQLTypeRef;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
use input_object_type_validator::InputObjectTypeValidator;
pub use interface_type::InterfaceType;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub use resolved_type::ResolvedType;
pub use scalar_type::ScalarType;
pub use type_ref::TypeProducer;
pub use type_ref::TypeRef;
pub use type_ref::TypeResolutionError;
pub use type_resolver::TypeResolver;
pub use types_map::TypesMap;
pub use union_type::UnionType;
use union_type_validator::UnionTypeValidator;
pub use unresolved_field_definition::UnresolvedFieldDefinition;

#[cfg(test)]
mod tests;
