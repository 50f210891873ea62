use crate::types::ArgumentOwner;
use crate::types::GraphQLTypeKind;
use crate::types::TypeResolutionError;
use crate::utils::InvalidNameError;
use thiserror::Error;

/// A malformed schema declaration.
///
/// Each variant carries the names of the schema elements involved and, where
/// relevant, a [safely rendered](crate::utils::SafeDisplay) copy of the
/// offending value, so callers can either display the message or inspect the
/// structure.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaViolation {
    #[error(
        "Resolution behavior for the `{type_name}.{field_name}` field is \
        ambiguous: a field may provide a `resolve` function or a `map` \
        function, but not both"
    )]
    ConflictingFieldResolution {
        field_name: String,
        type_name: String,
    },

    #[error(
        "The `{}` argument is required but is also deprecated. Required \
        arguments cannot be deprecated.",
        owner.argument_path(argument_name),
    )]
    DeprecatedRequiredArgument {
        argument_name: String,
        owner: ArgumentOwner,
    },

    #[error(
        "The `{}` argument is defined more than once",
        owner.argument_path(argument_name),
    )]
    DuplicateArgumentName {
        argument_name: String,
        owner: ArgumentOwner,
    },

    #[error("Multiple directives named `@{directive_name}` were defined")]
    DuplicateDirectiveDefinition {
        directive_name: String,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldDefinition {
        field_name: String,
        type_name: String,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error(
        "The `{type_name}` field at position {position} is declared with a \
        function, but functions are only accepted for fields keyed by name"
    )]
    DeferredFieldRequiresName {
        position: usize,
        type_name: String,
    },

    #[error(
        "The deferred `{type_name}.{field_name}` field was still producing \
        deferred fields after {max_depth} levels of nesting"
    )]
    DeferredFieldDepthExceeded {
        field_name: String,
        max_depth: usize,
        type_name: String,
    },

    #[error("The `@{directive_name}` directive must declare at least one location")]
    EmptyDirectiveLocations {
        directive_name: String,
    },

    #[error(
        "Invalid argument declaration `{key}` for `{owner}`: expected an \
        argument descriptor, an `Argument`, or a type, but got: {rendered}"
    )]
    InvalidArgumentDeclaration {
        key: String,
        owner: ArgumentOwner,
        rendered: String,
    },

    #[error(
        "The default value of the `{}` argument must be plain data, but got: \
        {rendered}",
        owner.argument_path(argument_name),
    )]
    InvalidArgumentDefaultValue {
        argument_name: String,
        owner: ArgumentOwner,
        rendered: String,
    },

    #[error("{}: {source}", owner.argument_path(argument_name))]
    InvalidArgumentName {
        argument_name: String,
        owner: ArgumentOwner,
        #[source]
        source: InvalidNameError,
    },

    #[error(
        "The `{owner}` arguments must be a list of argument descriptors \
        or a map of argument names to descriptors, but got: {rendered}"
    )]
    InvalidArgumentsConfig {
        owner: ArgumentOwner,
        rendered: String,
    },

    #[error(
        "The `{}` argument type must be Input Type but got: {rendered_type}",
        owner.argument_path(argument_name),
    )]
    InvalidArgumentType {
        argument_name: String,
        owner: ArgumentOwner,
        rendered_type: String,
    },

    #[error(
        "The locations of the `@{directive_name}` directive must be a list, \
        but got: {rendered}"
    )]
    InvalidDirectiveLocations {
        directive_name: String,
        rendered: String,
    },

    #[error("@{directive_name}: {source}")]
    InvalidDirectiveName {
        directive_name: String,
        #[source]
        source: InvalidNameError,
    },

    #[error(
        "The `{type_name}.{field_name}` field must declare its arguments as a \
        list or a map, but got: {rendered}"
    )]
    InvalidFieldArgs {
        field_name: String,
        rendered: String,
        type_name: String,
    },

    #[error(
        "`{type_name}.{field_name}` field {role} must be a function if \
        provided, but got: {rendered}"
    )]
    InvalidFieldCallable {
        field_name: String,
        rendered: String,
        role: &'static str,
        type_name: String,
    },

    #[error(
        "The `{type_name}.{key}` field config must be a field descriptor, a \
        field definition, a function, or a type, but got: {rendered}"
    )]
    InvalidFieldDeclaration {
        key: String,
        rendered: String,
        type_name: String,
    },

    #[error("{type_name}.{field_name}: {source}")]
    InvalidFieldName {
        field_name: String,
        type_name: String,
        #[source]
        source: InvalidNameError,
    },

    #[error(
        "`{type_name}.{field_name}` field type must be Output Type but got: \
        {rendered_type}"
    )]
    InvalidOutputFieldType {
        field_name: String,
        rendered_type: String,
        type_name: String,
    },

    #[error("{type_name}: {source}")]
    InvalidTypeName {
        type_name: String,
        #[source]
        source: InvalidNameError,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{member_type_name}`, but this type is a {} type and \
        union members can only be object types.",
        member_kind.name(),
    )]
    InvalidUnionMemberType {
        member_kind: GraphQLTypeKind,
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "`{type_name}.{field_name}` should provide \"deprecationReason\" \
        instead of \"isDeprecated\"."
    )]
    LegacyIsDeprecatedFlag {
        field_name: String,
        type_name: String,
    },

    #[error("Directive must be named, but got a `name` of: {rendered}")]
    MissingDirectiveName {
        rendered: String,
    },

    #[error("Must provide locations for the `@{directive_name}` directive")]
    MissingDirectiveLocations {
        directive_name: String,
    },

    #[error(
        "The `{type_name}` field at position {position} must provide a `name` \
        key, since it is not keyed by name"
    )]
    MissingFieldName {
        position: usize,
        type_name: String,
    },

    #[error(
        "`{type_name}` fields must be a map of field names to field \
        declarations, or a function which returns such a map, but got: \
        {rendered}"
    )]
    FieldSetNotIterable {
        rendered: String,
        type_name: String,
    },

    #[error(
        "The `{union_type_name}` union type includes `{undefined_type_name}` \
        as a member, but there is no type defined with that name"
    )]
    UndefinedUnionMemberType {
        undefined_type_name: String,
        union_type_name: String,
    },

    #[error(
        "The `{}` argument's type could not be resolved: {source}",
        owner.argument_path(argument_name),
    )]
    UnresolvableArgumentType {
        argument_name: String,
        owner: ArgumentOwner,
        #[source]
        source: TypeResolutionError,
    },

    #[error("The `{type_name}.{field_name}` field's type could not be resolved: {source}")]
    UnresolvableFieldType {
        field_name: String,
        type_name: String,
        #[source]
        source: TypeResolutionError,
    },

    #[error(
        "The `@{directive_name}` directive declares an unknown location: \
        {rendered}"
    )]
    UnknownDirectiveLocation {
        directive_name: String,
        rendered: String,
    },
}
