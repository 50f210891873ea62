use crate::descriptor::ConfigValue;
use crate::descriptor::Descriptor;
use crate::descriptor::keys;
use crate::schema::SchemaViolation;
use crate::types::Argument;
use crate::types::ArgumentOwner;
use crate::types::TypeRef;
use crate::types::tests::test_utils;
use crate::utils::InvalidNameError;
use crate::value::Value;

type Result<T> = std::result::Result<T, SchemaViolation>;

fn field_owner() -> ArgumentOwner {
    ArgumentOwner::Field {
        field_name: "friends".to_string(),
        type_name: "Person".to_string(),
    }
}

#[test]
fn creates_arguments_from_a_map() -> Result<()> {
    let args = Argument::create_list(
        &field_owner(),
        &Descriptor::new()
            .with("limit", Descriptor::new()
                .with(keys::TYPE, "Int")
                .with(keys::DEFAULT_VALUE, 10i64)
                .with(keys::DESCRIPTION, "Max results"))
            .with("after", "ID")
            .into(),
    )?;

    assert_eq!(args.len(), 2);
    assert_eq!(args[0].name(), "limit");
    assert_eq!(args[0].default_value(), Some(&Value::Int(10)));
    assert_eq!(args[0].description(), Some("Max results"));
    assert_eq!(args[1].name(), "after");
    assert_eq!(args[1].type_ref().map(|type_ref| type_ref.to_string()), Some("ID".to_string()));

    Ok(())
}

#[test]
fn creates_arguments_from_a_list_of_named_descriptors() -> Result<()> {
    let args = Argument::create_list(
        &field_owner(),
        &vec![
            Descriptor::new().with(keys::NAME, "limit").with(keys::TYPE, "Int"),
        ].into(),
    )?;
    assert_eq!(args[0].name(), "limit");
    Ok(())
}

#[test]
fn unnamed_list_entries_fail() {
    let result = Argument::create_list(
        &field_owner(),
        &vec![Descriptor::new().with(keys::TYPE, "Int")].into(),
    );
    assert_eq!(
        result.map(|args| args.len()),
        Err(SchemaViolation::InvalidArgumentDeclaration {
            key: "0".to_string(),
            owner: field_owner(),
            rendered: "{type: \"Int\"}".to_string(),
        }),
    );
}

#[test]
fn unstructured_arguments_config_fails() {
    let result = Argument::create_list(&field_owner(), &ConfigValue::from("limit"));
    let err = result.map(|args| args.len()).unwrap_err();
    assert_eq!(err, SchemaViolation::InvalidArgumentsConfig {
        owner: field_owner(),
        rendered: "\"limit\"".to_string(),
    });
    assert!(err.to_string().starts_with("The `Person.friends` arguments"));
}

#[test]
fn non_data_default_value_fails() {
    let result = Argument::create_list(
        &field_owner(),
        &Descriptor::new()
            .with("limit", Descriptor::new()
                .with(keys::TYPE, "Int")
                .with(keys::DEFAULT_VALUE, TypeRef::named("Int")))
            .into(),
    );
    assert_eq!(
        result.map(|args| args.len()),
        Err(SchemaViolation::InvalidArgumentDefaultValue {
            argument_name: "limit".to_string(),
            owner: field_owner(),
            rendered: "Int".to_string(),
        }),
    );
}

#[test]
fn directive_argument_errors_name_the_directive() {
    let owner = ArgumentOwner::Directive {
        directive_name: "auth".to_string(),
    };
    let err = Argument::create_list(&owner, &vec![ConfigValue::from(5i64)].into())
        .map(|args| args.len())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid argument declaration `0` for `@auth`: expected an argument \
        descriptor, an `Argument`, or a type, but got: 5",
    );
}

#[test]
fn required_arguments_cannot_be_deprecated() {
    let types = test_utils::types_with([]);
    let required = Argument::new("limit", TypeRef::non_null(TypeRef::named("Int")))
        .with_deprecation_reason("Use `first`");
    let err = required.validate(&field_owner(), &types).unwrap_err();
    assert_eq!(err, SchemaViolation::DeprecatedRequiredArgument {
        argument_name: "limit".to_string(),
        owner: field_owner(),
    });
    assert_eq!(
        err.to_string(),
        "The `Person.friends(limit:)` argument is required but is also \
        deprecated. Required arguments cannot be deprecated.",
    );
}

#[test]
fn defaulted_or_nullable_arguments_can_be_deprecated() -> Result<()> {
    let types = test_utils::types_with([]);
    Argument::new("limit", TypeRef::non_null(TypeRef::named("Int")))
        .with_default_value(10i64)
        .with_deprecation_reason("Use `first`")
        .validate(&field_owner(), &types)?;
    Argument::new("limit", TypeRef::named("Int"))
        .with_deprecation_reason("Use `first`")
        .validate(&field_owner(), &types)?;
    Ok(())
}

#[test]
fn rejects_reserved_names() {
    let types = test_utils::types_with([]);
    let reserved = Argument::new("__limit", TypeRef::named("Int"));
    assert_eq!(
        reserved.validate(&field_owner(), &types),
        Err(SchemaViolation::InvalidArgumentName {
            argument_name: "__limit".to_string(),
            owner: field_owner(),
            source: InvalidNameError::ReservedDunderPrefix {
                name: "__limit".to_string(),
            },
        }),
    );
}

#[test]
fn accepts_input_object_types() -> Result<()> {
    let types = test_utils::types_with([test_utils::person_input_type()]);
    Argument::new("filter", TypeRef::list(TypeRef::non_null(TypeRef::named("PersonInput"))))
        .validate(&field_owner(), &types)
}

#[test]
fn directive_owner_renders_in_messages() {
    let types = test_utils::types_with([test_utils::person_type()]);
    let owner = ArgumentOwner::Directive {
        directive_name: "auth".to_string(),
    };
    let err =
        Argument::new("role", TypeRef::named("Person"))
            .validate(&owner, &types)
            .unwrap_err();
    assert_eq!(
        err.to_string(),
        "The `@auth(role:)` argument type must be Input Type but got: Person",
    );
}
