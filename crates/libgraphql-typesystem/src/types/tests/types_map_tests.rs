use crate::schema::SchemaViolation;
use crate::types::Argument;
use crate::types::ArgumentOwner;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::FieldSetDeclaration;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::TypesMap;
use crate::types::UnionType;
use crate::types::tests::test_utils;
use crate::utils::InvalidNameError;

type Result<T> = std::result::Result<T, SchemaViolation>;

#[test]
fn is_seeded_with_builtin_scalars() {
    let types = TypesMap::new();
    let names = types.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Boolean", "Float", "ID", "Int", "String"]);
    assert!(types.iter().all(|(_, type_)| type_.is_builtin()));
}

#[test]
fn rejects_duplicate_type_names() -> Result<()> {
    let mut types = TypesMap::new();
    types.add_new_type(ScalarType::new("Date"))?;
    assert_eq!(
        types.add_new_type(ScalarType::new("Date")),
        Err(SchemaViolation::DuplicateTypeDefinition {
            type_name: "Date".to_string(),
        }),
    );
    assert_eq!(
        types.add_new_type(ScalarType::new("Int")),
        Err(SchemaViolation::DuplicateTypeDefinition {
            type_name: "Int".to_string(),
        }),
    );
    Ok(())
}

#[test]
fn rejects_reserved_type_names() {
    let mut types = TypesMap::new();
    assert_eq!(
        types.add_new_type(ScalarType::new("__Date")),
        Err(SchemaViolation::InvalidTypeName {
            type_name: "__Date".to_string(),
            source: InvalidNameError::ReservedDunderPrefix {
                name: "__Date".to_string(),
            },
        }),
    );
}

#[test]
fn valid_types_produce_no_violations() {
    let types = test_utils::types_with([
        test_utils::person_type(),
        test_utils::person_input_type(),
        InterfaceType::new("Node", FieldSetDeclaration::map([("id", TypeRef::non_null(TypeRef::named("ID")))]))
            .into(),
        EnumType::new("Color")
            .with_value(EnumValue::new("RED"))
            .with_value(EnumValue::new("GREEN").with_deprecation_reason("Use RED"))
            .into(),
        UnionType::new("SearchResult", ["Person"]).into(),
    ]);
    assert_eq!(types.validate(), vec![]);
}

#[test]
fn union_members_must_be_defined_object_types() {
    let types = test_utils::types_with([
        test_utils::person_type(),
        UnionType::new("SearchResult", ["Person", "Int", "Pet"]).into(),
    ]);
    assert_eq!(types.validate(), vec![
        SchemaViolation::InvalidUnionMemberType {
            member_kind: GraphQLTypeKind::Int,
            member_type_name: "Int".to_string(),
            union_type_name: "SearchResult".to_string(),
        },
        SchemaViolation::UndefinedUnionMemberType {
            undefined_type_name: "Pet".to_string(),
            union_type_name: "SearchResult".to_string(),
        },
    ]);
}

#[test]
fn input_object_fields_must_have_input_types() {
    let types = test_utils::types_with([
        test_utils::person_type(),
        InputObjectType::new("PersonFilter")
            .with_field(Argument::new("name", TypeRef::named("String")))
            .with_field(Argument::new("bestFriend", TypeRef::named("Person")))
            .into(),
    ]);
    assert_eq!(types.validate(), vec![
        SchemaViolation::InvalidArgumentType {
            argument_name: "bestFriend".to_string(),
            owner: ArgumentOwner::InputObject {
                type_name: "PersonFilter".to_string(),
            },
            rendered_type: "Person".to_string(),
        },
    ]);
}

#[test]
fn collects_one_violation_per_invalid_field() {
    let types = test_utils::types_with([
        ObjectType::new(
            "Person",
            FieldSetDeclaration::map([
                ("1st", "Int"),
                ("ok", "Int"),
                ("pet", "Pet"),
            ]),
        ).into(),
    ]);
    let errors = types.validate();
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        &errors[0],
        SchemaViolation::InvalidFieldName { field_name, .. } if field_name == "1st",
    ));
    assert!(matches!(
        &errors[1],
        SchemaViolation::UnresolvableFieldType { field_name, .. } if field_name == "pet",
    ));
}

#[test]
fn mutually_referencing_types_validate_in_any_order() {
    let types = test_utils::types_with([
        ObjectType::new(
            "Author",
            FieldSetDeclaration::map([("books", TypeRef::list(TypeRef::named("Book")))]),
        ).into(),
        ObjectType::new(
            "Book",
            FieldSetDeclaration::map([("author", TypeRef::named("Author"))]),
        ).into(),
    ]);
    assert_eq!(types.validate(), vec![]);
    assert!(matches!(types.get("Book"), Some(GraphQLType::Object(_))));
}
