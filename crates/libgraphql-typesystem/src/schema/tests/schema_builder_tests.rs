use crate::descriptor::ConfigValue;
use crate::descriptor::Descriptor;
use crate::descriptor::FieldProducer;
use crate::descriptor::FieldResolver;
use crate::descriptor::keys;
use crate::directives::Directive;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaViolation;
use crate::types::Argument;
use crate::types::ArgumentOwner;
use crate::types::FieldSetDeclaration;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::value::ArgumentValues;
use crate::value::Value;
use serial_test::serial;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
#[serial]
fn builds_a_schema_with_self_referencing_lazy_fields() -> Result<()> {
    let invocations = Arc::new(AtomicUsize::new(0));
    let producer_invocations = invocations.clone();
    let friends = FieldProducer::new(move || {
        producer_invocations.fetch_add(1, Ordering::SeqCst);
        Descriptor::new()
            .with(keys::TYPE, TypeRef::list(TypeRef::deferred(|| TypeRef::named("Person"))))
            .with(keys::ARGS, Descriptor::new().with("limit", "Int"))
            .with(keys::RESOLVE, FieldResolver::new(|_, args| {
                let limit = args.get("limit").and_then(Value::as_i64).unwrap_or(0);
                Value::List(vec![Value::Null; limit as usize])
            }))
            .into()
    });

    let mut builder = Schema::builder();
    builder
        .add_type(ObjectType::new(
            "Person",
            FieldSetDeclaration::map([
                ("age", ConfigValue::from("Int")),
                ("friends", friends.into()),
            ]),
        ))?
        .add_type(ObjectType::new(
            "Query",
            FieldSetDeclaration::map([("me", "Person")]),
        ))?;
    assert_eq!(invocations.load(Ordering::SeqCst), 0);

    let schema = builder.build()?;
    assert_eq!(invocations.load(Ordering::SeqCst), 1);

    let person = schema.get_type("Person").and_then(GraphQLType::as_object).expect("Person is defined");
    let age = person.field("age")?.expect("age is defined");
    assert_eq!(age.resolve_type(&schema).map(|type_| type_.to_string()), Ok("Int".to_string()));
    assert!(age.resolver().is_none());
    assert!(age.mapper().is_none());

    let friends = person.field("friends")?.expect("friends is defined");
    assert_eq!(friends.arguments().len(), 1);
    assert_eq!(friends.arguments()[0].name(), "limit");
    assert_eq!(
        friends.resolve_type(&schema).map(|type_| type_.to_string()),
        Ok("[Person]".to_string()),
    );
    let mut args = ArgumentValues::new();
    args.insert("limit".to_string(), Value::Int(2));
    let resolver = friends.resolver().expect("resolver is set");
    assert_eq!(resolver.call(&Value::Null, &args), Value::List(vec![Value::Null, Value::Null]));

    // The build already forced this slot.
    person.field("friends")?;
    assert_eq!(invocations.load(Ordering::SeqCst), 1);

    assert!(schema.lookup_type("Query").is_some());
    assert!(schema.lookup_type("Mutation").is_none());

    Ok(())
}

#[test]
#[serial]
fn injects_missing_builtin_directives() -> Result<()> {
    let schema = Schema::builder().build()?;
    let mut names = schema.directives()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>();
    names.sort();
    assert_eq!(names, vec!["deprecated", "include", "skip"]);
    assert!(Arc::ptr_eq(
        schema.directive("skip").expect("skip is defined"),
        &Directive::skip(),
    ));
    assert_eq!(schema.types().len(), 5);
    Ok(())
}

#[test]
#[serial]
fn user_directives_are_validated_and_kept() -> Result<()> {
    let mut builder = Schema::builder();
    builder.add_directive(Directive::create(
        Descriptor::new()
            .with(keys::NAME, "include")
            .with(keys::LOCATIONS, vec!["FIELD"])
            .with(keys::ARGS, Descriptor::new().with("when", "Boolean")),
    )?)?;
    let schema = builder.build()?;

    let include = schema.directive("include").expect("include is defined");
    assert!(include.argument("when").is_some());
    assert!(Directive::is_specified(include));
    assert_eq!(schema.directives().len(), 3);
    Ok(())
}

#[test]
#[serial]
fn aggregates_violations_across_types_and_directives() -> Result<()> {
    let mut builder = Schema::builder();
    builder
        .add_type(ObjectType::new(
            "Person",
            FieldSetDeclaration::map([
                ("age", Descriptor::new()
                    .with(keys::TYPE, "Int")
                    .with(keys::IS_DEPRECATED, true)),
                ("address", Descriptor::new()
                    .with(keys::TYPE, "AddressInput")),
            ]),
        ))?
        .add_type(
            InputObjectType::new("AddressInput")
                .with_field(Argument::new("street", TypeRef::named("String"))),
        )?
        .add_directive(Directive::create(
            Descriptor::new()
                .with(keys::NAME, "auth")
                .with(keys::LOCATIONS, vec!["FIELD_DEFINITION"])
                .with(keys::ARGS, Descriptor::new().with("owner", "Person")),
        )?)?;

    let Err(SchemaBuildError::TypeValidationErrors { errors }) = builder.build() else {
        panic!("expected validation errors");
    };
    assert_eq!(errors, vec![
        SchemaViolation::LegacyIsDeprecatedFlag {
            field_name: "age".to_string(),
            type_name: "Person".to_string(),
        },
        SchemaViolation::InvalidOutputFieldType {
            field_name: "address".to_string(),
            rendered_type: "\"AddressInput\"".to_string(),
            type_name: "Person".to_string(),
        },
        SchemaViolation::InvalidArgumentType {
            argument_name: "owner".to_string(),
            owner: ArgumentOwner::Directive {
                directive_name: "auth".to_string(),
            },
            rendered_type: "Person".to_string(),
        },
    ]);

    Ok(())
}

#[test]
#[serial]
fn lazy_field_referencing_an_unregistered_type_fails_the_build() -> Result<()> {
    let mut builder = Schema::builder();
    builder.add_type(ObjectType::new(
        "Person",
        FieldSetDeclaration::map([(
            "pet",
            FieldProducer::new(|| TypeRef::named("Pet").into()),
        )]),
    ))?;

    let Err(SchemaBuildError::TypeValidationErrors { errors }) = builder.build() else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        SchemaViolation::UnresolvableFieldType { field_name, type_name, .. }
            if field_name == "pet" && type_name == "Person",
    ));

    Ok(())
}

#[test]
#[serial]
fn duplicate_registrations_fail_immediately() -> Result<()> {
    let mut builder = Schema::builder();
    builder.add_type(ObjectType::new("Person", FieldSetDeclaration::default()))?;
    assert_eq!(
        builder.add_type(ObjectType::new("Person", FieldSetDeclaration::default()))
            .map(|_| ()),
        Err(SchemaBuildError::Violation(SchemaViolation::DuplicateTypeDefinition {
            type_name: "Person".to_string(),
        })),
    );
    Ok(())
}
