use crate::descriptor::ConfigValue;
use crate::descriptor::Descriptor;
use crate::descriptor::FieldProducer;
use crate::types::TypeRef;
use crate::value::Value;
use indexmap::IndexMap;

#[test]
fn empty_values() {
    for value in [
        ConfigValue::Null,
        false.into(),
        0i64.into(),
        0.0f64.into(),
        "".into(),
        "0".into(),
        ConfigValue::List(vec![]),
    ] {
        assert!(value.is_empty_value(), "expected {value:?} to be empty");
    }
}

#[test]
fn non_empty_values() {
    for value in [
        true.into(),
        1i64.into(),
        "Int".into(),
        ConfigValue::List(vec![ConfigValue::Null]),
        Descriptor::new().into(),
        TypeRef::named("Int").into(),
        FieldProducer::new(|| ConfigValue::Null).into(),
    ] {
        assert!(!value.is_empty_value(), "expected {value:?} to be non-empty");
    }
}

#[test]
fn strings_and_type_refs_are_type_references() {
    let by_name = ConfigValue::from("Person").as_type_ref();
    assert_eq!(by_name.map(|type_ref| type_ref.to_string()), Some("Person".to_string()));

    let explicit: ConfigValue = TypeRef::non_null(TypeRef::named("Int")).into();
    assert_eq!(
        explicit.as_type_ref().map(|type_ref| type_ref.to_string()),
        Some("Int!".to_string()),
    );

    assert!(ConfigValue::from("").as_type_ref().is_none());
    assert!(ConfigValue::from(7i64).as_type_ref().is_none());
}

#[test]
fn plain_data_converts_to_value() {
    let data: ConfigValue = Descriptor::new()
        .with("limit", 10i64)
        .with("tags", vec!["a", "b"])
        .into();
    let mut expected = IndexMap::new();
    expected.insert("limit".to_string(), Value::Int(10));
    expected.insert(
        "tags".to_string(),
        Value::List(vec![Value::from("a"), Value::from("b")]),
    );
    assert_eq!(data.to_value(), Some(Value::Object(expected)));
}

#[test]
fn non_data_does_not_convert_to_value() {
    let data = ConfigValue::List(vec![1i64.into(), TypeRef::named("Int").into()]);
    assert_eq!(data.to_value(), None);
}

#[test]
fn value_converts_to_config_value() {
    let value = Value::List(vec![Value::Bool(true), Value::Null]);
    let config: ConfigValue = value.clone().into();
    assert_eq!(config.to_value(), Some(value));
}
