use crate::descriptor::ConfigValue;
use crate::descriptor::Descriptor;
use crate::descriptor::keys;

#[test]
fn preserves_insertion_order() {
    let descriptor = Descriptor::new()
        .with(keys::NAME, "age")
        .with(keys::TYPE, "Int")
        .with(keys::DESCRIPTION, "Years since birth");
    let keys = descriptor.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["name", "type", "description"]);
}

#[test]
fn get_str_only_returns_strings() {
    let descriptor: Descriptor = [
        ("name", ConfigValue::from("age")),
        ("isRepeatable", ConfigValue::from(true)),
    ].into_iter().collect();
    assert_eq!(descriptor.get_str(keys::NAME), Some("age"));
    assert_eq!(descriptor.get_str(keys::IS_REPEATABLE), None);
    assert_eq!(descriptor.get_str(keys::TYPE), None);
    assert_eq!(descriptor.len(), 2);
}

#[test]
fn insert_replaces_existing_entries() {
    let mut descriptor = Descriptor::new().with(keys::NAME, "a");
    let previous = descriptor.insert(keys::NAME, "b");
    assert_eq!(previous.as_ref().and_then(ConfigValue::as_str), Some("a"));
    assert_eq!(descriptor.get_str(keys::NAME), Some("b"));
    assert_eq!(descriptor.len(), 1);
}
