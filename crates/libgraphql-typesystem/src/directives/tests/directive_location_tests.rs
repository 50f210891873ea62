use crate::directives::DirectiveLocation;
use crate::directives::DirectiveLocationParseError;

#[test]
fn parses_every_location_name() {
    for location in DirectiveLocation::ALL {
        assert_eq!(location.as_str().parse::<DirectiveLocation>(), Ok(location));
    }
}

#[test]
fn rejects_unknown_names() {
    assert_eq!(
        "field".parse::<DirectiveLocation>(),
        Err(DirectiveLocationParseError("field".to_string())),
    );
}

#[test]
fn distinguishes_executable_locations() {
    assert!(DirectiveLocation::Field.is_executable());
    assert!(DirectiveLocation::InlineFragment.is_executable());
    assert!(!DirectiveLocation::FieldDefinition.is_executable());
    assert!(!DirectiveLocation::EnumValue.is_executable());
}
