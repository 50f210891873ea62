use crate::utils::InvalidNameError;
use crate::utils::is_valid_name;
use crate::utils::validate_name;
use proptest::prelude::*;

#[test]
fn accepts_names_matching_the_grammar() {
    for name in ["a", "_", "Person", "_private", "field_1", "ABC123", "x__y"] {
        assert!(is_valid_name(name), "expected `{name}` to be valid");
        assert_eq!(validate_name(name), Ok(()));
    }
}

#[test]
fn rejects_names_not_matching_the_grammar() {
    for name in ["", "1field", "has-dash", "has space", "émoji", "a.b", "$"] {
        assert!(!is_valid_name(name), "expected `{name}` to be invalid");
        assert_eq!(
            validate_name(name),
            Err(InvalidNameError::InvalidSyntax {
                name: name.to_string(),
            }),
        );
    }
}

#[test]
fn dunder_prefix_is_reserved_even_though_grammatical() {
    assert!(is_valid_name("__typename"));
    assert_eq!(
        validate_name("__typename"),
        Err(InvalidNameError::ReservedDunderPrefix {
            name: "__typename".to_string(),
        }),
    );
}

#[test]
fn invalid_syntax_message_names_the_offending_name() {
    let err = validate_name("9lives").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but \"9lives\" does not.",
    );
}

proptest! {
    #[test]
    fn generated_grammatical_names_are_valid(name in "[_A-Za-z][_0-9A-Za-z]{0,24}") {
        prop_assert!(is_valid_name(&name));
    }

    #[test]
    fn names_starting_with_a_digit_are_invalid(name in "[0-9][_0-9A-Za-z]{0,24}") {
        prop_assert!(!is_valid_name(&name));
    }

    #[test]
    fn names_containing_a_non_name_char_are_invalid(
        prefix in "[_A-Za-z][_0-9A-Za-z]{0,8}",
        bad in "[^_0-9A-Za-z]",
        suffix in "[_0-9A-Za-z]{0,8}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        prop_assert!(!is_valid_name(&name));
    }

    #[test]
    fn validate_name_agrees_with_grammar_outside_reserved_names(name in "\\PC{0,16}") {
        if !name.starts_with("__") {
            prop_assert_eq!(validate_name(&name).is_ok(), is_valid_name(&name));
        }
    }
}
