use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidNameError {
    #[error("Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but \"{name}\" does not.")]
    InvalidSyntax {
        name: String,
    },

    #[error(
        "Name \"{name}\" must not begin with \"__\", which is reserved by \
        GraphQL introspection."
    )]
    ReservedDunderPrefix {
        name: String,
    },
}

/// Indicates whether `name` satisfies the GraphQL
/// [name grammar](https://spec.graphql.org/October2021/#Name):
/// `/^[_A-Za-z][_0-9A-Za-z]*$/`.
pub fn is_valid_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b'_' | b'A'..=b'Z' | b'a'..=b'z') => (),
        _ => return false,
    }
    bytes.all(|byte| matches!(byte, b'_' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z'))
}

/// Validates `name` for use as a user-defined schema element name: it must
/// satisfy the GraphQL name grammar and must not begin with `__`.
pub fn validate_name(name: &str) -> Result<(), InvalidNameError> {
    // https://spec.graphql.org/October2021/#sec-Names.Reserved-Names
    if name.starts_with("__") {
        return Err(InvalidNameError::ReservedDunderPrefix {
            name: name.to_string(),
        });
    }

    if !is_valid_name(name) {
        return Err(InvalidNameError::InvalidSyntax {
            name: name.to_string(),
        });
    }

    Ok(())
}
