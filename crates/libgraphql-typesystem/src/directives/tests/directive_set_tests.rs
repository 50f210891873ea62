use crate::descriptor::Descriptor;
use crate::descriptor::keys;
use crate::directives::Directive;
use crate::directives::DirectiveSet;
use crate::schema::SchemaViolation;
use crate::utils::InvalidNameError;
use serial_test::serial;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaViolation>;

fn directive(name: &str) -> Directive {
    Directive::create(
        Descriptor::new()
            .with(keys::NAME, name)
            .with(keys::LOCATIONS, vec!["FIELD"]),
    ).expect("directive is created")
}

#[test]
#[serial]
fn rejects_duplicate_names() -> Result<()> {
    let mut directives = DirectiveSet::new();
    directives.add(directive("auth"))?;
    assert_eq!(
        directives.add(directive("auth")),
        Err(SchemaViolation::DuplicateDirectiveDefinition {
            directive_name: "auth".to_string(),
        }),
    );
    Ok(())
}

#[test]
#[serial]
fn rejects_reserved_names() {
    let mut directives = DirectiveSet::new();
    assert_eq!(
        directives.add(directive("__auth")),
        Err(SchemaViolation::InvalidDirectiveName {
            directive_name: "__auth".to_string(),
            source: InvalidNameError::ReservedDunderPrefix {
                name: "__auth".to_string(),
            },
        }),
    );
}

#[test]
#[serial]
fn user_directive_replaces_a_builtin_of_the_same_name() -> Result<()> {
    let mut directives = DirectiveSet::new();
    directives.add_missing_builtins();
    assert_eq!(directives.len(), 3);
    assert!(Arc::ptr_eq(
        directives.get("skip").expect("skip is defined"),
        &Directive::skip(),
    ));

    directives.add(directive("skip"))?;
    let skip = directives.get("skip").expect("skip is defined");
    assert!(!Arc::ptr_eq(skip, &Directive::skip()));
    assert!(Directive::is_specified(skip));

    // A second user-defined `@skip` is a duplicate.
    assert!(directives.add(directive("skip")).is_err());

    Ok(())
}

#[test]
#[serial]
fn builtins_do_not_replace_user_directives() -> Result<()> {
    let mut directives = DirectiveSet::new();
    directives.add(directive("include"))?;
    directives.add_missing_builtins();
    assert_eq!(directives.len(), 3);
    assert!(!Arc::ptr_eq(
        directives.get("include").expect("include is defined"),
        &Directive::include(),
    ));
    Ok(())
}
