use crate::descriptor::Descriptor;
use crate::directives::DEFAULT_DEPRECATION_REASON;
use crate::directives::Directive;
use crate::directives::DirectiveLocation;
use crate::types::Argument;
use crate::types::TypeRef;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

static INTERNAL_DIRECTIVES: RwLock<Option<Arc<InternalDirectives>>> = RwLock::new(None);

/// The directives every schema includes: `@include`, `@skip`, and
/// `@deprecated`.
#[derive(Debug)]
pub struct InternalDirectives {
    deprecated: Arc<Directive>,
    include: Arc<Directive>,
    skip: Arc<Directive>,
}
impl InternalDirectives {
    fn build() -> Self {
        let conditional_locations = vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ];

        Self {
            deprecated: Arc::new(Directive {
                arguments: vec![
                    Argument::new("reason", TypeRef::named("String"))
                        .with_default_value(DEFAULT_DEPRECATION_REASON)
                        .with_description(
                            "Explains why this element was deprecated, usually \
                            also including a suggestion for how to access \
                            supported similar data. Formatted using the \
                            Markdown syntax, as specified by \
                            [CommonMark](https://commonmark.org/).",
                        ),
                ],
                description: Some(
                    "Marks an element of a GraphQL schema as no longer \
                    supported.".to_string(),
                ),
                is_repeatable: false,
                locations: vec![
                    DirectiveLocation::FieldDefinition,
                    DirectiveLocation::EnumValue,
                ],
                name: "deprecated".to_string(),
                source: Descriptor::new(),
            }),

            include: Arc::new(Directive {
                arguments: vec![
                    Argument::new("if", TypeRef::non_null(TypeRef::named("Boolean")))
                        .with_description("Included when true."),
                ],
                description: Some(
                    "Directs the executor to include this field or fragment \
                    only when the `if` argument is true.".to_string(),
                ),
                is_repeatable: false,
                locations: conditional_locations.to_owned(),
                name: "include".to_string(),
                source: Descriptor::new(),
            }),

            skip: Arc::new(Directive {
                arguments: vec![
                    Argument::new("if", TypeRef::non_null(TypeRef::named("Boolean")))
                        .with_description("Skipped when true."),
                ],
                description: Some(
                    "Directs the executor to skip this field or fragment when \
                    the `if` argument is true.".to_string(),
                ),
                is_repeatable: false,
                locations: conditional_locations,
                name: "skip".to_string(),
                source: Descriptor::new(),
            }),
        }
    }

    pub fn deprecated(&self) -> &Arc<Directive> {
        &self.deprecated
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Directive>> {
        match name {
            "deprecated" => Some(&self.deprecated),
            "include" => Some(&self.include),
            "skip" => Some(&self.skip),
            _ => None,
        }
    }

    pub fn include(&self) -> &Arc<Directive> {
        &self.include
    }

    /// The builtin directives, in the order `include`, `skip`, `deprecated`.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Directive>> {
        [&self.include, &self.skip, &self.deprecated].into_iter()
    }

    pub fn skip(&self) -> &Arc<Directive> {
        &self.skip
    }
}

/// Returns the process-wide set of builtin directives, building it on first
/// access. Every call returns the same [`Arc`].
pub fn internal_directives() -> Arc<InternalDirectives> {
    if let Some(directives) = INTERNAL_DIRECTIVES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref() {
        return directives.to_owned();
    }

    // A concurrent first caller may have initialized the set between
    // releasing the read lock and taking the write lock.
    INTERNAL_DIRECTIVES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(|| {
            log::debug!("Building the builtin directives.");
            Arc::new(InternalDirectives::build())
        })
        .to_owned()
}

/// Drops the memoized builtin directives so the next
/// [`internal_directives`] call rebuilds them. Test-only.
#[cfg(test)]
pub(crate) fn reset_internal_directives() {
    *INTERNAL_DIRECTIVES
        .write()
        .unwrap_or_else(PoisonError::into_inner) = None;
}
