use crate::directives::Directive;
use crate::directives::internal_directives;
use crate::schema::SchemaViolation;
use crate::types::TypeResolver;
use crate::utils;
use indexmap::IndexMap;
use std::sync::Arc;

/// The directives defined in a schema, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct DirectiveSet {
    directives: IndexMap<String, Arc<Directive>>,
}
impl DirectiveSet {
    /// Adds a directive to this set.
    ///
    /// A directive may take the name of a builtin directive, in which case it
    /// replaces that builtin in this set. Any other name collision is an
    /// error, as is a name using the reserved `__` prefix.
    pub fn add(&mut self, directive: impl Into<Arc<Directive>>) -> Result<(), SchemaViolation> {
        let directive = directive.into();
        let directive_name = directive.name().to_string();

        utils::validate_name(&directive_name).map_err(
            |source| SchemaViolation::InvalidDirectiveName {
                directive_name: directive_name.to_string(),
                source,
            }
        )?;

        if let Some(existing) = self.directives.get(&directive_name) {
            let replaces_builtin =
                internal_directives()
                    .get(&directive_name)
                    .is_some_and(|builtin| Arc::ptr_eq(builtin, existing));
            if !replaces_builtin {
                return Err(SchemaViolation::DuplicateDirectiveDefinition {
                    directive_name,
                });
            }
            log::debug!(
                "The `@{directive_name}` directive replaces the builtin directive \
                of the same name.",
            );
        }

        self.directives.insert(directive_name, directive);
        Ok(())
    }

    /// Adds each builtin directive whose name is not already taken.
    pub fn add_missing_builtins(&mut self) {
        for builtin in internal_directives().iter() {
            if !self.directives.contains_key(builtin.name()) {
                self.directives.insert(builtin.name().to_string(), builtin.to_owned());
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.directives.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Directive>> {
        self.directives.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Arc<Directive>> {
        self.directives.iter()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every directive in this set, collecting one violation (at
    /// most) per directive.
    pub fn validate(&self, types: &dyn TypeResolver) -> Vec<SchemaViolation> {
        self.directives.values()
            .filter_map(|directive| directive.validate(types).err())
            .collect()
    }
}
