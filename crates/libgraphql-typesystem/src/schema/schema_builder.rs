use crate::directives::Directive;
use crate::directives::DirectiveSet;
use crate::schema::Schema;
use crate::schema::SchemaViolation;
use crate::types::GraphQLType;
use crate::types::TypesMap;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collects the types and directives of a schema and runs the validation
/// pass over all of them in [`SchemaBuilder::build`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    directives: DirectiveSet,
    types: TypesMap,
}
impl SchemaBuilder {
    pub fn add_directive(&mut self, directive: impl Into<Arc<Directive>>) -> Result<&mut Self> {
        self.directives.add(directive)?;
        Ok(self)
    }

    pub fn add_type(&mut self, type_: impl Into<GraphQLType>) -> Result<&mut Self> {
        self.types.add_new_type(type_)?;
        Ok(self)
    }

    /// Validates everything added to this builder and produces the
    /// [`Schema`].
    ///
    /// Builtin directives not shadowed by a user-defined directive are added
    /// first. Then every object and interface type's field map is built and
    /// each of its fields forced and validated, union members and input
    /// fields are checked, and every directive is validated. All violations
    /// found are reported together.
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();

        let mut errors = self.types.validate();
        errors.append(&mut self.directives.validate(&self.types));
        if !errors.is_empty() {
            log::debug!(
                "Schema validation failed with {} violation(s).",
                errors.len(),
            );
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        log::debug!(
            "Built a schema with {} type(s) and {} directive(s).",
            self.types.len(),
            self.directives.len(),
        );
        Ok(Schema {
            directives: self.directives,
            types: self.types,
        })
    }

    fn inject_missing_builtin_directives(&mut self) {
        self.directives.add_missing_builtins();
    }

    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Encountered errors while validating the schema's types: {errors:?}")]
    TypeValidationErrors {
        errors: Vec<SchemaViolation>,
    },

    #[error(transparent)]
    Violation(#[from] SchemaViolation),
}
