use crate::descriptor::ConfigValue;
use crate::descriptor::Descriptor;
use crate::descriptor::keys;
use crate::directives::DirectiveLocation;
use crate::directives::internal_directives;
use crate::schema::SchemaViolation;
use crate::types::Argument;
use crate::types::ArgumentOwner;
use crate::types::TypeResolver;
use crate::utils;
use std::collections::HashSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaViolation>;

/// The reason reported for `@deprecated` when none is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// A directive definition: a name, the locations it may be applied at, and
/// the arguments it accepts.
#[derive(Clone, Debug)]
pub struct Directive {
    pub(super) arguments: Vec<Argument>,
    pub(super) description: Option<String>,
    pub(super) is_repeatable: bool,
    pub(super) locations: Vec<DirectiveLocation>,
    pub(super) name: String,
    pub(super) source: Descriptor,
}
impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name() == name)
    }

    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    /// Builds a [`Directive`] from a directive descriptor.
    ///
    /// Unlike fields, a directive has no valid state without a name and a
    /// non-empty list of known locations, so those are checked here rather
    /// than deferred to [`Directive::validate`].
    pub fn create(descriptor: Descriptor) -> Result<Self> {
        let name = descriptor.get_str(keys::NAME).ok_or_else(
            || SchemaViolation::MissingDirectiveName {
                rendered: utils::print_safe(
                    descriptor.get(keys::NAME).unwrap_or(&ConfigValue::Null),
                ),
            }
        )?.to_string();

        let locations = match descriptor.get(keys::LOCATIONS) {
            None => return Err(SchemaViolation::MissingDirectiveLocations {
                directive_name: name,
            }),
            Some(ConfigValue::List(locations)) => locations.iter().collect::<Vec<_>>(),
            // Keyed locations are read in declaration order; keys are ignored.
            Some(ConfigValue::Map(locations)) =>
                locations.iter().map(|(_, location)| location).collect(),
            Some(other) => return Err(SchemaViolation::InvalidDirectiveLocations {
                directive_name: name,
                rendered: utils::print_safe(other),
            }),
        };
        utils::invariant(!locations.is_empty(), || {
            SchemaViolation::EmptyDirectiveLocations {
                directive_name: name.to_string(),
            }
        })?;
        let locations = locations.into_iter().map(|location| {
            location.as_str()
                .and_then(|location| location.parse::<DirectiveLocation>().ok())
                .ok_or_else(|| SchemaViolation::UnknownDirectiveLocation {
                    directive_name: name.to_string(),
                    rendered: utils::print_safe(location),
                })
        }).collect::<Result<Vec<_>>>()?;

        let arguments = match descriptor.get(keys::ARGS) {
            Some(args) => Argument::create_list(
                &ArgumentOwner::Directive {
                    directive_name: name.to_string(),
                },
                args,
            )?,
            None => vec![],
        };

        Ok(Self {
            arguments,
            description: descriptor.get_str(keys::DESCRIPTION).map(str::to_string),
            is_repeatable: matches!(
                descriptor.get(keys::IS_REPEATABLE),
                Some(ConfigValue::Boolean(true)),
            ),
            locations,
            name,
            source: descriptor,
        })
    }

    /// The builtin `@deprecated` directive.
    pub fn deprecated() -> Arc<Directive> {
        internal_directives().deprecated().to_owned()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The builtin `@include` directive.
    pub fn include() -> Arc<Directive> {
        internal_directives().include().to_owned()
    }

    pub fn is_repeatable(&self) -> bool {
        self.is_repeatable
    }

    /// Indicates if `directive` is one of the builtin directives.
    ///
    /// Directives are identified by name only, so a user-defined directive
    /// named `skip`, `include`, or `deprecated` is reported as builtin too.
    pub fn is_specified(directive: &Directive) -> bool {
        internal_directives().get(directive.name()).is_some()
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        self.locations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The builtin `@skip` directive.
    pub fn skip() -> Arc<Directive> {
        internal_directives().skip().to_owned()
    }

    /// The descriptor this directive was created from. Empty for the builtin
    /// directives.
    pub fn source(&self) -> &Descriptor {
        &self.source
    }

    /// Checks that this directive's name is a valid GraphQL name and that
    /// each of its arguments is uniquely named and valid. Reports the first
    /// violation found.
    pub fn validate(&self, types: &dyn TypeResolver) -> Result<()> {
        utils::validate_name(&self.name).map_err(
            |source| SchemaViolation::InvalidDirectiveName {
                directive_name: self.name.to_string(),
                source,
            }
        )?;

        let owner = ArgumentOwner::Directive {
            directive_name: self.name.to_string(),
        };
        let mut seen_arg_names = HashSet::new();
        for arg in &self.arguments {
            utils::invariant(seen_arg_names.insert(arg.name()), || {
                SchemaViolation::DuplicateArgumentName {
                    argument_name: arg.name().to_string(),
                    owner: owner.to_owned(),
                }
            })?;
            arg.validate(&owner, types)?;
        }

        Ok(())
    }
}
