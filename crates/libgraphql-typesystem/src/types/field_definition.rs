use crate::descriptor::Callable;
use crate::descriptor::ComplexityEstimator;
use crate::descriptor::ConfigValue;
use crate::descriptor::Descriptor;
use crate::descriptor::FieldMapper;
use crate::descriptor::FieldResolver;
use crate::descriptor::keys;
use crate::schema::SchemaViolation;
use crate::types::Argument;
use crate::types::ArgumentOwner;
use crate::types::FieldResolution;
use crate::types::ResolvedType;
use crate::types::TypeRef;
use crate::types::TypeResolutionError;
use crate::types::TypeResolver;
use crate::utils;
use crate::value::ArgumentValues;
use std::collections::HashSet;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, SchemaViolation>;

/// The normalized definition of one field on an object or interface type.
///
/// A [`FieldDefinition`] is immutable once created, except that its output
/// type is resolved lazily (see [`FieldDefinition::resolve_type`]) and
/// cached for the lifetime of the definition.
#[derive(Debug)]
pub struct FieldDefinition {
    arguments: Vec<Argument>,
    complexity: Option<ComplexityEstimator>,
    deprecation_reason: Option<String>,
    description: Option<String>,
    name: String,
    resolution: FieldResolution,
    resolved_type: OnceLock<ResolvedType>,
    source: Descriptor,
    type_ref: Option<TypeRef>,
}
impl FieldDefinition {
    /// The arguments declared on this field, in declaration order.
    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name() == name)
    }

    /// Estimates the cost of selecting this field. Without a
    /// [`ComplexityEstimator`] the cost is `child_complexity + 1`.
    pub fn complexity(&self, child_complexity: u64, args: &ArgumentValues) -> u64 {
        match &self.complexity {
            Some(estimator) => estimator.call(child_complexity, args),
            None => child_complexity.saturating_add(1),
        }
    }

    pub fn complexity_estimator(&self) -> Option<&ComplexityEstimator> {
        self.complexity.as_ref()
    }

    /// Builds a [`FieldDefinition`] for a field of `parent_type_name` from a
    /// field descriptor.
    ///
    /// The name is not validated here; see [`FieldDefinition::validate`].
    pub fn create(parent_type_name: &str, descriptor: Descriptor) -> Result<Self> {
        let name = descriptor.get_str(keys::NAME).unwrap_or_default().to_string();

        let arguments = match descriptor.get(keys::ARGS) {
            Some(args) => Argument::create_list(
                &ArgumentOwner::Field {
                    field_name: name.to_string(),
                    type_name: parent_type_name.to_string(),
                },
                args,
            )?,
            None => vec![],
        };

        let resolver = match descriptor.get(keys::RESOLVE) {
            Some(ConfigValue::Callable(Callable::Resolver(resolver))) => Some(resolver),
            _ => None,
        };
        let mapper = match descriptor.get(keys::MAP) {
            Some(ConfigValue::Callable(Callable::Mapper(mapper))) => Some(mapper),
            _ => None,
        };
        let resolution = match (resolver, mapper) {
            (Some(_), Some(_)) =>
                return Err(SchemaViolation::ConflictingFieldResolution {
                    field_name: name,
                    type_name: parent_type_name.to_string(),
                }),
            (Some(resolver), None) => FieldResolution::PerItem(resolver.to_owned()),
            (None, Some(mapper)) => FieldResolution::Batched(mapper.to_owned()),
            (None, None) => FieldResolution::Default,
        };

        let complexity = match descriptor.get(keys::COMPLEXITY) {
            Some(ConfigValue::Callable(Callable::Complexity(estimator))) =>
                Some(estimator.to_owned()),
            _ => None,
        };

        Ok(Self {
            arguments,
            complexity,
            deprecation_reason:
                descriptor.get_str(keys::DEPRECATION_REASON).map(str::to_string),
            description: descriptor.get_str(keys::DESCRIPTION).map(str::to_string),
            name,
            resolution,
            resolved_type: OnceLock::new(),
            type_ref: descriptor.get(keys::TYPE).and_then(ConfigValue::as_type_ref),
            source: descriptor,
        })
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn mapper(&self) -> Option<&FieldMapper> {
        self.resolution.as_mapper()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn resolution(&self) -> &FieldResolution {
        &self.resolution
    }

    /// Resolves (at most once) and returns this field's output type.
    ///
    /// The raw type reference may be a name, an already-constructed type, or
    /// a deferred producer, so a field may refer to a type that did not exist
    /// when the field was declared, including the type that owns the field.
    /// A failed resolution is not cached.
    pub fn resolve_type(
        &self,
        types: &dyn TypeResolver,
    ) -> std::result::Result<&ResolvedType, TypeResolutionError> {
        if let Some(resolved_type) = self.resolved_type.get() {
            return Ok(resolved_type);
        }

        let resolved_type =
            self.type_ref
                .as_ref()
                .ok_or(TypeResolutionError::MissingType)?
                .resolve(types)?;
        log::trace!(
            "Resolved the type of the `{}` field as `{resolved_type}`.",
            self.name,
        );

        // If another thread won the race, its (equivalent) result is kept.
        Ok(self.resolved_type.get_or_init(|| resolved_type))
    }

    pub fn resolver(&self) -> Option<&FieldResolver> {
        self.resolution.as_resolver()
    }

    /// The descriptor this definition was created from.
    pub fn source(&self) -> &Descriptor {
        &self.source
    }

    pub fn type_ref(&self) -> Option<&TypeRef> {
        self.type_ref.as_ref()
    }

    /// Checks the structural invariants of this field as declared on the type
    /// named `parent_type_name`, reporting the first violation found.
    pub fn validate(
        &self,
        parent_type_name: &str,
        types: &dyn TypeResolver,
    ) -> Result<()> {
        utils::validate_name(&self.name).map_err(
            |source| SchemaViolation::InvalidFieldName {
                field_name: self.name.to_string(),
                type_name: parent_type_name.to_string(),
                source,
            }
        )?;

        utils::invariant(!self.source.contains_key(keys::IS_DEPRECATED), || {
            SchemaViolation::LegacyIsDeprecatedFlag {
                field_name: self.name.to_string(),
                type_name: parent_type_name.to_string(),
            }
        })?;

        let resolved_type = self.resolve_type(types).map_err(
            |source| SchemaViolation::UnresolvableFieldType {
                field_name: self.name.to_string(),
                type_name: parent_type_name.to_string(),
                source,
            }
        )?;

        // https://spec.graphql.org/October2021/#sel-IAHZhCHCDEEFAAADHD8Cxob
        utils::invariant(resolved_type.is_output_type(), || {
            SchemaViolation::InvalidOutputFieldType {
                field_name: self.name.to_string(),
                rendered_type: utils::print_safe(
                    self.source.get(keys::TYPE).unwrap_or(&ConfigValue::Null),
                ),
                type_name: parent_type_name.to_string(),
            }
        })?;

        self.validate_callable(parent_type_name, keys::RESOLVE, "resolver")?;
        self.validate_callable(parent_type_name, keys::MAP, "mapper")?;
        self.validate_callable(parent_type_name, keys::COMPLEXITY, "complexity estimator")?;

        let owner = ArgumentOwner::Field {
            field_name: self.name.to_string(),
            type_name: parent_type_name.to_string(),
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

    /// The descriptor entry at `key`, if present, must hold the callable kind
    /// the `role` requires.
    fn validate_callable(
        &self,
        parent_type_name: &str,
        key: &str,
        role: &'static str,
    ) -> Result<()> {
        let Some(value) = self.source.get(key) else {
            return Ok(());
        };
        let is_expected_callable = matches!(
            (key, value),
            (keys::RESOLVE, ConfigValue::Callable(Callable::Resolver(_)))
            | (keys::MAP, ConfigValue::Callable(Callable::Mapper(_)))
            | (keys::COMPLEXITY, ConfigValue::Callable(Callable::Complexity(_)))
        );
        utils::invariant(is_expected_callable, || {
            SchemaViolation::InvalidFieldCallable {
                field_name: self.name.to_string(),
                rendered: utils::print_safe(value),
                role,
                type_name: parent_type_name.to_string(),
            }
        })
    }
}
