use crate::descriptor::ConfigValue;
use crate::descriptor::Descriptor;
use crate::descriptor::keys;
use crate::schema::SchemaViolation;
use crate::types::ArgumentOwner;
use crate::types::ResolvedType;
use crate::types::TypeRef;
use crate::types::TypeResolutionError;
use crate::types::TypeResolver;
use crate::utils;
use crate::value::Value;

type Result<T> = std::result::Result<T, SchemaViolation>;

/// A named, typed input parameter declared on a field or directive (or an
/// input field of an input object type).
///
/// Arguments are built once from a descriptor and never mutated.
#[derive(Clone, Debug)]
pub struct Argument {
    default_value: Option<Value>,
    deprecation_reason: Option<String>,
    description: Option<String>,
    name: String,
    type_ref: Option<TypeRef>,
}
impl Argument {
    /// Builds a single [`Argument`] declared on `owner` from a descriptor.
    /// The descriptor's `name` entry, if it is a string, takes precedence
    /// over `default_name`.
    pub fn create(
        owner: &ArgumentOwner,
        default_name: &str,
        descriptor: &Descriptor,
    ) -> Result<Self> {
        let name = descriptor.get_str(keys::NAME).unwrap_or(default_name);
        let default_value = match descriptor.get(keys::DEFAULT_VALUE) {
            Some(value) => Some(value.to_value().ok_or_else(
                || SchemaViolation::InvalidArgumentDefaultValue {
                    argument_name: name.to_string(),
                    owner: owner.to_owned(),
                    rendered: utils::print_safe(value),
                }
            )?),
            None => None,
        };

        Ok(Self {
            default_value,
            deprecation_reason:
                descriptor.get_str(keys::DEPRECATION_REASON).map(str::to_string),
            description: descriptor.get_str(keys::DESCRIPTION).map(str::to_string),
            name: name.to_string(),
            type_ref: descriptor.get(keys::TYPE).and_then(ConfigValue::as_type_ref),
        })
    }

    /// Expands an `args` configuration into a list of [`Argument`]s.
    ///
    /// `config` may be a map of argument name to argument descriptor,
    /// pre-built [`Argument`], or bare type; or a list of named argument
    /// descriptors and pre-built [`Argument`]s.
    pub fn create_list(owner: &ArgumentOwner, config: &ConfigValue) -> Result<Vec<Self>> {
        match config {
            ConfigValue::Map(entries) => entries.iter().map(|(arg_name, entry)| {
                Self::from_entry(owner, Some(arg_name.as_str()), arg_name, entry)
            }).collect(),

            ConfigValue::List(entries) => entries.iter().enumerate().map(|(idx, entry)| {
                Self::from_entry(owner, None, &idx.to_string(), entry)
            }).collect(),

            _ => Err(SchemaViolation::InvalidArgumentsConfig {
                owner: owner.to_owned(),
                rendered: utils::print_safe(config),
            }),
        }
    }

    fn from_entry(
        owner: &ArgumentOwner,
        entry_name: Option<&str>,
        key: &str,
        entry: &ConfigValue,
    ) -> Result<Self> {
        let invalid_declaration = || SchemaViolation::InvalidArgumentDeclaration {
            key: key.to_string(),
            owner: owner.to_owned(),
            rendered: utils::print_safe(entry),
        };

        match (entry, entry_name) {
            (ConfigValue::Argument(arg), _) => Ok(arg.as_ref().clone()),

            (ConfigValue::Map(descriptor), Some(entry_name)) =>
                Self::create(owner, entry_name, descriptor),

            (ConfigValue::Map(descriptor), None) => {
                if descriptor.get_str(keys::NAME).is_none() {
                    return Err(invalid_declaration());
                }
                Self::create(owner, "", descriptor)
            },

            (_, Some(entry_name)) => entry.as_type_ref()
                .map(|type_ref| Self::new(entry_name, type_ref))
                .ok_or_else(invalid_declaration),

            (_, None) => Err(invalid_declaration()),
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
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

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            default_value: None,
            deprecation_reason: None,
            description: None,
            name: name.into(),
            type_ref: Some(type_ref),
        }
    }

    pub fn resolve_type(
        &self,
        types: &dyn TypeResolver,
    ) -> std::result::Result<ResolvedType, TypeResolutionError> {
        self.type_ref
            .as_ref()
            .ok_or(TypeResolutionError::MissingType)?
            .resolve(types)
    }

    pub fn type_ref(&self) -> Option<&TypeRef> {
        self.type_ref.as_ref()
    }

    /// Checks the structural invariants of this argument as declared on
    /// `owner`:
    ///
    /// * Its name is a valid, non-reserved GraphQL name.
    /// * Its type resolves, and unwraps to an input type.
    /// * It is not both required (non-null without a default) and deprecated.
    pub fn validate(
        &self,
        owner: &ArgumentOwner,
        types: &dyn TypeResolver,
    ) -> Result<()> {
        utils::validate_name(&self.name).map_err(
            |source| SchemaViolation::InvalidArgumentName {
                argument_name: self.name.to_string(),
                owner: owner.to_owned(),
                source,
            }
        )?;

        let resolved_type = self.resolve_type(types).map_err(
            |source| SchemaViolation::UnresolvableArgumentType {
                argument_name: self.name.to_string(),
                owner: owner.to_owned(),
                source,
            }
        )?;

        // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
        utils::invariant(resolved_type.is_input_type(), || {
            SchemaViolation::InvalidArgumentType {
                argument_name: self.name.to_string(),
                owner: owner.to_owned(),
                rendered_type: resolved_type.to_string(),
            }
        })?;

        let is_required =
            !resolved_type.nullable() && self.default_value.is_none();
        utils::invariant(!(is_required && self.is_deprecated()), || {
            SchemaViolation::DeprecatedRequiredArgument {
                argument_name: self.name.to_string(),
                owner: owner.to_owned(),
            }
        })
    }

    pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
