mod callables;
mod config_value;
#[allow(clippy::module_inception)]
mod descriptor;

pub use callables::Callable;
pub use callables::ComplexityEstimator;
pub use callables::FieldMapper;
pub use callables::FieldProducer;
pub use callables::FieldResolver;
pub use config_value::ConfigValue;
pub use descriptor::Descriptor;

/// Well-known [`Descriptor`] keys.
pub mod keys {
    pub const ARGS: &str = "args";
    pub const COMPLEXITY: &str = "complexity";
    pub const DEFAULT_VALUE: &str = "defaultValue";
    pub const DEPRECATION_REASON: &str = "deprecationReason";
    pub const DESCRIPTION: &str = "description";
    /// Legacy flag that is rejected during validation in favor of
    /// [`DEPRECATION_REASON`].
    pub const IS_DEPRECATED: &str = "isDeprecated";
    pub const IS_REPEATABLE: &str = "isRepeatable";
    pub const LOCATIONS: &str = "locations";
    pub const MAP: &str = "map";
    pub const NAME: &str = "name";
    pub const RESOLVE: &str = "resolve";
    pub const TYPE: &str = "type";
}

#[cfg(test)]
mod tests;
