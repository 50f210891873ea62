use crate::descriptor::ConfigValue;
use crate::value::ArgumentValues;
use crate::value::Value;
use std::sync::Arc;

/// Resolves a field's value for one parent value at a time.
#[derive(Clone)]
pub struct FieldResolver(Arc<dyn Fn(&Value, &ArgumentValues) -> Value + Send + Sync>);
impl FieldResolver {
    pub fn new(
        f: impl Fn(&Value, &ArgumentValues) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, parent: &Value, args: &ArgumentValues) -> Value {
        (self.0)(parent, args)
    }
}
impl std::fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FieldResolver(..)")
    }
}

/// Resolves a field's values for a whole batch of parent values at once. The
/// returned list is positionally aligned with the given parents.
#[derive(Clone)]
pub struct FieldMapper(Arc<dyn Fn(&[Value], &ArgumentValues) -> Vec<Value> + Send + Sync>);
impl FieldMapper {
    pub fn new(
        f: impl Fn(&[Value], &ArgumentValues) -> Vec<Value> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, parents: &[Value], args: &ArgumentValues) -> Vec<Value> {
        (self.0)(parents, args)
    }
}
impl std::fmt::Debug for FieldMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FieldMapper(..)")
    }
}

/// Estimates the cost of selecting a field given the summed complexity of
/// its child selections and its resolved argument values.
#[derive(Clone)]
pub struct ComplexityEstimator(Arc<dyn Fn(u64, &ArgumentValues) -> u64 + Send + Sync>);
impl ComplexityEstimator {
    pub fn new(
        f: impl Fn(u64, &ArgumentValues) -> u64 + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, child_complexity: u64, args: &ArgumentValues) -> u64 {
        (self.0)(child_complexity, args)
    }
}
impl std::fmt::Debug for ComplexityEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ComplexityEstimator(..)")
    }
}

/// Zero-argument producer of a single field declaration (a [`Descriptor`],
/// a [`FieldDefinition`], a bare type, or another [`FieldProducer`]).
///
/// Producers let a field map be declared before every type it references
/// exists.
///
/// [`Descriptor`]: crate::descriptor::Descriptor
/// [`FieldDefinition`]: crate::types::FieldDefinition
#[derive(Clone)]
pub struct FieldProducer(Arc<dyn Fn() -> ConfigValue + Send + Sync>);
impl FieldProducer {
    pub fn new(f: impl Fn() -> ConfigValue + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn produce(&self) -> ConfigValue {
        (self.0)()
    }
}
impl std::fmt::Debug for FieldProducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FieldProducer(..)")
    }
}

/// The callables a [`ConfigValue`] may carry.
#[derive(Clone, Debug)]
pub enum Callable {
    Complexity(ComplexityEstimator),
    FieldProducer(FieldProducer),
    Mapper(FieldMapper),
    Resolver(FieldResolver),
}
impl Callable {
    /// A short, human-readable name for the kind of callable this is.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Complexity(_) => "complexity estimator",
            Self::FieldProducer(_) => "field producer",
            Self::Mapper(_) => "mapper",
            Self::Resolver(_) => "resolver",
        }
    }
}
