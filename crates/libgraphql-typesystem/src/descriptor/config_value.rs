use crate::descriptor::Callable;
use crate::descriptor::ComplexityEstimator;
use crate::descriptor::Descriptor;
use crate::descriptor::FieldMapper;
use crate::descriptor::FieldProducer;
use crate::descriptor::FieldResolver;
use crate::types::Argument;
use crate::types::FieldDefinition;
use crate::types::TypeRef;
use crate::value::Value;
use std::sync::Arc;

/// Any value a [`Descriptor`] entry may hold.
#[derive(Clone, Debug)]
pub enum ConfigValue {
    Argument(Box<Argument>),
    Boolean(bool),
    Callable(Callable),
    Field(Arc<FieldDefinition>),
    Float(f64),
    Int(i64),
    List(Vec<ConfigValue>),
    Map(Descriptor),
    Null,
    String(String),
    Type(TypeRef),
}
impl ConfigValue {
    pub fn as_callable(&self) -> Option<&Callable> {
        if let Self::Callable(callable) = self {
            Some(callable)
        } else {
            None
        }
    }

    pub fn as_map(&self) -> Option<&Descriptor> {
        if let Self::Map(descriptor) = self {
            Some(descriptor)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Interprets this value as a type reference: either an explicit
    /// [`TypeRef`] or a string naming a type.
    pub fn as_type_ref(&self) -> Option<TypeRef> {
        match self {
            Self::Type(type_ref) => Some(type_ref.clone()),
            Self::String(name) if !name.is_empty() => Some(TypeRef::named(name)),
            _ => None,
        }
    }

    /// Indicates whether this value counts as "empty" when it appears as a
    /// bare field declaration: `null`, `false`, `0`, `0.0`, `""`, `"0"`, or an
    /// empty list.
    pub fn is_empty_value(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Boolean(bool) => !bool,
            Self::Int(int) => *int == 0,
            Self::Float(float) => *float == 0.0,
            Self::String(str) => str.is_empty() || str == "0",
            Self::List(list) => list.is_empty(),
            Self::Argument(_)
            | Self::Callable(_)
            | Self::Field(_)
            | Self::Map(_)
            | Self::Type(_) => false,
        }
    }

    /// Indicates whether this value is a structured list (a list or a
    /// string-keyed map), as required for `args` and `locations` entries.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Converts the plain-data portion of this value into a [`Value`].
    /// Returns `None` if any part of it is not plain data.
    pub fn to_value(&self) -> Option<Value> {
        Some(match self {
            Self::Null => Value::Null,
            Self::Boolean(bool) => Value::Bool(*bool),
            Self::Int(int) => Value::Int(*int),
            Self::Float(float) => Value::Float(*float),
            Self::String(str) => Value::String(str.to_string()),
            Self::List(list) => Value::List(
                list.iter()
                    .map(ConfigValue::to_value)
                    .collect::<Option<Vec<_>>>()?,
            ),
            Self::Map(descriptor) => Value::Object(
                descriptor.iter()
                    .map(|(key, value)| Some((key.to_string(), value.to_value()?)))
                    .collect::<Option<_>>()?,
            ),
            Self::Argument(_)
            | Self::Callable(_)
            | Self::Field(_)
            | Self::Type(_) => return None,
        })
    }
}
impl std::convert::From<Argument> for ConfigValue {
    fn from(value: Argument) -> Self {
        Self::Argument(Box::new(value))
    }
}
impl std::convert::From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<Callable> for ConfigValue {
    fn from(value: Callable) -> Self {
        Self::Callable(value)
    }
}
impl std::convert::From<ComplexityEstimator> for ConfigValue {
    fn from(value: ComplexityEstimator) -> Self {
        Self::Callable(Callable::Complexity(value))
    }
}
impl std::convert::From<Descriptor> for ConfigValue {
    fn from(value: Descriptor) -> Self {
        Self::Map(value)
    }
}
impl std::convert::From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<FieldDefinition> for ConfigValue {
    fn from(value: FieldDefinition) -> Self {
        Self::Field(Arc::new(value))
    }
}
impl std::convert::From<Arc<FieldDefinition>> for ConfigValue {
    fn from(value: Arc<FieldDefinition>) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<FieldMapper> for ConfigValue {
    fn from(value: FieldMapper) -> Self {
        Self::Callable(Callable::Mapper(value))
    }
}
impl std::convert::From<FieldProducer> for ConfigValue {
    fn from(value: FieldProducer) -> Self {
        Self::Callable(Callable::FieldProducer(value))
    }
}
impl std::convert::From<FieldResolver> for ConfigValue {
    fn from(value: FieldResolver) -> Self {
        Self::Callable(Callable::Resolver(value))
    }
}
impl std::convert::From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<TypeRef> for ConfigValue {
    fn from(value: TypeRef) -> Self {
        Self::Type(value)
    }
}
impl std::convert::From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(bool) => Self::Boolean(bool),
            Value::Int(int) => Self::Int(int),
            Value::Float(float) => Self::Float(float),
            Value::String(str) => Self::String(str),
            Value::List(list) => Self::List(
                list.into_iter().map(ConfigValue::from).collect(),
            ),
            Value::Object(entries) => Self::Map(entries.into_iter().collect()),
        }
    }
}
impl<T: Into<ConfigValue>> std::convert::From<Vec<T>> for ConfigValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}
