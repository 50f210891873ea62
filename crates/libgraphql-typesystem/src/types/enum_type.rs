use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
            values: IndexMap::new(),
        }
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// A map from ValueName -> [`EnumValue`], in declaration order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_value(mut self, value: EnumValue) -> Self {
        self.values.insert(value.name.to_string(), value);
        self
    }
}

/// One value of an [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    deprecation_reason: Option<String>,
    description: Option<String>,
    name: String,
}
impl EnumValue {
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

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            deprecation_reason: None,
            description: None,
            name: name.into(),
        }
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
