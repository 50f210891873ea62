use crate::descriptor::ConfigValue;
use indexmap::IndexMap;

/// A plain, string-keyed record describing a field, argument, or directive
/// before it is normalized into its model object.
///
/// Entries retain insertion order.
#[derive(Clone, Debug, Default)]
pub struct Descriptor(IndexMap<String, ConfigValue>);
impl Descriptor {
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Returns the entry at `key` if it holds a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(ConfigValue::as_str)
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ConfigValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style [`Descriptor::insert`].
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Self {
        self.insert(key, value);
        self
    }
}
impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for Descriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
impl IntoIterator for Descriptor {
    type Item = (String, ConfigValue);
    type IntoIter = indexmap::map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a Descriptor {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = indexmap::map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
