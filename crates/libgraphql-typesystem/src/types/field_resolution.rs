use crate::descriptor::FieldMapper;
use crate::descriptor::FieldResolver;

/// How a field's value is produced at execution time.
///
/// A field is resolved either one parent value at a time or as a batch over
/// all parent values, never both.
#[derive(Clone, Debug, Default)]
pub enum FieldResolution {
    /// No resolver was provided; the executor's default resolution applies.
    #[default]
    Default,
    Batched(FieldMapper),
    PerItem(FieldResolver),
}
impl FieldResolution {
    pub fn as_mapper(&self) -> Option<&FieldMapper> {
        if let Self::Batched(mapper) = self {
            Some(mapper)
        } else {
            None
        }
    }

    pub fn as_resolver(&self) -> Option<&FieldResolver> {
        if let Self::PerItem(resolver) = self {
            Some(resolver)
        } else {
            None
        }
    }
}
