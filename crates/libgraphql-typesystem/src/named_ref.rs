use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a "resource"
/// (`TResource`) stored within some other data-store without holding an
/// explicit reference to that data-store. De-referencing a [`NamedRef`] is
/// done via [`NamedRef::deref()`] by providing an explicit reference to the
/// store.
///
/// `TResource` types implement [`DerefByName`], which names the store type
/// (`DerefByName::Source`) and performs the by-name lookup.
///
/// As a more concrete example, [`crate::types::ResolvedType`] stores a
/// `NamedRef<GraphQLType>` for its innermost named type rather than an
/// `Arc<GraphQLType>`. A type whose field refers back to the type itself
/// (`type Person { friends: [Person] }`) therefore never forms a reference
/// cycle: the field's resolved type is just a name plus the kind of type it
/// names, dereferenced against the schema when the full type is needed.
pub struct NamedRef<TResource: DerefByName> {
    name: String,
    phantom: PhantomData<fn() -> TResource>,
}
impl<TResource: DerefByName> NamedRef<TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TResource::Source,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl AsRef<str>) -> NamedRef<TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }
}
impl<TResource: DerefByName> Clone for NamedRef<TResource> {
    fn clone(&self) -> Self {
        Self::new(self.name.as_str())
    }
}
impl<TResource: DerefByName> std::fmt::Debug for NamedRef<TResource> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NamedRef").field(&self.name).finish()
    }
}
impl<TResource: DerefByName> PartialEq for NamedRef<TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of [`NamedRef<T>`] for that type.
pub trait DerefByName {
    type Source: ?Sized;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str) -> NamedRef<Self> where Self: Sized {
        NamedRef::<Self>::new(name)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No definition named `{0}` could be found")]
    DanglingReference(String),
}
