use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypesMap;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(super) description: Option<String>,
    pub(super) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(super) name: String,
}
impl UnionType {
    /// The description of this [`UnionType`], if one was provided.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each [`GraphQLType`] defined as a member
    /// of this union.
    ///
    /// The order of this `Vec` retains the same ordering as the order in which
    /// members were added to the union type.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of the [`GraphQLType`]s defined as members of this
    /// union. Members not present in `types` are skipped.
    pub fn member_types<'a>(&self, types: &'a TypesMap) -> Vec<&'a GraphQLType> {
        self.members.values()
            .filter_map(|type_ref| type_ref.deref(types).ok())
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new<I, S>(name: impl Into<String>, member_type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            description: None,
            members: member_type_names.into_iter()
                .map(|member_name| (
                    member_name.as_ref().to_string(),
                    NamedGraphQLTypeRef::new(member_name),
                ))
                .collect(),
            name: name.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
