use crate::schema::SchemaViolation;
use crate::types::GraphQLType;
use crate::types::TypesMap;
use crate::types::UnionType;

/// Checks that every member of a union names a registered object type.
///
/// https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
pub(super) struct UnionTypeValidator<'a> {
    errors: Vec<SchemaViolation>,
    type_: &'a UnionType,
    types_map: &'a TypesMap,
}
impl<'a> UnionTypeValidator<'a> {
    pub fn new(type_: &'a UnionType, types_map: &'a TypesMap) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<SchemaViolation> {
        let union_type_name = self.type_.name();
        for (member_name, member_ref) in &self.type_.members {
            match member_ref.deref(self.types_map) {
                Ok(GraphQLType::Object(_)) => (),

                Ok(member) => self.errors.push(SchemaViolation::InvalidUnionMemberType {
                    member_kind: member.kind(),
                    member_type_name: member_name.to_string(),
                    union_type_name: union_type_name.to_string(),
                }),

                Err(_) => self.errors.push(SchemaViolation::UndefinedUnionMemberType {
                    undefined_type_name: member_name.to_string(),
                    union_type_name: union_type_name.to_string(),
                }),
            }
        }
        self.errors
    }
}
