use crate::schema::SchemaViolation;
use crate::types::ArgumentOwner;
use crate::types::InputObjectType;
use crate::types::TypesMap;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<SchemaViolation>,
    type_: &'a InputObjectType,
    types_map: &'a TypesMap,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a TypesMap,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<SchemaViolation> {
        let owner = ArgumentOwner::InputObject {
            type_name: self.type_.name().to_string(),
        };

        // Input object fields can only be declared with input types.
        //
        // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
        for field in self.type_.fields().values() {
            if let Err(err) = field.validate(&owner, self.types_map) {
                self.errors.push(err);
            }
        }

        self.errors
    }
}
