use crate::schema::SchemaViolation;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypesMap;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<SchemaViolation>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a TypesMap,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a TypesMap,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<SchemaViolation> {
        let type_name = self.type_.name();
        let fields = match self.type_.fields() {
            Ok(fields) => fields,
            Err(err) => {
                self.errors.push(err);
                return self.errors;
            },
        };

        // Forcing every lazily declared field here means any type a field
        // refers to must be registered by the time the schema is built.
        let (fields, mut force_errors) = fields.force_all();
        self.errors.append(&mut force_errors);

        // Each field reports (at most) its own first violation.
        for field in fields {
            if let Err(err) = field.validate(type_name, self.types_map) {
                self.errors.push(err);
            }
        }

        self.errors
    }
}
