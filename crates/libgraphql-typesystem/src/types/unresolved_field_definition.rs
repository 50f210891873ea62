use crate::descriptor::FieldProducer;
use crate::schema::SchemaViolation;
use crate::types::FieldDeclaration;
use crate::types::FieldDefinition;
use crate::types::FieldKey;
use crate::types::NamedGraphQLTypeRef;
use std::sync::Arc;

/// Upper bound on how many producers may be chained (a producer producing a
/// producer producing ...) while forcing a single field.
const MAX_DEFERRED_FIELD_DEPTH: usize = 32;

/// A field whose definition is produced on demand.
///
/// Declaring a field this way lets a type's field map be built before every
/// type its fields refer to exists (including the type itself). Forcing is
/// not memoized here: the owning [`FieldSlot`](crate::types::FieldSlot)
/// stores the result so the producer runs at most once per field.
#[derive(Clone, Debug)]
pub struct UnresolvedFieldDefinition {
    name: String,
    parent_type: NamedGraphQLTypeRef,
    producer: FieldProducer,
}
impl UnresolvedFieldDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl Into<String>,
        parent_type: NamedGraphQLTypeRef,
        producer: FieldProducer,
    ) -> Self {
        Self {
            name: name.into(),
            parent_type,
            producer,
        }
    }

    pub fn parent_type(&self) -> &NamedGraphQLTypeRef {
        &self.parent_type
    }

    /// Invokes the producer and normalizes its result exactly as a field map
    /// entry keyed by this field's name would be. A producer may itself
    /// produce another producer, up to a fixed nesting depth.
    pub fn resolve(&self) -> Result<Arc<FieldDefinition>, SchemaViolation> {
        self.resolve_at_depth(0)
    }

    pub(super) fn resolve_at_depth(
        &self,
        deferred_depth: usize,
    ) -> Result<Arc<FieldDefinition>, SchemaViolation> {
        let type_name = self.parent_type.name();
        if deferred_depth >= MAX_DEFERRED_FIELD_DEPTH {
            return Err(SchemaViolation::DeferredFieldDepthExceeded {
                field_name: self.name.to_string(),
                max_depth: MAX_DEFERRED_FIELD_DEPTH,
                type_name: type_name.to_string(),
            });
        }

        log::trace!("Forcing the deferred `{type_name}.{}` field.", self.name);
        FieldDeclaration::classify(
            type_name,
            &FieldKey::Name(self.name.to_string()),
            self.producer.produce(),
        )?.into_field_definition_at_depth(type_name, deferred_depth + 1)
    }
}
