//! The type-definition and validation core of a GraphQL schema.
//!
//! Types are declared from [`descriptor::Descriptor`]s (plain, string-keyed
//! records) and normalized into strongly-typed models. Fields may be declared
//! lazily, and field types may refer to types by name or through a deferred
//! producer, so mutually (and self-) referencing types can be declared in any
//! order. [`schema::SchemaBuilder::build`] runs the validation pass over the
//! whole schema and reports every violation it finds.

pub mod descriptor;
pub mod directives;
mod named_ref;
pub mod schema;
pub mod types;
pub mod utils;
mod value;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use schema::SchemaViolation;
pub use value::ArgumentValues;
pub use value::Value;
