mod schema;
mod schema_builder;
mod schema_violation;

pub use schema::Schema;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use schema_violation::SchemaViolation;

#[cfg(test)]
mod tests;
