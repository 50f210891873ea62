mod directive;
mod directive_location;
mod directive_set;
mod internal_directives;

pub use directive::DEFAULT_DEPRECATION_REASON;
pub use directive::Directive;
pub use directive_location::DirectiveLocation;
pub use directive_location::DirectiveLocationParseError;
pub use directive_set::DirectiveSet;
pub use internal_directives::InternalDirectives;
pub use internal_directives::internal_directives;
#[cfg(test)]
pub(crate) use internal_directives::reset_internal_directives;

#[cfg(test)]
mod tests;
