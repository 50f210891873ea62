/// The schema element an [`Argument`](crate::types::Argument) is declared
/// on.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentOwner {
    Directive {
        directive_name: String,
    },
    Field {
        field_name: String,
        type_name: String,
    },
    InputObject {
        type_name: String,
    },
}
impl ArgumentOwner {
    /// Renders the qualified path of an argument on this owner:
    /// `Type.field(arg:)`, `@directive(arg:)`, or `InputType.field`.
    pub fn argument_path(&self, argument_name: &str) -> String {
        match self {
            Self::Directive { directive_name } =>
                format!("@{directive_name}({argument_name}:)"),
            Self::Field { field_name, type_name } =>
                format!("{type_name}.{field_name}({argument_name}:)"),
            Self::InputObject { type_name } =>
                format!("{type_name}.{argument_name}"),
        }
    }
}
impl std::fmt::Display for ArgumentOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directive { directive_name } => write!(f, "@{directive_name}"),
            Self::Field { field_name, type_name } => write!(f, "{type_name}.{field_name}"),
            Self::InputObject { type_name } => f.write_str(type_name),
        }
    }
}
