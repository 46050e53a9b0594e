//! Errors raised while building or emitting an AST.

use miette::Diagnostic;
use thiserror::Error;

/// A plan fragment lacked a name the builders need, or its generated name
/// clashes with another declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum BuildError {
    #[error("{entity} is missing required field '{field}'")]
    #[diagnostic(
        code(sdkgen::build::missing_field),
        help("run `sdkgen check` to locate the incomplete entry in the plan")
    )]
    MissingField { entity: String, field: &'static str },

    #[error("{entity} would declare '{name}', which is already taken")]
    #[diagnostic(
        code(sdkgen::build::name_conflict),
        help("rename the plan entry; generated names must not repeat or shadow built-ins")
    )]
    NameConflict { entity: String, name: String },
}

impl BuildError {
    pub fn missing(entity: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            entity: entity.into(),
            field,
        }
    }

    pub fn conflict(entity: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NameConflict {
            entity: entity.into(),
            name: name.into(),
        }
    }
}

/// A recognized node is missing a field its syntax requires.
///
/// Unknown node kinds never produce this; they degrade to comments.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EmitError {
    #[error("malformed {kind}: missing required field '{field}'")]
    #[diagnostic(code(sdkgen::emit::malformed_node))]
    MalformedNode { kind: String, field: &'static str },
}

impl EmitError {
    pub fn malformed(kind: impl Into<String>, field: &'static str) -> Self {
        Self::MalformedNode {
            kind: kind.into(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            BuildError::missing("methods[2]", "name").to_string(),
            "methods[2] is missing required field 'name'"
        );
        assert_eq!(
            BuildError::conflict("errors[0]", "Error").to_string(),
            "errors[0] would declare 'Error', which is already taken"
        );
        assert_eq!(
            EmitError::malformed("CallExpression", "callee").to_string(),
            "malformed CallExpression: missing required field 'callee'"
        );
    }
}
