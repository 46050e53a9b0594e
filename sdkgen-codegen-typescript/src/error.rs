use miette::Diagnostic;
use sdkgen_codegen::{BuildError, EmitError};
use thiserror::Error;

/// Failure turning a plan into source text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Emit(#[from] EmitError),
}
